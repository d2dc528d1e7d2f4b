//! The `explain` command: display documentation for diagnostic codes.

use alan_diagnostic::ErrorCode;

/// Heading plus long-form text for a code string, or `None` if unknown.
///
/// Codes are matched case-insensitively (`e0001` works).
pub fn explanation_for(code_str: &str) -> Option<String> {
    let code = code_str.parse::<ErrorCode>().ok()?;
    let kind = if code.is_warning() { "warning" } else { "error" };
    Some(format!("{kind}[{code}]\n\n{}", code.explanation()))
}

/// Print the explanation for `code_str`, exiting with status 1 if unknown.
pub fn explain_error(code_str: &str) {
    let Some(text) = explanation_for(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes have the format EXXXX (errors) or WXXXX (warnings) where X is a digit.");
        let known: Vec<_> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
        eprintln!("Known codes: {}", known.join(", "));
        std::process::exit(1);
    };
    println!("{text}");
}
