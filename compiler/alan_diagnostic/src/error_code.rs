//! Codes for every documented diagnostic.
//!
//! `E` codes are errors, `W` codes are warnings. The first digit is the
//! phase (0 = lexer). Used by `alanc explain`.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unrecognized character
    E0001,
    /// `!` not followed by `=`
    E0002,
    /// Unterminated block comment
    W0001,
    /// Tokens after the last `$` were discarded
    W0002,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::W0001,
        ErrorCode::W0002,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::W0001 => "W0001",
            ErrorCode::W0002 => "W0002",
        }
    }

    pub fn is_warning(&self) -> bool {
        self.as_str().starts_with('W')
    }

    /// Long-form explanation shown by `alanc explain`.
    pub fn explanation(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => {
                "The lexer found a character that is not part of the language.\n\
                 \n\
                 Alan source may contain only lower-case letters, digits, \
                 whitespace, the symbols `{ } ( ) \" = + $`, the operators \
                 `==` and `!=`, and `/* ... */` comments. The character is \
                 skipped and scanning continues, but the enclosing program \
                 fails.\n\
                 \n\
                 Example:\n\
                 \n\
                 \x20   a @ b$      // `@` is not recognized"
            }
            ErrorCode::E0002 => {
                "A `!` must be followed immediately by `=` to form the \
                 not-equal operator `!=`. There is no unary `!`.\n\
                 \n\
                 Example:\n\
                 \n\
                 \x20   if (a ! b) {}$      // write `a != b`"
            }
            ErrorCode::W0001 => {
                "A `/*` comment was never closed with `*/`. Everything from \
                 the opening marker to the end of the file was ignored, \
                 including any `$` markers, so programs after the comment \
                 were not produced."
            }
            ErrorCode::W0002 => {
                "Tokens were found after the last `$`. Every program must end \
                 with `$`; the trailing tokens do not form a program and were \
                 discarded."
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse an error code string like `"E0001"` or `"w0002"`.
///
/// Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
