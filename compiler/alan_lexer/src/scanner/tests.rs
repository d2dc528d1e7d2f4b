use crate::lex;
use crate::{LexErrorKind, LexOutput};
use alan_diagnostic::queue::DiagnosticQueue;
use alan_diagnostic::{ErrorCode, Severity};
use alan_ir::{Position, Program, TokenKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use TokenKind::{
    Assign, CloseBlock, CloseParen, Digit, Eop, Equal, Id, Int, NotEqual, OpenBlock, OpenParen,
    Plus, Print, Quote,
};

/// Helper: lex and keep every diagnostic.
fn scan(source: &str) -> (LexOutput, DiagnosticQueue) {
    let mut queue = DiagnosticQueue::new();
    let output = lex(source, &mut queue);
    (output, queue)
}

/// Helper: `(kind, lexeme)` pairs of one program.
fn pairs(program: &Program) -> Vec<(TokenKind, &str)> {
    program
        .iter()
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect()
}

/// Helper: `(line, column)` of every token in one program.
fn positions(program: &Program) -> Vec<(u32, u32)> {
    program.iter().map(|t| (t.line(), t.column())).collect()
}

/// Helper: lex a source expected to hold exactly one program.
fn single_program(source: &str) -> Program {
    let (mut output, _) = scan(source);
    assert_eq!(output.programs.len(), 1, "expected one program in {source:?}");
    output.programs.remove(0)
}

// ─── Scenarios ─────────────────────────────────────────────────────

#[test]
fn declaration_and_assignment() {
    let (output, queue) = scan("int a = 5$");
    assert_eq!(output.programs.len(), 1);
    let program = &output.programs[0];
    assert_eq!(
        pairs(program),
        vec![(Int, "int"), (Id, "a"), (Assign, "="), (Digit, "5"), (Eop, "$")]
    );
    assert_eq!(positions(program), vec![(1, 1), (1, 5), (1, 7), (1, 9), (1, 10)]);
    assert_eq!(program.number, 1);
    assert_eq!(program.error_count, 0);
    assert_eq!(queue.error_count(), 0);
}

#[test]
fn two_programs_with_comparisons() {
    let (output, _) = scan("a == b$ c != d$");
    assert_eq!(output.programs.len(), 2);
    assert_eq!(
        pairs(&output.programs[0]),
        vec![(Id, "a"), (Equal, "=="), (Id, "b"), (Eop, "$")]
    );
    assert_eq!(
        pairs(&output.programs[1]),
        vec![(Id, "c"), (NotEqual, "!="), (Id, "d"), (Eop, "$")]
    );
    assert_eq!(output.programs[1].number, 2);
    assert!(output.programs.iter().all(Program::is_ok));
}

#[test]
fn unrecognized_character_is_skipped() {
    let (output, queue) = scan("a @ b$");
    let program = &output.programs[0];
    assert_eq!(pairs(program), vec![(Id, "a"), (Id, "b"), (Eop, "$")]);
    assert_eq!(program.error_count, 1);

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].position, Position::new(1, 3));
    assert_eq!(
        output.errors[0].kind,
        LexErrorKind::UnrecognizedChar { found: '@' }
    );

    let messages: Vec<_> = queue
        .diagnostics()
        .iter()
        .map(|d| (d.severity, d.to_string()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (Severity::Info, "Lexing program 1...".to_string()),
            (Severity::Trace, "ID [ a ] found at (1:1)".to_string()),
            (
                Severity::Error,
                "unrecognized character `@` at (1:3)".to_string()
            ),
            (Severity::Trace, "ID [ b ] found at (1:5)".to_string()),
            (Severity::Trace, "EOP [ $ ] found at (1:6)".to_string()),
            (Severity::Error, "Lex failed with 1 error(s)".to_string()),
        ]
    );
}

#[test]
fn comment_before_identifier() {
    let program = single_program("/* x */a$");
    assert_eq!(pairs(&program), vec![(Id, "a"), (Eop, "$")]);
    assert_eq!(positions(&program), vec![(1, 8), (1, 9)]);
}

#[test]
fn print_call() {
    let program = single_program("print(a)$");
    assert_eq!(
        pairs(&program),
        vec![
            (Print, "print"),
            (OpenParen, "("),
            (Id, "a"),
            (CloseParen, ")"),
            (Eop, "$")
        ]
    );
}

// ─── Words ─────────────────────────────────────────────────────────

#[test]
fn all_keywords() {
    let program = single_program("print while if int string boolean true false$");
    let kinds: Vec<_> = program.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            Print,
            TokenKind::While,
            TokenKind::If,
            Int,
            TokenKind::String,
            TokenKind::Boolean,
            TokenKind::True,
            TokenKind::False,
            Eop
        ]
    );
}

#[test]
fn multi_letter_identifiers_are_accepted() {
    let program = single_program("abc printx intint$");
    assert_eq!(
        pairs(&program),
        vec![(Id, "abc"), (Id, "printx"), (Id, "intint"), (Eop, "$")]
    );
    assert!(program.is_ok());
}

#[test]
fn words_split_on_non_letters() {
    let program = single_program("int7a{b}$");
    assert_eq!(
        pairs(&program),
        vec![
            (Int, "int"),
            (Digit, "7"),
            (Id, "a"),
            (OpenBlock, "{"),
            (Id, "b"),
            (CloseBlock, "}"),
            (Eop, "$")
        ]
    );
}

#[test]
fn uppercase_letters_are_not_letters() {
    let (output, _) = scan("aBc$");
    let program = &output.programs[0];
    assert_eq!(pairs(program), vec![(Id, "a"), (Id, "c"), (Eop, "$")]);
    assert_eq!(
        output.errors[0].kind,
        LexErrorKind::UnrecognizedChar { found: 'B' }
    );
    assert_eq!(output.errors[0].position, Position::new(1, 2));
}

#[test]
fn word_at_end_of_input_is_flushed_but_discarded() {
    let (output, _) = scan("a$ while");
    assert_eq!(output.programs.len(), 1);
    assert_eq!(output.discarded.len(), 1);
    assert_eq!(output.discarded[0].kind, TokenKind::While);
    assert_eq!(output.discarded[0].position, Position::new(1, 4));
}

// ─── Operators and symbols ─────────────────────────────────────────

#[test]
fn digits_are_single_tokens() {
    let program = single_program("123$");
    assert_eq!(
        pairs(&program),
        vec![(Digit, "1"), (Digit, "2"), (Digit, "3"), (Eop, "$")]
    );
    assert_eq!(positions(&program), vec![(1, 1), (1, 2), (1, 3), (1, 4)]);
}

#[test]
fn int_expression() {
    let program = single_program("1+2+a$");
    assert_eq!(
        pairs(&program),
        vec![
            (Digit, "1"),
            (Plus, "+"),
            (Digit, "2"),
            (Plus, "+"),
            (Id, "a"),
            (Eop, "$")
        ]
    );
}

#[test]
fn triple_equals_is_equal_then_assign() {
    let program = single_program("===$");
    assert_eq!(pairs(&program), vec![(Equal, "=="), (Assign, "="), (Eop, "$")]);
    assert_eq!(positions(&program), vec![(1, 1), (1, 3), (1, 4)]);
}

#[test]
fn bang_equal_equal() {
    let program = single_program("!==$");
    assert_eq!(pairs(&program), vec![(NotEqual, "!="), (Assign, "="), (Eop, "$")]);
}

#[test]
fn lone_bang_is_an_error_without_a_token() {
    let (output, queue) = scan("a ! b$");
    let program = &output.programs[0];
    assert_eq!(pairs(program), vec![(Id, "a"), (Id, "b"), (Eop, "$")]);
    assert_eq!(program.error_count, 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::ExpectedEqAfterBang);
    assert_eq!(output.errors[0].position, Position::new(1, 3));
    let code = queue
        .with_severity(Severity::Error)
        .next()
        .and_then(|d| d.code);
    assert_eq!(code, Some(ErrorCode::E0002));
}

#[test]
fn bang_at_end_of_input() {
    let (output, _) = scan("!");
    assert!(output.programs.is_empty());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::ExpectedEqAfterBang);
    assert!(output.discarded.is_empty());
}

#[test]
fn quotes_do_not_start_a_string_mode() {
    let program = single_program("\"ab c\"$");
    assert_eq!(
        pairs(&program),
        vec![(Quote, "\""), (Id, "ab"), (Id, "c"), (Quote, "\""), (Eop, "$")]
    );
}

#[test]
fn full_block_program() {
    let source = "{\n  int a\n  a = 1\n  while (a != 5) {\n    a = 1 + a\n  }\n  print(a)\n}$";
    let program = single_program(source);
    assert!(program.is_ok());
    assert_eq!(program.len(), 25);
    let last_brace = &program.tokens[23];
    assert_eq!(last_brace.kind, CloseBlock);
    assert_eq!(last_brace.position, Position::new(8, 1));
    let eop = &program.tokens[24];
    assert_eq!(eop.position, Position::new(8, 2));
}

// ─── Comments ──────────────────────────────────────────────────────

#[test]
fn comment_open_flushes_pending_word() {
    let program = single_program("ab/*c*/d$");
    assert_eq!(pairs(&program), vec![(Id, "ab"), (Id, "d"), (Eop, "$")]);
}

#[test]
fn comment_hides_everything() {
    let (output, queue) = scan("/* @ ! $ int 42 */ a$");
    assert_eq!(pairs(&output.programs[0]), vec![(Id, "a"), (Eop, "$")]);
    assert!(output.errors.is_empty());
    assert!(!queue.has_errors());
}

#[test]
fn multi_line_comment_keeps_positions() {
    let program = single_program("/* one\ntwo\n*/ a$");
    assert_eq!(positions(&program), vec![(3, 4), (3, 5)]);
}

#[test]
fn empty_comment() {
    let program = single_program("/**/a$");
    assert_eq!(pairs(&program), vec![(Id, "a"), (Eop, "$")]);
}

#[test]
fn comments_do_not_nest() {
    let (output, _) = scan("/* /* */ a$");
    assert_eq!(pairs(&output.programs[0]), vec![(Id, "a"), (Eop, "$")]);
}

#[test]
fn stray_slash_and_star_are_errors() {
    let (output, _) = scan("a / b */$");
    let found: Vec<_> = output
        .errors
        .iter()
        .map(|e| (e.kind, e.position.column))
        .collect();
    assert_eq!(
        found,
        vec![
            (LexErrorKind::UnrecognizedChar { found: '/' }, 3),
            (LexErrorKind::UnrecognizedChar { found: '*' }, 7),
            (LexErrorKind::UnrecognizedChar { found: '/' }, 8),
        ]
    );
    assert_eq!(output.programs[0].error_count, 3);
}

#[test]
fn unterminated_comment_warns_once() {
    let (output, queue) = scan("a$ /* b $");
    assert_eq!(output.programs.len(), 1);
    assert!(output.discarded.is_empty());

    let warnings: Vec<_> = queue.with_severity(Severity::Warning).collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, Some(ErrorCode::W0001));
    assert_eq!(warnings[0].position, Some(Position::new(1, 4)));
}

#[test]
fn unterminated_comment_swallows_pending_program() {
    let (output, queue) = scan("int a /* never closed\n$");
    assert!(output.programs.is_empty());
    assert_eq!(
        output.discarded.iter().map(|t| t.kind).collect::<Vec<_>>(),
        vec![Int, Id]
    );
    assert_eq!(queue.warning_count(), 1);
}

#[test]
fn unterminated_comment_does_not_flush_a_word() {
    let (output, _) = scan("/*abc");
    assert!(output.discarded.is_empty());
    assert!(output.errors.is_empty());
}

// ─── Programs ──────────────────────────────────────────────────────

#[test]
fn no_marker_no_programs() {
    let (output, queue) = scan("int a = 5");
    assert!(output.programs.is_empty());
    assert_eq!(output.discarded.len(), 4);
    assert!(queue.with_severity(Severity::Warning).next().is_none());
}

#[test]
fn empty_program() {
    let program = single_program("$");
    assert_eq!(pairs(&program), vec![(Eop, "$")]);
}

#[test]
fn error_counts_are_per_program() {
    let (output, queue) = scan("@ # a$ b$ !c$");
    let counts: Vec<_> = output.programs.iter().map(|p| p.error_count).collect();
    assert_eq!(counts, vec![2, 0, 1]);

    let statuses: Vec<_> = queue
        .diagnostics()
        .iter()
        .filter(|d| d.message.starts_with("Lex "))
        .map(|d| (d.severity, d.message.as_str()))
        .collect();
    assert_eq!(
        statuses,
        vec![
            (Severity::Error, "Lex failed with 2 error(s)"),
            (Severity::Info, "Lex completed with 0 errors"),
            (Severity::Error, "Lex failed with 1 error(s)"),
        ]
    );

    let programs: Vec<_> = output.errors.iter().map(|e| e.program).collect();
    assert_eq!(programs, vec![1, 1, 3]);
}

#[test]
fn errors_after_last_marker_are_kept() {
    let (output, _) = scan("a$ @");
    assert_eq!(output.programs.len(), 1);
    assert!(output.programs[0].is_ok());
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].program, 2);
}

#[test]
fn start_notice_only_for_programs_with_content() {
    let (_, queue) = scan("a$ \n /* tail */ \n");
    let notices: Vec<_> = queue
        .with_severity(Severity::Info)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(
        notices,
        vec!["Lexing program 1...", "Lex completed with 0 errors"]
    );
}

#[test]
fn positions_across_lines() {
    let (output, _) = scan("a$\nb$\r\n  c$");
    let starts: Vec<_> = output
        .programs
        .iter()
        .map(|p| p.tokens[0].position)
        .collect();
    assert_eq!(
        starts,
        vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 3)]
    );
}

#[test]
fn non_ascii_characters_are_reported_by_column() {
    let (output, _) = scan("é a$");
    assert_eq!(output.errors[0].position, Position::new(1, 1));
    assert_eq!(output.programs[0].tokens[0].position, Position::new(1, 3));
}

#[test]
fn every_token_is_traced() {
    let (output, queue) = scan("int a$ b$");
    let traces = queue.with_severity(Severity::Trace).count();
    assert_eq!(traces, output.token_count());
}

// ─── Properties ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn no_marker_means_no_programs(source in "[a-z0-9 {}()=+!\"@#\n/*]{0,60}") {
        let (output, _) = scan(&source);
        prop_assert!(output.programs.is_empty());
    }

    #[test]
    fn digit_runs_yield_one_token_per_digit(digits in "[0-9]{1,30}") {
        let program = single_program(&format!("{digits}$"));
        prop_assert_eq!(program.len(), digits.len() + 1);
        for (token, expected) in program.iter().zip(digits.chars()) {
            prop_assert_eq!(token.kind, Digit);
            prop_assert_eq!(token.lexeme.clone(), expected.to_string());
        }
    }

    #[test]
    fn whitespace_is_invisible(
        before in "[ \t\r\n]{0,8}",
        between in "[ \t\r\n]{1,8}",
        after in "[ \t\r\n]{0,8}",
    ) {
        let (output, queue) = scan(&format!("{before}int{between}a{after}$"));
        prop_assert_eq!(output.programs.len(), 1);
        let kinds: Vec<_> = output.programs[0].iter().map(|t| t.kind).collect();
        prop_assert_eq!(kinds, vec![Int, Id, Eop]);
        prop_assert_eq!(queue.error_count(), 0);
        prop_assert_eq!(queue.warning_count(), 0);
    }

    #[test]
    fn comment_bodies_are_invisible(body in "[^*]{0,40}") {
        let (output, queue) = scan(&format!("/*{body}*/a$"));
        prop_assert_eq!(output.programs.len(), 1);
        prop_assert_eq!(pairs(&output.programs[0]), vec![(Id, "a"), (Eop, "$")]);
        prop_assert!(output.errors.is_empty());
        prop_assert!(!queue.has_errors());
    }

    #[test]
    fn comparison_operators_are_one_token(op in prop::sample::select(vec!["==", "!="])) {
        let program = single_program(&format!("a{op}b$"));
        prop_assert_eq!(program.len(), 4);
        prop_assert_eq!(program.tokens[1].lexeme.as_str(), op);
        prop_assert!(matches!(program.tokens[1].kind, Equal | NotEqual));
    }

    #[test]
    fn errors_do_not_leak_into_next_program(bad in "[@#%&A-Z]{1,5}") {
        let (output, _) = scan(&format!("{bad}$a$"));
        prop_assert_eq!(output.programs.len(), 2);
        prop_assert_eq!(output.programs[0].error_count, bad.chars().count());
        prop_assert!(output.programs[1].is_ok());
    }

    #[test]
    fn every_program_ends_with_exactly_one_eop(source in "[a-z {}()=+$\n]{0,60}") {
        let (output, _) = scan(&source);
        prop_assert_eq!(output.programs.len(), source.matches('$').count());
        for (index, program) in output.programs.iter().enumerate() {
            prop_assert_eq!(program.number as usize, index + 1);
            prop_assert_eq!(program.iter().filter(|t| t.is_eop()).count(), 1);
            prop_assert!(program.tokens.last().is_some_and(|t| t.is_eop()));
        }
    }
}
