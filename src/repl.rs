//! Read-lex-print loop
//!
//! Each input line gets a fresh [`Lexer`]; every token up to (not including)
//! `EOF` is printed on its own line. Nothing is parsed or evaluated.

use crate::parser::{Lexer, Token, TokenKind};
use crate::theme::Theme;
use crossterm::style::{style, Stylize};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// Run the loop until `input` reaches end of file.
///
/// With a theme, the prompt and token kinds are coloured.
pub fn start<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    theme: Option<&Theme>,
) -> io::Result<()> {
    let mut line = String::new();

    loop {
        match theme {
            Some(theme) => write!(output, "{}", style(PROMPT).with(theme.primary))?,
            None => write!(output, "{}", PROMPT)?,
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut lexer = Lexer::new(line.trim_end_matches(['\r', '\n']));
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            writeln!(output, "{}", render_token(&token, theme))?;
        }
    }
}

/// Format one token for display, coloured by kind when a theme is given
pub fn render_token(token: &Token, theme: Option<&Theme>) -> String {
    match theme {
        Some(theme) => format!(
            "{} {:?} at line {}, column {}",
            style(token.kind).with(theme.token_color(token.kind)),
            token.literal,
            token.location.line,
            token.location.column
        ),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DEFAULT_THEME;

    fn run(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, None).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_tokens_per_line() {
        let output = run("let x = 5;\n");
        assert_eq!(
            output,
            ">> LET \"let\" at line 1, column 1\n\
             IDENT \"x\" at line 1, column 5\n\
             ASSIGN \"=\" at line 1, column 7\n\
             INT \"5\" at line 1, column 9\n\
             SEMICOLON \";\" at line 1, column 10\n\
             >> "
        );
    }

    #[test]
    fn test_each_line_starts_fresh() {
        let output = run("a\r\nb\n");
        // Both identifiers sit at line 1, column 1 of their own lexer
        assert_eq!(
            output,
            ">> IDENT \"a\" at line 1, column 1\n>> IDENT \"b\" at line 1, column 1\n>> "
        );
    }

    #[test]
    fn test_blank_line_prints_nothing() {
        assert_eq!(run("\n   \n"), ">> >> >> ");
    }

    #[test]
    fn test_empty_input_exits() {
        assert_eq!(run(""), ">> ");
    }

    #[test]
    fn test_themed_render_keeps_text() {
        let token = Token::new(TokenKind::Illegal, "@", 1, 0);
        let rendered = render_token(&token, Some(&DEFAULT_THEME));
        assert!(rendered.contains("ILLEGAL"));
        assert!(rendered.contains("\"@\" at line 1, column 0"));
    }
}
