// Simian: Monkey lexer and parser driver

use std::fs;
use std::io;

use crossterm::style::{style, Stylize};

use simian::config::{Config, ConfigError, USAGE};
use simian::parser::{Lexer, Parser};
use simian::repl;
use simian::theme::{Theme, DEFAULT_THEME};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(ConfigError::HelpRequested) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let theme = config.color.then_some(&DEFAULT_THEME);

    let Some(path) = &config.source else {
        println!("Monkey tokenizer. Type a line to see its tokens, Ctrl-D to exit.");
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        repl::start(stdin.lock(), &mut stdout, theme)?;
        return Ok(());
    };

    if !path.exists() {
        eprintln!("Error: File '{}' not found", path.display());
        eprintln!("{}", USAGE);
        std::process::exit(1);
    }

    let source = fs::read_to_string(path)?;

    if config.show_tokens {
        for token in Lexer::new(&source).tokenize() {
            println!("{}", repl::render_token(&token, theme));
        }
        println!();
    }

    eprintln!("Parsing {}...", path.display());
    let mut parser = Parser::new(Lexer::new(&source));
    let program = parser.parse_program();

    for stmt in &program.statements {
        println!("{}", stmt);
    }

    let errors = parser.errors();
    if errors.is_empty() {
        eprintln!(
            "Parsed successfully. Found {} statements.",
            program.statements.len()
        );
        return Ok(());
    }

    eprintln!("Found {} parse errors:", errors.len());
    for error in errors {
        eprintln!("  {}", paint_error(&error.to_string(), theme));
    }
    std::process::exit(1);
}

fn paint_error(message: &str, theme: Option<&Theme>) -> String {
    match theme {
        Some(theme) => style(message).with(theme.error).to_string(),
        None => message.to_string(),
    }
}
