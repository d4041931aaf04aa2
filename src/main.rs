use std::{fs, path::Path, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use afdlex::{
    lexer::{lex, tokens::Token, LexError, Lexer},
    source_map::describe_error,
};
use commandline::{Operation, Options};

mod commandline;

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(options.quiet)
        .verbosity(options.verbose as usize + 1)
        .init()?;

    let ok = match options.operation {
        Operation::Tokens { file, keep_going } => print_tokens(&file, keep_going)?,
        Operation::Check { file } => check(&file)?,
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_source(file: &Path) -> Result<String> {
    fs::read_to_string(file).with_context(|| format!("Unable to read {}", file.display()))
}

fn print_tokens(file: &Path, keep_going: bool) -> Result<bool> {
    let content = read_source(file)?;

    if keep_going {
        return Ok(match lex(&content) {
            Ok(tokens) => {
                tokens.iter().for_each(print_token);
                true
            }
            Err(errors) => {
                report_errors(&errors, &content);
                false
            }
        });
    }

    for result in Lexer::new(&content) {
        match result {
            Ok(token) => print_token(&token),
            Err(error) => {
                report_errors(&[error], &content);
                return Ok(false);
            }
        }
    }
    Ok(true)
}

fn check(file: &Path) -> Result<bool> {
    let content = read_source(file)?;

    match lex(&content) {
        Ok(tokens) => {
            info!("{}: {} tokens", file.display(), tokens.len());
            println!("No lexical errors found");
            Ok(true)
        }
        Err(errors) => {
            report_errors(&errors, &content);
            Ok(false)
        }
    }
}

fn print_token(token: &Token) {
    println!("{:>4}:{:<3} {}", token.location.line, token.location.column, token);
}

fn report_errors(errors: &[LexError], content: &str) {
    for err in errors {
        println!("Lexer error ({})", err);
        println!("{}", describe_error(err, content));
        println!();
    }
    println!("{} lexical error(s)", errors.len());
}
