//! REPL for the Monkey programming language
//!
//! Reads a line, parses it, and evaluates it against a root environment that persists
//! across iterations, so a `let` bound on one line is visible on the next. Parser errors
//! are printed and the line is discarded without being evaluated.
use crate::environment::Environment;
use crate::evaluator::eval_program;
use crate::{lexer::Lexer, parser::Parser};
pub use display::MONKEY_LOGO;
use display::{CYAN, GRAY, RESET, print_parser_errors, print_welcome};
use std::io::{self, BufRead, Write};
mod display;

const PROMPT: &str = "$";

/// Starts the REPL
/// # Parameters
/// - `input`: The input reader to read the lines from
/// - `output`: The output writer to write the lines to
/// # Returns
/// - `Ok(())` if the REPL was started successfully
/// - `Err(e)` if an error occurred while starting the REPL
pub fn repl<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    print_welcome();

    let env = Environment::new();
    let mut reader = input;
    let mut line = String::new();

    loop {
        write!(output, "{}{}{} ", CYAN, PROMPT, RESET)?;
        output.flush()?;
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            log::debug!("reached EOF on REPL input");
            println!("\n{}Goodbye!{}", GRAY, RESET);
            return Ok(());
        }
        let trimmed_line = line.trim_end_matches(['\n', '\r']);
        if trimmed_line.is_empty() {
            continue;
        }

        let lexer = Lexer::new(trimmed_line.to_string());
        let mut parser = Parser::new(lexer);
        let program = parser.parse_program();
        log::trace!("parsed line into {} statement(s)", program.statements.len());

        if !parser.errors.is_empty() {
            print_parser_errors(&mut output, &parser.errors)?;
            continue;
        }

        let result = eval_program(&program, &env);
        log::trace!("evaluated line to {:?}", result.kind());
        writeln!(output, "{}", result.inspect())?;
    }
}
