use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use numera::{
    error::ParseError,
    eval_line,
    interpreter::{
        evaluator::core::{Outcome, ScopeMode, Session, SessionOptions, UndefinedNames},
        parser::core::OperatorFolding,
    },
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// numera is an interactive calculator language with variables,
/// user-defined functions, and an `ans` reference to the last result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Run a script file line by line instead of starting the prompt.
    script: Option<PathBuf>,

    /// Fold only the first operator pair at each precedence level and
    /// drop the rest of the chain.
    #[arg(long)]
    first_pair_fold: bool,

    /// Bind function parameters directly in the session variable table
    /// and delete them after the call, instead of using a private frame.
    #[arg(long)]
    shared_scope: bool,

    /// Evaluate unknown identifiers and functions to 0 instead of
    /// reporting an error.
    #[arg(long)]
    zero_undefined: bool,

    /// Exit with status 1 on the first parse error instead of
    /// continuing with the next line.
    #[arg(long)]
    fatal_parse: bool,
}

fn main() {
    let args = Args::parse();

    let options = SessionOptions { folding:   if args.first_pair_fold {
                                                  OperatorFolding::FirstPairOnly
                                              } else {
                                                  OperatorFolding::Chained
                                              },
                                   scope:     if args.shared_scope {
                                                  ScopeMode::SharedVariables
                                              } else {
                                                  ScopeMode::CallBindings
                                              },
                                   undefined: if args.zero_undefined {
                                                  UndefinedNames::Zero
                                              } else {
                                                  UndefinedNames::Error
                                              }, };
    let mut session = Session::with_options(options);

    if let Some(path) = args.script {
        run_script(&mut session, &path, args.fatal_parse);
    } else {
        repl(&mut session, args.fatal_parse);
    }
}

/// Runs a script file through the session, rendering outcomes exactly
/// as the prompt would.
fn run_script(session: &mut Session, path: &Path, fatal_parse: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  path.display());
        process::exit(1);
    });

    for (i, line) in source.lines().enumerate() {
        if !process_line(session, line, i + 1, fatal_parse) {
            break;
        }
    }
}

/// The interactive read-eval-print loop.
fn repl(session: &mut Session, fatal_parse: bool) {
    let mut editor = DefaultEditor::new().unwrap_or_else(|e| {
        eprintln!("error: failed to open the terminal: {e}");
        process::exit(1);
    });

    let mut turn = 1;
    loop {
        match editor.readline("> ") {
            Ok(line) => {
                let _ = editor.add_history_entry(&line);
                if !process_line(session, &line, turn, fatal_parse) {
                    break;
                }
                turn += 1;
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("error: {e}");
                break;
            },
        }
    }
}

/// Evaluates one input line and renders its outcome.
///
/// Returns `false` when the session should end.
fn process_line(session: &mut Session, line: &str, line_number: usize, fatal_parse: bool) -> bool {
    match eval_line(session, line, line_number) {
        Ok(Outcome::Value(value)) => println!("{value}"),
        Ok(Outcome::Silent) => {},
        Ok(Outcome::ClearScreen) => {
            print!("\x1b[H\x1b[2J");
            io::stdout().flush().ok();
        },
        Ok(Outcome::Exit) => process::exit(0),
        Err(e) => {
            eprintln!("error: {e}");
            if fatal_parse && e.is::<ParseError>() {
                process::exit(1);
            }
        },
    }
    true
}
