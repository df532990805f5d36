use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use lambra::{
    grammar::GrammarTable, interpreter::evaluator::core::Context, parse_source, run_program,
};
use rustyline::{error::ReadlineError, DefaultEditor};

/// lambra is a small, expression-oriented functional language with named
/// functions, curried lambdas and lexical closures.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to execute; starts the interactive prompt when omitted.
    script: Option<PathBuf>,

    /// Print the parsed syntax tree to stderr before evaluating.
    #[arg(long)]
    dump_ast: bool,

    /// Load a grammar description file and print its rule table.
    #[arg(long, value_name = "FILE")]
    grammar: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.grammar {
        match GrammarTable::load(path) {
            Ok(table) => print!("{table}"),
            Err(e) => {
                eprintln!("Failed to read the grammar file '{}': {e}", path.display());
                std::process::exit(1);
            },
        }
        if args.script.is_none() {
            return;
        }
    }

    match &args.script {
        Some(path) => run_script(path, args.dump_ast),
        None => repl(args.dump_ast),
    }
}

/// Executes a script file in batch mode.
///
/// All top-level statements run in order against one top-level frame. Each
/// non-void statement result is printed to stdout; a statement's runtime
/// error is printed to stderr and the remaining statements still run.
fn run_script(path: &Path, dump_ast: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                     eprintln!("Failed to read the script file '{}'. Perhaps this file does not exist?",
                               path.display());
                     std::process::exit(1);
                 });

    let program = match parse_source(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    if dump_ast {
        eprintln!("{program:#?}");
    }

    let context = Context::new();
    for outcome in run_program(&program, &context) {
        match outcome {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}

/// Runs the interactive prompt.
///
/// Each input line is tokenized, parsed and evaluated against a persistent
/// top-level frame; results and errors are reported before the next line is
/// read. `exit` or `quit` (or Ctrl-D) ends the session.
fn repl(dump_ast: bool) {
    println!("Welcome to the lambra REPL. Type 'exit' to quit.");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to start the interactive prompt: {e}");
            return;
        },
    };

    let history_file = dirs::home_dir().map(|mut path| {
                                           path.push(".lambra_history");
                                           path
                                       });
    if let Some(path) = &history_file {
        let _ = rl.load_history(path);
    }

    let context = Context::new();

    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if matches!(input.to_lowercase().as_str(), "exit" | "quit") {
                    break;
                }

                let _ = rl.add_history_entry(input);

                match parse_source(input) {
                    Ok(program) => {
                        if dump_ast {
                            eprintln!("{program:#?}");
                        }
                        for outcome in run_program(&program, &context) {
                            match outcome {
                                Ok(Some(value)) => println!("{value}"),
                                Ok(None) => {},
                                Err(e) => eprintln!("{e}"),
                            }
                        }
                    },
                    Err(e) => eprintln!("{e}"),
                }
            },

            Err(ReadlineError::Interrupted) => (),
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("ReadlineError: {e:?}");
                break;
            },
        }
    }

    if let Some(path) = &history_file {
        let _ = rl.save_history(path);
    }
}
