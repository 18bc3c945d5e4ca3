use std::{
    fs,
    io::{self, IsTerminal, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use crossterm::style::Stylize;
use juicy::{
    error::{Diagnostic, DiagnosticSink, ParseError, Severity},
    run,
};

/// juicy runs programs written in Juicy, a small dynamically typed scripting
/// language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run. Without it the program is read from standard
    /// input.
    file: Option<PathBuf>,

    /// Prints diagnostics without terminal colors.
    #[arg(long)]
    no_color: bool,
}

/// Writes diagnostics to standard error, colored by severity.
struct TerminalSink {
    color: bool,
}

impl DiagnosticSink for TerminalSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        let mut label = diagnostic.severity.to_string();
        if self.color {
            label = match diagnostic.severity {
                        Severity::Error => label.red().bold(),
                        Severity::Warning => label.yellow().bold(),
                    }.to_string();
        }
        eprintln!("{label}: {diagnostic}");
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let source = match &args.file {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|_| {
                          eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                    path.display());
                          std::process::exit(1);
                      }),
        None => {
            let mut source = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut source) {
                eprintln!("Failed to read the program from standard input: {e}");
                return ExitCode::FAILURE;
            }
            source
        },
    };

    let mut sink = TerminalSink { color: !args.no_color && io::stderr().is_terminal() };
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match run(&source, &mut input, &mut output, &mut sink) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Syntax errors already went through the sink.
            if !e.is::<ParseError>() {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        },
    }
}
