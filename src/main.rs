use std::io::{self, BufRead, Write};

use clap::Parser;
use minicalc::evaluate_line;

/// minicalc is an easy to use, interactive command-line calculator for
/// arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression and exit instead of starting the prompt.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        let line = expression.trim();
        match evaluate_line(line) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                eprintln!("{}", e.render(line));
                std::process::exit(1);
            },
        }
        return;
    }

    if let Err(e) = run_prompt() {
        eprintln!("Failed to read from standard input: {e}");
        std::process::exit(1);
    }
}

/// Runs the interactive prompt until `exit` or end of input.
///
/// Each line is trimmed and run through the full pipeline; an empty line
/// re-prompts and an input error never ends the session.
fn run_prompt() -> io::Result<()> {
    println!("minicalc, an interactive calculator.");
    println!("Type 'exit' to exit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!(">>> ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            return Ok(());
        }

        let line = input.trim();
        if line == "exit" {
            return Ok(());
        }
        if line.is_empty() {
            continue;
        }

        match evaluate_line(line) {
            Ok(value) => println!("{value}"),
            Err(e) => println!("{}", e.render(line)),
        }
    }
}
