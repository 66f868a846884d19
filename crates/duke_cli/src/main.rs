use clap::Parser;
use duke_cli::cli::Cli;
use duke_core::config;
use duke_core::error::DukeError;
use duke_core::parser;
use std::io::{self, BufRead};

const LINE: &str = "----------------------------------------";
const GREETING_MESSAGE: &str = "Wow! Hello! I'm Duke.\nWhat can I do for you?";

/// Wraps a reply between two forty-hyphen lines; the body always ends with
/// a newline.
fn print_framed(message: &str) {
    println!("{LINE}");
    if let Some(trimmed) = message.strip_suffix('\n') {
        println!("{trimmed}");
    } else {
        println!("{message}");
    }
    println!("{LINE}");
}

fn run(cli: Cli) -> Result<(), DukeError> {
    let save_path = match cli.save_file {
        Some(path) => path,
        None => config::save_path()?,
    };
    let (mut parser, notice) = parser::Parser::open(save_path)?;

    print_framed(GREETING_MESSAGE);
    if let Some(notice) = notice {
        print_framed(&notice);
    }

    let stdin = io::stdin();
    let mut stdin_lock = stdin.lock();
    let mut input = String::new();

    loop {
        input.clear();
        let bytes = stdin_lock
            .read_line(&mut input)
            .map_err(|err| DukeError::io(err.to_string()))?;

        if bytes == 0 {
            break;
        }

        let line = input.trim_end_matches(['\n', '\r']);
        let reply = parser.handle_input(line);
        print_framed(&reply.text);

        if !reply.proceed {
            break;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("ERROR: {}", err);
        std::process::exit(1);
    }
}
