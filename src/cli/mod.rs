use std::{
    io::{self, BufRead, Write},
    sync::{Arc, RwLock},
};

use colored::Colorize;

use crate::{
    cli::{
        colors::FERRUM_RED,
        commands::{CommandExecutor, CommandResult},
        messages::{highlight_argument, system_message, version_info},
        parsers::{Command, parse_command},
    },
    config::StoreConfig,
    sessions::session::Session,
};

mod colors;
mod commands;
mod messages;
pub mod parsers;

const DEFAULT_LAST_COMMAND_DELIMITER: &str = "!";

const FERRUM_STORE_COMMANDS_LIST: [(&str, &str); 9] = [
    ("insert", "insert <table> <col>=<val>[,...] <payload>; '-' for no columns"),
    ("get", "get <table> <col> <val>; every row indexed under the value"),
    ("update", "update <table> <col> <val> <payload>; rewrites ALL matching rows"),
    ("profile", "profile get <id> | put <id> <name> | rename <id> <first> <last>"),
    ("tables", "list declared tables, their row counts and indexed columns"),
    ("!", "execute the last command, add more to go further back"),
    ("help", "list all available commands"),
    ("history", "list command history for this session, optionally the last n"),
    ("corrode", "iron corrodes and so does this session when you exit"),
];

pub fn run_client(config: StoreConfig) {
    println!("{}", version_info());

    let table_count = config.tables.len();
    let database = Arc::new(config.build());
    let session = Arc::new(RwLock::new(Session::client(&database)));

    println!(
        "{}",
        system_message(
            "info",
            format!(
                "A store with {} table(s) was created for this session.",
                highlight_argument(&table_count.to_string())
            )
        )
    );

    start_repl(session);
}

pub fn show_help() {
    println!();
    println!("{:10} {}", "COMMAND".color(FERRUM_RED), "DETAILS");
    for (command, details) in FERRUM_STORE_COMMANDS_LIST {
        println!("{:10} {}", command.color(FERRUM_RED), details)
    }
}

fn print_result(result: CommandResult) {
    for line in result.lines.iter() {
        println!("{}", line);
    }

    if let Some(n_rows) = result.n_rows_processed {
        println!(
            "{}",
            system_message("ferrum", format!("{} row(s) processed!", n_rows))
        );
    }
}

fn start_repl(client_session: Arc<RwLock<Session>>) {
    println!(
        "{}",
        system_message(
            "system",
            format!(
                "Use '{}' to quit and '{}' to know all commands available.",
                highlight_argument("corrode"),
                highlight_argument("help"),
            ),
        )
    );

    if let Ok(session) = client_session.read() {
        println!(
            "{}",
            system_message(
                "system",
                format!(
                    "New session initiated at '{}'.",
                    highlight_argument(&session.start_time_string())
                ),
            )
        );
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        print!("{:6} > ", "ferrum".color(FERRUM_RED).bold());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut buffer = String::new();
        match input.read_line(&mut buffer) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        if buffer.starts_with(DEFAULT_LAST_COMMAND_DELIMITER) {
            let last = buffer.matches(DEFAULT_LAST_COMMAND_DELIMITER).count();
            let last_command = client_session
                .read()
                .ok()
                .and_then(|session| session.get_last_command(last).map(str::to_string));

            match last_command {
                Some(command) => buffer = command,
                None => {
                    println!(
                        "{}",
                        system_message(
                            "system",
                            format!(
                                "No command {} steps back.",
                                highlight_argument(&last.to_string())
                            ),
                        )
                    );
                    continue;
                }
            }
        }

        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }

        if let Ok(mut session) = client_session.write() {
            session.add_to_command_history(line);
        }

        if line == "exit" {
            println!("did you mean '{}'?", "corrode".color(FERRUM_RED));
            continue;
        }

        match parse_command(line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => show_help(),
            Ok(command) => match CommandExecutor::new(command, &client_session).execute() {
                Ok(result) => print_result(result),
                Err(error) => println!("{}", error),
            },
            Err(error) => println!("{}", error),
        }
    }

    println!("Goodbye!")
}
