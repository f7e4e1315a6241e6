//! The place where CLI and REPL command parsers are defined.

use std::path::PathBuf;

use clap::Parser;

use crate::cli::messages::{highlight_argument, system_message};

#[derive(Parser)]
#[command(name = "ferrum_store")]
#[command(about = "An in-memory row store with per-column indexes", long_about = None)]
pub struct CliParser {
    // JSON file declaring the tables, overrides FERRUM_SCHEMA.
    #[arg(long)]
    pub schema: Option<PathBuf>,
}

/// One line typed into the REPL, parsed.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Insert {
        table: String,
        cols: Vec<String>,
        vals: Vec<String>,
        payload: String,
    },
    Get {
        table: String,
        column: String,
        value: String,
    },
    Update {
        table: String,
        column: String,
        value: String,
        payload: String,
    },
    ProfileGet {
        profile_id: String,
    },
    ProfilePut {
        profile_id: String,
        profile_name: String,
    },
    ProfileRename {
        profile_id: String,
        first_name: String,
        last_name: String,
    },
    Tables,
    History(Option<usize>),
    Help,
    Quit,
}

// Split off the first `n` whitespace separated words, keep the rest verbatim.
fn split_words(line: &str, n: usize) -> (Vec<&str>, &str) {
    let mut words = Vec::with_capacity(n);
    let mut rest = line.trim_start();

    while words.len() < n && !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        words.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }

    (words, rest)
}

fn usage(syntax: &str) -> String {
    system_message(
        "parser",
        format!("Usage: {}", highlight_argument(syntax)),
    )
}

fn parse_assignments(assignments: &str) -> Result<(Vec<String>, Vec<String>), String> {
    //! Parse `col=val,col=val` into the parallel column and value lists
    //! the store expects. A single `-` means no columns at all.

    if assignments == "-" {
        return Ok((vec![], vec![]));
    }

    let mut cols = vec![];
    let mut vals = vec![];

    for assignment in assignments.split(',') {
        match assignment.split_once('=') {
            Some((col, val)) if !col.is_empty() => {
                cols.push(col.to_string());
                vals.push(val.to_string());
            }
            _ => {
                return Err(system_message(
                    "parser",
                    format!(
                        "Invalid column assignment {}; expected col=val.",
                        highlight_argument(assignment)
                    ),
                ));
            }
        }
    }

    Ok((cols, vals))
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    //! Parse a single REPL line into a [`Command`].

    let (head, rest) = split_words(line.trim(), 1);
    let Some(&keyword) = head.first() else {
        return Err(system_message("parser", "Nothing to run.".to_string()));
    };

    match keyword.to_lowercase().as_str() {
        "insert" => {
            let (words, payload) = split_words(rest, 2);
            if words.len() < 2 {
                return Err(usage("insert <table> <col>=<val>[,<col>=<val>...] <payload>"));
            }
            let (cols, vals) = parse_assignments(words[1])?;

            Ok(Command::Insert {
                table: words[0].to_string(),
                cols,
                vals,
                payload: payload.to_string(),
            })
        }
        "get" => {
            let (words, extra) = split_words(rest, 3);
            if words.len() < 3 || !extra.is_empty() {
                return Err(usage("get <table> <col> <val>"));
            }

            Ok(Command::Get {
                table: words[0].to_string(),
                column: words[1].to_string(),
                value: words[2].to_string(),
            })
        }
        "update" => {
            let (words, payload) = split_words(rest, 3);
            if words.len() < 3 {
                return Err(usage("update <table> <col> <val> <payload>"));
            }

            Ok(Command::Update {
                table: words[0].to_string(),
                column: words[1].to_string(),
                value: words[2].to_string(),
                payload: payload.to_string(),
            })
        }
        "profile" => parse_profile_command(rest),
        "tables" => Ok(Command::Tables),
        "history" => match rest {
            "" => Ok(Command::History(None)),
            n => n
                .parse::<usize>()
                .map(|n| Command::History(Some(n)))
                .map_err(|_| usage("history [n]")),
        },
        "help" => Ok(Command::Help),
        "corrode" => Ok(Command::Quit),
        other => Err(system_message(
            "parser",
            format!(
                "Unknown command {}; try {}.",
                highlight_argument(other),
                highlight_argument("help")
            ),
        )),
    }
}

fn parse_profile_command(line: &str) -> Result<Command, String> {
    let (words, extra) = split_words(line, 4);

    match (words.as_slice(), extra.is_empty()) {
        (["get", id], true) => Ok(Command::ProfileGet {
            profile_id: id.to_string(),
        }),
        (["put", id, name], true) => Ok(Command::ProfilePut {
            profile_id: id.to_string(),
            profile_name: name.to_string(),
        }),
        (["rename", id, first, last], true) => Ok(Command::ProfileRename {
            profile_id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }),
        _ => Err(usage(
            "profile get <id> | profile put <id> <name> | profile rename <id> <first> <last>",
        )),
    }
}
