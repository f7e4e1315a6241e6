//! This module is where the REPL commands are executed.
//!
//! Ferrum store command line syntax:
//!
//! - ferrum_store --help | Command Line Help
//! - ferrum_store [--schema <file>] | Run the REPL against a fresh store.
//!
//! Once the user is inside the REPL, the following commands are understood.
//!
//! - insert <table> <col>=<val>[,<col>=<val>...] <payload>
//! - get <table> <col> <val>
//! - update <table> <col> <val> <payload>
//! - profile get <id> | profile put <id> <name> | profile rename <id> <first> <last>
//! - tables
//!
//! Payloads are taken verbatim, as the rest of the line, and stored as bytes.

use std::sync::{Arc, RwLock};

use colored::Colorize;

use crate::cli::colors::FERRUM_GREY;
use crate::cli::messages::{highlight_argument, render_payload, system_message};
use crate::cli::parsers::Command;
use crate::profiles::{Profile, ProfileService};
use crate::sessions::session::Session;

/// Runs one parsed [`Command`] against the database of a [`Session`].
///
/// Store errors come back as formatted messages, ready for the terminal.
pub struct CommandExecutor {
    command: Command,
    session: Arc<RwLock<Session>>,
}

/// Whatever a command wants printed, and how many rows it touched.
pub struct CommandResult {
    pub lines: Vec<String>,
    pub n_rows_processed: Option<usize>,
}

fn store_error(error: impl std::fmt::Display) -> String {
    system_message("store", format!("{}", error).red().to_string())
}

impl CommandExecutor {
    pub fn new(command: Command, session: &Arc<RwLock<Session>>) -> CommandExecutor {
        CommandExecutor {
            command,
            session: Arc::clone(session),
        }
    }

    pub fn execute(self) -> Result<CommandResult, String> {
        let session = self
            .session
            .read()
            .map_err(|_| system_message("system", "Session is poisoned.".to_string()))?;
        let db = session.database();
        let ctx = session.context();

        match self.command {
            Command::Insert {
                table,
                cols,
                vals,
                payload,
            } => {
                db.insert(ctx, &table, cols.as_slice(), vals.as_slice(), payload.into_bytes())
                    .map_err(store_error)?;

                Ok(CommandResult {
                    lines: vec![],
                    n_rows_processed: Some(1),
                })
            }
            Command::Get {
                table,
                column,
                value,
            } => {
                let rows = db.get(ctx, &table, &column, &value).map_err(store_error)?;
                let lines = rows
                    .iter()
                    .enumerate()
                    .map(|(index, row)| {
                        format!(
                            "{} {}",
                            format!("{:3} |", index).color(FERRUM_GREY),
                            render_payload(row)
                        )
                    })
                    .collect();

                Ok(CommandResult {
                    lines,
                    n_rows_processed: Some(rows.len()),
                })
            }
            Command::Update {
                table,
                column,
                value,
                payload,
            } => {
                db.update(ctx, &table, &column, &value, payload.as_bytes())
                    .map_err(store_error)?;

                Ok(CommandResult {
                    lines: vec![system_message(
                        "ferrum",
                        format!(
                            "Every row of {} where {} = {} was rewritten.",
                            highlight_argument(&table),
                            highlight_argument(&column),
                            highlight_argument(&value)
                        ),
                    )],
                    n_rows_processed: None,
                })
            }
            Command::ProfileGet { profile_id } => {
                let service = ProfileService::new(db);
                let line = match service.get_profile(ctx, &profile_id).map_err(store_error)? {
                    Some(profile) => format!(
                        "{} {} ({} {})",
                        highlight_argument(&profile.profile_id),
                        profile.profile_name,
                        profile.first_name,
                        profile.last_name
                    ),
                    None => system_message(
                        "store",
                        format!("No profile {}.", highlight_argument(&profile_id)),
                    ),
                };

                Ok(CommandResult {
                    lines: vec![line],
                    n_rows_processed: None,
                })
            }
            Command::ProfilePut {
                profile_id,
                profile_name,
            } => {
                let profile = Profile {
                    profile_id,
                    profile_name,
                    ..Profile::default()
                };
                ProfileService::new(db)
                    .store_new_profile(ctx, &profile)
                    .map_err(store_error)?;

                Ok(CommandResult {
                    lines: vec![],
                    n_rows_processed: Some(1),
                })
            }
            Command::ProfileRename {
                profile_id,
                first_name,
                last_name,
            } => {
                let profile = Profile {
                    profile_id,
                    first_name,
                    last_name,
                    ..Profile::default()
                };
                ProfileService::new(db)
                    .update_profile(ctx, &profile)
                    .map_err(store_error)?;

                Ok(CommandResult {
                    lines: vec![],
                    n_rows_processed: Some(1),
                })
            }
            Command::Tables => Ok(CommandResult {
                lines: db.describe(),
                n_rows_processed: None,
            }),
            Command::History(n_prev) => Ok(CommandResult {
                lines: session.command_history_lines(n_prev),
                n_rows_processed: None,
            }),
            Command::Help | Command::Quit => Ok(CommandResult {
                lines: vec![],
                n_rows_processed: None,
            }),
        }
    }
}
