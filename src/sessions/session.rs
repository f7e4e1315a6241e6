//! The only point of truth for all information that is related to the
//! current user session in the store. A session keeps the command history
//! of the user and a handle to the database the commands run against.
//!
//! At the end of each session, these objects are discarded.

use std::{fmt::Display, sync::Arc, time::SystemTime};

use chrono::{DateTime, Local};

use crate::persistence::{Context, Database};

struct CommandHistory {
    command: String,
    command_time: SystemTime,
}

impl CommandHistory {
    pub fn command_time_string(&self) -> String {
        let datetime: DateTime<Local> = self.command_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Display for CommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.command_time_string(), self.command)
    }
}

pub struct Session {
    command_history: Vec<CommandHistory>,
    start_time: SystemTime,
    context: Context,
    database: Arc<Database>,
}

impl Session {
    pub fn client(database: &Arc<Database>) -> Session {
        //! Returns a new client session.

        Session {
            command_history: vec![],
            start_time: SystemTime::now(),
            context: Context::background(),
            database: Arc::clone(database),
        }
    }

    pub fn database(&self) -> &Database {
        self.database.as_ref()
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn add_to_command_history(&mut self, command: &str) {
        self.command_history.push(CommandHistory {
            command: command.to_string(),
            command_time: SystemTime::now(),
        });
    }

    pub fn start_time_string(&self) -> String {
        //! Convert the [`SystemTime`] object into a string representation
        //! to be more readable.

        let datetime: DateTime<Local> = self.start_time.into();
        datetime.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    pub fn command_history_lines(&self, n_prev: Option<usize>) -> Vec<String> {
        //! The most recent commands first. Use `n_prev` to limit how many.

        let limit = n_prev.unwrap_or(self.command_history.len());

        self.command_history
            .iter()
            .rev()
            .take(limit)
            .enumerate()
            .map(|(index, command)| format!("{:3} | {}", index, command))
            .collect()
    }

    pub fn get_last_command(&self, nth_back: usize) -> Option<&str> {
        //! Gets the `nth_back`th last command from the history.

        if nth_back == 0 {
            return None;
        }

        self.command_history
            .iter()
            .nth_back(nth_back - 1)
            .map(|cmd| cmd.command.as_str())
    }
}
