//! General message formatting functions for prettifying the CLI.
//!
//! - Highlight Text (make the text ferrum red but not bold)
//! - System messages, all in the same `[source] message` format
//! - Payload rendering, since rows are raw bytes

use colored::Colorize;

use crate::cli::colors::FERRUM_RED;

pub fn highlight_argument(argument: &str) -> String {
    format!("{}", argument.color(FERRUM_RED))
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Write a system message on the command line, properly
    //! formatted, according to the command line theme.

    let source_formatted = format!("{:6}", source_name.color(FERRUM_RED).bold());
    format!("[{}] {}", source_formatted, message)
}

pub fn render_payload(payload: &[u8]) -> String {
    //! Rows are opaque. Show them as text when they are UTF-8, otherwise
    //! as hex.

    match std::str::from_utf8(payload) {
        Ok("") => "<empty>".italic().to_string(),
        Ok(text) => text.to_string(),
        Err(_) => payload
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<Vec<String>>()
            .join(" "),
    }
}

pub fn version_info() -> String {
    format!(
        "{} {} - {}",
        env!("CARGO_PKG_NAME").color(FERRUM_RED).bold(),
        env!("CARGO_PKG_VERSION").color(FERRUM_RED).italic(),
        env!("CARGO_PKG_DESCRIPTION"),
    )
}
