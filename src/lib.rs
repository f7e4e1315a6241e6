pub mod cli;
pub mod config;
pub mod persistence;
pub mod profiles;
pub mod sessions;
