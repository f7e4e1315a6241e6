use clap::Parser;
use ferrum_store::cli::{parsers::CliParser, run_client};
use ferrum_store::config::StoreConfig;
use log::error;

fn main() {
    let args = CliParser::parse();

    match StoreConfig::load(args.schema.as_deref()) {
        Ok(config) => run_client(config),
        Err(message) => {
            error!("err: {}", message);
            eprintln!("err: {}", message);
            std::process::exit(1);
        }
    }
}
