use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomo::api::ApiClient;
use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::config::Config;
use pomo::error::PomoError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PomoError> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Timer(args) => commands::timer(&config, args.inline)?,
        Commands::Task(args) => commands::task(args.command, format)?,
        Commands::Settings(args) => commands::settings(args.command, format)?,
        Commands::Auth(args) => {
            let mut client = ApiClient::new(&config.api)?;
            commands::auth(&mut client, args.command, format)?
        }
        Commands::Remote(args) => {
            let client = ApiClient::new(&config.api)?;
            commands::remote(&client, args.command, format)?
        }
        Commands::Session(args) => {
            let client = ApiClient::new(&config.api)?;
            commands::session(&client, &config, args.command, format)?
        }
        Commands::Focus(args) => {
            let client = ApiClient::new(&config.api)?;
            commands::focus(&client, args.command, format)?
        }
        Commands::Stats(args) => {
            let client = ApiClient::new(&config.api)?;
            commands::stats(&client, args.command, format)?
        }
        Commands::Completions { shell } => commands::completions(shell),
    };

    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
