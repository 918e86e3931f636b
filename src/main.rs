use clap::{Parser, Subcommand};
use movie_fetch::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, FetchConfig, MovieClient, MovieProvider,
};
use serde::Serialize;
use std::process;
use std::time::Duration;
use tracing::Level;

/// Fetch movie metadata from a JSON HTTP API and print it as JSON
#[derive(Debug, Parser)]
#[command(name = "movie-fetch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Connect timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_CONNECT_TIMEOUT.as_secs())]
    connect_timeout: u64,

    /// Read timeout in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_READ_TIMEOUT.as_secs())]
    read_timeout: u64,

    /// Log request and decoding details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch a movie list (an object with a `results` array)
    List {
        /// Fully formed request URL, including any API key
        url: String,
    },
    /// Fetch a single movie's details
    Details {
        /// Fully formed request URL, including any API key
        url: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = FetchConfig::default()
        .with_connect_timeout(Duration::from_secs(cli.connect_timeout))
        .with_read_timeout(Duration::from_secs(cli.read_timeout));

    let client = MovieClient::new(config)?;

    match cli.command {
        Command::List { url } => {
            let movies = client.fetch_movie_list(&url)?;
            print_json(&movies)?;
        }
        Command::Details { url } => {
            let detail = client.fetch_movie_details(&url)?;
            print_json(&detail)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
