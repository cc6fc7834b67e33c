use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use travelrec::config::TravelRecConfig;
use travelrec::logging::init_logging;
use travelrec::{
    CatalogLoader, ContactForm, ResultRenderer, SearchQuery, TerminalSink, search, time, web,
};

/// Travel destination recommendations with live local clocks
#[derive(Parser, Debug)]
#[command(name = "travelrec", version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search destinations by keyword, e.g. "beach", "temple" or "japan"
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show the current local time in an IANA timezone
    Time { zone: String },
    /// Submit a contact message
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// Print the loaded catalog as JSON
    Catalog,
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        config: config_path,
        verbose,
        command,
    } = Cli::parse();
    let mut config = TravelRecConfig::load_from_path(config_path.clone())?;
    init_logging(&config.logging, verbose);
    debug!("Loaded configuration: {:?}", config);

    let Some(command) = command else {
        print_banner(config_path.as_deref(), verbose, &config);
        return Ok(());
    };

    match command {
        Command::Search { query } => {
            let query = match SearchQuery::parse(&query.join(" ")) {
                Ok(query) => query,
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    std::process::exit(2);
                }
            };
            let catalog = CatalogLoader::from_config(&config.data).load().await;
            let results = search(&catalog, &query);
            let mut sink = TerminalSink::new(io::stdout().lock());
            ResultRenderer::new().present(&mut sink, results)?;
        }
        Command::Time { zone } => {
            println!("{}", time::current_local_time(&zone));
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let mut form = ContactForm::new(name, email, message).trimmed();
            let outcome = form.submit();
            println!("{}", outcome.user_message());
            if !outcome.is_accepted() {
                std::process::exit(1);
            }
        }
        Command::Catalog => {
            let catalog = CatalogLoader::from_config(&config.data).load().await;
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        Command::Serve { port } => {
            if let Some(port) = port {
                config.web.port = port;
            }
            let catalog = CatalogLoader::from_config(&config.data).load().await;
            web::run(&config.web, catalog).await?;
        }
    }

    Ok(())
}

fn print_banner(config_path: Option<&Path>, verbose: bool, config: &TravelRecConfig) {
    println!("TravelRec {}", travelrec::VERSION);
    println!("Search beaches, temples and cities around the world.");
    println!();
    println!("Try: travelrec search beach");
    println!("     travelrec search japan");
    println!("     travelrec time Asia/Tokyo");
    println!("     travelrec serve --port 8080");

    if verbose {
        println!();
        match config_path {
            Some(path) => println!("Using config from: {}", path.display()),
            None => println!("Using default config location"),
        }
        println!(
            "Catalog source: {}",
            config.data.source.as_deref().unwrap_or("built-in")
        );
        println!("Log level: {}", config.logging.level);
    }
}
