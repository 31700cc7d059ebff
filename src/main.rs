use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader as AsyncBufReader};
use tracing_subscriber::EnvFilter;

use golinks_editor::config::{self, Config};
use golinks_editor::{
    import, Editor, Mapping, MemoryDocument, PageLocation, SaveClient, SystemOpener,
    DESTINATION_FIELD,
};

/// Edit golinks redirects from the terminal
#[derive(Parser)]
#[command(name = "golinks-editor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service address, overrides GOLINKS_URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Quiet period before a change is saved, overrides GOLINKS_DEBOUNCE_MS
    #[arg(long, global = true)]
    debounce_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read destinations for ITEM from stdin, one per line, saving after each pause
    Edit { item: String },
    /// Set the destination of ITEM
    Save { item: String, destination: String },
    /// Open the edit page of ITEM in the browser
    Open {
        item: String,
        /// Print the address instead of opening it
        #[arg(long)]
        print: bool,
    },
    /// Remove the mapping for ITEM
    Delete { item: String },
    /// Load `source;destination` records from FILE
    Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("golinks_editor=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(raw) = &cli.base_url {
        config.base_url = config::parse_url(raw)?;
    }
    if let Some(ms) = cli.debounce_ms {
        config.debounce = Duration::from_millis(ms);
    }

    let client = SaveClient::new(&config.base_url)?;

    match cli.command {
        Commands::Edit { item } => {
            let location = PageLocation::for_item(&config.base_url, &item)?;
            tracing::info!(source = %location.source(), "editing");
            let mut editor = Editor::with_delay(
                location,
                client,
                MemoryDocument::new(),
                SystemOpener,
                config.debounce,
            );

            let mut lines = AsyncBufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                editor.document().set_value(DESTINATION_FIELD, line.trim());
                editor.process_change();
            }
            editor.settle().await;
        }
        Commands::Save { item, destination } => {
            let location = PageLocation::for_item(&config.base_url, &item)?;
            client
                .save(&Mapping::new(location.source(), destination))
                .await?;
        }
        Commands::Open { item, print } => {
            let location = PageLocation::for_item(&config.base_url, &item)?;
            if print {
                println!("{}", location.url());
            } else {
                let editor = Editor::new(location, client, MemoryDocument::new(), SystemOpener);
                editor.edit_item(&item)?;
            }
        }
        Commands::Delete { item } => {
            client.save(&Mapping::removal(item)).await?;
        }
        Commands::Import { file } => {
            let reader = BufReader::new(File::open(&file)?);
            let count = import::import_mappings(&client, reader).await?;
            tracing::info!(count, file = %file.display(), "import finished");
        }
    }

    Ok(())
}
