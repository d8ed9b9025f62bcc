use std::sync::Arc;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use onetable::{Table, aws};

mod subcommands;

#[derive(clap::Parser)]
#[command(
    name = "onetable",
    version,
    about = "Query and update DynamoDB tables with SQL-like conditions",
    long_about = None
)]
struct Cli {
    /// Increase output verbosity (-v, -vv, etc.)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Endpoint URL for the DynamoDB service
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// Table to operate on
    #[arg(long, global = true, env = "ONETABLE_TABLE")]
    table: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the request artifacts a condition translates into, without sending anything
    Translate {
        query: String,
        /// Arguments as JSON literals (`25`, `'"1234"'`); other text is sent as a string
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    #[command(flatten)]
    Items(TableCommand),
}

#[derive(clap::Subcommand)]
enum TableCommand {
    /// Fetch a single item by key, e.g. `get-one "userId = $1" '"1234"'`
    GetOne {
        query: String,
        /// Arguments as JSON literals (`25`, `'"1234"'`); other text is sent as a string
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Query items by key condition, e.g. `get-many "userId = $1" '"1234"'`
    GetMany {
        query: String,
        /// Arguments as JSON literals (`25`, `'"1234"'`); other text is sent as a string
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Put an item given as a JSON object
    Put { item: String },
    /// Update fields (JSON object) of the item with the given key (JSON object)
    Update { key: String, updates: String },
    /// Delete the item with the given key (JSON object)
    Delete { key: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = <Cli as clap::Parser>::parse();
    init_tracing(cli.verbose)?;

    let command = match cli.command {
        Commands::Translate { query, args } => {
            return subcommands::translate::command(subcommands::translate::Options {
                query,
                args,
            });
        }
        Commands::Items(command) => command,
    };

    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .map_err(|_| eyre!("failed to install aws-lc-rs crypto provider"))?;

    let table_name = cli
        .table
        .ok_or_else(|| eyre!("no table given. Use --table or ONETABLE_TABLE."))?;
    let client = aws::new_client(cli.endpoint_url.as_deref())
        .await
        .wrap_err("Failed to create DynamoDB client")?;
    let table = Table::new(Arc::new(client), table_name);

    run(&table, command).await
}

async fn run(table: &Table, command: TableCommand) -> Result<()> {
    match command {
        TableCommand::GetOne { query, args } => {
            subcommands::read::get_one(table, subcommands::read::Options { query, args }).await
        }
        TableCommand::GetMany { query, args } => {
            subcommands::read::get_many(table, subcommands::read::Options { query, args }).await
        }
        TableCommand::Put { item } => subcommands::write::put(table, &item).await,
        TableCommand::Update { key, updates } => {
            subcommands::write::update(table, &key, &updates).await
        }
        TableCommand::Delete { key } => subcommands::write::delete(table, &key).await,
    }
}

fn init_tracing(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .try_init()
        .wrap_err("Failed to initialise logging")
}
