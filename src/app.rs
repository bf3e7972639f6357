use std::error::Error;
use std::io;
use std::rc::Rc;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands, TeamCommands};
use crate::{commands, output};
use pitwall::client::AiClient;
use pitwall::config::Config;
use pitwall::error::Result;
use pitwall::preference::PreferenceBridge;
use pitwall::store::FileStore;
use pitwall::types::TeamLogos;

#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pitwall=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");

        // Show error chain if verbose flag was passed
        if std::env::args().any(|arg| arg == "--verbose" || arg == "-v") {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_output(cli.json);

    match cli.command {
        // Commands that don't require config
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "pitwall", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run()?;
        }
        command => {
            let config = Config::load()?.with_api_base(cli.api_base);

            match command {
                Commands::Team { action } => {
                    let store = FileStore::open(Config::store_path()?);
                    let mut bridge = PreferenceBridge::new(
                        store,
                        config.storage.clone(),
                        TeamLogos::new(&config.assets.logo_dir),
                    );

                    match action {
                        TeamCommands::List => commands::team::list(&bridge),
                        TeamCommands::Set { key, name } => {
                            commands::team::set(&mut bridge, &key, name)?;
                        }
                        TeamCommands::Show => commands::team::show(&bridge),
                        TeamCommands::Clear => commands::team::clear(&mut bridge)?,
                    }
                }
                Commands::Sentiment(args) => {
                    let client = Rc::new(AiClient::new(config.api.clone()));
                    commands::analyze::sentiment(client, &config, args).await?;
                }
                Commands::Summary(args) => {
                    let client = Rc::new(AiClient::new(config.api.clone()));
                    commands::analyze::summary(client, &config, args).await?;
                }
                Commands::Ask(args) => {
                    let client = Rc::new(AiClient::new(config.api.clone()));
                    commands::analyze::ask(client, &config, args).await?;
                }
                Commands::Health => {
                    let client = AiClient::new(config.api.clone());
                    commands::health::check(&client).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
