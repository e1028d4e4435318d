use std::sync::Arc;

use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mitchdae::{
    command::{handler::CommandHandler, wait::MessageBus},
    config::Config,
    host::console::{ConsoleHost, ConsoleResponder},
    startup,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::seed_catalog(&db).await {
        eprintln!("Failed to generate character catalog: {}", e);
        std::process::exit(1);
    }

    let messages = MessageBus::new(256);
    let handler = CommandHandler::new(db, messages.clone(), &config);
    let responder = Arc::new(ConsoleResponder::new(tokio::io::stdout()));
    let host = ConsoleHost::new(handler, messages, responder);

    tracing::info!("Reading commands from standard input");

    if let Err(e) = host.run(BufReader::new(tokio::io::stdin())).await {
        tracing::error!("Console host stopped: {}", e);
        std::process::exit(1);
    }
}
