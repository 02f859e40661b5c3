use clap::Parser;
use frame_drop::application::handler::DropHandler;
use frame_drop::config::Config;
use frame_drop::domain::ports::UserStoreBox;
use frame_drop::infrastructure::erc20::Erc20Ledger;
use frame_drop::infrastructure::in_memory::InMemoryUserStore;
use frame_drop::infrastructure::neynar::NeynarVerifier;
use frame_drop::interfaces::csv::user_reader::UserReader;
use frame_drop::interfaces::http::frame::FrameRenderer;
use frame_drop::interfaces::http::{self, AppState};
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs::File;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "frame_drop=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();

    let users = open_user_store(&config)?;

    if let Some(path) = &config.users {
        let file = File::open(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot open users file {}", path.display()))?;
        let report = UserReader::new(file)
            .seed(users.as_ref())
            .await
            .into_diagnostic()?;
        info!(
            inserted = report.inserted,
            existing = report.existing,
            malformed = report.malformed,
            "users loaded"
        );
    }

    let signing_key = config.signing_key();
    if signing_key.is_none() {
        warn!("MINTER_PRIVATE_KEY is not set; every drop will fail");
    }

    let verifier = NeynarVerifier::new(&config.neynar_url, &config.neynar_api_key);
    let ledger = Erc20Ledger::new(&config.rpc_url, &config.contract_address, config.chain_id)
        .into_diagnostic()?;

    let handler = DropHandler::new(Box::new(verifier), users, Box::new(ledger), signing_key);
    let renderer = FrameRenderer::new(config.images(), &config.site_url);
    let app = http::router(AppState::new(handler, renderer));

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .into_diagnostic()?;
    info!(addr = %config.listen, "frame drop listening");
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}

#[cfg(feature = "storage-rocksdb")]
fn open_user_store(config: &Config) -> Result<UserStoreBox> {
    use frame_drop::infrastructure::rocksdb::RocksDBUserStore;

    match &config.db_path {
        Some(path) => {
            let store = RocksDBUserStore::open(path).into_diagnostic()?;
            Ok(Box::new(store))
        }
        None => Ok(Box::new(InMemoryUserStore::new())),
    }
}

#[cfg(not(feature = "storage-rocksdb"))]
fn open_user_store(config: &Config) -> Result<UserStoreBox> {
    if config.db_path.is_some() {
        warn!(
            "WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
        );
    }
    Ok(Box::new(InMemoryUserStore::new()))
}
