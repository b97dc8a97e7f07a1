//! chatdocs CLI
//!
//! Main entry point for the chat-with-your-documents tool: answers operator
//! questions from passages retrieved out of a pre-built vector index, citing
//! the source file and line of each passage used.

mod chat;
mod startup;

use chat::ChatSession;
use chatdocs_core::{logging, AppError, AppResult, SessionConfig};
use chatdocs_llm::OpenAiClient;
use chatdocs_store::ChromaStore;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Chat with your documents over a pre-built vector index
#[derive(Parser, Debug)]
#[command(name = "chatdocs")]
#[command(about = "Answer questions from retrieved document context", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory where the vector index is persisted
    #[arg(long = "persist_directory", default_value = "chroma_storage")]
    persist_directory: PathBuf,

    /// Name of the collection to query
    #[arg(long = "collection_name", default_value = "documents_collection")]
    collection_name: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Fatal: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run() -> AppResult<()> {
    // Fold a .env file into the environment before the credential check.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config = SessionConfig::load()?
        .with_overrides(Some(cli.persist_directory), Some(cli.collection_name));

    logging::init_logging()?;

    tracing::info!("chatdocs starting");
    tracing::debug!("Persist directory: {:?}", config.persist_directory);
    tracing::debug!("Collection: {}", config.collection_name);

    // Startup guard: without a credential the loop is never entered and the
    // process exits cleanly.
    if !config.has_credential() {
        println!("{}", startup::MISSING_CREDENTIAL_NOTICE);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // One-time model override; the choice is fixed for the session.
    let model = startup::prompt_for_model(&config.model, &mut input, &mut output)?;
    let config = config.with_model(model);

    let store = match ChromaStore::connect(&config.store_url, &config.collection_name).await {
        Ok(store) => store,
        Err(e) => {
            if matches!(e, AppError::StoreUnavailable(_)) {
                eprintln!(
                    "Could not reach the vector store at {}. Serve the index, e.g. `chroma run --path {}`.",
                    config.store_url,
                    config.persist_directory.display()
                );
            }
            return Err(e);
        }
    };

    let api_key = config.api_key.clone().unwrap_or_default();
    let llm = OpenAiClient::new(api_key);

    let session = ChatSession::new(config, store, llm);
    session.run(&mut input, &mut output).await?;

    tracing::info!("Session ended");
    Ok(())
}
