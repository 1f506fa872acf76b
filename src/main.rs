//! graphknow — tool-augmented chat over a Neo4j knowledge graph
//!
//! Seeds the graph, creates a GraphKnowledgeBot assistant with the
//! graph_search tool, drives one question through the run lifecycle, and
//! prints the resulting conversation.

use clap::Parser;
use graphknow_agent::{print_transcript, DriverConfig, RunDriver};
use graphknow_core::{OpenAiConfig, StoreConfig};
use graphknow_llm::{AssistantService, AssistantSpec, OpenAiAssistants};
use graphknow_store::{GraphStore, Neo4jStore};
use graphknow_tools::create_default_registry;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const DEFAULT_QUESTION: &str = "Who is the son of Mary Lee Pfeiffer?";

const ASSISTANT_NAME: &str = "GraphKnowledgeBot";

const INSTRUCTIONS: &str = "\
You are the 'GraphKnowledgeBot': a chatbot equipped to perform sophisticated \
queries on a Neo4j graph database. Your expertise lies in providing detailed \
and contextually relevant answers about people and their interconnections, \
using the 'graph_search' tool.

Interpret the user's question, identify the key individuals and the \
relationships or details sought, and transform it into a precise Cypher \
query. Run the query through the 'graph_search' tool, analyse the returned \
rows for relevance, and communicate the findings clearly as a direct answer \
about the people and connections in question.";

#[derive(Parser)]
#[command(name = "graphknow", about = "Graph-backed knowledge chat assistant")]
struct Cli {
    /// Question to ask the assistant
    question: Option<String>,

    /// Cypher seed script executed once at startup
    #[arg(long, default_value = "seed.cyp")]
    seed: PathBuf,

    /// Assistant model
    #[arg(short, long, default_value = "gpt-4-1106-preview")]
    model: String,

    /// Wait between run polls, in milliseconds
    #[arg(long, default_value_t = 1000)]
    poll_interval_ms: u64,

    /// Overall wait budget for the run, in seconds
    #[arg(long, default_value_t = 120)]
    max_wait_secs: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graphknow=info".into()),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let store_config = StoreConfig::from_env()?;
    let openai_config = OpenAiConfig::from_env()?;

    // The store owns the connection pool; it is released when this function
    // returns, on error paths included.
    let store = Arc::new(Neo4jStore::connect(&store_config).await?);
    store.seed_from_file(&cli.seed).await?;

    let registry = Arc::new(create_default_registry(store.clone()));

    let mut client = OpenAiAssistants::new(&openai_config.api_key);
    if let Some(base) = &openai_config.base_url {
        client = client.with_base_url(base);
    }
    let service: Arc<dyn AssistantService> = Arc::new(client);

    let spec = AssistantSpec {
        model: cli.model.clone(),
        name: ASSISTANT_NAME.to_string(),
        instructions: INSTRUCTIONS.to_string(),
        tools: registry.definitions(),
    };
    let assistant = service.create_assistant(&spec).await?;
    info!("assistant {} created (model {})", assistant.id, cli.model);

    let driver = RunDriver::new(
        service,
        registry,
        DriverConfig {
            poll_interval: Duration::from_millis(cli.poll_interval_ms),
            max_wait: Duration::from_secs(cli.max_wait_secs),
        },
    );

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    let question = cli
        .question
        .unwrap_or_else(|| DEFAULT_QUESTION.to_string());
    info!("asking: {}", question);

    let messages = driver.ask(&assistant.id, &question, cancel).await?;
    print_transcript(&messages);
    Ok(())
}
