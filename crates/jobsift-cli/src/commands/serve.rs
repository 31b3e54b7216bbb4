//! Serve command - expose the HTTP API over a data file.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use jobsift::{AgentConfig, MockAgent, OpenAICompatibleAgent, QueryAgent, QueryDispatcher};

use crate::cli::AgentChoice;
use crate::server::{app, state::AppState};

/// Network and agent settings for the server.
pub struct ServeOptions {
    pub host: String,
    pub port: u16,
    pub agent: AgentChoice,
    pub model: Option<String>,
    pub api_base: Option<String>,
}

pub fn run(
    file: PathBuf,
    options: ServeOptions,
    aliases: Vec<String>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = super::load_catalog(&file, &aliases)?;
    let addr: SocketAddr = format!("{}:{}", options.host, options.port)
        .parse()
        .map_err(|e| format!("Invalid address {}:{}: {}", options.host, options.port, e))?;

    // Built before the runtime starts: the HTTP agent owns a blocking client.
    let agent = build_agent(&options)?;
    let dispatcher = QueryDispatcher::new(agent.clone());

    let dataset = catalog.dataset();
    println!();
    println!(
        "{} {}",
        "Serving".cyan().bold(),
        file.display().to_string().white().bold()
    );
    println!();
    println!(
        "  {} rows, {} columns",
        dataset.row_count().to_string().white().bold(),
        dataset.column_count()
    );
    if verbose {
        println!("  Columns: {}", dataset.columns().join(", "));
    }
    super::print_bindings(&mut std::io::stdout(), &catalog.bindings())?;
    println!("  Agent: {}", dispatcher.agent_name());
    println!();
    println!("  GET  http://{}/api/health", addr);
    println!("  POST http://{}/api/query", addr);
    println!("  GET  http://{}/api/data/info", addr);
    println!("  POST http://{}/api/filter", addr);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());
    println!();

    let state = AppState::new(catalog, dispatcher);

    let runtime = tokio::runtime::Runtime::new()?;
    let served = runtime.block_on(app::run_server(state, addr));
    drop(runtime);

    // The last handle on a blocking HTTP client must be released off the runtime.
    drop(agent);

    served?;
    println!("{}", "Server stopped.".yellow());
    Ok(())
}

fn build_agent(options: &ServeOptions) -> Result<Arc<dyn QueryAgent>, Box<dyn std::error::Error>> {
    match options.agent {
        AgentChoice::Mock => Ok(Arc::new(MockAgent::new())),
        AgentChoice::OpenAI => {
            let mut config = AgentConfig::default();
            if let Some(ref model) = options.model {
                config.model = model.clone();
            }
            if let Some(ref base) = options.api_base {
                config.api_base = base.clone();
            }
            let agent = OpenAICompatibleAgent::from_env(config)?;
            Ok(Arc::new(agent))
        }
    }
}
