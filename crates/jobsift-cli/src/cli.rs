//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jobsift: query job postings by filters or in plain language
#[derive(Parser)]
#[command(name = "jobsift")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API over a data file
    Serve {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port for web server
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Agent used for natural-language queries
        #[arg(long, default_value = "openai")]
        agent: AgentChoice,

        /// Model to use (e.g., "gemini-2.5-flash", "gpt-4o")
        #[arg(long)]
        model: Option<String>,

        /// Base URL of an OpenAI-compatible API
        #[arg(long)]
        api_base: Option<String>,

        /// Extra column alias, lowest priority (e.g., location=region)
        #[arg(long, value_name = "CATEGORY=COLUMN")]
        alias: Vec<String>,
    },

    /// Print dataset shape and filter options as JSON
    Info {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Extra column alias, lowest priority (e.g., location=region)
        #[arg(long, value_name = "CATEGORY=COLUMN")]
        alias: Vec<String>,
    },

    /// Filter a data file and print the matches as JSON
    Filter {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Location substring
        #[arg(long)]
        location: Option<String>,

        /// Company substring
        #[arg(long)]
        company: Option<String>,

        /// Role substring
        #[arg(long)]
        role: Option<String>,

        /// Comma-separated skills, any of which may match
        #[arg(long)]
        skills: Option<String>,

        /// Extra column alias, lowest priority (e.g., location=region)
        #[arg(long, value_name = "CATEGORY=COLUMN")]
        alias: Vec<String>,
    },
}

/// Agent choice for natural-language queries
#[derive(Clone, Debug, Default)]
pub enum AgentChoice {
    /// OpenAI-compatible API (requires JOBSIFT_API_KEY, GEMINI_API_KEY or OPENAI_API_KEY)
    #[default]
    OpenAI,
    /// Mock agent for testing and offline use
    Mock,
}

impl std::str::FromStr for AgentChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" | "gemini" => Ok(AgentChoice::OpenAI),
            "mock" => Ok(AgentChoice::Mock),
            _ => Err(format!("Unknown agent: {}. Use openai or mock.", s)),
        }
    }
}

impl std::fmt::Display for AgentChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgentChoice::OpenAI => write!(f, "openai"),
            AgentChoice::Mock => write!(f, "mock"),
        }
    }
}
