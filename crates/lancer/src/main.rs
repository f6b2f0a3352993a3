mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lancer_common::{logger, AppConfig};
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

/// Chat-completion provider selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Provider {
    Openai,
    Anthropic,
}

#[derive(Parser)]
#[command(name = "lancer")]
#[command(about = "Lancer - LLM task runner and freelancer matcher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a one-shot prompt to a chat model
    Chat {
        /// Prompt text
        prompt: String,

        /// Provider to use
        #[arg(long, value_enum, default_value = "openai")]
        provider: Provider,
    },

    /// Summarize an email with GPT, then refine it with Claude
    Email {
        /// Email text file; reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Generate marketing copy for a product
    Marketing {
        /// Product name or description
        product: String,
    },

    /// Fetch a news article, summarize it and extract keywords
    News {
        /// Article URL
        url: String,
    },

    /// Match freelancer profiles to a project description
    Match {
        /// CSV file with freelancer profiles (name, skills, experience, ...)
        csv: PathBuf,

        /// Project description to match against
        #[arg(long)]
        query: String,

        /// Minimum similarity score for a profile to be included
        #[arg(long, default_value_t = 0.8)]
        threshold: f32,

        /// Maximum number of matches to print
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root before the
    // config reads them
    load_dotenv_from_project_root();

    let config = AppConfig::from_env()?;
    logger::setup_console_logging(&config.log_level);

    tracing::debug!(
        "Configuration loaded - OpenAI model: {}, Anthropic model: {}, Embedding model: {}",
        config.openai_chat_model,
        config.anthropic_chat_model,
        config.embedding_model
    );

    match cli.command {
        Commands::Chat { prompt, provider } => {
            commands::run_chat(&config, provider, &prompt).await?;
        }
        Commands::Email { file } => {
            commands::run_email(&config, file).await?;
        }
        Commands::Marketing { product } => {
            commands::run_marketing(&config, &product).await?;
        }
        Commands::News { url } => {
            commands::run_news(&config, &url).await?;
        }
        Commands::Match {
            csv,
            query,
            threshold,
            limit,
        } => {
            commands::run_match(&config, &csv, &query, threshold, limit).await?;
        }
    }

    Ok(())
}
