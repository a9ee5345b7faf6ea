use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use psychotech::cli::{self, LlmOverrides};
use psychotech::config::Provider;

#[derive(Parser)]
#[command(name = "psychotech", version)]
#[command(
    about = "Explain psychology concepts through analogies with everyday technology",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
struct LlmArgs {
    /// Path to config file (defaults to ./psychotech.toml or ~/.config/psychotech/config.toml)
    #[arg(long)]
    config: Option<String>,

    /// Override LLM provider (anthropic, openai, openai-compatible, gemini)
    #[arg(long)]
    provider: Option<Provider>,

    /// Override LLM model (e.g., "gpt-4o", "claude-sonnet-4-20250514")
    #[arg(long)]
    model: Option<String>,

    /// Override the provider base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Use mock LLM client instead of calling a provider
    #[arg(long)]
    dry_run: bool,
}

impl LlmArgs {
    fn overrides(&self) -> LlmOverrides {
        LlmOverrides {
            provider: self.provider,
            model: self.model.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session
    Session {
        /// Academic context applied to the first submission
        #[arg(long)]
        context: Option<String>,

        #[command(flatten)]
        llm: LlmArgs,
    },

    /// Generate a single analogy and print it
    Generate {
        /// Psychology concept (e.g., "Biais de confirmation")
        concept: String,

        /// Optional academic context
        #[arg(short, long)]
        context: Option<String>,

        /// Copy the result to the clipboard
        #[arg(long)]
        copy: bool,

        /// Print the analogy as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        llm: LlmArgs,
    },

    /// Print the prompt that would be sent for a concept
    Prompt {
        concept: String,

        #[arg(short, long)]
        context: Option<String>,

        /// Also print the system prompt
        #[arg(long)]
        system: bool,
    },

    /// List the technology categories used for analogies
    Catalog {
        /// Category key (e.g., "socialMedia"); shows only that category
        key: Option<String>,

        /// Show every facet
        #[arg(short = 'a', long)]
        all: bool,
    },

    /// Validate configuration and API keys
    ConfigCheck {
        #[arg(long)]
        config: Option<String>,
    },

    /// Generate shell completions
    Completions { shell: Shell },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Session { context, llm } => {
            cli::session::run(context, llm.config.clone(), llm.overrides(), llm.dry_run).await?;
        }
        Commands::Generate {
            concept,
            context,
            copy,
            json,
            llm,
        } => {
            cli::generate::run(
                concept,
                context,
                copy,
                json,
                llm.config.clone(),
                llm.overrides(),
                llm.dry_run,
            )
            .await?;
        }
        Commands::Prompt {
            concept,
            context,
            system,
        } => cli::prompt::run(concept, context, system)?,
        Commands::Catalog { key, all } => cli::catalog::run(key.as_deref(), all)?,
        Commands::ConfigCheck { config } => cli::config_check::run(config)?,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "psychotech",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
