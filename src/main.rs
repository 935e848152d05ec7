use anyhow::Result;
use clap::{Parser, Subcommand};

/// gatehouse - single-credential demo portal
#[derive(Parser)]
#[command(name = "gatehouse")]
#[command(about = "Demo web portal guarded by one credential and a signed session cookie", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print an argon2 hash of a password, suitable for DEMO_PASS_HASH
    HashPassword {
        password: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            // Load configuration; missing secrets are fatal here, never at
            // request time.
            let config = gatehouse::config::Config::load(cli.config)?;
            config.validate().map_err(|e| anyhow::anyhow!(e))?;

            gatehouse::observability::init_observability(&config.observability.log_level)?;

            gatehouse::server::serve(config, host, port).await
        }
        Commands::HashPassword { password } => {
            println!("{}", gatehouse_session::hash_password(&password)?);
            Ok(())
        }
    }
}
