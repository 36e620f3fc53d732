use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reqdoc::config::loader::load_or_default;
use reqdoc::render::StdoutSink;
use reqdoc::{store, ReqwestTransport};

#[derive(Parser)]
#[command(name = "reqdoc")]
#[command(about = "Run plain-text HTTP request documents", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a request document and print the rendered exchange
    Run { file: PathBuf },
    /// Create a new request document under the document root
    New { name: String },
    /// List saved request documents
    List,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reqdoc=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    if !config.enable {
        tracing::info!("disabled by configuration");
        return Ok(());
    }

    tracing::debug!(
        root = %config.root,
        detect = config.detect,
        proxy = !config.agent.is_empty(),
        "configuration loaded"
    );

    // Last-resort document root when neither config nor $HOME provide one.
    let storage_fallback = std::env::temp_dir().join("reqdoc");

    match cli.command {
        Commands::Run { file } => {
            let text = fs::read_to_string(&file)?;
            let transport = ReqwestTransport::new(&config.agent)?;
            let mut sink = StdoutSink;
            // failures are rendered into the pane; the process still
            // exits cleanly
            let _ = reqdoc::run_document(&text, &transport, &mut sink).await;
        }
        Commands::New { name } => {
            let root = store::resolve_root(&config, &storage_fallback);
            let path = store::new_document(&root, &name)?;
            println!("{}", path.display());
        }
        Commands::List => {
            let root = store::resolve_root(&config, &storage_fallback);
            for name in store::list(&root) {
                println!("{name}");
            }
        }
    }

    Ok(())
}
