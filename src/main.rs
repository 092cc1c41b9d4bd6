//! CLI entry point for site-counts

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_counts::commands::report::OutputFormat;

#[derive(Parser)]
#[command(name = "site-counts")]
#[command(author = "Yukang Chen")]
#[command(version)]
#[command(about = "Publication counts and related posts for a file-based site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render the report for the item being viewed
    #[command(alias = "r")]
    Report {
        /// Id of the current item
        #[arg(short, long)]
        post: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "html")]
        format: OutputFormat,

        /// Class name of the wrapper element
        #[arg(long)]
        class: Option<String>,
    },

    /// List site information
    List {
        /// What to list (types, items)
        #[arg(default_value = "types")]
        r#type: String,
    },

    /// Start a preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "site_counts=debug,info"
    } else {
        "site_counts=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            site_counts::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::Report {
            post,
            format,
            class,
        } => {
            let site = site_counts::SiteCounts::new(&base_dir)?;
            tracing::debug!("Rendering report for item {} as {:?}", post, format);
            site_counts::commands::report::run(&site, post, format, class.as_deref())?;
        }

        Commands::List { r#type } => {
            let site = site_counts::SiteCounts::new(&base_dir)?;
            site_counts::commands::list::run(&site, &r#type)?;
        }

        Commands::Server { port, ip } => {
            let site = site_counts::SiteCounts::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            site_counts::server::start(&site, &ip, port).await?;
        }

        Commands::Version => {
            println!("site-counts version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
