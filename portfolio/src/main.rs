//! Neon portfolio server.
//!
//! Serves a single-page portfolio with animated panels and a terminal box
//! answered by Gemini.
//!
//! ```bash
//! cargo run -p portfolio -- serve --port 8501 --asset-dir assets
//! cargo run -p portfolio -- render --query "explain IoT Telemetry" --out page.html
//! ```

mod server;

use clap::{Args, Parser, Subcommand};
use portfolio_core::{Portfolio, PortfolioConfig, SecretStore};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Neon portfolio web server")]
struct Cli {
    #[command(flatten)]
    site: SiteArgs,

    /// Listener settings used when no subcommand is given
    #[command(flatten)]
    serve: ServeArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    /// The selected subcommand; plain `portfolio` serves.
    fn into_parts(self) -> (SiteArgs, Command) {
        let command = self.command.unwrap_or(Command::Serve(self.serve));
        (self.site, command)
    }
}

#[derive(Debug, Args)]
struct SiteArgs {
    /// Directory animation JSON files are read from
    #[arg(long, global = true, env = "PORTFOLIO_ASSET_DIR", default_value = ".")]
    asset_dir: PathBuf,

    /// JSON file overriding the built-in site content
    #[arg(long, global = true, env = "PORTFOLIO_CONTENT")]
    content: Option<PathBuf>,

    /// TOML secrets file consulted when GOOGLE_API_KEY is not in the environment
    #[arg(
        long,
        global = true,
        env = "PORTFOLIO_SECRETS",
        default_value = portfolio_core::config::DEFAULT_SECRETS_PATH
    )]
    secrets: PathBuf,

    /// Gemini model used by the terminal assistant
    #[arg(long, global = true, env = "PORTFOLIO_MODEL", default_value = portfolio_core::config::DEFAULT_MODEL)]
    model: String,

    /// HTML-escape assistant replies instead of rendering them verbatim
    #[arg(long, global = true, env = "PORTFOLIO_ESCAPE_OUTPUT")]
    escape_output: bool,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "PORTFOLIO_BIND", default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to listen on
    #[arg(long, short, env = "PORTFOLIO_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

impl ServeArgs {
    fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the portfolio over HTTP (default)
    Serve(ServeArgs),
    /// Render the page once and write it to a file or stdout
    Render {
        /// Terminal query to answer in this render
        #[arg(long, short)]
        query: Option<String>,

        /// Output file; stdout when omitted
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
}

impl SiteArgs {
    /// Resolve the process configuration. The secret is read exactly once here.
    fn into_config(self) -> PortfolioConfig {
        let mut config = PortfolioConfig::new()
            .with_asset_dir(self.asset_dir)
            .with_model(self.model)
            .with_escape_output(self.escape_output)
            .with_secrets(&SecretStore::default().with_file(self.secrets));
        if let Some(path) = self.content {
            config = config.with_content_path(path);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let (site_args, command) = Cli::parse().into_parts();
    let config = site_args.into_config();
    tracing::info!(
        assistant = config.api_key.is_some(),
        model = %config.model,
        assets = %config.asset_dir.display(),
        "configuration resolved"
    );

    let site = Portfolio::from_config(&config).await;

    match command {
        Command::Serve(args) => server::serve(site, args.addr()).await,
        Command::Render { query, out } => {
            let page = site.render(query.as_deref()).await;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, page.html).await?;
                    tracing::info!(path = %path.display(), "page written");
                }
                None => println!("{}", page.html),
            }
            Ok(())
        }
    }
}
