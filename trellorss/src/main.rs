//! trellorss
//!
//! Turns the recent activity on your Trello boards into an RSS 2.0 feed.
//! Uses hexagonal (ports & adapters) architecture: the Trello API sits behind
//! a port trait, classification and assembly are pure application code.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;


use adapters::TrelloClientImpl;
use app::FeedService;
use config::Config;
use domain::entities::Scope;
use feed::render_feed;

#[derive(Debug, Parser)]
#[command(
    name = "trellorss",
    about = "Generate an RSS feed from recent Trello activity",
    version
)]
struct Cli {
    /// Output file, or `-` for stdout
    output: PathBuf,

    /// Number of items to keep; negative keeps all
    #[arg(default_value_t = -1, allow_negative_numbers = true)]
    limit: i64,

    /// Only read this board
    #[arg(long, env = "TRELLO_BOARD", conflicts_with = "all_private")]
    board: Option<String>,

    /// The board is public and can be read without a token
    #[arg(long, requires = "board")]
    public: bool,

    /// Read all private activity with a single aggregate call
    #[arg(long)]
    all_private: bool,

    /// Kinds to include, comma separated (default: every configured kind)
    #[arg(long, env = "TRELLO_RSS_INCLUDE", value_delimiter = ',')]
    kinds: Vec<String>,
}

impl Cli {
    fn scope(&self) -> Scope {
        match (&self.board, self.all_private) {
            (Some(id), _) => Scope::Board {
                id: id.clone(),
                public: self.public,
            },
            (None, true) => Scope::AllPrivate,
            (None, false) => Scope::AllBoards,
        }
    }

    fn limit(&self) -> Option<usize> {
        usize::try_from(self.limit).ok()
    }
}

fn write_output(path: &Path, xml: &str) -> Result<()> {
    if path.as_os_str() == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(xml.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    std::fs::write(path, xml).with_context(|| format!("Failed to write {}", path.display()))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so the feed can be written to stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,trellorss=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let scope = cli.scope();

    let config = Config::from_env()?;
    config.check_scope(&scope)?;

    let trello = Arc::new(TrelloClientImpl::new(
        config.api_url.clone(),
        config.api_key.clone(),
        config.token_for(&scope),
    ));

    let mut service = FeedService::new(trello, config.kinds.clone(), config.channel.clone());
    let kinds = if cli.kinds.is_empty() {
        service.all_kinds()
    } else {
        cli.kinds.clone()
    };

    tracing::info!("Generating feed for {}", scope);
    let feed = service
        .generate(kinds.as_slice(), &scope, cli.limit())
        .await?;
    let xml = render_feed(&feed)?;

    write_output(&cli.output, &xml)?;
    tracing::info!(
        "Wrote {} items to {}",
        feed.items.len(),
        cli.output.display()
    );

    Ok(())
}
