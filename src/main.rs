//! bookview - A terminal browser for book catalogs
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use bookview::{HeadlessQuery, Overrides};
use bookview_core::prelude::*;
use clap::Parser;

/// bookview - Browse, filter and page through a book catalog
#[derive(Parser, Debug)]
#[command(name = "bookview", version)]
#[command(about = "A terminal browser for book catalogs", long_about = None)]
struct Args {
    /// Catalog JSON file (overrides catalog.path)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Config file to use instead of the .bookview/config.toml lookup
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Theme name from the theme table (overrides ui.theme)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Previews per page (overrides ui.page_size)
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Print results as JSON lines instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Title substring (headless only)
    #[arg(long, requires = "headless", default_value = "")]
    title: String,

    /// Author id or "any" (headless only)
    #[arg(long, requires = "headless", value_name = "ID")]
    author: Option<String>,

    /// Genre id or "any" (headless only)
    #[arg(long, requires = "headless", value_name = "ID")]
    genre: Option<String>,

    /// 1-based page to render up to (headless only)
    #[arg(long, requires = "headless", default_value_t = 1, value_name = "N")]
    page: usize,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            catalog: self.catalog.clone(),
            theme: self.theme.clone(),
            page_size: self.page_size,
        }
    }

    fn query(&self) -> HeadlessQuery {
        HeadlessQuery {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            page: self.page,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logging goes to a file, since the TUI owns stdout
    bookview_core::logging::init()?;

    let working_dir = std::env::current_dir()?;
    info!("Working directory: {}", working_dir.display());

    let state = bookview::load_state(&working_dir, &args.overrides())
        .context("Startup failed")?;

    let result = if args.headless {
        bookview::run_headless(state, &args.query())
    } else {
        bookview_tui::run(state).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    Ok(result?)
}
