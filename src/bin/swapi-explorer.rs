use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use swapi_explorer::config::{DEFAULT_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_OUTPUT_DIR};
use swapi_explorer::{Client, Config, Explorer, menu};

#[derive(Parser, Debug)]
#[command(
    name = "swapi-explorer",
    version,
    about = "Search, compare & chart Star Wars API data from an interactive menu"
)]
struct Cli {
    /// API root to query.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Directory for saved JSON files and the chart (created if missing).
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Width of the lifespan chart (default 1200).
    #[arg(long, default_value_t = 1200)]
    width: u32,
    /// Height of the lifespan chart (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Stop following species pages after this many.
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: u32,
    /// Save the chart without opening an image viewer.
    #[arg(long, default_value_t = false)]
    no_show: bool,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            base_url: cli.base_url,
            output_dir: cli.output_dir,
            chart_width: cli.width,
            chart_height: cli.height,
            max_pages: cli.max_pages,
            show_chart: !cli.no_show,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::from(Cli::parse());
    log::debug!("starting with {config:?}");

    let client = Client::new()?;
    let mut explorer = Explorer::new(client, config, io::stdout());
    menu::run(&mut explorer, io::stdin().lock())?;
    Ok(())
}
