use clap::Parser;
use lua_api_schema::{ClassPage, ScraperConfig};
use std::error::Error;

mod args;
use args::Args;

fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        ::log::error!("Failed to scrape {}: {}", args.input.display(), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from file: {}", path.display());
            ScraperConfig::from_file(path)?
        }
        None => ScraperConfig::default(),
    };

    // Command-line flags override the config file
    if let Some(base_url) = &args.base_url {
        config.base_url = Some(base_url.clone());
    }
    config.pretty |= args.pretty;

    let html = std::fs::read_to_string(&args.input)?;
    ::log::info!("Scraping {} ({} bytes)", args.input.display(), html.len());

    let classes = ClassPage::new(html).with_config(config.clone()).scrape()?;
    ::log::info!("Extracted {} class schema(s)", classes.len());

    let output = if config.pretty {
        serde_json::to_string_pretty(&classes)?
    } else {
        serde_json::to_string(&classes)?
    };
    println!("{}", output);
    Ok(())
}
