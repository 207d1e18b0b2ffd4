use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lua-api-schema")]
#[command(about = "Scrapes a Lua API class documentation page into JSON-Schema documents")]
#[command(version)]
pub struct Args {
    /// Path to the saved HTML page
    pub input: PathBuf,

    /// URL the page was served from (base for relative links)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
