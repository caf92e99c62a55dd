use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listing-insight")]
#[command(about = "Keyword, title and price analysis for a marketplace search-results page")]
#[command(version)]
pub struct Args {
    /// Marketplace search URL (e.g. https://www.ebay.com/sch/i.html?_nkw=...)
    pub url: String,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,

    /// Number of keywords to list
    #[arg(long, default_value_t = 30)]
    pub top: usize,

    /// Print the raw listing titles
    #[arg(long)]
    pub show_titles: bool,

    /// Character budget for the suggested title
    #[arg(long)]
    pub max_title_length: Option<usize>,

    /// Number of listings to request and keep
    #[arg(long)]
    pub items_per_page: Option<usize>,

    /// Total number of fetch attempts
    #[arg(long)]
    pub max_retries: Option<u32>,
}
