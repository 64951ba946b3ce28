use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-extract")]
#[command(about = "Extracts crawl-ready data from HTML pages and normalizes URLs")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract page data from an HTML document and print it as JSON
    Extract {
        /// URL the document was fetched from (base for relative references)
        #[arg(short, long)]
        url: String,

        /// HTML file to read (reads stdin when omitted)
        file: Option<PathBuf>,

        /// JSON extractor configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the dedup key for each URL
    Normalize {
        /// URLs to normalize
        #[arg(required = true)]
        urls: Vec<String>,
    },
}
