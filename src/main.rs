use clap::Parser;
use page_extract::{ExtractorConfig, PageExtractor, normalize};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

mod args;
use args::{Args, Command};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Command::Extract {
            url,
            file,
            config,
            pretty,
        } => match run_extract(&url, file.as_deref(), config.as_deref(), pretty) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                ::log::error!("Extraction failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Normalize { urls } => run_normalize(&urls),
    }
}

fn run_extract(
    url: &str,
    file: Option<&Path>,
    config: Option<&Path>,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => ExtractorConfig::from_file(path)?,
        None => ExtractorConfig::default(),
    };
    let extractor = PageExtractor::new(&config)?;

    let html = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    ::log::info!("Extracting {} ({} bytes of HTML)", url, html.len());
    let page = extractor.extract(&html, url);

    let json = if pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    println!("{}", json);
    Ok(())
}

fn run_normalize(urls: &[String]) -> ExitCode {
    let mut failed = 0;
    for url in urls {
        match normalize(url) {
            Ok(key) => println!("{}", key),
            Err(e) => {
                ::log::error!("Cannot normalize {:?}: {}", url, e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        ::log::warn!("{} of {} URLs could not be normalized", failed, urls.len());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
