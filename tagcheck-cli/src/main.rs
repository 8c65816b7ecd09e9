//! tagcheck CLI
//!
//! Checks an HTML document, read from disk or fetched from a URL, for
//! elements matching each selector of a checks file, and prints the
//! selector → presence map as JSON.
//!
//! Usage:
//!   tagcheck [-c checks.json] [-f index.html] [-u <url>]
//!
//! Examples:
//!   tagcheck -c checks.json -f index.html
//!   tagcheck -c checks.json -u https://example.com/

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tagcheck_core::{
    DEFAULT_CHECKS_FILE, DEFAULT_HTML_FILE, DEFAULT_URL, DocumentSource, check, present,
};

#[derive(Parser, Debug)]
#[command(
    name = "tagcheck",
    version,
    about = "Check an HTML document for elements matching a list of CSS selectors."
)]
struct Cli {
    /// Path to checks.json
    #[arg(short, long, value_name = "check_file", default_value = DEFAULT_CHECKS_FILE)]
    checks: PathBuf,

    /// Path to index.html [default: index.html]
    #[arg(short, long, value_name = "html_file")]
    file: Option<PathBuf>,

    /// URL to index.html; takes precedence over --file
    #[arg(short, long, value_name = "url", default_value = DEFAULT_URL)]
    url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // An explicit --file is validated even when --url takes over.
    assert_file_exists(&cli.checks);
    if let Some(file) = &cli.file {
        assert_file_exists(file);
    }

    let file = cli.file.unwrap_or_else(|| PathBuf::from(DEFAULT_HTML_FILE));
    let source = DocumentSource::select(file, &cli.url);
    if let DocumentSource::File(path) = &source {
        assert_file_exists(path);
    }

    let results = check(&source, &cli.checks)
        .await
        .with_context(|| format!("failed to check {source}"))?;

    present(&results, &mut io::stdout().lock())?;
    Ok(())
}

/// Exit with status 1 if `path` is missing.
fn assert_file_exists(path: &Path) {
    if !path.exists() {
        println!("{} does not exist. Exiting.", path.display());
        process::exit(1);
    }
}
