// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::consts::{BASE_URL, DEFAULT_LOCATION, DEFAULT_QUERY};
use crate::config::options::{AppOptions, ExportFormat};
use crate::progress::Progress;
use crate::{csv, file, scrape};

#[derive(Debug, Parser)]
#[command(name = "cli", about = "Scrape job listings and tag the skills they mention")]
pub struct Args {
    /// Job title / search query
    #[arg(short, long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Location filter
    #[arg(short, long, default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Number of result pages to scrape
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=5))]
    pub pages: u32,

    /// Output file or directory (trailing separator). Defaults to out/job_data.<ext>
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Write the table to stdout instead of a file
    #[arg(long, conflicts_with = "out")]
    pub stdout: bool,

    /// Search endpoint
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,
}

impl Args {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.scrape.query = self.query.clone();
        opts.scrape.location = self.location.clone();
        opts.scrape.set_pages(self.pages);
        opts.scrape.base_url = self.base_url.clone();
        opts.export.format = self.format;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Prints one line per page to stderr.
struct CliProgress {
    pages: u32,
}

impl Progress for CliProgress {
    fn begin(&mut self, pages: u32) {
        self.pages = pages;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, page: u32, listings: usize) {
        eprintln!("Page {}/{}: {} listing(s)", page + 1, self.pages, listings);
    }
    fn finish(&mut self, total: usize) {
        eprintln!("Scraped {total} jobs!");
    }
}

pub fn run() -> crate::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> crate::Result<()> {
    let opts = args.to_options();
    let mut progress = CliProgress { pages: 0 };
    progress.log("Scraping job data...");

    let jobs = scrape::collect_jobs(&opts.scrape, Some(&mut progress))?;

    if args.stdout {
        let text = csv::to_export_string(&jobs, opts.export.format)?;
        io::stdout().lock().write_all(text.as_bytes())?;
    } else {
        let path = file::write_export(&opts.export, &jobs)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
