// src/scrape.rs
//
// The pipeline: for each requested page, fetch → extract → match skills.
// Strictly sequential; the first failed fetch ends the run with its error.

use reqwest::blocking::Client;

use crate::{
    config::{consts::SKILLS, options::ScrapeOptions},
    core::net,
    data::JobRecord,
    error::Result,
    progress::Progress,
    specs::listings,
};

/// Collect every listing on pages `0..opts.page_count()`, skills filled in.
pub fn collect_jobs(
    opts: &ScrapeOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Vec<JobRecord>> {
    let client = net::client()?;
    collect_jobs_with(&client, opts, progress)
}

/// Same as `collect_jobs`, with a caller-supplied HTTP client.
pub fn collect_jobs_with(
    client: &Client,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<JobRecord>> {
    let pages = opts.page_count();
    logf!("Scrape: begin query={:?} location={:?} pages={}", opts.query, opts.location, pages);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(pages);
    }

    let mut jobs = Vec::new();
    for page in 0..pages {
        let found = listings::fetch_page(client, opts, page)?;
        let count = found.len();
        jobs.extend(found.into_iter().map(|rec| rec.with_skills(SKILLS)));

        logd!("Scrape: page={} listings={}", page, count);
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page, count);
        }
    }

    logf!("Scrape: done, {} job(s)", jobs.len());
    if let Some(p) = progress.as_deref_mut() {
        p.finish(jobs.len());
    }
    Ok(jobs)
}
