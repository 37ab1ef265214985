// src/specs/listings.rs
//
// Result page → JobRecord list.
//
// One listing block is `div.job_seen_beacon`. Inside it, the first match of
// each field selector wins; its text (all descendants, concatenated) is trimmed.

use std::sync::LazyLock;

use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};

use crate::config::options::ScrapeOptions;
use crate::core::{net, text::trimmed};
use crate::data::JobRecord;
use crate::error::Result;

struct Selectors {
    listing: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    description: Selector,
}

static SELECTORS: LazyLock<Selectors> = LazyLock::new(|| Selectors {
    listing: css("div.job_seen_beacon"),
    title: css("h2"),
    company: css("span.companyName"),
    location: css("div.companyLocation"),
    description: css("div.job-snippet"),
});

// Selectors are compile-time literals; a parse failure is a programming error.
fn css(sel: &'static str) -> Selector {
    Selector::parse(sel).unwrap_or_else(|e| panic!("invalid selector {sel:?}: {e:?}"))
}

/// Fetch result page `page` (zero-based) for `opts` and extract its listings.
/// `skills` is left unset.
pub fn fetch_page(client: &Client, opts: &ScrapeOptions, page: u32) -> Result<Vec<JobRecord>> {
    let url = net::search_url(&opts.base_url, &opts.query, &opts.location, page)?;
    logd!("Fetch: page={} url={}", page, url);
    let html = net::http_get(client, &url)?;
    Ok(extract(&html))
}

/// Every listing block on the page, in document order.
pub fn extract(html: &str) -> Vec<JobRecord> {
    let doc = Html::parse_document(html);
    let sel = &*SELECTORS;

    doc.select(&sel.listing)
        .map(|card| JobRecord::new(
            field_text(card, &sel.title),
            field_text(card, &sel.company),
            field_text(card, &sel.location),
            field_text(card, &sel.description),
        ))
        .collect()
}

fn field_text(card: ElementRef<'_>, sel: &Selector) -> String {
    card.select(sel)
        .next()
        .map(|el| trimmed(el.text().collect()))
        .unwrap_or_default()
}
