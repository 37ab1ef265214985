// src/core/net.rs
//
// Blocking HTTP GET for result pages. One static User-Agent, library-default
// timeouts, no retry. Transport errors go straight back to the caller.

use reqwest::{Url, blocking::{Client, ClientBuilder}};

use crate::config::consts::{PAGE_STRIDE, USER_AGENT};
use crate::error::{Error, Result};

pub fn client_builder() -> ClientBuilder {
    Client::builder().user_agent(USER_AGENT)
}

pub fn client() -> Result<Client> {
    Ok(client_builder().build()?)
}

/// `<base>?q=<query>&l=<location>&start=<page * 10>` for a zero-based page.
pub fn search_url(base: &str, query: &str, location: &str, page: u32) -> Result<Url> {
    let start = page
        .checked_mul(PAGE_STRIDE)
        .ok_or_else(|| Error::Url { url: s!(base), reason: format!("page {page} out of range") })?
        .to_string();
    Url::parse_with_params(base, &[("q", query), ("l", location), ("start", start.as_str())])
        .map_err(|e| Error::Url { url: s!(base), reason: e.to_string() })
}

/// GET `url` and return the body. A non-success status is logged, not raised:
/// the body still goes to the extractor, which finds nothing on an error page.
pub fn http_get(client: &Client, url: &Url) -> Result<String> {
    let resp = client.get(url.clone()).send()?;
    let status = resp.status();
    if !status.is_success() {
        logd!("HTTP {} for {}", status, url);
    }
    Ok(resp.text()?)
}
