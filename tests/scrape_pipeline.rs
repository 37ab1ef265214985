// tests/scrape_pipeline.rs
//
// Whole pipeline against a local HTTP server serving canned result pages.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use job_scrape::config::options::ScrapeOptions;
use job_scrape::core::net;
use job_scrape::progress::Progress;
use job_scrape::scrape;

fn card(title: &str, company: &str, snippet: &str) -> String {
    format!(
        r#"<div class="job_seen_beacon"><h2>{title}</h2>
           <span class="companyName">{company}</span>
           <div class="companyLocation">Remote</div>
           <div class="job-snippet">{snippet}</div></div>"#
    )
}

fn page(cards: &[String]) -> String {
    format!("<html><body>{}</body></html>", cards.concat())
}

/// Serve each body once, in order, with a 200. Returns the base URL and a
/// handle yielding the raw request heads that were received.
fn serve(bodies: Vec<String>) -> (String, JoinHandle<Vec<String>>) {
    serve_with_status(bodies.into_iter().map(|b| ("200 OK", b)).collect())
}

fn serve_with_status(replies: Vec<(&'static str, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let mut heads = Vec::new();
        for (status, body) in replies {
            let (mut stream, _) = listener.accept().unwrap();

            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 { break; }
                req.extend_from_slice(&buf[..n]);
            }
            heads.push(String::from_utf8_lossy(&req).into_owned());

            let resp = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        heads
    });

    (format!("http://{addr}/jobs"), handle)
}

#[derive(Default)]
struct Recorder {
    begun: Option<u32>,
    pages: Vec<(u32, usize)>,
    finished: Option<usize>,
}

impl Progress for Recorder {
    fn begin(&mut self, pages: u32) { self.begun = Some(pages); }
    fn page_done(&mut self, page: u32, listings: usize) { self.pages.push((page, listings)); }
    fn finish(&mut self, total: usize) { self.finished = Some(total); }
}

#[test]
fn pages_are_fetched_in_order_and_tagged() {
    let (base, server) = serve(vec![
        page(&[
            card("Backend Engineer", "Acme", "Looking for a Python developer with AWS and REST API experience"),
            card("Designer", "Initech", "Seeking a graphic designer"),
        ]),
        page(&[card("DBA", "Globex", "sql server admin")]),
    ]);

    let mut opts = ScrapeOptions::new("software engineer", "India", 2);
    opts.base_url = base;

    let client = net::client_builder().no_proxy().build().unwrap();
    let mut rec = Recorder::default();
    let jobs = scrape::collect_jobs_with(&client, &opts, Some(&mut rec)).unwrap();

    let titles: Vec<&str> = jobs.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, ["Backend Engineer", "Designer", "DBA"]);

    let skills: Vec<&str> = jobs.iter().map(|j| j.skills.as_deref().unwrap()).collect();
    assert_eq!(skills, ["python, aws, rest api", "Not Mentioned", "sql"]);
    assert_eq!(jobs[2].company, "Globex");
    assert_eq!(jobs[2].location, "Remote");

    assert_eq!(rec.begun, Some(2));
    assert_eq!(rec.pages, vec![(0, 2), (1, 1)]);
    assert_eq!(rec.finished, Some(3));

    let heads = server.join().unwrap();
    assert_eq!(heads.len(), 2);
    assert!(heads[0].starts_with("GET /jobs?q=software+engineer&l=India&start=0 "));
    assert!(heads[1].starts_with("GET /jobs?q=software+engineer&l=India&start=10 "));
    assert!(heads[0].to_ascii_lowercase().contains("user-agent: mozilla/5.0\r\n"));
}

#[test]
fn page_without_listings_yields_nothing() {
    let (base, server) = serve(vec!["<html><body><p>No results</p></body></html>".to_string()]);

    let mut opts = ScrapeOptions::new("unicorn wrangler", "Atlantis", 1);
    opts.base_url = base;

    let client = net::client_builder().no_proxy().build().unwrap();
    let jobs = scrape::collect_jobs_with(&client, &opts, None).unwrap();
    assert!(jobs.is_empty());
    server.join().unwrap();
}

#[test]
fn error_status_body_is_still_parsed() {
    let (base, server) = serve_with_status(vec![(
        "503 Service Unavailable",
        page(&[card("Data Engineer", "Umbrella", "Python pipelines")]),
    )]);

    let mut opts = ScrapeOptions::new("data engineer", "India", 1);
    opts.base_url = base;

    let client = net::client_builder().no_proxy().build().unwrap();
    let jobs = scrape::collect_jobs_with(&client, &opts, None).unwrap();

    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "Data Engineer");
    assert_eq!(jobs[0].skills.as_deref(), Some("python"));
    server.join().unwrap();
}

#[test]
fn connection_failure_propagates() {
    // Bind then drop to get a port nobody listens on.
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

    let mut opts = ScrapeOptions::default();
    opts.base_url = format!("http://{addr}/jobs");

    let client = net::client_builder().no_proxy().build().unwrap();
    let mut rec = Recorder::default();
    let err = scrape::collect_jobs_with(&client, &opts, Some(&mut rec)).unwrap_err();

    assert!(matches!(err, job_scrape::Error::Http(_)));
    assert_eq!(rec.begun, Some(1));
    assert!(rec.pages.is_empty());
    assert_eq!(rec.finished, None);
}
