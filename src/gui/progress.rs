// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: u32,
    total: u32,
    listings: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0, listings: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, pages: u32) {
        self.total = pages;
        self.set_status("Scraping job data...");
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn page_done(&mut self, _page: u32, listings: usize) {
        self.done += 1;
        self.listings += listings;
        self.set_status(format!(
            "Fetched page {}/{} ({} listing(s) so far)",
            self.done, self.total, self.listings
        ));
    }
    fn finish(&mut self, total: usize) {
        self.set_status(format!("Scraped {total} jobs!"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tracks_pages_and_total() {
        let status = Arc::new(Mutex::new(s!("Idle")));
        let mut prog = GuiProgress::new(status.clone());

        prog.begin(2);
        prog.page_done(0, 15);
        assert_eq!(*status.lock().unwrap(), "Fetched page 1/2 (15 listing(s) so far)");
        prog.page_done(1, 12);
        prog.finish(27);
        assert_eq!(*status.lock().unwrap(), "Scraped 27 jobs!");
    }
}
