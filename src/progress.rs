// src/progress.rs
/// Progress reporting for a scrape run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of result pages to fetch.
    fn begin(&mut self, _pages: u32) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One result page fetched and extracted; `listings` found on it.
    fn page_done(&mut self, _page: u32, _listings: usize) {}

    /// Called once the last page is in. Not called when a fetch fails.
    fn finish(&mut self, _total: usize) {}
}
