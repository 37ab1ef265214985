// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.indeed.com/jobs";
pub const USER_AGENT: &str = "Mozilla/5.0";
pub const PAGE_STRIDE: u32 = 10; // results per page; `start` offset step

// Scrape
pub const MIN_PAGES: u32 = 1;
pub const MAX_PAGES: u32 = 5;
pub const DEFAULT_QUERY: &str = "software engineer";
pub const DEFAULT_LOCATION: &str = "India";

// Skills
pub const SKILLS: &[&str] = &[
    "python", "java", "c++", "sql", "excel", "javascript", "react",
    "node", "aws", "django", "rest api", "tensorflow", "pytorch",
];
pub const NOT_MENTIONED: &str = "Not Mentioned";

// Export
pub const HEADERS: [&str; 5] = ["title", "company", "location", "description", "skills"];
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "job_data";

// Local store (log + GUI settings)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const SETTINGS_FILE: &str = "settings.json";
