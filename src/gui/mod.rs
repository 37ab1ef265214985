// src/gui/mod.rs
pub mod app;
pub mod actions;
pub mod components;
pub mod progress;

pub use app::{run, TITLE};
