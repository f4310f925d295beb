//! Clipnote: a terminal form that sends text to a summarization endpoint
//! and shows the summary with length statistics.

pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod ui;
