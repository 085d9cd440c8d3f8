pub mod config;
pub mod logging;

pub mod control;
pub mod document;
pub mod downloader;
pub mod error;
pub mod extract;
pub mod front_matter;
pub mod pipeline;
pub mod probe;
pub mod rewrite;
pub mod storage;
pub mod url_model;
