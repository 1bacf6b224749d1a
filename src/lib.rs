pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod ranking;
pub mod sink;
