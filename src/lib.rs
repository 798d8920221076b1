pub mod app;
pub mod config;
pub mod events;
pub mod ingest;
pub mod logfile;
pub mod logging;
pub mod render;
