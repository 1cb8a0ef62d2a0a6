pub mod checksum;
pub mod config;
pub mod downloader;
pub mod logging;
pub mod platform;
pub mod progress;
pub mod release;
pub mod storage;
pub mod update;
