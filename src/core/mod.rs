pub mod common;
pub mod config;
pub use self::config::ExtractionConfig;
