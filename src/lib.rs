pub mod article;
pub mod cache;
pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod i18n;
pub mod llm;
pub mod render;
pub mod search;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use workflow::launch;
