//! 文章生成链 - 论点、写作计划、章节与引用的编排

pub mod citations;
pub mod orchestrator;
pub mod prompts;
pub mod sections;
pub mod types;

pub use orchestrator::ArticleOrchestrator;
pub use types::{Article, ArticleSection};

// Include tests
#[cfg(test)]
mod tests;
