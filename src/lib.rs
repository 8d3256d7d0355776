//! Keyword-based supportive responder.
//!
//! A message is first checked for high-risk phrases; if none match it is
//! scored against the emotion lexicon and answered with canned suggestions
//! for the winning category. Every table is built once and only read after.

pub mod assistant;
pub mod batch;
pub mod chat;
pub mod emotion;
pub mod error;
pub mod knowledge;
pub mod lexicon;
pub mod models;
pub mod render;
pub mod risk;

pub use assistant::Assistant;
pub use error::ResponderError;
pub use models::{Assessment, Category, CategoryScores, Reply, RiskLevel};
