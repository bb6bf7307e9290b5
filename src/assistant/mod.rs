//! # Assistant Module
//!
//! Proxies to the LLM gateway:
//! - Résumé Skill Extractor (`/extract-skills`)
//! - Project Idea Generator (`/generate-projects`)

pub mod handlers;
pub mod models;
pub mod parsing;
pub mod prompts;
pub mod routes;
pub mod validators;


pub use routes::assistant_routes;
