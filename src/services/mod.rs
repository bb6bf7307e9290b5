// src/services/mod.rs
//
// Shared services used across the domain modules

pub mod llm;
pub mod pdf;
pub mod saved_blueprints;

pub use llm::LlmService;
