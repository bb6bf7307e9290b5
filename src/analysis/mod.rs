//! # Analysis Module
//!
//! Skill-gap analysis against the role catalog:
//! - Skill Matcher (matched / missing / percentage)
//! - Radar Scorer (coverage per category)
//! - Blueprint Selector

pub mod blueprint;
pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod models;
pub mod radar;
pub mod routes;
pub mod validators;


pub use routes::analysis_routes;
