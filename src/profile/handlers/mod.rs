// src/profile/handlers/mod.rs

pub mod profile;
pub mod resume;
pub mod skills;
