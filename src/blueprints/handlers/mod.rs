pub mod export;
pub mod saved;
