// src/common/config.rs
//! Environment-driven configuration, read once at startup

use std::env;
use std::path::PathBuf;

use crate::analysis::matcher::MatchMode;
use crate::services::llm::LlmConfig;

const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173,http://localhost:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub resumes_dir: PathBuf,
    pub jwt_secret: String,
    pub catalog_path: Option<PathBuf>,
    pub match_mode: MatchMode,
    pub cors_origins: Vec<String>,
    pub llm: LlmConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);

        let match_mode = env::var("SKILL_MATCH_MODE")
            .ok()
            .and_then(|raw| {
                let parsed = raw.parse::<MatchMode>();
                if parsed.is_err() {
                    tracing::warn!(value = %raw, "Unknown SKILL_MATCH_MODE, using token matching");
                }
                parsed.ok()
            })
            .unwrap_or_default();

        let cors_origins = parse_origins(
            &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        Self {
            port,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://career_architect.db".to_string()),
            resumes_dir: PathBuf::from(
                env::var("RESUMES_DIR").unwrap_or_else(|_| "./uploads/resumes".to_string()),
            ),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "replace_with_strong_secret".to_string()),
            catalog_path: env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            match_mode,
            cors_origins,
            llm: LlmConfig::from_env(),
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins(" http://a.test , ,http://b.test,");
        assert_eq!(origins, vec!["http://a.test", "http://b.test"]);
    }
}
