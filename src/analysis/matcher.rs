// src/analysis/matcher.rs
//! Skill Matcher: compares a user's free-text skills with a role's
//! requirement table.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::catalog::Catalog;
use super::models::AnalysisResult;

/// How a user skill is compared with a catalog skill. Both modes ignore case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// One skill's token sequence appears as a contiguous run in the other's
    #[default]
    Token,
    /// Either string is a substring of the other ("Java" matches "JavaScript")
    Containment,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "token" => Ok(MatchMode::Token),
            "containment" | "substring" => Ok(MatchMode::Containment),
            other => Err(format!("unknown match mode '{}'", other)),
        }
    }
}

fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '/' | '-' | '_' | ',' | '(' | ')' | '&')
}

/// Lower-cased tokens; `.`, `+` and `#` stay inside tokens (node.js, c++, c#)
fn tokenize(skill: &str) -> Vec<String> {
    skill
        .to_lowercase()
        .split(is_token_separator)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn contains_run(haystack: &[String], needle: &[String]) -> bool {
    !needle.is_empty()
        && needle.len() <= haystack.len()
        && haystack.windows(needle.len()).any(|window| window == needle)
}

struct UserSkill {
    lower: String,
    tokens: Vec<String>,
}

/// A user's skills, normalised once and queried per catalog skill
pub struct SkillMatcher {
    mode: MatchMode,
    skills: Vec<UserSkill>,
}

impl SkillMatcher {
    /// Blank entries are dropped; under containment they would match everything
    pub fn new(mode: MatchMode, user_skills: &[String]) -> Self {
        let skills = user_skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| UserSkill {
                lower: s.to_lowercase(),
                tokens: tokenize(s),
            })
            .collect();

        Self { mode, skills }
    }

    /// Whether any user skill satisfies `skill`
    pub fn has_skill(&self, skill: &str) -> bool {
        match self.mode {
            MatchMode::Containment => {
                let wanted = skill.to_lowercase();
                self.skills
                    .iter()
                    .any(|us| us.lower.contains(&wanted) || wanted.contains(&us.lower))
            }
            MatchMode::Token => {
                let wanted = tokenize(skill);
                self.skills.iter().any(|us| {
                    contains_run(&us.tokens, &wanted) || contains_run(&wanted, &us.tokens)
                })
            }
        }
    }
}

/// Integer percentage, halves rounded up
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u32
}

/// Score `user_skills` against the requirement table for `target_role`.
///
/// Unknown roles silently use the catalog's default role.
pub fn match_skills(
    catalog: &Catalog,
    target_role: &str,
    user_skills: &[String],
    mode: MatchMode,
) -> AnalysisResult {
    let (_, requirements) = catalog.requirements_for(target_role);
    let matcher = SkillMatcher::new(mode, user_skills);

    let (matched, missing): (Vec<String>, Vec<String>) = requirements
        .all_skills()
        .cloned()
        .partition(|skill| matcher.has_skill(skill));

    let total = matched.len() + missing.len();

    AnalysisResult {
        match_percentage: percentage(matched.len(), total),
        matched,
        missing,
        total,
    }
}
