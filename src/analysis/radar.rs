// src/analysis/radar.rs
//! Radar Scorer: per-category coverage of the user's skills.

use rand::Rng;
use std::ops::RangeInclusive;

use super::catalog::Catalog;
use super::matcher::{MatchMode, SkillMatcher};
use super::models::RadarDatum;

/// Placeholder market demand range; there is no real demand signal yet
pub const MARKET_DEMAND_RANGE: RangeInclusive<u32> = 70..=89;

/// One datum per catalog radar category, in catalog order
pub fn score<R: Rng + ?Sized>(
    catalog: &Catalog,
    user_skills: &[String],
    mode: MatchMode,
    rng: &mut R,
) -> Vec<RadarDatum> {
    let matcher = SkillMatcher::new(mode, user_skills);

    catalog
        .radar_categories()
        .iter()
        .map(|category| {
            let covered = category
                .skills
                .iter()
                .filter(|skill| matcher.has_skill(skill))
                .count();

            RadarDatum {
                category: category.name.clone(),
                user_skills_pct: 100.0 * covered as f64 / category.skills.len() as f64,
                market_demand_pct: f64::from(rng.gen_range(MARKET_DEMAND_RANGE)),
            }
        })
        .collect()
}
