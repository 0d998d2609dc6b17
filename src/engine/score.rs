//! Cosine-to-score mapping and project relevance ranking.
//!
//! Both scorers share one linear mapping of cosine similarity onto a fixed
//! scale: `((sim + 1) / 2) * scale`, rounded to two decimals. Relevance uses
//! scale 10, role match uses scale 100. The mapping is a design invariant:
//! similarity -1 maps to 0, 0 to the midpoint, +1 to the top of the scale.

use std::sync::Arc;

use tracing::warn;

use crate::embedding::{Embedder, cosine_similarity};
use crate::engine::projects::ProjectBlock;
use crate::engine::report::ProjectMatch;
use crate::error::Result;

/// Scale for resume/JD and project relevance scores.
pub const RELEVANCE_SCALE: f64 = 10.0;

/// Scale for role match scores.
pub const ROLE_MATCH_SCALE: f64 = 100.0;

/// A score plus whether it came from the neutral provider-failure fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub value: f64,
    pub degraded: bool,
}

/// Map a cosine similarity onto the 0-10 relevance scale.
pub fn relevance_score(sim: f32) -> f64 {
    scale_similarity(sim, RELEVANCE_SCALE)
}

/// Map a cosine similarity onto the 0-100 role match scale.
pub fn role_match_score(sim: f32) -> f64 {
    scale_similarity(sim, ROLE_MATCH_SCALE)
}

fn scale_similarity(sim: f32, scale: f64) -> f64 {
    round2(((f64::from(sim) + 1.0) / 2.0) * scale)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render a score as an integer when whole, else with one decimal place.
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

/// Computes normalized 0-10 similarity scores between texts via the
/// injected embedding provider.
pub struct RelevanceScorer {
    embedder: Arc<dyn Embedder>,
}

impl RelevanceScorer {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Score two texts on 0-10. A provider failure degrades to the neutral
    /// mid-scale score instead of propagating.
    pub fn score(&self, text_a: &str, text_b: &str) -> Scored {
        match self.similarity(text_a, text_b) {
            Ok(sim) => Scored {
                value: relevance_score(sim),
                degraded: false,
            },
            Err(err) => {
                warn!(%err, "embedding provider failed, substituting neutral score");
                Scored {
                    value: relevance_score(0.0),
                    degraded: true,
                }
            }
        }
    }

    fn similarity(&self, text_a: &str, text_b: &str) -> Result<f32> {
        let a = self.embedder.embed(text_a)?;
        let b = self.embedder.embed(text_b)?;
        Ok(cosine_similarity(&a, &b))
    }

    /// Rank projects against the JD text: stable descending sort by score
    /// (ties keep discovery order), truncated to `top_k`. Returns the
    /// ranked matches and whether any score is a degraded fallback.
    pub fn project_relevance(
        &self,
        jd_text: &str,
        projects: &[ProjectBlock],
        top_k: usize,
    ) -> (Vec<ProjectMatch>, bool) {
        if projects.is_empty() || top_k == 0 {
            return (Vec::new(), false);
        }

        // One JD embedding shared across all project comparisons.
        let jd_vector = match self.embedder.embed(jd_text) {
            Ok(v) => Some(v),
            Err(err) => {
                warn!(%err, "JD embedding failed, project relevance is neutral");
                None
            }
        };

        let mut degraded = jd_vector.is_none();
        let mut scored: Vec<(f64, &ProjectBlock)> = projects
            .iter()
            .map(|project| {
                let sim = jd_vector.as_ref().map_or(Ok(0.0), |jd| {
                    self.embedder
                        .embed(&project.text)
                        .map(|v| cosine_similarity(jd, &v))
                });
                let sim = sim.unwrap_or_else(|err| {
                    warn!(%err, "project embedding failed, substituting neutral score");
                    degraded = true;
                    0.0
                });
                (relevance_score(sim), project)
            })
            .collect();

        // Vec::sort_by is stable, so ties keep discovery order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        let matches = scored
            .into_iter()
            .map(|(score, project)| ProjectMatch {
                snippet: format!("{} (score {})", project.title(), format_score(score)),
                score,
            })
            .collect();
        (matches, degraded)
    }
}
