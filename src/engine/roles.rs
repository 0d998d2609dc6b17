//! Role recommendation over a precomputed embedding cache.
//!
//! Role embeddings are computed once during initialization and are
//! read-only for the rest of the process. `rebuild` takes the write lock
//! exclusively, so no recommendation ever observes a half-built cache.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::catalog::RoleDescriptor;
use crate::embedding::{Embedder, cosine_similarity};
use crate::engine::report::RoleMatch;
use crate::engine::score::role_match_score;

/// Ranks the role catalog against a combined resume+JD probe text.
pub struct RoleRecommender {
    embedder: Arc<dyn Embedder>,
    roles: Vec<RoleDescriptor>,
    cache: RwLock<HashMap<String, Vec<f32>>>,
}

impl RoleRecommender {
    /// Build the recommender and populate the embedding cache.
    pub fn new(embedder: Arc<dyn Embedder>, roles: Vec<RoleDescriptor>) -> Self {
        let recommender = Self {
            embedder,
            roles,
            cache: RwLock::new(HashMap::new()),
        };
        recommender.rebuild();
        recommender
    }

    /// Recompute every role embedding under the exclusive write lock.
    ///
    /// Roles whose description fails to embed are left out of the cache and
    /// silently skipped at recommendation time.
    pub fn rebuild(&self) {
        let entries: HashMap<String, Vec<f32>> = self
            .roles
            .par_iter()
            .filter_map(|role| match self.embedder.embed(&role.description) {
                Ok(vector) => Some((role.id.clone(), vector)),
                Err(err) => {
                    warn!(role = %role.id, %err, "failed to embed role description, skipping");
                    None
                }
            })
            .collect();

        debug!(cached = entries.len(), total = self.roles.len(), "role embedding cache rebuilt");
        *self.cache.write() = entries;
    }

    /// Number of roles with a cached embedding.
    pub fn cached_roles(&self) -> usize {
        self.cache.read().len()
    }

    /// Rank roles against the concatenated resume+JD text (resume first).
    ///
    /// The probe is embedded once; each cached role vector is compared by
    /// cosine similarity mapped onto 0-100. Stable descending sort,
    /// truncated to `top_k`. Returns the matches and whether the probe
    /// embedding had to fall back (in which case the list is empty).
    pub fn recommend(&self, resume_text: &str, jd_text: &str, top_k: usize) -> (Vec<RoleMatch>, bool) {
        if self.roles.is_empty() || top_k == 0 {
            return (Vec::new(), false);
        }

        let probe = format!("{resume_text}\n{jd_text}");
        let probe_vector = match self.embedder.embed(&probe) {
            Ok(vector) => vector,
            Err(err) => {
                warn!(%err, "probe embedding failed, no role recommendations");
                return (Vec::new(), true);
            }
        };

        let cache = self.cache.read();
        let mut matches: Vec<RoleMatch> = self
            .roles
            .iter()
            .filter_map(|role| {
                let vector = cache.get(&role.id)?;
                Some(RoleMatch {
                    role: role.id.clone(),
                    score: role_match_score(cosine_similarity(&probe_vector, vector)),
                })
            })
            .collect();

        // Stable sort: ties keep catalog order.
        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        matches.truncate(top_k);
        (matches, false)
    }
}
