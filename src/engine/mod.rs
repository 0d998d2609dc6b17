//! The semantic matching engine.
//!
//! [`AnalysisEngine::analyze`] composes skill extraction, project
//! segmentation, relevance scoring, role recommendation, and suggestion
//! generation into one report. Each call is pure given the immutable
//! catalog and the injected embedding provider; the independent steps run
//! concurrently on the rayon pool. The engine never errors: malformed input
//! is treated as empty text and provider failures degrade to neutral scores
//! flagged on the report (a fully unscorable pair reports 0 overall).

pub mod projects;
pub mod report;
pub mod roles;
pub mod score;
pub mod skills;
pub mod suggest;

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::AnalysisConfig;
use crate::embedding::Embedder;

pub use projects::{ProjectBlock, extract_projects};
pub use report::{AnalysisReport, ProjectMatch, RoleMatch};
pub use roles::RoleRecommender;
pub use score::{RelevanceScorer, relevance_score, role_match_score};
pub use skills::SkillExtractor;
pub use suggest::SuggestionGenerator;

/// Suggestion appended when semantic scoring had to fall back.
const DEGRADED_NOTE: &str =
    "Semantic scoring was unavailable for part of this analysis; affected scores are neutral placeholders.";

/// Suggestion appended when the overall score itself could not be computed.
const SCORING_FAILED_NOTE: &str =
    "Overall relevance could not be scored because the embedding provider failed; the score is reported as 0.";

pub struct AnalysisEngine {
    extractor: SkillExtractor,
    scorer: RelevanceScorer,
    recommender: RoleRecommender,
    suggester: SuggestionGenerator,
    settings: AnalysisConfig,
}

impl AnalysisEngine {
    /// Build the engine, precomputing role embeddings.
    pub fn new(catalog: &Catalog, embedder: Arc<dyn Embedder>, settings: AnalysisConfig) -> Self {
        Self {
            extractor: SkillExtractor::new(&catalog.skills),
            scorer: RelevanceScorer::new(embedder.clone()),
            recommender: RoleRecommender::new(embedder, catalog.roles.clone()),
            suggester: SuggestionGenerator::new(settings.max_missing_skills),
            settings,
        }
    }

    /// Analyze a resume against a job description.
    ///
    /// Absent input is treated as empty text. The worst case is an
    /// all-empty report with a zero score and the degraded flag set,
    /// never an error.
    pub fn analyze(&self, resume_text: Option<&str>, jd_text: Option<&str>) -> AnalysisReport {
        let resume = resume_text.unwrap_or("");
        let jd = jd_text.unwrap_or("");

        // The five steps have no data dependencies on each other.
        let ((resume_skills, jd_skills), (overall, ((projects, projects_degraded), ((jobs, jobs_degraded), suggestions)))) =
            rayon::join(
                || rayon::join(|| self.extractor.extract(resume), || self.extractor.extract(jd)),
                || {
                    rayon::join(
                        || self.scorer.score(jd, resume),
                        || {
                            rayon::join(
                                || {
                                    let blocks = extract_projects(resume);
                                    self.scorer.project_relevance(
                                        jd,
                                        &blocks,
                                        self.settings.top_projects,
                                    )
                                },
                                || {
                                    rayon::join(
                                        || {
                                            self.recommender.recommend(
                                                resume,
                                                jd,
                                                self.settings.top_roles,
                                            )
                                        },
                                        || self.suggester.suggest(&self.extractor, resume, jd),
                                    )
                                },
                            )
                        },
                    )
                },
            );

        let matched: Vec<String> = jd_skills
            .iter()
            .filter(|skill| resume_skills.contains(*skill))
            .cloned()
            .collect();
        let gaps: Vec<String> = jd_skills
            .iter()
            .filter(|skill| !resume_skills.contains(*skill))
            .cloned()
            .collect();

        let degraded = overall.degraded || projects_degraded || jobs_degraded;
        // An unscorable resume/JD pair reports 0 rather than the neutral
        // midpoint the per-operation fallback uses.
        let overall_score = if overall.degraded { 0.0 } else { overall.value };
        let mut resume_suggestions = suggestions;
        if overall.degraded {
            resume_suggestions.push(SCORING_FAILED_NOTE.to_string());
        } else if degraded {
            resume_suggestions.push(DEGRADED_NOTE.to_string());
        }

        AnalysisReport {
            overall_score,
            skills_found: resume_skills,
            required_skills: jd_skills,
            matched,
            gaps,
            relevant_projects: projects,
            recommended_jobs: jobs,
            resume_suggestions,
            degraded,
        }
    }

    /// Rebuild the role embedding cache (exclusive access; in-flight
    /// `analyze` calls never observe a partial cache).
    pub fn reload_roles(&self) {
        self.recommender.rebuild();
    }

    /// Number of roles with a usable embedding.
    pub fn cached_roles(&self) -> usize {
        self.recommender.cached_roles()
    }
}
