//! The analysis report returned by every `analyze` call.
//!
//! Field names and score scales are a serialization contract with the
//! callers that render or transport the report; they must not change
//! independently of those consumers. Relevance scores are on 0-10, role
//! match scores on 0-100 - the two scales are never conflated.

use serde::{Deserialize, Serialize};

/// A resume project ranked against the job description. Score is on 0-10.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectMatch {
    /// Display label: derived project title plus the rendered score.
    pub snippet: String,
    pub score: f64,
}

/// A recommended role from the catalog. Score is on 0-100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleMatch {
    pub role: String,
    pub score: f64,
}

/// Aggregate output of one analysis. Produced fresh per call, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisReport {
    /// Overall resume/JD match on 0-10.
    pub overall_score: f64,
    /// Catalog skills found in the resume, in catalog order.
    pub skills_found: Vec<String>,
    /// Catalog skills found in the job description, in catalog order.
    pub required_skills: Vec<String>,
    /// Required skills also present in the resume.
    pub matched: Vec<String>,
    /// Required skills missing from the resume.
    pub gaps: Vec<String>,
    /// Top resume projects by topical fit with the JD.
    pub relevant_projects: Vec<ProjectMatch>,
    /// Top catalog roles by fit with the combined resume+JD text.
    pub recommended_jobs: Vec<RoleMatch>,
    /// Rule-based improvement advice, in rule order.
    pub resume_suggestions: Vec<String>,
    /// True when any embedding call fell back to a neutral score; the
    /// scores in a degraded report are placeholders, not confident values.
    #[serde(default)]
    pub degraded: bool,
}
