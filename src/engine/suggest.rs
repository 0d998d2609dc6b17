//! Rule-based resume improvement suggestions.
//!
//! Three independent, side-effect-free rules evaluated in fixed order:
//! missing JD skills, missing summary section, missing quantified
//! achievements. Emission order is rule order, not a ranking.

use itertools::Itertools;
use regex::Regex;

use crate::engine::skills::SkillExtractor;

/// Upper bound on emitted suggestions.
const MAX_SUGGESTIONS: usize = 5;

pub struct SuggestionGenerator {
    /// Matches a percentage or a 1-5 digit number.
    numeric: Regex,
    /// Cap on how many missing skills one suggestion names.
    max_missing_skills: usize,
}

impl SuggestionGenerator {
    pub fn new(max_missing_skills: usize) -> Self {
        Self {
            numeric: Regex::new(r"\d{1,3}\s*%|\b\d{1,5}\b").expect("static pattern compiles"),
            max_missing_skills,
        }
    }

    /// Generate deduplicated advice for `resume_text` against `jd_text`.
    pub fn suggest(
        &self,
        extractor: &SkillExtractor,
        resume_text: &str,
        jd_text: &str,
    ) -> Vec<String> {
        let resume_skills = extractor.extract(resume_text);
        let jd_skills = extractor.extract(jd_text);

        let mut suggestions = Vec::new();

        // Rule (a): skills required by the JD but absent from the resume.
        let missing: Vec<&str> = jd_skills
            .iter()
            .filter(|skill| !resume_skills.contains(*skill))
            .take(self.max_missing_skills)
            .map(String::as_str)
            .collect();
        if !missing.is_empty() {
            suggestions.push(format!(
                "Add or highlight these skills from the job description: {}",
                missing.iter().join(", ")
            ));
        }

        // Rule (b): no summary section.
        if !resume_text.to_lowercase().contains("summary") {
            suggestions
                .push("Add a short professional summary section at the top of your resume.".to_string());
        }

        // Rule (c): nothing quantified.
        if !self.numeric.is_match(resume_text) {
            suggestions.push(
                "Quantify achievements with numbers or percentages (for example, 'reduced latency by 30%')."
                    .to_string(),
            );
        }

        suggestions.dedup();
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

impl Default for SuggestionGenerator {
    fn default() -> Self {
        Self::new(12)
    }
}
