//! Catalog-driven skill extraction.

use regex::Regex;
use tracing::warn;

/// Finds catalog skills present in free text.
///
/// Each term gets a case-insensitive, word-boundary-anchored pattern at
/// construction time, so "java" never matches inside "javascript". Output
/// preserves catalog order, never input order, with no duplicates.
pub struct SkillExtractor {
    patterns: Vec<(String, Regex)>,
}

impl SkillExtractor {
    /// Compile one pattern per catalog term. Terms whose escaped pattern
    /// fails to compile are skipped with a warning.
    pub fn new(skills: &[String]) -> Self {
        let patterns = skills
            .iter()
            .filter_map(|term| {
                let pattern = boundary_pattern(term);
                match Regex::new(&pattern) {
                    Ok(re) => Some((term.clone(), re)),
                    Err(err) => {
                        warn!(term = %term, %err, "skipping unmatchable skill term");
                        None
                    }
                }
            })
            .collect();
        Self { patterns }
    }

    /// Extract catalog skills found in `text`, in catalog order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(term, _)| term.clone())
            .collect()
    }
}

/// Build the whole-word pattern for one term.
///
/// `\b` only works against a word character, so terms with a symbol edge
/// ("c++", "c#", ".net") get an explicit non-word-or-end anchor on that
/// side instead.
fn boundary_pattern(term: &str) -> String {
    let left = if term.chars().next().is_some_and(is_word_char) {
        r"\b"
    } else {
        r"(?:^|\W)"
    };
    let right = if term.chars().last().is_some_and(is_word_char) {
        r"\b"
    } else {
        r"(?:\W|$)"
    };
    format!("(?i){left}{}{right}", regex::escape(term))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor(terms: &[&str]) -> SkillExtractor {
        let terms: Vec<String> = terms.iter().map(|s| (*s).to_string()).collect();
        SkillExtractor::new(&terms)
    }

    #[test]
    fn finds_whole_word_matches_case_insensitively() {
        let ex = extractor(&["python", "sql"]);
        let found = ex.extract("I used Python and built dashboards with SQL");
        assert_eq!(found, vec!["python", "sql"]);
    }

    #[test]
    fn java_does_not_match_inside_javascript() {
        let ex = extractor(&["java"]);
        assert!(ex.extract("Wrote JavaScript for the frontend").is_empty());
        assert_eq!(ex.extract("Wrote Java services"), vec!["java"]);
    }

    #[test]
    fn output_follows_catalog_order_not_input_order() {
        let ex = extractor(&["python", "sql", "aws"]);
        let found = ex.extract("aws first, then sql, then python");
        assert_eq!(found, vec!["python", "sql", "aws"]);
    }

    #[test]
    fn repeated_mentions_are_reported_once() {
        let ex = extractor(&["python"]);
        assert_eq!(ex.extract("python python PYTHON"), vec!["python"]);
    }

    #[test]
    fn empty_and_blank_input_yield_nothing() {
        let ex = extractor(&["python"]);
        assert!(ex.extract("").is_empty());
        assert!(ex.extract("   \n\t").is_empty());
    }

    #[test]
    fn terms_with_symbol_edges_match() {
        let ex = extractor(&["c++", "c#", ".net"]);
        let found = ex.extract("Senior C++ and C# engineer shipping .NET services");
        assert_eq!(found, vec!["c++", "c#", ".net"]);
    }

    #[test]
    fn symbol_edge_terms_still_respect_word_boundaries() {
        let ex = extractor(&["c++"]);
        // Embedded in a longer token on either side: no match.
        assert!(ex.extract("typedef vec_c++x helper").is_empty());
        assert!(ex.extract("continued c++11 migration").is_empty());
        // At start and end of input: match.
        assert_eq!(ex.extract("c++"), vec!["c++"]);
    }

    #[test]
    fn multi_word_terms_match() {
        let ex = extractor(&["machine learning"]);
        assert_eq!(
            ex.extract("Applied Machine Learning at scale"),
            vec!["machine learning"]
        );
    }

    #[test]
    fn empty_catalog_extracts_nothing() {
        let ex = extractor(&[]);
        assert!(ex.extract("python everywhere").is_empty());
    }
}
