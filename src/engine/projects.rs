//! Heuristic segmentation of resume text into project blocks.
//!
//! Two-tier strategy, in order:
//!
//! 1. Header-driven: a short line containing "project" opens a section;
//!    following lines accumulate until two consecutive blank lines or a new
//!    all-uppercase section heading. The accumulated buffer splits into one
//!    block per bullet line.
//! 2. Keyword fallback (only when tier 1 finds nothing): lines carrying an
//!    action verb ("developed", "built", ...) each open a block, flushed on
//!    blank lines and at end of input.
//!
//! The heuristic is approximate on purpose: it favors recall on loosely
//! structured resume text over precision.

use std::collections::HashSet;

/// Maximum length of a line treated as a project section header.
const MAX_HEADER_LEN: usize = 40;

/// Uppercase section markers that terminate a header-driven scan.
const SECTION_MARKERS: &[&str] = &["EXPERIENCE", "EDUCATION", "SKILLS", "CERTIFICATION"];

/// Action verbs that open a block in the keyword fallback tier.
const ACTION_VERBS: &[&str] = &[
    "developed",
    "built",
    "implemented",
    "designed",
    "created",
    "worked on",
];

const BULLET_MARKERS: &[char] = &['-', '*', '•', '·', '‣'];

/// Minimum trimmed length of a header-tier sub-block.
const MIN_HEADER_BLOCK_LEN: usize = 10;

/// Minimum trimmed length of a fallback-tier block.
const MIN_VERB_BLOCK_LEN: usize = 12;

/// A contiguous span of resume text judged to describe one project.
/// Trimmed, whitespace-normalized, non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBlock {
    pub text: String,
}

impl ProjectBlock {
    /// Display title: the first line of the block with leading bullet
    /// markers stripped.
    pub fn title(&self) -> &str {
        let first_line = self.text.lines().next().unwrap_or("");
        first_line
            .trim_start_matches(|c: char| BULLET_MARKERS.contains(&c) || c.is_whitespace())
            .trim_end()
    }
}

/// Split resume free text into candidate project blocks.
///
/// Output order follows order of discovery; blocks are deduplicated by
/// normalized text. Empty input yields an empty list.
pub fn extract_projects(text: &str) -> Vec<ProjectBlock> {
    let lines: Vec<&str> = text.lines().collect();

    let mut raw = header_tier(&lines);
    if raw.is_empty() {
        raw = verb_tier(&lines);
    }

    let mut seen = HashSet::new();
    raw.into_iter()
        .map(|block| normalize_whitespace(&block))
        .filter(|block| !block.is_empty() && seen.insert(block.clone()))
        .map(|text| ProjectBlock { text })
        .collect()
}

/// Tier 1: scan for short lines containing "project" and accumulate the
/// section that follows each one.
fn header_tier(lines: &[&str]) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_project_header(lines[i]) {
            i += 1;
            continue;
        }

        let mut buffer: Vec<&str> = Vec::new();
        let mut consecutive_blanks = 0;
        let mut j = i + 1;
        while j < lines.len() {
            let trimmed = lines[j].trim();
            if trimmed.is_empty() {
                consecutive_blanks += 1;
                if consecutive_blanks >= 2 {
                    break;
                }
                j += 1;
                continue;
            }
            consecutive_blanks = 0;
            if is_section_boundary(trimmed) {
                // New section heading: stop without consuming it.
                break;
            }
            buffer.push(lines[j]);
            j += 1;
        }

        blocks.extend(split_on_bullets(&buffer));
        i = j;
    }

    blocks
}

fn is_project_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() <= MAX_HEADER_LEN && trimmed.to_lowercase().contains("project")
}

fn is_section_boundary(line: &str) -> bool {
    let has_alpha = line.chars().any(char::is_alphabetic);
    let all_upper = line
        .chars()
        .filter(|c| c.is_alphabetic())
        .all(char::is_uppercase);
    has_alpha && all_upper && SECTION_MARKERS.iter().any(|marker| line.contains(marker))
}

/// Split an accumulated section buffer into sub-blocks at bullet lines, so
/// one header can yield multiple projects.
fn split_on_bullets(buffer: &[&str]) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in buffer {
        if starts_with_bullet(line) && !current.is_empty() {
            push_block(&mut blocks, &current, MIN_HEADER_BLOCK_LEN);
            current.clear();
        }
        current.push(line);
    }
    push_block(&mut blocks, &current, MIN_HEADER_BLOCK_LEN);

    blocks
}

fn starts_with_bullet(line: &str) -> bool {
    line.trim_start()
        .starts_with(|c: char| BULLET_MARKERS.contains(&c))
}

/// Tier 2: action-verb lines each open a block; blank lines flush, and the
/// trailing buffer is flushed at end of input.
fn verb_tier(lines: &[&str]) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            push_block(&mut blocks, &current, MIN_VERB_BLOCK_LEN);
            current.clear();
            continue;
        }
        if is_verb_line(trimmed) {
            push_block(&mut blocks, &current, MIN_VERB_BLOCK_LEN);
            current.clear();
            current.push(line);
        } else if !current.is_empty() {
            // Continuation of the block opened by the last verb line.
            current.push(line);
        }
    }
    push_block(&mut blocks, &current, MIN_VERB_BLOCK_LEN);

    blocks
}

fn is_verb_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.contains(verb))
}

fn push_block(blocks: &mut Vec<String>, lines: &[&str], min_len: usize) {
    if lines.is_empty() {
        return;
    }
    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if trimmed.chars().count() >= min_len {
        blocks.push(trimmed.to_string());
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(blocks: &[ProjectBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.text.as_str()).collect()
    }

    #[test]
    fn no_headers_and_no_verbs_yield_nothing() {
        let resume = "John Doe\nEmail: john@example.com\nReferences on request";
        assert!(extract_projects(resume).is_empty());
    }

    #[test]
    fn single_verb_sentence_is_one_block() {
        let resume = "Developed a fraud-detection pipeline using XGBoost\n\nOther text";
        let blocks = extract_projects(resume);
        assert_eq!(
            texts(&blocks),
            vec!["Developed a fraud-detection pipeline using XGBoost"]
        );
    }

    #[test]
    fn header_section_splits_on_bullets() {
        let resume = "\
PROJECTS
- Built a realtime analytics dashboard in React
- Created an ETL pipeline moving data into Snowflake
";
        let blocks = extract_projects(resume);
        assert_eq!(
            texts(&blocks),
            vec![
                "- Built a realtime analytics dashboard in React",
                "- Created an ETL pipeline moving data into Snowflake",
            ]
        );
    }

    #[test]
    fn header_scan_stops_at_uppercase_section() {
        let resume = "\
Projects
Fraud detection service handling 1M events daily
EDUCATION
BSc Computer Science
";
        let blocks = extract_projects(resume);
        assert_eq!(
            texts(&blocks),
            vec!["Fraud detection service handling 1M events daily"]
        );
    }

    #[test]
    fn header_scan_survives_one_blank_line_but_not_two() {
        let resume = "\
Projects
First project line with enough text

Second project line after one blank


Unreached text beyond the double blank
";
        let blocks = extract_projects(resume);
        assert_eq!(
            texts(&blocks),
            vec!["First project line with enough text Second project line after one blank"]
        );
    }

    #[test]
    fn long_lines_containing_project_are_not_headers() {
        let resume = "This paragraph mentions a project in passing but is far too long to be a header line\n";
        assert!(extract_projects(resume).is_empty());
    }

    #[test]
    fn tiny_sub_blocks_are_discarded() {
        let resume = "\
Projects
- ok
- Created a full data warehouse migration
";
        let blocks = extract_projects(resume);
        assert_eq!(
            texts(&blocks),
            vec!["- Created a full data warehouse migration"]
        );
    }

    #[test]
    fn verb_tier_splits_on_blank_lines_and_flushes_trailing() {
        let resume = "\
Built a CLI tool for log analysis
with subcommand support

Designed the ingestion layer for telemetry";
        let blocks = extract_projects(resume);
        assert_eq!(
            texts(&blocks),
            vec![
                "Built a CLI tool for log analysis with subcommand support",
                "Designed the ingestion layer for telemetry",
            ]
        );
    }

    #[test]
    fn adjacent_verb_lines_start_separate_blocks() {
        let resume = "\
Implemented a caching proxy in front of the API
Developed monitoring dashboards for the proxy
";
        let blocks = extract_projects(resume);
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn duplicate_blocks_are_removed() {
        let resume = "\
Built a recommendation engine for retail

Built a  recommendation   engine for retail
";
        let blocks = extract_projects(resume);
        assert_eq!(
            texts(&blocks),
            vec!["Built a recommendation engine for retail"]
        );
    }

    #[test]
    fn header_tier_takes_precedence_over_verbs() {
        let resume = "\
Projects
Migration of the billing stack to Kubernetes

EXPERIENCE
Developed internal tooling at Acme Corp
";
        let blocks = extract_projects(resume);
        // The verb line lives under EXPERIENCE; tier 1 found a block, so
        // the fallback never runs.
        assert_eq!(
            texts(&blocks),
            vec!["Migration of the billing stack to Kubernetes"]
        );
    }

    #[test]
    fn title_strips_bullet_markers() {
        let block = ProjectBlock {
            text: "- Built a realtime analytics dashboard".to_string(),
        };
        assert_eq!(block.title(), "Built a realtime analytics dashboard");

        let plain = ProjectBlock {
            text: "Fraud detection service".to_string(),
        };
        assert_eq!(plain.title(), "Fraud detection service");
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(extract_projects("").is_empty());
    }
}
