//! Skill and role catalogs.
//!
//! The catalogs are static inputs loaded once at startup: a flat list of
//! known skill terms and a list of role descriptors. Role records arrive in
//! loosely-shaped JSON (several possible field names); everything is
//! normalized here so the engine only ever sees the canonical shapes.
//!
//! Loading never fails: a missing or malformed file degrades to an empty
//! catalog with a warning, and the engine behaves sensibly on empty
//! catalogs (no skills extracted, no roles recommended).

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::Result;

/// A job role the recommender can suggest.
///
/// `description` is the text the role embedding is computed from; it falls
/// back to the id when the source record carries no descriptive field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleDescriptor {
    pub id: String,
    pub description: String,
}

/// Immutable skill and role catalogs, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Lower-cased, trimmed, deduplicated skill terms in file order.
    pub skills: Vec<String>,
    /// Role descriptors with unique ids, in file order.
    pub roles: Vec<RoleDescriptor>,
}

impl Catalog {
    /// Load both catalogs from files, degrading to empty on any failure.
    pub fn load(skills_path: &Path, roles_path: &Path) -> Self {
        Self {
            skills: load_skills(skills_path),
            roles: load_roles(roles_path),
        }
    }

    /// Built-in fallback catalog used when no catalog files are configured.
    pub fn builtin() -> Self {
        let skills = BUILTIN_SKILLS.iter().map(|s| (*s).to_string()).collect();
        let roles = BUILTIN_ROLES
            .iter()
            .map(|(id, description)| RoleDescriptor {
                id: (*id).to_string(),
                description: (*description).to_string(),
            })
            .collect();
        Self { skills, roles }
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.roles.is_empty()
    }
}

/// Load the skill list from a JSON file: a flat array of strings.
///
/// Missing or malformed files yield an empty list, never an error.
pub fn load_skills(path: &Path) -> Vec<String> {
    match try_load_skills(path) {
        Ok(skills) => skills,
        Err(err) => {
            warn!(path = %path.display(), %err, "skill catalog unavailable, using empty catalog");
            Vec::new()
        }
    }
}

/// Load role descriptors from a JSON file.
///
/// Accepted shapes per record: a bare string (used as both id and
/// description) or an object with an id under `id`, `role`, or `title` and
/// descriptive text under `description` or `summary`. A record with no
/// descriptive field falls back to its id. Missing or malformed files yield
/// an empty list, never an error.
pub fn load_roles(path: &Path) -> Vec<RoleDescriptor> {
    match try_load_roles(path) {
        Ok(roles) => roles,
        Err(err) => {
            warn!(path = %path.display(), %err, "role catalog unavailable, using empty catalog");
            Vec::new()
        }
    }
}

fn try_load_skills(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    parse_skills(&raw)
}

fn try_load_roles(path: &Path) -> Result<Vec<RoleDescriptor>> {
    let raw = std::fs::read_to_string(path)?;
    parse_roles(&raw)
}

/// Parse a skill list: lower-case, trim, drop empties, dedup in order.
pub fn parse_skills(raw: &str) -> Result<Vec<String>> {
    let terms: Vec<String> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    let mut skills = Vec::new();
    for term in terms {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && seen.insert(term.clone()) {
            skills.push(term);
        }
    }
    Ok(skills)
}

/// Parse role descriptors from loosely-shaped JSON records.
pub fn parse_roles(raw: &str) -> Result<Vec<RoleDescriptor>> {
    let records: Vec<Value> = serde_json::from_str(raw)?;

    let mut seen = HashSet::new();
    let mut roles = Vec::new();
    for record in records {
        let Some(role) = normalize_role(&record) else {
            warn!(?record, "skipping role record with no usable id");
            continue;
        };
        if seen.insert(role.id.clone()) {
            roles.push(role);
        } else {
            warn!(id = %role.id, "skipping duplicate role id");
        }
    }
    Ok(roles)
}

fn normalize_role(record: &Value) -> Option<RoleDescriptor> {
    if let Some(id) = record.as_str() {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        return Some(RoleDescriptor {
            id: id.to_string(),
            description: id.to_string(),
        });
    }

    let id = ["id", "role", "title"]
        .into_iter()
        .find_map(|key| record.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())?
        .to_string();

    // Fallback chain: description, then summary, then the id itself.
    let description = ["description", "summary"]
        .into_iter()
        .find_map(|key| record.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| id.clone(), ToString::to_string);

    Some(RoleDescriptor { id, description })
}

/// Default skill terms compiled into the binary.
const BUILTIN_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "rust",
    "go",
    "c++",
    "sql",
    "nosql",
    "html",
    "css",
    "react",
    "node.js",
    "django",
    "flask",
    "spring",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "git",
    "linux",
    "machine learning",
    "deep learning",
    "nlp",
    "data analysis",
    "pandas",
    "numpy",
    "tensorflow",
    "pytorch",
    "spark",
    "kafka",
    "rest",
    "graphql",
    "microservices",
    "ci/cd",
    "agile",
    "excel",
    "tableau",
    "power bi",
];

/// Default role catalog compiled into the binary.
const BUILTIN_ROLES: &[(&str, &str)] = &[
    (
        "Data Scientist",
        "Builds statistical and machine learning models from data, runs experiments, and communicates insights using python, sql, and visualization tools",
    ),
    (
        "Data Analyst",
        "Analyzes business data with sql, excel, and dashboards such as tableau or power bi to answer product and operations questions",
    ),
    (
        "Machine Learning Engineer",
        "Productionizes machine learning models with python, tensorflow or pytorch, and deploys them on cloud infrastructure",
    ),
    (
        "Backend Developer",
        "Designs and builds server-side services and apis with languages like java, go, python, or rust, backed by sql and nosql stores",
    ),
    (
        "Frontend Developer",
        "Builds user interfaces with html, css, javascript, typescript, and frameworks such as react",
    ),
    (
        "Full Stack Developer",
        "Works across frontend and backend, from react interfaces to api services and databases",
    ),
    (
        "DevOps Engineer",
        "Automates build, deployment, and operations with docker, kubernetes, terraform, and ci/cd pipelines on aws, azure, or gcp",
    ),
    (
        "Cloud Engineer",
        "Designs and operates cloud infrastructure on aws, azure, or gcp with infrastructure as code",
    ),
    (
        "Data Engineer",
        "Builds data pipelines and warehouses with spark, kafka, sql, and orchestration tooling",
    ),
    (
        "Business Analyst",
        "Gathers requirements, analyzes processes, and produces reports and dashboards for stakeholders",
    ),
];
