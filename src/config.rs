//! Configuration for the compass CLI and engine.
//!
//! Defaults work out of the box (built-in catalogs, dimension 384). A TOML
//! file can override any section: an explicit `--config` path or
//! `COMPASS_CONFIG` wins, otherwise the global
//! `<config_dir>/compass/config.toml` is merged when present. A few
//! environment variables override individual fields last.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CompassError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
}

/// Paths to the catalog files. Unset paths fall back to the built-in
/// catalog; set-but-unreadable paths degrade to empty catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub skills_path: Option<PathBuf>,
    pub roles_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Top project matches kept in the report.
    pub top_projects: usize,
    /// Top role recommendations kept in the report.
    pub top_roles: usize,
    /// Cap on missing skills named in one suggestion.
    pub max_missing_skills: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_projects: 3,
            top_roles: 8,
            max_missing_skills: 12,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Hash embedding dimension.
    pub dims: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self { dims: 384 }
    }
}

impl Config {
    /// Load configuration, merging file and environment overrides onto the
    /// defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("COMPASS_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            } else {
                return Err(CompassError::MissingConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        } else if let Some(patch) = Self::load_global()? {
            config.merge_patch(patch);
        }

        config.apply_env_overrides();
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("compass/config.toml"))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| CompassError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| CompassError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(catalog) = patch.catalog {
            if catalog.skills_path.is_some() {
                self.catalog.skills_path = catalog.skills_path;
            }
            if catalog.roles_path.is_some() {
                self.catalog.roles_path = catalog.roles_path;
            }
        }
        if let Some(analysis) = patch.analysis {
            if let Some(value) = analysis.top_projects {
                self.analysis.top_projects = value;
            }
            if let Some(value) = analysis.top_roles {
                self.analysis.top_roles = value;
            }
            if let Some(value) = analysis.max_missing_skills {
                self.analysis.max_missing_skills = value;
            }
        }
        if let Some(embedding) = patch.embedding {
            if let Some(value) = embedding.dims {
                self.embedding.dims = value;
            }
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("COMPASS_SKILLS_PATH") {
            self.catalog.skills_path = Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("COMPASS_ROLES_PATH") {
            self.catalog.roles_path = Some(PathBuf::from(path));
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    catalog: Option<CatalogPatch>,
    analysis: Option<AnalysisPatch>,
    embedding: Option<EmbeddingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogPatch {
    skills_path: Option<PathBuf>,
    roles_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct AnalysisPatch {
    top_projects: Option<usize>,
    top_roles: Option<usize>,
    max_missing_skills: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct EmbeddingPatch {
    dims: Option<usize>,
}
