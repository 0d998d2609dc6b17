//! Application context wiring config, catalogs, and the engine together.

use std::sync::Arc;

use crate::catalog::{self, Catalog};
use crate::config::Config;
use crate::embedding::{Embedder, HashEmbedder};
use crate::engine::AnalysisEngine;
use crate::error::Result;

pub struct AppContext {
    pub config: Config,
    pub catalog: Catalog,
    pub engine: AnalysisEngine,
    pub robot_mode: bool,
    pub verbosity: u8,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let catalog = load_catalog(&config);
        let embedder: Arc<dyn Embedder> = Arc::new(HashEmbedder::new(config.embedding.dims));
        let engine = AnalysisEngine::new(&catalog, embedder, config.analysis.clone());

        Ok(Self {
            config,
            catalog,
            engine,
            robot_mode: cli.robot,
            verbosity: cli.verbose,
        })
    }
}

/// Resolve the catalogs: configured paths load from disk (degrading to
/// empty on failure), unset paths use the built-in catalog.
fn load_catalog(config: &Config) -> Catalog {
    let builtin = Catalog::builtin();
    let skills = config
        .catalog
        .skills_path
        .as_deref()
        .map_or(builtin.skills, |path| catalog::load_skills(path));
    let roles = config
        .catalog
        .roles_path
        .as_deref()
        .map_or(builtin.roles, |path| catalog::load_roles(path));
    Catalog { skills, roles }
}
