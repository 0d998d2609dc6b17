//! compass - resume / job-description matching engine
//!
//! Matches a candidate resume against a job description and produces a
//! structured, explainable compatibility report: extracted skills, matched
//! and missing skills, a normalized match score, relevant resume projects
//! ranked by topical fit, recommended roles, and improvement suggestions.
//!
//! The semantic core lives in [`engine`]; embeddings are an injected
//! capability behind [`embedding::Embedder`], so the scoring formulas never
//! depend on a concrete model.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod test_utils;

pub use error::{CompassError, Result};
