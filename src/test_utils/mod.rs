//! Shared test utilities for compass.

use parking_lot::RwLock;

use crate::embedding::{Embedder, HashEmbedder};
use crate::error::{CompassError, Result};

/// Table-driven test case structure.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

/// Run table-driven tests with per-case reporting.
pub fn run_table_tests<I, E, F>(
    cases: Vec<TestCase<I, E>>,
    test_fn: F,
) -> std::result::Result<(), String>
where
    I: std::fmt::Debug + Clone,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E,
{
    for case in cases {
        println!("[TEST] Running: {}", case.name);
        let actual = test_fn(case.input.clone());
        if actual != case.expected {
            return Err(format!(
                "case '{}' failed: input {:?}, expected {:?}, got {:?}",
                case.name, case.input, case.expected, actual
            ));
        }
        println!("[TEST] PASSED: {}", case.name);
    }
    Ok(())
}

/// Embedder double returning the same vector for every text. Every pair of
/// texts has similarity 1, which makes ordering tests exercise stable-sort
/// tie behavior.
pub struct FixedEmbedder {
    vector: Vec<f32>,
}

impl FixedEmbedder {
    pub fn new(vector: Vec<f32>) -> Self {
        Self { vector }
    }
}

impl Embedder for FixedEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(self.vector.clone())
    }

    fn dims(&self) -> usize {
        self.vector.len()
    }
}

/// Embedder double that always fails, for degraded-path tests.
pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(CompassError::Embedding(
            "embedding provider unavailable".to_string(),
        ))
    }

    fn dims(&self) -> usize {
        0
    }
}

/// Embedder double that fails for texts missing a required substring until
/// `allow_all` is called. Used to simulate partial role-embedding failures.
pub struct SelectiveEmbedder {
    inner: HashEmbedder,
    required: RwLock<Option<String>>,
}

impl SelectiveEmbedder {
    pub fn failing_unless(substring: &str) -> Self {
        Self {
            inner: HashEmbedder::default(),
            required: RwLock::new(Some(substring.to_string())),
        }
    }

    pub fn allow_all(&self) {
        *self.required.write() = None;
    }
}

impl Embedder for SelectiveEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if let Some(required) = self.required.read().as_deref() {
            if !text.contains(required) {
                return Err(CompassError::Embedding(format!(
                    "text does not contain '{required}'"
                )));
            }
        }
        self.inner.embed(text)
    }

    fn dims(&self) -> usize {
        self.inner.dims()
    }
}
