//! Embedding provider interface and the default hash embedder.
//!
//! The engine consumes embeddings as an opaque capability: anything that can
//! turn text into a fixed-length vector can be plugged in behind [`Embedder`]
//! without touching the scoring formulas. The default provider is an FNV-1a
//! hash embedder - fully deterministic, no ML model dependencies.

use crate::error::Result;

/// Capability consumed by the engine: text in, fixed-length vector out.
///
/// Implementations must be deterministic per input for the report's
/// idempotence guarantees to hold; a remote model that is not should be
/// wrapped with its own caching.
pub trait Embedder: Send + Sync {
    /// Embed text into a vector of `dims()` length.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embedding dimension.
    fn dims(&self) -> usize;
}

/// Hash embedder using FNV-1a over word tokens and character trigrams.
pub struct HashEmbedder {
    dim: usize,
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

impl Default for HashEmbedder {
    fn default() -> Self {
        Self { dim: 384 }
    }
}

impl HashEmbedder {
    /// Create embedder with the given dimension.
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    fn accumulate(&self, vector: &mut [f32], token: &[u8], weight: f32) {
        let hash = fnv1a(token);
        let bucket = (hash % self.dim as u64) as usize;
        // High bit decides the sign so collisions partially cancel.
        let sign = if hash & (1u64 << 63) == 0 { 1.0 } else { -1.0 };
        vector[bucket] += sign * weight;
    }
}

impl Embedder for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vector = vec![0.0f32; self.dim];

        for token in text.split(|c: char| !c.is_alphanumeric()) {
            if token.is_empty() {
                continue;
            }
            let token = token.to_lowercase();
            let bytes = token.as_bytes();
            self.accumulate(&mut vector, bytes, 1.0);

            // Character trigrams give partial credit to related word forms.
            if bytes.len() > 3 {
                for gram in bytes.windows(3) {
                    self.accumulate(&mut vector, gram, 0.25);
                }
            }
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        Ok(vector)
    }

    fn dims(&self) -> usize {
        self.dim
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Cosine similarity between two vectors, in [-1, 1].
///
/// Mismatched lengths and zero vectors yield 0.0 rather than an error; the
/// scorers map that to a neutral mid-scale score.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
    }
}
