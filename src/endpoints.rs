//! Candidate stream-URL generation.
//!
//! One cloud identifier maps onto a handful of known hosting access
//! patterns. The generator emits them in fixed priority order, each with a
//! fresh cache-defeating nonce so a cached failure from a previous attempt
//! with the same identifier cannot poison the retry.

use rand::RngExt;
use rand::distr::Alphanumeric;

use crate::resolver::CloudId;

/// Number of endpoint variants per identifier.
pub const VARIANTS: usize = 3;

/// Produce the ordered candidate endpoints for `id`.
///
/// Index 0 is tried first. Called fresh on every retry-cycle start and
/// never memoized across tracks, so every cycle gets new nonces.
pub fn generate(id: &CloudId, nonce_len: usize) -> Vec<String> {
    templates(id)
        .into_iter()
        .map(|base| format!("{base}&cb={}", nonce(nonce_len)))
        .collect()
}

fn templates(id: &CloudId) -> [String; VARIANTS] {
    [
        format!("https://drive.google.com/uc?export=download&id={id}"),
        format!("https://drive.usercontent.google.com/download?id={id}&export=download"),
        format!("https://docs.google.com/uc?export=download&id={id}"),
    ]
}

fn nonce(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests;
