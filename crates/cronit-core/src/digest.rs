//! Hex digest functions used for identity derivation.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use sha2::{Digest as _, Sha256};
use thiserror::Error;

use cronit_protocols::DigestFunction;

/// SHA-256 digest, the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl DigestFunction for Sha256Digest {
    fn algorithm(&self) -> &'static str {
        "sha256"
    }

    fn digest(&self, parts: &[&str]) -> String {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update((part.len() as u64).to_be_bytes());
            hasher.update(part.as_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

/// MD5 digest, for identities compatible with registries keyed by MD5.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Digest;

impl DigestFunction for Md5Digest {
    fn algorithm(&self) -> &'static str {
        "md5"
    }

    fn digest(&self, parts: &[&str]) -> String {
        let mut context = md5::Context::new();
        for part in parts {
            context.consume((part.len() as u64).to_be_bytes());
            context.consume(part.as_bytes());
        }
        hex::encode(context.compute().0)
    }
}

#[derive(Debug, Error)]
#[error("Unknown digest algorithm: {0}")]
pub struct UnknownAlgorithm(String);

/// Digest algorithm selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Md5,
}

impl DigestAlgorithm {
    pub fn into_digest(self) -> Arc<dyn DigestFunction> {
        match self {
            DigestAlgorithm::Sha256 => Arc::new(Sha256Digest),
            DigestAlgorithm::Md5 => Arc::new(Md5Digest),
        }
    }
}

impl FromStr for DigestAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(DigestAlgorithm::Sha256),
            "md5" => Ok(DigestAlgorithm::Md5),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigestAlgorithm::Sha256 => f.write_str("sha256"),
            DigestAlgorithm::Md5 => f.write_str("md5"),
        }
    }
}
