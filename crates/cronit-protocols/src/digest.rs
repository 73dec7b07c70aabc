//! Digest function protocol.

/// Deterministic, side-effect free one-way digest.
pub trait DigestFunction: Send + Sync {
    /// Short algorithm name (e.g. `"sha256"`).
    fn algorithm(&self) -> &'static str;

    /// Digest the given parts into a lowercase hex string.
    ///
    /// Implementations must keep part boundaries significant, so that
    /// `["ab", "c"]` and `["a", "bc"]` digest differently.
    fn digest(&self, parts: &[&str]) -> String;
}
