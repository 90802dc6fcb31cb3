//! Content fingerprinting and the smart-save gate.
//!
//! A fingerprint is a blake3 hash of the content's UTF-8 bytes, rendered as
//! lowercase hex. It is used purely for change detection — a save is elided
//! when the candidate content is byte-identical to what was last confirmed
//! on disk — never for integrity or security.

/// Fingerprints `content` for change detection.
pub fn fingerprint(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

/// Tracks the fingerprint of the last content confirmed on stable storage.
///
/// The gate starts `Dirty` (no fingerprint recorded) and becomes `Clean` only
/// through [`SaveGate::record`], which callers invoke strictly after a
/// successful load or write. There is no other transition: a failed write
/// must leave the gate untouched so the next save still attempts the write.
#[derive(Debug, Clone, Default)]
pub struct SaveGate {
    last_saved: Option<String>,
}

impl SaveGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a write of `content` would change what is on disk, i.e. its
    /// fingerprint differs from the last recorded one (or none is recorded).
    pub fn should_save(&self, content: &str) -> bool {
        self.last_saved.as_deref() != Some(fingerprint(content).as_str())
    }

    /// Records `content` as confirmed on disk. Call only after a successful
    /// load or write — never speculatively.
    pub fn record(&mut self, content: &str) {
        self.last_saved = Some(fingerprint(content));
    }

    /// True once a load or write has been confirmed.
    pub fn is_clean(&self) -> bool {
        self.last_saved.is_some()
    }
}
