//! Persisted manifest form (JSON) and search-root resolution.
//!
//! The manifest's own contract stays I/O-free; reading, writing, and
//! existence checks live here so only the publishing tool pays for them.

use crate::manifest::{FilePath, Manifest};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a manifest from its JSON persisted form.
pub fn read_manifest(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let txt = fs::read_to_string(path)
        .with_context(|| format!("read manifest: {}", path.display()))?;
    let m: Manifest = serde_json::from_str(&txt).context("parse manifest json")?;
    Ok(m)
}

/// Write a manifest as pretty JSON. Output is deterministic for equal
/// manifests (field order is fixed, entries keep list order).
pub fn write_manifest(path: impl AsRef<Path>, m: &Manifest) -> Result<()> {
    let path = path.as_ref();
    let txt = serde_json::to_string_pretty(m).context("serialize manifest")?;
    fs::write(path, txt).with_context(|| format!("write manifest: {}", path.display()))?;
    Ok(())
}

/// Map an entry to its absolute location under a search root.
pub fn resolve_path(root: impl AsRef<Path>, f: &FilePath) -> PathBuf {
    root.as_ref().join(f.as_str())
}

/// Entries that do not resolve to an existing file under `root`, in manifest
/// order. Missing files are the consumer's error, not the manifest's; this is
/// an opt-in pre-publication check.
pub fn missing_files(m: &Manifest, root: impl AsRef<Path>) -> Vec<FilePath> {
    let root = root.as_ref();
    m.iter()
        .filter(|f| !resolve_path(root, f).is_file())
        .cloned()
        .collect()
}
