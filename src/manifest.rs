//! Manifest value object: an ordered list of geometry-fragment paths plus the
//! root node name the consuming loader merges them under.
//!
//! Order is semantically meaningful: the loader applies fragments in list
//! order and later entries may override or extend earlier ones (materials
//! before shapes before sensitive-detector overlays). Duplicate entries are
//! preserved exactly as constructed; re-applying a fragment is the consumer's
//! concern, not ours. See `Manifest::duplicates` for reporting.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Posix-style relative path identifying one XML geometry fragment.
///
/// The path is resolved by the consuming framework's search path; this type
/// performs no I/O and no existence checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilePath(String);

impl FilePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First path component, e.g. `Geometry`.
    pub fn subsystem(&self) -> Option<&str> {
        self.0.split('/').next().filter(|s| !s.is_empty())
    }

    /// Second path component, e.g. `TrackerSimData`.
    pub fn package(&self) -> Option<&str> {
        self.0.split('/').nth(1).filter(|s| !s.is_empty())
    }

    /// Final path component, e.g. `trackerProdCuts.xml`.
    pub fn file_name(&self) -> Option<&str> {
        self.0.rsplit('/').next().filter(|s| !s.is_empty())
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FilePath {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Ordered geometry-fragment manifest.
///
/// Constructed once (by the generator, or by `loader::read_manifest`) and
/// consumed once by the geometry service; it is a value object with no
/// mutation after construction. Equality and `fingerprint` exist so a
/// regenerated manifest can be checked byte-for-byte against a published one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    files: Vec<FilePath>,
    root_node_name: String,
}

impl Manifest {
    pub fn new(files: Vec<FilePath>, root_node_name: impl Into<String>) -> Self {
        Self {
            files,
            root_node_name: root_node_name.into(),
        }
    }

    pub fn files(&self) -> &[FilePath] {
        &self.files
    }

    pub fn root_node_name(&self) -> &str {
        &self.root_node_name
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilePath> {
        self.files.iter()
    }

    /// Content fingerprint over the ordered file list and root node name.
    ///
    /// Two manifests have equal fingerprints iff they are equal, so an
    /// external generator can verify that re-running against the same inputs
    /// reproduces the published manifest.
    pub fn fingerprint(&self) -> String {
        let mut h = blake3::Hasher::new();
        h.update(self.root_node_name.as_bytes());
        h.update(b"\n");
        for f in &self.files {
            h.update(f.as_str().as_bytes());
            h.update(b"\n");
        }
        format!("blake3:{}", h.finalize().to_hex())
    }

    /// Paths appearing more than once, in first-occurrence order, with their
    /// total occurrence counts. Reporting only; the list itself is never
    /// deduplicated.
    pub fn duplicates(&self) -> Vec<(FilePath, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for f in &self.files {
            *counts.entry(f.as_str()).or_insert(0) += 1;
        }
        let mut seen: Vec<&str> = Vec::new();
        let mut out = Vec::new();
        for f in &self.files {
            let n = counts[f.as_str()];
            if n > 1 && !seen.contains(&f.as_str()) {
                seen.push(f.as_str());
                out.push((f.clone(), n));
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a FilePath;
    type IntoIter = std::slice::Iter<'a, FilePath>;
    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
