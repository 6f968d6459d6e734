//! Manifest invariant checks, as run by the publishing tool before a new
//! generated manifest ships.
//!
//! Hard invariants (errors): non-empty manifest, non-empty root node name,
//! and every path non-empty, relative, posix-style, and naming an `.xml`
//! fragment. Duplicate entries are tolerated by the consuming loader, so they
//! are reported, not rejected.

use crate::manifest::{FilePath, Manifest};
use anyhow::{bail, Result};

/// Outcome of a passing validation: anything worth surfacing that is not an
/// invariant violation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Paths appearing more than once, with occurrence counts.
    pub duplicates: Vec<(FilePath, usize)>,
}

/// Check the manifest's invariants. Returns a report on success; any hard
/// violation is an error naming the offending entry.
pub fn validate(m: &Manifest) -> Result<ValidationReport> {
    if m.is_empty() {
        bail!("manifest has no geometry files");
    }
    if m.root_node_name().is_empty() {
        bail!("manifest root node name is empty");
    }
    for (i, f) in m.iter().enumerate() {
        check_path(f).map_err(|e| e.context(format!("file entry {} ('{}')", i, f)))?;
    }
    let duplicates = m.duplicates();
    for (f, n) in &duplicates {
        log::warn!("duplicate geometry file '{}' listed {} times (kept as generated)", f, n);
    }
    Ok(ValidationReport { duplicates })
}

fn check_path(f: &FilePath) -> Result<()> {
    let s = f.as_str();
    if s.is_empty() {
        bail!("empty path");
    }
    if s.starts_with('/') {
        bail!("path is absolute; manifest entries are search-path relative");
    }
    if s.contains('\\') {
        bail!("path uses backslashes; manifest entries are posix-style");
    }
    if !s.ends_with(".xml") {
        bail!("path does not name an .xml geometry fragment");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    fn one(path: &str) -> Manifest {
        Manifest::new(vec![FilePath::new(path)], "cms:OCMS")
    }

    #[test]
    fn empty_manifest_rejected() {
        let m = Manifest::new(vec![], "cms:OCMS");
        assert!(validate(&m).is_err());
    }

    #[test]
    fn empty_root_node_rejected() {
        let m = Manifest::new(vec![FilePath::new("Geometry/a/data/b.xml")], "");
        assert!(validate(&m).is_err());
    }

    #[test]
    fn bad_paths_rejected_with_entry_index() {
        for bad in ["", "/abs/path/materials.xml", "Geometry\\data\\materials.xml", "Geometry/data/materials"] {
            let err = validate(&one(bad)).unwrap_err();
            assert!(format!("{err:?}").contains("file entry 0"), "{err:?}");
        }
    }

    #[test]
    fn duplicates_pass_but_are_reported() {
        let m = Manifest::new(
            vec![
                FilePath::new("Geometry/a/data/x.xml"),
                FilePath::new("Geometry/a/data/y.xml"),
                FilePath::new("Geometry/a/data/x.xml"),
            ],
            "cms:OCMS",
        );
        let rep = validate(&m).expect("duplicates are tolerated");
        assert_eq!(rep.duplicates.len(), 1);
        assert_eq!(rep.duplicates[0].0.as_str(), "Geometry/a/data/x.xml");
        assert_eq!(rep.duplicates[0].1, 2);
    }
}
