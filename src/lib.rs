//! geom_manifest: typed geometry-fragment manifests.
//!
//! A detector framework builds its in-memory geometry by merging a fixed,
//! ordered list of XML fragment files under one root node. This crate models
//! that list as a value object (`manifest::Manifest`), ships the generated
//! Phase-2 test-geometry manifest as built-in data (`geometries`), and
//! provides the invariant checks and JSON persisted form a publishing tool
//! needs (`validate`, `loader`).
//!
//! The crate performs no XML parsing and no fragment merging; those belong to
//! the consuming geometry service.

pub mod geometries;
pub mod loader;
pub mod manifest;
pub mod validate;
