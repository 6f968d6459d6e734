use geom_manifest::loader;
use geom_manifest::manifest::{FilePath, Manifest};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/manifests")
        .join(name)
}

#[test]
fn fixture_manifest_loads() {
    let m = loader::read_manifest(fixture("minimal.json")).expect("load fixture");
    assert_eq!(m.len(), 3);
    assert_eq!(m.root_node_name(), "cms:OCMS");
    assert_eq!(
        m.files()[2].as_str(),
        "Geometry/MuonCommonData/data/mf/2026/v2/mf.xml"
    );
}

#[test]
fn json_round_trip_preserves_equality_and_order() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("manifest.json");
    let m = geom_manifest::geometries::phase2_test_mf();
    loader::write_manifest(&path, &m).expect("write");
    let m2 = loader::read_manifest(&path).expect("read back");
    assert_eq!(m, m2);
    assert_eq!(m.fingerprint(), m2.fingerprint());
}

#[test]
fn write_is_deterministic_for_equal_manifests() {
    let tmp = TempDir::new().unwrap();
    let p1 = tmp.path().join("a.json");
    let p2 = tmp.path().join("b.json");
    loader::write_manifest(&p1, &geom_manifest::geometries::phase2_test_mf()).unwrap();
    loader::write_manifest(&p2, &geom_manifest::geometries::phase2_test_mf()).unwrap();
    assert_eq!(fs::read(&p1).unwrap(), fs::read(&p2).unwrap());
}

#[test]
fn missing_files_reports_unresolved_entries_in_order() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    let present = "Geometry/CMSCommonData/data/materials.xml";
    let absent = "Geometry/CMSCommonData/data/rotations.xml";
    let dir = root.join("Geometry/CMSCommonData/data");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("materials.xml"), "<MaterialSection/>").unwrap();

    let m = Manifest::new(
        vec![FilePath::new(present), FilePath::new(absent)],
        "cms:OCMS",
    );
    let missing = loader::missing_files(&m, root);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].as_str(), absent);
}

#[test]
fn read_of_malformed_json_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    let err = loader::read_manifest(&path).unwrap_err();
    assert!(format!("{err:?}").contains("parse manifest json"), "{err:?}");
}
