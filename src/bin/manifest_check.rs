//! manifest-check: validate a geometry manifest before publishing it.
//!
//! Usage:
//!   cargo run --bin manifest-check -- [manifest.json] [--root <dir>]
//!
//! With no file argument the built-in Phase-2 test-geometry manifest is
//! checked. `--root` additionally verifies every entry resolves to an
//! existing file under that directory.

use anyhow::{bail, Context, Result};
use geom_manifest::{geometries, loader, validate};

fn main() -> Result<()> {
    env_logger::init();

    let mut manifest_path: Option<String> = None;
    let mut root: Option<String> = None;
    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--root" => {
                root = Some(args.next().context("--root requires a directory")?);
            }
            _ => manifest_path = Some(a),
        }
    }

    let m = match &manifest_path {
        Some(p) => loader::read_manifest(p).with_context(|| format!("load manifest '{}'", p))?,
        None => geometries::phase2_test_mf(),
    };
    let name = manifest_path.as_deref().unwrap_or("<built-in phase2_test_mf>");
    log::info!(
        "checking {} ({} files, root node '{}')",
        name,
        m.len(),
        m.root_node_name()
    );

    let report = validate::validate(&m).with_context(|| format!("validate {}", name))?;
    for (f, n) in &report.duplicates {
        log::info!("duplicate entry: {} (x{})", f, n);
    }
    log::info!("fingerprint {}", m.fingerprint());

    if let Some(root) = root {
        let missing = loader::missing_files(&m, &root);
        if !missing.is_empty() {
            for f in &missing {
                log::error!("missing under {}: {}", root, f);
            }
            bail!("{} of {} files missing under {}", missing.len(), m.len(), root);
        }
        log::info!("all {} files resolve under {}", m.len(), root);
    }

    log::info!("{} OK", name);
    Ok(())
}
