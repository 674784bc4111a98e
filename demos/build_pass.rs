//! Build-pre-step host: load a declaration manifest, emit generated units
//! under an output directory, and fail on any ERROR diagnostic.
//!
//! Usage: cargo run --example build_pass -- [manifest.json] [out-dir]
use std::path::PathBuf;

use anyhow::{bail, Context};
use magic_moja::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let mut args = std::env::args().skip(1);
    let manifest = PathBuf::from(args.next().unwrap_or_else(|| "demos/declarations.json".into()));
    let out = PathBuf::from(args.next().unwrap_or_else(|| "target/generated".into()));

    let decls = magic_moja::manifest::load_declarations(&manifest)
        .with_context(|| format!("loading {}", manifest.display()))?;

    let mut sink = FsSink::new(&out);
    let outcome = emit_pass(&decls, &mut sink);

    for diag in &outcome.diagnostics {
        match diag.severity {
            Severity::Error => eprintln!("error: {}", diag.message),
            Severity::Note => println!("note: {}", diag.message),
        }
    }
    println!("wrote {} unit(s) under {}", outcome.units.len(), out.display());

    // pass/fail policy belongs to the host, and this host is strict
    if outcome.has_errors() {
        bail!("generation finished with errors");
    }
    Ok(())
}
