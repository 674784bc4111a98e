//! In-memory pass over a hand-built declaration set, reported as JSON.
//! Shows the diagnostics-as-values surface: the shape violation below lands
//! in the report instead of aborting anything.
use anyhow::Context;
use magic_moja::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let decls = vec![
        Declaration::marked_interface("Moja", "demo"),
        Declaration {
            kind: DeclKind::Method,
            simple_name: "pull_out".to_string(),
            enclosing_package: "demo".to_string(),
            is_marked: true,
        },
    ];

    let outcome = process_pass(&decls);
    let report = serde_json::to_string_pretty(&outcome).context("serializing pass report")?;
    println!("{report}");
    Ok(())
}
