//! Declaration manifests let a build-pre-step host drive the generator
//! without a compiler front end: a JSON array of declarations in, a pass out.
use std::fs;
use std::path::Path;

use crate::decl::Declaration;
use crate::error::{MojaError, Result};

/// Load declarations from a JSON manifest.
///
/// Shape: `[{"kind": "interface", "simple_name": "Moja",
/// "enclosing_package": "demo", "is_marked": true}, ...]`.
pub fn load_declarations(path: &Path) -> Result<Vec<Declaration>> {
    let raw = fs::read_to_string(path).map_err(|e| MojaError::Manifest {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| MojaError::Manifest {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}
