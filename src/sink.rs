use std::fs;
use std::path::{Path, PathBuf};

use heck::ToSnakeCase;
use tracing::debug;

use crate::error::{MojaError, Result};
use crate::unit::GeneratedUnit;

/// Where generated units go. The host owns the sink; the generator hands a
/// unit over exactly once and keeps nothing.
pub trait OutputSink {
    fn write(&mut self, unit: &GeneratedUnit) -> Result<()>;
}

/// Relative location of a unit under a sink root: package segments become
/// directories, the type name becomes a snake_case file stem.
pub fn unit_rel_path(unit: &GeneratedUnit) -> PathBuf {
    let mut path = PathBuf::new();
    if !unit.target_package.is_empty() {
        for seg in unit.target_package.split('.') {
            path.push(seg);
        }
    }
    path.push(format!("{}.rs", unit.type_name.to_snake_case()));
    path
}

/// Filesystem sink: renders each unit and writes it under `root`.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl OutputSink for FsSink {
    fn write(&mut self, unit: &GeneratedUnit) -> Result<()> {
        let source = unit.render()?;
        let path = self.root.join(unit_rel_path(unit));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| MojaError::Emission {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&path, source).map_err(|e| MojaError::Emission {
            path: path.clone(),
            source: e,
        })?;
        debug!(path = %path.display(), "wrote generated unit");
        Ok(())
    }
}

/// In-memory sink for tests and dry runs. Arm `fail_on` with a type name to
/// exercise the emission-failure path.
#[derive(Default)]
pub struct MemorySink {
    pub written: Vec<(PathBuf, String)>,
    pub fail_on: Option<String>,
}

impl OutputSink for MemorySink {
    fn write(&mut self, unit: &GeneratedUnit) -> Result<()> {
        if self.fail_on.as_deref() == Some(unit.type_name.as_str()) {
            return Err(MojaError::Other("memory sink armed to fail"));
        }
        let source = unit.render()?;
        self.written.push((unit_rel_path(unit), source));
        Ok(())
    }
}
