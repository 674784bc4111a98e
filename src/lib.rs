//! Host-agnostic scan-and-generate core: declarations in, generated units
//! and diagnostics out. Host bindings (the `#[magic]` attribute in
//! `moja-macros`, build-pre-step drivers) sit on top of this crate.

pub mod decl;
pub mod diag;
pub mod error;
pub mod generator;
pub mod manifest;
pub mod marker;
pub mod sink;
pub mod unit;

pub mod prelude {
    pub use crate::decl::{DeclKind, Declaration};
    pub use crate::diag::{Diagnostic, Severity};
    pub use crate::error::{MojaError, Result};
    pub use crate::generator::{emit_pass, process_pass, PassOutcome};
    pub use crate::sink::{FsSink, MemorySink, OutputSink};
    pub use crate::unit::GeneratedUnit;
}
