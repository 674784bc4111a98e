//! One pass over the host-supplied declaration set: validate shapes, emit
//! units, report diagnostics. Stateless; nothing carries over between passes.
use serde::Serialize;
use tracing::{debug, warn};

use crate::decl::Declaration;
use crate::diag::Diagnostic;
use crate::marker::MarkerRegistry;
use crate::sink::OutputSink;
use crate::unit::GeneratedUnit;

/// Shape-violation message for a marked declaration of the wrong kind.
pub const ERR_INTERFACE_ONLY: &str =
    "marker annotation only supported on interface declarations";

/// Everything one pass produced. Serializable so hosts can persist reports.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PassOutcome {
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl PassOutcome {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Run one pass over `marked`.
///
/// Iteration follows input order, so a given input always yields the same
/// outcome. A shape violation costs the offending declaration its unit and
/// adds an ERROR diagnostic; the pass itself never aborts.
pub fn process_pass(marked: &[Declaration]) -> PassOutcome {
    let mut outcome = PassOutcome::default();
    for decl in marked {
        if !decl.is_marked {
            // did not request generation; not an error
            debug!(decl = %decl.simple_name, "skipping unmarked declaration");
            continue;
        }
        if !MarkerRegistry::is_eligible_kind(decl.kind) {
            warn!(decl = %decl.simple_name, kind = ?decl.kind, "marker on ineligible declaration");
            outcome
                .diagnostics
                .push(Diagnostic::error(ERR_INTERFACE_ONLY, Some(decl)));
            continue;
        }
        debug!(decl = %decl.simple_name, "generating implementation");
        outcome.diagnostics.push(Diagnostic::note(
            format!("processing {}", decl.simple_name),
            Some(decl),
        ));
        outcome.units.push(GeneratedUnit::for_interface(decl));
    }
    outcome
}

/// Run one pass and hand each unit to `sink`. A failed write becomes an
/// ERROR diagnostic carrying the failure detail; it is not retried, and the
/// remaining units are still written. Only units the sink accepted are
/// returned.
pub fn emit_pass(marked: &[Declaration], sink: &mut dyn OutputSink) -> PassOutcome {
    let mut outcome = process_pass(marked);
    let mut written = Vec::with_capacity(outcome.units.len());
    for unit in outcome.units.drain(..) {
        match sink.write(&unit) {
            Ok(()) => written.push(unit),
            Err(e) => {
                let related = marked
                    .iter()
                    .find(|d| d.qualified_name() == unit.implemented_interface);
                outcome.diagnostics.push(Diagnostic::error(
                    format!("failed to write {}: {e}", unit.type_name),
                    related,
                ));
            }
        }
    }
    outcome.units = written;
    outcome
}
