//! Pass-level semantics of the generator core.
use magic_moja::generator::ERR_INTERFACE_ONLY;
use magic_moja::marker::MarkerRegistry;
use magic_moja::prelude::*;

fn decl(kind: DeclKind, name: &str, pkg: &str) -> Declaration {
    Declaration {
        kind,
        simple_name: name.to_string(),
        enclosing_package: pkg.to_string(),
        is_marked: true,
    }
}

#[test]
fn marker_is_interface_only() {
    assert!(MarkerRegistry::is_eligible_kind(DeclKind::Interface));
    assert!(!MarkerRegistry::is_eligible_kind(DeclKind::Class));
    assert!(!MarkerRegistry::is_eligible_kind(DeclKind::Method));
    assert!(!MarkerRegistry::is_eligible_kind(DeclKind::Other));
}

#[test]
fn empty_input_yields_empty_outcome() {
    let outcome = process_pass(&[]);
    assert!(outcome.units.is_empty());
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn marked_interface_emits_one_unit_and_one_note() {
    let outcome = process_pass(&[Declaration::marked_interface("Foo", "demo")]);
    assert_eq!(outcome.units.len(), 1);
    let unit = &outcome.units[0];
    assert_eq!(unit.target_package, "demo");
    assert_eq!(unit.type_name, "FooImpl");
    assert_eq!(unit.implemented_interface, "demo.Foo");

    assert_eq!(outcome.diagnostics.len(), 1);
    let note = &outcome.diagnostics[0];
    assert_eq!(note.severity, Severity::Note);
    assert!(note.message.contains("Foo"));
    assert_eq!(
        note.decl.as_ref().map(|d| d.simple_name.as_str()),
        Some("Foo")
    );
}

#[test]
fn marked_method_is_rejected_with_error() {
    let outcome = process_pass(&[decl(DeclKind::Method, "bar", "demo")]);
    assert!(outcome.units.is_empty());
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].severity, Severity::Error);
    assert_eq!(outcome.diagnostics[0].message, ERR_INTERFACE_ONLY);
    assert!(outcome.has_errors());
}

#[test]
fn shape_violation_does_not_abort_the_pass() {
    let outcome = process_pass(&[
        decl(DeclKind::Class, "Broken", "demo"),
        Declaration::marked_interface("Foo", "demo"),
        Declaration::marked_interface("Bar", "demo"),
    ]);
    assert_eq!(outcome.units.len(), 2);
    assert_eq!(outcome.units[0].type_name, "FooImpl");
    assert_eq!(outcome.units[1].type_name, "BarImpl");
    let errors = outcome.diagnostics.iter().filter(|d| d.is_error()).count();
    let notes = outcome
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Note)
        .count();
    assert_eq!(errors, 1);
    assert_eq!(notes, 2);
}

#[test]
fn unmarked_declarations_are_skipped() {
    let mut quiet = Declaration::marked_interface("Quiet", "demo");
    quiet.is_marked = false;
    let outcome = process_pass(&[quiet]);
    assert!(outcome.units.is_empty());
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn same_input_yields_same_outcome() {
    let input = vec![
        Declaration::marked_interface("Foo", "demo"),
        Declaration::marked_interface("Bar", "other.pkg"),
        decl(DeclKind::Method, "bar", "demo"),
    ];
    let first = process_pass(&input);
    let second = process_pass(&input);
    assert_eq!(first.units, second.units);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn rendered_unit_implements_the_interface_with_the_constant() {
    let outcome = process_pass(&[Declaration::marked_interface("Moja", "demo")]);
    let source = outcome.units[0].render().expect("render");
    assert!(source.contains("pub struct MojaImpl;"));
    assert!(source.contains("impl demo::Moja for MojaImpl"));
    assert!(source.contains(magic_moja::unit::METHOD_NAME));
    assert!(source.contains(magic_moja::unit::CONJURED));
}

#[test]
fn invalid_host_names_surface_as_render_errors() {
    let outcome = process_pass(&[Declaration::marked_interface("not an ident", "demo")]);
    assert_eq!(outcome.units.len(), 1);
    let err = outcome.units[0].render().unwrap_err();
    assert!(matches!(err, MojaError::Render(_)));
}
