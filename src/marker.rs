use crate::decl::DeclKind;

/// Registration info for a marker recognized by the generator, collected at
/// link time. The built-in `magic` marker is submitted below; hosts may
/// register their own.
pub struct MarkerSpec {
    pub name: &'static str,
    pub eligible_kinds: &'static [DeclKind],
}

inventory::collect!(MarkerSpec);

/// Symbolic name of the built-in marker.
pub const MAGIC: &str = "magic";

inventory::submit! {
    MarkerSpec {
        name: MAGIC,
        eligible_kinds: &[DeclKind::Interface],
    }
}

/// Immutable view over the registered markers.
pub struct MarkerRegistry;

impl MarkerRegistry {
    /// Look up a registered marker by name.
    pub fn get(name: &str) -> Option<&'static MarkerSpec> {
        inventory::iter::<MarkerSpec>
            .into_iter()
            .find(|m| m.name == name)
    }

    /// Whether a declaration of `kind` may carry the built-in marker.
    /// True only for interface declarations.
    pub fn is_eligible_kind(kind: DeclKind) -> bool {
        MarkerRegistry::get(MAGIC).is_some_and(|m| m.eligible_kinds.contains(&kind))
    }
}
