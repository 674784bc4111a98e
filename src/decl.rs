use serde::{Deserialize, Serialize};

/// Kind of a program element visible to the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Interface,
    Class,
    Method,
    Other,
}

/// A named program element supplied by the host for one pass. The generator
/// only reads declarations; it never creates or destroys them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclKind,
    pub simple_name: String,
    /// Dot-separated enclosing package; empty for same-module hosts.
    #[serde(default)]
    pub enclosing_package: String,
    /// Whether the element carries the marker.
    #[serde(default)]
    pub is_marked: bool,
}

impl Declaration {
    /// A marked interface declaration, the one shape that triggers generation.
    pub fn marked_interface(simple_name: &str, enclosing_package: &str) -> Self {
        Self {
            kind: DeclKind::Interface,
            simple_name: simple_name.to_string(),
            enclosing_package: enclosing_package.to_string(),
            is_marked: true,
        }
    }

    /// Dot-joined `package.SimpleName`; bare simple name when the package is
    /// empty.
    pub fn qualified_name(&self) -> String {
        if self.enclosing_package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.enclosing_package, self.simple_name)
        }
    }
}
