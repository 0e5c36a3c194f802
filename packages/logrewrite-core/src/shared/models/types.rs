//! Static type descriptors attached to every expression
//!
//! The engine resolves types before handing the tree over; this crate only
//! needs assignability tests against a handful of well-known types.

use serde::{Deserialize, Serialize};

pub const THROWABLE: &str = "java.lang.Throwable";
pub const STRING: &str = "java.lang.String";
pub const BOOLEAN_BOX: &str = "java.lang.Boolean";
pub const SUPPLIER: &str = "java.util.function.Supplier";

/// Marker types of the supported logging APIs
pub const MARKER_TYPES: &[&str] = &["org.slf4j.Marker", "org.apache.logging.log4j.Marker"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveType {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Boolean)
    }
}

/// Resolved class or interface type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassType {
    /// Fully-qualified name
    pub fqn: String,

    /// Every transitive supertype the engine knows about
    #[serde(default)]
    pub supertypes: Vec<String>,

    /// Method names declared on the type (used for API capability probes)
    #[serde(default)]
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeDescriptor {
    Primitive(PrimitiveType),
    Class(ClassType),
    Unknown,
}

impl Default for TypeDescriptor {
    fn default() -> Self {
        Self::Unknown
    }
}

impl TypeDescriptor {
    pub fn class(fqn: impl Into<String>) -> Self {
        Self::Class(ClassType {
            fqn: fqn.into(),
            supertypes: Vec::new(),
            members: Vec::new(),
        })
    }

    pub fn string() -> Self {
        Self::class(STRING)
    }

    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// An exception type, e.g. `java.io.IOException`
    pub fn exception(fqn: impl Into<String>) -> Self {
        Self::class(fqn).with_supertypes([THROWABLE])
    }

    /// Add supertypes (no-op for non-class types)
    pub fn with_supertypes<I, S>(mut self, supertypes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Self::Class(class) = &mut self {
            class
                .supertypes
                .extend(supertypes.into_iter().map(Into::into));
        }
        self
    }

    /// Add known member method names (no-op for non-class types)
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Self::Class(class) = &mut self {
            class.members.extend(members.into_iter().map(Into::into));
        }
        self
    }

    pub fn fqn(&self) -> Option<&str> {
        match self {
            Self::Class(class) => Some(&class.fqn),
            _ => None,
        }
    }

    pub fn is_assignable_to(&self, fqn: &str) -> bool {
        match self {
            Self::Class(class) => class.fqn == fqn || class.supertypes.iter().any(|s| s == fqn),
            _ => false,
        }
    }

    pub fn is_exception(&self) -> bool {
        self.is_assignable_to(THROWABLE)
    }

    pub fn is_marker(&self) -> bool {
        MARKER_TYPES.iter().any(|m| self.is_assignable_to(m))
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::Boolean)) || self.is_assignable_to(BOOLEAN_BOX)
    }

    pub fn is_string(&self) -> bool {
        self.is_assignable_to(STRING)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Primitive(p) if p.is_numeric())
    }

    pub fn has_member(&self, name: &str) -> bool {
        match self {
            Self::Class(class) => class.members.iter().any(|m| m == name),
            _ => false,
        }
    }
}
