use std::fmt;

use thiserror::Error;

use super::property_descriptor::MaxOccurs;
use super::xstypes::QName;

/// What a failed reference was supposed to point at.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReferenceRole {
    Supertype,
    PropertyType,
    ElementType,
    SubstitutionGroup,
}

impl fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Supertype => "supertype",
            Self::PropertyType => "property value type",
            Self::ElementType => "element type",
            Self::SubstitutionGroup => "substitution group head",
        })
    }
}

/// Errors raised while building a [`SchemaSet`](crate::SchemaSet).
///
/// All of them abort the build; there is no partially built catalog.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{referrer}: {role} {target} is not declared")]
    UnresolvedReference {
        referrer: QName,
        role: ReferenceRole,
        target: QName,
    },
    #[error("duplicate type definition: {0}")]
    DuplicateType(QName),
    #[error("duplicate element declaration: {0}")]
    DuplicateElement(QName),
    #[error("tried to overwrite built-in component: {0}")]
    BuiltinOverwrite(QName),
    #[error("namespace {0:?} is declared by more than one catalog")]
    DuplicateNamespace(String),
    #[error("{name} is declared by the catalog of namespace {namespace:?}")]
    ForeignDeclaration { namespace: String, name: QName },
    #[error("namespace {namespace:?} depends on {dependency:?}, which is not part of the build")]
    MissingDependency {
        namespace: String,
        dependency: String,
    },
    #[error("{referrer} references {target}, but its namespace is not a declared dependency")]
    UndeclaredDependency { referrer: QName, target: QName },
    #[error("supertype chain of {0} is cyclic")]
    CyclicSupertype(QName),
    #[error("property {property} of {owner} has minOccurs {min} greater than maxOccurs {max}")]
    InvalidOccurrence {
        owner: QName,
        property: QName,
        min: u64,
        max: MaxOccurs,
    },
    #[error("simple type {0} cannot declare properties")]
    PropertiesOnSimpleType(QName),
    #[error("a reserved {0} slot was never filled")]
    UnfinishedComponent(&'static str),
}

/// Errors raised by [`QName::parse`].
#[derive(Debug, Error)]
pub enum QNameParseError {
    #[error("failed to resolve prefix {0:?} to a namespace URI")]
    NamePrefixNotResolved(String),
    #[error("missing closing brace in {0:?}")]
    UnterminatedNamespace(String),
    #[error("invalid local name in {0:?}")]
    InvalidLocalName(String),
}
