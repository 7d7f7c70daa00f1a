use lazy_static::lazy_static;

use super::declaration::NamespaceCatalog;
use super::xstypes::QName;
use super::ValueBinding;

// Namespaces used by the XML Schema specification (pt. 1, §1.3.1)
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";
pub const XS_PREFIX: &str = "xs";

lazy_static! {
    /// The `xs:anyType` qualified name
    pub static ref XS_ANY_TYPE_NAME: QName = QName::with_namespace(XS_NAMESPACE, "anyType");
    /// The `xs:anySimpleType` qualified name
    pub static ref XS_ANY_SIMPLE_TYPE_NAME: QName = QName::with_namespace(XS_NAMESPACE, "anySimpleType");
    pub static ref XS_STRING_NAME: QName = QName::with_namespace(XS_NAMESPACE, "string");
    pub static ref XS_ANY_URI_NAME: QName = QName::with_namespace(XS_NAMESPACE, "anyURI");
}

/// Shorthand for a name in the XML Schema namespace.
pub fn xs(local_name: &str) -> QName {
    QName::with_namespace(XS_NAMESPACE, local_name)
}

const PRIMITIVES: &[&str] = &[
    "string",
    "boolean",
    "float",
    "double",
    "decimal",
    "duration",
    "dateTime",
    "time",
    "date",
    "gYearMonth",
    "gYear",
    "gMonthDay",
    "gDay",
    "gMonth",
    "hexBinary",
    "base64Binary",
    "anyURI",
    "QName",
    "NOTATION",
];

/// Ordinary (derived) built-ins: name, base type, binding
const DERIVED: &[(&str, &str, ValueBinding)] = &[
    ("normalizedString", "string", ValueBinding::String),
    ("token", "normalizedString", ValueBinding::String),
    ("language", "token", ValueBinding::String),
    ("NMTOKEN", "token", ValueBinding::String),
    ("Name", "token", ValueBinding::String),
    ("NCName", "Name", ValueBinding::String),
    ("ID", "NCName", ValueBinding::String),
    ("IDREF", "NCName", ValueBinding::String),
    ("ENTITY", "NCName", ValueBinding::String),
    ("integer", "decimal", ValueBinding::Integer),
    ("nonPositiveInteger", "integer", ValueBinding::Integer),
    ("negativeInteger", "nonPositiveInteger", ValueBinding::Integer),
    ("long", "integer", ValueBinding::Long),
    ("int", "long", ValueBinding::Int),
    ("short", "int", ValueBinding::Short),
    ("byte", "short", ValueBinding::Byte),
    ("nonNegativeInteger", "integer", ValueBinding::Integer),
    ("unsignedLong", "nonNegativeInteger", ValueBinding::Integer),
    ("unsignedInt", "unsignedLong", ValueBinding::Long),
    ("unsignedShort", "unsignedInt", ValueBinding::Int),
    ("unsignedByte", "unsignedShort", ValueBinding::Short),
    ("positiveInteger", "nonNegativeInteger", ValueBinding::Integer),
];

fn primitive_binding(name: &str) -> ValueBinding {
    match name {
        "string" => ValueBinding::String,
        "boolean" => ValueBinding::Boolean,
        "float" => ValueBinding::Float,
        "double" => ValueBinding::Double,
        "decimal" => ValueBinding::Decimal,
        "dateTime" => ValueBinding::DateTime,
        "time" => ValueBinding::Time,
        "date" => ValueBinding::Date,
        "hexBinary" | "base64Binary" => ValueBinding::Binary,
        "anyURI" => ValueBinding::Uri,
        "QName" => ValueBinding::QName,
        "duration" | "gYearMonth" | "gYear" | "gMonthDay" | "gDay" | "gMonth" | "NOTATION" => {
            ValueBinding::Any
        }
        _ => unreachable!("Tried to generate primitive type def for non-primitive {name}"),
    }
}

/// Returns `true` if `name` is one of the types registered by [`catalog`].
pub fn is_builtin_name(name: &QName) -> bool {
    if !name.is_in(XS_NAMESPACE) {
        return false;
    }
    let local = name.local_name.as_str();
    local == "anyType"
        || local == "anySimpleType"
        || PRIMITIVES.contains(&local)
        || DERIVED.iter().any(|(derived, _, _)| *derived == local)
}

/// The built-in types of the XML Schema namespace.
///
/// `xs:anyType` is the only root; every other built-in derives from it through
/// `xs:anySimpleType`.
pub fn catalog() -> NamespaceCatalog {
    let mut catalog = NamespaceCatalog::new(XS_NAMESPACE, XS_PREFIX);

    catalog.complex("anyType");
    catalog
        .simple("anySimpleType", ValueBinding::Any)
        .extends(XS_ANY_TYPE_NAME.clone());

    for name in PRIMITIVES {
        catalog
            .simple(name, primitive_binding(name))
            .extends(XS_ANY_SIMPLE_TYPE_NAME.clone());
    }
    for (name, base, binding) in DERIVED {
        catalog.simple(name, *binding).extends(xs(base));
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_is_recognised() {
        let catalog = catalog();
        for declaration in &catalog.types {
            assert!(is_builtin_name(&declaration.name), "{}", declaration.name);
        }
        assert!(!is_builtin_name(&xs("CI_Citation_Type")));
        assert!(!is_builtin_name(&QName::with_namespace("urn:other", "string")));
    }

    #[test]
    fn derived_bases_are_builtins() {
        for (_, base, _) in DERIVED {
            assert!(is_builtin_name(&xs(base)), "{base}");
        }
    }
}
