//! Declarations: the fixed, hand-written description of a namespace's types and elements.
//!
//! References between declarations are plain [qualified names](QName). They are only resolved
//! when the declarations of all namespaces have been collected, so a declaration may refer to a
//! type that is declared later, or in another namespace.

use super::{property_descriptor::MaxOccurs, xstypes::QName, ValueBinding};

/// Occurrence bounds of a declared property.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Occurs {
    pub min: u64,
    pub max: MaxOccurs,
}

impl Occurs {
    /// `minOccurs="0"`
    pub const OPTIONAL: Self = Self::new(0, MaxOccurs::Count(1));
    /// The XSD default, `1..1`
    pub const REQUIRED: Self = Self::new(1, MaxOccurs::Count(1));
    /// `minOccurs="0" maxOccurs="unbounded"`
    pub const ANY: Self = Self::new(0, MaxOccurs::Unbounded);
    /// `maxOccurs="unbounded"`
    pub const AT_LEAST_ONE: Self = Self::new(1, MaxOccurs::Unbounded);

    pub const fn new(min: u64, max: MaxOccurs) -> Self {
        Self { min, max }
    }
}

/// All type and element declarations of one XML namespace.
#[derive(Clone, Debug)]
pub struct NamespaceCatalog {
    pub namespace: String,
    /// The conventional prefix, e.g. `gmd`.
    pub prefix: String,
    /// Namespaces whose components this catalog may reference.
    pub dependencies: Vec<String>,
    pub types: Vec<TypeDeclaration>,
    pub elements: Vec<ElementDeclaration>,
}

impl NamespaceCatalog {
    pub fn new(namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            prefix: prefix.into(),
            dependencies: Vec::new(),
            types: Vec::new(),
            elements: Vec::new(),
        }
    }

    pub fn depends_on(mut self, namespace: impl Into<String>) -> Self {
        self.dependencies.push(namespace.into());
        self
    }

    /// The qualified name of `local_name` in this catalog's namespace.
    pub fn name(&self, local_name: &str) -> QName {
        QName::with_namespace(self.namespace.as_str(), local_name)
    }

    /// Declares a complex type without supertype and properties.
    pub fn complex(&mut self, local_name: &str) -> &mut TypeDeclaration {
        self.push_type(local_name, DeclaredKind::Complex)
    }

    /// Declares a simple type bound to `binding`.
    pub fn simple(&mut self, local_name: &str, binding: ValueBinding) -> &mut TypeDeclaration {
        self.push_type(local_name, DeclaredKind::Simple(binding))
    }

    /// Declares a global element of type `type_name`.
    pub fn element(&mut self, local_name: &str, type_name: QName) -> &mut ElementDeclaration {
        let name = self.name(local_name);
        self.elements.push(ElementDeclaration {
            name,
            type_name,
            abstract_: false,
            substitution_group: None,
        });
        self.elements.last_mut().expect("element was just pushed")
    }

    fn push_type(&mut self, local_name: &str, kind: DeclaredKind) -> &mut TypeDeclaration {
        let name = self.name(local_name);
        self.types.push(TypeDeclaration {
            name,
            abstract_: false,
            kind,
            base: None,
            properties: Vec::new(),
            description: None,
        });
        self.types.last_mut().expect("type was just pushed")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeclaredKind {
    Simple(ValueBinding),
    Complex,
}

/// The "shell" of a type: its own flags plus unresolved names of the supertype and of each
/// property's value type.
#[derive(Clone, Debug)]
pub struct TypeDeclaration {
    pub name: QName,
    pub abstract_: bool,
    pub kind: DeclaredKind,
    pub base: Option<QName>,
    pub properties: Vec<PropertyDeclaration>,
    pub description: Option<String>,
}

impl TypeDeclaration {
    pub fn extends(&mut self, base: QName) -> &mut Self {
        self.base = Some(base);
        self
    }

    pub fn set_abstract(&mut self) -> &mut Self {
        self.abstract_ = true;
        self
    }

    pub fn describe(&mut self, documentation: &str) -> &mut Self {
        self.description = Some(documentation.into());
        self
    }

    /// Adds a local element in the type's own namespace.
    pub fn element(&mut self, local_name: &str, value_type: QName, occurs: Occurs) -> &mut Self {
        let name = QName::with_optional_namespace(self.name.namespace(), local_name);
        self.element_ref(name, value_type, occurs)
    }

    /// Adds an element property with an explicit (possibly foreign) name.
    pub fn element_ref(&mut self, name: QName, value_type: QName, occurs: Occurs) -> &mut Self {
        self.push_property(name, value_type, occurs, false)
    }

    /// Adds an unqualified attribute.
    pub fn attribute(&mut self, local_name: &str, value_type: QName, required: bool) -> &mut Self {
        self.attribute_ref(QName::unqualified(local_name), value_type, required)
    }

    /// Adds an attribute with an explicit (possibly qualified) name.
    pub fn attribute_ref(&mut self, name: QName, value_type: QName, required: bool) -> &mut Self {
        let occurs = if required {
            Occurs::REQUIRED
        } else {
            Occurs::OPTIONAL
        };
        self.push_property(name, value_type, occurs, true)
    }

    /// Marks the most recently added property as nillable.
    pub fn nillable(&mut self) -> &mut Self {
        if let Some(property) = self.properties.last_mut() {
            property.nillable = true;
        }
        self
    }

    fn push_property(
        &mut self,
        name: QName,
        value_type: QName,
        occurs: Occurs,
        attribute: bool,
    ) -> &mut Self {
        self.properties.push(PropertyDeclaration {
            name,
            value_type,
            occurs,
            attribute,
            nillable: false,
        });
        self
    }
}

#[derive(Clone, Debug)]
pub struct PropertyDeclaration {
    pub name: QName,
    pub value_type: QName,
    pub occurs: Occurs,
    pub attribute: bool,
    pub nillable: bool,
}

#[derive(Clone, Debug)]
pub struct ElementDeclaration {
    pub name: QName,
    pub type_name: QName,
    pub abstract_: bool,
    pub substitution_group: Option<QName>,
}

impl ElementDeclaration {
    pub fn set_abstract(&mut self) -> &mut Self {
        self.abstract_ = true;
        self
    }

    pub fn substitutes(&mut self, head: QName) -> &mut Self {
        self.substitution_group = Some(head);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_elements_take_the_owner_namespace() {
        let mut catalog = NamespaceCatalog::new("urn:a", "a");
        let xs_string = QName::with_namespace("urn:xs", "string");
        catalog
            .complex("T")
            .element("p", xs_string.clone(), Occurs::ANY)
            .attribute("id", xs_string, true);
        let t = &catalog.types[0];
        assert_eq!(t.properties[0].name, QName::with_namespace("urn:a", "p"));
        assert_eq!(t.properties[0].occurs, Occurs::ANY);
        assert!(!t.properties[0].attribute);
        assert_eq!(t.properties[1].name, QName::unqualified("id"));
        assert_eq!(t.properties[1].occurs, Occurs::REQUIRED);
        assert!(t.properties[1].attribute);
    }

    #[test]
    fn nillable_marks_last_property() {
        let mut catalog = NamespaceCatalog::new("urn:a", "a");
        let any = QName::with_namespace("urn:xs", "anyType");
        catalog
            .complex("T")
            .element("p", any.clone(), Occurs::OPTIONAL)
            .element("q", any, Occurs::OPTIONAL)
            .nillable();
        let props = &catalog.types[0].properties;
        assert!(!props[0].nillable);
        assert!(props[1].nillable);
    }
}
