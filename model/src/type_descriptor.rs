use std::fmt;

use super::{
    components::{Component, ComponentTable, Named},
    xstypes::{QName, Sequence},
    PropertyDescriptor, Ref,
};

/// A named type: either a simple (scalar) type or a complex type with an ordered list of
/// properties. Each type has at most one supertype, so the supertype relation forms a forest.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    pub name: QName,
    pub supertype: Option<Ref<TypeDescriptor>>,
    pub abstract_: bool,
    /// Whether instances carry their own identity, as GML feature types do. None of the ISO
    /// catalogs declare such types, so this is `false` for all of them.
    pub identified: bool,
    pub kind: TypeKind,
    pub description: Option<String>,
}

#[derive(Clone, Debug)]
pub enum TypeKind {
    Simple(ValueBinding),
    Complex(Sequence<Ref<PropertyDescriptor>>),
}

/// The value domain a simple type is bound to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueBinding {
    Any,
    String,
    Boolean,
    Decimal,
    Integer,
    Long,
    Int,
    Short,
    Byte,
    Float,
    Double,
    Date,
    DateTime,
    Time,
    Uri,
    QName,
    Binary,
}

impl fmt::Display for ValueBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Any => "any",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::Long => "long",
            Self::Int => "int",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Float => "float",
            Self::Double => "double",
            Self::Date => "date",
            Self::DateTime => "dateTime",
            Self::Time => "time",
            Self::Uri => "uri",
            Self::QName => "qname",
            Self::Binary => "binary",
        })
    }
}

impl Component for TypeDescriptor {
    const DISPLAY_NAME: &'static str = "TypeDescriptor";
}

impl Named for TypeDescriptor {
    fn name(&self) -> &QName {
        &self.name
    }
}

impl TypeDescriptor {
    pub fn is_complex(&self) -> bool {
        matches!(self.kind, TypeKind::Complex(_))
    }

    pub fn is_simple(&self) -> bool {
        matches!(self.kind, TypeKind::Simple(_))
    }

    pub fn binding(&self) -> Option<ValueBinding> {
        match self.kind {
            TypeKind::Simple(binding) => Some(binding),
            TypeKind::Complex(_) => None,
        }
    }

    /// The properties declared by this type itself, in declaration order. Always empty for simple
    /// types.
    pub fn properties(&self) -> &[Ref<PropertyDescriptor>] {
        match &self.kind {
            TypeKind::Complex(properties) => properties,
            TypeKind::Simple(_) => &[],
        }
    }

    pub fn supertype<'a>(&self, components: &'a impl ComponentTable) -> Option<&'a TypeDescriptor> {
        self.supertype.map(|s| s.get(components))
    }

    /// Iterates over the supertype chain, nearest first.
    pub fn ancestors<'a, T: ComponentTable>(&self, components: &'a T) -> Ancestors<'a, T> {
        Ancestors::new(self.supertype, components)
    }

    /// `true` if `ancestor` appears in the supertype chain of this type.
    pub fn is_subtype_of(&self, ancestor: Ref<TypeDescriptor>, components: &impl ComponentTable) -> bool {
        self.ancestors(components).any(|a| a == ancestor)
    }

    /// All properties of this type including inherited ones, root type first.
    pub fn all_properties(&self, components: &impl ComponentTable) -> Vec<Ref<PropertyDescriptor>> {
        let mut chain: Vec<&TypeDescriptor> = self.ancestors(components).map(|a| a.get(components)).collect();
        chain.reverse();
        chain.push(self);
        chain
            .into_iter()
            .flat_map(|t| t.properties().iter().copied())
            .collect()
    }

    /// Finds an own or inherited property by local name. Own properties shadow inherited ones.
    pub fn property<'a>(
        &self,
        local_name: &str,
        components: &'a impl ComponentTable,
    ) -> Option<&'a PropertyDescriptor> {
        self.all_properties(components)
            .into_iter()
            .rev()
            .map(|p| p.get(components))
            .find(|p| p.name.local_name == local_name)
    }
}

/// Iterator over the ancestors of a type, following [`TypeDescriptor::supertype`] until a root
/// type is reached.
pub struct Ancestors<'a, T: ComponentTable> {
    current: Option<Ref<TypeDescriptor>>,
    components: &'a T,
}

impl<'a, T: ComponentTable> Ancestors<'a, T> {
    pub(crate) fn new(start: Option<Ref<TypeDescriptor>>, components: &'a T) -> Self {
        Self {
            current: start,
            components,
        }
    }
}

impl<'a, T: ComponentTable> Iterator for Ancestors<'a, T> {
    type Item = Ref<TypeDescriptor>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.get(self.components).supertype;
        Some(current)
    }
}
