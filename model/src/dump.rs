//! Plain-text listings of a [`SchemaSet`], used by the inspector and by tests comparing builds.

use std::fmt;

use super::components::RefNamed;
use super::property_descriptor::Cardinality;
use super::registry::SchemaSet;
use super::{PropertyDescriptor, Ref, TypeDescriptor, TypeKind};

/// Lists every type in name order: its supertype and, for complex types, each property with
/// value type and cardinality.
pub struct SchemaDump<'a> {
    set: &'a SchemaSet,
    namespace: Option<&'a str>,
    elements: bool,
}

impl<'a> SchemaDump<'a> {
    pub fn new(set: &'a SchemaSet) -> Self {
        Self {
            set,
            namespace: None,
            elements: false,
        }
    }

    /// Restricts the listing to one namespace.
    pub fn namespace(mut self, namespace: &'a str) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Also lists the global elements of each namespace.
    pub fn with_elements(mut self) -> Self {
        self.elements = true;
        self
    }
}

impl fmt::Display for SchemaDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.set;
        for registry in set.registries() {
            if self.namespace.is_some_and(|ns| ns != registry.namespace()) {
                continue;
            }
            for (_, ref_) in registry.iter() {
                write_type(f, ref_.get(set), set)?;
            }
            if !self.elements {
                continue;
            }
            for (_, ref_) in registry.elements() {
                let element = ref_.get(set);
                write!(f, "element {}: {}", element.name, element.type_definition.name(set))?;
                if let Some(head) = element.substitution_group {
                    write!(f, " substitutes {}", head.name(set))?;
                }
                if element.abstract_ {
                    f.write_str(" (abstract)")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn write_type(f: &mut fmt::Formatter<'_>, descriptor: &TypeDescriptor, set: &SchemaSet) -> fmt::Result {
    write!(f, "{}", descriptor.name)?;
    if descriptor.abstract_ {
        f.write_str(" (abstract)")?;
    }
    writeln!(f)?;
    match descriptor.supertype {
        Some(supertype) => writeln!(f, "    super: {}", supertype.name(set))?,
        None => writeln!(f, "    super: -")?,
    }
    match &descriptor.kind {
        TypeKind::Simple(binding) => writeln!(f, "    binding: {binding}")?,
        TypeKind::Complex(properties) => {
            for property in properties {
                write_property(f, property.get(set), set)?;
            }
        }
    }
    Ok(())
}

fn write_property(f: &mut fmt::Formatter<'_>, property: &PropertyDescriptor, set: &SchemaSet) -> fmt::Result {
    let marker = if property.attribute { "@" } else { "" };
    write!(
        f,
        "    {marker}{}: {} {}",
        property.name.local_name,
        property.value_type.name(set),
        Cardinality(property)
    )?;
    if property.nillable {
        f.write_str(" nillable")?;
    }
    writeln!(f)
}

/// Describes a single type: its ancestor chain, all properties including inherited ones and,
/// optionally, its direct subtypes.
pub struct TypeReport<'a> {
    set: &'a SchemaSet,
    type_: Ref<TypeDescriptor>,
    subtypes: bool,
}

impl<'a> TypeReport<'a> {
    pub fn new(set: &'a SchemaSet, type_: Ref<TypeDescriptor>) -> Self {
        Self {
            set,
            type_,
            subtypes: false,
        }
    }

    pub fn with_subtypes(mut self) -> Self {
        self.subtypes = true;
        self
    }
}

impl fmt::Display for TypeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.set;
        let descriptor = self.type_.get(set);
        write!(f, "{}", descriptor.name)?;
        if descriptor.abstract_ {
            f.write_str(" (abstract)")?;
        }
        writeln!(f)?;
        if let Some(description) = &descriptor.description {
            writeln!(f, "    {description}")?;
        }
        for ancestor in descriptor.ancestors(set) {
            writeln!(f, "  extends {}", ancestor.name(set))?;
        }
        if let Some(binding) = descriptor.binding() {
            writeln!(f, "  binding: {binding}")?;
        }
        for property in descriptor.all_properties(set) {
            write_property(f, property.get(set), set)?;
        }
        if self.subtypes {
            for subtype in set.subtypes(&descriptor.name) {
                writeln!(f, "  subtype {}", subtype.name)?;
            }
        }
        Ok(())
    }
}
