use std::collections::BTreeMap;

use super::components::{CatalogTable, Component, ComponentTable, ComponentTraits, HasArenaContainer};
use super::error::QNameParseError;
use super::xstypes::QName;
use super::{ElementDescriptor, Ref, TypeDescriptor};

/// The types and elements of exactly one XML namespace, keyed by local name.
///
/// A registry only holds references; the descriptors themselves live in the owning
/// [`SchemaSet`].
#[derive(Debug)]
pub struct SchemaRegistry {
    namespace: String,
    prefix: String,
    dependencies: Vec<String>,
    types: BTreeMap<String, Ref<TypeDescriptor>>,
    elements: BTreeMap<String, Ref<ElementDescriptor>>,
}

impl SchemaRegistry {
    pub(crate) fn new(namespace: String, prefix: String, dependencies: Vec<String>) -> Self {
        Self {
            namespace,
            prefix,
            dependencies,
            types: BTreeMap::new(),
            elements: BTreeMap::new(),
        }
    }

    pub(crate) fn insert_type(&mut self, local_name: String, ref_: Ref<TypeDescriptor>) {
        self.types.insert(local_name, ref_);
    }

    pub(crate) fn insert_element(&mut self, local_name: String, ref_: Ref<ElementDescriptor>) {
        self.elements.insert(local_name, ref_);
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// Looks up a type by qualified name. Names of other namespaces are never found.
    pub fn lookup(&self, name: &QName) -> Option<Ref<TypeDescriptor>> {
        if !name.is_in(&self.namespace) {
            return None;
        }
        self.lookup_local(&name.local_name)
    }

    pub fn lookup_local(&self, local_name: &str) -> Option<Ref<TypeDescriptor>> {
        self.types.get(local_name).copied()
    }

    pub fn lookup_element(&self, name: &QName) -> Option<Ref<ElementDescriptor>> {
        if !name.is_in(&self.namespace) {
            return None;
        }
        self.elements.get(&name.local_name).copied()
    }

    /// All types, sorted by local name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Ref<TypeDescriptor>)> + '_ {
        self.types.iter().map(|(name, ref_)| (name.as_str(), *ref_))
    }

    /// All elements, sorted by local name.
    pub fn elements(&self) -> impl Iterator<Item = (&str, Ref<ElementDescriptor>)> + '_ {
        self.elements.iter().map(|(name, ref_)| (name.as_str(), *ref_))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// The result of one build: every descriptor of every catalog, plus one [`SchemaRegistry`] per
/// namespace.
///
/// All references are resolved, and nothing can be changed after the build. The set can be
/// shared freely between threads.
#[derive(Debug)]
pub struct SchemaSet {
    table: CatalogTable,
    registries: BTreeMap<String, SchemaRegistry>,
}

impl ComponentTable for SchemaSet {
    fn get<R>(&self, ref_: Ref<R>) -> &R
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        self.table.get(ref_)
    }
}

impl SchemaSet {
    pub(crate) fn new(table: CatalogTable, registries: BTreeMap<String, SchemaRegistry>) -> Self {
        Self { table, registries }
    }

    pub fn table(&self) -> &CatalogTable {
        &self.table
    }

    pub fn registry(&self, namespace: &str) -> Option<&SchemaRegistry> {
        self.registries.get(namespace)
    }

    /// All registries, sorted by namespace URI.
    pub fn registries(&self) -> impl Iterator<Item = &SchemaRegistry> {
        self.registries.values()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.registries.keys().map(String::as_str)
    }

    pub fn dependencies(&self, namespace: &str) -> Option<&[String]> {
        self.registry(namespace).map(SchemaRegistry::dependencies)
    }

    pub fn prefix(&self, namespace: &str) -> Option<&str> {
        self.registry(namespace).map(SchemaRegistry::prefix)
    }

    /// Maps a conventional prefix back to its namespace URI.
    pub fn namespace_for_prefix(&self, prefix: &str) -> Option<&str> {
        self.registries
            .values()
            .find(|registry| registry.prefix == prefix)
            .map(SchemaRegistry::namespace)
    }

    /// Parses `source` as a [`QName`], resolving prefixes against the registries of this set.
    pub fn parse_name(&self, source: &str) -> Result<QName, QNameParseError> {
        QName::parse(source, |prefix| self.namespace_for_prefix(prefix))
    }

    pub fn lookup_ref(&self, name: &QName) -> Option<Ref<TypeDescriptor>> {
        self.registry(name.namespace()?)?.lookup(name)
    }

    pub fn lookup(&self, name: &QName) -> Option<&TypeDescriptor> {
        self.lookup_ref(name).map(|ref_| ref_.get(self))
    }

    pub fn lookup_element(&self, name: &QName) -> Option<&ElementDescriptor> {
        self.registry(name.namespace()?)?
            .lookup_element(name)
            .map(|ref_| ref_.get(self))
    }

    /// All types of all namespaces, sorted by qualified name.
    pub fn all(&self) -> impl Iterator<Item = (&QName, &TypeDescriptor)> {
        self.registries
            .values()
            .flat_map(|registry| registry.iter())
            .map(|(_, ref_)| {
                let descriptor = ref_.get(self);
                (&descriptor.name, descriptor)
            })
    }

    /// The types whose direct supertype is `name`, sorted by qualified name.
    pub fn subtypes(&self, name: &QName) -> Vec<&TypeDescriptor> {
        let Some(parent) = self.lookup_ref(name) else {
            return Vec::new();
        };
        self.all()
            .map(|(_, descriptor)| descriptor)
            .filter(|descriptor| descriptor.supertype == Some(parent))
            .collect()
    }
}
