use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{debug, info};

use super::builtins::XS_NAMESPACE;
use super::components::{
    Component, ComponentResolver, ComponentTable, ComponentTraits, ConstructionComponentTable,
    HasArenaContainer, Lookup, LookupTables,
};
use super::declaration::{DeclaredKind, ElementDeclaration, NamespaceCatalog, TypeDeclaration};
use super::error::{BuildError, ReferenceRole};
use super::registry::{SchemaRegistry, SchemaSet};
use super::xstypes::QName;
use super::{
    BuiltinOverwriteAction, ElementDescriptor, PropertyDescriptor, Ref, TypeDescriptor, TypeKind,
};

struct NamespaceEntry {
    prefix: String,
    dependencies: Vec<String>,
    builtin: bool,
}

/// State of one build of a [`SchemaSet`].
///
/// Every catalog is declared first, which reserves a slot for each type and element and makes
/// its name resolvable. Only [`finish`](Self::finish) resolves the declared names, so the order
/// in which catalogs are declared does not matter.
pub(crate) struct BuildContext {
    components: ConstructionComponentTable,
    resolver: ComponentResolver,
    namespaces: BTreeMap<String, NamespaceEntry>,
    pending_types: Vec<(Ref<TypeDescriptor>, TypeDeclaration)>,
    pending_elements: Vec<(Ref<ElementDescriptor>, ElementDeclaration)>,
}

impl BuildContext {
    pub(crate) fn new(builtin_overwrite: BuiltinOverwriteAction) -> Self {
        Self {
            components: ConstructionComponentTable::new(),
            resolver: ComponentResolver::new(builtin_overwrite),
            namespaces: BTreeMap::new(),
            pending_types: Vec::new(),
            pending_elements: Vec::new(),
        }
    }

    /// Declares the XML Schema built-ins. A catalog for the same namespace declared later is
    /// merged into them instead of being rejected as a duplicate namespace.
    pub(crate) fn declare_builtins(&mut self, catalog: &NamespaceCatalog) -> Result<(), BuildError> {
        self.declare_namespace(catalog, true)?;
        self.declare_components(catalog)
    }

    pub(crate) fn declare(&mut self, catalog: &NamespaceCatalog) -> Result<(), BuildError> {
        self.declare_namespace(catalog, false)?;
        self.declare_components(catalog)
    }

    fn declare_namespace(&mut self, catalog: &NamespaceCatalog, builtin: bool) -> Result<(), BuildError> {
        match self.namespaces.get_mut(&catalog.namespace) {
            Some(entry) if entry.builtin && !builtin => {
                entry.dependencies.extend(catalog.dependencies.iter().cloned());
                entry.builtin = false;
            }
            Some(_) => return Err(BuildError::DuplicateNamespace(catalog.namespace.clone())),
            None => {
                self.namespaces.insert(
                    catalog.namespace.clone(),
                    NamespaceEntry {
                        prefix: catalog.prefix.clone(),
                        dependencies: catalog.dependencies.clone(),
                        builtin,
                    },
                );
            }
        }
        Ok(())
    }

    fn declare_components(&mut self, catalog: &NamespaceCatalog) -> Result<(), BuildError> {
        let names = catalog.types.iter().map(|d| &d.name);
        for name in names.chain(catalog.elements.iter().map(|d| &d.name)) {
            if !name.is_in(&catalog.namespace) {
                return Err(BuildError::ForeignDeclaration {
                    namespace: catalog.namespace.clone(),
                    name: name.clone(),
                });
            }
        }
        for declaration in &catalog.types {
            let (ref_, replaced) = self.declare_name(declaration.name.clone())?;
            enqueue(&mut self.pending_types, ref_, declaration.clone(), replaced);
        }
        for declaration in &catalog.elements {
            let (ref_, replaced) = self.declare_name(declaration.name.clone())?;
            enqueue(&mut self.pending_elements, ref_, declaration.clone(), replaced);
        }
        debug!(
            namespace = %catalog.namespace,
            types = catalog.types.len(),
            elements = catalog.elements.len(),
            "declared namespace"
        );
        Ok(())
    }

    /// Reserves a slot for `name`, or hands out the existing slot if a built-in is redeclared.
    /// The flag is `true` in the latter case.
    fn declare_name<R>(&mut self, name: QName) -> Result<(Ref<R>, bool), BuildError>
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
        LookupTables: Lookup<Ref<R>>,
    {
        let ref_ = match self.resolver.resolve::<Ref<R>>(&name) {
            Some(existing) => existing,
            None => self.components.reserve(),
        };
        let replaced = self.resolver.register_with_name(name, ref_)?.is_some();
        Ok((ref_, replaced))
    }

    /// Resolves every declared reference and freezes the result into a [`SchemaSet`].
    pub(crate) fn finish(mut self) -> Result<SchemaSet, BuildError> {
        self.check_dependencies()?;
        let visible = self.visible_namespaces();

        for (ref_, declaration) in std::mem::take(&mut self.pending_types) {
            let value = self.resolve_type(declaration, &visible)?;
            self.components.insert(ref_, value);
        }
        for (ref_, declaration) in std::mem::take(&mut self.pending_elements) {
            let value = self.resolve_element(declaration, &visible)?;
            self.components.insert(ref_, value);
        }

        let table = self.components.convert_to_catalog_table()?;
        check_acyclic(&table, table.type_refs())?;

        let mut registries: BTreeMap<String, SchemaRegistry> = self
            .namespaces
            .into_iter()
            .map(|(namespace, entry)| {
                let registry = SchemaRegistry::new(namespace.clone(), entry.prefix, entry.dependencies);
                (namespace, registry)
            })
            .collect();
        for ref_ in table.type_refs() {
            let name = &ref_.get(&table).name;
            registry_for(&mut registries, name)?.insert_type(name.local_name.clone(), ref_);
        }
        for ref_ in table.element_refs() {
            let name = &ref_.get(&table).name;
            registry_for(&mut registries, name)?.insert_element(name.local_name.clone(), ref_);
        }

        info!(
            namespaces = registries.len(),
            types = table.type_count(),
            properties = table.property_count(),
            elements = table.element_count(),
            "schema set built"
        );
        Ok(SchemaSet::new(table, registries))
    }

    fn check_dependencies(&self) -> Result<(), BuildError> {
        for (namespace, entry) in &self.namespaces {
            if let Some(missing) = entry
                .dependencies
                .iter()
                .find(|dependency| !self.namespaces.contains_key(dependency.as_str()))
            {
                return Err(BuildError::MissingDependency {
                    namespace: namespace.clone(),
                    dependency: missing.clone(),
                });
            }
        }
        Ok(())
    }

    /// For each namespace: itself, `xs`, and everything reachable through its dependencies.
    fn visible_namespaces(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.namespaces
            .keys()
            .map(|namespace| {
                let mut visible = BTreeSet::from([namespace.clone(), XS_NAMESPACE.to_string()]);
                let mut queue = vec![namespace.as_str()];
                while let Some(current) = queue.pop() {
                    let Some(entry) = self.namespaces.get(current) else {
                        continue;
                    };
                    for dependency in &entry.dependencies {
                        if visible.insert(dependency.clone()) {
                            queue.push(dependency);
                        }
                    }
                }
                (namespace.clone(), visible)
            })
            .collect()
    }

    fn lookup<R>(
        &self,
        referrer: &QName,
        role: ReferenceRole,
        target: &QName,
        visible: &BTreeMap<String, BTreeSet<String>>,
    ) -> Result<Ref<R>, BuildError>
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
        LookupTables: Lookup<Ref<R>>,
    {
        if let (Some(own), Some(target_ns)) = (referrer.namespace(), target.namespace()) {
            let allowed = visible.get(own).is_some_and(|v| v.contains(target_ns));
            if !allowed {
                return Err(BuildError::UndeclaredDependency {
                    referrer: referrer.clone(),
                    target: target.clone(),
                });
            }
        }
        self.resolver
            .resolve(target)
            .ok_or_else(|| BuildError::UnresolvedReference {
                referrer: referrer.clone(),
                role,
                target: target.clone(),
            })
    }

    fn resolve_type(
        &mut self,
        declaration: TypeDeclaration,
        visible: &BTreeMap<String, BTreeSet<String>>,
    ) -> Result<TypeDescriptor, BuildError> {
        let name = declaration.name;
        let supertype = declaration
            .base
            .as_ref()
            .map(|base| self.lookup(&name, ReferenceRole::Supertype, base, visible))
            .transpose()?;

        let kind = match declaration.kind {
            DeclaredKind::Simple(_) if !declaration.properties.is_empty() => {
                return Err(BuildError::PropertiesOnSimpleType(name));
            }
            DeclaredKind::Simple(binding) => TypeKind::Simple(binding),
            DeclaredKind::Complex => {
                let mut properties = Vec::with_capacity(declaration.properties.len());
                for property in declaration.properties {
                    if !property.occurs.max.admits(property.occurs.min) {
                        return Err(BuildError::InvalidOccurrence {
                            owner: name,
                            property: property.name,
                            min: property.occurs.min,
                            max: property.occurs.max,
                        });
                    }
                    let value_type =
                        self.lookup(&name, ReferenceRole::PropertyType, &property.value_type, visible)?;
                    properties.push(self.components.create(PropertyDescriptor {
                        name: property.name,
                        value_type,
                        min_occurs: property.occurs.min,
                        max_occurs: property.occurs.max,
                        attribute: property.attribute,
                        nillable: property.nillable,
                    }));
                }
                TypeKind::Complex(properties)
            }
        };

        Ok(TypeDescriptor {
            name,
            supertype,
            abstract_: declaration.abstract_,
            identified: false,
            kind,
            description: declaration.description,
        })
    }

    fn resolve_element(
        &self,
        declaration: ElementDeclaration,
        visible: &BTreeMap<String, BTreeSet<String>>,
    ) -> Result<ElementDescriptor, BuildError> {
        let name = declaration.name;
        let type_definition =
            self.lookup(&name, ReferenceRole::ElementType, &declaration.type_name, visible)?;
        let substitution_group = declaration
            .substitution_group
            .as_ref()
            .map(|head| self.lookup(&name, ReferenceRole::SubstitutionGroup, head, visible))
            .transpose()?;
        Ok(ElementDescriptor {
            name,
            type_definition,
            abstract_: declaration.abstract_,
            substitution_group,
        })
    }
}

/// A redeclared built-in keeps its slot; the later declaration replaces the pending one.
fn registry_for<'a>(
    registries: &'a mut BTreeMap<String, SchemaRegistry>,
    name: &QName,
) -> Result<&'a mut SchemaRegistry, BuildError> {
    let namespace = name.namespace().unwrap_or_default();
    registries
        .get_mut(namespace)
        .ok_or_else(|| BuildError::ForeignDeclaration {
            namespace: namespace.to_string(),
            name: name.clone(),
        })
}

fn enqueue<R: PartialEq, D>(pending: &mut Vec<(R, D)>, ref_: R, declaration: D, replaced: bool) {
    if replaced {
        if let Some(slot) = pending.iter_mut().find(|(r, _)| *r == ref_) {
            slot.1 = declaration;
            return;
        }
    }
    pending.push((ref_, declaration));
}

fn check_acyclic(
    table: &impl ComponentTable,
    refs: impl Iterator<Item = Ref<TypeDescriptor>>,
) -> Result<(), BuildError> {
    for start in refs {
        let mut seen = HashSet::from([start]);
        let mut current = start.get(table).supertype;
        while let Some(ref_) = current {
            if !seen.insert(ref_) {
                return Err(BuildError::CyclicSupertype(start.get(table).name.clone()));
            }
            current = ref_.get(table).supertype;
        }
    }
    Ok(())
}
