pub mod builtins;
pub mod components;
pub mod declaration;
pub mod dump;
pub mod element_descriptor;
pub mod error;
pub mod property_descriptor;
pub mod registry;
pub mod type_descriptor;
pub mod xstypes;

mod context;

pub use components::{ComponentTable, Named, Ref, RefNamed};
pub use declaration::{NamespaceCatalog, Occurs, TypeDeclaration};
pub use dump::{SchemaDump, TypeReport};
pub use element_descriptor::ElementDescriptor;
pub use error::{BuildError, QNameParseError, ReferenceRole};
pub use property_descriptor::{Cardinality, MaxOccurs, PropertyDescriptor};
pub use registry::{SchemaRegistry, SchemaSet};
pub use type_descriptor::{Ancestors, TypeDescriptor, TypeKind, ValueBinding};
pub use xstypes::QName;

use context::BuildContext;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuiltinOverwriteAction {
    Deny,
    Warn,
    Allow,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegisterBuiltins {
    Yes,
    No,
}

/// Builds all `catalogs` into one [`SchemaSet`].
///
/// Every type and element of every catalog is declared before any reference is resolved, so
/// catalogs may reference each other in any order. The build either resolves everything or
/// fails with the first error found.
pub fn build_schema_set(
    catalogs: &[NamespaceCatalog],
    builtin_overwrite: BuiltinOverwriteAction,
    register_builtins: RegisterBuiltins,
) -> Result<SchemaSet, BuildError> {
    let mut context = BuildContext::new(builtin_overwrite);
    if register_builtins == RegisterBuiltins::Yes {
        context.declare_builtins(&builtins::catalog())?;
    }
    for catalog in catalogs {
        context.declare(catalog)?;
    }
    context.finish()
}

#[cfg(test)]
mod tests {
    use super::builtins::{xs, XS_NAMESPACE};
    use super::*;

    const NS: &str = "urn:test";

    fn build(catalogs: &[NamespaceCatalog]) -> Result<SchemaSet, BuildError> {
        build_schema_set(catalogs, BuiltinOverwriteAction::Deny, RegisterBuiltins::Yes)
    }

    fn sample_catalog() -> NamespaceCatalog {
        let mut catalog = NamespaceCatalog::new(NS, "t");
        let name = |local: &str| QName::with_namespace(NS, local);
        // Subtypes come before their supertypes, like the alphabetical catalogs.
        catalog
            .complex("B_Type")
            .extends(name("A_Type"))
            .element("p", name("X_Type"), Occurs::ANY);
        catalog.complex("A_Type").set_abstract().extends(name("Root_Type"));
        catalog.complex("Root_Type").extends(xs("anyType"));
        catalog.simple("X_Type", ValueBinding::String).extends(xs("string"));
        catalog.element("B", name("B_Type"));
        catalog
    }

    #[test]
    fn properties_and_supertypes_resolve() {
        let set = build(&[sample_catalog()]).unwrap();
        let a = set.lookup(&QName::with_namespace(NS, "A_Type")).unwrap();
        assert!(a.abstract_);
        assert!(a.is_complex());
        assert_eq!(a.supertype(&set).unwrap().name.local_name, "Root_Type");

        let b = set.lookup(&QName::with_namespace(NS, "B_Type")).unwrap();
        assert_eq!(b.properties().len(), 1);
        let p = b.properties()[0].get(&set);
        assert_eq!(p.name.local_name, "p");
        assert_eq!(p.value_type.name(&set).local_name, "X_Type");
        assert_eq!(p.min_occurs, 0);
        assert_eq!(p.max_occurs, MaxOccurs::Unbounded);
        assert!(!p.attribute);
    }

    #[test]
    fn lookup_returns_registered_descriptor() {
        let set = build(&[sample_catalog()]).unwrap();
        for (name, descriptor) in set.all() {
            assert_eq!(set.lookup(name).unwrap().name, descriptor.name);
        }
        assert!(set.lookup(&QName::with_namespace(NS, "Missing_Type")).is_none());
        assert!(set.lookup(&QName::unqualified("A_Type")).is_none());

        let element = set.lookup_element(&QName::with_namespace(NS, "B")).unwrap();
        assert_eq!(element.type_definition.name(&set).local_name, "B_Type");
    }

    #[test]
    fn all_is_sorted_by_name() {
        let set = build(&[sample_catalog()]).unwrap();
        let names: Vec<_> = set.all().map(|(name, _)| name.clone()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert!(names.contains(&xs("anyType")));
    }

    #[test]
    fn ancestors_and_inherited_properties() {
        let mut catalog = sample_catalog();
        catalog
            .complex("C_Type")
            .extends(QName::with_namespace(NS, "B_Type"))
            .attribute("id", xs("ID"), true);
        let set = build(&[catalog]).unwrap();

        let c = set.lookup(&QName::with_namespace(NS, "C_Type")).unwrap();
        let chain: Vec<_> = c
            .ancestors(&set)
            .map(|a| a.name(&set).local_name.clone())
            .collect();
        assert_eq!(chain, ["B_Type", "A_Type", "Root_Type", "anyType"]);

        let properties: Vec<_> = c
            .all_properties(&set)
            .into_iter()
            .map(|p| p.get(&set).name.local_name.clone())
            .collect();
        assert_eq!(properties, ["p", "id"]);
        assert!(c.property("id", &set).unwrap().attribute);

        let a = set.lookup_ref(&QName::with_namespace(NS, "A_Type")).unwrap();
        assert!(c.is_subtype_of(a, &set));

        let subtypes = set.subtypes(&QName::with_namespace(NS, "B_Type"));
        assert_eq!(subtypes.len(), 1);
        assert_eq!(subtypes[0].name.local_name, "C_Type");
    }

    #[test]
    fn unresolved_reference_aborts_build() {
        let mut catalog = NamespaceCatalog::new(NS, "t");
        catalog
            .complex("A_Type")
            .element("p", QName::with_namespace(NS, "Nowhere_Type"), Occurs::OPTIONAL);
        let err = build(&[catalog]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnresolvedReference { role: ReferenceRole::PropertyType, ref target, .. }
                if target.local_name == "Nowhere_Type"
        ));

        let mut catalog = NamespaceCatalog::new(NS, "t");
        catalog.complex("A_Type").extends(QName::with_namespace(NS, "Base_Type"));
        let err = build(&[catalog]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::UnresolvedReference { role: ReferenceRole::Supertype, .. }
        ));
    }

    #[test]
    fn cyclic_supertypes_are_rejected() {
        let mut catalog = NamespaceCatalog::new(NS, "t");
        catalog.complex("A_Type").extends(QName::with_namespace(NS, "B_Type"));
        catalog.complex("B_Type").extends(QName::with_namespace(NS, "A_Type"));
        assert!(matches!(build(&[catalog]), Err(BuildError::CyclicSupertype(_))));
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut catalog = NamespaceCatalog::new(NS, "t");
        catalog.complex("A_Type");
        catalog.complex("A_Type");
        assert!(matches!(build(&[catalog]), Err(BuildError::DuplicateType(_))));

        let first = NamespaceCatalog::new(NS, "t");
        let second = NamespaceCatalog::new(NS, "u");
        assert!(matches!(
            build(&[first, second]),
            Err(BuildError::DuplicateNamespace(ns)) if ns == NS
        ));
    }

    #[test]
    fn builtin_overwrite() {
        let mut catalog = NamespaceCatalog::new(XS_NAMESPACE, "xs");
        catalog
            .simple("string", ValueBinding::Any)
            .extends(xs("anySimpleType"));
        let catalogs = [catalog];

        let err = build(&catalogs).unwrap_err();
        assert!(matches!(err, BuildError::BuiltinOverwrite(name) if name == xs("string")));

        let set = build_schema_set(&catalogs, BuiltinOverwriteAction::Allow, RegisterBuiltins::Yes)
            .unwrap();
        assert_eq!(set.lookup(&xs("string")).unwrap().binding(), Some(ValueBinding::Any));
        assert_eq!(set.registry(XS_NAMESPACE).unwrap().len(), builtins::catalog().types.len());

        let set = build_schema_set(&catalogs, BuiltinOverwriteAction::Warn, RegisterBuiltins::Yes)
            .unwrap();
        assert_eq!(set.lookup(&xs("string")).unwrap().binding(), Some(ValueBinding::Any));
        assert_eq!(set.registry(XS_NAMESPACE).unwrap().len(), builtins::catalog().types.len());
    }

    #[test]
    fn declarations_must_stay_in_their_namespace() {
        let mut catalog = sample_catalog();
        catalog.complex("Stray_Type").name = QName::with_namespace("urn:elsewhere", "Stray_Type");
        let err = build(&[catalog]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::ForeignDeclaration { ref namespace, ref name }
                if namespace == NS && name.local_name == "Stray_Type"
        ));

        let mut catalog = sample_catalog();
        catalog.element("stray", xs("string")).name = QName::unqualified("stray");
        let err = build(&[catalog]).unwrap_err();
        assert!(matches!(err, BuildError::ForeignDeclaration { ref name, .. } if name.namespace().is_none()));
    }

    #[test]
    fn builtins_can_be_disabled() {
        let err = build_schema_set(&[sample_catalog()], BuiltinOverwriteAction::Deny, RegisterBuiltins::No)
            .unwrap_err();
        assert!(matches!(err, BuildError::UnresolvedReference { ref target, .. } if target.is_in(XS_NAMESPACE)));
    }

    #[test]
    fn dependencies_are_checked() {
        let other = "urn:other";
        let mut catalog = NamespaceCatalog::new(NS, "t");
        catalog
            .complex("A_Type")
            .element("p", QName::with_namespace(other, "O_Type"), Occurs::REQUIRED);
        let mut upstream = NamespaceCatalog::new(other, "o");
        upstream.complex("O_Type");

        let err = build(&[catalog.clone(), upstream.clone()]).unwrap_err();
        assert!(matches!(err, BuildError::UndeclaredDependency { .. }));

        let catalog = catalog.depends_on(other);
        let err = build(&[catalog.clone()]).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MissingDependency { ref dependency, .. } if dependency == other
        ));

        let set = build(&[catalog, upstream]).unwrap();
        assert_eq!(set.dependencies(NS).unwrap(), [other.to_string()]);
        assert_eq!(set.namespace_for_prefix("o"), Some(other));
    }

    #[test]
    fn dependencies_are_transitive() {
        let mut top = NamespaceCatalog::new("urn:top", "top").depends_on("urn:mid");
        top.complex("T_Type")
            .element("b", QName::with_namespace("urn:bottom", "B_Type"), Occurs::REQUIRED);
        let mid = NamespaceCatalog::new("urn:mid", "mid").depends_on("urn:bottom");
        let mut bottom = NamespaceCatalog::new("urn:bottom", "bottom");
        bottom.complex("B_Type");
        assert!(build(&[top, mid, bottom]).is_ok());
    }

    #[test]
    fn occurrence_and_kind_are_validated() {
        let mut catalog = NamespaceCatalog::new(NS, "t");
        catalog
            .complex("A_Type")
            .element("p", xs("string"), Occurs::new(3, MaxOccurs::Count(2)));
        assert!(matches!(build(&[catalog]), Err(BuildError::InvalidOccurrence { min: 3, .. })));

        let mut catalog = NamespaceCatalog::new(NS, "t");
        catalog
            .simple("S_Type", ValueBinding::String)
            .element("p", xs("string"), Occurs::REQUIRED);
        assert!(matches!(build(&[catalog]), Err(BuildError::PropertiesOnSimpleType(_))));
    }

    #[test]
    fn builds_are_repeatable_and_order_independent() {
        let mut upstream = NamespaceCatalog::new("urn:up", "up");
        upstream.complex("U_Type").extends(xs("anyType"));
        let mut catalog = sample_catalog().depends_on("urn:up");
        catalog
            .complex("D_Type")
            .extends(QName::with_namespace("urn:up", "U_Type"));

        let first = build(&[catalog.clone(), upstream.clone()]).unwrap();
        let second = build(&[upstream, catalog]).unwrap();
        let dump = SchemaDump::new(&first).with_elements().to_string();
        assert_eq!(dump, SchemaDump::new(&second).with_elements().to_string());
        assert!(dump.contains("    p: {urn:test}:X_Type [0..unbounded]\n"));
        assert!(dump.contains("element {urn:test}:B: {urn:test}:B_Type\n"));
    }

    #[test]
    fn type_report_lists_inherited_properties() {
        let set = build(&[sample_catalog()]).unwrap();
        let b = set.lookup_ref(&QName::with_namespace(NS, "B_Type")).unwrap();
        let report = TypeReport::new(&set, b).to_string();
        assert!(report.starts_with("{urn:test}:B_Type\n"));
        assert!(report.contains("  extends {urn:test}:Root_Type\n"));
    }

    #[test]
    fn schema_set_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SchemaSet>();
    }
}
