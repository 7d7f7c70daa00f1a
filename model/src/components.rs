use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::num::{NonZeroU32, NonZeroUsize};

use tracing::warn;

use super::error::BuildError;
use super::xstypes::QName;
use super::{builtins, BuiltinOverwriteAction, ElementDescriptor, PropertyDescriptor, TypeDescriptor};

/// Trait implemented by all descriptor kinds stored in a component table.
pub trait Component {
    const DISPLAY_NAME: &'static str;
}

/// Type on which internal component traits are implemented.
///
/// This type is used to prevent leaking internal functions into the [`Component`]
pub struct ComponentTraits;

/// A component referencable via [`Ref`]. Intended for internal use.
pub trait HasArenaContainer<R: Component>: Sized {
    fn get_container_from_construction_component_table(
        table: &ConstructionComponentTable,
    ) -> &[Option<R>];
    fn get_container_from_construction_component_table_mut(
        table: &mut ConstructionComponentTable,
    ) -> &mut Vec<Option<R>>;
    fn get_container_from_catalog_table(table: &CatalogTable) -> &[R];
}

/// A reference to a [`Component`] stored in a [`ComponentTable`]
pub struct Ref<R>(NonZeroU32, PhantomData<R>)
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>;

impl<R> Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    const fn from_inner(inner: NonZeroU32) -> Self {
        Self(inner, PhantomData)
    }

    fn index(self) -> usize {
        let size: NonZeroUsize = self
            .0
            .try_into()
            .expect("Could not convert component reference to usize index");
        usize::from(size) - 1
    }

    pub fn get(self, table: &impl ComponentTable) -> &R {
        table.get(self)
    }
}

// derive(...) does not work if R itself does not derive the trait, even though it is only "used"
// in the PhantomData; hence we have to manually implement required traits for the Ref type.

impl<R> Copy for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
}

impl<R> Clone for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> fmt::Debug for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{} #{}>", R::DISPLAY_NAME, self.0)
    }
}

impl<R> PartialEq for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R> Eq for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
}

impl<R> Hash for Ref<R>
where
    R: Component,
    ComponentTraits: HasArenaContainer<R>,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// An arena-like container for the descriptor [`Component`]s
pub trait ComponentTable {
    /// Retrieves a component's value by reference from this component table.
    /// This function panics if the component value is not present in the table.
    fn get<R>(&self, ref_: Ref<R>) -> &R
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>;
}

/// The [component table](ComponentTable) implementation that is used while the catalogs are
/// being built.
///
/// The containers hold `Option`s: a slot is reserved for every declared name first, and only
/// filled once all of its references could be resolved.
#[derive(Default)]
pub struct ConstructionComponentTable {
    type_descriptors: Vec<Option<TypeDescriptor>>,
    property_descriptors: Vec<Option<PropertyDescriptor>>,
    element_descriptors: Vec<Option<ElementDescriptor>>,
}

impl ComponentTable for ConstructionComponentTable {
    fn get<R>(&self, ref_: Ref<R>) -> &R
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        let container = ComponentTraits::get_container_from_construction_component_table(self);
        container
            .get(ref_.index())
            .expect("Invalid component reference (out-of-bounds)")
            .as_ref()
            .expect("Component is not present")
    }
}

impl ConstructionComponentTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a [`Ref`] which points to an absent, reserved slot in the table.
    pub(crate) fn reserve<R>(&mut self) -> Ref<R>
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        let container = ComponentTraits::get_container_from_construction_component_table_mut(self);

        // Reserve a slot by inserting None
        container.push(None);

        // We use the size for the ref's ID, which is non-zero after the push
        let size = NonZeroUsize::new(container.len()).unwrap();
        let id: NonZeroU32 = size.try_into().expect("ID did not fit into 32-bit integer");

        Ref::from_inner(id)
    }

    /// Inserts the `value` into the slot pointed to by `ref_`. Returns `ref_` for convenience.
    pub(crate) fn insert<R>(&mut self, ref_: Ref<R>, value: R) -> Ref<R>
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        let container = ComponentTraits::get_container_from_construction_component_table_mut(self);

        let slot = container
            .get_mut(ref_.index())
            .expect("Invalid component reference (out-of-bounds)");

        *slot = Some(value);

        ref_
    }

    /// Shorthand for `insert(reserve(), value)`
    pub(crate) fn create<R>(&mut self, value: R) -> Ref<R>
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        let ref_ = self.reserve();
        self.insert(ref_, value)
    }

    #[cfg(test)]
    pub(crate) fn is_present<R>(&self, ref_: Ref<R>) -> bool
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        let container = ComponentTraits::get_container_from_construction_component_table(self);

        let slot = container
            .get(ref_.index())
            .expect("Invalid component reference (out-of-bounds)");

        slot.is_some()
    }

    /// Converts this construction table to the read-only [catalog table](`CatalogTable`).
    /// Fails if any reserved slot is still empty.
    pub(crate) fn convert_to_catalog_table(self) -> Result<CatalogTable, BuildError> {
        Ok(CatalogTable {
            type_descriptors: Self::convert_container(self.type_descriptors)?,
            property_descriptors: Self::convert_container(self.property_descriptors)?,
            element_descriptors: Self::convert_container(self.element_descriptors)?,
        })
    }

    /// Helper for [`Self::convert_to_catalog_table()`]
    fn convert_container<R: Component>(container: Vec<Option<R>>) -> Result<Box<[R]>, BuildError> {
        container
            .into_iter()
            .map(|component| component.ok_or(BuildError::UnfinishedComponent(R::DISPLAY_NAME)))
            .collect()
    }
}

/// The [component table](ComponentTable) implementation that backs a finished
/// [`SchemaSet`](crate::SchemaSet).
///
/// Components for which a [`Ref`] exists will always be present in this table. The table is
/// read-only, so the components are stored in boxed slices.
#[derive(Debug)]
pub struct CatalogTable {
    type_descriptors: Box<[TypeDescriptor]>,
    property_descriptors: Box<[PropertyDescriptor]>,
    element_descriptors: Box<[ElementDescriptor]>,
}

impl ComponentTable for CatalogTable {
    fn get<R>(&self, ref_: Ref<R>) -> &R
    where
        R: Component,
        ComponentTraits: HasArenaContainer<R>,
    {
        let container = ComponentTraits::get_container_from_catalog_table(self);
        container
            .get(ref_.index())
            .expect("Invalid component reference (out-of-bounds)")
    }
}

impl CatalogTable {
    /// References to all type descriptors, in slot order.
    pub(crate) fn type_refs(&self) -> impl Iterator<Item = Ref<TypeDescriptor>> + '_ {
        (0..self.type_descriptors.len()).map(|i| Ref::from_inner(index_to_id(i)))
    }

    pub(crate) fn element_refs(&self) -> impl Iterator<Item = Ref<ElementDescriptor>> + '_ {
        (0..self.element_descriptors.len()).map(|i| Ref::from_inner(index_to_id(i)))
    }

    pub fn type_count(&self) -> usize {
        self.type_descriptors.len()
    }

    pub fn property_count(&self) -> usize {
        self.property_descriptors.len()
    }

    pub fn element_count(&self) -> usize {
        self.element_descriptors.len()
    }
}

fn index_to_id(index: usize) -> NonZeroU32 {
    let id = u32::try_from(index + 1).expect("ID did not fit into 32-bit integer");
    NonZeroU32::new(id).expect("index + 1 is never zero")
}

macro_rules! has_arena_container_impl {
    ($type_name:ty, $field_name:ident) => {
        impl HasArenaContainer<$type_name> for ComponentTraits {
            fn get_container_from_construction_component_table(
                table: &ConstructionComponentTable,
            ) -> &[Option<$type_name>] {
                &table.$field_name
            }

            fn get_container_from_construction_component_table_mut(
                table: &mut ConstructionComponentTable,
            ) -> &mut Vec<Option<$type_name>> {
                &mut table.$field_name
            }

            fn get_container_from_catalog_table(table: &CatalogTable) -> &[$type_name] {
                &table.$field_name
            }
        }
    };
}

has_arena_container_impl!(TypeDescriptor, type_descriptors);
has_arena_container_impl!(PropertyDescriptor, property_descriptors);
has_arena_container_impl!(ElementDescriptor, element_descriptors);

/// A component with a [qualified name](QName)
pub trait Named: Component {
    fn name(&self) -> &QName;
}

/// Any type where first a [`Ref`] has to be dereferenced to get to the name.
pub trait RefNamed {
    fn name<'a>(&self, table: &'a impl ComponentTable) -> &'a QName;
}

impl<R> RefNamed for Ref<R>
where
    R: Named + 'static,
    ComponentTraits: HasArenaContainer<R>,
{
    fn name<'a>(&self, table: &'a impl ComponentTable) -> &'a QName {
        self.get(table).name()
    }
}

/// Trait that allows components to be looked up by their [qualified name](QName).
pub(crate) trait Lookup<V: Copy> {
    /// Registers a value for lookup in its respective symbol space.
    /// Returns the value previously associated with the `key`, if any.
    fn register_value_for_lookup(&mut self, key: QName, value: V) -> Option<V>;

    /// Looks up the value associated with the `key`; returns `None` if there is no such value.
    fn lookup_value(&self, key: &QName) -> Option<V>;

    /// Builds the error reported when `key` is registered twice.
    fn duplicate_error(key: QName) -> BuildError;
}

type LookupTable<T> = HashMap<QName, T>;

#[derive(Default)]
pub(crate) struct LookupTables {
    type_descriptors: LookupTable<Ref<TypeDescriptor>>,
    element_descriptors: LookupTable<Ref<ElementDescriptor>>,
}

macro_rules! impl_lookup {
    ($field_name:ident: $value_type:ty, $duplicate:path) => {
        impl Lookup<$value_type> for LookupTables {
            fn register_value_for_lookup(
                &mut self,
                key: QName,
                value: $value_type,
            ) -> Option<$value_type> {
                self.$field_name.insert(key, value)
            }

            fn lookup_value(&self, key: &QName) -> Option<$value_type> {
                self.$field_name.get(key).copied()
            }

            fn duplicate_error(key: QName) -> BuildError {
                $duplicate(key)
            }
        }
    };
}

impl_lookup!(type_descriptors: Ref<TypeDescriptor>, BuildError::DuplicateType);
impl_lookup!(element_descriptors: Ref<ElementDescriptor>, BuildError::DuplicateElement);

/// Resolves qualified names to reserved component slots.
pub(crate) struct ComponentResolver {
    lookup_tables: LookupTables,
    builtin_overwrite: BuiltinOverwriteAction,
}

impl ComponentResolver {
    pub(crate) fn new(builtin_overwrite: BuiltinOverwriteAction) -> Self {
        Self {
            lookup_tables: LookupTables::default(),
            builtin_overwrite,
        }
    }

    pub(crate) fn resolve<R>(&self, key: &QName) -> Option<R>
    where
        R: Copy,
        LookupTables: Lookup<R>,
    {
        self.lookup_tables.lookup_value(key)
    }

    /// Registers `value` under `name`.
    ///
    /// Returns the value that was replaced, which can only happen for built-in names and only if
    /// the [`BuiltinOverwriteAction`] permits it.
    pub(crate) fn register_with_name<R>(&mut self, name: QName, value: R) -> Result<Option<R>, BuildError>
    where
        R: Copy,
        LookupTables: Lookup<R>,
    {
        let Some(prev) = self.lookup_tables.lookup_value(&name) else {
            self.lookup_tables.register_value_for_lookup(name, value);
            return Ok(None);
        };
        if !builtins::is_builtin_name(&name) {
            return Err(<LookupTables as Lookup<R>>::duplicate_error(name));
        }
        match self.builtin_overwrite {
            BuiltinOverwriteAction::Deny => return Err(BuildError::BuiltinOverwrite(name)),
            BuiltinOverwriteAction::Warn => warn!(%name, "overwriting built-in component"),
            BuiltinOverwriteAction::Allow => {}
        }
        self.lookup_tables.register_value_for_lookup(name, value);
        Ok(Some(prev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeKind, ValueBinding};

    fn simple(name: &str) -> TypeDescriptor {
        TypeDescriptor {
            name: QName::with_namespace("urn:test", name),
            supertype: None,
            abstract_: false,
            identified: false,
            kind: TypeKind::Simple(ValueBinding::String),
            description: None,
        }
    }

    #[test]
    fn reserved_slot_is_absent_until_inserted() {
        let mut table = ConstructionComponentTable::new();
        let ref_: Ref<TypeDescriptor> = table.reserve();
        assert!(!table.is_present(ref_));
        table.insert(ref_, simple("A"));
        assert!(table.is_present(ref_));
        assert_eq!(ref_.name(&table).local_name, "A");
    }

    #[test]
    fn conversion_fails_with_unfilled_slot() {
        let mut table = ConstructionComponentTable::new();
        table.create(simple("A"));
        let _dangling: Ref<TypeDescriptor> = table.reserve();
        let err = table.convert_to_catalog_table().unwrap_err();
        assert!(matches!(err, BuildError::UnfinishedComponent("TypeDescriptor")));
    }

    #[test]
    fn catalog_table_keeps_slot_order() {
        let mut table = ConstructionComponentTable::new();
        let a = table.create(simple("A"));
        let b = table.create(simple("B"));
        let table = table.convert_to_catalog_table().unwrap();
        let refs: Vec<_> = table.type_refs().collect();
        assert_eq!(refs, vec![a, b]);
        assert_eq!(b.get(&table).name.local_name, "B");
        assert_eq!(format!("{a:?}"), "<TypeDescriptor #1>");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut table = ConstructionComponentTable::new();
        let a = table.create(simple("A"));
        let again = table.create(simple("A"));
        let mut resolver = ComponentResolver::new(BuiltinOverwriteAction::Allow);
        let name = QName::with_namespace("urn:test", "A");
        assert!(resolver.register_with_name(name.clone(), a).unwrap().is_none());
        let err = resolver.register_with_name(name.clone(), again).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateType(n) if n == name));
        assert_eq!(resolver.resolve::<Ref<TypeDescriptor>>(&name), Some(a));
    }

    #[test]
    fn builtin_overwrite_follows_action() {
        let mut table = ConstructionComponentTable::new();
        let first = table.create(simple("string"));
        let second = table.create(simple("string"));
        let name = builtins::XS_STRING_NAME.clone();

        let mut deny = ComponentResolver::new(BuiltinOverwriteAction::Deny);
        deny.register_with_name(name.clone(), first).unwrap();
        assert!(matches!(
            deny.register_with_name(name.clone(), second),
            Err(BuildError::BuiltinOverwrite(_))
        ));

        let mut allow = ComponentResolver::new(BuiltinOverwriteAction::Allow);
        allow.register_with_name(name.clone(), first).unwrap();
        assert_eq!(allow.register_with_name(name.clone(), second).unwrap(), Some(first));
        assert_eq!(allow.resolve::<Ref<TypeDescriptor>>(&name), Some(second));
    }
}
