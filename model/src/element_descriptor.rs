use super::{
    components::{Component, Named},
    xstypes::QName,
    Ref, TypeDescriptor,
};

/// A global element declaration of a namespace.
#[derive(Clone, Debug)]
pub struct ElementDescriptor {
    pub name: QName,
    pub type_definition: Ref<TypeDescriptor>,
    pub abstract_: bool,
    pub substitution_group: Option<Ref<ElementDescriptor>>,
}

impl Component for ElementDescriptor {
    const DISPLAY_NAME: &'static str = "ElementDescriptor";
}

impl Named for ElementDescriptor {
    fn name(&self) -> &QName {
        &self.name
    }
}
