//! Declaration patterns shared by the ISO 19139 namespaces.
//!
//! Almost every class `X` of the ISO models is encoded as a type `X_Type`, a global element `X`
//! and a wrapper `X_PropertyType` that holds an optional `X` element (or a reference to one).

use lazy_static::lazy_static;
use md_model::builtins::{xs, XS_ANY_TYPE_NAME, XS_STRING_NAME};
use md_model::{NamespaceCatalog, Occurs, QName, TypeDeclaration, ValueBinding};

use super::{gco, gml, xlink};

lazy_static! {
    pub(crate) static ref ABSTRACT_OBJECT_TYPE: QName = gco("AbstractObject_Type");
    pub(crate) static ref CODE_LIST_VALUE_TYPE: QName = gco("CodeListValue_Type");
    pub(crate) static ref CHARACTER_STRING: QName = gco("CharacterString");
    static ref NIL_REASON: QName = gco("nilReason");
    static ref NIL_REASON_TYPE: QName = gml("NilReasonType");
}

/// `<xs:attribute ref="gco:nilReason"/>`
pub(crate) fn nil_reason(type_: &mut TypeDeclaration) -> &mut TypeDeclaration {
    type_.attribute_ref(NIL_REASON.clone(), NIL_REASON_TYPE.clone(), false)
}

/// The `xlink:simpleLink` attribute group.
pub(crate) fn simple_link(type_: &mut TypeDeclaration) -> &mut TypeDeclaration {
    type_
        .attribute_ref(xlink("type"), xlink("typeType"), false)
        .attribute_ref(xlink("href"), xlink("hrefType"), false)
        .attribute_ref(xlink("role"), xlink("roleType"), false)
        .attribute_ref(xlink("arcrole"), xlink("arcroleType"), false)
        .attribute_ref(xlink("title"), xlink("titleAttrType"), false)
        .attribute_ref(xlink("show"), xlink("showType"), false)
        .attribute_ref(xlink("actuate"), xlink("actuateType"), false)
}

/// The `gco:ObjectReference` attribute group: a `uuidref` plus an XLink.
pub(crate) fn object_reference(type_: &mut TypeDeclaration) -> &mut TypeDeclaration {
    type_.attribute("uuidref", XS_STRING_NAME.clone(), false);
    simple_link(type_)
}

/// The `gco:ObjectIdentification` attribute group.
pub(crate) fn object_identification(type_: &mut TypeDeclaration) -> &mut TypeDeclaration {
    type_
        .attribute("id", xs("ID"), false)
        .attribute("uuid", XS_STRING_NAME.clone(), false)
}

/// A property type holding an optional `element` and the nil reason, e.g.
/// `gco:CharacterString_PropertyType`.
pub(crate) fn value_property<'c>(
    catalog: &'c mut NamespaceCatalog,
    local_name: &str,
    element: QName,
    element_type: QName,
) -> &'c mut TypeDeclaration {
    let type_ = catalog
        .complex(local_name)
        .extends(XS_ANY_TYPE_NAME.clone())
        .element_ref(element, element_type, Occurs::OPTIONAL);
    nil_reason(type_)
}

/// Like [`value_property`], but the element may also be given by reference.
pub(crate) fn reference_property<'c>(
    catalog: &'c mut NamespaceCatalog,
    local_name: &str,
    element: QName,
    element_type: QName,
) -> &'c mut TypeDeclaration {
    let type_ = catalog
        .complex(local_name)
        .extends(XS_ANY_TYPE_NAME.clone())
        .element_ref(element, element_type, Occurs::OPTIONAL);
    object_reference(type_);
    nil_reason(type_)
}

/// Declares the type `{name}_Type`, the element `{name}` and the property type
/// `{name}_PropertyType`. Returns the type for its properties to be added.
pub(crate) fn class<'c>(
    catalog: &'c mut NamespaceCatalog,
    name: &str,
    base: QName,
    head: Option<QName>,
) -> &'c mut TypeDeclaration {
    let type_name = catalog.name(&format!("{name}_Type"));
    let element_name = catalog.name(name);
    let element = catalog.element(name, type_name.clone());
    if let Some(head) = head {
        element.substitutes(head);
    }
    reference_property(catalog, &format!("{name}_PropertyType"), element_name, type_name);
    catalog.complex(&format!("{name}_Type")).extends(base)
}

/// Declares an abstract `{name}_Type` with its abstract element `{name}`. The property type is
/// named after `stem`, e.g. `AbstractDQ_Element` has `DQ_Element_PropertyType`.
pub(crate) fn abstract_class<'c>(
    catalog: &'c mut NamespaceCatalog,
    name: &str,
    stem: &str,
    base: QName,
    head: Option<QName>,
) -> &'c mut TypeDeclaration {
    let type_name = catalog.name(&format!("{name}_Type"));
    let element_name = catalog.name(name);
    let element = catalog.element(name, type_name.clone()).set_abstract();
    if let Some(head) = head {
        element.substitutes(head);
    }
    reference_property(catalog, &format!("{stem}_PropertyType"), element_name, type_name);
    catalog
        .complex(&format!("{name}_Type"))
        .set_abstract()
        .extends(base)
}

/// A code list `{name}`: an element of `gco:CodeListValue_Type` that substitutes for
/// `gco:CharacterString`, and its `{name}_PropertyType`.
pub(crate) fn code_list(catalog: &mut NamespaceCatalog, name: &str) {
    let element_name = catalog.name(name);
    catalog
        .element(name, CODE_LIST_VALUE_TYPE.clone())
        .substitutes(CHARACTER_STRING.clone());
    value_property(
        catalog,
        &format!("{name}_PropertyType"),
        element_name,
        CODE_LIST_VALUE_TYPE.clone(),
    );
}

/// A string enumeration `{name}_Type` with its element and property type.
pub(crate) fn enumeration(catalog: &mut NamespaceCatalog, name: &str) {
    let type_name = catalog.name(&format!("{name}_Type"));
    let element_name = catalog.name(name);
    catalog
        .simple(&format!("{name}_Type"), ValueBinding::String)
        .extends(XS_STRING_NAME.clone());
    catalog
        .element(name, type_name.clone())
        .substitutes(CHARACTER_STRING.clone());
    value_property(catalog, &format!("{name}_PropertyType"), element_name, type_name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gmd, GMD_NAMESPACE};

    fn type_names(catalog: &NamespaceCatalog) -> Vec<&str> {
        catalog.types.iter().map(|t| t.name.local_name.as_str()).collect()
    }

    #[test]
    fn class_declares_type_element_and_property_type() {
        let mut catalog = NamespaceCatalog::new(GMD_NAMESPACE, "gmd");
        class(&mut catalog, "CI_Date", ABSTRACT_OBJECT_TYPE.clone(), None);
        assert_eq!(type_names(&catalog), ["CI_Date_PropertyType", "CI_Date_Type"]);
        assert_eq!(catalog.elements[0].name, gmd("CI_Date"));
        assert_eq!(catalog.elements[0].type_name, gmd("CI_Date_Type"));

        let property = &catalog.types[0];
        assert_eq!(property.properties[0].name, gmd("CI_Date"));
        assert!(property.properties[1..].iter().all(|p| p.attribute));
        assert_eq!(property.properties.last().unwrap().name, *NIL_REASON);
    }

    #[test]
    fn abstract_class_uses_stem_for_property_type() {
        let mut catalog = NamespaceCatalog::new(GMD_NAMESPACE, "gmd");
        abstract_class(
            &mut catalog,
            "AbstractDQ_Element",
            "DQ_Element",
            ABSTRACT_OBJECT_TYPE.clone(),
            None,
        );
        assert_eq!(
            type_names(&catalog),
            ["DQ_Element_PropertyType", "AbstractDQ_Element_Type"]
        );
        assert!(catalog.types[1].abstract_);
        assert!(catalog.elements[0].abstract_);
    }

    #[test]
    fn code_lists_substitute_character_string() {
        let mut catalog = NamespaceCatalog::new(GMD_NAMESPACE, "gmd");
        code_list(&mut catalog, "CI_RoleCode");
        assert_eq!(type_names(&catalog), ["CI_RoleCode_PropertyType"]);
        assert_eq!(catalog.elements[0].type_name, *CODE_LIST_VALUE_TYPE);
        assert_eq!(
            catalog.elements[0].substitution_group.as_ref(),
            Some(&*CHARACTER_STRING)
        );
    }
}
