use md_catalogs::{
    all, build_standard, gco, gmd, gml, GCO_NAMESPACE, GMD_NAMESPACE, GSS_NAMESPACE,
};
use md_model::builtins::XS_NAMESPACE;
use md_model::{
    build_schema_set, BuildError, BuiltinOverwriteAction, MaxOccurs, RefNamed, RegisterBuiltins,
    SchemaDump, SchemaSet, TypeReport,
};

fn standard() -> SchemaSet {
    build_standard(BuiltinOverwriteAction::Deny, RegisterBuiltins::Yes)
        .expect("standard catalogs must build")
}

#[test]
fn every_namespace_is_registered() {
    let set = standard();
    let prefixes: Vec<_> = set
        .namespaces()
        .map(|ns| set.prefix(ns).unwrap().to_string())
        .collect();
    for prefix in ["xs", "xlink", "gml", "gco", "gss", "gts", "gsr", "gmd"] {
        assert!(prefixes.iter().any(|p| p == prefix), "{prefix} missing");
    }
    assert_eq!(set.namespace_for_prefix("gmd"), Some(GMD_NAMESPACE));
}

#[test]
fn gmd_declares_all_metadata_types() {
    let set = standard();
    let registry = set.registry(GMD_NAMESPACE).unwrap();
    assert_eq!(registry.len(), 236);
    assert_eq!(registry.elements().count(), 132);
    for name in [
        "MD_Metadata_Type",
        "MD_Metadata_PropertyType",
        "CI_Citation_Type",
        "EX_Extent_Type",
        "DQ_DataQuality_Type",
        "LI_Lineage_Type",
        "PT_FreeText_PropertyType",
        "URL_PropertyType",
        "MD_TopicCategoryCode_Type",
        "MD_ScopeCode_PropertyType",
        "AbstractDQ_Element_Type",
        "DQ_Element_PropertyType",
    ] {
        assert!(registry.lookup_local(name).is_some(), "{name} missing");
    }
    assert_eq!(set.registry(GCO_NAMESPACE).unwrap().len(), 43);
}

#[test]
fn metadata_entity() {
    let set = standard();
    let metadata = set.lookup(&gmd("MD_Metadata_Type")).unwrap();
    assert!(metadata.is_complex());
    assert!(!metadata.abstract_);
    assert_eq!(
        metadata.supertype(&set).map(|s| &s.name),
        Some(&gco("AbstractObject_Type"))
    );

    let contact = metadata.property("contact", &set).unwrap();
    assert_eq!(contact.name, gmd("contact"));
    assert_eq!(contact.min_occurs, 1);
    assert_eq!(contact.max_occurs, MaxOccurs::Unbounded);
    assert_eq!(
        contact.value_type.name(&set),
        &gmd("CI_ResponsibleParty_PropertyType")
    );

    let date_stamp = metadata.property("dateStamp", &set).unwrap();
    assert_eq!((date_stamp.min_occurs, date_stamp.max_occurs), (1, MaxOccurs::ONE));
    assert_eq!(date_stamp.value_type.name(&set), &gco("Date_PropertyType"));

    // Inherited from gco:AbstractObject_Type
    let uuid = metadata.property("uuid", &set).unwrap();
    assert!(uuid.attribute);
    assert!(uuid.is_optional());
}

#[test]
fn property_types_wrap_their_class() {
    let set = standard();
    let property = set.lookup(&gmd("CI_Citation_PropertyType")).unwrap();
    let names: Vec<_> = property
        .properties()
        .iter()
        .map(|p| p.get(&set).name.to_string())
        .collect();
    assert_eq!(names[0], gmd("CI_Citation").to_string());
    assert!(names.contains(&"uuidref".to_string()));
    assert!(names.contains(&gco("nilReason").to_string()));

    let element = property.properties()[0].get(&set);
    assert_eq!(element.value_type.name(&set), &gmd("CI_Citation_Type"));
    assert!(element.is_optional());
    assert!(!element.is_multiple());
}

#[test]
fn class_hierarchies() {
    let set = standard();
    let element = set.lookup_ref(&gmd("AbstractDQ_Element_Type")).unwrap();
    let domain = set.lookup(&gmd("DQ_DomainConsistency_Type")).unwrap();
    assert!(domain.is_subtype_of(element, &set));
    assert!(domain.property("nameOfMeasure", &set).is_some());

    let head = set.lookup_element(&gmd("DQ_DomainConsistency")).unwrap();
    assert_eq!(
        head.substitution_group.map(|h| h.name(&set).clone()),
        Some(gmd("AbstractDQ_LogicalConsistency"))
    );

    let abstract_ = set.lookup_element(&gmd("AbstractMD_Identification")).unwrap();
    assert!(abstract_.abstract_);
    let subtypes: Vec<_> = set
        .subtypes(&gmd("AbstractMD_Identification_Type"))
        .into_iter()
        .map(|t| t.name.local_name.as_str())
        .collect();
    assert_eq!(
        subtypes,
        ["MD_DataIdentification_Type", "MD_ServiceIdentification_Type"]
    );
}

#[test]
fn code_lists_and_enumerations() {
    let set = standard();
    let role = set.lookup_element(&gmd("CI_RoleCode")).unwrap();
    assert_eq!(role.type_definition.name(&set), &gco("CodeListValue_Type"));
    assert_eq!(
        role.substitution_group.map(|h| h.name(&set).clone()),
        Some(gco("CharacterString"))
    );

    let topic = set.lookup(&gmd("MD_TopicCategoryCode_Type")).unwrap();
    assert!(topic.is_simple());
    let string = set.lookup_ref(&md_model::builtins::XS_STRING_NAME).unwrap();
    assert!(topic.is_subtype_of(string, &set));
}

#[test]
fn free_text_substitutes_for_character_string() {
    let set = standard();
    let property = set.lookup(&gmd("PT_FreeText_PropertyType")).unwrap();
    assert_eq!(
        property.supertype(&set).map(|s| &s.name),
        Some(&gco("CharacterString_PropertyType"))
    );
    let free_text = property.property("PT_FreeText", &set).unwrap();
    assert_eq!(free_text.name, gmd("PT_FreeText"));
    assert_eq!(free_text.value_type.name(&set), &gmd("PT_FreeText_Type"));
    assert!(property.property("CharacterString", &set).is_some());

    let text_group = set
        .lookup(&gmd("PT_FreeText_Type"))
        .unwrap()
        .property("textGroup", &set)
        .unwrap();
    assert_eq!(text_group.min_occurs, 1);
    assert_eq!(text_group.max_occurs, MaxOccurs::Unbounded);

    let localised = set.lookup_element(&gmd("LocalisedCharacterString")).unwrap();
    assert_eq!(
        localised.substitution_group.map(|h| h.name(&set).clone()),
        Some(gco("CharacterString"))
    );
}

#[test]
fn standard_types_are_not_identified() {
    let set = standard();
    assert!(set.all().all(|(_, t)| !t.identified));
}

#[test]
fn foreign_properties_resolve_into_sibling_namespaces() {
    let set = standard();
    let polygon = set
        .lookup(&gmd("EX_BoundingPolygon_Type"))
        .unwrap()
        .property("polygon", &set)
        .unwrap();
    let value_type = polygon.value_type.get(&set);
    assert!(value_type.name.is_in(GSS_NAMESPACE));

    let geometry = value_type.properties()[0].get(&set);
    assert_eq!(geometry.name, gml("AbstractGeometry"));
    assert_eq!(geometry.value_type.name(&set), &gml("AbstractGeometryType"));
}

#[test]
fn build_without_builtins_fails() {
    let error = build_standard(BuiltinOverwriteAction::Deny, RegisterBuiltins::No).unwrap_err();
    assert!(
        matches!(&error, BuildError::UnresolvedReference { target, .. } if target.is_in(XS_NAMESPACE)),
        "{error}"
    );
}

#[test]
fn missing_sibling_namespace_is_reported() {
    let catalogs: Vec<_> = all()
        .into_iter()
        .filter(|c| c.namespace != GCO_NAMESPACE)
        .collect();
    let error = build_schema_set(&catalogs, BuiltinOverwriteAction::Deny, RegisterBuiltins::Yes)
        .unwrap_err();
    assert!(
        matches!(&error, BuildError::MissingDependency { dependency, .. } if dependency == GCO_NAMESPACE),
        "{error}"
    );
}

#[test]
fn catalog_order_does_not_matter() {
    let set = standard();
    let mut reversed = all();
    reversed.reverse();
    let other =
        build_schema_set(&reversed, BuiltinOverwriteAction::Deny, RegisterBuiltins::Yes).unwrap();
    assert_eq!(
        SchemaDump::new(&set).with_elements().to_string(),
        SchemaDump::new(&other).with_elements().to_string()
    );
}

#[test]
fn dump_lists_properties() {
    let set = standard();
    let dump = SchemaDump::new(&set).namespace(GMD_NAMESPACE).to_string();
    let date = format!(
        "{}\n    super: {}\n    {}: {} [1..1]\n    {}: {} [1..1]\n",
        gmd("CI_Date_Type"),
        gco("AbstractObject_Type"),
        "date",
        gco("Date_PropertyType"),
        "dateType",
        gmd("CI_DateTypeCode_PropertyType"),
    );
    assert!(dump.contains(&date), "{dump}");
    // Other namespaces only show up as value types
    let header = format!("{}\n    super:", gco("CharacterString_PropertyType"));
    assert!(!dump.contains(&header));
}

#[test]
fn report_includes_inherited_properties() {
    let set = standard();
    let name = set.parse_name("gmd:MD_DataIdentification_Type").unwrap();
    let report = TypeReport::new(&set, set.lookup_ref(&name).unwrap())
        .with_subtypes()
        .to_string();
    assert!(report.contains(&format!("  extends {}", gmd("AbstractMD_Identification_Type"))));
    assert!(report.contains(&format!("  extends {}", gco("AbstractObject_Type"))));
    let citation = report.find("citation:").unwrap();
    let topic = report.find("topicCategory:").unwrap();
    assert!(citation < topic);
}
