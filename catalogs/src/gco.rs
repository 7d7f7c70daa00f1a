//! Basic types of ISO/TS 19139 (`gco`): the wrappers around XML Schema values, code list values,
//! names, records and measures.

use md_model::builtins::{xs, XS_ANY_SIMPLE_TYPE_NAME, XS_ANY_TYPE_NAME, XS_ANY_URI_NAME, XS_STRING_NAME};
use md_model::{NamespaceCatalog, Occurs, QName, ValueBinding};

use super::common::{
    nil_reason, object_identification, object_reference, reference_property, simple_link,
    value_property, ABSTRACT_OBJECT_TYPE,
};
use super::{gco, gml, GCO_NAMESPACE, GML_NAMESPACE, XLINK_NAMESPACE};

/// Property types wrapping a single optional value element: type name, element, element type.
const VALUE_PROPERTIES: &[(&str, &str, Value)] = &[
    ("CharacterString_PropertyType", "CharacterString", Value::Xs("string")),
    ("Boolean_PropertyType", "Boolean", Value::Xs("boolean")),
    ("Real_PropertyType", "Real", Value::Xs("double")),
    ("Decimal_PropertyType", "Decimal", Value::Xs("decimal")),
    ("Integer_PropertyType", "Integer", Value::Xs("integer")),
    ("DateTime_PropertyType", "DateTime", Value::Xs("dateTime")),
    ("Binary_PropertyType", "Binary", Value::Gco("Binary_Type")),
    ("UnlimitedInteger_PropertyType", "UnlimitedInteger", Value::Gco("UnlimitedInteger_Type")),
    ("RecordType_PropertyType", "RecordType", Value::Gco("RecordType_Type")),
    ("Measure_PropertyType", "Measure", Value::Gml("MeasureType")),
    ("Length_PropertyType", "Length", Value::Gml("LengthType")),
    ("Distance_PropertyType", "Distance", Value::Gml("LengthType")),
    ("Angle_PropertyType", "Angle", Value::Gml("AngleType")),
    ("Scale_PropertyType", "Scale", Value::Gml("ScaleType")),
    ("GenericName_PropertyType", "AbstractGenericName", Value::Gml("CodeType")),
    ("LocalName_PropertyType", "LocalName", Value::Gml("CodeType")),
    ("ScopedName_PropertyType", "ScopedName", Value::Gml("CodeType")),
];

/// Property types that may also reference their value: type name, element, element type.
const REFERENCE_PROPERTIES: &[(&str, &str, Value)] = &[
    ("TypeName_PropertyType", "TypeName", Value::Gco("TypeName_Type")),
    ("MemberName_PropertyType", "MemberName", Value::Gco("MemberName_Type")),
    ("Multiplicity_PropertyType", "Multiplicity", Value::Gco("Multiplicity_Type")),
    ("MultiplicityRange_PropertyType", "MultiplicityRange", Value::Gco("MultiplicityRange_Type")),
    ("Record_PropertyType", "Record", Value::Xs("anyType")),
];

/// Units of measure. These hold a local `UnitDefinition` element of `xs:anyType` in place of
/// `gml:UnitDefinition`.
const UOM_PROPERTIES: &[&str] = &[
    "UnitOfMeasure_PropertyType",
    "UomAngle_PropertyType",
    "UomArea_PropertyType",
    "UomLength_PropertyType",
    "UomScale_PropertyType",
    "UomTime_PropertyType",
    "UomVelocity_PropertyType",
    "UomVolume_PropertyType",
];

#[derive(Copy, Clone)]
enum Value {
    Xs(&'static str),
    Gco(&'static str),
    Gml(&'static str),
}

impl Value {
    fn name(self) -> QName {
        match self {
            Self::Xs(local) => xs(local),
            Self::Gco(local) => gco(local),
            Self::Gml(local) => gml(local),
        }
    }
}

pub fn catalog() -> NamespaceCatalog {
    let mut catalog = NamespaceCatalog::new(GCO_NAMESPACE, "gco")
        .depends_on(GML_NAMESPACE)
        .depends_on(XLINK_NAMESPACE);

    object_identification(
        catalog
            .complex("AbstractObject_Type")
            .set_abstract()
            .extends(XS_ANY_TYPE_NAME.clone()),
    );
    catalog
        .complex("MultiplicityRange_Type")
        .extends(ABSTRACT_OBJECT_TYPE.clone())
        .describe(
            "A component of a multiplicity, consisting of an non-negative lower bound, and a \
             potentially infinite upper bound.",
        )
        .element("lower", gco("Integer_PropertyType"), Occurs::REQUIRED)
        .element("upper", gco("UnlimitedInteger_PropertyType"), Occurs::REQUIRED);
    catalog
        .complex("Multiplicity_Type")
        .extends(ABSTRACT_OBJECT_TYPE.clone())
        .element("range", gco("MultiplicityRange_PropertyType"), Occurs::AT_LEAST_ONE);
    catalog
        .complex("TypeName_Type")
        .extends(ABSTRACT_OBJECT_TYPE.clone())
        .element("aName", gco("CharacterString_PropertyType"), Occurs::REQUIRED);
    catalog
        .complex("MemberName_Type")
        .extends(ABSTRACT_OBJECT_TYPE.clone())
        .element("aName", gco("CharacterString_PropertyType"), Occurs::REQUIRED)
        .element("attributeType", gco("TypeName_PropertyType"), Occurs::REQUIRED);

    // Complex types with simple content
    catalog
        .complex("CodeListValue_Type")
        .extends(XS_STRING_NAME.clone())
        .attribute("codeList", XS_ANY_URI_NAME.clone(), true)
        .attribute("codeListValue", XS_ANY_URI_NAME.clone(), true)
        .attribute("codeSpace", XS_ANY_URI_NAME.clone(), false);
    catalog
        .complex("Binary_Type")
        .extends(XS_STRING_NAME.clone())
        .attribute("src", XS_ANY_URI_NAME.clone(), false);
    simple_link(catalog.complex("RecordType_Type").extends(XS_STRING_NAME.clone()));
    catalog
        .complex("UnlimitedInteger_Type")
        .extends(xs("nonNegativeInteger"))
        .attribute("isInfinite", xs("boolean"), false);
    // Union of xs:date, xs:gYearMonth and xs:gYear
    catalog
        .simple("Date_Type", ValueBinding::Any)
        .extends(XS_ANY_SIMPLE_TYPE_NAME.clone());

    for (name, element, value) in VALUE_PROPERTIES {
        value_property(&mut catalog, name, gco(element), value.name());
    }
    for (name, element, value) in REFERENCE_PROPERTIES {
        reference_property(&mut catalog, name, gco(element), value.name());
    }
    for name in UOM_PROPERTIES {
        reference_property(
            &mut catalog,
            name,
            gco("UnitDefinition"),
            XS_ANY_TYPE_NAME.clone(),
        );
    }

    // A choice of one of the number elements
    let number = catalog
        .complex("Number_PropertyType")
        .extends(XS_ANY_TYPE_NAME.clone())
        .element("Real", xs("double"), Occurs::OPTIONAL)
        .element("Decimal", xs("decimal"), Occurs::OPTIONAL)
        .element("Integer", xs("integer"), Occurs::OPTIONAL);
    nil_reason(number);
    let date = catalog
        .complex("Date_PropertyType")
        .extends(XS_ANY_TYPE_NAME.clone())
        .element("Date", gco("Date_Type"), Occurs::OPTIONAL)
        .element("DateTime", xs("dateTime"), Occurs::OPTIONAL);
    nil_reason(date);
    let reference = catalog
        .complex("ObjectReference_PropertyType")
        .extends(XS_ANY_TYPE_NAME.clone());
    object_reference(reference);
    nil_reason(reference);

    declare_elements(&mut catalog);
    catalog
}

fn declare_elements(catalog: &mut NamespaceCatalog) {
    catalog
        .element("AbstractObject", ABSTRACT_OBJECT_TYPE.clone())
        .set_abstract();
    catalog.element("CharacterString", XS_STRING_NAME.clone());
    catalog.element("Boolean", xs("boolean"));
    catalog.element("Real", xs("double"));
    catalog.element("Decimal", xs("decimal"));
    catalog.element("Integer", xs("integer"));
    catalog.element("Date", gco("Date_Type"));
    catalog.element("DateTime", xs("dateTime"));
    catalog.element("Binary", gco("Binary_Type"));
    catalog.element("UnlimitedInteger", gco("UnlimitedInteger_Type"));
    catalog.element("RecordType", gco("RecordType_Type"));
    catalog.element("Record", XS_ANY_TYPE_NAME.clone());

    catalog.element("Measure", gml("MeasureType"));
    catalog
        .element("Length", gml("LengthType"))
        .substitutes(gco("Measure"));
    catalog
        .element("Distance", gml("LengthType"))
        .substitutes(gco("Length"));
    catalog
        .element("Angle", gml("AngleType"))
        .substitutes(gco("Measure"));
    catalog
        .element("Scale", gml("ScaleType"))
        .substitutes(gco("Measure"));

    catalog
        .element("AbstractGenericName", gml("CodeType"))
        .set_abstract();
    catalog
        .element("LocalName", gml("CodeType"))
        .substitutes(gco("AbstractGenericName"));
    catalog
        .element("ScopedName", gml("CodeType"))
        .substitutes(gco("AbstractGenericName"));

    for name in ["TypeName", "MemberName", "Multiplicity", "MultiplicityRange"] {
        catalog
            .element(name, gco(&format!("{name}_Type")))
            .substitutes(gco("AbstractObject"));
    }
}
