//! The part of GML 3.2 referenced by the ISO 19139 namespaces: nil reasons, measures, codes,
//! and the abstract heads of the geometry, temporal and CRS hierarchies.

use md_model::builtins::{
    xs, XS_ANY_SIMPLE_TYPE_NAME, XS_ANY_TYPE_NAME, XS_ANY_URI_NAME, XS_STRING_NAME,
};
use md_model::{NamespaceCatalog, Occurs, ValueBinding};

use super::{gml, GML_NAMESPACE};

pub fn catalog() -> NamespaceCatalog {
    let mut catalog = NamespaceCatalog::new(GML_NAMESPACE, "gml");

    // Union of the nil reason keywords, `other:*` and xs:anyURI
    catalog
        .simple("NilReasonType", ValueBinding::String)
        .extends(XS_ANY_SIMPLE_TYPE_NAME.clone());

    catalog
        .complex("AbstractGMLType")
        .set_abstract()
        .extends(XS_ANY_TYPE_NAME.clone())
        .element("description", XS_STRING_NAME.clone(), Occurs::OPTIONAL)
        .element("identifier", gml("CodeWithAuthorityType"), Occurs::OPTIONAL)
        .element("name", gml("CodeType"), Occurs::ANY)
        .attribute_ref(gml("id"), xs("ID"), true);

    catalog
        .complex("CodeType")
        .extends(XS_STRING_NAME.clone())
        .attribute("codeSpace", XS_ANY_URI_NAME.clone(), false);
    catalog
        .complex("CodeWithAuthorityType")
        .extends(gml("CodeType"));

    catalog
        .complex("MeasureType")
        .extends(xs("double"))
        .attribute("uom", XS_ANY_URI_NAME.clone(), true);
    for name in ["LengthType", "AngleType", "ScaleType"] {
        catalog.complex(name).extends(gml("MeasureType"));
    }

    // Geometry
    catalog
        .complex("AbstractGeometryType")
        .set_abstract()
        .extends(gml("AbstractGMLType"))
        .attribute("srsName", XS_ANY_URI_NAME.clone(), false)
        .attribute("srsDimension", xs("positiveInteger"), false);
    catalog
        .complex("AbstractGeometricPrimitiveType")
        .set_abstract()
        .extends(gml("AbstractGeometryType"));
    catalog
        .complex("DirectPositionType")
        .extends(XS_ANY_SIMPLE_TYPE_NAME.clone())
        .attribute("srsName", XS_ANY_URI_NAME.clone(), false)
        .attribute("srsDimension", xs("positiveInteger"), false);
    catalog
        .complex("PointType")
        .extends(gml("AbstractGeometricPrimitiveType"))
        .element("pos", gml("DirectPositionType"), Occurs::REQUIRED);

    // Time
    catalog
        .complex("AbstractTimeObjectType")
        .set_abstract()
        .extends(gml("AbstractGMLType"));
    catalog
        .complex("AbstractTimePrimitiveType")
        .set_abstract()
        .extends(gml("AbstractTimeObjectType"));

    // Reference systems
    catalog
        .complex("DefinitionBaseType")
        .extends(gml("AbstractGMLType"));
    catalog
        .complex("DefinitionType")
        .extends(gml("DefinitionBaseType"))
        .element("remarks", XS_STRING_NAME.clone(), Occurs::OPTIONAL);
    catalog
        .complex("IdentifiedObjectType")
        .set_abstract()
        .extends(gml("DefinitionType"));
    catalog
        .complex("AbstractCRSType")
        .set_abstract()
        .extends(gml("IdentifiedObjectType"))
        .element("scope", XS_STRING_NAME.clone(), Occurs::AT_LEAST_ONE);

    catalog.element("AbstractGML", gml("AbstractGMLType")).set_abstract();
    catalog
        .element("AbstractGeometry", gml("AbstractGeometryType"))
        .set_abstract()
        .substitutes(gml("AbstractGML"));
    catalog
        .element("AbstractGeometricPrimitive", gml("AbstractGeometricPrimitiveType"))
        .set_abstract()
        .substitutes(gml("AbstractGeometry"));
    catalog
        .element("Point", gml("PointType"))
        .substitutes(gml("AbstractGeometricPrimitive"));
    catalog
        .element("AbstractTimeObject", gml("AbstractTimeObjectType"))
        .set_abstract()
        .substitutes(gml("AbstractGML"));
    catalog
        .element("AbstractTimePrimitive", gml("AbstractTimePrimitiveType"))
        .set_abstract()
        .substitutes(gml("AbstractTimeObject"));
    catalog
        .element("Definition", gml("DefinitionType"))
        .substitutes(gml("AbstractGML"));
    catalog
        .element("AbstractCRS", gml("AbstractCRSType"))
        .set_abstract()
        .substitutes(gml("Definition"));

    catalog
}
