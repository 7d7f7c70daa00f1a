//! Geometry wrappers of ISO/TS 19139 (`gss`), pointing into GML.

use md_model::NamespaceCatalog;

use super::common::reference_property;
use super::{gml, GCO_NAMESPACE, GML_NAMESPACE, GSS_NAMESPACE};

pub fn catalog() -> NamespaceCatalog {
    let mut catalog = NamespaceCatalog::new(GSS_NAMESPACE, "gss")
        .depends_on(GML_NAMESPACE)
        .depends_on(GCO_NAMESPACE);

    reference_property(
        &mut catalog,
        "GM_Point_PropertyType",
        gml("Point"),
        gml("PointType"),
    );
    reference_property(
        &mut catalog,
        "GM_Object_PropertyType",
        gml("AbstractGeometry"),
        gml("AbstractGeometryType"),
    );

    catalog
}
