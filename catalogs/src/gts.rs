//! Temporal wrappers of ISO/TS 19139 (`gts`).

use md_model::builtins::xs;
use md_model::NamespaceCatalog;

use super::common::{reference_property, value_property};
use super::{gml, gts, GCO_NAMESPACE, GML_NAMESPACE, GTS_NAMESPACE};

pub fn catalog() -> NamespaceCatalog {
    let mut catalog = NamespaceCatalog::new(GTS_NAMESPACE, "gts")
        .depends_on(GML_NAMESPACE)
        .depends_on(GCO_NAMESPACE);

    reference_property(
        &mut catalog,
        "TM_Primitive_PropertyType",
        gml("AbstractTimePrimitive"),
        gml("AbstractTimePrimitiveType"),
    );
    value_property(
        &mut catalog,
        "TM_PeriodDuration_PropertyType",
        gts("TM_PeriodDuration"),
        xs("duration"),
    );
    catalog.element("TM_PeriodDuration", xs("duration"));

    catalog
}
