//! Spatial reference wrappers of ISO/TS 19139 (`gsr`).

use md_model::NamespaceCatalog;

use super::common::reference_property;
use super::{gml, GCO_NAMESPACE, GML_NAMESPACE, GSR_NAMESPACE};

pub fn catalog() -> NamespaceCatalog {
    let mut catalog = NamespaceCatalog::new(GSR_NAMESPACE, "gsr")
        .depends_on(GML_NAMESPACE)
        .depends_on(GCO_NAMESPACE);

    reference_property(
        &mut catalog,
        "SC_CRS_PropertyType",
        gml("AbstractCRS"),
        gml("AbstractCRSType"),
    );

    catalog
}
