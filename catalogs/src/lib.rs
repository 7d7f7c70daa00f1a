//! Type catalogs of the ISO 19139 metadata schemas.
//!
//! [`gmd`] is the metadata catalog proper; the other modules hold the parts of its upstream
//! namespaces it references. The XML Schema built-ins are provided by [`md_model::builtins`].

pub mod gco;
pub mod gmd;
pub mod gml;
pub mod gsr;
pub mod gss;
pub mod gts;
pub mod xlink;

mod common;

use md_model::{
    build_schema_set, BuildError, BuiltinOverwriteAction, NamespaceCatalog, QName,
    RegisterBuiltins, SchemaSet,
};
use tracing::debug;

pub const GMD_NAMESPACE: &str = "http://www.isotc211.org/2005/gmd";
pub const GCO_NAMESPACE: &str = "http://www.isotc211.org/2005/gco";
pub const GSS_NAMESPACE: &str = "http://www.isotc211.org/2005/gss";
pub const GTS_NAMESPACE: &str = "http://www.isotc211.org/2005/gts";
pub const GSR_NAMESPACE: &str = "http://www.isotc211.org/2005/gsr";
pub const GML_NAMESPACE: &str = "http://www.opengis.net/gml/3.2";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

pub fn gmd(local_name: &str) -> QName {
    QName::with_namespace(GMD_NAMESPACE, local_name)
}

pub fn gco(local_name: &str) -> QName {
    QName::with_namespace(GCO_NAMESPACE, local_name)
}

pub fn gss(local_name: &str) -> QName {
    QName::with_namespace(GSS_NAMESPACE, local_name)
}

pub fn gts(local_name: &str) -> QName {
    QName::with_namespace(GTS_NAMESPACE, local_name)
}

pub fn gsr(local_name: &str) -> QName {
    QName::with_namespace(GSR_NAMESPACE, local_name)
}

pub fn gml(local_name: &str) -> QName {
    QName::with_namespace(GML_NAMESPACE, local_name)
}

pub fn xlink(local_name: &str) -> QName {
    QName::with_namespace(XLINK_NAMESPACE, local_name)
}

/// The catalogs of all seven namespaces, upstream namespaces first.
pub fn all() -> Vec<NamespaceCatalog> {
    vec![
        xlink::catalog(),
        gml::catalog(),
        gco::catalog(),
        gss::catalog(),
        gts::catalog(),
        gsr::catalog(),
        gmd::catalog(),
    ]
}

/// Builds [`all`] catalogs into one [`SchemaSet`].
pub fn build_standard(
    builtin_overwrite: BuiltinOverwriteAction,
    register_builtins: RegisterBuiltins,
) -> Result<SchemaSet, BuildError> {
    let catalogs = all();
    debug!(
        catalogs = catalogs.len(),
        types = catalogs.iter().map(|c| c.types.len()).sum::<usize>(),
        "building standard catalogs"
    );
    build_schema_set(&catalogs, builtin_overwrite, register_builtins)
}
