//! The attribute types of XLink 1.1, as used by the `xlink:simpleLink` attribute group.

use md_model::builtins::{XS_ANY_URI_NAME, XS_STRING_NAME};
use md_model::{NamespaceCatalog, ValueBinding};

use super::XLINK_NAMESPACE;

pub fn catalog() -> NamespaceCatalog {
    let mut catalog = NamespaceCatalog::new(XLINK_NAMESPACE, "xlink");

    for name in ["hrefType", "roleType", "arcroleType"] {
        catalog
            .simple(name, ValueBinding::Uri)
            .extends(XS_ANY_URI_NAME.clone());
    }
    // Enumerations over xs:token, kept as plain strings
    for name in ["typeType", "showType", "actuateType", "titleAttrType"] {
        catalog
            .simple(name, ValueBinding::String)
            .extends(XS_STRING_NAME.clone());
    }

    catalog
}
