use super::error::QNameParseError;
use std::fmt;

pub type NCName = String;
pub type AnyURI = String;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    pub namespace_name: Option<AnyURI>,
    pub local_name: NCName,
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace_name) = self.namespace_name.as_ref() {
            write!(f, "{{{}}}:{}", namespace_name, self.local_name)
        } else {
            write!(f, "{}", self.local_name)
        }
    }
}

impl QName {
    pub fn with_namespace(
        namespace_name: impl Into<String>,
        local_name: impl Into<String>,
    ) -> Self {
        Self::with_optional_namespace(Some(namespace_name), local_name)
    }

    pub fn with_optional_namespace(
        namespace_name: Option<impl Into<String>>,
        local_name: impl Into<String>,
    ) -> Self {
        Self {
            namespace_name: namespace_name.map(Into::into),
            local_name: local_name.into(),
        }
    }

    /// A name without namespace, as used by unqualified attributes.
    pub fn unqualified(local_name: impl Into<String>) -> Self {
        Self::with_optional_namespace(None::<String>, local_name)
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace_name.as_deref()
    }

    pub fn is_in(&self, namespace: &str) -> bool {
        self.namespace() == Some(namespace)
    }

    /// Parses a name in one of the forms `{uri}local`, `{uri}:local` (the [`Display`] form),
    /// `prefix:local` or `local`.
    ///
    /// Prefixes are mapped to namespace URIs by `resolve_prefix`. An unprefixed name has no
    /// namespace.
    ///
    /// [`Display`]: fmt::Display
    pub fn parse<'a>(
        source: &str,
        resolve_prefix: impl Fn(&str) -> Option<&'a str>,
    ) -> Result<Self, QNameParseError> {
        if let Some(rest) = source.strip_prefix('{') {
            let (namespace, local) = rest
                .split_once('}')
                .ok_or_else(|| QNameParseError::UnterminatedNamespace(source.into()))?;
            let local = local.strip_prefix(':').unwrap_or(local);
            return Self::checked(Some(namespace), local, source);
        }
        if let Some((prefix, local)) = source.split_once(':') {
            let namespace = resolve_prefix(prefix)
                .ok_or_else(|| QNameParseError::NamePrefixNotResolved(prefix.into()))?;
            Self::checked(Some(namespace), local, source)
        } else {
            Self::checked(None, source, source)
        }
    }

    fn checked(namespace: Option<&str>, local: &str, source: &str) -> Result<Self, QNameParseError> {
        if local.is_empty() || local.contains(':') {
            return Err(QNameParseError::InvalidLocalName(source.into()));
        }
        Ok(Self::with_optional_namespace(namespace, local))
    }
}

pub type Sequence<T> = Vec<T>;

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixes(prefix: &str) -> Option<&'static str> {
        match prefix {
            "gmd" => Some("http://www.isotc211.org/2005/gmd"),
            _ => None,
        }
    }

    #[test]
    fn display_form_parses_back() {
        let name = QName::with_namespace("http://www.isotc211.org/2005/gmd", "CI_Citation_Type");
        let parsed = QName::parse(&name.to_string(), prefixes).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn prefixed_name_resolves() {
        let parsed = QName::parse("gmd:MD_Metadata_Type", prefixes).unwrap();
        assert!(parsed.is_in("http://www.isotc211.org/2005/gmd"));
        assert_eq!(parsed.local_name, "MD_Metadata_Type");
    }

    #[test]
    fn unknown_prefix_is_an_error() {
        let err = QName::parse("foo:Bar", prefixes).unwrap_err();
        assert!(matches!(err, QNameParseError::NamePrefixNotResolved(p) if p == "foo"));
    }

    #[test]
    fn bare_name_has_no_namespace() {
        let parsed = QName::parse("uuidref", prefixes).unwrap();
        assert_eq!(parsed, QName::unqualified("uuidref"));
        assert!(QName::parse("{urn:x}", prefixes).is_err());
        assert!(QName::parse("{urn:x", prefixes).is_err());
    }
}
