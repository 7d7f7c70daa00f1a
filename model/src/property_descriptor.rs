use std::fmt;

use super::{
    components::{Component, Named},
    xstypes::QName,
    Ref, TypeDescriptor,
};

/// One named, typed member of a complex type: an element or an attribute declaration together
/// with its occurrence bounds.
#[derive(Clone, Debug)]
pub struct PropertyDescriptor {
    pub name: QName,
    pub value_type: Ref<TypeDescriptor>,
    pub min_occurs: u64,
    pub max_occurs: MaxOccurs,
    pub attribute: bool,
    pub nillable: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MaxOccurs {
    Unbounded,
    Count(u64),
}

impl MaxOccurs {
    pub const ONE: Self = Self::Count(1);

    /// `true` if `min` does not exceed this bound.
    pub fn admits(&self, min: u64) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Count(max) => min <= *max,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }
}

impl fmt::Display for MaxOccurs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Count(n) => write!(f, "{n}"),
        }
    }
}

impl Component for PropertyDescriptor {
    const DISPLAY_NAME: &'static str = "PropertyDescriptor";
}

impl Named for PropertyDescriptor {
    fn name(&self) -> &QName {
        &self.name
    }
}

impl PropertyDescriptor {
    pub fn is_optional(&self) -> bool {
        self.min_occurs == 0
    }

    pub fn is_multiple(&self) -> bool {
        match self.max_occurs {
            MaxOccurs::Unbounded => true,
            MaxOccurs::Count(n) => n > 1,
        }
    }
}

/// Formats the `[min..max]` range of a property, e.g. `[0..unbounded]`.
pub struct Cardinality<'a>(pub &'a PropertyDescriptor);

impl fmt::Display for Cardinality<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{}]", self.0.min_occurs, self.0.max_occurs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_admit_minimum() {
        assert!(MaxOccurs::Unbounded.admits(7));
        assert!(MaxOccurs::ONE.admits(1));
        assert!(!MaxOccurs::Count(2).admits(3));
    }

    #[test]
    fn max_occurs_display() {
        assert_eq!(MaxOccurs::Unbounded.to_string(), "unbounded");
        assert_eq!(MaxOccurs::Count(4).to_string(), "4");
    }
}
