//! The static type lattice (§3 "Static type", §4.3 "Type compatibility").

use pseudoc_par::ast::{BasicType, TypeNode};

/// A value's static type as tracked by the analyzer. `Unknown` absorbs into
/// any comparison so a single bad expression never cascades into a wall of
/// further diagnostics (§9).
#[derive(Debug, Clone, PartialEq)]
pub enum StaticType {
    Unknown,
    Basic(BasicType),
    Array {
        element: BasicType,
        dimensions: usize,
    },
}

impl StaticType {
    pub fn from_type_node(node: &TypeNode) -> Self {
        match node {
            TypeNode::Basic(basic) => StaticType::Basic(*basic),
            TypeNode::Array { element, dimensions } => StaticType::Array {
                element: *element,
                dimensions: dimensions.len(),
            },
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            StaticType::Unknown
                | StaticType::Basic(BasicType::Integer)
                | StaticType::Basic(BasicType::Real)
        )
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, StaticType::Unknown | StaticType::Basic(BasicType::Boolean))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, StaticType::Unknown | StaticType::Basic(BasicType::Integer))
    }

    /// Can a value of type `self` feed a target of type `target`? (§4.3)
    pub fn feeds(&self, target: &StaticType) -> bool {
        match (self, target) {
            (StaticType::Unknown, _) | (_, StaticType::Unknown) => true,
            (StaticType::Basic(BasicType::Integer), StaticType::Basic(BasicType::Real)) => true,
            (StaticType::Basic(a), StaticType::Basic(b)) => a == b,
            (
                StaticType::Array { element: ea, dimensions: da },
                StaticType::Array { element: eb, dimensions: db },
            ) => ea == eb && da == db,
            _ => false,
        }
    }

    /// Result of `+ - * / ^` (§4.3): REAL if either operand is REAL or the
    /// operator is `/`, INTEGER otherwise. Either operand `Unknown` yields
    /// `Unknown` rather than guessing.
    pub fn arithmetic_result(&self, other: &StaticType, is_division: bool) -> StaticType {
        if matches!(self, StaticType::Unknown) || matches!(other, StaticType::Unknown) {
            return StaticType::Unknown;
        }
        let real = StaticType::Basic(BasicType::Real);
        if is_division || *self == real || *other == real {
            real
        } else {
            StaticType::Basic(BasicType::Integer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_feeds_real_but_not_the_reverse() {
        let int = StaticType::Basic(BasicType::Integer);
        let real = StaticType::Basic(BasicType::Real);
        assert!(int.feeds(&real));
        assert!(!real.feeds(&int));
    }

    #[test]
    fn unknown_feeds_and_is_fed_by_anything() {
        assert!(StaticType::Unknown.feeds(&StaticType::Basic(BasicType::Boolean)));
        assert!(StaticType::Basic(BasicType::Boolean).feeds(&StaticType::Unknown));
    }

    #[test]
    fn arrays_match_on_element_and_dimension_count_only() {
        let a = StaticType::Array { element: BasicType::Integer, dimensions: 2 };
        let b = StaticType::Array { element: BasicType::Integer, dimensions: 2 };
        let c = StaticType::Array { element: BasicType::Integer, dimensions: 1 };
        assert!(a.feeds(&b));
        assert!(!a.feeds(&c));
    }

    #[test]
    fn division_is_always_real() {
        let int = StaticType::Basic(BasicType::Integer);
        assert_eq!(int.arithmetic_result(&int, true), StaticType::Basic(BasicType::Real));
        assert_eq!(int.arithmetic_result(&int, false), StaticType::Basic(BasicType::Integer));
    }
}
