//! Source spans — the half-open rectangle every token, AST node, and
//! diagnostic carries.
//!
//! A [`Span`] is `(start_line, start_column) .. (end_line, end_column)`, both
//! one-based, columns measured in characters (not bytes). It is half-open:
//! the end position is the first position *not* covered by the span, which
//! is what lets a zero-width span (e.g. "insert a `NEXT` here") exist without
//! `start == end` collapsing to something unrepresentable.

use serde::{Deserialize, Serialize};

/// A source location spanning from one line/column to another.
///
/// # Examples
///
/// ```
/// use pseudoc_util::Span;
///
/// let span = Span::new(1, 1, 1, 8);
/// assert_eq!(span.start_line, 1);
/// assert_eq!(span.end_column, 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// First line covered by the span (1-based).
    pub start_line: u32,
    /// First column covered by the span (1-based, inclusive).
    pub start_column: u32,
    /// Last line covered by the span (1-based).
    pub end_line: u32,
    /// Column one past the last character covered by the span (exclusive).
    pub end_column: u32,
}

impl Span {
    /// A span for file-level diagnostics that don't anchor to a real
    /// location, e.g. "source file is empty".
    pub const DUMMY: Span = Span {
        start_line: 1,
        start_column: 1,
        end_line: 1,
        end_column: 1,
    };

    #[inline]
    pub const fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A single-character span at `(line, column)`.
    #[inline]
    pub const fn at(line: u32, column: u32) -> Self {
        Self {
            start_line: line,
            start_column: column,
            end_line: line,
            end_column: column + 1,
        }
    }

    /// Merge two spans into the smallest span covering both.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let (start_line, start_column) = if (self.start_line, self.start_column)
            <= (other.start_line, other.start_column)
        {
            (self.start_line, self.start_column)
        } else {
            (other.start_line, other.start_column)
        };
        let (end_line, end_column) =
            if (self.end_line, self.end_column) >= (other.end_line, other.end_column) {
                (self.end_line, self.end_column)
            } else {
                (other.end_line, other.end_column)
            };
        Span {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// True when `start <= end` in document order, the invariant every span
    /// produced by the compiler must satisfy (§3 of the spec).
    pub fn is_well_formed(&self) -> bool {
        (self.start_line, self.start_column) <= (self.end_line, self.end_column)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{}",
            self.start_line, self.start_column, self.end_line, self.end_column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_is_one_character_wide() {
        let span = Span::at(3, 5);
        assert_eq!(span.start_column, 5);
        assert_eq!(span.end_column, 6);
    }

    #[test]
    fn merge_takes_min_start_max_end() {
        let a = Span::new(2, 1, 2, 5);
        let b = Span::new(1, 1, 3, 2);
        let merged = a.merge(b);
        assert_eq!(merged, Span::new(1, 1, 3, 2));
    }

    #[test]
    fn dummy_is_well_formed() {
        assert!(Span::DUMMY.is_well_formed());
    }

    #[test]
    fn display_format() {
        assert_eq!(Span::new(1, 1, 1, 8).to_string(), "1:1-1:8");
    }
}
