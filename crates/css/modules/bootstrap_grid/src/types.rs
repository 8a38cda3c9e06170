//! Breakpoint, request and token type definitions.
//!
//! Class names follow the Bootstrap 3 grid system
//! <https://getbootstrap.com/docs/3.4/css/#grid>

use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

use crate::error::GridError;

/// Responsive breakpoint of the grid system.
///
/// Declaration order is the order tokens are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    /// Extra small devices (phones)
    Xs,
    /// Small devices (tablets)
    Sm,
    /// Medium devices (desktops)
    Md,
    /// Large devices (large desktops)
    Lg,
}

impl Breakpoint {
    /// All breakpoints in emission order.
    pub const ALL: [Self; 4] = [Self::Xs, Self::Sm, Self::Md, Self::Lg];

    /// Class infix used in `col-{bp}-*`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl Display for Breakpoint {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = GridError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|breakpoint| breakpoint.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| GridError::invalid("breakpoint", format!("unknown breakpoint `{value}`")))
    }
}

/// Position of an item inside a repeating grid of same-sized items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowContext {
    /// Total items laid out in the grid
    pub item_count: usize,
    /// Zero-based index of the current item
    pub index: usize,
}

impl RowContext {
    /// Create a row context.
    pub const fn new(item_count: usize, index: usize) -> Self {
        Self { item_count, index }
    }

    /// Build a row context only when both halves are known.
    ///
    /// A lone count or a lone index is treated as "no row context".
    pub fn from_parts(item_count: Option<usize>, index: Option<usize>) -> Option<Self> {
        Some(Self::new(item_count?, index?))
    }
}

/// Column spans requested per breakpoint, with optional row context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRequest {
    /// Span at `xs`
    pub xs: Option<u32>,
    /// Span at `sm`
    pub sm: Option<u32>,
    /// Span at `md`
    pub md: Option<u32>,
    /// Span at `lg`
    pub lg: Option<u32>,
    /// Row context enabling offset computation
    pub row: Option<RowContext>,
}

impl Default for ColumnRequest {
    /// Full width at `xs`, nothing else.
    fn default() -> Self {
        Self {
            xs: Some(12),
            sm: None,
            md: None,
            lg: None,
            row: None,
        }
    }
}

impl ColumnRequest {
    /// A request with no breakpoint set at all.
    pub const fn empty() -> Self {
        Self {
            xs: None,
            sm: None,
            md: None,
            lg: None,
            row: None,
        }
    }

    /// Set or clear the span for `xs`.
    #[must_use]
    pub const fn xs(mut self, span: Option<u32>) -> Self {
        self.xs = span;
        self
    }

    /// Set or clear the span for `sm`.
    #[must_use]
    pub const fn sm(mut self, span: Option<u32>) -> Self {
        self.sm = span;
        self
    }

    /// Set or clear the span for `md`.
    #[must_use]
    pub const fn md(mut self, span: Option<u32>) -> Self {
        self.md = span;
        self
    }

    /// Set or clear the span for `lg`.
    #[must_use]
    pub const fn lg(mut self, span: Option<u32>) -> Self {
        self.lg = span;
        self
    }

    /// Attach a row context; absent unless both parts are supplied.
    #[must_use]
    pub fn in_row(mut self, item_count: Option<usize>, index: Option<usize>) -> Self {
        self.row = RowContext::from_parts(item_count, index);
        self
    }

    /// Span requested at `breakpoint`.
    pub const fn span(&self, breakpoint: Breakpoint) -> Option<u32> {
        match breakpoint {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
        }
    }

    /// Set the span for `breakpoint`.
    pub fn set_span(&mut self, breakpoint: Breakpoint, span: Option<u32>) {
        let slot = match breakpoint {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
        };
        *slot = span;
    }

    /// Requested `(breakpoint, span)` pairs in emission order.
    pub fn spans(&self) -> impl Iterator<Item = (Breakpoint, u32)> + '_ {
        Breakpoint::ALL
            .into_iter()
            .filter_map(move |breakpoint| self.span(breakpoint).map(|span| (breakpoint, span)))
    }
}

/// One CSS class produced by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassToken {
    /// `col-{bp}-{span}`
    Span {
        /// Breakpoint
        breakpoint: Breakpoint,
        /// Columns occupied
        span: u32,
    },
    /// `col-{bp}-offset-{columns}`
    Offset {
        /// Breakpoint
        breakpoint: Breakpoint,
        /// Empty leading columns
        columns: u64,
    },
}

impl Display for ClassToken {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Span { breakpoint, span } => write!(formatter, "col-{breakpoint}-{span}"),
            Self::Offset {
                breakpoint,
                columns,
            } => write!(formatter, "col-{breakpoint}-offset-{columns}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Breakpoints parse from their class infix.
    ///
    /// # Panics
    /// Panics if parsing fails or assertions fail.
    #[test]
    fn test_breakpoint_parse() {
        assert_eq!("md".parse::<Breakpoint>().ok(), Some(Breakpoint::Md));
        assert_eq!(" LG ".parse::<Breakpoint>().ok(), Some(Breakpoint::Lg));
        assert!("xl".parse::<Breakpoint>().is_err());
    }

    /// A lone count or index never yields a row context.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_row_context_requires_both_parts() {
        assert_eq!(RowContext::from_parts(Some(4), None), None);
        assert_eq!(RowContext::from_parts(None, Some(0)), None);
        assert_eq!(
            RowContext::from_parts(Some(4), Some(1)),
            Some(RowContext::new(4, 1))
        );
    }

    /// Spans are listed in breakpoint order, skipping unset ones.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_spans_order() {
        let request = ColumnRequest::empty().lg(Some(3)).xs(Some(6));
        let spans: Vec<_> = request.spans().collect();
        assert_eq!(spans, vec![(Breakpoint::Xs, 6), (Breakpoint::Lg, 3)]);
    }

    /// Tokens render as Bootstrap class names.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_token_display() {
        let span = ClassToken::Span {
            breakpoint: Breakpoint::Sm,
            span: 6,
        };
        let offset = ClassToken::Offset {
            breakpoint: Breakpoint::Sm,
            columns: 3,
        };
        assert_eq!(span.to_string(), "col-sm-6");
        assert_eq!(offset.to_string(), "col-sm-offset-3");
    }
}
