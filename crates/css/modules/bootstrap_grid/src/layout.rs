//! Column class generation.
//!
//! Turns a [`ColumnRequest`] into the span and offset classes consumed by the
//! grid stylesheet, in breakpoint order.

use crate::config::GridConfig;
use crate::error::{GridError, GridResult};
use crate::placement::place_in_row;
use crate::types::{ClassToken, ColumnRequest};

/// Computes grid classes for a fixed grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnClassGenerator {
    config: GridConfig,
}

impl ColumnClassGenerator {
    /// Create a generator for `config`.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] when the configuration is invalid.
    pub fn new(config: GridConfig) -> GridResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a generator for a grid of `total_columns`.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] when `total_columns` is zero.
    pub fn with_columns(total_columns: u32) -> GridResult<Self> {
        Self::new(GridConfig::new(total_columns)?)
    }

    /// The grid configuration in use.
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// Compute the class tokens for `request`.
    ///
    /// Each requested breakpoint yields its span token. With a row context,
    /// the first item of a row also gets an offset token when the offset is
    /// non-zero. Once any offset token has been emitted, every later
    /// breakpoint in the same call emits one too, even for a zero offset.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidArgument`] for a zero span, or for a span
    /// wider than the grid when a row context is present. Nothing is returned
    /// on error.
    pub fn col_class_tokens(&self, request: &ColumnRequest) -> GridResult<Vec<ClassToken>> {
        self.config.validate()?;
        for (breakpoint, span) in request.spans() {
            if span == 0 {
                return Err(GridError::invalid(
                    breakpoint.as_str(),
                    "span must be positive",
                ));
            }
        }

        let mut tokens = Vec::with_capacity(8);
        let mut offset_emitted = false;

        for (breakpoint, span) in request.spans() {
            tokens.push(ClassToken::Span { breakpoint, span });

            let columns = match request.row {
                Some(row) => place_in_row(self.config.total_columns, span, row)
                    .map_err(|err| match err {
                        GridError::InvalidArgument {
                            parameter: "span",
                            message,
                        } => GridError::InvalidArgument {
                            parameter: breakpoint.as_str(),
                            message,
                        },
                        other => other,
                    })?
                    .offset_columns(),
                None => 0,
            };

            if columns != 0 || offset_emitted {
                tokens.push(ClassToken::Offset {
                    breakpoint,
                    columns,
                });
                offset_emitted = true;
            }
        }

        Ok(tokens)
    }

    /// Compute the space separated class string for `request`.
    ///
    /// # Errors
    /// See [`ColumnClassGenerator::col_class_tokens`].
    pub fn col_class(&self, request: &ColumnRequest) -> GridResult<String> {
        let tokens = self.col_class_tokens(request)?;
        Ok(join_tokens(&tokens))
    }

    /// Class strings for every item of a row context of `item_count` items.
    ///
    /// # Errors
    /// See [`ColumnClassGenerator::col_class_tokens`].
    pub fn row_classes(&self, request: &ColumnRequest, item_count: usize) -> GridResult<Vec<String>> {
        (0..item_count)
            .map(|index| self.col_class(&request.in_row(Some(item_count), Some(index))))
            .collect()
    }
}

/// Join tokens with single spaces.
pub fn join_tokens(tokens: &[ClassToken]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-shot form of [`ColumnClassGenerator::col_class`].
///
/// # Errors
/// Returns [`GridError::InvalidArgument`] when `total_columns` is zero or a
/// requested span is invalid.
pub fn generate_column_classes(total_columns: u32, request: &ColumnRequest) -> GridResult<String> {
    ColumnClassGenerator::with_columns(total_columns)?.col_class(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RowContext;

    fn classes(total_columns: u32, request: &ColumnRequest) -> String {
        generate_column_classes(total_columns, request)
            .ok()
            .unwrap_or_default()
    }

    /// The default request is a full width `xs` column.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_default_request() {
        assert_eq!(classes(12, &ColumnRequest::default()), "col-xs-12");
    }

    /// No breakpoints give an empty class string.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_empty_request() {
        let result = generate_column_classes(12, &ColumnRequest::empty());
        assert_eq!(result.ok().as_deref(), Some(""));
    }

    /// Tokens follow breakpoint order.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_breakpoint_order() {
        let request = ColumnRequest::default()
            .lg(Some(3))
            .sm(Some(6))
            .md(Some(4));
        assert_eq!(classes(12, &request), "col-xs-12 col-sm-6 col-md-4 col-lg-3");
    }

    /// Centering offsets only appear with a row context.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_offsets_need_row_context() {
        let request = ColumnRequest::default().xs(Some(5));
        assert_eq!(classes(12, &request), "col-xs-5");
        assert_eq!(classes(12, &request.in_row(Some(1), None)), "col-xs-5");
        assert_eq!(
            classes(12, &request.in_row(Some(2), Some(0))),
            "col-xs-5 col-xs-offset-1"
        );
    }

    /// Once an offset was emitted, later breakpoints emit one as well.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_offset_is_sticky_across_breakpoints() {
        // xs: 12 % 5 = 2 -> offset 1; sm: 6 divides 12 and the row is full -> 0
        let request = ColumnRequest {
            xs: Some(5),
            sm: Some(6),
            md: None,
            lg: None,
            row: Some(RowContext::new(2, 0)),
        };
        assert_eq!(
            classes(12, &request),
            "col-xs-5 col-xs-offset-1 col-sm-6 col-sm-offset-0"
        );

        // A zero offset before the first non-zero one is still omitted.
        let reversed = ColumnRequest {
            xs: Some(6),
            sm: Some(5),
            md: None,
            lg: None,
            row: Some(RowContext::new(2, 0)),
        };
        assert_eq!(classes(12, &reversed), "col-xs-6 col-sm-5 col-sm-offset-1");
    }

    /// Zero spans fail even without a row context.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_zero_span_fails() {
        let request = ColumnRequest::default().md(Some(0));
        let err = generate_column_classes(12, &request).err();
        assert_eq!(err.map(|found| found.parameter()), Some("md"));
    }

    /// A span wider than the grid is only an error inside a row.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_oversized_span() {
        let request = ColumnRequest::default().xs(Some(16));
        assert_eq!(classes(12, &request), "col-xs-16");

        let in_row = request.in_row(Some(3), Some(0));
        let err = generate_column_classes(12, &in_row).err();
        assert_eq!(err.map(|found| found.parameter()), Some("xs"));
    }

    /// Every item of a row gets its own class string.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_row_classes() {
        let generator = ColumnClassGenerator::default();
        let request = ColumnRequest::default().xs(Some(4));
        let rows = generator.row_classes(&request, 5).ok().unwrap_or_default();
        assert_eq!(
            rows,
            vec![
                "col-xs-4",
                "col-xs-4",
                "col-xs-4",
                "col-xs-4 col-xs-offset-2",
                "col-xs-4",
            ]
        );
    }
}
