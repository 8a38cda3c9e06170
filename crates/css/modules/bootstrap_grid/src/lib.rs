//! Bootstrap grid helpers
//! Grid system: <https://getbootstrap.com/docs/3.4/css/#grid>
//!
//! Computes the `col-{bp}-{n}` and `col-{bp}-offset-{n}` classes for items of
//! a responsive grid, centering short rows, and renders Bootstrap alerts.

// Errors
mod error;
pub use error::{GridError, GridResult};

// Grid configuration
mod config;
pub use config::{DEFAULT_TOTAL_COLUMNS, GridConfig};

// Breakpoints, requests and class tokens
mod types;
pub use types::{Breakpoint, ClassToken, ColumnRequest, RowContext};

// Row placement arithmetic
mod placement;
pub use placement::{RowPlacement, place_in_row, round_half_away_from_zero};

// Class generation
mod layout;
pub use layout::{ColumnClassGenerator, generate_column_classes, join_tokens};

// Alert markup
mod alert;
pub use alert::{
    AlertOptions, AlertStore, DEFAULT_CLOSE_TEXT, MessageType, make_key, render_alert,
};
