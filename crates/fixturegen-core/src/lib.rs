//! fixturegen-core: row generation and fixture file writing
//!
//! This crate provides the two operations behind the `fixturegen` binary:
//! generating one expanded fixture row (5 base fields × 3 suffixed repeats)
//! and writing 50 such rows to an indented JSON fixture file.

pub mod row;
pub mod writer;

pub use row::{FIELD_REPEATS, INT_MAX, REPEAT_MAX, REPEAT_MIN, RowTemplate, generate_row};
pub use writer::{FixtureSummary, ROWS_PER_FILE, WriteError, fixture_filename, write_fixture};
