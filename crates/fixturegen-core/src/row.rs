//! Random fixture row generation
//!
//! A [`RowTemplate`] holds the base values drawn once per row; [`RowTemplate::expand`]
//! turns it into the 15-field object actually written to disk
//! (5 base fields × 3 suffixed repeats).

use rand::Rng;
use serde_json::{Map, Value, json};

/// Inclusive upper bound for the `int` field (lower bound is 0).
pub const INT_MAX: i64 = 10_000;

/// Inclusive lower bound for the `long_string` unit repeat count.
pub const REPEAT_MIN: usize = 10;

/// Inclusive upper bound for the `long_string` unit repeat count.
pub const REPEAT_MAX: usize = 50;

/// How many suffixed copies of each base field the expanded row carries.
pub const FIELD_REPEATS: u32 = 3;

/// The base values drawn once per row, before expansion.
///
/// Constructing one by hand (instead of via [`RowTemplate::sample`]) is the
/// seam for deterministic tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTemplate {
    pub int: i64,
    pub float: f64,
    pub repeat_count: usize,
    pub boolean: bool,
}

impl RowTemplate {
    /// Draw a fresh template from `rng`.
    ///
    /// Both integer ranges are inclusive on both ends; the float is the
    /// standard `[0, 1)` draw.
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            int: rng.gen_range(0..=INT_MAX),
            float: rng.r#gen(),
            repeat_count: rng.gen_range(REPEAT_MIN..=REPEAT_MAX),
            boolean: rng.gen_bool(0.5),
        }
    }

    /// `"Short String {int}"`
    pub fn short_string(&self) -> String {
        format!("Short String {}", self.int)
    }

    /// `"Long String {int} "` repeated `repeat_count` times.
    ///
    /// The unit already ends in a space, so there is no separator beyond it.
    pub fn long_string(&self) -> String {
        format!("Long String {} ", self.int).repeat(self.repeat_count)
    }

    /// Expand into the emitted object: for each base field, three keys
    /// `{field}_1` .. `{field}_3` in field-major insertion order.
    ///
    /// Numbers and booleans are copied verbatim across repeats; string
    /// values get a `"{repeat}: "` prefix, so the three copies of a string
    /// field differ only in that prefix.
    pub fn expand(&self) -> Map<String, Value> {
        let base: [(&str, Value); 5] = [
            ("int", json!(self.int)),
            ("float", json!(self.float)),
            ("short_string", Value::String(self.short_string())),
            ("long_string", Value::String(self.long_string())),
            ("boolean", Value::Bool(self.boolean)),
        ];

        let mut row = Map::new();
        for (name, value) in base {
            for repeat in 1..=FIELD_REPEATS {
                let emitted = match &value {
                    Value::String(s) => Value::String(format!("{repeat}: {s}")),
                    other => other.clone(),
                };
                row.insert(format!("{name}_{repeat}"), emitted);
            }
        }
        row
    }
}

/// Sample and expand one row. This is the single leaf operation the
/// fixture writer invokes per output row.
pub fn generate_row(rng: &mut impl Rng) -> Value {
    Value::Object(RowTemplate::sample(rng).expand())
}
