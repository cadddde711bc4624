//! Integration test covering a full generation run: five fixture files,
//! each an array of 50 schema-conforming rows.
//!
//! Run with: cargo test -p fixturegen-core --test generate_fixtures

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde_json::Value;

use fixturegen_core::{INT_MAX, REPEAT_MAX, REPEAT_MIN, fixture_filename, write_fixture};

const FILE_COUNT: u32 = 5;

fn generate_all(dir: &Path, seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    for index in 0..FILE_COUNT {
        write_fixture(dir, index, &mut rng).unwrap();
    }
}

/// Assert one expanded row against the full field schema.
fn assert_row_conforms(row: &Value) {
    let obj = row.as_object().unwrap();
    assert_eq!(obj.len(), 15, "expected 15 keys, got {:?}", obj.keys());

    let i = obj["int_1"].as_i64().unwrap();
    assert!((0..=INT_MAX).contains(&i));
    assert_eq!(obj["int_1"], obj["int_2"]);
    assert_eq!(obj["int_2"], obj["int_3"]);

    let f = obj["float_1"].as_f64().unwrap();
    assert!((0.0..1.0).contains(&f));
    assert_eq!(obj["float_1"], obj["float_2"]);
    assert_eq!(obj["float_2"], obj["float_3"]);

    assert!(obj["boolean_1"].is_boolean());
    assert_eq!(obj["boolean_1"], obj["boolean_2"]);
    assert_eq!(obj["boolean_2"], obj["boolean_3"]);

    for r in 1..=3u32 {
        let short = obj[&format!("short_string_{r}")].as_str().unwrap();
        assert_eq!(short, format!("{r}: Short String {i}"));
    }

    // Same unit count across the three long_string repeats, in [10, 50].
    let unit = format!("Long String {i} ");
    let mut counts = Vec::new();
    for r in 1..=3u32 {
        let long = obj[&format!("long_string_{r}")].as_str().unwrap();
        let body = long.strip_prefix(&format!("{r}: ")).unwrap();
        assert_eq!(body.len() % unit.len(), 0);
        let n = body.matches(&unit).count();
        assert_eq!(body.len(), unit.len() * n);
        counts.push(n);
    }
    assert_eq!(counts[0], counts[1]);
    assert_eq!(counts[1], counts[2]);
    assert!((REPEAT_MIN..=REPEAT_MAX).contains(&counts[0]));
}

#[test]
fn writes_five_conforming_fixture_files() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path(), 42);

    for index in 0..FILE_COUNT {
        let path = dir.path().join(fixture_filename(index));
        assert!(path.exists(), "missing {}", path.display());

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 50);

        for row in rows {
            assert_row_conforms(row);
        }
    }
}

#[test]
fn separate_runs_produce_different_content() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    generate_all(first.path(), 1);
    generate_all(second.path(), 2);

    let a = std::fs::read_to_string(first.path().join("f0.json")).unwrap();
    let b = std::fs::read_to_string(second.path().join("f0.json")).unwrap();
    assert_ne!(a, b);

    // Both still parse to well-formed arrays.
    assert!(serde_json::from_str::<Value>(&a).unwrap().is_array());
    assert!(serde_json::from_str::<Value>(&b).unwrap().is_array());
}
