//! Tabular data integration tests
//!
//! Each test writes its own fixture files into a temporary directory and
//! drives the frame API end to end: load, transform, write, reload.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use serde_json::json;

use opskit::tabular::{render_chart, summarize, ChartKind, DataFormat, Frame};
use opskit::OpsError;

const CSV_FIXTURE: &str = "\
name,department,salary
alice,eng,90000
bob,eng,85000
carol,sales,70000
dave,sales,72000
";

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

mod loading_tests {
    use super::*;

    #[test]
    fn test_csv_loads_with_inferred_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "people.csv", CSV_FIXTURE);

        let frame = Frame::from_path(&path).unwrap();
        assert_eq!(frame.columns(), &["name", "department", "salary"]);
        assert_eq!(frame.len(), 4);
        assert_eq!(frame.rows()[0][2], json!(90000));
    }

    #[test]
    fn test_json_array_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "people.json",
            r#"[{"name": "alice", "salary": 90000}, {"name": "bob", "salary": 85000}]"#,
        );

        let frame = Frame::from_path(&path).unwrap();
        assert_eq!(frame.columns(), &["name", "salary"]);
        assert_eq!(frame.len(), 2);
    }

    #[test]
    fn test_json_lines_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(
            &dir,
            "people.jsonl",
            "{\"name\": \"alice\"}\n{\"name\": \"bob\"}\n",
        );

        let frame = Frame::from_path(&path).unwrap();
        assert_eq!(frame.len(), 2);
    }

    #[test]
    fn test_mismatched_row_width_is_rejected() {
        let result = Frame::from_parts(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![json!(1)]],
        );
        assert!(matches!(result, Err(OpsError::InvalidInput(_))));
    }
}

mod conversion_tests {
    use super::*;

    #[test]
    fn test_csv_to_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(&dir, "people.csv", CSV_FIXTURE);
        let output = dir.path().join("people.json");

        let frame = Frame::from_path(&input).unwrap();
        frame.write_to(&output, DataFormat::Json).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let first: serde_json::Value =
            serde_json::from_str(written.lines().next().unwrap()).unwrap();
        assert_eq!(first["name"], json!("alice"));
        assert_eq!(first["salary"], json!(90000));
        assert_eq!(written.lines().count(), 4);
    }

    #[test]
    fn test_round_trip_through_csv_preserves_frame() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(&dir, "people.csv", CSV_FIXTURE);
        let output = dir.path().join("copy.csv");

        let frame = Frame::from_path(&input).unwrap();
        frame.write_to(&output, DataFormat::Csv).unwrap();

        let reloaded = Frame::from_path(&output).unwrap();
        assert_eq!(reloaded, frame);
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_fixture(&dir, "people.csv", CSV_FIXTURE);
        let output = dir.path().join("people.yaml");

        Frame::from_path(&input)
            .unwrap()
            .write_to(&output, DataFormat::Yaml)
            .unwrap();

        let parsed: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_yaml::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[2]["name"], json!("carol"));
    }

    #[test]
    fn test_unsupported_format_name_is_rejected() {
        let result = "excel".parse::<DataFormat>();
        assert!(matches!(
            result,
            Err(OpsError::Unsupported { what: "output format", .. })
        ));
    }
}

mod filter_tests {
    use super::*;

    #[test]
    fn test_filter_keeps_matching_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "people.csv", CSV_FIXTURE);

        let frame = Frame::from_path(&path).unwrap();
        let filtered = frame.filter_eq("department", "eng").unwrap();

        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .rows()
            .iter()
            .all(|row| row[1] == json!("eng")));
    }

    #[test]
    fn test_filter_compares_numbers_by_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "people.csv", CSV_FIXTURE);

        let frame = Frame::from_path(&path).unwrap();
        let filtered = frame.filter_eq("salary", "90000").unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows()[0][0], json!("alice"));
    }

    #[test]
    fn test_filter_on_missing_column_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "people.csv", CSV_FIXTURE);

        let frame = Frame::from_path(&path).unwrap();
        let result = frame.filter_eq("location", "remote");
        assert!(
            matches!(result, Err(OpsError::ColumnNotFound(column)) if column == "location")
        );
    }
}

mod summary_tests {
    use super::*;

    #[test]
    fn test_summary_covers_numeric_columns_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(&dir, "people.csv", CSV_FIXTURE);

        let frame = Frame::from_path(&path).unwrap();
        let summaries = summarize(&frame);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].column, "salary");
        assert_eq!(summaries[0].count, 4);
    }

    #[test]
    fn test_summary_statistics_are_exact() {
        let frame = Frame::from_parts(
            vec!["v".to_string()],
            vec![vec![json!(2)], vec![json!(4)], vec![json!(6)]],
        )
        .unwrap();

        let summaries = summarize(&frame);
        assert_eq!(summaries[0].count, 3);
        assert_eq!(summaries[0].mean, 4.0);
        assert_eq!(summaries[0].std, 2.0);
        assert_eq!(summaries[0].min, 2.0);
        assert_eq!(summaries[0].max, 6.0);
    }

    #[test]
    fn test_nulls_are_ignored_in_summaries() {
        let frame = Frame::from_parts(
            vec!["v".to_string()],
            vec![vec![json!(10)], vec![serde_json::Value::Null], vec![json!(20)]],
        )
        .unwrap();

        let summaries = summarize(&frame);
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[0].mean, 15.0);
    }

    #[test]
    fn test_all_text_frame_has_no_summaries() {
        let frame = Frame::from_parts(
            vec!["word".to_string()],
            vec![vec![json!("alpha")], vec![json!("beta")]],
        )
        .unwrap();
        assert!(summarize(&frame).is_empty());
    }
}

mod merge_tests {
    use super::*;

    #[test]
    fn test_inner_join_on_key_column() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_fixture(&dir, "left.csv", "id,name\n1,alice\n2,bob\n3,carol\n");
        let right = write_fixture(&dir, "right.csv", "id,score\n1,10\n3,30\n");

        let merged = Frame::from_path(&left)
            .unwrap()
            .merge(&Frame::from_path(&right).unwrap(), "id")
            .unwrap();

        assert_eq!(merged.columns(), &["id", "name", "score"]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.rows()[0], vec![json!(1), json!("alice"), json!(10)]);
        assert_eq!(merged.rows()[1], vec![json!(3), json!("carol"), json!(30)]);
    }

    #[test]
    fn test_colliding_column_gets_right_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_fixture(&dir, "left.csv", "id,name\n1,alice\n");
        let right = write_fixture(&dir, "right.csv", "id,name\n1,alicia\n");

        let merged = Frame::from_path(&left)
            .unwrap()
            .merge(&Frame::from_path(&right).unwrap(), "id")
            .unwrap();

        assert_eq!(merged.columns(), &["id", "name", "name_right"]);
        assert_eq!(merged.rows()[0][2], json!("alicia"));
    }

    #[test]
    fn test_merge_on_missing_key_errors() {
        let dir = tempfile::tempdir().unwrap();
        let left = write_fixture(&dir, "left.csv", "id,name\n1,alice\n");
        let right = write_fixture(&dir, "right.csv", "key,score\n1,10\n");

        let result = Frame::from_path(&left)
            .unwrap()
            .merge(&Frame::from_path(&right).unwrap(), "id");
        assert!(matches!(result, Err(OpsError::ColumnNotFound(_))));
    }
}

mod chart_tests {
    use super::*;

    fn numeric_frame() -> Frame {
        Frame::from_parts(
            vec!["day".to_string(), "requests".to_string()],
            vec![
                vec![json!(1), json!(120)],
                vec![json!(2), json!(340)],
                vec![json!(3), json!(210)],
            ],
        )
        .unwrap()
    }

    fn assert_svg(path: &Path) {
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"), "not an SVG file: {path:?}");
    }

    #[test]
    fn test_line_chart_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("chart.svg");
        render_chart(&numeric_frame(), "day", "requests", ChartKind::Line, &output).unwrap();
        assert_svg(&output);
    }

    #[test]
    fn test_scatter_chart_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("chart.svg");
        render_chart(
            &numeric_frame(),
            "day",
            "requests",
            ChartKind::Scatter,
            &output,
        )
        .unwrap();
        assert_svg(&output);
    }

    #[test]
    fn test_bar_chart_accepts_text_labels() {
        let dir = tempfile::tempdir().unwrap();
        let frame = Frame::from_parts(
            vec!["region".to_string(), "total".to_string()],
            vec![
                vec![json!("east"), json!(41)],
                vec![json!("west"), json!(57)],
            ],
        )
        .unwrap();

        let output = dir.path().join("chart.svg");
        render_chart(&frame, "region", "total", ChartKind::Bar, &output).unwrap();
        assert_svg(&output);
    }

    #[test]
    fn test_line_chart_rejects_text_axis() {
        let dir = tempfile::tempdir().unwrap();
        let frame = Frame::from_parts(
            vec!["region".to_string(), "total".to_string()],
            vec![vec![json!("east"), json!(41)]],
        )
        .unwrap();

        let output = dir.path().join("chart.svg");
        let result = render_chart(&frame, "region", "total", ChartKind::Line, &output);
        assert!(matches!(result, Err(OpsError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_chart_kind_is_rejected() {
        let result = "pie".parse::<ChartKind>();
        assert!(matches!(
            result,
            Err(OpsError::Unsupported { what: "chart type", .. })
        ));
    }
}
