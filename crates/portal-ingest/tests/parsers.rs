//! Parser behaviour across formats.

use portal_ingest::{DocumentFormat, parse_csv, parse_named, parse_text};
use portal_model::{GenericRow, ScalarValue};
use proptest::prelude::*;

#[test]
fn json_rows_preserve_document_key_order() {
    let doc = parse_named(
        "placements.json",
        r#"[{"type": "Off-Campus", "company": "Acme", "studentsPlaced": 3}]"#,
    );
    assert_eq!(doc.format, DocumentFormat::Json);
    assert_eq!(doc.rows[0].keys(), vec!["type", "company", "studentsPlaced"]);
    assert_eq!(
        doc.rows[0].value("studentsPlaced"),
        Some(ScalarValue::Number(3.0))
    );
}

#[test]
fn text_documents_merge_into_one_row() {
    let doc = parse_named(
        "school.doc",
        "School Name: School of Technology\nLocation = Visakhapatnam\n- ignored line\n",
    );
    assert_eq!(doc.len(), 1);
    assert_eq!(
        doc.rows[0].value("schoolname"),
        Some(ScalarValue::text("School of Technology"))
    );
    assert_eq!(
        doc.rows[0].value("location"),
        Some(ScalarValue::text("Visakhapatnam"))
    );
}

#[test]
fn repeated_text_keys_keep_the_last_value() {
    let row = parse_text("email: a@x.edu\nemail: b@x.edu").expect("row");
    assert_eq!(row.get("email"), Some("b@x.edu"));
    assert_eq!(row.len(), 1);
}

proptest! {
    #[test]
    fn csv_yields_one_row_per_data_line(
        values in proptest::collection::vec("[A-Za-z0-9][A-Za-z0-9 ]{0,8}[A-Za-z0-9]", 1..6)
    ) {
        let mut text = String::from("designation,count\n");
        for value in &values {
            text.push_str(&format!("{value},1\n"));
        }
        let rows = parse_csv(&text);
        prop_assert_eq!(rows.len(), values.len());
        for (row, value) in rows.iter().zip(&values) {
            prop_assert_eq!(row.get("designation"), Some(value.as_str()));
        }
    }

    #[test]
    fn text_pairs_round_trip(key in "[a-z]{1,10}", value in "[A-Za-z0-9][A-Za-z0-9 .]{0,20}[A-Za-z0-9.]") {
        let row = parse_text(&format!("{key}: {value}")).expect("row");
        prop_assert_eq!(row.get(&key), Some(value.as_str()));
    }
}
