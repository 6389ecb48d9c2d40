mod common;

use std::path::Path;

use common::*;

#[test]
fn empty_labels_match_nothing() {
    let table = sample_table();
    let matched = table.match_labels::<&str>(&[]);
    assert!(matched.is_empty());
}

#[test]
fn duplicate_detections_collapse_to_table_rows() {
    let table = sample_table();
    let matched = table.match_labels(&["apple", "rice", "apple"]);
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].item_name, "apple");
    assert_eq!(matched[1].item_name, "rice");
}

#[test]
fn unknown_labels_are_dropped_silently() {
    let table = sample_table();
    let matched = table.match_labels(&["durian", "rice"]);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].item_name, "rice");
}

#[test]
fn table_order_is_preserved_over_input_order() {
    let matched = sample_table().match_labels(&["rice", "apple"]);
    assert_eq!(matched[0].item_name, "apple");
    assert_eq!(matched[1].item_name, "rice");
}

#[test]
fn loads_a_well_formed_table() -> anyhow::Result<()> {
    let file = write_table(TABLE_CSV)?;
    let table = NutritionTable::load(file.path())?;
    assert_eq!(table.len(), 2);
    assert_eq!(table.records()[0].item_name, "apple");
    Ok(())
}

#[test]
fn missing_table_fails_fast() {
    let err = NutritionTable::load(Path::new("does/not/exist.csv")).unwrap_err();
    assert!(matches!(err, TableLoadError::Open { .. }));
}

#[test]
fn malformed_table_fails_fast() -> anyhow::Result<()> {
    let file = write_table(
        "item_name,calories,protein_g,fat_g,carbs_g\napple,not-a-number,0.3,0.2,14\n",
    )?;
    let err = NutritionTable::load(file.path()).unwrap_err();
    assert!(matches!(err, TableLoadError::Malformed { .. }));
    Ok(())
}

#[test]
fn negative_values_are_rejected() -> anyhow::Result<()> {
    let file =
        write_table("item_name,calories,protein_g,fat_g,carbs_g\napple,52,-0.3,0.2,14\n")?;
    let err = NutritionTable::load(file.path()).unwrap_err();
    assert!(matches!(err, TableLoadError::NegativeValue { column: "protein_g", .. }));
    Ok(())
}

#[test]
fn duplicate_items_are_rejected() -> anyhow::Result<()> {
    let file = write_table(
        "item_name,calories,protein_g,fat_g,carbs_g\napple,52,0.3,0.2,14\napple,52,0.3,0.2,14\n",
    )?;
    let err = NutritionTable::load(file.path()).unwrap_err();
    assert!(matches!(err, TableLoadError::DuplicateItem { .. }));
    Ok(())
}
