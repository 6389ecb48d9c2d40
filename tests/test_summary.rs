mod common;

use common::*;

#[test]
fn empty_match_set_sums_to_zero() {
    let summary = NutritionSummary::from_records(&[]);
    assert_eq!(summary.total_calories, 0.0);
    assert_eq!(summary.total_protein_g, 0.0);
    assert_eq!(summary.total_fat_g, 0.0);
    assert_eq!(summary.total_carbs_g, 0.0);
}

#[test]
fn totals_add_up() {
    let summary = NutritionSummary::from_records(&sample_records());
    assert_eq!(summary.total_calories, 182.0);
    assert!((summary.total_protein_g - 3.0).abs() < 1e-9);
    assert!((summary.total_fat_g - 0.5).abs() < 1e-9);
    assert!((summary.total_carbs_g - 42.0).abs() < 1e-9);
}

#[test]
fn summary_text_uses_the_fixed_four_line_format() {
    let (text, _) = summarize(&sample_records());
    assert_eq!(
        text,
        "Total Calories: 182 kcal\nProtein: 3.0 g\nFat: 0.5 g\nCarbohydrates: 42.0 g"
    );
}

#[test]
fn breakdown_percentages_sum_to_100() {
    let (_, chart) = summarize(&sample_records());
    let total: f64 = chart.slices.iter().map(|slice| slice.percent).sum();
    assert!((total - 100.0).abs() < 0.1);
}

#[test]
fn breakdown_reflects_macro_masses() {
    let (_, chart) = summarize(&sample_records());
    // protein 3.0g, fat 0.5g, carbs 42.0g of a 45.5g macro mass
    assert_eq!(chart.slices[0].label, "Protein");
    assert!((chart.slices[0].percent - 3.0 / 45.5 * 100.0).abs() < 1e-6);
    assert!((chart.slices[1].percent - 0.5 / 45.5 * 100.0).abs() < 1e-6);
    assert!((chart.slices[2].percent - 42.0 / 45.5 * 100.0).abs() < 1e-6);
}

#[test]
fn all_zero_totals_produce_an_empty_chart_without_dividing() {
    let (text, chart) = summarize(&[]);
    assert!(chart.is_empty());
    for slice in &chart.slices {
        assert_eq!(slice.percent, 0.0);
        assert!(slice.percent.is_finite());
    }
    assert!(text.starts_with("Total Calories: 0 kcal"));
}

#[test]
fn zero_calorie_rows_still_chart_their_macros() {
    let records = vec![record("tea", 0.0, 0.0, 0.0, 0.5)];
    let (_, chart) = summarize(&records);
    assert!(!chart.is_empty());
    assert!((chart.slices[2].percent - 100.0).abs() < 1e-6);
}
