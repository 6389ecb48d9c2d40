use crate::nutrition::NutritionRecord;

/// Aggregate calorie and macronutrient totals over a matched set of
/// nutrition records.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutritionSummary {
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_fat_g: f64,
    pub total_carbs_g: f64,
}

impl NutritionSummary {
    /// Sum calories and macros across the matched rows. An empty match set
    /// sums to zero.
    pub fn from_records(records: &[NutritionRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.total_calories += record.calories;
            summary.total_protein_g += record.protein_g;
            summary.total_fat_g += record.fat_g;
            summary.total_carbs_g += record.carbs_g;
        }
        summary
    }

    /// The fixed four-line text block: calories to the nearest kcal, macros
    /// to one decimal.
    pub fn text(&self) -> String {
        format!(
            "Total Calories: {:.0} kcal\nProtein: {:.1} g\nFat: {:.1} g\nCarbohydrates: {:.1} g",
            self.total_calories, self.total_protein_g, self.total_fat_g, self.total_carbs_g
        )
    }

    fn macro_mass(&self) -> f64 {
        self.total_protein_g + self.total_fat_g + self.total_carbs_g
    }

    /// Relative proportion of the three macronutrient masses.
    ///
    /// All-zero totals yield zeroed slices with [`ChartData::is_empty`] set
    /// rather than dividing by zero.
    pub fn breakdown(&self) -> ChartData {
        let total = self.macro_mass();
        let slice = |label, grams: f64| ChartSlice {
            label,
            grams,
            percent: if total > 0.0 { grams / total * 100.0 } else { 0.0 },
        };
        ChartData {
            slices: [
                slice("Protein", self.total_protein_g),
                slice("Fat", self.total_fat_g),
                slice("Carbs", self.total_carbs_g),
            ],
        }
    }
}

/// One slice of the macronutrient pie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub grams: f64,
    pub percent: f64,
}

/// Three-slice proportional macronutrient breakdown for charting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartData {
    pub slices: [ChartSlice; 3],
}

impl ChartData {
    /// True when every slice is zero. Shells show a "no data" state instead
    /// of a degenerate chart.
    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(|slice| slice.grams <= 0.0)
    }
}

/// Summarize a matched set: the four-line text block plus the chart
/// breakdown. A deterministic pure function of its input.
pub fn summarize(matched: &[NutritionRecord]) -> (String, ChartData) {
    let summary = NutritionSummary::from_records(matched);
    (summary.text(), summary.breakdown())
}
