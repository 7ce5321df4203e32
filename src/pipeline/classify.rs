use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Fallback label for state codes outside every rule set
pub const OTHER_REGION: &str = "Other";

/// Ordered first-match-wins rules mapping state codes to region labels.
/// Membership is tested against static code sets, not ranges.
static REGION_RULES: Lazy<Vec<(HashSet<&'static str>, &'static str)>> = Lazy::new(|| {
    vec![
        (
            ["SP", "RJ", "MG", "ES"].into_iter().collect(),
            "Southeast",
        ),
        (["PR", "SC", "RS"].into_iter().collect(), "South"),
        (
            ["BA", "SE", "AL", "PE", "PB", "RN", "CE", "PI", "MA"]
                .into_iter()
                .collect(),
            "Northeast",
        ),
        (["MT", "MS", "GO", "DF"].into_iter().collect(), "Midwest"),
        (
            ["AM", "RR", "AP", "PA", "TO", "RO", "AC"].into_iter().collect(),
            "North",
        ),
    ]
});

/// Pure mapping from a customer's state code to a region label
pub struct RegionClassifier;

impl RegionClassifier {
    /// Total over all string inputs; unknown or empty codes land in "Other".
    pub fn classify(&self, state: &str) -> &'static str {
        for (codes, label) in REGION_RULES.iter() {
            if codes.contains(state) {
                return label;
            }
        }
        OTHER_REGION
    }
}
