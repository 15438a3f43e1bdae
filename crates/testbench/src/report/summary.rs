//! Report-wide totals.

use serde::Serialize;

use super::model::ComplexityInput;

/// Aggregate metrics across every file in the input.
///
/// Built only from the per-file `summary` blocks; function lists are not
/// re-counted. Sums saturate at `u64::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub files: usize,
    pub functions: u64,
    pub cyclomatic: u64,
    pub cognitive: u64,
    pub max_cyclomatic: u64,
    pub max_cognitive: u64,
    pub avg_cyclomatic: f64,
    pub avg_cognitive: f64,
}

impl Totals {
    pub fn from_input(input: &ComplexityInput) -> Self {
        let mut totals = Totals {
            files: input.files.len(),
            ..Default::default()
        };

        for file in &input.files {
            let s = &file.summary;
            totals.functions = totals.functions.saturating_add(s.total_functions);
            totals.cyclomatic = totals.cyclomatic.saturating_add(s.total_cyclomatic_complexity);
            totals.cognitive = totals.cognitive.saturating_add(s.total_cognitive_complexity);
            totals.max_cyclomatic = totals.max_cyclomatic.max(s.max_cyclomatic_complexity);
            totals.max_cognitive = totals.max_cognitive.max(s.max_cognitive_complexity);
        }

        if totals.functions > 0 {
            totals.avg_cyclomatic = totals.cyclomatic as f64 / totals.functions as f64;
            totals.avg_cognitive = totals.cognitive as f64 / totals.functions as f64;
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ComplexityInput {
        ComplexityInput::from_json(
            r#"{"files": [
                {"filePath": "a", "summary": {
                    "totalFunctions": 3, "totalCyclomaticComplexity": 9,
                    "totalCognitiveComplexity": 4, "maxCyclomaticComplexity": 6,
                    "maxCognitiveComplexity": 3}},
                {"filePath": "b", "summary": {
                    "totalFunctions": 1, "totalCyclomaticComplexity": 2,
                    "totalCognitiveComplexity": 5, "maxCyclomaticComplexity": 2,
                    "maxCognitiveComplexity": 5}},
                {"filePath": "c"}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_sums_and_maxima() {
        let totals = Totals::from_input(&input());
        assert_eq!(totals.files, 3);
        assert_eq!(totals.functions, 4);
        assert_eq!(totals.cyclomatic, 11);
        assert_eq!(totals.cognitive, 9);
        assert_eq!(totals.max_cyclomatic, 6);
        assert_eq!(totals.max_cognitive, 5);
        assert_eq!(totals.avg_cyclomatic, 2.75);
        assert_eq!(totals.avg_cognitive, 2.25);
    }

    #[test]
    fn test_empty_input_has_zero_averages() {
        let totals = Totals::from_input(&ComplexityInput::default());
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.avg_cyclomatic, 0.0);
    }

    #[test]
    fn test_sums_saturate() {
        let input = ComplexityInput::from_json(
            r#"{"files": [
                {"filePath": "a", "summary": {
                    "totalFunctions": 18446744073709551615,
                    "totalCyclomaticComplexity": 18446744073709551614,
                    "maxCyclomaticComplexity": 18446744073709551615}},
                {"filePath": "b", "summary": {
                    "totalFunctions": 1, "totalCyclomaticComplexity": 5,
                    "totalCognitiveComplexity": 2}}
            ]}"#,
        )
        .unwrap();

        let totals = Totals::from_input(&input);
        assert_eq!(totals.functions, u64::MAX);
        assert_eq!(totals.cyclomatic, u64::MAX);
        assert_eq!(totals.cognitive, 2);
        assert_eq!(totals.max_cyclomatic, u64::MAX);
        assert_eq!(totals.avg_cyclomatic, 1.0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(Totals::from_input(&input()), Totals::from_input(&input()));
    }
}
