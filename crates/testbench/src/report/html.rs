//! HTML rendering for complexity reports.

use chrono::NaiveDateTime;
use std::fmt::Write;

use super::model::{ComplexityInput, FileEntry, FileSummary};
use super::summary::Totals;

const TEMPLATE: &str = include_str!("templates/report.html");

/// Rendering knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Cyclomatic values above this are highlighted.
    pub cyclomatic_threshold: u64,
    /// Cognitive values above this are highlighted.
    pub cognitive_threshold: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cyclomatic_threshold: 5,
            cognitive_threshold: 3,
        }
    }
}

/// Render a self-contained HTML report.
///
/// Output depends only on the arguments, so the same input and timestamp give
/// byte-identical documents.
pub fn render(
    input: &ComplexityInput,
    totals: &Totals,
    options: &RenderOptions,
    generated: NaiveDateTime,
) -> String {
    let overall = overall_cards(totals);
    let sections: String = input
        .files
        .iter()
        .filter(|f| !f.functions.is_empty())
        .map(|f| file_section(f, options))
        .collect();

    // FILE_SECTIONS last: it is the only substitution carrying input text.
    TEMPLATE
        .replace("{{GENERATED}}", &generated.format("%Y-%m-%d %H:%M:%S").to_string())
        .replace("{{OVERALL_CARDS}}", &overall)
        .replace("{{FILE_SECTIONS}}", &sections)
}

fn card(title: &str, value: impl std::fmt::Display) -> String {
    format!(
        r#"<div class="summary-card"><div class="summary-title">{title}</div>{value}</div>"#
    )
}

fn overall_cards(totals: &Totals) -> String {
    [
        card("Total Files", totals.files),
        card("Total Functions", totals.functions),
        card("Total Cyclomatic Complexity", totals.cyclomatic),
        card("Total Cognitive Complexity", totals.cognitive),
        card("Max Cyclomatic Complexity", totals.max_cyclomatic),
        card("Max Cognitive Complexity", totals.max_cognitive),
        card(
            "Average Cyclomatic Complexity",
            format!("{:.2}", totals.avg_cyclomatic),
        ),
        card(
            "Average Cognitive Complexity",
            format!("{:.2}", totals.avg_cognitive),
        ),
    ]
    .join("\n")
}

fn file_cards(summary: &FileSummary) -> String {
    [
        card("Total Functions", summary.total_functions),
        card(
            "Total Cyclomatic Complexity",
            summary.total_cyclomatic_complexity,
        ),
        card(
            "Total Cognitive Complexity",
            summary.total_cognitive_complexity,
        ),
        card(
            "Max Cyclomatic Complexity",
            summary.max_cyclomatic_complexity,
        ),
        card("Max Cognitive Complexity", summary.max_cognitive_complexity),
        card(
            "Average Cyclomatic Complexity",
            format!("{:.2}", summary.average_cyclomatic_complexity),
        ),
        card(
            "Average Cognitive Complexity",
            format!("{:.2}", summary.average_cognitive_complexity),
        ),
    ]
    .join("\n")
}

fn file_section(file: &FileEntry, options: &RenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<h2>File: {}</h2>", escape_html(&file.file_path));
    let _ = writeln!(
        out,
        "<div class=\"file-summary\">\n{}\n</div>",
        file_cards(&file.summary)
    );
    out.push_str(
        "<table>\n<tr><th>#</th><th>Name</th><th>Signature</th><th>Line</th>\
         <th>Cyclomatic</th><th>Cognitive</th></tr>\n",
    );

    for (i, func) in file.functions.iter().enumerate() {
        let cyclomatic_class =
            highlight(func.cyclomatic_complexity, options.cyclomatic_threshold, "high-cyclomatic");
        let cognitive_class =
            highlight(func.cognitive_complexity, options.cognitive_threshold, "high-cognitive");
        let _ = writeln!(
            out,
            r#"<tr><td>{index}</td><td>{name}</td><td class="code">{signature}</td><td>{line}</td><td class="{cyclomatic_class}">{cyclomatic}</td><td class="{cognitive_class}">{cognitive}</td></tr>"#,
            index = i + 1,
            name = escape_html(&func.name),
            signature = escape_html(&func.signature),
            line = func.location.line,
            cyclomatic = func.cyclomatic_complexity,
            cognitive = func.cognitive_complexity,
        );
    }

    out.push_str("</table>\n");
    out
}

fn highlight(value: u64, threshold: u64, class: &'static str) -> &'static str {
    if value > threshold { class } else { "" }
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn generated() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 23)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn input() -> ComplexityInput {
        ComplexityInput::from_json(
            r#"{"files": [
                {"filePath": "Sources/App/routes.swift",
                 "summary": {"totalFunctions": 2, "totalCyclomaticComplexity": 8,
                             "totalCognitiveComplexity": 5, "maxCyclomaticComplexity": 6,
                             "maxCognitiveComplexity": 4, "averageCyclomaticComplexity": 4.0,
                             "averageCognitiveComplexity": 2.5},
                 "functions": [
                    {"name": "routes", "signature": "func routes(_ app: Application) throws",
                     "location": {"line": 12}, "cyclomaticComplexity": 6, "cognitiveComplexity": 4},
                    {"name": "boot", "signature": "func boot<T>(x: T)",
                     "location": {"line": 40}, "cyclomaticComplexity": 2, "cognitiveComplexity": 1}
                 ]},
                {"filePath": "Sources/App/empty.swift", "functions": []}
            ]}"#,
        )
        .unwrap()
    }

    fn render_default(input: &ComplexityInput) -> String {
        render(
            input,
            &Totals::from_input(input),
            &RenderOptions::default(),
            generated(),
        )
    }

    #[test]
    fn test_header_and_overall_summary() {
        let html = render_default(&input());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Complexity Report</title>"));
        assert!(html.contains("<p>Generated: 2025-12-23 09:30:00</p>"));
        assert!(html.contains(r#"<div class="summary-title">Total Files</div>2</div>"#));
        assert!(html.contains(r#"<div class="summary-title">Total Functions</div>2</div>"#));
        assert!(html.contains(
            r#"<div class="summary-title">Average Cyclomatic Complexity</div>4.00</div>"#
        ));
        assert!(html.contains(
            r#"<div class="summary-title">Average Cognitive Complexity</div>2.50</div>"#
        ));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_files_without_functions_are_skipped() {
        let html = render_default(&input());
        assert!(html.contains("<h2>File: Sources/App/routes.swift</h2>"));
        assert!(!html.contains("empty.swift"));
    }

    #[test]
    fn test_rows_are_numbered_and_highlighted() {
        let html = render_default(&input());
        assert!(html.contains(
            r#"<tr><td>1</td><td>routes</td><td class="code">func routes(_ app: Application) throws</td><td>12</td><td class="high-cyclomatic">6</td><td class="high-cognitive">4</td></tr>"#
        ));
        assert!(html.contains(r#"<tr><td>2</td><td>boot</td>"#));
        assert!(html.contains(r#"<td class="">2</td><td class="">1</td></tr>"#));
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let input = input();
        let options = RenderOptions {
            cyclomatic_threshold: 10,
            cognitive_threshold: 0,
        };
        let html = render(&input, &Totals::from_input(&input), &options, generated());
        assert!(!html.contains(r#"<td class="high-cyclomatic">"#));
        assert!(html.contains(r#"<td class="high-cognitive">1</td>"#));
    }

    #[test]
    fn test_input_text_is_escaped() {
        let html = render_default(&input());
        assert!(html.contains("func boot&lt;T&gt;(x: T)"));
        assert!(!html.contains("boot<T>"));
    }

    #[test]
    fn test_placeholder_in_input_is_not_expanded() {
        let input = ComplexityInput::from_json(
            r#"{"files": [{"filePath": "{{GENERATED}}",
                "functions": [{"name": "{{OVERALL_CARDS}}", "location": {"line": 1}}]}]}"#,
        )
        .unwrap();
        let html = render_default(&input);
        assert!(html.contains("<h2>File: {{GENERATED}}</h2>"));
        assert!(html.contains("<td>{{OVERALL_CARDS}}</td>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_default(&input()), render_default(&input()));
    }
}
