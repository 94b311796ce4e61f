use crate::classification_service::ClassificationResult;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Console summary of one classification, as printed by `intellisort classify`.
pub fn render_report(image_name: &str, result: &ClassificationResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "Image: {}", image_name);
    let _ = writeln!(out, "Category: {}", result.top_category.to_uppercase());
    let _ = writeln!(out, "Confidence: {:.1}%", result.confidence * 100.0);
    let _ = writeln!(
        out,
        "Disposal: {} → {} Bin",
        result.disposal.action, result.disposal.bin_color
    );
    let _ = writeln!(out, "{}\n", rule);

    let _ = writeln!(out, "Top {} predictions:", result.top_k.len());
    for (i, prediction) in result.top_k.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {:<12} {:>5.1}%",
            i + 1,
            prediction.label,
            prediction.confidence * 100.0
        );
    }

    out
}
