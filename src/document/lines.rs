//! Line model for itinerary text.
//!
//! The model's answer is treated as a flat list of lines; each line is tagged
//! independently so the template only has to map a tag to a text style.

/// Rupee sign as it arrives when UTF-8 text was decoded as Windows-1252.
const MISENCODED_RUPEE: &str = "â‚¹";
const RUPEE: &str = "₹";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `Day N: ...` lines, rendered bold.
    Heading,
    /// Lines carrying `Budget:`, rendered italic.
    BudgetNote,
    /// Everything else.
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryLine {
    pub kind: LineKind,
    pub text: String,
}

/// Replace rupee signs (mis-encoded or not) with `Rs.`.
pub fn normalize_currency(text: &str) -> String {
    text.replace(MISENCODED_RUPEE, "Rs.").replace(RUPEE, "Rs.")
}

/// Budget lines win over the `Day ` prefix so "Day 2 Budget: ..." is italic.
pub fn classify_line(line: &str) -> LineKind {
    if line.contains("Budget:") {
        LineKind::BudgetNote
    } else if line.starts_with("Day ") {
        LineKind::Heading
    } else {
        LineKind::Body
    }
}

/// Normalize `text` and split it into tagged lines.
pub fn classify_lines(text: &str) -> Vec<ItineraryLine> {
    normalize_currency(text)
        .split('\n')
        .map(|line| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            ItineraryLine {
                kind: classify_line(line),
                text: line.to_string(),
            }
        })
        .collect()
}
