//! Typst source generation for itinerary documents.
//!
//! Every piece of itinerary text is emitted as a Typst string literal rather
//! than markup, so characters such as `#`, `*`, `_` or `$` coming from the
//! model are printed verbatim.

use std::fmt::Write;

use super::lines::{ItineraryLine, LineKind};

pub const BODY_SIZE_PT: u32 = 12;
pub const HEADER_SIZE_PT: u32 = 15;
pub const FOOTER_SIZE_PT: u32 = 8;

/// Escape special characters for Typst strings.
pub fn escape_typst_string(value: &str) -> String {
    value
        .replace('\\', r"\\")
        .replace('"', r#"\""#)
        .replace('\r', "")
        .replace('\n', r"\n")
        .replace('\t', r"\t")
}

/// Page setup shared by every page: bold centred title with a rule under it
/// and a centred "Page N" footer.
fn page_setup(title: &str) -> String {
    let title = escape_typst_string(title);
    format!(
        r#"#set document(title: "{title}")
#set page(
  paper: "a4",
  margin: (top: 32mm, bottom: 22mm, x: 10mm),
  header: [
    #align(center, text(size: {HEADER_SIZE_PT}pt, weight: "bold", "{title}"))
    #line(length: 100%, stroke: 0.6pt)
  ],
  footer: context align(
    center,
    text(size: {FOOTER_SIZE_PT}pt, style: "italic", "Page " + str(counter(page).get().first())),
  ),
)
#set text(size: {BODY_SIZE_PT}pt)
#set par(justify: false)
"#
    )
}

fn render_line(line: &ItineraryLine) -> String {
    if line.text.trim().is_empty() {
        return "#v(1em)".to_string();
    }

    let text = escape_typst_string(&line.text);
    match line.kind {
        LineKind::Heading => format!(r#"#block(text(weight: "bold", "{text}"))"#),
        LineKind::BudgetNote => format!(r#"#block(text(style: "italic", "{text}"))"#),
        LineKind::Body => format!(r#"#block(text("{text}"))"#),
    }
}

/// Complete Typst source for a document titled `title` holding `lines`.
pub fn render_source(title: &str, lines: &[ItineraryLine]) -> String {
    let mut source = page_setup(title);
    source.push('\n');
    for line in lines {
        // writing to a String cannot fail
        let _ = writeln!(source, "{}", render_line(line));
    }
    source
}
