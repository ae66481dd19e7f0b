//! Text rendering of reports as rounded, center-aligned tables.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::{models::Report, Result};

const TOP: (&str, &str, &str) = ("╭", "┬", "╮");
const MIDDLE: (&str, &str, &str) = ("├", "┼", "┤");
const BOTTOM: (&str, &str, &str) = ("╰", "┴", "╯");
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

/// Render `report` as a boxed table. Data rows are separated by a rule;
/// header labels take the report kind's color when `color` is set.
pub fn render_table(report: &Report, color: bool) -> String {
    let cells: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();

    let widths: Vec<usize> = report
        .header
        .iter()
        .enumerate()
        .map(|(i, label)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|s| s.width())
                .chain(std::iter::once(label.width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&rule(&widths, TOP));

    let header_color = report.kind.header_color();
    let header: Vec<String> = report
        .header
        .iter()
        .zip(&widths)
        .map(|(label, &w)| {
            let (left, right) = centre_padding(label, w);
            let text = if color {
                label.color(header_color).to_string()
            } else {
                label.to_string()
            };
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
        })
        .collect();
    out.push_str(&line(&header));

    for row in &cells {
        out.push_str(&rule(&widths, MIDDLE));
        let padded: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| {
                let (left, right) = centre_padding(cell, w);
                format!("{}{}{}", " ".repeat(left), cell, " ".repeat(right))
            })
            .collect();
        out.push_str(&line(&padded));
    }

    out.push_str(&rule(&widths, BOTTOM));
    out
}

/// Pretty-printed JSON form of `report`.
pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn centre_padding(text: &str, width: usize) -> (usize, usize) {
    let pad = width.saturating_sub(text.width());
    let left = pad / 2;
    (left, pad - left)
}

fn rule(widths: &[usize], (left, joint, right): (&str, &str, &str)) -> String {
    let segments: Vec<String> = widths.iter().map(|w| HORIZONTAL.repeat(w + 2)).collect();
    format!("{}{}{}\n", left, segments.join(joint), right)
}

fn line(cells: &[String]) -> String {
    let inner: Vec<String> = cells.iter().map(|c| format!(" {} ", c)).collect();
    format!("{}{}{}\n", VERTICAL, inner.join(VERTICAL), VERTICAL)
}
