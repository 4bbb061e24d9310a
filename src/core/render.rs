//! Markup fragments: tables, list items and the client info grid.

use crate::domain::model::{ClientInfo, MeasurementRow};
use std::borrow::Cow;

/// A row that can supply a cell for a named column.
pub trait TableRow {
    fn cell(&self, column: &str) -> Option<Cow<'_, str>>;
}

impl TableRow for MeasurementRow {
    fn cell(&self, column: &str) -> Option<Cow<'_, str>> {
        match column {
            "Area" => Some(Cow::Borrowed(&self.area)),
            "Measurement" => Some(Cow::Borrowed(&self.measurement)),
            "Notes" => Some(Cow::Borrowed(&self.notes)),
            _ => None,
        }
    }
}

/// Escapes the five markup-significant characters.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Renders fragments, interpolating text raw unless escaping is switched on.
#[derive(Debug, Clone, Copy, Default)]
pub struct FragmentRenderer {
    escape: bool,
}

impl FragmentRenderer {
    pub fn new(escape: bool) -> Self {
        Self { escape }
    }

    pub fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape {
            escape_html(value)
        } else {
            Cow::Borrowed(value)
        }
    }

    /// One header cell per column, one body row per input row. Missing cells
    /// are empty; no rows leaves an empty `<tbody>`.
    pub fn table<R: TableRow>(&self, rows: &[R], columns: &[&str]) -> String {
        let mut parts = vec!["<table><thead><tr>".to_string()];
        for column in columns {
            parts.push(format!("<th>{}</th>", self.text(column)));
        }
        parts.push("</tr></thead><tbody>".to_string());
        for row in rows {
            parts.push("<tr>".to_string());
            for column in columns {
                let cell = row.cell(column).unwrap_or_default();
                parts.push(format!("<td>{}</td>", self.text(&cell)));
            }
            parts.push("</tr>".to_string());
        }
        parts.push("</tbody></table>".to_string());
        parts.concat()
    }

    pub fn list_items<S: AsRef<str>>(&self, items: &[S]) -> String {
        items
            .iter()
            .map(|item| format!("<li>{}</li>", self.text(item.as_ref())))
            .collect()
    }

    pub fn info_grid(&self, info: &ClientInfo) -> String {
        format!(
            r#"
      <div class="info-grid">
        <div><strong>Name:</strong> {}</div>
        <div><strong>Height:</strong> {}</div>
        <div><strong>Weight:</strong> {}</div>
        <div><strong>Notes:</strong> {}</div>
      </div>
    "#,
            self.text(&info.name),
            self.text(&info.height),
            self.text(&info.weight),
            self.text(&info.notes),
        )
    }
}
