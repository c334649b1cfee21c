//! Minimal tag scanner for flat `<table>/<tr>/<td>/<th>` markup.
//!
//! Only row and cell boundaries matter. Any other element is dropped and its
//! text kept, so `<td><b>09:00</b></td>` yields `09:00`. Rows and cells close
//! implicitly when the next one opens, which covers hand-edited timelogs that
//! leave out `</td>` or `</tr>`.

use crate::models::row::Row;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)<!--.*?-->|<(/?)([A-Za-z][A-Za-z0-9]*)\b(?:"[^"]*"|'[^']*'|[^'">])*>"#)
        .expect("valid tag regex")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z]+);").expect("valid entity regex")
});

#[derive(Default)]
struct Scanner {
    rows: Vec<Row>,
    row: Option<Row>,
    cell: Option<String>,
}

impl Scanner {
    fn text(&mut self, s: &str) {
        if let Some(cell) = self.cell.as_mut() {
            cell.push_str(s);
        }
    }

    fn open_row(&mut self) {
        self.close_row();
        self.row = Some(Vec::new());
    }

    fn open_cell(&mut self) {
        self.close_cell();
        // a cell outside any <tr> still gets a row of its own
        if self.row.is_none() {
            self.row = Some(Vec::new());
        }
        self.cell = Some(String::new());
    }

    fn close_cell(&mut self) {
        if let Some(raw) = self.cell.take()
            && let Some(row) = self.row.as_mut()
        {
            row.push(decode_entities(&raw).trim().to_string());
        }
    }

    fn close_row(&mut self) {
        self.close_cell();
        if let Some(row) = self.row.take() {
            self.rows.push(row);
        }
    }

    fn tag(&mut self, closing: bool, name: &str) {
        match (closing, name.to_ascii_lowercase().as_str()) {
            (false, "tr") => self.open_row(),
            (false, "td" | "th") => self.open_cell(),
            (true, "td" | "th") => self.close_cell(),
            (true, "tr") => self.close_row(),
            (_, "thead" | "tbody" | "tfoot") | (true, "table") => self.close_row(),
            _ => {}
        }
    }
}

/// Parse every row of `markup` into trimmed cell texts, in document order.
/// A `<tr>` without cells yields an empty row.
pub fn parse_rows(markup: &str) -> Vec<Row> {
    let mut scanner = Scanner::default();
    let mut last = 0;

    for caps in TAG_RE.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        scanner.text(&markup[last..whole.start()]);
        last = whole.end();

        if let Some(name) = caps.get(2) {
            let closing = caps.get(1).is_some_and(|m| !m.as_str().is_empty());
            scanner.tag(closing, name.as_str());
        }
    }
    scanner.text(&markup[last..]);
    scanner.close_row();

    tracing::debug!(rows = scanner.rows.len(), "table rows parsed");
    scanner.rows
}

/// Decode the handful of character references timelog exports contain.
/// Unknown named entities are left as written.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    ENTITY_RE
        .replace_all(s, |caps: &Captures| {
            let body = &caps[1];
            let decoded = match body {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                "nbsp" => Some('\u{a0}'),
                _ => numeric_reference(body),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn numeric_reference(body: &str) -> Option<char> {
    let digits = body.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}
