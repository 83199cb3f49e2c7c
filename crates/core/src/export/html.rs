//! Standalone HTML table report

use hostatlas_domain::constants::EXPORT_HEADERS;

use super::ExportRow;

pub(super) fn render(rows: &[ExportRow]) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Host Export</title>\n</head>\n<body>\n<h1>Host Export</h1>\n",
    );
    out.push_str(&format!("<p>{} hosts</p>\n<table>\n<thead><tr>", rows.len()));
    for header in EXPORT_HEADERS {
        out.push_str("<th>");
        out.push_str(&escape(header));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        out.push_str("<tr>");
        for cell in row.cells() {
            out.push_str("<td>");
            out.push_str(&escape(cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
