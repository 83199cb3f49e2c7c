//! RFC 4180 CSV rendering

use hostatlas_domain::constants::EXPORT_HEADERS;

use super::ExportRow;

pub(super) fn render(rows: &[ExportRow]) -> String {
    let mut out = String::new();
    write_record(&mut out, EXPORT_HEADERS);
    for row in rows {
        write_record(&mut out, row.cells());
    }
    out
}

fn write_record(out: &mut String, cells: [&str; 6]) {
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        push_field(out, cell);
    }
    out.push_str("\r\n");
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
