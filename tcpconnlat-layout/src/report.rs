use std::fmt::Write;

use tcpconnlat_common::FieldLayout;

// Column widths are part of the report surface; parsers rely on the field
// order and names, the widths only have to stay consistent.
const NAME_WIDTH: usize = 12;
const OFFSET_WIDTH: usize = 3;
const SEPARATOR_WIDTH: usize = 50;

/// Renders the layout report for a record of `total_size` bytes whose
/// fields are given in declaration order.
pub fn render(total_size: usize, fields: &[FieldLayout]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Struct event layout (total size = {} bytes):", total_size);
    let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    for field in fields {
        let _ = writeln!(
            out,
            "{:<name$} offset={:<offset$} size={}",
            field.name,
            field.offset,
            field.size,
            name = NAME_WIDTH,
            offset = OFFSET_WIDTH,
        );
    }
    out
}
