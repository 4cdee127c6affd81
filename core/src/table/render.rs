use crate::prelude::TableResult;
use crate::table::sine::SineTable;
use std::io::Write;

/// C element type of the emitted array.
pub const ELEMENT_TYPE: &str = "uint8_t";
/// Identifier the downstream synthesizer expects.
pub const ARRAY_NAME: &str = "sine_lookup";

/// Renders the table as a single-line C array initializer.
///
/// Output has the shape `uint8_t sine_lookup[200] = {v0,v1,...,v199};\n`.
pub fn render(table: &SineTable) -> String {
    let body = table
        .iter()
        .map(|sample| sample.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{} {}[{}] = {{{}}};\n",
        ELEMENT_TYPE,
        ARRAY_NAME,
        table.len(),
        body
    )
}

/// Writes the rendered initializer to `out` and returns the number of bytes
/// written.
pub fn write_initializer<W: Write>(table: &SineTable, out: &mut W) -> TableResult<usize> {
    let text = render(table);
    out.write_all(text.as_bytes())?;
    Ok(text.len())
}
