use serde::Serialize;

use crate::cli::OutputFormat;

/// Render `value` as pretty JSON, or with `text` for the text format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, text: impl FnOnce(&T) -> String) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text(value)),
    }
}

/// Print `value` in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
    let rendered = render(value, format, text)?;
    println!("{rendered}");
    Ok(())
}
