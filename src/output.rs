//! JSON output for inferred outlines.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::DocumentOutline;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an outline record to JSON.
pub fn to_json(outline: &DocumentOutline, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(outline),
        JsonFormat::Compact => serde_json::to_string(outline),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Write an outline record to any writer, with a trailing newline.
pub fn write_json<W: Write>(
    outline: &DocumentOutline,
    writer: &mut W,
    format: JsonFormat,
) -> Result<()> {
    let json = to_json(outline, format)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{HeadingLevel, OutlineEntry};

    fn sample() -> DocumentOutline {
        let mut outline = DocumentOutline::empty("Test");
        outline
            .outline
            .push(OutlineEntry::new(HeadingLevel::H1, "Chapter 1", 1));
        outline
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Chapter 1"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert_eq!(
            json,
            r#"{"title":"Test","outline":[{"level":"H1","text":"Chapter 1","page":1}]}"#
        );
    }

    #[test]
    fn test_write_json_appends_newline() {
        let mut buf = Vec::new();
        write_json(&sample(), &mut buf, JsonFormat::Compact).unwrap();
        assert!(buf.ends_with(b"}\n"));
    }
}
