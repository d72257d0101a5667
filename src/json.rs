//! JSON file reading and writing for converted tables.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::Formatter;

/// Pretty-printing formatter with 4-space indentation that writes objects
/// nested at or below `inline_depth` on a single line.
///
/// Level-up tables use this to keep each `{ "level": .., "move": .. }` pair
/// on its own line instead of spreading it over four.
#[derive(Debug, Clone)]
pub struct InlineFormatter {
    depth: usize,
    inline_depth: usize,
    has_value: bool,
}

impl InlineFormatter {
    const INDENT: &'static [u8] = b"    ";

    /// Plain pretty printing; nothing is inlined.
    pub fn pretty() -> Self {
        Self::inline_from(usize::MAX)
    }

    /// Inline every object or array opened at `depth` or deeper. The root
    /// value is at depth 1.
    pub fn inline_from(depth: usize) -> Self {
        Self {
            depth: 0,
            inline_depth: depth,
            has_value: false,
        }
    }

    fn inline(&self) -> bool {
        self.depth >= self.inline_depth
    }

    fn newline<W: ?Sized + io::Write>(&self, writer: &mut W, depth: usize) -> io::Result<()> {
        writer.write_all(b"\n")?;
        for _ in 0..depth {
            writer.write_all(Self::INDENT)?;
        }
        Ok(())
    }

    fn separator<W: ?Sized + io::Write>(&self, writer: &mut W, first: bool) -> io::Result<()> {
        if !first {
            writer.write_all(b",")?;
        }
        if self.inline() {
            writer.write_all(b" ")
        } else {
            self.newline(writer, self.depth)
        }
    }

    fn close<W: ?Sized + io::Write>(&mut self, writer: &mut W, bracket: &[u8]) -> io::Result<()> {
        let inline = self.inline();
        self.depth -= 1;
        if self.has_value {
            if inline {
                writer.write_all(b" ")?;
            } else {
                self.newline(writer, self.depth)?;
            }
        }
        writer.write_all(bracket)
    }
}

impl Formatter for InlineFormatter {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"[")
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"]")
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.separator(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.depth += 1;
        self.has_value = false;
        writer.write_all(b"{")
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.close(writer, b"}")
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.separator(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, _writer: &mut W) -> io::Result<()> {
        self.has_value = true;
        Ok(())
    }
}

/// Serialize `value` with the given formatter.
pub fn to_string<T: Serialize>(value: &T, formatter: InlineFormatter) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    String::from_utf8(buffer).context("Serialized JSON is not UTF-8")
}

/// Read and parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write bytes to `path`, creating missing parent directories.
pub fn write_output(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_matches_four_space_indent() {
        let value = json!({ "a": [1, 2], "b": { "c": "d" }, "e": [] });
        let text = to_string(&value, InlineFormatter::pretty()).unwrap();
        let expected = serde_json::to_string_pretty(&value)
            .unwrap()
            .replace("  ", "    ");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_inline_leaf_objects() {
        let value = json!({
            "Egg": [],
            "Bulbasaur": [
                { "level": 1, "move": "Tackle" },
                { "level": 3, "move": "Growl" }
            ]
        });
        let text = to_string(&value, InlineFormatter::inline_from(3)).unwrap();
        let expected = "{\n    \"Bulbasaur\": [\n        { \"level\": 1, \"move\": \"Tackle\" },\n        { \"level\": 3, \"move\": \"Growl\" }\n    ],\n    \"Egg\": []\n}";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_non_ascii_is_kept() {
        let text = to_string(&json!(["Flabébé"]), InlineFormatter::pretty()).unwrap();
        assert!(text.contains("Flabébé"));
    }
}
