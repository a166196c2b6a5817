//! Ordered, case-sensitive INI document model.
//!
//! qBittorrent's configuration format distinguishes `Port` from `port` and
//! uses backslash-separated key names (`WebUI\Port`) as opaque strings, so
//! sections and entries live in plain vectors keyed by exact string
//! equality. Insertion order is the serialization order.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// A single named section holding ordered key/value entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfSection {
    name: String,
    entries: Vec<(String, String)>,
}

impl ConfSection {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Section name, compared case-sensitively.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value for `key`, if present. Keys are compared case-sensitively.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Ordered view of the section's entries.
    #[must_use]
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Overwrite `key` in place when it exists, otherwise append it.
    fn set(&mut self, key: &str, value: &str) {
        if let Some((_, existing)) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing == key)
        {
            value.clone_into(existing);
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }
}

/// The full in-memory representation of a configuration file: an ordered
/// set of sections that round-trips untouched content unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfDocument {
    sections: Vec<ConfSection>,
}

impl ConfDocument {
    /// Create an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// Parse `input` into a document.
    ///
    /// Blank lines and `#`/`;` comment lines are skipped. A key/value line
    /// before any section header, or a non-empty line without a `=`
    /// delimiter, is a parse error carrying the one-based line number.
    /// `path` is only used for error context.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the input is malformed.
    pub fn parse(path: &Path, input: &str) -> ConfigResult<Self> {
        let mut document = Self::new();
        let mut current: Option<usize> = None;
        for (index, raw_line) in input.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(header) = line.strip_prefix('[') {
                let Some(name) = header.strip_suffix(']') else {
                    return Err(ConfigError::parse(path, index + 1, "unterminated_header"));
                };
                if name.is_empty() {
                    return Err(ConfigError::parse(path, index + 1, "empty_header"));
                }
                // A repeated header reopens the existing section.
                let position = document
                    .sections
                    .iter()
                    .position(|section| section.name == name)
                    .unwrap_or_else(|| {
                        document.sections.push(ConfSection::new(name));
                        document.sections.len() - 1
                    });
                current = Some(position);
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(ConfigError::parse(path, index + 1, "missing_delimiter"));
            };
            let key = key.trim_end();
            if key.is_empty() {
                return Err(ConfigError::parse(path, index + 1, "empty_key"));
            }
            let Some(position) = current else {
                return Err(ConfigError::parse(path, index + 1, "entry_before_header"));
            };
            document.sections[position].set(key, value.trim_start());
        }
        Ok(document)
    }

    /// Section named `name`, if present.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&ConfSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    /// Value stored at (`section`, `key`), if present.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|section| section.get(key))
    }

    /// Ordered view of the document's sections.
    #[must_use]
    pub fn sections(&self) -> impl Iterator<Item = &ConfSection> {
        self.sections.iter()
    }

    /// Set (`section`, `key`) to `value`.
    ///
    /// Existing keys are overwritten in place without reordering; new keys
    /// append to their section; a missing section is appended to the end of
    /// the document.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        if let Some(existing) = self
            .sections
            .iter_mut()
            .find(|existing| existing.name == section)
        {
            existing.set(key, value);
            return;
        }
        let mut created = ConfSection::new(section);
        created.set(key, value);
        self.sections.push(created);
    }

    /// Serialize the document: bracketed headers, `key=value` lines with no
    /// whitespace around the delimiter, one blank line after each section.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = String::new();
        for section in &self.sections {
            let _ = writeln!(output, "[{}]", section.name);
            for (key, value) in &section.entries {
                let _ = writeln!(output, "{key}={value}");
            }
            output.push('\n');
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn conf_path() -> PathBuf {
        PathBuf::from("qBittorrent.conf")
    }

    #[test]
    fn parses_sections_and_entries_in_order() -> anyhow::Result<()> {
        let input = "[Preferences]\nWebUI\\Port=8080\nWebUI\\Username=admin\n\n[BitTorrent]\nSession\\Interface=eth0\n";
        let document = ConfDocument::parse(&conf_path(), input)?;
        let names: Vec<&str> = document.sections().map(ConfSection::name).collect();
        assert_eq!(names, ["Preferences", "BitTorrent"]);
        assert_eq!(document.get("Preferences", "WebUI\\Port"), Some("8080"));
        assert_eq!(document.get("BitTorrent", "Session\\Interface"), Some("eth0"));
        Ok(())
    }

    #[test]
    fn keys_are_case_sensitive() -> anyhow::Result<()> {
        let mut document = ConfDocument::new();
        document.set("Preferences", "Port", "1");
        document.set("Preferences", "port", "2");
        let rendered = document.render();
        assert!(rendered.contains("Port=1"));
        assert!(rendered.contains("port=2"));

        let reloaded = ConfDocument::parse(&conf_path(), &rendered)?;
        assert_eq!(reloaded.get("Preferences", "Port"), Some("1"));
        assert_eq!(reloaded.get("Preferences", "port"), Some("2"));
        Ok(())
    }

    #[test]
    fn overwrite_keeps_position_and_single_entry() {
        let mut document = ConfDocument::new();
        document.set("S", "a", "1");
        document.set("S", "k", "1");
        document.set("S", "z", "1");
        document.set("S", "k", "2");

        let section = document.section("S").expect("section should exist");
        let entries: Vec<(&str, &str)> = section.entries().collect();
        assert_eq!(entries, [("a", "1"), ("k", "2"), ("z", "1")]);
    }

    #[test]
    fn new_sections_append_to_the_end() {
        let mut document = ConfDocument::new();
        document.set("A", "k", "v");
        document.set("B", "k", "v");
        document.set("C", "k", "v");
        let names: Vec<&str> = document.sections().map(ConfSection::name).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn render_uses_unpadded_delimiter() {
        let mut document = ConfDocument::new();
        document.set("S", "k", "v");
        let rendered = document.render();
        assert!(rendered.contains("k=v"));
        assert!(!rendered.contains("k = v"));
    }

    #[test]
    fn values_may_contain_the_delimiter() -> anyhow::Result<()> {
        let document = ConfDocument::parse(&conf_path(), "[S]\nkey=a=b=c\n")?;
        assert_eq!(document.get("S", "key"), Some("a=b=c"));
        Ok(())
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() -> anyhow::Result<()> {
        let input = "# leading comment\n\n[S]\n; section comment\nk=v\n";
        let document = ConfDocument::parse(&conf_path(), input)?;
        assert_eq!(document.get("S", "k"), Some("v"));
        Ok(())
    }

    #[test]
    fn repeated_header_reopens_the_existing_section() -> anyhow::Result<()> {
        let input = "[S]\na=1\n[T]\nb=2\n[S]\nc=3\n";
        let document = ConfDocument::parse(&conf_path(), input)?;
        let names: Vec<&str> = document.sections().map(ConfSection::name).collect();
        assert_eq!(names, ["S", "T"]);
        assert_eq!(document.get("S", "a"), Some("1"));
        assert_eq!(document.get("S", "c"), Some("3"));
        assert_eq!(document.get("T", "b"), Some("2"));
        Ok(())
    }

    #[test]
    fn entry_before_header_is_a_parse_error() {
        let result = ConfDocument::parse(&conf_path(), "k=v\n");
        assert!(matches!(
            result,
            Err(ConfigError::Parse {
                line: 1,
                reason: "entry_before_header",
                ..
            })
        ));
    }

    #[test]
    fn line_without_delimiter_is_a_parse_error() {
        let result = ConfDocument::parse(&conf_path(), "[S]\nnot a pair\n");
        assert!(matches!(
            result,
            Err(ConfigError::Parse {
                line: 2,
                reason: "missing_delimiter",
                ..
            })
        ));
    }

    #[test]
    fn unterminated_header_is_a_parse_error() {
        let result = ConfDocument::parse(&conf_path(), "[S\n");
        assert!(matches!(
            result,
            Err(ConfigError::Parse {
                line: 1,
                reason: "unterminated_header",
                ..
            })
        ));
    }

    #[test]
    fn round_trip_preserves_order_and_content() -> anyhow::Result<()> {
        let mut document = ConfDocument::new();
        document.set("A", "one", "1");
        document.set("A", "two", "2");
        document.set("B", "three", "3");
        document.set("C", "k", "v");

        let first = ConfDocument::parse(&conf_path(), &document.render())?;
        let second = ConfDocument::parse(&conf_path(), &first.render())?;
        assert_eq!(first, second);
        assert_eq!(first, document);
        Ok(())
    }
}
