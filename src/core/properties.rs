//! `.properties` file parsing.
//!
//! Reads the line-oriented `key=value` format used by Gradle projects for
//! `key.properties` and `local.properties`:
//!
//! - `#` and `!` start comment lines; blank lines are ignored
//! - `=`, `:` or whitespace separates key from value
//! - a trailing odd run of backslashes continues the logical line
//! - `\t \n \r \f \uXXXX` escapes are decoded; any other `\c` yields `c`
//! - later duplicates replace earlier ones

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::core::types::PropertyKey;
use crate::error::PropertiesError;

/// A parsed properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: BTreeMap<PropertyKey, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from text.
    ///
    /// # Errors
    ///
    /// Returns `PropertiesError::MalformedEscape` for a bad `\u` escape.
    pub fn parse(input: &str) -> Result<Self, PropertiesError> {
        let mut entries = BTreeMap::new();

        for (line, logical) in logical_lines(input) {
            let (key, value) = split_entry(&logical);
            let key = unescape(key, line)?;
            let value = unescape(value, line)?;
            entries.insert(key, value);
        }

        Ok(Self { entries })
    }

    /// Read and parse a properties file.
    ///
    /// Files that are not valid UTF-8 are decoded as ISO-8859-1.
    ///
    /// # Errors
    ///
    /// Returns `PropertiesError::Read` if the file cannot be read, or
    /// `PropertiesError::MalformedEscape` if it cannot be parsed.
    pub fn read(path: &Path) -> Result<Self, PropertiesError> {
        debug!(path = %path.display(), "reading properties");

        let bytes = std::fs::read(path).map_err(|source| PropertiesError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
        };

        let props = Self::parse(&text)?;
        debug!(entries = props.len(), "properties parsed");
        Ok(props)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Properties {
    type Err = PropertiesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes entries in key order, escaped so that parsing the output yields
/// the same map.
impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{}={}", escape(key, true), escape(value, false))?;
        }
        Ok(())
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join natural lines into logical lines, dropping comments and blanks.
///
/// Yields the 1-based line number where each logical line starts.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut natural = normalized.split('\n').enumerate();
    let mut out = Vec::new();

    while let Some((idx, line)) = natural.next() {
        let first = line.trim_start_matches(is_blank);
        if first.is_empty() || first.starts_with('#') || first.starts_with('!') {
            continue;
        }

        let mut logical = String::new();
        let mut current = first;
        loop {
            if !continues(current) {
                logical.push_str(current);
                break;
            }
            logical.push_str(&current[..current.len() - 1]);
            match natural.next() {
                Some((_, next)) => current = next.trim_start_matches(is_blank),
                None => break,
            }
        }

        out.push((idx + 1, logical));
    }

    out
}

/// A line continues when it ends in an odd number of backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            key_end = i;
            break;
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(|c: char| c == '=' || c == ':') {
        rest = stripped.trim_start_matches(is_blank);
    }

    (key, rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out, line)?;
            out.push(c);
            continue;
        }

        let Some(escaped) = chars.next() else {
            break;
        };

        if escaped == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            let unit = if hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
                u16::from_str_radix(&hex, 16).ok()
            } else {
                None
            };
            match unit {
                Some(unit) => units.push(unit),
                None => {
                    return Err(PropertiesError::MalformedEscape {
                        line,
                        reason: format!("invalid \\u escape '\\u{}'", hex),
                    })
                }
            }
            continue;
        }

        flush_units(&mut units, &mut out, line)?;
        out.push(match escaped {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\x0c',
            other => other,
        });
    }

    flush_units(&mut units, &mut out, line)?;
    Ok(out)
}

/// Decode pending `\u` escapes, combining surrogate pairs.
fn flush_units(units: &mut Vec<u16>, out: &mut String, line: usize) -> Result<(), PropertiesError> {
    if units.is_empty() {
        return Ok(());
    }
    for decoded in char::decode_utf16(units.drain(..)) {
        let c = decoded.map_err(|e| PropertiesError::MalformedEscape {
            line,
            reason: format!("unpaired surrogate \\u{:04X}", e.unpaired_surrogate()),
        })?;
        out.push(c);
    }
    Ok(())
}

fn escape(s: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(s.len());

    for (i, c) in s.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }

    out
}
