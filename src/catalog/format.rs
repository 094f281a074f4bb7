//! On-disk catalog format.
//!
//! A catalog file is UTF-8 text made of two-line blocks separated by a
//! blank line:
//!
//! ```text
//! msgid "⁰¹about.title"
//! msgstr "About"
//!
//! msgid "⁰²home.greeting"
//! msgstr ""
//! ```
//!
//! The `msgid` value carries the ordinal label concatenated in front of
//! the identifier; parsing strips it so ordinals never leak into message
//! identifiers. Quoted values carry no escape sequences; a translation
//! must not contain a double quote.

use std::collections::BTreeMap;

use super::ordinal;

/// A block the lenient parser could not make sense of. The load goes on
/// without it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Malformed {
    pub line_no: usize,
    pub line: String,
}

#[derive(Debug, Default)]
pub struct Parsed {
    pub entries: Vec<(String, String)>,
    pub malformed: Vec<Malformed>,
}

/// Parses catalog text into `(identifier, translation)` pairs, collecting
/// malformed blocks instead of failing.
pub fn parse(content: &str) -> Parsed {
    let mut parsed = Parsed::default();
    let mut lines = content.lines().enumerate().peekable();

    while let Some((idx, line)) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }
        let Some(raw_id) = quoted_value(line, "msgid") else {
            parsed.malformed.push(Malformed {
                line_no: idx + 1,
                line: line.to_string(),
            });
            continue;
        };
        let translation = lines
            .peek()
            .and_then(|&(_, next)| quoted_value(next, "msgstr"));
        let Some(translation) = translation else {
            // identifier without a translation line; the next line is
            // classified on its own
            parsed.malformed.push(Malformed {
                line_no: idx + 1,
                line: line.to_string(),
            });
            continue;
        };
        lines.next();

        let id = ordinal::strip(raw_id);
        if id.is_empty() {
            parsed.malformed.push(Malformed {
                line_no: idx + 1,
                line: line.to_string(),
            });
            continue;
        }
        parsed
            .entries
            .push((id.to_string(), translation.to_string()));
    }
    parsed
}

/// Extracts the quoted value of a `keyword "value"` line.
fn quoted_value<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.trim().strip_prefix(keyword)?;
    let rest = rest.trim_start();
    rest.strip_prefix('"')?.strip_suffix('"')
}

/// Renders the full catalog text: entries in key order, ordinal labels
/// prefixed, a blank line between consecutive blocks.
pub fn serialize(entries: &BTreeMap<String, String>) -> String {
    let total = entries.len();
    let mut out = String::new();
    for (rank, (id, translation)) in entries.iter().enumerate() {
        if rank > 0 {
            out.push('\n');
        }
        let label = ordinal::label(rank + 1, total);
        out.push_str("msgid \"");
        out.push_str(&label);
        out.push_str(id);
        out.push_str("\"\nmsgstr \"");
        out.push_str(translation);
        out.push_str("\"\n");
    }
    out
}
