//! Parse and format YAML frontmatter blocks.

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{Result, frontmatter_parse_failed};

const DELIMITER: &str = "---";
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Frontmatter mapping plus the markdown body that follows it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
    pub data: Mapping,
    pub body: String,
}

/// Split content into a YAML mapping and body.
///
/// Content without an opening `---` line (or without a closing one) has no
/// frontmatter: the mapping is empty and the whole content is the body.
/// Blank lines between the closing delimiter and the body are dropped.
/// A leading byte order mark is ignored. `path` is only used for error
/// reporting.
pub fn parse_frontmatter(content: &str, path: &Path) -> Result<Frontmatter> {
    let content = content.strip_prefix(BYTE_ORDER_MARK).unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();
    if lines.first().map(|l| l.trim()) != Some(DELIMITER) {
        return Ok(Frontmatter {
            data: Mapping::new(),
            body: content.to_string(),
        });
    }

    let Some(end_idx) = lines[1..].iter().position(|l| l.trim() == DELIMITER) else {
        return Ok(Frontmatter {
            data: Mapping::new(),
            body: content.to_string(),
        });
    };
    let end_idx = end_idx + 1;

    let yaml = lines[1..end_idx].join("\n");
    let body = lines[end_idx + 1..]
        .iter()
        .skip_while(|l| l.trim().is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    if yaml.trim().is_empty() {
        return Ok(Frontmatter {
            data: Mapping::new(),
            body,
        });
    }

    let value: Value = serde_yaml::from_str(&yaml)
        .map_err(|e| frontmatter_parse_failed(path.display().to_string(), e.to_string()))?;
    let data = match value {
        Value::Mapping(m) => m,
        Value::Null => Mapping::new(),
        _ => {
            return Err(frontmatter_parse_failed(
                path.display().to_string(),
                "frontmatter is not a mapping",
            ));
        }
    };

    Ok(Frontmatter { data, body })
}

/// Render a mapping and body as a markdown document with frontmatter.
///
/// An empty mapping renders the body alone.
pub fn format_frontmatter(data: &Mapping, body: &str) -> String {
    if data.is_empty() {
        return body.to_string();
    }
    let yaml = serde_yaml::to_string(data).unwrap_or_else(|_| String::new());
    format!("{DELIMITER}\n{}\n{DELIMITER}\n\n{body}", yaml.trim_end())
}

fn lookup<'a>(data: &'a Mapping, key: &str) -> Option<&'a Value> {
    data.get(Value::String(key.to_string()))
}

/// Get a scalar value by key as a string.
pub fn get_str(data: &Mapping, key: &str) -> Option<String> {
    match lookup(data, key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Get a boolean by key; the strings `"true"` and `"false"` are accepted.
pub fn get_bool(data: &Mapping, key: &str) -> Option<bool> {
    match lookup(data, key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Get a list of strings by key.
///
/// Accepts a YAML sequence or a single string separated by commas and/or
/// whitespace (`allowed-tools: Read, Grep`).
pub fn get_str_list(data: &Mapping, key: &str) -> Option<Vec<String>> {
    match lookup(data, key)? {
        Value::Sequence(items) => Some(
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.trim().to_string()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .filter(|s| !s.is_empty())
                .collect(),
        ),
        Value::String(s) => Some(
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => None,
    }
}
