use crate::core::maybe::Maybe;
use crate::domain::value::Key;
use crate::utils::error::{MaybeError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const SEGMENT_PATTERN: &str =
    r#"^(?:(?P<dot>\.)?(?P<field>[A-Za-z_][A-Za-z0-9_]*)|\[(?P<index>-?\d+)\]|\["(?P<quoted>(?:[^"\\]|\\.)*)"\])"#;

fn segment_regex() -> std::result::Result<&'static Regex, &'static regex::Error> {
    static SEGMENT: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    SEGMENT.get_or_init(|| Regex::new(SEGMENT_PATTERN)).as_ref()
}

/// A parsed lookup chain such as `user.profile.name`, `tags[0]` or `meta["created.at"]`.
///
/// Every segment is applied as an item lookup, so field names also reach attributes on
/// objects through the name fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    raw: String,
    segments: Vec<Key>,
}

impl Path {
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = |reason: String| MaybeError::InvalidPath {
            path: path.to_string(),
            reason,
        };

        if path.trim().is_empty() {
            return Err(invalid("path is empty".to_string()));
        }

        let re = segment_regex().map_err(|e| invalid(e.to_string()))?;
        let mut segments = Vec::new();
        let mut pos = 0;

        while pos < path.len() {
            let caps = re
                .captures(&path[pos..])
                .ok_or_else(|| invalid(format!("unexpected character at offset {}", pos)))?;

            if let Some(field) = caps.name("field") {
                let dotted = caps.name("dot").is_some();
                // 第一段不可有前導點，其後的欄位必須以點分隔
                if dotted == (pos == 0) {
                    return Err(invalid(format!("misplaced field separator at offset {}", pos)));
                }
                segments.push(Key::Name(field.as_str().to_string()));
            } else if let Some(index) = caps.name("index") {
                let index = index
                    .as_str()
                    .parse::<i64>()
                    .map_err(|e| invalid(format!("bad index at offset {}: {}", pos, e)))?;
                segments.push(Key::Index(index));
            } else if let Some(quoted) = caps.name("quoted") {
                segments.push(Key::Name(unescape(quoted.as_str())));
            }

            // 樣式只會在成功擷取時回傳，長度必定大於零
            pos += caps.get(0).map_or(path.len() - pos, |m| m.end());
        }

        Ok(Self {
            raw: path.to_string(),
            segments,
        })
    }

    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn unescape(quoted: &str) -> String {
    let mut out = String::with_capacity(quoted.len());
    let mut chars = quoted.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

impl FromStr for Path {
    type Err = MaybeError;

    fn from_str(s: &str) -> Result<Self> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Maybe {
    /// Applies each segment of `path` as an item lookup.
    pub fn follow(&self, path: &Path) -> Result<Maybe> {
        let mut current = self.clone();
        for (depth, key) in path.segments().iter().enumerate() {
            if current.is_absent() {
                tracing::trace!(path = %path, depth, "path stopped at absent value");
                break;
            }
            current = current.item(key.clone())?;
        }
        Ok(current)
    }

    pub fn at(&self, path: &str) -> Result<Maybe> {
        self.follow(&Path::parse(path)?)
    }
}
