//! Option tokenizer — raw option text → `(key, value)` tokens.

use crate::options::error::OptionError;
use crate::options::registry::OptionKey;

/// A single parsed option line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionToken {
    pub key: OptionKey,
    /// `Some` for `name=value`, `None` for a bare name.
    pub value: Option<String>,
}

/// Tokenize raw option text, one option per line.
///
/// Spaces are never significant and are stripped everywhere, values
/// included. Tabs and carriage returns are stripped as well. Empty lines
/// are skipped. Empty text yields no tokens.
pub fn tokenize(raw: &str) -> Result<Vec<OptionToken>, OptionError> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t' | '\r'))
        .collect();

    stripped
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Result<OptionToken, OptionError> {
    let mut parts = line.split('=');
    // split always yields at least one item
    let name = parts.next().unwrap_or_default();
    let value = parts.next();

    if parts.next().is_some() || name.is_empty() {
        return Err(OptionError::MalformedOption {
            line: line.to_string(),
        });
    }

    let key = OptionKey::lookup(name).ok_or_else(|| OptionError::UnknownOption {
        key: name.to_string(),
    })?;

    Ok(OptionToken {
        key,
        value: value.map(String::from),
    })
}
