//! Option table — one value slot per recognized key.

use crate::options::registry::OptionKey;
use crate::options::tokenizer::OptionToken;

/// Effective value of a single option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FlagValue {
    /// Not mentioned; equals the declared default.
    #[default]
    Absent,
    /// Mentioned as a bare name. There is no explicit "off" form.
    Enabled,
    /// Mentioned as `name=value`.
    Value(String),
}

impl FlagValue {
    /// Whether the option counts as switched on.
    ///
    /// An empty `name=` value is not truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FlagValue::Absent => false,
            FlagValue::Enabled => true,
            FlagValue::Value(s) => !s.is_empty(),
        }
    }

    /// The string value, if one was given and it is non-empty.
    pub fn as_non_empty_str(&self) -> Option<&str> {
        match self {
            FlagValue::Value(s) if !s.is_empty() => Some(s),
            FlagValue::Absent | FlagValue::Enabled | FlagValue::Value(_) => None,
        }
    }
}

/// A finalized option table covering exactly the fixed key set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionTable {
    values: [FlagValue; OptionKey::COUNT],
}

impl OptionTable {
    /// The all-default table: every key `Absent`.
    pub fn defaults() -> Self {
        Self {
            values: std::array::from_fn(|_| FlagValue::Absent),
        }
    }

    /// Apply tokens on top of this table, returning a new one.
    ///
    /// `name=value` sets `Value`, a bare name sets `Enabled`. A key given
    /// more than once keeps its last value.
    pub fn apply_tokens(&self, tokens: &[OptionToken]) -> Self {
        let mut table = self.clone();
        for token in tokens {
            table.values[token.key.index()] = match &token.value {
                Some(value) => FlagValue::Value(value.clone()),
                None => FlagValue::Enabled,
            };
        }
        table
    }

    pub fn get(&self, key: OptionKey) -> &FlagValue {
        &self.values[key.index()]
    }

    /// Always [`OptionKey::COUNT`].
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(key, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (OptionKey, &FlagValue)> {
        OptionKey::ALL.into_iter().zip(self.values.iter())
    }
}

impl Default for OptionTable {
    fn default() -> Self {
        Self::defaults()
    }
}
