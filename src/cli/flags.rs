//! `--key=value,key2=value2` flag mini-language.
//!
//! A bare item without `=` is stored under [`MAIN_KEY`], so `--enabled`
//! parses to `{_main_: true}`.

use std::collections::BTreeMap;
use std::fmt;

pub const MAIN_KEY: &str = "_main_";

#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Value that matched no coercion rule, kept verbatim.
    Raw(String),
}

impl FlagValue {
    fn coerce(value: &str) -> Self {
        match value {
            "enabled" => FlagValue::Bool(true),
            "disabled" => FlagValue::Bool(false),
            _ if value.starts_with('"') && value.ends_with('"') => {
                FlagValue::Str(value.replace('"', ""))
            }
            _ if value.contains('.') => value
                .parse::<f64>()
                .map(FlagValue::Float)
                .unwrap_or_else(|_| FlagValue::Raw(value.to_string())),
            _ => value
                .parse::<i64>()
                .map(FlagValue::Int)
                .unwrap_or_else(|_| FlagValue::Raw(value.to_string())),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(true) => write!(f, "enabled"),
            FlagValue::Bool(false) => write!(f, "disabled"),
            FlagValue::Int(i) => write!(f, "{i}"),
            FlagValue::Float(x) => write!(f, "{x}"),
            FlagValue::Str(s) => write!(f, "\"{s}\""),
            FlagValue::Raw(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    values: BTreeMap<String, FlagValue>,
}

impl Flags {
    pub fn get(&self, key: &str) -> Option<&FlagValue> {
        self.values.get(key)
    }

    pub fn main(&self) -> Option<&FlagValue> {
        self.get(MAIN_KEY)
    }

    /// The main value, if it is `enabled` or `disabled`.
    pub fn main_bool(&self) -> Option<bool> {
        self.main().and_then(FlagValue::as_bool)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parses every `--` token into a single mapping; later keys win.
pub fn parse_flags<S: AsRef<str>>(raw: &[S]) -> Flags {
    let mut flags = Flags::default();

    for flag in raw {
        let content = flag.as_ref().replace("--", "");

        for item in content.split(',') {
            let mut parts = item.split('=');
            let first = parts.next().unwrap_or_default();
            let (key, value) = match parts.next() {
                Some(value) => (first, value),
                None => (MAIN_KEY, first),
            };
            flags
                .values
                .insert(key.to_string(), FlagValue::coerce(value));
        }
    }

    flags
}
