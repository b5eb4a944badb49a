// src/charclass/rules.rs
use std::{borrow::Cow, str::FromStr};

use anyhow::{Error, anyhow};

use super::Category;

/// `( ) , . ; [ ] { }`
pub const SEPARATORS: &[u8] = b"(),.;[]{}";

/// `* + - / =`
pub const BASIC_OPERATORS: &[u8] = b"*+-/=";

/// Adds `!`, `:`, `<` and `>` to the basic set.
pub const EXTENDED_OPERATORS: &[u8] = b"!*+-/:<=>";

/// Which bytes count as operators and separators. Everything else is decided
/// by the fixed digit/letter ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub name: Cow<'static, str>,
    pub operators: Cow<'static, [u8]>,
    pub separators: Cow<'static, [u8]>,
}

impl RuleSet {
    pub const BASIC: RuleSet = RuleSet::new("basic", BASIC_OPERATORS, SEPARATORS);

    pub const EXTENDED: RuleSet = RuleSet::new("extended", EXTENDED_OPERATORS, SEPARATORS);

    pub const ALL: [RuleSet; 2] = [RuleSet::BASIC, RuleSet::EXTENDED];

    /// A rule set over static byte lists, usable in consts.
    pub const fn new(
        name: &'static str,
        operators: &'static [u8],
        separators: &'static [u8],
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            operators: Cow::Borrowed(operators),
            separators: Cow::Borrowed(separators),
        }
    }

    /// A rule set over byte lists built at runtime.
    pub fn from_bytes(
        name: impl Into<String>,
        operators: impl Into<Vec<u8>>,
        separators: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            operators: Cow::Owned(operators.into()),
            separators: Cow::Owned(separators.into()),
        }
    }

    pub fn by_name(name: &str) -> Option<RuleSet> {
        Self::ALL
            .into_iter()
            .find(|r| r.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Precedence: operator, separator, digit, uppercase, lowercase, other.
    pub fn classify(&self, v: u8) -> Category {
        if self.operators.contains(&v) {
            return Category::Operator;
        }
        if self.separators.contains(&v) {
            return Category::Separator;
        }
        match v {
            b'0'..=b'9' => Category::Digit,
            b'A'..=b'Z' => Category::Uppercase,
            b'a'..=b'z' => Category::Lowercase,
            _ => Category::Other,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::BASIC
    }
}

impl FromStr for RuleSet {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        RuleSet::by_name(s).ok_or_else(|| {
            let known: Vec<String> = RuleSet::ALL.iter().map(|r| r.name.to_string()).collect();
            anyhow!("unknown rule set {s:?} (expected one of: {})", known.join(", "))
        })
    }
}

/// Classify with the default rules.
pub fn classify(v: u8) -> Category {
    RuleSet::BASIC.classify(v)
}
