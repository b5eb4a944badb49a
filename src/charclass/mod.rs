// src/charclass/mod.rs
pub mod build;
pub mod category;
pub mod format;
pub mod io;
pub mod rules;

use anyhow::{Result, bail};
use hashbrown::HashMap;

pub use build::build_table;
pub use category::Category;
pub use format::{OutputFormat, format_c_array, format_listing, format_rust_const};
pub use io::{load_table_json_bytes, save_table_json, table_to_json, write_rendered};
pub use rules::{RuleSet, classify};

/// One category per byte value, indexed by the byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharTable {
    pub rules: String,
    categories: [Category; 256],
}

impl CharTable {
    pub fn new(rules: impl Into<String>, categories: [Category; 256]) -> Self {
        Self {
            rules: rules.into(),
            categories,
        }
    }

    /// Rebuild a table from its emitted codes. Fails on anything but exactly
    /// 256 known codes.
    pub fn from_codes(rules: impl Into<String>, codes: &[u16]) -> Result<Self> {
        if codes.len() != 256 {
            bail!("expected 256 codes, got {}", codes.len());
        }
        let mut categories = [Category::Other; 256];
        for (i, (&code, slot)) in codes.iter().zip(categories.iter_mut()).enumerate() {
            *slot = Category::from_code(code)
                .map_err(|e| e.context(format!("entry {i}")))?;
        }
        Ok(Self::new(rules, categories))
    }

    #[inline]
    pub fn get(&self, b: u8) -> Category {
        self.categories[b as usize]
    }

    pub fn categories(&self) -> &[Category; 256] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().copied()
    }

    /// The table as the consuming lexer reads it (`charbits[ch & 0377]`).
    pub fn bits(&self) -> [u8; 256] {
        let mut out = [0u8; 256];
        for (o, c) in out.iter_mut().zip(self.iter()) {
            *o = c.mask();
        }
        out
    }

    pub fn histogram(&self) -> HashMap<Category, usize> {
        let mut h = HashMap::new();
        for c in self.iter() {
            *h.entry(c).or_insert(0) += 1;
        }
        h
    }

    // Lexer-header style predicates.

    pub fn is_operator(&self, b: u8) -> bool {
        self.get(b) == Category::Operator
    }
    pub fn is_separator(&self, b: u8) -> bool {
        self.get(b) == Category::Separator
    }
    pub fn is_digit(&self, b: u8) -> bool {
        self.get(b) == Category::Digit
    }
    pub fn is_uc_letter(&self, b: u8) -> bool {
        self.get(b) == Category::Uppercase
    }
    pub fn is_lc_letter(&self, b: u8) -> bool {
        self.get(b) == Category::Lowercase
    }
    pub fn is_letter(&self, b: u8) -> bool {
        self.get(b).mask() & category::LETTER_MASK != 0
    }
}

impl Default for CharTable {
    fn default() -> Self {
        build_table(&RuleSet::BASIC)
    }
}
