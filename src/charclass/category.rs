// src/charclass/category.rs
use std::fmt;

use anyhow::{Result, anyhow};

// Bits as the consuming lexer sees them. The table literals are written in C
// octal, so `0020` reads back as 1 << 4.
pub const UC_LETTER_MASK: u8 = 1 << 1;
pub const LC_LETTER_MASK: u8 = 1 << 2;
pub const DIGIT_MASK: u8 = 1 << 3;
pub const OPERATOR_MASK: u8 = 1 << 4;
pub const SEPARATOR_MASK: u8 = 1 << 5;
pub const LETTER_MASK: u8 = UC_LETTER_MASK | LC_LETTER_MASK;

/// Lexical class of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum Category {
    Other = 0x0000,
    Uppercase = 0x0002,
    Lowercase = 0x0004,
    Digit = 0x0010,
    Operator = 0x0020,
    Separator = 0x0040,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Operator,
        Category::Separator,
        Category::Digit,
        Category::Uppercase,
        Category::Lowercase,
        Category::Other,
    ];

    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// The four-digit literal emitted into the table.
    pub const fn literal(self) -> &'static str {
        match self {
            Category::Other => "0000",
            Category::Uppercase => "0002",
            Category::Lowercase => "0004",
            Category::Digit => "0010",
            Category::Operator => "0020",
            Category::Separator => "0040",
        }
    }

    /// Value of the literal once a C compiler has read it as octal.
    pub const fn mask(self) -> u8 {
        match self {
            Category::Other => 0,
            Category::Uppercase => UC_LETTER_MASK,
            Category::Lowercase => LC_LETTER_MASK,
            Category::Digit => DIGIT_MASK,
            Category::Operator => OPERATOR_MASK,
            Category::Separator => SEPARATOR_MASK,
        }
    }

    pub fn from_code(code: u16) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| anyhow!("unknown category code {code:#06x}"))
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Other => "other",
            Category::Uppercase => "uppercase",
            Category::Lowercase => "lowercase",
            Category::Digit => "digit",
            Category::Operator => "operator",
            Category::Separator => "separator",
        }
    }
}

impl TryFrom<u16> for Category {
    type Error = anyhow::Error;
    fn try_from(code: u16) -> Result<Self> {
        Self::from_code(code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}
