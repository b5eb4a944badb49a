// src/charclass/format.rs
// Text renderings of a CharTable. The listing is the paste-ready body; the C
// and Rust forms wrap it in a complete declaration.

use std::str::FromStr;

use anyhow::{Error, anyhow};

use super::CharTable;

pub const ENTRIES_PER_LINE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Listing,
    C,
    Rust,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "listing" | "text" => OutputFormat::Listing,
            "c" => OutputFormat::C,
            "rust" | "rs" => OutputFormat::Rust,
            "json" => OutputFormat::Json,
            other => {
                return Err(anyhow!(
                    "unknown format {other:?} (expected listing, c, rust or json)"
                ));
            }
        })
    }
}

/// Comma separated codes, a newline before every tenth entry (index 0
/// included), no separator after the last one.
pub fn format_listing(table: &CharTable) -> String {
    layout(table, |c| c.literal().to_string())
}

/// `static const char NAME[256] = { ... };` as it sits in the lexer header.
pub fn format_c_array(table: &CharTable, name: &str) -> String {
    let body = format_listing(table).replace('\n', "\n\t");
    format!("static const char {name}[256] = {{{body}\n}};\n")
}

/// A `[u8; 256]` const with the same layout. Values are written in hex so
/// they equal `Category::code`.
pub fn format_rust_const(table: &CharTable, name: &str) -> String {
    let body = layout(table, |c| format!("0x{}", c.literal())).replace('\n', "\n    ");
    format!("#[rustfmt::skip]\npub const {name}: [u8; 256] = [{body}\n];\n")
}

fn layout(table: &CharTable, token: impl Fn(super::Category) -> String) -> String {
    let mut s = String::with_capacity(256 * 8 + 32);
    let last = table.categories().len() - 1;
    for (i, c) in table.iter().enumerate() {
        if i % ENTRIES_PER_LINE == 0 {
            s.push('\n');
        }
        s.push_str(&token(c));
        if i != last {
            s.push_str(", ");
        }
    }
    s
}
