// src/main.rs
use charbits::charclass::{RuleSet, build_table, format_listing};

fn main() {
    let table = build_table(&RuleSet::BASIC);
    println!("{}", format_listing(&table));
}
