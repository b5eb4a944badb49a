// src/charclass/build.rs
use std::time::Instant;

use super::{Category, CharTable, RuleSet};

/// Classify every byte value 0..=255 in order.
pub fn build_table(rules: &RuleSet) -> CharTable {
    let t0 = Instant::now();
    let mut categories = [Category::Other; 256];
    for (b, slot) in (0u8..=255).zip(categories.iter_mut()) {
        *slot = rules.classify(b);
    }
    let table = CharTable::new(rules.name.as_ref(), categories);

    if log::log_enabled!(log::Level::Debug) {
        let hist = table.histogram();
        let mut counts: Vec<_> = hist.iter().collect();
        counts.sort();
        log::debug!(
            "built {} table in {} us: {:?}",
            rules.name,
            t0.elapsed().as_micros(),
            counts
        );
    }
    table
}
