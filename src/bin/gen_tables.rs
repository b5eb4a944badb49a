// src/bin/gen_tables.rs
// Build a character-class table and render it.
// Usage:
//   cargo run --bin gen_tables                              # basic listing to stdout
//   cargo run --bin gen_tables -- --rules extended --format c include/charbits.h
//   cargo run --bin gen_tables -- --format json tables/charbits.json
//
// CHARBITS_RULES=<name> picks the rule set when --rules is not given.

use std::{env, path::PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use charbits::charclass::{
    Category, OutputFormat, RuleSet, build_table, format_c_array, format_listing,
    format_rust_const, table_to_json, write_rendered,
};

struct Options {
    rules: RuleSet,
    format: OutputFormat,
    name: Option<String>,
    out: Option<PathBuf>,
}

// The name lands verbatim in a C or Rust declaration.
fn identifier(n: String) -> Result<String> {
    let mut chars = n.chars();
    let head_ok = chars
        .next()
        .is_some_and(|c| c == '_' || c.is_ascii_alphabetic());
    if !head_ok || !chars.all(|c| c == '_' || c.is_ascii_alphanumeric()) {
        bail!("invalid --name {n:?}: not an identifier");
    }
    Ok(n)
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut rules = None;
    let mut format = OutputFormat::default();
    let mut name = None;
    let mut out = None;

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().ok_or_else(|| anyhow!("{flag} needs a value"));
        match arg.as_str() {
            "--rules" => rules = Some(value("--rules")?.parse::<RuleSet>()?),
            "--format" => format = value("--format")?.parse()?,
            "--name" => name = Some(identifier(value("--name")?)?),
            s if s.starts_with('-') => bail!("unknown flag {s}"),
            _ if out.is_some() => bail!("more than one output path given"),
            path => out = Some(PathBuf::from(path)),
        }
    }

    let rules = match rules {
        Some(r) => r,
        None => match env::var("CHARBITS_RULES") {
            Ok(v) => v.parse::<RuleSet>().context("CHARBITS_RULES")?,
            Err(_) => RuleSet::default(),
        },
    };

    Ok(Options {
        rules,
        format,
        name,
        out,
    })
}

fn run() -> Result<()> {
    let opts = parse_args(env::args().skip(1))?;

    eprintln!("[gen_tables] building {} table…", opts.rules.name);
    let t = build_table(&opts.rules);

    let hist = t.histogram();
    let stats: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("{}={}", c.name(), hist.get(c).copied().unwrap_or(0)))
        .collect();
    eprintln!("[gen_tables] {}", stats.join(" "));

    let text = match opts.format {
        OutputFormat::Listing => format_listing(&t),
        OutputFormat::C => format_c_array(&t, opts.name.as_deref().unwrap_or("charbits")),
        OutputFormat::Rust => format_rust_const(&t, opts.name.as_deref().unwrap_or("CHARBITS")),
        OutputFormat::Json => table_to_json(&t)?,
    };

    match &opts.out {
        Some(out) => {
            write_rendered(out, &text)?;
            eprintln!("[gen_tables] wrote {}", out.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
