//! End-to-end runs of the gen_tables binary.

use std::{fs, path::PathBuf, process::Command};

use charbits::charclass::{RuleSet, build_table, load_table_json_bytes};

fn gen_tables() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gen_tables"));
    cmd.env_remove("CHARBITS_RULES");
    cmd
}

fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("charbits-cli-{}-{name}", std::process::id()))
}

#[test]
fn defaults_to_basic_listing() {
    let out = gen_tables().output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        include_str!("golden/basic.txt")
    );
    assert!(String::from_utf8_lossy(&out.stderr).contains("[gen_tables]"));
}

#[test]
fn env_selects_rules() {
    let out = gen_tables()
        .env("CHARBITS_RULES", "extended")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        include_str!("golden/extended.txt")
    );
}

#[test]
fn flag_overrides_env() {
    let out = gen_tables()
        .env("CHARBITS_RULES", "extended")
        .args(["--rules", "basic"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        include_str!("golden/basic.txt")
    );
}

#[test]
fn writes_c_header_to_file() {
    let dir = scratch("c");
    let path = dir.join("include").join("charbits.h");
    let out = gen_tables()
        .args(["--rules", "extended", "--format", "c"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("static const char charbits[256] = {\n\t0000, "));
    assert!(text.ends_with("\t0000, 0000, 0000, 0000, 0000, 0000\n};\n"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn json_file_loads_back() {
    let dir = scratch("json");
    let path = dir.join("charbits.json");
    fs::create_dir_all(&dir).unwrap();
    let out = gen_tables()
        .args(["--format", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let t = load_table_json_bytes(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(t, build_table(&RuleSet::BASIC));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn rust_const_name() {
    let out = gen_tables()
        .args(["--format", "rust", "--name", "CLASSES"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let s = String::from_utf8(out.stdout).unwrap();
    assert!(s.contains("pub const CLASSES: [u8; 256] = ["));
}

#[test]
fn accepts_underscore_names() {
    let out = gen_tables()
        .args(["--format", "c", "--name", "_char_bits2"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let s = String::from_utf8(out.stdout).unwrap();
    assert!(s.starts_with("static const char _char_bits2[256] = {"));
}

#[test]
fn bad_input_exits_nonzero() {
    for args in [
        &["--rules", "nope"][..],
        &["--format", "yaml"][..],
        &["--bogus"][..],
        &["--rules"][..],
        &["a.txt", "b.txt"][..],
        &["--format", "c", "--name", "not an ident;"][..],
        &["--name", "9lives"][..],
        &["--name", ""][..],
    ] {
        let out = gen_tables().args(args).output().unwrap();
        assert_eq!(out.status.code(), Some(1), "{args:?}");
        assert!(String::from_utf8_lossy(&out.stderr).starts_with("error: "), "{args:?}");
    }
}
