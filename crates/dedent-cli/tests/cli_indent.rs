// crates/dedent-cli/tests/cli_indent.rs

use std::fs;
use std::process::Command;

fn indent_of(contents: &[u8], extra: &[&str]) -> String {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, contents).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_dedent"))
        .args(["indent", "--in", input.to_str().unwrap()])
        .args(extra)
        .output()
        .expect("spawn command");
    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn reports_common_indent() {
    assert_eq!(
        indent_of(b"\t  a\n\t b\n", &[]),
        "len=2 offset=5 bytes=\"\\t \"\n"
    );
}

#[test]
fn reports_none() {
    assert_eq!(indent_of(b"  line1\n\tline2", &[]), "none\n");
    assert_eq!(indent_of(b"", &[]), "none\n");
}

#[test]
fn honours_limit() {
    assert_eq!(indent_of(b"  a\nb", &["--limit", "4"]), "len=2 offset=0 bytes=\"  \"\n");
    assert_eq!(indent_of(b"  a\nb", &[]), "none\n");
}
