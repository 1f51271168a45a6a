use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    process::{Command, Output, Stdio},
};

/// Writes `source` to a scratch file and returns its path.
fn program(name: &str, source: &str) -> PathBuf {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::write(&path, source).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
    path
}

/// Runs the binary with `args`, feeding `input` to stdin.
fn calc_interp(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_calc_interp"))
        .args(args)
        .stdin(if input.is_empty() { Stdio::null() } else { Stdio::piped() })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start calc_interp");

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes()).unwrap();
    }
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn valid_program_exits_successfully() {
    let expected = fs::read_to_string("tests/programs/sum.out").unwrap();
    let output = calc_interp(&["tests/programs/sum.calc"], "3 4\n");

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), expected);
    assert!(output.stderr.is_empty());
}

#[test]
fn division_by_zero_exits_with_failure() {
    let path = program("division_by_zero.calc", "write 2\nWRITE 1 / 0\nwrite 3\n");
    let output = calc_interp(&[path.to_str().unwrap()], "");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).trim_end(), "ERROR on line 2: Cannot divide by zero.");
    assert_eq!(stdout(&output), "Write: 2\n");
}

#[test]
fn syntax_error_exits_with_failure() {
    let path = program("syntax_error.calc", "x := 1\n+ 3\n");
    let output = calc_interp(&[path.to_str().unwrap()], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("ERROR on line 2:"), "{}", stderr(&output));
}

#[test]
fn missing_file_exits_with_failure() {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join("no_such_program.calc");
    let output = calc_interp(&[path.to_str().unwrap()], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cannot open input file"), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn strict_flag_rejects_unassigned_variable() {
    let path = program("unassigned.calc", "x := 1\nwrite x + y\n");
    let path = path.to_str().unwrap();

    let output = calc_interp(&[path], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Write: 1\n"));

    let output = calc_interp(&["--strict", path], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("ERROR on line 2:"), "{}", stderr(&output));
    assert!(stdout(&output).contains("Assign: x := 1\n"));
    assert!(!stdout(&output).contains("Write:"));
}
