use std::process::Command;

fn peano(args: &[&str]) -> (bool, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_peano"))
        .args(args)
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
    )
}

#[test]
fn no_input() {
    let (ok, stdout) = peano(&[]);
    assert!(ok);
    assert_eq!(stdout.trim(), "no program file given");
}

#[test]
fn inline_code() {
    let (ok, stdout) = peano(&["-c", "def two = s(s(z))\ns(two)"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "The result is 3");
}

#[test]
fn definitions_only() {
    let (ok, stdout) = peano(&["-c", "def two = s(s(z))"]);
    assert!(ok);
    assert_eq!(stdout.trim(), "the program has no final expression");
}

#[test]
fn parse_failure() {
    let (ok, stdout) = peano(&["-c", "z z"]);
    assert!(!ok);
    assert!(stdout.is_empty());
}
