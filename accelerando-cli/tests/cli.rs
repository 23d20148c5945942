use std::io::Write;
use std::process::{Command, Stdio};

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "accelerando-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn run_with_stdin(args: &[&str], input: &str) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_accelerando");
    let mut child = Command::new(exe)
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn cli");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("run cli")
}

#[test]
fn quitting_from_main_menu_exits_cleanly() {
    let save = temp_path("quit");
    let output = run_with_stdin(&["--save-path", save.to_str().unwrap()], "3\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ACCELERANDO: LOBSTERS"));
    assert!(stdout.contains("1. New Game"));
    assert!(!stdout.contains("Thank you for playing"));
    assert!(!save.exists());
}

#[test]
fn end_of_input_is_a_clean_interrupt() {
    let save = temp_path("eof");
    let output = run_with_stdin(
        &["--save-path", save.to_str().unwrap(), "--seed", "7"],
        "1\n\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WELCOME TO ACCELERANDO: LOBSTERS"));
    assert!(stdout.contains("Turn: 1"));
    assert!(stdout.contains("Game interrupted. Goodbye!"));
    assert!(!save.exists());
}

#[cfg(unix)]
#[test]
fn ctrl_c_at_a_prompt_says_goodbye() {
    use std::io::{BufRead, BufReader, Read};

    let save = temp_path("sigint");
    let exe = env!("CARGO_BIN_EXE_accelerando");
    let mut child = Command::new(exe)
        .args(["--save-path", save.to_str().unwrap(), "--seed", "1"])
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn cli");
    // Keep stdin open so the game blocks at the pause.
    let mut stdin = child.stdin.take().expect("stdin");
    stdin.write_all(b"1\n").expect("write stdin");

    let mut stdout = BufReader::new(child.stdout.take().expect("stdout"));
    let mut seen = String::new();
    while !seen.contains("Press Enter to begin...") {
        let mut line = String::new();
        let read = stdout.read_line(&mut line).expect("read stdout");
        assert!(read > 0, "game exited before the pause: {seen}");
        seen.push_str(&line);
    }

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("send SIGINT");
    assert!(killed.success());

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).expect("read rest");
    let status = child.wait().expect("wait cli");
    drop(stdin);
    assert!(status.success(), "{status:?}");
    assert!(rest.contains("Game interrupted. Goodbye!"), "{rest}");
    assert!(!save.exists());
}

#[test]
fn save_and_quit_writes_the_save_file() {
    let save = temp_path("save");
    let output = run_with_stdin(
        &["--save-path", save.to_str().unwrap(), "--seed", "3"],
        "1\n\nbanana\n4\n2\n2\n",
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please enter a valid number"));
    assert!(stdout.contains("Thank you for playing"));
    let raw = std::fs::read_to_string(&save).expect("save written");
    let record: serde_json::Value = serde_json::from_str(&raw).expect("save is json");
    assert_eq!(record["turn"], 1);
    assert_eq!(record["game_over"], false);
    let _ = std::fs::remove_file(save);
}

#[test]
fn missing_save_falls_back_to_new_game() {
    let save = temp_path("missing");
    let output = run_with_stdin(&["--save-path", save.to_str().unwrap()], "2\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No save file found. Starting new game..."));
}

#[test]
fn autoplay_writes_json_report() {
    let exe = env!("CARGO_BIN_EXE_accelerando");
    let output_path = temp_path("autoplay.json");
    let status = Command::new(exe)
        .args([
            "--autoplay",
            "cautious",
            "--games",
            "3",
            "--seed",
            "21",
            "--max-turns",
            "50",
            "--report",
            "json",
            "--output",
        ])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    let report: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(report["games"], 3);
    assert_eq!(report["strategy"], "cautious");
    assert_eq!(report["records"].as_array().map(Vec::len), Some(3));
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn autoplay_markdown_to_stdout() {
    let exe = env!("CARGO_BIN_EXE_accelerando");
    let output = Command::new(exe)
        .args([
            "--autoplay",
            "random",
            "--seed",
            "5",
            "--max-turns",
            "10",
            "--report",
            "markdown",
        ])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Accelerando Autoplay Results"));
    assert!(stdout.contains("| 5 |"));
}
