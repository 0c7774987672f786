// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

mod support;

use std::fs;
use std::process::{Command, Output};

use rstest::{fixture, rstest};
use support::{fixtures_dir, TempDir};

#[fixture]
fn tmp() -> TempDir {
    TempDir::new("cli")
}

fn gphconv(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gphconv"))
        .args(args)
        .output()
        .unwrap_or_else(|err| panic!("failed to spawn gphconv {args:?}: {err}"))
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[rstest]
#[case::no_args(&[])]
#[case::unknown_subcommand(&["dot", "in.dot"])]
#[case::missing_input(&["graphml"])]
#[case::beside_input_on_a_gph_file(&["snap", "graph.gph", "--beside-input"])]
fn usage_errors_exit_with_status_2(#[case] args: &[&str]) {
    let output = gphconv(args);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Usage:"), "{}", stderr(&output));
}

#[test]
fn help_prints_usage_and_succeeds() {
    let output = gphconv(&["--help"]);

    assert!(output.status.success());
    assert!(stderr(&output).starts_with("Usage:"));
}

#[rstest]
fn missing_input_file_exits_with_status_1(tmp: TempDir) {
    let path = tmp.path().join("nope.graphml");
    let path = path.to_str().unwrap();

    let output = gphconv(&["graphml", path]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("gphconv: input file not found:"), "{err}");
    assert!(output.stdout.is_empty());
}

#[rstest]
fn resolve_error_leaves_no_output_file(tmp: TempDir) {
    let input = tmp.path().join("broken.graphml");
    fs::write(&input, "<graph>\n<node x=\"1\" y=\"2\" />\n</graph>\n").unwrap();
    let out = tmp.path().join("out.gph");

    let output = gphconv(&["graphml", input.to_str().unwrap(), "-o", out.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("gphconv: "), "{err}");
    assert!(err.contains("no 'id' attribute"), "{err}");
    assert!(!out.exists());
}

#[rstest]
fn report_records_dropped_tokens_and_open_comment_block(tmp: TempDir) {
    let input = tmp.path().join("sloppy.graphml");
    fs::write(
        &input,
        "<comments>\n left open\n<graph>\n<node id=\"1\" x=\"2\" y=\"3\" stray />\n",
    )
    .unwrap();
    let out = tmp.path().join("sloppy.gph");
    let report = tmp.path().join("report.json");

    let output = gphconv(&[
        "graphml",
        input.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--report",
        report.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "{}", stderr(&output));
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["format"], "graphml");
    assert_eq!(json["nodes"], 1);
    assert_eq!(json["malformed_tokens"], 1);
    assert_eq!(json["unterminated_comments"], true);
    assert!(json.get("seed").is_none());
    assert!(fs::read_to_string(&out).unwrap().contains("n 1 2 3 1\n"));
}

#[rstest]
fn beside_input_writes_the_gph_sibling(tmp: TempDir) {
    let input = tmp.path().join("tiny.txt");
    fs::copy(fixtures_dir().join("snap/tiny.txt"), &input).unwrap();
    let before = fs::read_to_string(&input).unwrap();

    let output = gphconv(&["snap", input.to_str().unwrap(), "--beside-input", "--seed", "7"]);

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
    let gph = fs::read_to_string(tmp.path().join("tiny.gph")).unwrap();
    assert!(gph.contains("g 4 4\n"), "{gph}");
    assert_eq!(fs::read_to_string(&input).unwrap(), before);

    let err = stderr(&output);
    assert!(err.contains("the output gph file is in"), "{err}");
    assert!(!err.contains('\u{1b}'), "piped logs carry no color codes: {err:?}");
}
