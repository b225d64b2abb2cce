// File: crates/bench-chart/tests/cli.rs
// Purpose: Exit codes and stdout/stderr behavior of the bench-chart binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use bench_chart::USAGE;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bench-chart"))
}

fn run(args: &[&str]) -> Output {
    bin().args(args).output().expect("spawn bench-chart")
}

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/cli");
    std::fs::create_dir_all(&dir).unwrap();
    let p = dir.join(name);
    let _ = std::fs::remove_file(&p);
    p
}

fn write_csv(path: &Path, body: &str) {
    std::fs::write(path, body).unwrap();
}

#[test]
fn too_few_arguments_print_usage_and_exit_1() {
    let out = scratch("few.png");
    let o = run(&["input.csv", "10", out.to_str().unwrap()]);
    assert_eq!(o.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&o.stdout).trim_end(), USAGE);
    assert!(!out.exists());
}

#[test]
fn too_many_arguments_print_usage_and_exit_1() {
    let input = scratch("many.csv");
    write_csv(&input, "Implementation,Pixels,Average\nA,1,1\n");
    let out = scratch("many.png");
    let o = run(&[input.to_str().unwrap(), "10", out.to_str().unwrap(), "1", "extra"]);
    assert_eq!(o.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&o.stdout).trim_end(), USAGE);
    assert!(!out.exists());
}

#[test]
fn no_arguments_print_usage() {
    let o = run(&[]);
    assert_eq!(o.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&o.stdout).starts_with("Usage: "));
}

#[test]
fn renders_png_and_exits_0() {
    let input = scratch("ok.csv");
    write_csv(&input, "Implementation,Pixels,Total,Average\nFast,1000000,5.0,0.5\nSlow,1000000,20.0,2.0\n");
    let out = scratch("ok.png");

    let o = run(&[input.to_str().unwrap(), "10", out.to_str().unwrap(), "1"]);
    assert!(o.status.success(), "stderr: {}", String::from_utf8_lossy(&o.stderr));
    assert!(o.stdout.is_empty(), "stdout should stay quiet");

    let bytes = std::fs::read(&out).expect("png written");
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Png);
}

#[test]
fn jpeg_extension_writes_jpeg() {
    let input = scratch("jpeg.csv");
    write_csv(&input, "Implementation,Pixels,Average\nA,1000,0.5\nA,2000,1.5\n");
    let out = scratch("jpeg.jpg");

    let o = run(&[input.to_str().unwrap(), "3", out.to_str().unwrap(), "0"]);
    assert!(o.status.success(), "stderr: {}", String::from_utf8_lossy(&o.stderr));
    let bytes = std::fs::read(&out).expect("jpeg written");
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
}

#[test]
fn missing_column_fails_without_output() {
    let input = scratch("missing.csv");
    write_csv(&input, "Implementation,Pixels\nA,1\n");
    let out = scratch("missing.png");

    let o = run(&[input.to_str().unwrap(), "10", out.to_str().unwrap(), "1"]);
    assert!(!o.status.success());
    assert!(String::from_utf8_lossy(&o.stderr).contains("Average"));
    assert!(!out.exists());
}

#[test]
fn missing_input_fails() {
    let out = scratch("nofile.png");
    let o = run(&["target/test_out/cli/does_not_exist.csv", "10", out.to_str().unwrap(), "1"]);
    assert!(!o.status.success());
    assert_ne!(o.status.code(), Some(0));
    assert!(!out.exists());
}

#[test]
fn unknown_extension_fails() {
    let input = scratch("ext.csv");
    write_csv(&input, "Implementation,Pixels,Average\nA,1,1\n");
    let out = scratch("ext.chart");

    let o = run(&[input.to_str().unwrap(), "10", out.to_str().unwrap(), "1"]);
    assert!(!o.status.success());
    assert!(!out.exists());
}
