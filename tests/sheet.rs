use std::process::Command;

use chrono::NaiveDate;
use circlegrid::{LayoutSidecar, SheetParams, Side, generate_pages, generate_sheet_to_path};

#[test]
fn reference_sheet_layout() {
    let pages = generate_pages(20.0, 10.0, "2024-01-01").unwrap();

    let page1 = &pages[0];
    assert_eq!(
        page1.header(),
        "Left Eye Patched, Pen in Left Hand | 2024-01-01 | Diameter: 20.0mm"
    );
    assert_eq!((page1.circles[0].center_x, page1.circles[0].center_y), (20.0, 40.0));
    assert_eq!(page1.circles[1].center_y - page1.circles[0].center_y, 20.0);

    let page2 = &pages[1];
    assert_eq!(
        page2.header(),
        "Left Eye Patched, Pen in Right Hand | 2024-01-01 | Diameter: 10.0mm"
    );
    assert_eq!((page2.patch, page2.pen), (Side::Left, Side::Right));
    assert_eq!(page2.circles[1].center_y - page2.circles[0].center_y, 10.0);
}

#[test]
fn sheet_and_sidecar_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let params = SheetParams {
        left_diameter: 17.0,
        right_diameter: 25.0,
        date: "today".to_string(),
        output: dir.path().join("out.pdf"),
        layout_json: Some(dir.path().join("out.json")),
    };
    let today = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
    let report = generate_sheet_to_path(&params, today).unwrap();
    assert_eq!(report.date, "2024-09-30");

    let pdf = std::fs::read(&params.output).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));

    let json = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    let sidecar: LayoutSidecar = serde_json::from_str(&json).unwrap();
    assert_eq!(sidecar.params.date, "2024-09-30");
    assert_eq!(sidecar.pages.len(), 4);
    assert!(sidecar.pages.iter().all(|p| p.date == "2024-09-30"));
    assert_eq!(sidecar.pages[1].diameter, 25.0);
}

#[test]
fn cli_writes_output_pdf_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_circlegrid"))
        .args(["--left-diam", "20", "--right-diam", "10", "--date", "2024-01-01"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("date                       2024-01-01"));
    assert!(stdout.contains("left hand circle diameter  20.0 mm"));
    assert!(stdout.contains("right hand circle diameter 10.0 mm"));
    assert!(dir.path().join("output.pdf").exists());
}

#[test]
fn cli_rejects_non_positive_diameter() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_circlegrid"))
        .args(["--left-diam=0", "--date", "2024-01-01"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid parameter: left_diameter=0"));
    assert!(!dir.path().join("output.pdf").exists());
}

#[test]
fn cli_reports_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_circlegrid"))
        .args(["--output", "no/such/dir/sheet.pdf"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("I/O error"));
}

#[test]
fn cli_rejects_diameter_too_small_to_tile() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_circlegrid"))
        .args(["--right-diam", "1e-20", "--date", "2024-01-01"])
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid parameter: right_diameter"));
    assert!(!dir.path().join("output.pdf").exists());
}
