//! Integration tests for flat CSV input.

use std::fs;
use std::path::{Path, PathBuf};

use reformat_labels::conversion::{convert, ConversionIssueCode, ConvertOptions, InputFormat};
use reformat_labels::ir::io_label_csv::read_label_csv;
use reformat_labels::ir::CoordMode;
use reformat_labels::ReformatError;

mod common;

fn options(root: &Path, mode: CoordMode) -> ConvertOptions {
    ConvertOptions {
        format: InputFormat::Csv,
        labels: root.join("labels.csv"),
        images: PathBuf::from("images"),
        classes: root.join("classes.txt"),
        output: root.join("out.txt"),
        mode,
    }
}

#[test]
fn sorted_csv_gives_one_line_per_image() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::write_file(
        &temp.path().join("labels.csv"),
        "cat,10.7,5.2,50.9,30.1,img1.jpg,100,50\n\
         dog,0,0,20,20,img1.jpg,100,50\n\
         cat,1,1,2,2,img2.jpg,10,10\n",
    );
    common::write_classes(&temp.path().join("classes.txt"), &["cat", "dog"]);

    let opts = options(temp.path(), CoordMode::PixelCorners);
    let report = convert(&opts).expect("convert");

    let written = fs::read_to_string(&opts.output).expect("read output");
    assert_eq!(
        written,
        "images/img1.jpg 10,5,50,30,0 0,0,20,20,1 \n\
         images/img2.jpg 1,1,2,2,0 \n"
    );
    assert!(report.issues.is_empty());
}

#[test]
fn interleaved_rows_are_not_merged() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::write_file(
        &temp.path().join("labels.csv"),
        "A,0,0,1,1,img1.jpg,10,10\n\
         B,0,0,1,1,img1.jpg,10,10\n\
         C,0,0,1,1,img2.jpg,10,10\n\
         D,0,0,1,1,img1.jpg,10,10\n",
    );
    common::write_classes(&temp.path().join("classes.txt"), &["A", "B", "C", "D"]);

    let opts = options(temp.path(), CoordMode::PixelCorners);
    let report = convert(&opts).expect("convert");

    let written = fs::read_to_string(&opts.output).expect("read output");
    assert_eq!(
        written,
        "images/img1.jpg 0,0,1,1,0 0,0,1,1,1 \n\
         images/img2.jpg 0,0,1,1,2 \n\
         images/img1.jpg 0,0,1,1,3 \n"
    );

    let codes: Vec<_> = report.issues.iter().map(|issue| issue.code).collect();
    assert_eq!(codes, [ConversionIssueCode::SplitImageGroups]);
}

#[test]
fn empty_csv_writes_empty_file() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::write_file(&temp.path().join("labels.csv"), "");
    common::write_classes(&temp.path().join("classes.txt"), &["cat"]);

    let opts = options(temp.path(), CoordMode::NormalizedCenter);
    let report = convert(&opts).expect("convert");

    assert_eq!(fs::read_to_string(&opts.output).expect("read output"), "");
    assert_eq!(report.counts.records, 0);
}

#[test]
fn duplicate_class_lines_use_last_id() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::write_file(
        &temp.path().join("labels.csv"),
        "cat,1,1,2,2,img.jpg,10,10\ndog,1,1,2,2,img.jpg,10,10\n",
    );
    common::write_classes(&temp.path().join("classes.txt"), &["cat", "dog", "cat"]);

    let opts = options(temp.path(), CoordMode::PixelCorners);
    convert(&opts).expect("convert");

    let written = fs::read_to_string(&opts.output).expect("read output");
    assert_eq!(written, "images/img.jpg 1,1,2,2,2 1,1,2,2,1 \n");
}

#[test]
fn short_row_aborts_without_output() {
    let temp = tempfile::tempdir().expect("create temp dir");
    common::write_file(
        &temp.path().join("labels.csv"),
        "cat,1,1,2,2,img.jpg,10,10\ncat,1,1,2,2,img.jpg\n",
    );
    common::write_classes(&temp.path().join("classes.txt"), &["cat"]);

    let opts = options(temp.path(), CoordMode::PixelCorners);
    let err = convert(&opts).unwrap_err();
    assert!(matches!(err, ReformatError::LabelCsvInvalid { line: 2, .. }));
    assert!(!opts.output.exists());
}

#[test]
fn read_label_csv_joins_image_dir() {
    let temp = tempfile::tempdir().expect("create temp dir");
    let csv_path = temp.path().join("labels.csv");
    common::write_file(&csv_path, "cat,1,1,2,2,sub/img.jpg,10,10\n");

    let records = read_label_csv(&csv_path, Path::new("/data/images")).expect("read csv");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].file_path, "/data/images/sub/img.jpg");
}
