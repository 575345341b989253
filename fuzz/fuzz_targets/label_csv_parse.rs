//! Fuzz target for label CSV parsing and line rendering.
//!
//! Whatever parses successfully is also rendered in every mode. The parser
//! rejects NaN and infinite coordinates, so the writer only sees finite ones.

#![no_main]

use libfuzzer_sys::fuzz_target;
use reformat_labels::ir::io_label_csv::from_label_csv_slice;
use reformat_labels::ir::io_line_txt::render_line;
use reformat_labels::ir::{ClassIndex, CoordMode};

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(records) = from_label_csv_slice(data) else {
        return;
    };

    let names: Vec<&str> = records
        .iter()
        .flat_map(|record| record.objects.iter().map(|obj| obj.class_name.as_str()))
        .collect();
    let classes = ClassIndex::from_lines(&names.join("\n"));

    for record in &records {
        for mode in [
            CoordMode::PixelCorners,
            CoordMode::NormalizedCorners,
            CoordMode::PixelCenter,
            CoordMode::NormalizedCenter,
        ] {
            let _ = render_line(record, &classes, mode);
        }
    }
});
