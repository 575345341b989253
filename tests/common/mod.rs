#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// A VOC document with the given size and `(name, xmin, ymin, xmax, ymax)` objects.
pub fn voc_xml(width: u32, height: u32, objects: &[(&str, f64, f64, f64, f64)]) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<annotation>\n");
    xml.push_str(&format!(
        "  <size>\n    <width>{width}</width>\n    <height>{height}</height>\n    <depth>3</depth>\n  </size>\n"
    ));
    for (name, xmin, ymin, xmax, ymax) in objects {
        xml.push_str(&format!(
            "  <object>\n    <name>{name}</name>\n    <bndbox>\n      <xmin>{xmin}</xmin>\n      <ymin>{ymin}</ymin>\n      <xmax>{xmax}</xmax>\n      <ymax>{ymax}</ymax>\n    </bndbox>\n  </object>\n"
        ));
    }
    xml.push_str("</annotation>\n");
    xml
}

pub fn write_file(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, contents).expect("write fixture file");
}

pub fn write_classes(path: &Path, names: &[&str]) {
    let mut contents = names.join("\n");
    contents.push('\n');
    write_file(path, &contents);
}
