//! Pascal VOC XML reader.
//!
//! Reads a flat directory holding one XML file per image. Each file becomes
//! one [`AnnotationRecord`] whose `file_path` points into the image
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::Node;
use walkdir::WalkDir;

use super::model::{AnnotationRecord, ObjectAnnotation};
use super::{compute_derived, BBoxXYXY, Pixel};
use crate::error::ReformatError;

const LABEL_EXTENSION_TEXT: &str = "xml";
const IMAGE_EXTENSION_TEXT: &str = "jpg";

/// Read every regular file in `labels_dir` as a VOC XML document.
///
/// Files are visited in file-name order so that the output line order does
/// not depend on the platform's directory listing. Subdirectories are not
/// descended into.
pub fn read_voc_dir(
    labels_dir: &Path,
    images_dir: &Path,
) -> Result<Vec<AnnotationRecord>, ReformatError> {
    if !labels_dir.is_dir() {
        return Err(ReformatError::InputNotFound {
            what: "VOC label directory",
            path: labels_dir.to_path_buf(),
        });
    }

    let xml_files = collect_label_files(labels_dir)?;
    tracing::info!(
        "Reading {} VOC file(s) from {}",
        xml_files.len(),
        labels_dir.display()
    );

    let mut records = Vec::with_capacity(xml_files.len());
    for xml_path in xml_files {
        tracing::debug!("Handling {}", xml_path.display());

        let file_name = xml_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if file_name.matches(LABEL_EXTENSION_TEXT).count() > 1 {
            tracing::warn!(
                "{} contains '{}' outside its extension; every occurrence becomes '{}'",
                file_name,
                LABEL_EXTENSION_TEXT,
                IMAGE_EXTENSION_TEXT
            );
        }
        let xml = fs::read_to_string(&xml_path).map_err(|source| ReformatError::VocXmlParse {
            path: xml_path.clone(),
            message: format!("could not read file: {source}"),
        })?;

        let record = parse_voc_xml_str(&xml, &xml_path, image_path_for(images_dir, &file_name))?;
        records.push(record);
    }

    Ok(records)
}

/// Build the output image path for a label file name.
///
/// Every occurrence of `xml` in the name is replaced by `jpg`, not only the
/// extension: `xml_001.xml` maps to `jpg_001.jpg`. Downstream label files
/// produced by earlier versions of this tool rely on that spelling.
pub fn image_path_for(images_dir: &Path, label_file_name: &str) -> String {
    let image_name = label_file_name.replace(LABEL_EXTENSION_TEXT, IMAGE_EXTENSION_TEXT);
    images_dir.join(image_name).to_string_lossy().into_owned()
}

/// Parse one VOC XML document held in memory.
///
/// `file_path` becomes the record's image path as-is.
pub fn from_voc_xml_str(xml: &str, file_path: &str) -> Result<AnnotationRecord, ReformatError> {
    parse_voc_xml_str(xml, Path::new("<memory>"), file_path.to_string())
}

/// Parse one VOC XML document from bytes.
///
/// The input must be valid UTF-8.
pub fn from_voc_xml_slice(bytes: &[u8]) -> Result<AnnotationRecord, ReformatError> {
    let xml = std::str::from_utf8(bytes).map_err(|source| ReformatError::VocXmlParse {
        path: PathBuf::from("<memory>"),
        message: format!("input is not valid UTF-8: {source}"),
    })?;
    from_voc_xml_str(xml, "<memory>")
}

fn collect_label_files(dir: &Path) -> Result<Vec<PathBuf>, ReformatError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ReformatError::VocXmlParse {
            path: dir.to_path_buf(),
            message: format!("failed while listing label directory: {source}"),
        })?;

        if entry.file_type().is_file() {
            files.push(entry.into_path());
        } else {
            tracing::debug!("Skipping non-file entry {}", entry.path().display());
        }
    }

    Ok(files)
}

fn parse_voc_xml_str(
    xml: &str,
    path: &Path,
    file_path: String,
) -> Result<AnnotationRecord, ReformatError> {
    let document = roxmltree::Document::parse(xml).map_err(|source| ReformatError::VocXmlParse {
        path: path.to_path_buf(),
        message: source.to_string(),
    })?;
    let root = document.root_element();

    let size = required_child_element(root, "size", path, "root element")?;
    let width = parse_required_u32(size, "width", path, "<size>")?;
    let height = parse_required_u32(size, "height", path, "<size>")?;
    let depth = parse_required_u32(size, "depth", path, "<size>")?;
    tracing::debug!(
        "Retrieving size from the file. Width: {}, Height: {}, Depth: {}",
        width,
        height,
        depth
    );

    let mut record = AnnotationRecord::new(file_path, width, height, depth);

    for object in root
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == "object")
    {
        let name = required_child_text(object, "name", path, "<object>")?;
        let bndbox = required_child_element(object, "bndbox", path, "<object>")?;

        let corners = BBoxXYXY::<Pixel>::from_xyxy(
            parse_required_f64(bndbox, "xmin", path, "<bndbox>")?,
            parse_required_f64(bndbox, "ymin", path, "<bndbox>")?,
            parse_required_f64(bndbox, "xmax", path, "<bndbox>")?,
            parse_required_f64(bndbox, "ymax", path, "<bndbox>")?,
        );
        if !corners.is_finite() {
            return Err(ReformatError::VocXmlParse {
                path: path.to_path_buf(),
                message: format!(
                    "non-finite <bndbox> for object '{name}': {:?}",
                    corners.to_array()
                ),
            });
        }

        let bbox = compute_derived(corners, f64::from(width), f64::from(height))?;
        let annotation = ObjectAnnotation::new(name, bbox);
        tracing::debug!("{:?}", annotation);
        record.objects.push(annotation);
    }

    Ok(record)
}

fn required_child_element<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<Node<'a, 'input>, ReformatError> {
    child_element(node, tag).ok_or_else(|| ReformatError::VocXmlParse {
        path: path.to_path_buf(),
        message: format!("missing <{tag}> in {context}"),
    })
}

fn required_child_text(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<String, ReformatError> {
    optional_child_text(node, tag).ok_or_else(|| ReformatError::VocXmlParse {
        path: path.to_path_buf(),
        message: format!("missing <{tag}> in {context}"),
    })
}

fn parse_required_u32(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<u32, ReformatError> {
    let raw = required_child_text(node, tag, path, context)?;
    raw.parse::<u32>().map_err(|_| ReformatError::VocXmlParse {
        path: path.to_path_buf(),
        message: format!("invalid <{tag}> value '{raw}' in {context}; expected u32"),
    })
}

fn parse_required_f64(
    node: Node<'_, '_>,
    tag: &str,
    path: &Path,
    context: &str,
) -> Result<f64, ReformatError> {
    let raw = required_child_text(node, tag, path, context)?;
    raw.parse::<f64>().map_err(|_| ReformatError::VocXmlParse {
        path: path.to_path_buf(),
        message: format!(
            "invalid <{tag}> value '{raw}' in {context}; expected floating-point number"
        ),
    })
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == tag)
}

fn optional_child_text(node: Node<'_, '_>, tag: &str) -> Option<String> {
    child_element(node, tag)
        .and_then(|child| child.text())
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}
