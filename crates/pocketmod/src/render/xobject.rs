//! XObject creation for page embedding
//!
//! This module handles creating Form XObjects from source PDF pages,
//! which are then placed onto the output sheet with transformations.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::types::{PocketModError, Result};
use flate2::read::ZlibDecoder;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;
use std::io;

/// Upper bound on `/Parent` hops when looking up inherited page attributes
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// The visible part of a source page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Visible box `[llx, lly, urx, ury]`: the CropBox clipped to the MediaBox
    pub bbox: [f32; 4],
    /// Clockwise `/Rotate` in degrees, one of 0, 90, 180 or 270
    pub rotation: i32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            bbox: [0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1],
            rotation: 0,
        }
    }
}

impl PageGeometry {
    pub fn width(&self) -> f32 {
        self.bbox[2] - self.bbox[0]
    }

    pub fn height(&self) -> f32 {
        self.bbox[3] - self.bbox[1]
    }

    /// Width and height as the page is displayed, after `/Rotate`
    pub fn display_size(&self) -> (f32, f32) {
        if self.rotation % 180 == 90 {
            (self.height(), self.width())
        } else {
            (self.width(), self.height())
        }
    }
}

/// A source page copied into the output document as a Form XObject
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageXObject {
    /// Object ID of the XObject stream in the output document
    pub id: ObjectId,
    /// Visible box and rotation of the source page; the box is the XObject's BBox
    pub geometry: PageGeometry,
}

// =============================================================================
// XObject Creation
// =============================================================================

/// Create an XObject from a source page.
///
/// Resources are deep-copied into `output`; `cache` maps source object IDs
/// to already-copied output IDs so shared fonts and images are copied once
/// per sheet.
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<PageXObject> {
    let page_dict = source.get_dictionary(page_id)?;
    let geometry = page_geometry(source, page_id);
    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(geometry.bbox.iter().map(|&v| Object::Real(v)).collect()),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    // Resources may live on an ancestor Pages node
    if let Some(resources) = inherited_attribute(source, page_id, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    let id = output.add_object(Stream::new(xobject_dict, content_data));
    Ok(PageXObject { id, geometry })
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the decoded content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Stream(stream) => stream_data(*id, stream),
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => Ok(Vec::new()),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                result.extend_from_slice(&stream_data(*id, stream)?);
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

/// Decode a content stream, failing on data its filters cannot decode.
///
/// Unfiltered streams are used as they are. lopdf logs and skips invalid
/// zlib data, so FlateDecode input is inflated strictly before each stage.
fn stream_data(id: ObjectId, stream: &Stream) -> Result<Vec<u8>> {
    if stream.dict.get(b"Filter").is_err() {
        return Ok(stream.content.clone());
    }

    let params = stream.dict.get(b"DecodeParms").ok();
    let mut data = stream.content.clone();
    for filter in stream.filters()? {
        if filter == b"FlateDecode" {
            check_zlib(&data).map_err(|source| PocketModError::CorruptContent { id, source })?;
        }

        let mut stage = Dictionary::new();
        stage.set("Filter", Object::Name(filter.to_vec()));
        if let Some(params) = params {
            stage.set("DecodeParms", params.clone());
        }
        data = Stream::new(stage, data).decompressed_content()?;
    }

    Ok(data)
}

fn check_zlib(data: &[u8]) -> io::Result<()> {
    if data.is_empty() {
        return Ok(());
    }
    io::copy(&mut ZlibDecoder::new(data), &mut io::sink())?;
    Ok(())
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// The output ID is reserved and cached before the referenced object is
/// copied, so reference cycles resolve to the same output object.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Get source page dimensions (width, height) in points, as displayed
pub fn get_page_dimensions(doc: &Document, page_id: ObjectId) -> (f32, f32) {
    page_geometry(doc, page_id).display_size()
}

/// Visible box and rotation of a page.
///
/// The CropBox is clipped to the MediaBox; a missing, malformed or disjoint
/// CropBox leaves the whole MediaBox visible. Both boxes and `/Rotate` are
/// inherited through the page tree.
pub fn page_geometry(doc: &Document, page_id: ObjectId) -> PageGeometry {
    let Some(media_box) = page_box(doc, page_id, b"MediaBox") else {
        return PageGeometry {
            rotation: page_rotation(doc, page_id),
            ..Default::default()
        };
    };

    let bbox = page_box(doc, page_id, b"CropBox")
        .and_then(|crop_box| intersect(crop_box, media_box))
        .unwrap_or(media_box);

    PageGeometry {
        bbox,
        rotation: page_rotation(doc, page_id),
    }
}

/// Inherited `/Rotate`, normalised into 0..360. Values that are not a
/// multiple of 90 are ignored.
fn page_rotation(doc: &Document, page_id: ObjectId) -> i32 {
    let rotate = inherited_attribute(doc, page_id, b"Rotate")
        .and_then(|obj| resolve(doc, obj))
        .and_then(|obj| obj.as_i64().ok())
        .unwrap_or(0)
        .rem_euclid(360);

    if rotate % 90 == 0 { rotate as i32 } else { 0 }
}

/// A page boundary box as `[llx, lly, urx, ury]` with `llx < urx` and `lly < ury`
fn page_box(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<[f32; 4]> {
    let values = resolve(doc, inherited_attribute(doc, page_id, key)?)?
        .as_array()
        .ok()?;
    if values.len() != 4 {
        return None;
    }

    let mut rect = [0.0; 4];
    for (slot, value) in rect.iter_mut().zip(values) {
        *slot = extract_number(resolve(doc, value)?)?;
    }

    let [x1, y1, x2, y2] = rect;
    let normalized = [x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)];
    (normalized[2] > normalized[0] && normalized[3] > normalized[1]).then_some(normalized)
}

fn intersect(a: [f32; 4], b: [f32; 4]) -> Option<[f32; 4]> {
    let rect = [a[0].max(b[0]), a[1].max(b[1]), a[2].min(b[2]), a[3].min(b[3])];
    (rect[2] > rect[0] && rect[3] > rect[1]).then_some(rect)
}

/// Look up a page attribute, walking up the page tree for inheritable keys
fn inherited_attribute<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut dict = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        let parent = dict.get(b"Parent").and_then(Object::as_reference).ok()?;
        dict = doc.get_dictionary(parent).ok()?;
    }
    None
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Option<&'a Object> {
    match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
