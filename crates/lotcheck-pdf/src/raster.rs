//! Page rasterization for the recognition fallback.
//!
//! A scanned traceability page is a single full-page image XObject, so
//! the raster is recovered from the page's largest embedded image and
//! scaled against the MediaBox to the requested DPI. Pages with no
//! embedded image produce a blank white raster of the page's size.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, RgbImage};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::error::DocumentError;

const POINTS_PER_INCH: f64 = 72.0;

/// Render the page to PNG bytes at `dpi`.
pub(crate) fn rasterize_page(
    doc: &Document,
    page_id: ObjectId,
    dpi: u32,
) -> Result<Vec<u8>, DocumentError> {
    let (page_w, page_h) = media_box_size(doc, page_id);
    let target_w = ((page_w / POINTS_PER_INCH) * f64::from(dpi)).round().max(1.0) as u32;
    let target_h = ((page_h / POINTS_PER_INCH) * f64::from(dpi)).round().max(1.0) as u32;

    // The scan covers the MediaBox, so exact page-shaped scaling is
    // what the recognizer should see.
    let raster = match largest_page_image(doc, page_id)? {
        Some(scan) => scan.resize_exact(target_w, target_h, FilterType::Triangle),
        None => DynamicImage::ImageRgb8(RgbImage::from_pixel(
            target_w,
            target_h,
            image::Rgb([255, 255, 255]),
        )),
    };

    let mut png = Cursor::new(Vec::new());
    raster
        .write_to(&mut png, image::ImageFormat::Png)
        .map_err(|e| DocumentError::Raster(e.to_string()))?;
    Ok(png.into_inner())
}

/// Find and decode the largest image XObject on the page, if any.
fn largest_page_image(
    doc: &Document,
    page_id: ObjectId,
) -> Result<Option<DynamicImage>, DocumentError> {
    let mut best: Option<(i64, &Stream)> = None;
    for stream in page_image_streams(doc, page_id) {
        let w = stream.dict.get(b"Width").and_then(Object::as_i64).unwrap_or(0);
        let h = stream.dict.get(b"Height").and_then(Object::as_i64).unwrap_or(0);
        let area = w * h;
        if area > 0 && best.map_or(true, |(a, _)| area > a) {
            best = Some((area, stream));
        }
    }
    best.map(|(_, s)| decode_image(doc, s)).transpose()
}

/// Collect every image XObject stream reachable from the page's
/// resource dictionary (which may be inherited from the page tree).
fn page_image_streams(doc: &Document, page_id: ObjectId) -> Vec<&Stream> {
    let mut out = Vec::new();
    let Some(resources) = page_resources(doc, page_id) else {
        return out;
    };
    let Ok(xobjects) = resources.get(b"XObject").map(|o| resolve(doc, o)) else {
        return out;
    };
    let Ok(xobjects) = xobjects.as_dict() else {
        return out;
    };
    for (_, obj) in xobjects.iter() {
        if let Object::Stream(stream) = resolve(doc, obj) {
            let is_image = stream
                .dict
                .get(b"Subtype")
                .ok()
                .and_then(|o| o.as_name().ok())
                .map(|n| n == b"Image")
                .unwrap_or(false);
            if is_image {
                out.push(stream);
            }
        }
    }
    out
}

/// The page's /Resources dictionary, following /Parent links for
/// inherited entries.
fn page_resources(doc: &Document, page_id: ObjectId) -> Option<&Dictionary> {
    resolve_inherited(doc, page_id, b"Resources").and_then(|obj| resolve(doc, obj).as_dict().ok())
}

/// Look up `key` on the page dictionary, walking up the page tree
/// until found.
fn resolve_inherited<'a>(doc: &'a Document, page_id: ObjectId, key: &[u8]) -> Option<&'a Object> {
    let mut current_id = page_id;
    loop {
        let dict = doc.get_object(current_id).and_then(|o| o.as_dict()).ok()?;
        if let Ok(value) = dict.get(key) {
            return Some(value);
        }
        current_id = dict.get(b"Parent").ok()?.as_reference().ok()?;
    }
}

/// Decode one image XObject stream into pixels.
///
/// DCTDecode streams are JPEG bytes as-is; FlateDecode (or unfiltered)
/// streams are raw samples interpreted via ColorSpace and
/// BitsPerComponent. Anything else is an unsupported encoding.
fn decode_image(doc: &Document, stream: &Stream) -> Result<DynamicImage, DocumentError> {
    let filters = stream_filters(&stream.dict);

    if filters.iter().any(|f| f == "DCTDecode") {
        return image::load_from_memory(&stream.content)
            .map_err(|e| DocumentError::Raster(format!("JPEG decode failed: {e}")));
    }

    if let Some(other) = filters.iter().find(|f| *f != "FlateDecode") {
        return Err(DocumentError::Raster(format!(
            "unsupported image filter {other}"
        )));
    }

    let data = stream
        .decompressed_content()
        .map_err(|e| DocumentError::Raster(format!("image stream decode failed: {e}")))?;

    let width = stream.dict.get(b"Width").and_then(Object::as_i64).unwrap_or(0) as u32;
    let height = stream.dict.get(b"Height").and_then(Object::as_i64).unwrap_or(0) as u32;
    let bits = stream
        .dict
        .get(b"BitsPerComponent")
        .and_then(Object::as_i64)
        .unwrap_or(8);
    if width == 0 || height == 0 || bits != 8 {
        return Err(DocumentError::Raster(format!(
            "unsupported image geometry {width}x{height} at {bits} bpc"
        )));
    }

    let components = match color_space_name(doc, &stream.dict) {
        Some(name) if name == "DeviceRGB" => 3,
        Some(name) if name == "DeviceGray" => 1,
        // No usable ColorSpace entry: infer from the sample count.
        _ if data.len() as u64 == u64::from(width) * u64::from(height) * 3 => 3,
        _ if data.len() as u64 == u64::from(width) * u64::from(height) => 1,
        Some(name) => {
            return Err(DocumentError::Raster(format!(
                "unsupported color space {name}"
            )));
        }
        None => {
            return Err(DocumentError::Raster(
                "image has no recognizable color space".to_string(),
            ));
        }
    };

    let expected = width as usize * height as usize * components;
    if data.len() < expected {
        return Err(DocumentError::Raster(format!(
            "image stream truncated: {} of {expected} bytes",
            data.len()
        )));
    }

    let image = if components == 3 {
        RgbImage::from_raw(width, height, data[..expected].to_vec()).map(DynamicImage::ImageRgb8)
    } else {
        GrayImage::from_raw(width, height, data[..expected].to_vec()).map(DynamicImage::ImageLuma8)
    };
    image.ok_or_else(|| DocumentError::Raster("image buffer construction failed".to_string()))
}

fn stream_filters(dict: &Dictionary) -> Vec<String> {
    match dict.get(b"Filter") {
        Ok(Object::Name(name)) => vec![String::from_utf8_lossy(name).into_owned()],
        Ok(Object::Array(entries)) => entries
            .iter()
            .filter_map(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).into_owned())
            .collect(),
        _ => Vec::new(),
    }
}

fn color_space_name(doc: &Document, dict: &Dictionary) -> Option<String> {
    let obj = dict.get(b"ColorSpace").ok()?;
    match resolve(doc, obj) {
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// MediaBox dimensions in points, walking up the page tree when the
/// entry is inherited. Falls back to US Letter.
fn media_box_size(doc: &Document, page_id: ObjectId) -> (f64, f64) {
    resolve_inherited(doc, page_id, b"MediaBox")
        .and_then(|obj| rect_size(resolve(doc, obj)))
        .unwrap_or((612.0, 792.0))
}

fn rect_size(obj: &Object) -> Option<(f64, f64)> {
    let rect = obj.as_array().ok()?;
    if rect.len() < 4 {
        return None;
    }
    let coords: Vec<f64> = rect.iter().filter_map(number).collect();
    if coords.len() < 4 {
        return None;
    }
    Some(((coords[2] - coords[0]).abs(), (coords[3] - coords[1]).abs()))
}

fn number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(f64::from(*r)),
        _ => None,
    }
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj.as_reference() {
        Ok(id) => doc.get_object(id).unwrap_or(obj),
        Err(_) => obj,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;

    /// A one-page PDF whose page carries a single gray image XObject
    /// and no text, like a scan. MediaBox is one inch square so DPI
    /// maps directly to pixel size.
    fn scanned_pdf(image_w: u32, image_h: u32) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");

        let samples = vec![0x40u8; (image_w * image_h) as usize];
        let image_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => image_w as i64,
                "Height" => image_h as i64,
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            samples,
        ));

        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            b"q 72 0 0 72 0 0 cm /Im0 Do Q".to_vec(),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "MediaBox" => vec![0.into(), 0.into(), 72.into(), 72.into()],
            "Contents" => Object::Reference(content_id),
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => Object::Reference(image_id) },
            },
        });

        let pages_id = doc.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        });
        if let Ok(page) = doc.get_object_mut(page_id) {
            if let Ok(dict) = page.as_dict_mut() {
                dict.set("Parent", Object::Reference(pages_id));
            }
        }
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => Object::Reference(pages_id),
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn embedded_scan_is_recovered_and_scaled_to_dpi() {
        let doc = crate::PdfDocument::open(&scanned_pdf(8, 8)).unwrap();
        let png = doc.page_raster_png(0, 150).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        // One-inch page at 150 DPI.
        assert_eq!(decoded.width(), 150);
        assert_eq!(decoded.height(), 150);
    }

    #[test]
    fn scanned_page_has_empty_text_layer() {
        let doc = crate::PdfDocument::open(&scanned_pdf(4, 4)).unwrap();
        let text = doc.page_text(0).unwrap();
        assert!(text.trim().is_empty());
    }

    #[test]
    fn rect_size_handles_offset_media_box() {
        let rect = Object::Array(vec![10.into(), 10.into(), 82.into(), 154.into()]);
        assert_eq!(rect_size(&rect), Some((72.0, 144.0)));
    }

    #[test]
    fn rect_size_rejects_short_arrays() {
        let rect = Object::Array(vec![0.into(), 0.into()]);
        assert_eq!(rect_size(&rect), None);
    }
}
