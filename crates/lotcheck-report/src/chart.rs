//! Presence bar chart rendered to PNG.
//!
//! One bar per checklist field (zero-height bars included), page count
//! on the y axis, field names rotated on the x axis. Pure-Rust
//! rasterization: tiny-skia for the canvas and fontdue for glyphs.

use std::path::Path;

use fontdue::{Font, FontSettings};
use lotcheck_core::PresenceTally;
use tiny_skia::{Paint, Pixmap, Rect, Transform};

use crate::error::ReportError;

const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

const WIDTH: u32 = 1200;
const HEIGHT: u32 = 600;
const MARGIN_LEFT: f32 = 70.0;
const MARGIN_RIGHT: f32 = 20.0;
const MARGIN_TOP: f32 = 50.0;
// Room for the rotated field names under the axis.
const MARGIN_BOTTOM: f32 = 230.0;

const TITLE_PX: f32 = 20.0;
const LABEL_PX: f32 = 12.0;
const BAR_FILL: (u8, u8, u8) = (135, 206, 235);
const AXIS_GRAY: (u8, u8, u8) = (60, 60, 60);

/// Render the presence tally as a bar chart and write it as PNG.
pub fn write_presence_chart(
    path: &Path,
    tally: &PresenceTally,
    page_count: usize,
) -> Result<(), ReportError> {
    let font = Font::from_bytes(FONT_BYTES, FontSettings::default())
        .map_err(|e| ReportError::Chart(format!("font load failed: {e}")))?;

    let mut pixmap = Pixmap::new(WIDTH, HEIGHT)
        .ok_or_else(|| ReportError::Chart("pixmap allocation failed".to_string()))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let plot_w = WIDTH as f32 - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT as f32 - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline_y = MARGIN_TOP + plot_h;
    let y_max = page_count.max(tally.max_count()).max(1);

    // Axes.
    fill_rect(&mut pixmap, MARGIN_LEFT - 1.0, MARGIN_TOP, 1.0, plot_h, AXIS_GRAY);
    fill_rect(&mut pixmap, MARGIN_LEFT - 1.0, baseline_y, plot_w + 1.0, 1.0, AXIS_GRAY);

    // Y ticks at integer page counts.
    let step = (y_max as f32 / 5.0).ceil().max(1.0) as usize;
    let mut tick = 0;
    while tick <= y_max {
        let y = baseline_y - (tick as f32 / y_max as f32) * plot_h;
        fill_rect(&mut pixmap, MARGIN_LEFT - 5.0, y, 4.0, 1.0, AXIS_GRAY);
        let label = tick.to_string();
        let w = text_width(&font, &label, LABEL_PX);
        draw_text(&mut pixmap, &font, &label, MARGIN_LEFT - 9.0 - w, y + LABEL_PX / 2.0, LABEL_PX);
        tick += step;
    }

    // Bars with rotated field-name labels beneath.
    let entries: Vec<(&str, usize)> = tally.iter().collect();
    if !entries.is_empty() {
        let slot = plot_w / entries.len() as f32;
        let bar_w = (slot * 0.7).max(1.0);
        for (i, (field, count)) in entries.iter().enumerate() {
            let x = MARGIN_LEFT + i as f32 * slot + (slot - bar_w) / 2.0;
            let h = (*count as f32 / y_max as f32) * plot_h;
            if h > 0.0 {
                fill_rect(&mut pixmap, x, baseline_y - h, bar_w, h, BAR_FILL);
            }
            let center = MARGIN_LEFT + i as f32 * slot + slot / 2.0;
            draw_text_rotated(&mut pixmap, &font, field, center, baseline_y + 8.0, LABEL_PX);
        }
    }

    let title = "Field Presence Across Pages";
    let title_w = text_width(&font, title, TITLE_PX);
    draw_text(
        &mut pixmap,
        &font,
        title,
        (WIDTH as f32 - title_w) / 2.0,
        MARGIN_TOP - 18.0,
        TITLE_PX,
    );

    let png = pixmap
        .encode_png()
        .map_err(|e| ReportError::Chart(format!("PNG encode failed: {e}")))?;
    std::fs::write(path, png)?;
    Ok(())
}

fn fill_rect(pixmap: &mut Pixmap, x: f32, y: f32, w: f32, h: f32, rgb: (u8, u8, u8)) {
    let Some(rect) = Rect::from_xywh(x, y, w, h) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgb.0, rgb.1, rgb.2, 255);
    paint.anti_alias = false;
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
}

/// Advance-width of `text` at `px`.
fn text_width(font: &Font, text: &str, px: f32) -> f32 {
    text.chars()
        .map(|c| font.metrics(c, px).advance_width)
        .sum()
}

/// Rasterize `text` into a grayscale coverage buffer, one line,
/// baseline at `px` from the top.
fn rasterize_line(font: &Font, text: &str, px: f32) -> (usize, usize, Vec<u8>) {
    let width = text_width(font, text, px).ceil() as usize + 2;
    let height = (px * 1.4).ceil() as usize;
    let baseline = px.ceil() as usize;
    let mut coverage = vec![0u8; width * height];

    let mut cursor = 0.0f32;
    for c in text.chars() {
        let (metrics, bitmap) = font.rasterize(c, px);
        let glyph_left = (cursor + metrics.xmin as f32).round() as isize;
        let glyph_top = baseline as isize - metrics.height as isize - metrics.ymin as isize;
        for gy in 0..metrics.height {
            for gx in 0..metrics.width {
                let a = bitmap[gy * metrics.width + gx];
                if a == 0 {
                    continue;
                }
                let tx = glyph_left + gx as isize;
                let ty = glyph_top + gy as isize;
                if tx >= 0 && (tx as usize) < width && ty >= 0 && (ty as usize) < height {
                    let cell = &mut coverage[ty as usize * width + tx as usize];
                    *cell = (*cell).max(a);
                }
            }
        }
        cursor += metrics.advance_width;
    }
    (width, height, coverage)
}

/// Blend black text onto the opaque canvas with baseline at `(x, y)`.
fn draw_text(pixmap: &mut Pixmap, font: &Font, text: &str, x: f32, y: f32, px: f32) {
    let (w, h, coverage) = rasterize_line(font, text, px);
    let origin_x = x.round() as isize;
    let origin_y = y.round() as isize - px.ceil() as isize;
    blend_coverage(pixmap, &coverage, w, h, |sx, sy| {
        (origin_x + sx as isize, origin_y + sy as isize)
    });
}

/// As [`draw_text`] but rotated 90° so the text runs bottom-up, centered
/// horizontally on `x`, starting `y` pixels from the top of the label area.
fn draw_text_rotated(pixmap: &mut Pixmap, font: &Font, text: &str, x: f32, y: f32, px: f32) {
    let (w, h, coverage) = rasterize_line(font, text, px);
    let origin_x = x.round() as isize - h as isize / 2;
    let origin_y = y.round() as isize;
    blend_coverage(pixmap, &coverage, w, h, |sx, sy| {
        (origin_x + sy as isize, origin_y + sx as isize)
    });
}

fn blend_coverage(
    pixmap: &mut Pixmap,
    coverage: &[u8],
    w: usize,
    h: usize,
    map: impl Fn(usize, usize) -> (isize, isize),
) {
    let canvas_w = pixmap.width() as isize;
    let canvas_h = pixmap.height() as isize;
    let data = pixmap.data_mut();
    for sy in 0..h {
        for sx in 0..w {
            let a = coverage[sy * w + sx];
            if a == 0 {
                continue;
            }
            let (dx, dy) = map(sx, sy);
            if dx < 0 || dy < 0 || dx >= canvas_w || dy >= canvas_h {
                continue;
            }
            let offset = (dy * canvas_w + dx) as usize * 4;
            // Canvas is opaque; blending black at alpha `a` just darkens.
            let inv = u32::from(255 - a);
            for channel in 0..3 {
                let old = u32::from(data[offset + channel]);
                data[offset + channel] = ((old * inv) / 255) as u8;
            }
            data[offset + 3] = 255;
        }
    }
}
