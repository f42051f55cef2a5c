use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{StonkError, StonkResult};

const MAX_DIM: u32 = 16_384;

/// Options for turning an SVG document into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOpts {
    /// Uniform scale applied to the document's intrinsic size.
    pub scale: f32,
    /// Straight RGBA8 fill painted under the drawing; `None` keeps it transparent.
    pub background: Option<[u8; 4]>,
}

impl Default for RasterOpts {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
        }
    }
}

/// Rasterized drawing in straight (non-premultiplied) RGBA8, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes, four per pixel.
    pub rgba8: Vec<u8>,
}

impl RasterImage {
    /// Straight RGBA of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Encode as PNG at `path`, creating parent directories as needed.
    pub fn save_png(&self, path: impl AsRef<Path>) -> StonkResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.rgba8,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Parse SVG bytes into a `usvg` tree.
pub fn parse_svg(bytes: &[u8]) -> StonkResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize an SVG document with `resvg`.
pub fn rasterize(svg: &str, opts: RasterOpts) -> StonkResult<RasterImage> {
    if !opts.scale.is_finite() || opts.scale <= 0.0 {
        return Err(StonkError::validation(format!(
            "raster scale must be finite and > 0, got {}",
            opts.scale
        )));
    }
    let tree = parse_svg(svg.as_bytes())?;
    let size = tree.size();
    let width = to_px(size.width() * opts.scale)?;
    let height = to_px(size.height() * opts.scale)?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StonkError::render("failed to allocate svg pixmap"))?;
    if let Some([r, g, b, a]) = opts.background {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, a));
    }
    let xform = resvg::tiny_skia::Transform::from_scale(opts.scale, opts.scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba8 = pixmap.data().to_vec();
    demultiply_rgba8_in_place(&mut rgba8);
    tracing::debug!(width, height, "rasterized svg");
    Ok(RasterImage {
        width,
        height,
        rgba8,
    })
}

fn to_px(v: f32) -> StonkResult<u32> {
    if !v.is_finite() || v <= 0.0 {
        return Err(StonkError::render("svg has invalid width/height"));
    }
    let px = (v.ceil() as u32).max(1);
    if px > MAX_DIM {
        return Err(StonkError::render(format!(
            "svg raster size too large: {px} (max {MAX_DIM})"
        )));
    }
    Ok(px)
}

fn demultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
