//! Output encoders: SVG path data, standalone SVG documents and raster images.

pub(crate) mod path;
pub(crate) mod raster;
pub(crate) mod svg;
