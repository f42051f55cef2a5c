use super::*;

const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="8" height="4" viewBox="0 0 8 4">
  <rect x="0" y="0" width="4" height="4" fill="#00ff00"/>
</svg>"##;

#[test]
fn rasterize_paints_shapes_over_transparency() {
    let img = rasterize(SQUARE, RasterOpts::default()).unwrap();
    assert_eq!((img.width, img.height), (8, 4));
    assert_eq!(img.rgba8.len(), 8 * 4 * 4);
    assert_eq!(img.pixel(1, 1), Some([0, 255, 0, 255]));
    assert_eq!(img.pixel(6, 1), Some([0, 0, 0, 0]));
    assert_eq!(img.pixel(8, 0), None);
}

#[test]
fn background_and_scale_apply() {
    let opts = RasterOpts {
        scale: 2.0,
        background: Some([0, 0, 0, 255]),
    };
    let img = rasterize(SQUARE, opts).unwrap();
    assert_eq!((img.width, img.height), (16, 8));
    assert_eq!(img.pixel(14, 2), Some([0, 0, 0, 255]));
    assert_eq!(img.pixel(2, 2), Some([0, 255, 0, 255]));
}

#[test]
fn invalid_inputs_are_errors() {
    assert!(rasterize("not svg", RasterOpts::default()).is_err());
    let opts = RasterOpts {
        scale: 0.0,
        background: None,
    };
    assert!(matches!(
        rasterize(SQUARE, opts),
        Err(StonkError::Validation(_))
    ));
}

#[test]
fn demultiply_restores_straight_alpha() {
    let mut px = [64u8, 0, 128, 128, 10, 20, 30, 0];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(px, [128, 0, 255, 128, 0, 0, 0, 0]);
}

#[test]
fn save_png_writes_file() {
    let img = rasterize(SQUARE, RasterOpts::default()).unwrap();
    let out = std::path::PathBuf::from("target")
        .join("raster_unit")
        .join("square.png");
    let _ = std::fs::remove_file(&out);
    img.save_png(&out).unwrap();
    assert!(out.exists());
}
