//! Draw one seeded smooth curve, print its path data and write an SVG next to `target/`.
use stonkline::{CurveConfig, CurveSession};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = CurveConfig {
        seed: Some(7),
        ..CurveConfig::default()
    };
    let stroke = cfg.stroke.clone();
    let mut session = CurveSession::new(cfg)?;
    session.on_redraw(move |d| {
        let svg = stonkline::svg_document(d, &stroke);
        let out = std::path::Path::new("target").join(format!(
            "stonkline_{}x{}.svg",
            d.canvas.width, d.canvas.height
        ));
        if let Err(e) = std::fs::create_dir_all("target").and_then(|_| std::fs::write(&out, svg)) {
            eprintln!("write {}: {e}", out.display());
        } else {
            eprintln!("wrote {}", out.display());
        }
    });

    let d = session.mount()?;
    println!("{}", d.path_data());
    session.resize(1280.0, 720.0)?;
    Ok(())
}
