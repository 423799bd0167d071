use easel::canvas::{draw, path, rect, state};
use easel::core::config;
use easel::core::types::*;
use easel::platform::surface_cairo::CairoSurface;
use std::fs::File;
use std::process::exit;

struct Args {
    out: String,
    width: i32,
    height: i32,
}

fn parse_args() -> Args {
    let mut args = Args {
        out: config::DEFAULT_OUT.to_string(),
        width: config::DEFAULT_WIDTH,
        height: config::DEFAULT_HEIGHT,
    };

    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--out" if i + 1 < argv.len() => {
                i += 1;
                args.out = argv[i].clone();
            }
            "--width" if i + 1 < argv.len() => {
                i += 1;
                args.width = argv[i].parse().unwrap_or(config::DEFAULT_WIDTH);
            }
            "--height" if i + 1 < argv.len() => {
                i += 1;
                args.height = argv[i].parse().unwrap_or(config::DEFAULT_HEIGHT);
            }
            _ => {
                eprintln!("Usage: easel-demo [--out <png>] [--width <px>] [--height <px>]");
                exit(1);
            }
        }
        i += 1;
    }

    args
}

fn draw_scene(s: &mut CairoSurface, width: f64, height: f64) -> Result<(), cairo::Error> {
    // Background
    state::set_color(s, Color::from_hex(config::DEMO_BG, 1.0));
    rect::fill_rect(s, Rect::new(0.0, 0.0, width, height))?;

    // Rounded card with a border
    let card = Rect::new(40.0, 40.0, 240.0, 140.0);
    path::begin_path(s);
    path::round_rect(s, card, config::CARD_CORNER_RADIUS);
    state::set_color(s, Color::from_hex(config::DEMO_CARD, 1.0));
    draw::fill(s, None, FillRule::NonZero)?;
    state::set_color(s, Color::from_hex(config::DEMO_BORDER, 1.0));
    state::set_line_width(s, config::CARD_BORDER_WIDTH);
    draw::stroke(s, None)?;

    // Punch a notch out of the card
    rect::clear_rect(s, Rect::new(56.0, 56.0, 24.0, 8.0))?;

    // Dashed connector curving away from the card
    path::begin_path(s);
    path::move_to(s, Point::new(280.0, 110.0));
    path::bezier_curve_to(
        s,
        Point::new(360.0, 110.0),
        Point::new(360.0, 250.0),
        Point::new(440.0, 250.0),
    );
    state::set_color(s, Color::from_hex(config::DEMO_ACCENT, 1.0));
    state::set_dash(s, &[6.0, 4.0], 0.0);
    draw::stroke(s, None)?;
    state::set_dash(s, &[], 0.0);

    // Elliptical node at the far end
    path::begin_path(s);
    path::ellipse(
        s,
        Point::new(480.0, 250.0),
        Radii::new(60.0, 36.0),
        0.0,
        AngleSpan::full(),
        Direction::Clockwise,
    );
    state::set_color(s, Color::from_hex(config::DEMO_NODE, 1.0));
    draw::fill(s, None, FillRule::NonZero)?;

    // Clipped highlight band across the node
    state::save(s)?;
    draw::clip(s, None, FillRule::NonZero)?;
    state::set_color(s, Color::from_hex(config::DEMO_HIGHLIGHT, 0.15));
    rect::fill_rect(s, Rect::new(420.0, 222.0, 120.0, 16.0))?;
    state::restore(s)?;

    // The ellipse is still the current path; probe it
    let center_hit = draw::is_point_in_path(s, None, Point::new(480.0, 250.0), FillRule::NonZero)?;
    let rim_hit = draw::is_point_in_stroke(s, None, Point::new(540.0, 250.0))?;
    log::info!("hit tests: node center = {center_hit}, node rim = {rim_hit}");

    Ok(())
}

fn main() {
    env_logger::init();

    let args = parse_args();

    let target = match cairo::ImageSurface::create(cairo::Format::ARgb32, args.width, args.height) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("failed to create {}x{} image surface: {e}", args.width, args.height);
            exit(1);
        }
    };
    let cr = match cairo::Context::new(&target) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to create drawing context: {e}");
            exit(1);
        }
    };
    let mut surface = CairoSurface::new(cr);

    if let Err(e) = draw_scene(&mut surface, args.width as f64, args.height as f64) {
        eprintln!("drawing failed: {e}");
        exit(1);
    }

    let mut file = match File::create(&args.out) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("failed to create {}: {e}", args.out);
            exit(1);
        }
    };
    if let Err(e) = target.write_to_png(&mut file) {
        eprintln!("failed to write {}: {e}", args.out);
        exit(1);
    }
    log::info!("wrote {}", args.out);
}
