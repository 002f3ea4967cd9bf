//! Filled shape primitives
//!
//! SDL2's core canvas only fills axis-aligned rectangles. Polygons and
//! circles are filled here with horizontal scanlines. Span computation is
//! kept separate from drawing so it can be checked without a window.

use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// A horizontal run of pixels: `(y, x_start, x_end)`, both ends inclusive
pub type Span = (i32, i32, i32);

/// Scanline spans covering a simple polygon
///
/// Each row is sampled through its pixel centre; edges follow the half-open
/// rule so shared vertices are not counted twice.
pub fn polygon_spans(points: &[Point]) -> Vec<Span> {
    if points.len() < 3 {
        return Vec::new();
    }

    let min_y = points.iter().map(|p| p.y()).min().unwrap_or(0);
    let max_y = points.iter().map(|p| p.y()).max().unwrap_or(0);

    let mut spans = Vec::new();
    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

    for y in min_y..max_y {
        let sample_y = y as f32 + 0.5;
        crossings.clear();

        for (i, a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            let (ay, by) = (a.y() as f32, b.y() as f32);

            if (ay <= sample_y && sample_y < by) || (by <= sample_y && sample_y < ay) {
                let t = (sample_y - ay) / (by - ay);
                crossings.push(a.x() as f32 + t * (b.x() - a.x()) as f32);
            }
        }

        crossings.sort_by(|l, r| l.total_cmp(r));

        for pair in crossings.chunks_exact(2) {
            let start = pair[0].round() as i32;
            let end = pair[1].round() as i32 - 1;
            if end >= start {
                spans.push((y, start, end));
            }
        }
    }

    spans
}

/// Scanline spans covering a filled circle
pub fn circle_spans(center: Point, radius: i32) -> Vec<Span> {
    let radius = radius.max(0);
    let r_squared = (radius * radius) as f32;

    (-radius..=radius)
        .map(|dy| {
            let dx = (r_squared - (dy * dy) as f32).sqrt() as i32;
            (center.y() + dy, center.x() - dx, center.x() + dx)
        })
        .collect()
}

fn draw_spans(canvas: &mut Canvas<Window>, spans: &[Span], color: Color) -> Result<(), String> {
    canvas.set_draw_color(color);
    for &(y, start, end) in spans {
        canvas.draw_line(Point::new(start, y), Point::new(end, y))?;
    }
    Ok(())
}

pub fn fill_polygon(canvas: &mut Canvas<Window>, points: &[Point], color: Color) -> Result<(), String> {
    draw_spans(canvas, &polygon_spans(points), color)
}

pub fn fill_circle(
    canvas: &mut Canvas<Window>,
    center: Point,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    draw_spans(canvas, &circle_spans(center, radius), color)
}
