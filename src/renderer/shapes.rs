//! Rasterization for 2D primitives
//!
//! Turns lines, boxes and triangles into pixel coordinates for canvases that
//! draw into a pixel buffer. Nothing here clips; callers drop off-screen pixels.

use glam::IVec2;

/// One horizontal run of filled pixels, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

/// Pixels on the line from `from` to `to` (Bresenham, both endpoints included)
pub fn line_points(from: IVec2, to: IVec2) -> Vec<IVec2> {
    let delta = (to - from).abs();
    let step = IVec2::new((to.x - from.x).signum(), (to.y - from.y).signum());
    let mut points = Vec::with_capacity(delta.x.max(delta.y) as usize + 1);

    let mut p = from;
    let mut err = delta.x - delta.y;
    loop {
        points.push(p);
        if p == to {
            break;
        }
        let e2 = err * 2;
        if e2 > -delta.y {
            err -= delta.y;
            p.x += step.x;
        }
        if e2 < delta.x {
            err += delta.x;
            p.y += step.y;
        }
    }

    points
}

/// Rows covered by a `size` box whose top-left is `pos`
pub fn box_spans(pos: IVec2, size: IVec2) -> Vec<Span> {
    if size.x <= 0 || size.y <= 0 {
        return Vec::new();
    }
    (pos.y..pos.y + size.y)
        .map(|y| Span {
            y,
            x_start: pos.x,
            x_end: pos.x + size.x - 1,
        })
        .collect()
}

/// Scanline fill of a triangle
pub fn triangle_spans(points: [IVec2; 3]) -> Vec<Span> {
    let top = points[0].y.min(points[1].y).min(points[2].y);
    let bottom = points[0].y.max(points[1].y).max(points[2].y);
    let mut spans = Vec::with_capacity((bottom - top + 1) as usize);

    for y in top..=bottom {
        let mut lo = i32::MAX;
        let mut hi = i32::MIN;

        for i in 0..3 {
            let a = points[i];
            let b = points[(i + 1) % 3];
            if y < a.y.min(b.y) || y > a.y.max(b.y) {
                continue;
            }
            if a.y == b.y {
                // Flat edge on this row
                lo = lo.min(a.x.min(b.x));
                hi = hi.max(a.x.max(b.x));
            } else {
                let t = (y - a.y) as f32 / (b.y - a.y) as f32;
                let x = (a.x as f32 + t * (b.x - a.x) as f32).round() as i32;
                lo = lo.min(x);
                hi = hi.max(x);
            }
        }

        if lo <= hi {
            spans.push(Span {
                y,
                x_start: lo,
                x_end: hi,
            });
        }
    }

    spans
}
