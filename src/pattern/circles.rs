//! Circle-based patterns.

use super::PatternContext;
use crate::svg::Attributes;

/// Large translucent circles centred on grid points.
pub fn overlapping_circles(ctx: &mut PatternContext<'_>) {
    let diameter = ctx.hex_mapped(0, 25.0, 200.0);
    let radius = diameter / 2.0;

    ctx.svg.set_size(radius * 6.0, radius * 6.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let (xf, yf) = (f64::from(x), f64::from(y));
            let val = ctx.hex(i, 1);
            let styles = Attributes::new()
                .with("fill", ctx.fill_color(val))
                .with_style("opacity", ctx.opacity(val));

            ctx.svg.circle(xf * radius, yf * radius, radius, styles.clone());

            if x == 0 {
                ctx.svg.circle(6.0 * radius, yf * radius, radius, styles.clone());
            }

            if y == 0 {
                ctx.svg.circle(xf * radius, 6.0 * radius, radius, styles.clone());
            }

            if x == 0 && y == 0 {
                ctx.svg.circle(6.0 * radius, 6.0 * radius, radius, styles);
            }

            i += 1;
        }
    }
}

/// Hollow rings centred on grid points, wide enough to overlap their neighbours.
pub fn overlapping_rings(ctx: &mut PatternContext<'_>) {
    let ring_size = ctx.hex_mapped(0, 10.0, 60.0);
    let stroke_width = ring_size / 4.0;
    let r = ring_size - stroke_width / 2.0;

    ctx.svg.set_size(ring_size * 6.0, ring_size * 6.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let (xf, yf) = (f64::from(x), f64::from(y));
            let val = ctx.hex(i, 1);
            let styles = ctx.ring_style(val, stroke_width);

            ctx.svg.circle(xf * ring_size, yf * ring_size, r, styles.clone());

            if x == 0 {
                ctx.svg.circle(6.0 * ring_size, yf * ring_size, r, styles.clone());
            }

            if y == 0 {
                ctx.svg.circle(xf * ring_size, 6.0 * ring_size, r, styles.clone());
            }

            if x == 0 && y == 0 {
                ctx.svg.circle(6.0 * ring_size, 6.0 * ring_size, r, styles);
            }

            i += 1;
        }
    }
}

/// A ring with a solid dot in its centre per cell.
///
/// The ring samples cell `i`, the dot samples the mirrored index `39 - i`.
pub fn concentric_circles(ctx: &mut PatternContext<'_>) {
    let ring_size = ctx.hex_mapped(0, 10.0, 60.0);
    let stroke_width = ring_size / 5.0;
    let cell = ring_size + stroke_width;

    ctx.svg.set_size(cell * 6.0, cell * 6.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let (xf, yf) = (f64::from(x), f64::from(y));
            let cx = xf * ring_size + xf * stroke_width + cell / 2.0;
            let cy = yf * ring_size + yf * stroke_width + cell / 2.0;

            let val = ctx.hex(i, 1);
            let ring = ctx.ring_style(val, stroke_width);
            ctx.svg.circle(cx, cy, ring_size / 2.0, ring);

            let val = ctx.hex(39 - i, 1);
            let dot = Attributes::new()
                .with("fill", ctx.fill_color(val))
                .with("fill-opacity", ctx.opacity(val));
            ctx.svg.circle(cx, cy, ring_size / 4.0, dot);

            i += 1;
        }
    }
}
