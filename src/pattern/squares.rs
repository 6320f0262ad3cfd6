//! Square grids: plain, nested outlines, and triangle mosaics.

use super::{PatternContext, points};
use crate::svg::Attributes;

/// 6×6 grid of filled squares.
pub fn squares(ctx: &mut PatternContext<'_>) {
    let square_size = ctx.hex_mapped(0, 10.0, 60.0);

    ctx.svg.set_size(square_size * 6.0, square_size * 6.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let val = ctx.hex(i, 1);
            let styles = ctx.filled_style(val);
            ctx.svg.rect(
                f64::from(x) * square_size,
                f64::from(y) * square_size,
                square_size,
                square_size,
                styles,
            );
            i += 1;
        }
    }
}

/// Outlined squares, each with a smaller outlined square at its centre.
///
/// The inner square samples the mirrored index `39 - i`.
pub fn nested_squares(ctx: &mut PatternContext<'_>) {
    let block_size = ctx.hex_mapped(0, 4.0, 12.0);
    let square_size = block_size * 7.0;
    let extent = (square_size + block_size) * 6.0 + block_size * 6.0;

    ctx.svg.set_size(extent, extent);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let offset = |n: i32| {
                let n = f64::from(n);
                n * square_size + n * block_size * 2.0 + block_size / 2.0
            };
            let (ox, oy) = (offset(x), offset(y));

            let val = ctx.hex(i, 1);
            let outer = ctx.ring_style(val, block_size);
            ctx.svg.rect(ox, oy, square_size, square_size, outer);

            let val = ctx.hex(39 - i, 1);
            let inner = ctx.ring_style(val, block_size);
            ctx.svg.rect(
                ox + block_size * 2.0,
                oy + block_size * 2.0,
                block_size * 3.0,
                block_size * 3.0,
                inner,
            );

            i += 1;
        }
    }
}

/// 4×4 checkerboard of mosaic tiles built from right triangles.
///
/// Outer tiles sit on cells where `x` and `y` share parity and use one value;
/// inner tiles fill the rest and use two consecutive values.
pub fn mosaic_squares(ctx: &mut PatternContext<'_>) {
    let triangle_size = ctx.hex_mapped(0, 15.0, 50.0);
    let triangle = right_triangle_shape(triangle_size);

    ctx.svg.set_size(triangle_size * 8.0, triangle_size * 8.0);

    let mut i = 0;
    for y in 0..4 {
        for x in 0..4 {
            let tx = f64::from(x) * triangle_size * 2.0;
            let ty = f64::from(y) * triangle_size * 2.0;

            if x % 2 == y % 2 {
                let val = ctx.hex(i, 1);
                outer_mosaic_tile(ctx, &triangle, tx, ty, triangle_size, val);
            } else {
                let vals = [ctx.hex(i, 1), ctx.hex(i + 1, 1)];
                inner_mosaic_tile(ctx, &triangle, tx, ty, triangle_size, vals);
            }

            i += 1;
        }
    }
}

fn outer_mosaic_tile(
    ctx: &mut PatternContext<'_>,
    triangle: &str,
    x: f64,
    y: f64,
    size: f64,
    val: f64,
) {
    let styles = mosaic_style(ctx, val);
    for transform in [
        format!("translate({x}, {}) scale(1, -1)", y + size),
        format!("translate({}, {}) scale(-1, -1)", x + size * 2.0, y + size),
        format!("translate({x}, {}) scale(1, 1)", y + size),
        format!("translate({}, {}) scale(-1, 1)", x + size * 2.0, y + size),
    ] {
        ctx.svg.polyline(triangle, styles.clone().transform(transform));
    }
}

fn inner_mosaic_tile(
    ctx: &mut PatternContext<'_>,
    triangle: &str,
    x: f64,
    y: f64,
    size: f64,
    vals: [f64; 2],
) {
    let styles = mosaic_style(ctx, vals[0]);
    for transform in [
        format!("translate({}, {y}) scale(-1, 1)", x + size),
        format!("translate({}, {}) scale(1, -1)", x + size, y + size * 2.0),
    ] {
        ctx.svg.polyline(triangle, styles.clone().transform(transform));
    }

    let styles = mosaic_style(ctx, vals[1]);
    for transform in [
        format!("translate({}, {}) scale(-1, -1)", x + size, y + size * 2.0),
        format!("translate({}, {y}) scale(1, 1)", x + size),
    ] {
        ctx.svg.polyline(triangle, styles.clone().transform(transform));
    }
}

/// Stroke first, then `fill-opacity` ahead of `fill`.
fn mosaic_style(ctx: &PatternContext<'_>, val: f64) -> Attributes {
    Attributes::new()
        .with("stroke", ctx.options.stroke_color.as_str())
        .with("stroke-opacity", ctx.options.stroke_opacity)
        .with("fill-opacity", ctx.opacity(val))
        .with("fill", ctx.fill_color(val))
}

fn right_triangle_shape(side_length: f64) -> String {
    points(
        &[0.0, 0.0, side_length, side_length, 0.0, side_length, 0.0, 0.0],
        ", ",
    )
}
