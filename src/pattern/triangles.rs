//! Alternating triangle strips, pointing vertically or horizontally.

use super::{PatternContext, points};

/// Rotation that flips every other triangle so neighbours interlock.
fn rotation(x: i32, y: i32) -> u32 {
    let flipped = if y % 2 == 0 { x % 2 == 0 } else { x % 2 != 0 };
    if flipped { 180 } else { 0 }
}

/// Rows of triangles alternately pointing up and down.
pub fn triangles(ctx: &mut PatternContext<'_>) {
    let side_length = ctx.hex_mapped(0, 15.0, 80.0);
    let triangle_height = side_length / 2.0 * 3f64.sqrt();
    let triangle = points(
        &[
            side_length / 2.0,
            0.0,
            side_length,
            triangle_height,
            0.0,
            triangle_height,
            side_length / 2.0,
            0.0,
        ],
        ", ",
    );

    ctx.svg.set_size(side_length * 3.0, triangle_height * 6.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let val = ctx.hex(i, 1);
            let styles = ctx.filled_style(val);
            let rotate = format!(
                "rotate({}, {}, {})",
                rotation(x, y),
                side_length / 2.0,
                triangle_height / 2.0
            );
            let at = |column: f64| {
                styles.clone().transform(format!(
                    "translate({}, {}) {rotate}",
                    column * side_length * 0.5 - side_length / 2.0,
                    triangle_height * f64::from(y)
                ))
            };

            ctx.svg.polyline(triangle.clone(), at(f64::from(x)));

            if x == 0 {
                ctx.svg.polyline(triangle.clone(), at(6.0));
            }

            i += 1;
        }
    }
}

/// Columns of triangles alternately pointing left and right.
pub fn triangles_rotated(ctx: &mut PatternContext<'_>) {
    let side_length = ctx.hex_mapped(0, 15.0, 80.0);
    let triangle_width = side_length / 2.0 * 3f64.sqrt();
    let triangle = points(
        &[
            0.0,
            0.0,
            triangle_width,
            side_length / 2.0,
            0.0,
            side_length,
            0.0,
            0.0,
        ],
        ", ",
    );

    ctx.svg.set_size(triangle_width * 6.0, side_length * 3.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let val = ctx.hex(i, 1);
            let styles = ctx.filled_style(val);
            let rotate = format!(
                "rotate({}, {}, {})",
                rotation(x, y),
                triangle_width / 2.0,
                side_length / 2.0
            );
            let at = |row: f64| {
                styles.clone().transform(format!(
                    "translate({}, {}) {rotate}",
                    triangle_width * f64::from(x),
                    row * side_length * 0.5 - side_length / 2.0
                ))
            };

            ctx.svg.polyline(triangle.clone(), at(f64::from(y)));

            if y == 0 {
                ctx.svg.polyline(triangle.clone(), at(6.0));
            }

            i += 1;
        }
    }
}
