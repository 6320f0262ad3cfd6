//! Plus-sign patterns, upright and rotated into Xs.

use super::PatternContext;
use crate::svg::{Attributes, SvgDocument};

/// Draws a plus made of two overlapping bars inside a group carrying `attrs`.
///
/// The plus spans `3 * square_size` in both directions.
fn draw_plus(svg: &mut SvgDocument, square_size: f64, attrs: Attributes) {
    svg.begin_group(attrs);
    svg.rect(square_size, 0.0, square_size, square_size * 3.0, Attributes::new());
    svg.rect(0.0, square_size, square_size * 3.0, square_size, Attributes::new());
    svg.end_group();
}

/// Interlocking plus signs, odd rows shifted by one bar width.
pub fn plus_signs(ctx: &mut PatternContext<'_>) {
    let square_size = ctx.hex_mapped(0, 10.0, 25.0);
    let plus_size = square_size * 3.0;

    ctx.svg.set_size(square_size * 12.0, square_size * 12.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let (xf, yf) = (f64::from(x), f64::from(y));
            let val = ctx.hex(i, 1);
            let dx = if y % 2 == 0 { 0.0 } else { 1.0 };

            let styles = Attributes::new()
                .with("fill", ctx.fill_color(val))
                .with("stroke", ctx.options.stroke_color.as_str())
                .with("stroke-opacity", ctx.options.stroke_opacity)
                .with_style("fill-opacity", ctx.opacity(val));

            let tx = |col: f64| col * plus_size - xf * square_size + dx * square_size - square_size;
            let ty = |row: f64| row * plus_size - yf * square_size - plus_size / 2.0;
            let at = |x: f64, y: f64| styles.clone().transform(format!("translate({x},{y})"));

            draw_plus(&mut ctx.svg, square_size, at(tx(xf), ty(yf)));

            if x == 0 {
                draw_plus(&mut ctx.svg, square_size, at(tx(4.0), ty(yf)));
            }

            if y == 0 {
                draw_plus(&mut ctx.svg, square_size, at(tx(xf), ty(4.0)));
            }

            if x == 0 && y == 0 {
                draw_plus(&mut ctx.svg, square_size, at(tx(4.0), ty(4.0)));
            }

            i += 1;
        }
    }
}

/// Plus signs rotated 45°, odd columns shifted down a quarter.
pub fn xes(ctx: &mut PatternContext<'_>) {
    let square_size = ctx.hex_mapped(0, 10.0, 25.0);
    let x_size = square_size * 3.0 * 0.943;
    let centre = x_size / 2.0;

    ctx.svg.set_size(x_size * 3.0, x_size * 3.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let (xf, yf) = (f64::from(x), f64::from(y));
            let val = ctx.hex(i, 1);
            let column_dy = |row: f64| {
                let dy = row * x_size - x_size * 0.5;
                if x % 2 == 0 { dy } else { dy + x_size / 4.0 }
            };
            let dy = column_dy(yf);

            let styles = Attributes::new()
                .with("fill", ctx.fill_color(val))
                .with_style("opacity", ctx.opacity(val));
            let at = |tx: f64, ty: f64| {
                styles.clone().transform(format!(
                    "translate({tx},{ty}) rotate(45, {centre}, {centre})"
                ))
            };

            draw_plus(
                &mut ctx.svg,
                square_size,
                at(xf * x_size / 2.0 - x_size / 2.0, dy - yf * x_size / 2.0),
            );

            if x == 0 {
                draw_plus(
                    &mut ctx.svg,
                    square_size,
                    at(6.0 * x_size / 2.0 - x_size / 2.0, dy - yf * x_size / 2.0),
                );
            }

            if y == 0 {
                let dy = column_dy(6.0);
                draw_plus(
                    &mut ctx.svg,
                    square_size,
                    at(xf * x_size / 2.0 - x_size / 2.0, dy - 6.0 * x_size / 2.0),
                );
            }

            if y == 5 {
                draw_plus(
                    &mut ctx.svg,
                    square_size,
                    at(xf * x_size / 2.0 - x_size / 2.0, dy - 11.0 * x_size / 2.0),
                );
            }

            if x == 0 && y == 0 {
                let dy = column_dy(6.0);
                draw_plus(
                    &mut ctx.svg,
                    square_size,
                    at(6.0 * x_size / 2.0 - x_size / 2.0, dy - 6.0 * x_size / 2.0),
                );
            }

            i += 1;
        }
    }
}
