//! Filled polygon grids: octagons, hexagons and diamonds.

use super::{PatternContext, points};

/// 6×6 grid of octagons with clipped corners.
pub fn octagons(ctx: &mut PatternContext<'_>) {
    let square_size = ctx.hex_mapped(0, 10.0, 60.0);
    let tile = octagon_shape(square_size);

    ctx.svg.set_size(square_size * 6.0, square_size * 6.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let val = ctx.hex(i, 1);
            let styles = ctx.filled_style(val).transform(format!(
                "translate({}, {})",
                f64::from(x) * square_size,
                f64::from(y) * square_size
            ));
            ctx.svg.polyline(tile.clone(), styles);
            i += 1;
        }
    }
}

fn octagon_shape(square_size: f64) -> String {
    let s = square_size;
    let c = s * 0.33;
    points(
        &[
            c,
            0.0,
            s - c,
            0.0,
            s,
            c,
            s,
            s - c,
            s - c,
            s,
            c,
            s,
            0.0,
            s - c,
            0.0,
            c,
            c,
            0.0,
        ],
        ",",
    )
}

/// Offset grid of flat-topped hexagons, odd columns shifted down half a hexagon.
///
/// The first column is repeated past the right edge, the first row past the
/// bottom edge, and the top-left hexagon at the bottom-right corner.
pub fn hexagons(ctx: &mut PatternContext<'_>) {
    let side_length = ctx.hex_mapped(0, 8.0, 60.0);
    let hex_height = side_length * 3f64.sqrt();
    let hex_width = side_length * 2.0;
    let hex = hexagon_shape(side_length);

    ctx.svg.set_size(
        (hex_width * 3.0) + (side_length * 3.0),
        hex_height * 6.0,
    );

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let (xf, yf) = (f64::from(x), f64::from(y));
            let val = ctx.hex(i, 1);
            let dy = if x % 2 == 0 {
                yf * hex_height
            } else {
                yf * hex_height + hex_height / 2.0
            };
            let styles = ctx.filled_style(val);
            let translate =
                |tx: f64, ty: f64| styles.clone().transform(format!("translate({tx}, {ty})"));

            ctx.svg.polyline(
                hex.clone(),
                translate(xf * side_length * 1.5 - hex_width / 2.0, dy - hex_height / 2.0),
            );

            if x == 0 {
                ctx.svg.polyline(
                    hex.clone(),
                    translate(6.0 * side_length * 1.5 - hex_width / 2.0, dy - hex_height / 2.0),
                );
            }

            if y == 0 {
                let dy = if x % 2 == 0 {
                    6.0 * hex_height
                } else {
                    6.0 * hex_height + hex_height / 2.0
                };
                ctx.svg.polyline(
                    hex.clone(),
                    translate(xf * side_length * 1.5 - hex_width / 2.0, dy - hex_height / 2.0),
                );
            }

            if x == 0 && y == 0 {
                ctx.svg.polyline(
                    hex.clone(),
                    translate(
                        6.0 * side_length * 1.5 - hex_width / 2.0,
                        5.0 * hex_height + hex_height / 2.0,
                    ),
                );
            }

            i += 1;
        }
    }
}

fn hexagon_shape(side_length: f64) -> String {
    let c = side_length;
    let a = c / 2.0;
    let b = (60.0 * std::f64::consts::PI / 180.0).sin() * c;
    points(
        &[
            0.0,
            b,
            a,
            0.0,
            a + c,
            0.0,
            2.0 * c,
            b,
            a + c,
            2.0 * b,
            a,
            2.0 * b,
            0.0,
            b,
        ],
        ",",
    )
}

/// Rows of diamonds, odd rows shifted right by half a diamond.
///
/// Edge copies follow the same scheme as [`hexagons`]: right column, bottom
/// row, bottom-right corner.
pub fn diamonds(ctx: &mut PatternContext<'_>) {
    let diamond_width = ctx.hex_mapped(0, 10.0, 50.0);
    let diamond_height = ctx.hex_mapped(1, 10.0, 50.0);
    let diamond = diamond_shape(diamond_width, diamond_height);

    ctx.svg.set_size(diamond_width * 6.0, diamond_height * 3.0);

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let (xf, yf) = (f64::from(x), f64::from(y));
            let val = ctx.hex(i, 1);
            let styles = ctx.filled_style(val);
            let translate =
                |tx: f64, ty: f64| styles.clone().transform(format!("translate({tx}, {ty})"));

            let dx = if y % 2 == 0 { 0.0 } else { diamond_width / 2.0 };

            ctx.svg.polyline(
                diamond.clone(),
                translate(
                    xf * diamond_width - diamond_width / 2.0 + dx,
                    diamond_height / 2.0 * yf - diamond_height / 2.0,
                ),
            );

            if x == 0 {
                ctx.svg.polyline(
                    diamond.clone(),
                    translate(
                        6.0 * diamond_width - diamond_width / 2.0 + dx,
                        diamond_height / 2.0 * yf - diamond_height / 2.0,
                    ),
                );
            }

            if y == 0 {
                ctx.svg.polyline(
                    diamond.clone(),
                    translate(
                        xf * diamond_width - diamond_width / 2.0 + dx,
                        diamond_height / 2.0 * 6.0 - diamond_height / 2.0,
                    ),
                );
            }

            if x == 0 && y == 0 {
                ctx.svg.polyline(
                    diamond.clone(),
                    translate(
                        6.0 * diamond_width - diamond_width / 2.0 + dx,
                        diamond_height / 2.0 * 6.0 - diamond_height / 2.0,
                    ),
                );
            }

            i += 1;
        }
    }
}

fn diamond_shape(width: f64, height: f64) -> String {
    points(
        &[
            width / 2.0,
            0.0,
            width,
            height / 2.0,
            width / 2.0,
            height,
            0.0,
            height / 2.0,
        ],
        ", ",
    )
}
