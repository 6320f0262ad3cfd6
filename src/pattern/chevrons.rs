//! Stacked chevrons.

use super::{PatternContext, points};
use crate::svg::{Attributes, SvgDocument};

const ROW_OVERLAP: f64 = 0.66;

/// Rows of chevrons overlapping by a third of their height.
pub fn chevrons(ctx: &mut PatternContext<'_>) {
    let chevron_width = ctx.hex_mapped(0, 30.0, 80.0);
    let chevron_height = chevron_width;

    ctx.svg.set_size(
        chevron_width * 6.0,
        chevron_height * 6.0 * ROW_OVERLAP,
    );

    let mut i = 0;
    for y in 0..6 {
        for x in 0..6 {
            let val = ctx.hex(i, 1);
            let styles = ctx.stroked_style(val).with("stroke-width", 1.0);
            let tx = f64::from(x) * chevron_width;
            let row = |r: f64| r * chevron_height * ROW_OVERLAP - chevron_height / 2.0;

            draw_chevron(
                &mut ctx.svg,
                chevron_width,
                chevron_height,
                styles.clone().transform(format!("translate({tx}, {})", row(f64::from(y)))),
            );

            if y == 0 {
                draw_chevron(
                    &mut ctx.svg,
                    chevron_width,
                    chevron_height,
                    styles.transform(format!("translate({tx}, {})", row(6.0))),
                );
            }

            i += 1;
        }
    }
}

/// Two mirrored parallelograms meeting at the chevron's point.
fn draw_chevron(svg: &mut SvgDocument, width: f64, height: f64, attrs: Attributes) {
    let e = height * ROW_OVERLAP;
    let half = width / 2.0;

    svg.begin_group(attrs);
    svg.polyline(
        points(&[0.0, 0.0, half, height - e, half, height, 0.0, e, 0.0, 0.0], ","),
        Attributes::new(),
    );
    svg.polyline(
        points(
            &[half, height - e, width, 0.0, width, e, half, height, half, height - e],
            ",",
        ),
        Attributes::new(),
    );
    svg.end_group();
}
