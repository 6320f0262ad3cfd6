//! Semi-regular tessellation of squares, triangles and hexagonal gaps.

use super::{PatternContext, points};
use crate::svg::Attributes;

/// Number of shape roles in one tile, each sampling its own digit.
const ROLES: usize = 20;

/// One tile of squares and triangles arranged around hexagonal gaps.
///
/// Every role `i` in `0..20` places one or more congruent shapes and takes its
/// style from digit `i`.
pub fn tessellation(ctx: &mut PatternContext<'_>) {
    let s = ctx.hex_mapped(0, 5.0, 40.0);
    let hex_height = s * 3f64.sqrt();
    let hex_width = s * 2.0;
    let triangle_height = s / 2.0 * 3f64.sqrt();
    let triangle = points(&[0.0, 0.0, triangle_height, s / 2.0, 0.0, s, 0.0, 0.0], ", ");
    let tile_width = s * 3.0 + triangle_height * 2.0;
    let tile_height = hex_height * 2.0 + s * 2.0;

    ctx.svg.set_size(tile_width, tile_height);

    let (tw, th, half) = (tile_width, tile_height, s / 2.0);
    let spin = format!("rotate(0, {half}, {})", triangle_height / 2.0);

    for i in 0..ROLES {
        let val = ctx.hex(i, 1);
        let styles = ctx.stroked_style(val).with("stroke-width", 1.0);
        let svg = &mut ctx.svg;

        let mut square = |x: f64, y: f64| {
            svg.rect(x, y, s, s, styles.clone());
        };

        match i {
            0 => {
                square(-half, -half);
                square(tw - half, -half);
                square(-half, th - half);
                square(tw - half, th - half);
            }
            1 => square(hex_width / 2.0 + triangle_height, hex_height / 2.0),
            2 => {
                square(-half, th / 2.0 - half);
                square(tw - half, th / 2.0 - half);
            }
            3 => square(hex_width / 2.0 + triangle_height, hex_height * 1.5 + s),
            _ => {
                let transforms = match i {
                    4 => vec![
                        format!("translate({half}, {}) {spin}", -half),
                        format!("translate({half}, {}) {spin} scale(1, -1)", th + half),
                    ],
                    5 => vec![
                        format!("translate({}, {}) {spin} scale(-1, 1)", tw - half, -half),
                        format!("translate({}, {}) {spin} scale(-1, -1)", tw - half, th + half),
                    ],
                    6 => vec![format!("translate({}, {})", tw / 2.0 + half, hex_height / 2.0)],
                    7 => vec![format!(
                        "translate({}, {}) scale(-1, 1)",
                        tw - tw / 2.0 - half,
                        hex_height / 2.0
                    )],
                    8 => vec![format!(
                        "translate({}, {}) scale(1, -1)",
                        tw / 2.0 + half,
                        th - hex_height / 2.0
                    )],
                    9 => vec![format!(
                        "translate({}, {}) scale(-1, -1)",
                        tw - tw / 2.0 - half,
                        th - hex_height / 2.0
                    )],
                    10 => vec![format!("translate({half}, {})", th / 2.0 - half)],
                    11 => vec![format!(
                        "translate({}, {}) scale(-1, 1)",
                        tw - half,
                        th / 2.0 - half
                    )],
                    _ => Vec::new(),
                };

                if transforms.is_empty() {
                    let transform = tilted_square(i, tw, th, s);
                    svg.rect(0.0, 0.0, s, s, styles.transform(transform));
                } else {
                    for transform in transforms {
                        svg.polyline(triangle.clone(), styles.clone().transform(transform));
                    }
                }
            }
        }
    }
}

/// Transform for the squares tilted ±30° around the hexagonal gaps (roles 12 to 19).
fn tilted_square(role: usize, tw: f64, th: f64, s: f64) -> String {
    let half = s / 2.0;
    let upper = th / 2.0 - half - s;
    // Evaluated left to right; regrouping changes the last bit for some sizes.
    let lower = -th + th / 2.0 - half - s;
    match role {
        12 => format!("translate({half}, {half}) rotate(-30, 0, 0)"),
        13 => format!("scale(-1, 1) translate({}, {half}) rotate(-30, 0, 0)", -tw + half),
        14 => format!("translate({half}, {upper}) rotate(30, 0, {s})"),
        15 => format!("scale(-1, 1) translate({}, {upper}) rotate(30, 0, {s})", -tw + half),
        16 => format!("scale(1, -1) translate({half}, {lower}) rotate(30, 0, {s})"),
        17 => format!(
            "scale(-1, -1) translate({}, {lower}) rotate(30, 0, {s})",
            -tw + half
        ),
        18 => format!("scale(1, -1) translate({half}, {}) rotate(-30, 0, 0)", -th + half),
        _ => format!(
            "scale(-1, -1) translate({}, {}) rotate(-30, 0, 0)",
            -tw + half,
            -th + half
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::tests::{body, render, transform_of};
    use crate::svg::{Element, Length};

    #[test]
    fn tessellation_places_every_role() {
        let svg = render("GitHub", tessellation);
        // Roles 0 and 2 place 4 and 2 squares, roles 4 and 5 two triangles each.
        assert_eq!(body(&svg).len(), 4 + 1 + 2 + 1 + 2 + 2 + 6 + 8);

        let s = 5.0 + 5.0 * 35.0 / 15.0;
        let triangle_height = s / 2.0 * 3f64.sqrt();
        assert_eq!(svg.width(), s * 3.0 + triangle_height * 2.0);
        assert_eq!(svg.height(), s * 3f64.sqrt() * 2.0 + s * 2.0);

        let Element::Rect { x, y, .. } = &body(&svg)[0] else {
            panic!("expected corner square");
        };
        assert_eq!((*x, *y), (Length::Number(-s / 2.0), Length::Number(-s / 2.0)));

        let polylines = body(&svg)
            .iter()
            .filter(|el| matches!(el, Element::Polyline { .. }))
            .count();
        assert_eq!(polylines, 10);
    }

    #[test]
    fn tilted_squares_rotate_thirty_degrees() {
        let svg = render("GitHub", tessellation);
        let tilted = &body(&svg)[body(&svg).len() - 8..];
        for (role, element) in (12..).zip(tilted) {
            let transform = transform_of(element);
            let expected = if matches!(role, 12 | 13 | 18 | 19) {
                "rotate(-30, 0, 0)"
            } else {
                "rotate(30, 0, "
            };
            assert!(transform.contains(expected), "role {role}: {transform}");
        }
        assert_eq!(
            tilted_square(12, 100.0, 80.0, 10.0),
            "translate(5, 5) rotate(-30, 0, 0)"
        );
        assert_eq!(
            tilted_square(19, 100.0, 80.0, 10.0),
            "scale(-1, -1) translate(-95, -75) rotate(-30, 0, 0)"
        );
    }

    #[test]
    fn mirrored_tilted_squares_keep_evaluation_order() {
        // "in4" hashes to bf7e..., so the side is 5 + 11 * 35 / 15.
        let svg = render("in4", tessellation);
        let tilted = &body(&svg)[body(&svg).len() - 8..];
        assert_eq!(
            transform_of(&tilted[4]),
            "scale(1, -1) translate(15.333333333333334, -129.78289143211222) rotate(30, 0, 30.666666666666668)"
        );
        assert!(transform_of(&tilted[5]).contains(", -129.78289143211222) rotate(30, 0, "));
    }
}
