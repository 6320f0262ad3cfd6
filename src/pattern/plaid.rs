//! Plaid: horizontal then vertical stripes of varying spacing and width.

use super::PatternContext;
use crate::svg::{Attributes, Length};

/// Number of (space, stripe) digit pairs consumed per direction.
const STRIPES: usize = 18;

/// Overlapping horizontal and vertical stripes.
///
/// Each stripe is preceded by a gap. Gap and stripe widths come from
/// consecutive digit pairs, each offset by 5, so both directions share the
/// same total extent and the document is square.
pub fn plaid(ctx: &mut PatternContext<'_>) {
    let extent = stripe_extent(ctx);
    ctx.svg.set_size(extent, extent);

    let mut height = 0.0;
    for i in 0..STRIPES {
        let space = ctx.hex(i * 2, 1);
        height += space + 5.0;

        let val = ctx.hex(i * 2 + 1, 1);
        let stripe = val + 5.0;
        let styles = Attributes::new()
            .with("opacity", ctx.opacity(val))
            .with("fill", ctx.fill_color(val));
        ctx.svg.rect(0.0, height, Length::FULL, stripe, styles);

        height += stripe;
    }

    let mut width = 0.0;
    for i in 0..STRIPES {
        let space = ctx.hex(i * 2, 1);
        width += space + 5.0;

        let val = ctx.hex(i * 2 + 1, 1);
        let stripe = val + 5.0;
        let styles = Attributes::new()
            .with("opacity", ctx.opacity(val))
            .with("fill", ctx.fill_color(val));
        ctx.svg.rect(width, 0.0, stripe, Length::FULL, styles);

        width += stripe;
    }
}

fn stripe_extent(ctx: &PatternContext<'_>) -> f64 {
    (0..STRIPES)
        .map(|i| ctx.hex(i * 2, 1) + 5.0 + ctx.hex(i * 2 + 1, 1) + 5.0)
        .sum()
}
