//! Stacked sine waves drawn as cubic Bézier paths.

use super::PatternContext;

const WAVES: usize = 36;

/// One wave per row, each stroked in its cell color.
///
/// Period, amplitude and stroke width are floored to whole pixels. Every wave
/// is drawn twice, the copy shifted down by the full document height so the
/// tile wraps vertically.
pub fn sine_waves(ctx: &mut PatternContext<'_>) {
    let period = ctx.hex_mapped(0, 100.0, 400.0).floor();
    let amplitude = ctx.hex_mapped(1, 30.0, 100.0).floor();
    let wave_width = ctx.hex_mapped(2, 3.0, 30.0).floor();
    let height = wave_width * WAVES as f64;

    ctx.svg.set_size(period, height);

    let x_offset = period / 4.0 * 0.7;
    let d = wave_path(period, amplitude, x_offset);

    for i in 0..WAVES {
        let val = ctx.hex(i, 1);
        let styles = ctx.ring_style(val, wave_width);
        let top = wave_width * i as f64 - amplitude * 1.5;
        let at = |y: f64| {
            styles
                .clone()
                .transform(format!("translate(-{}, {y})", period / 4.0))
        };

        ctx.svg.path(d.clone(), at(top));
        ctx.svg.path(d.clone(), at(top + height));
    }
}

fn wave_path(period: f64, amplitude: f64, x_offset: f64) -> String {
    format!(
        "M0 {amplitude} C {x_offset} 0, {} 0, {} {amplitude} S {} {}, {period} {amplitude} S {} 0, {}, {amplitude}",
        period / 2.0 - x_offset,
        period / 2.0,
        period - x_offset,
        amplitude * 2.0,
        period * 1.5 - x_offset,
        period * 1.5,
    )
}
