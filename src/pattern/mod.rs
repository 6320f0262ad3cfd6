//! Pattern generators.
//!
//! Each generator is a plain function over a [`PatternContext`]: it reads
//! sizes from fixed digest offsets, declares the document size, then lays out
//! its cells. Generators share no state; the registry only needs a table of
//! function pointers.
//!
//! # Cell sampling
//!
//! Grid patterns walk their cells with a counter `i` that is independent of
//! the cell's `(x, y)` position. For each cell the value `read(i, 1)` picks
//! both the opacity ([`PatternContext::opacity`]) and the fill
//! ([`PatternContext::fill_color`]).

pub mod chevrons;
pub mod circles;
pub mod crosses;
pub mod plaid;
pub mod polygons;
pub mod sine_waves;
pub mod squares;
pub mod tessellation;
pub mod triangles;

use palette::Srgb;

use crate::color::{background_color, css_rgb};
use crate::digest::Digest;
use crate::options::Options;
use crate::svg::{Attributes, Length, SvgDocument};
use crate::value::map;

/// Signature shared by every pattern generator.
pub type Generator = fn(&mut PatternContext<'_>);

/// The built-in generators in registration order.
pub const BUILTIN: [(&str, Generator); 17] = [
    ("octagons", polygons::octagons),
    ("overlapping_circles", circles::overlapping_circles),
    ("plus_signs", crosses::plus_signs),
    ("xes", crosses::xes),
    ("sine_waves", sine_waves::sine_waves),
    ("hexagons", polygons::hexagons),
    ("overlapping_rings", circles::overlapping_rings),
    ("plaid", plaid::plaid),
    ("triangles", triangles::triangles),
    ("squares", squares::squares),
    ("concentric_circles", circles::concentric_circles),
    ("diamonds", polygons::diamonds),
    ("tessellation", tessellation::tessellation),
    ("nested_squares", squares::nested_squares),
    ("mosaic_squares", squares::mosaic_squares),
    ("triangles_rotated", triangles::triangles_rotated),
    ("chevrons", chevrons::chevrons),
];

// ============================================================================
// PatternContext
// ============================================================================

/// Everything a generator reads from and draws into during one call.
pub struct PatternContext<'a> {
    /// Digest of the input string.
    pub digest: &'a Digest,

    /// Merged options for this call.
    pub options: &'a Options,

    /// The document being drawn.
    pub svg: SvgDocument,

    base_color: Srgb<u8>,
}

impl<'a> PatternContext<'a> {
    /// Creates a context with an empty document.
    ///
    /// `base_color` is the already validated `options.base_color`.
    pub fn new(digest: &'a Digest, options: &'a Options, base_color: Srgb<u8>) -> Self {
        Self {
            digest,
            options,
            svg: SvgDocument::new(),
            base_color,
        }
    }

    /// Reads `length` hex digits at `offset` from the digest.
    pub fn hex(&self, offset: usize, length: usize) -> f64 {
        self.digest.read_f64(offset, length)
    }

    /// Reads one hex digit at `offset`, mapped onto `[out_min, out_max]`.
    pub fn hex_mapped(&self, offset: usize, out_min: f64, out_max: f64) -> f64 {
        map(self.hex(offset, 1), 0.0, 15.0, out_min, out_max)
    }

    /// Cell opacity for a sampled value in `0..=15`.
    pub fn opacity(&self, value: f64) -> f64 {
        map(
            value,
            0.0,
            15.0,
            self.options.opacity_min,
            self.options.opacity_max,
        )
    }

    /// Light fill for even values, dark fill for odd ones.
    pub fn fill_color(&self, value: f64) -> &'a str {
        let options: &'a Options = self.options;
        if value % 2.0 == 0.0 {
            &options.fill_color_light
        } else {
            &options.fill_color_dark
        }
    }

    /// Style shared by filled, outlined shapes:
    /// `fill`, `fill-opacity`, `stroke`, `stroke-opacity`.
    pub fn filled_style(&self, value: f64) -> Attributes {
        Attributes::new()
            .with("fill", self.fill_color(value))
            .with("fill-opacity", self.opacity(value))
            .with("stroke", self.options.stroke_color.as_str())
            .with("stroke-opacity", self.options.stroke_opacity)
    }

    /// Style shared by outlined shapes drawn with the stroke option first:
    /// `stroke`, `stroke-opacity`, `fill`, `fill-opacity`.
    pub fn stroked_style(&self, value: f64) -> Attributes {
        Attributes::new()
            .with("stroke", self.options.stroke_color.as_str())
            .with("stroke-opacity", self.options.stroke_opacity)
            .with("fill", self.fill_color(value))
            .with("fill-opacity", self.opacity(value))
    }

    /// Style for hollow shapes whose outline carries the cell color.
    pub fn ring_style(&self, value: f64, stroke_width: f64) -> Attributes {
        Attributes::new()
            .with("fill", "none")
            .with("stroke", self.fill_color(value))
            .with_style("opacity", self.opacity(value))
            .with_style("stroke-width", format!("{stroke_width}px"))
    }

    /// Draws the full-canvas background rect.
    pub fn draw_background(&mut self) {
        let color = background_color(self.base_color, self.digest);
        self.svg.rect(
            0.0,
            0.0,
            Length::FULL,
            Length::FULL,
            Attributes::new().with("fill", css_rgb(color)),
        );
    }

    /// Runs `generator` after the background and returns the finished document.
    pub fn render(mut self, generator: Generator) -> SvgDocument {
        self.draw_background();
        generator(&mut self);
        assert!(self.svg.is_balanced(), "pattern left a group open");
        self.svg
    }
}

/// Joins coordinates into a `points` list.
pub(crate) fn points(values: &[f64], separator: &str) -> String {
    values
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

// ============================================================================
// Pattern
// ============================================================================

/// A generated pattern. The document is frozen; only read-only views remain.
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    name: String,
    svg: SvgDocument,
}

impl Pattern {
    pub(crate) fn new(name: impl Into<String>, svg: SvgDocument) -> Self {
        Self {
            name: name.into(),
            svg,
        }
    }

    /// Name of the generator that produced this pattern.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The generated document.
    pub fn svg(&self) -> &SvgDocument {
        &self.svg
    }

    /// SVG markup.
    pub fn to_svg(&self) -> String {
        self.svg.to_string()
    }

    /// Base64 of the SVG markup (standard alphabet, padded).
    pub fn to_base64(&self) -> String {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD.encode(self.to_svg())
    }

    /// CSS `url(...)` value suitable for `background-image`.
    pub fn to_uri_image(&self) -> String {
        format!("url({})", self.to_data_uri())
    }

    /// Bare `data:` URI.
    pub fn to_data_uri(&self) -> String {
        format!("data:image/svg+xml;base64,{}", self.to_base64())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.svg.fmt(f)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::svg::{AttrValue, Element};

    /// Runs a generator for `input` with default options.
    pub(crate) fn render(input: &str, generator: Generator) -> SvgDocument {
        render_with(input, generator, &Options::default())
    }

    pub(crate) fn render_with(input: &str, generator: Generator, options: &Options) -> SvgDocument {
        let digest = Digest::new(input);
        let base = options.validate().unwrap();
        PatternContext::new(&digest, options, base).render(generator)
    }

    /// Elements after the background rect.
    pub(crate) fn body(svg: &SvgDocument) -> &[Element] {
        &svg.elements()[1..]
    }

    pub(crate) fn transform_of(element: &Element) -> &str {
        element
            .attrs()
            .get("transform")
            .and_then(AttrValue::as_str)
            .unwrap()
    }

    #[test]
    fn builtin_names_are_unique() {
        let mut names: Vec<_> = BUILTIN.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN.len());
    }

    #[test]
    fn fill_and_opacity_follow_value_parity() {
        let digest = Digest::new("GitHub");
        let options = Options::default();
        let ctx = PatternContext::new(&digest, &options, Srgb::new(0, 0, 0));

        assert_eq!(ctx.fill_color(0.0), "#ddd");
        assert_eq!(ctx.fill_color(7.0), "#222");
        assert_eq!(ctx.opacity(0.0), 0.02);
        assert_eq!(ctx.opacity(15.0), 0.15);
    }

    #[test]
    fn every_generator_draws_background_first() {
        for (name, generator) in BUILTIN {
            let svg = render("background", generator);
            let Element::Rect { width, attrs, .. } = &svg.elements()[0] else {
                panic!("{name}: first element is not a rect");
            };
            assert_eq!(*width, Length::FULL, "{name}");
            assert!(
                attrs.get("fill").and_then(AttrValue::as_str).unwrap().starts_with("rgb("),
                "{name}"
            );
        }
    }

    #[test]
    fn cell_styles_stay_in_range() {
        let options = Options {
            opacity_min: 0.2,
            opacity_max: 0.6,
            fill_color_dark: "#010101".into(),
            fill_color_light: "#fefefe".into(),
            ..Options::default()
        };
        let fills = [
            options.fill_color_dark.as_str(),
            options.fill_color_light.as_str(),
        ];

        for input in ["GitHub", "mastodon", "", "ferris", "0123456789"] {
            for (name, generator) in BUILTIN {
                let svg = render_with(input, generator, &options);
                let mut checked = 0;
                svg.walk(|element| {
                    let attrs = element.attrs();
                    for key in ["opacity", "fill-opacity"] {
                        for value in [attrs.get(key), attrs.style(key)].into_iter().flatten() {
                            let opacity = value.as_f64().unwrap();
                            assert!(
                                (0.2..=0.6).contains(&opacity),
                                "{name}/{input:?}: opacity {opacity}"
                            );
                            checked += 1;
                        }
                    }
                    for key in ["fill", "stroke"] {
                        if let Some(color) = attrs.get(key).and_then(AttrValue::as_str) {
                            let allowed = color == "none"
                                || color == options.stroke_color
                                || color.starts_with("rgb(")
                                || fills.contains(&color);
                            assert!(allowed, "{name}/{input:?}: unexpected {key} {color}");
                        }
                    }
                });
                assert!(checked > 0, "{name}: no cell styles found");
            }
        }
    }

    #[test]
    fn every_generator_emits_parseable_svg() {
        let opts = resvg::usvg::Options::default();
        for (name, generator) in BUILTIN {
            let markup = render("parse me", generator).to_string();
            assert!(
                resvg::usvg::Tree::from_str(&markup, &opts).is_ok(),
                "{name} produced invalid SVG"
            );
        }
    }

    #[test]
    fn pattern_views_are_derived_from_markup() {
        use base64::Engine as _;

        let pattern = Pattern::new("squares", render("GitHub", squares::squares));
        let markup = pattern.to_svg();
        let encoded = pattern.to_base64();

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), markup);
        assert_eq!(
            pattern.to_data_uri(),
            format!("data:image/svg+xml;base64,{encoded}")
        );
        assert_eq!(
            pattern.to_uri_image(),
            format!("url(data:image/svg+xml;base64,{encoded})")
        );
        assert_eq!(pattern.to_string(), markup);
    }
}
