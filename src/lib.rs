//! geopattern: seamless SVG background patterns derived from strings
//!
//! The input string is hashed with SHA-1 and the hex digest drives every
//! decision: which of the 17 built-in patterns is drawn, the background hue
//! and saturation, each cell's size, fill and opacity. The same input always
//! yields the same markup.
//!
//! # Example
//!
//! ```
//! use geopattern::{OptionOverrides, PatternRegistry};
//!
//! let registry = PatternRegistry::default();
//! let pattern = registry.generate("GitHub", None, &OptionOverrides::new()).unwrap();
//!
//! assert_eq!(pattern.name(), "mosaic_squares");
//! assert!(pattern.to_uri_image().starts_with("url(data:image/svg+xml;base64,"));
//! ```
//!
//! # Options
//!
//! Colors and opacities are set through [`OptionOverrides`], merged over the
//! registry's [`Options`]. Both serialize to JSON:
//!
//! ```
//! use geopattern::{OptionOverrides, PatternRegistry};
//!
//! let overrides = OptionOverrides::from_json(r##"{ "base_color": "#2244aa" }"##).unwrap();
//! let pattern = PatternRegistry::default()
//!     .generate("GitHub", Some("hexagons"), &overrides)
//!     .unwrap();
//! assert_eq!(pattern.name(), "hexagons");
//! ```
//!
//! # Custom Patterns
//!
//! A pattern is a plain function over a [`PatternContext`]:
//!
//! ```
//! use geopattern::{Attributes, OptionOverrides, PatternContext, PatternRegistry};
//!
//! fn dots(ctx: &mut PatternContext<'_>) {
//!     let size = ctx.hex_mapped(0, 10.0, 40.0);
//!     ctx.svg.set_size(size * 2.0, size * 2.0);
//!     for i in 0..4 {
//!         let val = ctx.hex(i, 1);
//!         let (x, y) = ((i % 2) as f64, (i / 2) as f64);
//!         let fill = Attributes::new()
//!             .with("fill", ctx.fill_color(val))
//!             .with("fill-opacity", ctx.opacity(val));
//!         ctx.svg.circle(x * size + size / 2.0, y * size + size / 2.0, size / 4.0, fill);
//!     }
//! }
//!
//! let mut registry = PatternRegistry::default();
//! registry.register("dots", dots);
//! let pattern = registry.generate("GitHub", Some("dots"), &OptionOverrides::new()).unwrap();
//! assert_eq!(pattern.svg().elements().len(), 5);
//! ```

mod color;
mod digest;
mod error;
mod options;
mod pattern;
mod registry;
mod svg;
mod value;

#[cfg(feature = "tsify")]
mod wasm;

pub use color::{background_color, parse_color};
pub use digest::Digest;
pub use error::{Error, Result};
pub use options::{OptionOverrides, Options};
pub use pattern::{Generator, Pattern, PatternContext};
pub use registry::PatternRegistry;
pub use svg::{AttrValue, Attributes, Element, Length, SvgDocument};
pub use value::map;

#[cfg(feature = "tsify")]
pub use wasm::{GeneratedPattern, generate, pattern_names};
