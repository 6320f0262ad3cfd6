//! Name → generator table and the entry point for generation.

use base64::Engine as _;
use tracing::{debug, trace};

use crate::digest::Digest;
use crate::error::{Error, Result};
use crate::options::{OptionOverrides, Options};
use crate::pattern::{BUILTIN, Generator, Pattern, PatternContext};

// ============================================================================
// PatternRegistry
// ============================================================================

/// Registered pattern generators plus the default options they run with.
///
/// Build one registry up front and share it; generation only reads from it.
///
/// # Example
///
/// ```
/// use geopattern::{OptionOverrides, PatternRegistry};
///
/// let registry = PatternRegistry::default();
///
/// // Name picked from the input.
/// let pattern = registry.generate("GitHub", None, &OptionOverrides::new()).unwrap();
/// assert_eq!(pattern.name(), "mosaic_squares");
///
/// // Explicit name and overrides.
/// let overrides = OptionOverrides::new().with_base_color("#2244aa");
/// let pattern = registry.generate("GitHub", Some("xes"), &overrides).unwrap();
/// assert!(pattern.to_svg().starts_with("<svg "));
/// ```
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    entries: Vec<(String, Generator)>,
    defaults: Options,
}

impl Default for PatternRegistry {
    /// A registry holding every built-in pattern in selection order.
    fn default() -> Self {
        let mut registry = Self::new();
        for (name, generator) in BUILTIN {
            registry.register(name, generator);
        }
        registry
    }
}

impl PatternRegistry {
    /// Creates an empty registry with default options.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            defaults: Options::default(),
        }
    }

    /// Registers `generator` under `name`.
    ///
    /// An existing entry with the same name is replaced in place, so the
    /// selection order of the other entries is unchanged.
    pub fn register(&mut self, name: impl Into<String>, generator: Generator) -> &mut Self {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = generator,
            None => self.entries.push((name, generator)),
        }
        self
    }

    /// Replaces the options that overrides are merged over.
    pub fn with_defaults(mut self, defaults: Options) -> Self {
        self.defaults = defaults;
        self
    }

    /// The options that overrides are merged over.
    pub fn defaults(&self) -> &Options {
        &self.defaults
    }

    /// Registered names in selection order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Picks a pattern name for `input`.
    ///
    /// The input is base64-encoded and hashed; four hex digits at offset 20 of
    /// that digest, modulo the entry count, index the registration order.
    pub fn select(&self, input: &str) -> Result<&str> {
        if self.entries.is_empty() {
            return Err(Error::EmptyRegistry);
        }

        let encoded = base64::engine::general_purpose::STANDARD.encode(input);
        let index = Digest::new(&encoded).read(20, 4) as usize % self.entries.len();
        Ok(&self.entries[index].0)
    }

    /// Generates a pattern for `input`.
    ///
    /// The pattern is `name` if given, otherwise the merged `generator`
    /// option, otherwise [`select`](Self::select). Options are validated
    /// before anything is drawn.
    pub fn generate(
        &self,
        input: &str,
        name: Option<&str>,
        overrides: &OptionOverrides,
    ) -> Result<Pattern> {
        let options = self.defaults.merged(overrides);
        let base_color = options.validate()?;

        let name = match name.or(options.generator.as_deref()) {
            Some(name) => name,
            None => self.select(input)?,
        };
        let generator = self
            .lookup(name)
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))?;

        let digest = Digest::new(input);
        debug!(pattern = name, digest = %digest, "generating pattern");

        let svg = PatternContext::new(&digest, &options, base_color).render(generator);
        trace!(width = svg.width(), height = svg.height(), "pattern drawn");

        Ok(Pattern::new(name, svg))
    }

    fn lookup(&self, name: &str) -> Option<Generator> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, generator)| *generator)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const OCTAGONS_GITHUB: &str = include_str!("testdata/octagons_github.svg");

    #[test]
    fn octagons_match_golden_output() {
        let pattern = PatternRegistry::default()
            .generate("GitHub", Some("octagons"), &OptionOverrides::new())
            .unwrap();
        assert_eq!(pattern.to_svg(), OCTAGONS_GITHUB);
    }

    #[test]
    fn default_registry_keeps_builtin_order() {
        let registry = PatternRegistry::default();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names.len(), 17);
        assert_eq!(names[0], "octagons");
        assert_eq!(names[5], "hexagons");
        assert_eq!(names[16], "chevrons");
        assert!(registry.contains("tessellation"));
        assert!(!registry.contains("circles"));
    }

    #[test]
    fn selection_is_deterministic() {
        let registry = PatternRegistry::default();
        assert_eq!(registry.select("GitHub").unwrap(), "mosaic_squares");
        assert_eq!(registry.select("GeoPattern").unwrap(), "concentric_circles");
        assert_eq!(registry.select("mastodon").unwrap(), "diamonds");
        assert_eq!(registry.select("").unwrap(), "hexagons");

        for input in ["a", "b", "ferris", "0123456789"] {
            let first = registry.generate(input, None, &OptionOverrides::new()).unwrap();
            let second = registry.generate(input, None, &OptionOverrides::new()).unwrap();
            assert!(registry.contains(first.name()));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn explicit_name_beats_generator_option() {
        let registry = PatternRegistry::default();
        let overrides = OptionOverrides::new().with_generator("plaid");

        let by_option = registry.generate("GitHub", None, &overrides).unwrap();
        assert_eq!(by_option.name(), "plaid");

        let explicit = registry.generate("GitHub", Some("xes"), &overrides).unwrap();
        assert_eq!(explicit.name(), "xes");
    }

    #[test]
    fn unknown_pattern_is_rejected() {
        let registry = PatternRegistry::default();
        let err = registry
            .generate("GitHub", Some("not_a_real_pattern"), &OptionOverrides::new())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownPattern(ref name) if name == "not_a_real_pattern"));

        let err = registry
            .generate("GitHub", None, &OptionOverrides::new().with_generator("spirals"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownPattern(_)));
    }

    #[test]
    fn invalid_color_fails_before_lookup() {
        let registry = PatternRegistry::default();
        let overrides = OptionOverrides::new().with_base_color("#12");
        let err = registry
            .generate("GitHub", Some("spirals"), &overrides)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidColor { .. }));
    }

    #[test]
    fn empty_registry_cannot_select() {
        let registry = PatternRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(registry.select("GitHub"), Err(Error::EmptyRegistry)));
        assert!(matches!(
            registry.generate("GitHub", None, &OptionOverrides::new()),
            Err(Error::EmptyRegistry)
        ));
    }

    #[test]
    fn register_replaces_in_place() {
        fn blank(ctx: &mut PatternContext<'_>) {
            ctx.svg.set_size(10.0, 10.0);
        }

        let mut registry = PatternRegistry::default();
        registry.register("hexagons", blank).register("blank", blank);

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names[5], "hexagons");
        assert_eq!(names.last(), Some(&"blank"));
        assert_eq!(registry.len(), 18);

        let pattern = registry
            .generate("GitHub", Some("hexagons"), &OptionOverrides::new())
            .unwrap();
        assert_eq!(pattern.svg().elements().len(), 1);
        assert_eq!(pattern.svg().width(), 10.0);
    }

    #[test]
    fn registry_defaults_apply_under_overrides() {
        let registry = PatternRegistry::default().with_defaults(Options {
            fill_color_light: "#fefefe".into(),
            generator: Some("squares".into()),
            ..Options::default()
        });
        assert_eq!(registry.defaults().fill_color_light, "#fefefe");

        let pattern = registry.generate("GitHub", None, &OptionOverrides::new()).unwrap();
        assert_eq!(pattern.name(), "squares");
        // The second cell of "GitHub" samples an even digit.
        assert!(pattern.to_svg().contains(r##"fill="#fefefe""##));
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternRegistry>();

        let registry = PatternRegistry::default();
        let expected = registry
            .generate("GitHub", None, &OptionOverrides::new())
            .unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        registry
                            .generate("GitHub", None, &OptionOverrides::new())
                            .unwrap()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
