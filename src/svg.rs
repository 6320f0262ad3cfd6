//! Minimal SVG document builder.
//!
//! Patterns append primitives to an [`SvgDocument`]; the document serializes
//! itself through [`Display`](std::fmt::Display). Attribute maps are flat
//! `key="value"` pairs plus at most one nested `style` map.

use std::fmt::{self, Display, Formatter, Write as _};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

// ============================================================================
// Values
// ============================================================================

/// A geometric argument: either a plain number or a percentage of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Number(f64),
    Percent(f64),
}

impl Length {
    /// `100%`, used for full-canvas rects and stripes.
    pub const FULL: Self = Self::Percent(100.0);
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl Display for Length {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Percent(p) => write!(f, "{p}%"),
        }
    }
}

/// Value of a single attribute or style property.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Returns the text value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl Display for AttrValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write_escaped(f, s),
        }
    }
}

fn write_escaped(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

// ============================================================================
// Attributes
// ============================================================================

/// Ordered attribute map attached to an element.
///
/// Setting a key that already exists replaces its value in place, so a cell
/// style can be cloned and given a per-copy `transform`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(&'static str, AttrValue)>,
    style: Vec<(&'static str, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a flat attribute.
    pub fn with(mut self, key: &'static str, value: impl Into<AttrValue>) -> Self {
        upsert(&mut self.entries, key, value.into());
        self
    }

    /// Sets a property of the nested `style` attribute.
    pub fn with_style(mut self, key: &'static str, value: impl Into<AttrValue>) -> Self {
        upsert(&mut self.style, key, value.into());
        self
    }

    /// Shorthand for `with("transform", ...)`.
    pub fn transform(self, transform: impl Into<String>) -> Self {
        self.with("transform", transform.into())
    }

    /// Looks up a flat attribute.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        lookup(&self.entries, key)
    }

    /// Looks up a property of the `style` attribute.
    pub fn style(&self, key: &str) -> Option<&AttrValue> {
        lookup(&self.style, key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.style.is_empty()
    }
}

fn upsert(list: &mut Vec<(&'static str, AttrValue)>, key: &'static str, value: AttrValue) {
    match list.iter_mut().find(|(k, _)| *k == key) {
        Some(entry) => entry.1 = value,
        None => list.push((key, value)),
    }
}

fn lookup<'a>(list: &'a [(&'static str, AttrValue)], key: &str) -> Option<&'a AttrValue> {
    list.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
}

impl Display for Attributes {
    /// Renders each attribute with a leading space, `style` last.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.entries {
            write!(f, " {key}=\"{value}\"")?;
        }
        if !self.style.is_empty() {
            f.write_str(" style=\"")?;
            for (i, (key, value)) in self.style.iter().enumerate() {
                if i > 0 {
                    f.write_char(';')?;
                }
                write!(f, "{key}:{value}")?;
            }
            f.write_char('"')?;
        }
        Ok(())
    }
}

// ============================================================================
// Elements
// ============================================================================

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        x: Length,
        y: Length,
        width: Length,
        height: Length,
        attrs: Attributes,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        attrs: Attributes,
    },
    Path {
        d: String,
        attrs: Attributes,
    },
    Polyline {
        points: String,
        attrs: Attributes,
    },
    Group {
        attrs: Attributes,
        children: Vec<Element>,
    },
}

impl Element {
    /// The element's own attributes.
    pub fn attrs(&self) -> &Attributes {
        match self {
            Self::Rect { attrs, .. }
            | Self::Circle { attrs, .. }
            | Self::Path { attrs, .. }
            | Self::Polyline { attrs, .. }
            | Self::Group { attrs, .. } => attrs,
        }
    }

    /// Group children; empty for leaf primitives.
    pub fn children(&self) -> &[Element] {
        match self {
            Self::Group { children, .. } => children,
            _ => &[],
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect {
                x,
                y,
                width,
                height,
                attrs,
            } => write!(
                f,
                "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\"{attrs}/>"
            ),
            Self::Circle { cx, cy, r, attrs } => {
                write!(f, "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"{attrs}/>")
            }
            Self::Path { d, attrs } => write!(f, "<path d=\"{d}\"{attrs}/>"),
            Self::Polyline { points, attrs } => {
                write!(f, "<polyline points=\"{points}\"{attrs}/>")
            }
            Self::Group { attrs, children } => {
                write!(f, "<g{attrs}>")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                f.write_str("</g>")
            }
        }
    }
}

// ============================================================================
// SvgDocument
// ============================================================================

/// Append-only SVG document with a declared width and height.
///
/// # Example
///
/// ```
/// use geopattern::{Attributes, SvgDocument};
///
/// let mut svg = SvgDocument::new();
/// svg.set_size(20.0, 10.0);
/// svg.circle(5.0, 5.0, 2.5, Attributes::new().with("fill", "#ddd"));
/// assert_eq!(
///     svg.to_string(),
///     r##"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><circle cx="5" cy="5" r="2.5" fill="#ddd"/></svg>"##,
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgDocument {
    size: Option<(f64, f64)>,
    elements: Vec<Element>,
    open_groups: Vec<(Attributes, Vec<Element>)>,
}

impl SvgDocument {
    /// Size used when a pattern never declares one.
    pub const DEFAULT_SIZE: f64 = 100.0;

    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the document size.
    ///
    /// # Panics
    ///
    /// Panics if the size was already set, or if anything other than a single
    /// background element has been drawn.
    pub fn set_size(&mut self, width: f64, height: f64) {
        assert!(self.size.is_none(), "document size set twice");
        assert!(
            self.elements.len() <= 1 && self.open_groups.is_empty(),
            "document size set after drawing"
        );
        self.size = Some((width, height));
    }

    pub fn width(&self) -> f64 {
        self.size.map_or(Self::DEFAULT_SIZE, |(w, _)| w)
    }

    pub fn height(&self) -> f64 {
        self.size.map_or(Self::DEFAULT_SIZE, |(_, h)| h)
    }

    /// Top-level elements, in drawing order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Calls `f` on every element, depth first, including group children.
    pub fn walk(&self, mut f: impl FnMut(&Element)) {
        fn visit(elements: &[Element], f: &mut impl FnMut(&Element)) {
            for element in elements {
                f(element);
                visit(element.children(), f);
            }
        }
        visit(&self.elements, &mut f);
    }

    pub fn rect(
        &mut self,
        x: impl Into<Length>,
        y: impl Into<Length>,
        width: impl Into<Length>,
        height: impl Into<Length>,
        attrs: Attributes,
    ) -> &mut Self {
        self.push(Element::Rect {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
            attrs,
        })
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, attrs: Attributes) -> &mut Self {
        self.push(Element::Circle { cx, cy, r, attrs })
    }

    pub fn path(&mut self, d: impl Into<String>, attrs: Attributes) -> &mut Self {
        self.push(Element::Path { d: d.into(), attrs })
    }

    pub fn polyline(&mut self, points: impl Into<String>, attrs: Attributes) -> &mut Self {
        self.push(Element::Polyline {
            points: points.into(),
            attrs,
        })
    }

    /// Opens a `<g>`; elements drawn until [`end_group`](Self::end_group) become its children.
    pub fn begin_group(&mut self, attrs: Attributes) -> &mut Self {
        self.open_groups.push((attrs, Vec::new()));
        self
    }

    /// Closes the innermost open group.
    ///
    /// # Panics
    ///
    /// Panics if no group is open.
    pub fn end_group(&mut self) -> &mut Self {
        let (attrs, children) = self
            .open_groups
            .pop()
            .unwrap_or_else(|| panic!("end_group called with no open group"));
        self.push(Element::Group { attrs, children })
    }

    /// Returns true if every group opened has been closed.
    pub fn is_balanced(&self) -> bool {
        self.open_groups.is_empty()
    }

    fn push(&mut self, element: Element) -> &mut Self {
        match self.open_groups.last_mut() {
            Some((_, children)) => children.push(element),
            None => self.elements.push(element),
        }
        self
    }
}

impl Display for SvgDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        debug_assert!(self.is_balanced(), "serializing a document with open groups");
        write!(
            f,
            "<svg xmlns=\"{SVG_NS}\" width=\"{}\" height=\"{}\">",
            self.width(),
            self.height()
        )?;
        for element in &self.elements {
            write!(f, "{element}")?;
        }
        f.write_str("</svg>")
    }
}

// ============================================================================
// Tests
// ============================================================================
