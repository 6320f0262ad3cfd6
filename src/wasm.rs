//! WebAssembly bindings.
//!
//! # Feature Flag
//!
//! This module is only available with the `tsify` feature enabled:
//!
//! ```toml
//! [dependencies]
//! geopattern = { version = "0.1", features = ["tsify"] }
//! ```
//!
//! # Example (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { generate, patternNames } from 'geopattern';
//!
//! await init();
//!
//! const pattern = generate('GitHub', undefined, { base_color: '#2244aa' });
//! document.body.style.backgroundImage = pattern.uriImage;
//!
//! console.log(patternNames());
//! ```

use wasm_bindgen::prelude::*;

use crate::options::OptionOverrides;
use crate::pattern::Pattern;
use crate::registry::PatternRegistry;

// ============================================================================
// GeneratedPattern
// ============================================================================

/// A generated pattern handed to JavaScript.
#[wasm_bindgen]
pub struct GeneratedPattern {
    pattern: Pattern,
}

#[wasm_bindgen]
impl GeneratedPattern {
    /// Name of the pattern that was drawn.
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.pattern.name().to_string()
    }

    /// SVG markup.
    #[wasm_bindgen(getter)]
    pub fn svg(&self) -> String {
        self.pattern.to_svg()
    }

    /// Base64-encoded SVG markup.
    #[wasm_bindgen(getter)]
    pub fn base64(&self) -> String {
        self.pattern.to_base64()
    }

    /// CSS `url(...)` value for `background-image`.
    #[wasm_bindgen(getter, js_name = "uriImage")]
    pub fn uri_image(&self) -> String {
        self.pattern.to_uri_image()
    }

    /// Bare `data:` URI.
    #[wasm_bindgen(getter, js_name = "dataUri")]
    pub fn data_uri(&self) -> String {
        self.pattern.to_data_uri()
    }
}

// ============================================================================
// Functions
// ============================================================================

/// Generates a pattern for `input`.
///
/// `options` is a plain object with any subset of the option keys; `undefined`
/// and `null` mean no overrides.
#[wasm_bindgen]
pub fn generate(
    input: &str,
    name: Option<String>,
    options: JsValue,
) -> Result<GeneratedPattern, JsError> {
    let overrides: OptionOverrides = if options.is_undefined() || options.is_null() {
        OptionOverrides::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))?
    };

    let pattern = PatternRegistry::default().generate(input, name.as_deref(), &overrides)?;
    Ok(GeneratedPattern { pattern })
}

/// Names of all built-in patterns, in selection order.
#[wasm_bindgen(js_name = "patternNames")]
pub fn pattern_names() -> Vec<String> {
    PatternRegistry::default()
        .names()
        .map(str::to_string)
        .collect()
}
