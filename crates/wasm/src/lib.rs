use educator_core::{Educated, EducateFailure, Options, Warning, educate_with_options};
use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Educator Config
// ============================================================================

/// Configuration accepted by [`educate`].
///
/// Field names are accepted in both snake_case and camelCase.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct WasmEducatorConfig {
    #[serde(default, alias = "contractionStems")]
    pub contraction_stems: Option<Vec<String>>,
    #[serde(default, alias = "frontMatter")]
    pub front_matter: Option<bool>,
    #[serde(default, alias = "allowUnterminated")]
    pub allow_unterminated: Option<bool>,
}

fn parse_config(config: JsValue) -> Result<WasmEducatorConfig, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(WasmEducatorConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn build_options(cfg: &WasmEducatorConfig) -> Options {
    Options::default()
        .with_contraction_stems(cfg.contraction_stems.iter().flatten().cloned())
        .with_front_matter(cfg.front_matter.unwrap_or(true))
}

// ============================================================================
// Educate API Types
// ============================================================================

/// A guess the transducer made that may be worth a second look.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEntry {
    /// Line of the apostrophe (1-indexed).
    pub line: usize,
    /// Column of the apostrophe (1-indexed, in characters).
    pub column: usize,
    /// Human-readable description.
    pub message: String,
}

impl From<&Warning> for WarningEntry {
    fn from(warning: &Warning) -> Self {
        let location = warning.location();
        Self {
            line: location.line,
            column: location.column,
            message: warning.to_string(),
        }
    }
}

/// Result of educating one document.
#[derive(Debug, Clone, Serialize)]
pub struct EducateResult {
    /// The transformed text.
    pub output: String,
    /// Heuristic decisions made along the way.
    pub warnings: Vec<WarningEntry>,
    /// Whether the document ended inside an open span and `allowUnterminated` kept its output.
    pub unterminated: bool,
}

/// Curls the straight quotes in a Markdown document.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { educate } from './educator_wasm';
///
/// const { output, warnings } = educate(`It's "fine".`, { contractionStems: ["isn"] });
/// // output === "It’s “fine”."
/// ```
#[wasm_bindgen]
pub fn educate(source: &str, config: JsValue) -> Result<JsValue, JsError> {
    let cfg = parse_config(config)?;
    let options = build_options(&cfg);

    let result = match educate_with_options(source, &options) {
        Ok(Educated {
            output,
            diagnostics,
        }) => EducateResult {
            output,
            warnings: diagnostics.warnings.iter().map(WarningEntry::from).collect(),
            unterminated: false,
        },
        Err(EducateFailure {
            partial,
            error,
            diagnostics,
        }) if cfg.allow_unterminated.unwrap_or(false) && error.is_unterminated() => EducateResult {
            output: partial,
            warnings: diagnostics.warnings.iter().map(WarningEntry::from).collect(),
            unterminated: true,
        },
        Err(failure) => {
            return Err(JsError::new(&format!("{}: {}", failure, failure.error)));
        }
    };

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
