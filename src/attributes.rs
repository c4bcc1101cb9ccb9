//! Declarative configuration read once when a step line is built.
//!
//! Attributes come either as JSON or as XML-style markup attributes, the way
//! a layout file would declare them:
//!
//! ```rust
//! use bubbletea_stepline::attributes::Attributes;
//!
//! let attrs = Attributes::parse_markup(
//!     r##"<StepLine app:maxProgress="7" app:currentProgress="2" app:enableProgressColor="#FF5500" />"##,
//! ).unwrap();
//! assert_eq!(attrs.max_progress, Some(7));
//! assert_eq!(attrs.current_progress, Some(2));
//! assert_eq!(attrs.enable_progress_color.as_deref(), Some("#FF5500"));
//! ```
//!
//! Parsing only checks syntax and number formats. Range checks and color
//! decoding happen when the attributes are applied to a widget, where bad
//! values fall back to defaults instead of failing.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading an attribute source.
#[derive(Debug, Error)]
pub enum AttributeError {
    /// The JSON document could not be decoded.
    #[error("invalid attribute json: {0}")]
    Json(#[from] serde_json::Error),
    /// The markup is not a sequence of `name="value"` pairs.
    #[error("malformed attribute markup near `{0}`")]
    Syntax(String),
    /// A known attribute carried a value of the wrong shape.
    #[error("attribute `{name}` has invalid value `{value}`")]
    Value {
        /// Attribute name without namespace prefix.
        name: String,
        /// The offending raw value.
        value: String,
    },
}

/// Every attribute a step line understands. Absent attributes keep the
/// resource default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attributes {
    /// Number of steps.
    pub max_progress: Option<i32>,
    /// Last completed step.
    pub current_progress: Option<i32>,
    /// Animation length in milliseconds.
    pub progress_duration: Option<i64>,
    /// Completed bar segment color.
    pub enable_progress_color: Option<String>,
    /// Remaining bar segment color.
    pub disable_progress_color: Option<String>,
    /// Completed label color.
    pub enable_text_color: Option<String>,
    /// Remaining label color.
    pub disable_text_color: Option<String>,
    /// Label size.
    pub progress_text_size: Option<f32>,
    /// Bar offset from the top.
    pub progress_margin: Option<f32>,
    /// Label baseline offset from the top.
    pub text_margin: Option<f32>,
    /// Bar thickness.
    pub progress_height: Option<f32>,
}

impl Attributes {
    /// Decodes attributes from a JSON object.
    pub fn from_json(src: &str) -> Result<Self, AttributeError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Decodes `name="value"` pairs, optionally wrapped in a single element
    /// such as `<StepLine ... />`. Namespace prefixes (`app:`) are ignored,
    /// dimension units (`dp`, `sp`, `px`) are accepted and dropped, unknown
    /// names are skipped.
    pub fn parse_markup(src: &str) -> Result<Self, AttributeError> {
        let mut attrs = Attributes::default();
        for (name, value) in pairs(src)? {
            attrs.set(name, value)?;
        }
        Ok(attrs)
    }

    fn set(&mut self, qualified: &str, value: &str) -> Result<(), AttributeError> {
        let name = qualified.rsplit(':').next().unwrap_or(qualified);
        match name {
            "maxProgress" => self.max_progress = Some(number(name, value)?),
            "currentProgress" => self.current_progress = Some(number(name, value)?),
            "progressDuration" => self.progress_duration = Some(number(name, value)?),
            "enableProgressColor" => self.enable_progress_color = Some(value.to_string()),
            "disableProgressColor" => self.disable_progress_color = Some(value.to_string()),
            "enableTextColor" => self.enable_text_color = Some(value.to_string()),
            "disableTextColor" => self.disable_text_color = Some(value.to_string()),
            "progressTextSize" => self.progress_text_size = Some(dimension(name, value)?),
            "progressMargin" => self.progress_margin = Some(dimension(name, value)?),
            "textMargin" => self.text_margin = Some(dimension(name, value)?),
            "progressHeight" => self.progress_height = Some(dimension(name, value)?),
            _ => tracing::debug!(attribute = qualified, "skipping unknown step line attribute"),
        }
        Ok(())
    }
}

fn invalid(name: &str, value: &str) -> AttributeError {
    AttributeError::Value {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, AttributeError> {
    value.trim().parse().map_err(|_| invalid(name, value))
}

fn dimension(name: &str, value: &str) -> Result<f32, AttributeError> {
    let raw = value.trim();
    let raw = ["dip", "dp", "sp", "px"]
        .iter()
        .find_map(|unit| raw.strip_suffix(unit))
        .unwrap_or(raw);
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(name, value)),
    }
}

fn near(rest: &str) -> AttributeError {
    AttributeError::Syntax(rest.chars().take(24).collect())
}

fn pairs(src: &str) -> Result<Vec<(&str, &str)>, AttributeError> {
    let mut rest = src.trim();

    if let Some(element) = rest.strip_prefix('<') {
        let element = element.trim_end();
        let element = element
            .strip_suffix("/>")
            .or_else(|| element.strip_suffix('>'))
            .ok_or_else(|| near(src))?
            .trim_start();
        // skip the tag name
        rest = element
            .find(char::is_whitespace)
            .map_or("", |i| &element[i..]);
    }

    let mut out = Vec::new();
    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let eq = rest.find('=').ok_or_else(|| near(rest))?;
        let name = rest[..eq].trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(near(rest));
        }

        let after = rest[eq + 1..].trim_start();
        let quote = match after.chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(near(rest)),
        };
        let body = &after[1..];
        let end = body.find(quote).ok_or_else(|| near(rest))?;

        out.push((name, &body[..end]));
        rest = &body[end + 1..];
    }
    Ok(out)
}
