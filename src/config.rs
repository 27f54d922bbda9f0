use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    foundation::error::{FrameshowError, FrameshowResult},
    navigation::{model::Easing, transitions::parse_transition},
    select::SortPriority,
};

/// Label of the single entry point registered on the slideshow page.
pub const DEFAULT_ENTRY_LABEL: &str = "Start Slideshow";

/// Options for one slideshow build. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlideshowOpts {
    /// Ordering of the source frames.
    pub order: SortPriority,
    /// Name given to the created page; `None` keeps the host default.
    pub page_name: Option<String>,
    /// Geometry of the previous-slide preview.
    pub squeeze: SqueezeOpts,
    /// Label of the slideshow entry point.
    pub entry_label: String,
    /// Transition attached to every forward edge.
    pub transition: TransitionSpec,
}

/// Previous-slide preview geometry: width is divided by `width_divisor` and the preview sits
/// `gap` units off the left edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SqueezeOpts {
    /// Horizontal squeeze factor.
    pub width_divisor: f64,
    /// Distance between the preview's right edge and the slide's left edge.
    pub gap: f64,
}

/// Configured transition, resolved by [`parse_transition`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TransitionSpec {
    /// Transition kind, e.g. `"smart_animate"`, `"dissolve"`, `"push"`, `"instant"`.
    pub kind: String,
    /// Timing curve.
    pub easing: Easing,
    /// Duration in the host's time unit.
    pub duration: f64,
    /// Kind-specific parameters (`{"direction": "left"}`).
    #[serde(skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

impl Default for SlideshowOpts {
    fn default() -> Self {
        Self {
            order: SortPriority::Y,
            page_name: None,
            squeeze: SqueezeOpts::default(),
            entry_label: DEFAULT_ENTRY_LABEL.to_string(),
            transition: TransitionSpec::default(),
        }
    }
}

impl Default for SqueezeOpts {
    fn default() -> Self {
        Self {
            width_divisor: 12.0,
            gap: 20.0,
        }
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self {
            kind: "smart_animate".to_string(),
            easing: Easing::EaseOut,
            duration: 1.0,
            params: serde_json::Value::Null,
        }
    }
}

impl SlideshowOpts {
    /// Parse options from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FrameshowResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FrameshowError::serde(format!("parse slideshow options JSON: {e}")))
    }

    /// Parse options from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FrameshowResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FrameshowError::validation(format!("open options JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject options that would produce degenerate geometry or transitions.
    pub fn validate(&self) -> FrameshowResult<()> {
        self.squeeze.validate()?;
        if self.entry_label.trim().is_empty() {
            return Err(FrameshowError::validation("entry_label must be non-empty"));
        }
        if let Some(name) = &self.page_name
            && name.trim().is_empty()
        {
            return Err(FrameshowError::validation(
                "page_name must be non-empty when set",
            ));
        }
        parse_transition(&self.transition)?;
        Ok(())
    }
}

impl SqueezeOpts {
    /// Check divisor and gap.
    pub fn validate(&self) -> FrameshowResult<()> {
        if !self.width_divisor.is_finite() || self.width_divisor <= 0.0 {
            return Err(FrameshowError::validation(
                "squeeze.width_divisor must be finite and > 0",
            ));
        }
        if !self.gap.is_finite() {
            return Err(FrameshowError::validation("squeeze.gap must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
