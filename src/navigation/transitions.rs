use crate::{
    config::TransitionSpec,
    foundation::error::{FrameshowError, FrameshowResult},
    navigation::model::{Direction, Transition, TransitionKind},
};

/// Resolve a configured transition into the host form.
///
/// `"instant"` resolves to `None` (a cut with no animation).
pub fn parse_transition(spec: &TransitionSpec) -> FrameshowResult<Option<Transition>> {
    let kind = spec.kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(FrameshowError::validation("transition kind must be non-empty"));
    }
    if !spec.duration.is_finite() || spec.duration < 0.0 {
        return Err(FrameshowError::validation(
            "transition duration must be finite and >= 0",
        ));
    }

    let kind = match kind.as_str() {
        "instant" | "none" => return Ok(None),
        "dissolve" => TransitionKind::Dissolve,
        "smart_animate" | "smartanimate" | "smart" => TransitionKind::SmartAnimate,
        "move_in" | "movein" => TransitionKind::MoveIn {
            direction: parse_direction(spec)?,
        },
        "push" => TransitionKind::Push {
            direction: parse_direction(spec)?,
        },
        "slide_in" | "slidein" => TransitionKind::SlideIn {
            direction: parse_direction(spec)?,
        },
        _ => {
            return Err(FrameshowError::validation(format!(
                "unknown transition kind '{kind}'"
            )));
        }
    };

    Ok(Some(Transition {
        kind,
        easing: spec.easing,
        duration: spec.duration,
    }))
}

fn parse_direction(spec: &TransitionSpec) -> FrameshowResult<Direction> {
    let params = if spec.params.is_null() {
        None
    } else {
        Some(spec.params.as_object().ok_or_else(|| {
            FrameshowError::validation("transition params must be an object")
        })?)
    };

    match params
        .and_then(|p| p.get("direction"))
        .and_then(|v| v.as_str())
    {
        None => Ok(Direction::Left),
        Some(s) => match s.trim().to_ascii_lowercase().as_str() {
            "left" | "rtl" | "right_to_left" => Ok(Direction::Left),
            "right" | "ltr" | "left_to_right" => Ok(Direction::Right),
            "top" | "btt" | "bottom_to_top" => Ok(Direction::Top),
            "bottom" | "ttb" | "top_to_bottom" => Ok(Direction::Bottom),
            other => Err(FrameshowError::validation(format!(
                "unknown transition direction '{other}'"
            ))),
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/transitions.rs"]
mod tests;
