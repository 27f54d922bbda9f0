use crate::foundation::core::NodeId;

/// Named slideshow entry point registered on a page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlowStartingPoint {
    /// First node of the flow.
    pub node_id: NodeId,
    /// Label shown by the host's presenter.
    pub name: String,
}

/// One outgoing interaction: what fires it and what it does.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Reaction {
    /// Event that fires the action.
    pub trigger: Trigger,
    /// Action executed on fire.
    pub action: Action,
}

/// Interaction trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trigger {
    /// Click anywhere on the node.
    OnClick,
}

/// Interaction action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Move to another node.
    Node {
        /// Destination node.
        destination_id: NodeId,
        /// Navigation mode.
        navigation: Navigation,
        /// Keep the scroll offset of the source when arriving.
        preserve_scroll_position: bool,
        /// Animated transition; `None` is an instant cut.
        transition: Option<Transition>,
    },
}

/// Navigation mode of a node action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Navigation {
    /// Replace the current screen with the destination.
    Navigate,
}

/// Animated transition attached to a navigation action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transition {
    /// Visual style.
    pub kind: TransitionKind,
    /// Timing curve.
    pub easing: Easing,
    /// Duration in the host's native time unit.
    pub duration: f64,
}

/// Visual transition style.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionKind {
    /// Cross-dissolve.
    Dissolve,
    /// Morph matching layers between source and destination.
    SmartAnimate,
    /// Destination moves in over the source.
    MoveIn {
        /// Travel direction.
        direction: Direction,
    },
    /// Destination pushes the source out.
    Push {
        /// Travel direction.
        direction: Direction,
    },
    /// Destination slides in, source fades.
    SlideIn {
        /// Travel direction.
        direction: Direction,
    },
}

/// Travel direction for directional transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    /// Right to left.
    Left,
    /// Left to right.
    Right,
    /// Bottom to top.
    Top,
    /// Top to bottom.
    Bottom,
}

/// Transition timing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Slow start and end.
    EaseInAndOut,
}

impl Reaction {
    /// Click-to-navigate reaction towards `destination`.
    pub fn navigate_on_click(destination: NodeId, transition: Option<Transition>) -> Self {
        Self {
            trigger: Trigger::OnClick,
            action: Action::Node {
                destination_id: destination,
                navigation: Navigation::Navigate,
                preserve_scroll_position: false,
                transition,
            },
        }
    }

    /// Destination node of the action.
    pub fn destination(&self) -> NodeId {
        match &self.action {
            Action::Node { destination_id, .. } => *destination_id,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/navigation/model.rs"]
mod tests;
