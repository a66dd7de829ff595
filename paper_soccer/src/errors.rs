use serde::{Deserialize, Serialize};

use crate::Node;

/// The error type for requesting a move, i.e. the reason why a move was rejected.
///
/// A rejected move never changes the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum IllegalMove {
    GameAlreadyOver,
    MotionInProgress,
    NotAdjacent { from: Node, to: Node },
    LineAlreadyDrawn { from: Node, to: Node },
    OwnGoal { to: Node },
    OutOfField { to: Node },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::GameAlreadyOver => write!(f, "The game is already over"),
            IllegalMove::MotionInProgress => {
                write!(f, "The previous move has not finished yet")
            }
            IllegalMove::NotAdjacent { from, to } => write!(
                f,
                "The ball can only move to one of the eight nodes surrounding it, but {} is not next to {}",
                to, from
            ),
            IllegalMove::LineAlreadyDrawn { from, to } => {
                write!(f, "The line between {} and {} has already been drawn", from, to)
            }
            IllegalMove::OwnGoal { to } => {
                write!(f, "The ball cannot be moved into the player's own goal at {}", to)
            }
            IllegalMove::OutOfField { to } => write!(f, "{} is outside of the playing field", to),
        }
    }
}

/// The error type for [`Session::finish_motion()`](crate::Session::finish_motion).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoMotionPending;

impl std::error::Error for NoMotionPending {}

impl std::fmt::Display for NoMotionPending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "A motion was reported as finished, but no move was in progress")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_with_kind_tag() {
        let err = IllegalMove::OutOfField {
            to: Node::new(0, 3),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"kind":"OutOfField","to":{"x":0,"y":3}}"#);
        let json = serde_json::to_string(&IllegalMove::GameAlreadyOver).unwrap();
        assert_eq!(json, r#"{"kind":"GameAlreadyOver"}"#);
    }

    #[test]
    fn message_mentions_nodes() {
        let err = IllegalMove::LineAlreadyDrawn {
            from: Node::new(1, 1),
            to: Node::new(1, 2),
        };
        assert_eq!(
            err.to_string(),
            "The line between (1, 1) and (1, 2) has already been drawn"
        );
    }
}
