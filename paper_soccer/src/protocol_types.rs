use serde::{Deserialize, Serialize};

use crate::{Edge, GameState, GameStatus, IllegalMove, MoveOutcome, Node, Player};

/// Request from the presentation layer to the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Throw away the current game and start a new one.
    ///
    /// The response is a [`Response::Snapshot`].
    NewGame,
    /// Move the ball to the given node.
    ///
    /// If the move is legal, it is marked as in progress and the response is a
    /// [`Response::Snapshot`]; the move is applied once [`Request::MotionFinished`]
    /// arrives. Otherwise the response is a [`Response::Rejected`].
    RequestMove { to: Node },
    /// The ball's motion towards the requested node has finished.
    MotionFinished,
    /// Report the current state without changing it.
    Snapshot,
    /// Report the nodes the player to move may move to.
    ValidMoves,
    /// The engine should shut down.
    Bye,
}

/// Response from the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Snapshot { snapshot: Snapshot },
    /// The request was not carried out, and nothing changed.
    Rejected {
        reason: IllegalMove,
        snapshot: Snapshot,
    },
    ValidMoves { moves: Vec<Node> },
    /// The request could not be understood or did not fit the current state.
    Error { message: String },
}

/// Everything needed to draw the game, after every change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The node the ball rests on. During a motion, this is still the start node.
    pub ball: Node,
    /// Includes the sides of the field.
    pub drawn_lines: Vec<Edge>,
    pub occupied_nodes: Vec<Node>,
    pub status: GameStatus,
    /// The player to move, or the winner once the game is over.
    pub current_player: Player,
    pub move_in_progress: bool,
    pub last_outcome: Option<MoveOutcome>,
}

impl From<&GameState> for Snapshot {
    fn from(game: &GameState) -> Self {
        Snapshot {
            ball: game.ball(),
            drawn_lines: game.drawn_lines().iter().collect(),
            occupied_nodes: game.occupied_nodes().iter().copied().collect(),
            status: game.status(),
            current_player: game.current_player(),
            move_in_progress: false,
            last_outcome: None,
        }
    }
}
