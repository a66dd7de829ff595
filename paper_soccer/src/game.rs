use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    check_goal, is_bounce_node, valid_moves, validate_move, DrawnLines, Edge, IllegalMove, Node,
    CENTER,
};

/// One of the two players.
///
/// Player 1 kicks off and attacks the bottom goal, player 2 attacks the top goal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// 0 for player 1, 1 for player 2. Useful for indexing per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::P1 => 0,
            Player::P2 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// Whose turn it is, or how the game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "player")]
pub enum GameStatus {
    InProgress(Player),
    /// The player scored a goal.
    WonByGoal(Player),
    /// The player won because the opponent had no legal move left.
    WonByBlock(Player),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::InProgress(_) => None,
            GameStatus::WonByGoal(player) | GameStatus::WonByBlock(player) => Some(player),
        }
    }

    /// The player to move, or the winner once the game is over.
    pub fn player(self) -> Player {
        match self {
            GameStatus::InProgress(player)
            | GameStatus::WonByGoal(player)
            | GameStatus::WonByBlock(player) => player,
        }
    }
}

/// Summarizes the outcome of applying a move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MoveOutcome {
    /// The ball landed on a fresh node in the middle of the field.
    TurnPassed { next: Player },
    /// The ball bounced off a side or a visited node, and the same player moves again.
    Bounce { player: Player },
    Goal { scorer: Player },
    /// The player who would move next has no legal move.
    Blocked { blocked: Player, winner: Player },
}

/// The complete state of one game.
///
/// All rule-relevant data lives here, so several games can exist side by side.
/// The only way to change it is through [`Self::request_move()`] and [`Self::new_game()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    ball: Node,
    drawn_lines: DrawnLines,
    /// Every node the ball has rested on, including the center.
    occupied_nodes: BTreeSet<Node>,
    status: GameStatus,
    /// The nodes the ball moved to, in order. Doesn't include the center.
    path: Vec<Node>,
}

impl GameState {
    /// A fresh game: ball in the center, only the field's sides drawn, player 1 to move.
    pub fn new() -> Self {
        Self {
            ball: CENTER,
            drawn_lines: DrawnLines::with_boundaries(),
            occupied_nodes: BTreeSet::from([CENTER]),
            status: GameStatus::InProgress(Player::P1),
            path: Vec::new(),
        }
    }

    /// Throws away the current game and starts a fresh one.
    pub fn new_game(&mut self) {
        *self = Self::new();
    }

    /// The node where the ball rests.
    pub fn ball(&self) -> Node {
        self.ball
    }

    pub fn drawn_lines(&self) -> &DrawnLines {
        &self.drawn_lines
    }

    pub fn occupied_nodes(&self) -> &BTreeSet<Node> {
        &self.occupied_nodes
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player to move, or the winner once the game is over.
    pub fn current_player(&self) -> Player {
        self.status.player()
    }

    pub fn path(&self) -> &[Node] {
        &self.path
    }

    /// Checks whether the player to move may move the ball to `to`.
    pub fn validate_move(&self, to: Node) -> Result<(), IllegalMove> {
        match self.status {
            GameStatus::InProgress(mover) => validate_move(self.ball, to, mover, &self.drawn_lines),
            _ => Err(IllegalMove::GameAlreadyOver),
        }
    }

    pub fn is_valid_move(&self, to: Node) -> bool {
        self.validate_move(to).is_ok()
    }

    /// The nodes the player to move may move to. Empty once the game is over.
    pub fn valid_moves(&self) -> BTreeSet<Node> {
        match self.status {
            GameStatus::InProgress(mover) => valid_moves(self.ball, mover, &self.drawn_lines),
            _ => BTreeSet::new(),
        }
    }

    /// Validates and, if legal, applies a move by the player to move.
    ///
    /// On error, nothing is changed.
    pub fn request_move(&mut self, to: Node) -> Result<MoveOutcome, IllegalMove> {
        let GameStatus::InProgress(mover) = self.status else {
            return Err(IllegalMove::GameAlreadyOver);
        };
        validate_move(self.ball, to, mover, &self.drawn_lines)?;
        Ok(self.apply_move(mover, to))
    }

    /// Applies a move by `mover` that has already been validated.
    ///
    /// Passing an illegal move is a bug in the caller.
    pub(crate) fn apply_move(&mut self, mover: Player, to: Node) -> MoveOutcome {
        debug_assert_eq!(self.status, GameStatus::InProgress(mover));
        debug_assert!(self.is_valid_move(to));

        self.drawn_lines.insert(Edge::new(self.ball, to));
        self.ball = to;
        self.path.push(to);

        if check_goal(mover, to) {
            self.status = GameStatus::WonByGoal(mover);
            return MoveOutcome::Goal { scorer: mover };
        }

        // Must be decided before the node is marked as visited
        let bounce = is_bounce_node(to, &self.occupied_nodes);
        self.occupied_nodes.insert(to);

        let next = if bounce { mover } else { mover.opponent() };
        if valid_moves(self.ball, next, &self.drawn_lines).is_empty() {
            let winner = next.opponent();
            self.status = GameStatus::WonByBlock(winner);
            return MoveOutcome::Blocked {
                blocked: next,
                winner,
            };
        }

        self.status = GameStatus::InProgress(next);
        if bounce {
            MoveOutcome::Bounce { player: mover }
        } else {
            MoveOutcome::TurnPassed { next }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
