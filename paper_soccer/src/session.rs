use crate::{GameState, IllegalMove, MoveOutcome, NoMotionPending, Node, Player, Snapshot};

/// Owns the single game shown to the players and gates it behind the ball's motion.
///
/// A move is requested, then the presentation animates the ball, then it reports that
/// the motion has finished, and only then is the move applied. While a move is in
/// progress, no other move is accepted. The rules themselves define no timing, so a
/// caller without animations calls [`Self::finish_motion()`] right away.
#[derive(Clone, Debug, Default)]
pub struct Session {
    game: GameState,
    /// The validated move whose motion is being shown.
    pending: Option<(Player, Node)>,
    last_outcome: Option<MoveOutcome>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn move_in_progress(&self) -> bool {
        self.pending.is_some()
    }

    /// Where the ball is headed, if a move is in progress.
    pub fn pending_target(&self) -> Option<Node> {
        self.pending.map(|(_, to)| to)
    }

    /// The outcome of the most recently applied move in this game.
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    /// Starts a fresh game. Any move in progress is dropped.
    pub fn new_game(&mut self) {
        self.game.new_game();
        self.pending = None;
        self.last_outcome = None;
    }

    /// Validates a move and, if legal, marks it as in progress.
    ///
    /// The game itself only changes once [`Self::finish_motion()`] is called.
    pub fn request_move(&mut self, to: Node) -> Result<(), IllegalMove> {
        if self.pending.is_some() {
            return Err(IllegalMove::MotionInProgress);
        }
        self.game.validate_move(to)?;
        self.pending = Some((self.game.current_player(), to));
        Ok(())
    }

    /// Applies the move in progress.
    pub fn finish_motion(&mut self) -> Result<MoveOutcome, NoMotionPending> {
        let (mover, to) = self.pending.take().ok_or(NoMotionPending)?;
        let outcome = self.game.apply_move(mover, to);
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    /// A read-only copy of everything needed to draw the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            move_in_progress: self.move_in_progress(),
            last_outcome: self.last_outcome,
            ..Snapshot::from(&self.game)
        }
    }
}
