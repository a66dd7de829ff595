use anyhow::Context;
use paper_soccer::GameState;

use crate::recording::GameRecording;

/// Plays a recorded game again and checks that every move is legal and that the
/// game ends the way the recording says.
pub fn replay(recording: &GameRecording) -> anyhow::Result<GameState> {
    let mut game = GameState::new();
    for (move_idx, &to) in recording.moves.iter().enumerate() {
        game.request_move(to)
            .with_context(|| format!("Move number {} to {} is illegal", move_idx + 1, to))?;
    }
    if game.status() != recording.status {
        anyhow::bail!(
            "The recording says the game ended as {:?}, but replaying it gives {:?}",
            recording.status,
            game.status()
        );
    }
    Ok(game)
}

#[cfg(test)]
mod tests {
    use paper_soccer::{GameStatus, IllegalMove, Node, Player};

    use super::*;

    fn recording(moves: &[(i8, i8)], status: GameStatus) -> GameRecording {
        GameRecording {
            moves: moves.iter().map(|&(x, y)| Node::new(x, y)).collect(),
            status,
        }
    }

    #[test]
    fn blocked_game_replays() {
        let rec = recording(
            &[(4, 5), (3, 4), (2, 3), (2, 2), (1, 1)],
            GameStatus::WonByBlock(Player::P2),
        );
        let game = replay(&rec).unwrap();
        assert_eq!(game.ball(), Node::new(1, 1));
    }

    #[test]
    fn illegal_move_is_reported() {
        let rec = recording(&[(6, 6), (5, 6)], GameStatus::InProgress(Player::P1));
        let err = replay(&rec).unwrap_err();
        assert_eq!(err.to_string(), "Move number 2 to (5, 6) is illegal");
        assert!(matches!(
            err.downcast_ref::<IllegalMove>(),
            Some(IllegalMove::LineAlreadyDrawn { .. })
        ));
    }

    #[test]
    fn wrong_status_is_reported() {
        let rec = recording(&[(6, 6)], GameStatus::WonByGoal(Player::P1));
        assert!(replay(&rec).is_err());
    }
}
