use paper_soccer::{GameState, GameStatus, IllegalMove};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::debug;

/// How a batch of random games ended, per player.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SimulationScore {
    pub wins_by_goal: [usize; 2],
    pub wins_by_block: [usize; 2],
    pub num_moves: usize,
}

impl SimulationScore {
    pub fn num_games(&self) -> usize {
        self.wins_by_goal.iter().sum::<usize>() + self.wins_by_block.iter().sum::<usize>()
    }
}

/// Plays a game where both players pick uniformly among their legal moves.
///
/// Every move draws a new line and there are finitely many, so this always ends.
/// An error means that the engine rejected one of its own valid moves.
pub fn play_random_game(rng: &mut StdRng) -> Result<GameState, IllegalMove> {
    let mut game = GameState::new();
    while let Some(to) = game.valid_moves().into_iter().choose(rng) {
        game.request_move(to)?;
    }
    Ok(game)
}

pub fn simulate(rng: &mut StdRng, num_games: usize) -> Result<SimulationScore, IllegalMove> {
    let mut score = SimulationScore::default();
    for game_idx in 0..num_games {
        let game = play_random_game(rng)?;
        score.num_moves += game.path().len();
        let status = game.status();
        // play_random_game() only stops once the game is over
        if let Some(winner) = status.winner() {
            debug!(winner = %winner, game_idx, moves = game.path().len(), ?status, "Game over");
            let wins = match status {
                GameStatus::WonByGoal(_) => &mut score.wins_by_goal,
                _ => &mut score.wins_by_block,
            };
            wins[winner.index()] += 1;
        }
    }
    Ok(score)
}
