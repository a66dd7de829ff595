use crate::{GameState, Node, Player, COLS, ROWS};

impl quickcheck::Arbitrary for Node {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // The grid plus a one node wide margin around it
        let x = (u8::arbitrary(g) % (COLS as u8 + 3)) as i8 - 1;
        let y = (u8::arbitrary(g) % (ROWS as u8 + 3)) as i8 - 1;
        Node::new(x, y)
    }
}

impl quickcheck::Arbitrary for Player {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Player::P1, Player::P2]).unwrap()
    }
}

/// The moves of a game where both players pick uniformly among their legal moves.
///
/// The game may or may not have ended after the last move.
#[derive(Clone, Debug)]
pub struct RandomGame {
    pub moves: Vec<Node>,
}

impl RandomGame {
    /// Plays the moves on a fresh game.
    pub fn replay(&self) -> GameState {
        let mut game = GameState::new();
        for &to in &self.moves {
            game.request_move(to).unwrap();
        }
        game
    }
}

impl quickcheck::Arbitrary for RandomGame {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // Usually long enough to end the game, but not always
        let max_moves = usize::from(u8::arbitrary(g));
        let mut game = GameState::new();
        let mut moves = Vec::new();
        while moves.len() < max_moves {
            let candidates: Vec<Node> = game.valid_moves().into_iter().collect();
            let Some(&to) = g.choose(&candidates) else {
                break;
            };
            game.request_move(to).unwrap();
            moves.push(to);
        }
        RandomGame { moves }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Every prefix of a legal game is a legal game
        let moves = self.moves.clone();
        Box::new((0..moves.len()).rev().map(move |len| RandomGame {
            moves: moves[..len].to_vec(),
        }))
    }
}
