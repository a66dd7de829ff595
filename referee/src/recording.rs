use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use paper_soccer::{GameStatus, Node};
use serde::{Deserialize, Serialize};

/// Collects the moves of the current game and writes each game to its own JSON file.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    moves: Vec<Node>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            moves: Vec::new(),
        })
    }

    /// Stores an applied move of the current game.
    pub fn store_move(&mut self, to: Node) {
        self.moves.push(to);
    }

    pub fn has_moves(&self) -> bool {
        !self.moves.is_empty()
    }

    /// Writes the stored moves as `game_NNNNNN.json` and starts over with no moves.
    ///
    /// Returns the path of the written file.
    pub fn write_game_recording(&mut self, status: GameStatus) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let recording = GameRecording {
            moves: std::mem::take(&mut self.moves),
            status,
        };
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

/// A finished or abandoned game: the nodes the ball was moved to, and how it ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub moves: Vec<Node>,
    pub status: GameStatus,
}

impl GameRecording {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open recording '{}'", path.display()))?;
        let recording = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse recording '{}'", path.display()))?;
        Ok(recording)
    }
}

#[cfg(test)]
mod tests {
    use paper_soccer::Player;

    use super::*;
    use crate::test_utils::scratch_dir;

    #[test]
    fn missing_directory() {
        let dir = std::env::temp_dir().join("referee_does_not_exist");
        assert!(Recorder::new(dir).is_err());
    }

    #[test]
    fn writes_numbered_files() {
        let dir = scratch_dir("recorder");
        let mut recorder = Recorder::new(dir.clone()).unwrap();
        recorder.store_move(Node::new(6, 6));
        recorder.store_move(Node::new(7, 7));
        let first = recorder
            .write_game_recording(GameStatus::InProgress(Player::P1))
            .unwrap();
        assert!(!recorder.has_moves());
        recorder.store_move(Node::new(4, 4));
        let second = recorder
            .write_game_recording(GameStatus::InProgress(Player::P2))
            .unwrap();

        assert_eq!(first, dir.join("game_000001.json"));
        assert_eq!(second, dir.join("game_000002.json"));
        assert_eq!(
            GameRecording::load(&first).unwrap(),
            GameRecording {
                moves: vec![Node::new(6, 6), Node::new(7, 7)],
                status: GameStatus::InProgress(Player::P1),
            }
        );
        std::fs::remove_dir_all(dir).unwrap();
    }
}
