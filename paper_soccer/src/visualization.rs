use crate::{is_in_bottom_goal, is_in_field, is_in_top_goal, GameState, Node, COLS, ROWS};

/// Draws the field as text, e.g. for debug logs.
///
/// Every node and every line between two nodes gets one character: `●` is the ball,
/// `○` a visited node and `·` any other reachable node.
pub fn visualize_field(game: &GameState) -> String {
    let width = 2 * COLS as usize + 1;
    let height = 2 * ROWS as usize + 1;
    let mut canvas = vec![vec![' '; width]; height];

    for y in 0..=ROWS {
        for x in 0..=COLS {
            let node = Node::new(x, y);
            let c = if node == game.ball() {
                '●'
            } else if game.occupied_nodes().contains(&node) {
                '○'
            } else if is_in_field(node) || is_in_top_goal(node) || is_in_bottom_goal(node) {
                '·'
            } else {
                continue;
            };
            canvas[2 * y as usize][2 * x as usize] = c;
        }
    }

    for edge in game.drawn_lines().iter() {
        let (a, b) = edge.endpoints();
        // The midpoint between two nodes, in canvas coordinates
        let col = (a.x + b.x) as usize;
        let row = (a.y + b.y) as usize;
        let cell = &mut canvas[row][col];
        let line = match (b.x - a.x, b.y - a.y) {
            (0, _) => '│',
            (_, 0) => '─',
            (dx, dy) if dx == dy => '╲',
            _ => '╱',
        };
        // Two diagonals can cross in the same cell
        *cell = if matches!(*cell, '╲' | '╱') && *cell != line {
            '╳'
        } else {
            line
        };
    }

    let mut result = String::with_capacity(height * (width + 1) * 3);
    for row in canvas {
        let line: String = row.into_iter().collect();
        result += line.trim_end();
        result.push('\n');
    }
    result
}
