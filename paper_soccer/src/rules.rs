//! The move validator and the outcome detector.
//!
//! These are free functions over plain data so that they can be used for both the
//! authoritative [`GameState`](crate::GameState) and for exploring hypothetical positions.

use std::collections::BTreeSet;

use crate::{
    is_goal_front_center, is_in_bottom_goal, is_in_field, is_in_top_goal, is_on_boundary,
    DrawnLines, IllegalMove, Node, Player,
};

/// Checks whether `mover` may move the ball from `from` to `to`.
///
/// The rules are checked in this order, and the first violated one is reported:
/// 1. The target must be one of the eight surrounding nodes.
/// 2. The line to the target must not have been drawn yet, in either direction.
/// 3. A node in the mover's target goal is always reachable; a node in the other goal never is.
/// 4. Otherwise, the target must be inside the field.
///
/// This does not know whether the game is over; see [`GameState::validate_move()`](crate::GameState::validate_move).
pub fn validate_move(
    from: Node,
    to: Node,
    mover: Player,
    drawn_lines: &DrawnLines,
) -> Result<(), IllegalMove> {
    if !from.is_adjacent_to(to) {
        return Err(IllegalMove::NotAdjacent { from, to });
    }
    if drawn_lines.contains(from, to) {
        return Err(IllegalMove::LineAlreadyDrawn { from, to });
    }

    if check_goal(mover, to) {
        return Ok(());
    }
    if is_in_top_goal(to) || is_in_bottom_goal(to) {
        return Err(IllegalMove::OwnGoal { to });
    }

    if is_in_field(to) {
        Ok(())
    } else {
        Err(IllegalMove::OutOfField { to })
    }
}

pub fn is_valid_move(from: Node, to: Node, mover: Player, drawn_lines: &DrawnLines) -> bool {
    validate_move(from, to, mover, drawn_lines).is_ok()
}

/// All nodes the ball at `from` may be moved to by `mover`.
///
/// An empty result means that the player is blocked.
pub fn valid_moves(from: Node, mover: Player, drawn_lines: &DrawnLines) -> BTreeSet<Node> {
    from.neighbors()
        .filter(|&to| is_valid_move(from, to, mover, drawn_lines))
        .collect()
}

/// Did `mover` score by moving the ball to `node`?
///
/// Player 1 attacks the bottom goal, player 2 the top goal.
pub fn check_goal(mover: Player, node: Node) -> bool {
    match mover {
        Player::P1 => is_in_bottom_goal(node),
        Player::P2 => is_in_top_goal(node),
    }
}

/// Does landing on `node` give the mover another move?
///
/// `occupied_nodes` must be the nodes visited *before* the ball arrived at `node`.
/// A visited node always bounces. An unvisited node bounces if it lies on a side
/// of the field, except for the node in front of the center of either goal.
pub fn is_bounce_node(node: Node, occupied_nodes: &BTreeSet<Node>) -> bool {
    if occupied_nodes.contains(&node) {
        return true;
    }
    is_on_boundary(node) && !is_goal_front_center(node)
}
