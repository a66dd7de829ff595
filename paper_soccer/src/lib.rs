pub use errors::*;
pub use field::*;
pub use game::*;
pub use node::*;
pub use protocol_types::*;
pub use rules::*;
pub use session::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod errors;
mod field;
mod game;
mod node;
mod protocol_types;
mod rules;
mod session;
mod visualization;
