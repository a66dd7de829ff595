mod recording;
mod replay;
mod server;
mod simulation;
#[cfg(test)]
mod test_utils;
pub use recording::*;
pub use replay::*;
pub use server::*;
pub use simulation::*;
