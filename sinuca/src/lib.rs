pub use match_state::*;
pub use player::*;
pub use protocol::*;
pub use scoreboard::*;
pub use shot::*;
pub use turn::*;

#[cfg(test)]
mod arbitrary;
mod match_state;
mod player;
mod protocol;
mod scoreboard;
mod shot;
mod turn;
