mod config;
mod error;
mod recording;
mod script;
mod session;
mod simulate;
pub use config::*;
pub use error::*;
pub use recording::*;
pub use script::*;
pub use session::*;
pub use simulate::*;
