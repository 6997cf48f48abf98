mod board;
mod config;
mod logging;
mod placement;
mod player;
mod protocol;
mod server;
mod session;
mod shapes;
pub mod transport;

pub use board::*;
pub use config::*;
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
pub use protocol::*;
pub use server::*;
pub use session::*;
pub use shapes::*;
