pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod layer;
pub mod pointer;
pub mod scene;
pub mod tile;
pub mod viewport;

pub use config::*;
pub use constants::*;
pub use driver::*;
pub use error::*;
pub use layer::*;
pub use pointer::*;
pub use scene::*;
pub use tile::*;
pub use viewport::*;
