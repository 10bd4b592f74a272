pub mod constants;
pub mod error;
pub mod params;
pub mod pointer;
pub mod sim;
pub mod surface;
pub mod trail;
pub mod uniforms;
pub mod viewport;

pub use constants::*;
pub use error::CoreError;
pub use params::*;
pub use pointer::*;
pub use sim::*;
pub use surface::*;
pub use trail::*;
pub use viewport::*;
