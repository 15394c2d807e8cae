pub mod destination;
pub mod payload;
pub mod property;

pub use destination::*;
pub use payload::*;
pub use property::*;
