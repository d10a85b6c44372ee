#![forbid(unsafe_code)]

pub mod model;
pub mod progress;
pub mod registry;
pub mod time;

pub use progress::Progress;
pub use registry::{RegistryError, SchemaRegistry};
pub use time::Clock;
