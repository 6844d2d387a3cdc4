pub mod catalog;
pub mod generator;
pub mod line;
pub mod name;
pub mod timestamp;
pub mod weighted;

pub mod err;

pub use catalog::{Catalog, Level};
pub use err::Result;
pub use generator::{Generator, Options};
pub use line::{Extras, LineSampler, LogLine};
pub use timestamp::Timestamp;
