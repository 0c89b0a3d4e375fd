//! Value types passed to and returned from range readers.

mod blob;
pub use blob::*;

mod byte_range;
pub use byte_range::*;

mod file_location;
pub use file_location::*;
