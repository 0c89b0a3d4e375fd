//! Opens a file by location and reads arbitrary byte ranges from it.
//!
//! The central type is [`io::RangeFileReader`]. Reading past the end of a file is not an error:
//! windows are truncated at end-of-file and windows starting at or beyond it yield an empty [`Blob`].
//! Every failure is reported as a [`RangeFileError`].
//!
//! ```rust
//! use rangefile_core::{io::RangeFileReader, FileLocation};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let dir = tempfile::tempdir()?;
//! # let path = dir.path().join("letters.txt");
//! # std::fs::write(&path, "ABCDEFGHIJ")?;
//! let mut reader = RangeFileReader::open(FileLocation::from_path(&path))?;
//! assert_eq!(reader.read(0, 4)?.as_slice(), b"ABCD");
//! assert_eq!(reader.read(8, 10)?.as_slice(), b"IJ");
//! assert!(reader.read(10, 5)?.is_empty());
//! reader.close();
//! # Ok(())
//! # }
//! ```

pub mod macros;

mod error;
pub use error::*;

pub mod io;

pub mod types;
pub use types::*;
