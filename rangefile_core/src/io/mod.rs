//! Range readers: the [`RangeReaderTrait`] seam, the file-backed [`RangeFileReader`] and the
//! in-memory [`RangeReaderBlob`].

mod range_reader;
mod range_reader_blob;
mod range_reader_file;

pub use range_reader::*;
pub use range_reader_blob::*;
pub use range_reader_file::*;
