//! CSV table reading and writing.

mod header;
mod reader;

pub use header::{HeaderPair, read_header_pair};
pub use reader::{read_csv_table, write_csv_table};
