//! Delimited-text header reading.

mod delimiter;
mod header;
mod reader;

pub use delimiter::Delimiter;
pub use reader::read_csv_headers;
