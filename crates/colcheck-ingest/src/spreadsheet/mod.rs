//! Excel workbook header reading.

mod reader;
mod row;

pub use reader::{read_xls_headers, read_xlsx_headers};
