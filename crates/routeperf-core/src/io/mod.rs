//! Reading and writing the routing performance table.
pub mod performance_csv;

pub use performance_csv::{ensure_data_exists, load_records, write_records};
