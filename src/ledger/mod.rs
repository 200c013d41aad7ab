pub mod error;
pub mod store;

pub use error::LedgerError;
pub use store::{parse_line, LedgerStore};
