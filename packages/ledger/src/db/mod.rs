pub mod connect;
pub mod txn;

pub use connect::{connect_store, StoreHandle, StoreInitError};
pub use txn::with_txn;
