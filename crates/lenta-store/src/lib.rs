pub mod catalog;
pub mod seed;
pub mod session;
pub mod snapshot;

pub use catalog::{StoryCatalog, UserCatalog};
pub use session::{SessionStore, StoreError};
pub use snapshot::{Snapshot, SnapshotError};
