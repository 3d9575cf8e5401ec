pub mod store_snapshot_source;

pub use store_snapshot_source::StoreSnapshotSource;
