//! Storage layer for housesplit
//!
//! The balance engine never reads storage itself. This layer assembles its
//! inputs: a `LedgerSource` trait for per-household record retrieval and a
//! snapshot-file implementation with atomic writes.

pub mod demo;
pub mod file_io;
pub mod repository;
pub mod snapshot;

pub use demo::demo_snapshot;
pub use file_io::{read_json_required, write_json_atomic};
pub use repository::{LedgerSource, SnapshotRepository};
pub use snapshot::{HouseholdSnapshot, SnapshotIssue, SNAPSHOT_SCHEMA_VERSION};
