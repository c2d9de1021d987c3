pub mod init;
pub mod init_types;

pub use init::{join_trips, load_trip_records, read_assignments, read_gifts};
pub use init_types::{Assignment, Gift};
