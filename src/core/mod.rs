//! Stateless analytics services over in-memory record and inventory snapshots.

pub mod services;
pub mod utils;
