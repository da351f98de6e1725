//! Splitting cores
//!
//! * ec: one output file per EC key (single EC, first EC or joined list)
//! * group: one output file per resolved methyltransferase group

pub mod ec;
pub mod group;

pub use ec::split_by_ec;
pub use group::split_by_group;
