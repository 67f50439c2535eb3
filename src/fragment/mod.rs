//! Grouping and reassembly of multi-part messages.
//!
//! [`FragmentSet`] collects the parts of one concatenated message and
//! [`FragmentStore`] tracks many sets at once, keyed by reference number.

pub mod set;
pub mod store;

pub use set::{FragmentSet, FragmentStatus};
pub use store::FragmentStore;
