//! Policy implementations.
//!
//! Every policy is a pure function with the same signature, see [`PolicyFn`](crate::policy::PolicyFn).
//! Inputs are validated before the head moves, so an invalid input never yields a partial trace.

pub(crate) mod common;

pub mod c_look;
pub mod c_scan;
pub mod fcfs;
pub mod look;
pub mod scan;
pub mod sstf;

pub use c_look::c_look;
pub use c_scan::c_scan;
pub use fcfs::fcfs;
pub use look::look;
pub use scan::scan;
pub use sstf::sstf;
