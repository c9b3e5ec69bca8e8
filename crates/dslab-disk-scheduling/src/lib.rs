#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod comparison;
pub mod domain;
pub mod error;
pub mod head;
pub mod input;
pub mod policies;
pub mod policy;
pub mod request;
pub mod trace;

pub use domain::{Cylinder, DiskDomain};
pub use error::SchedulingError;
pub use head::Direction;
pub use policy::Policy;
pub use request::RequestSet;
pub use trace::Trace;
