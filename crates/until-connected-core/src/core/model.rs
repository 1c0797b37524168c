pub mod policy;
pub mod target;
