pub mod connector;
pub mod resolver;
pub mod retry;
