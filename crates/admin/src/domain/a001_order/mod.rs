pub mod filter;
pub mod service;
