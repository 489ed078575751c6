//! Mail transports

pub mod config;
pub mod log;
pub mod resolver;
pub mod smtp;
pub mod strategy;
