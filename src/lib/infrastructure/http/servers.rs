//! Plain and TLS servers

pub mod http;
pub mod https;
