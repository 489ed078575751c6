//! Adapters: mail transports, configuration and the HTTP server

pub mod email;
pub mod http;
pub mod logging;
