//! Outbound communication: messages, mailers and transport resolution

pub mod mailer;
pub mod transport;

#[cfg(test)]
pub mod tests {
    pub use super::mailer::MockMailer;
    pub use super::transport::MockTransportResolver;
}
