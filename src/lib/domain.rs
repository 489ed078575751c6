//! Domain layer: reservation requests and outbound communication

pub mod communication;
pub mod reservations;
