#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Reservation intake library for the restaurant website

pub mod domain;
pub mod infrastructure;

#[cfg(test)]
mod test_support;
