//! Ports module for lexical ordering
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::LexicalOrderingApi;
pub use outbound::WordSource;
