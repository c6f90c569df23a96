//! Core types and utilities for the OCHP v1.4 protocol
//!
//! This crate provides the error type, the identifier value types and the
//! XML element mapping used throughout the OCHP implementation.

pub mod error;
pub mod identifiers;
pub mod xml;

pub use error::{OchpError, OchpResult};
pub use identifiers::{
    CdrId, ContractId, DirectId, EvseId, OperatorId, OperatorIdFormat, ParkingId, ProviderId,
    TariffId,
};
pub use xml::{BuildElement, ElementExt, FromXml, ParseFailure, ToXml};
