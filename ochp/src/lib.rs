//! Rust implementation of the Open Clearing House Protocol (OCHP) v1.4
//!
//! OCHP connects charge point operators and e-mobility providers through a
//! clearing house. This library provides the message types and their SOAP/XML
//! encoding; transport and business logic are left to the caller.
//!
//! # Architecture
//!
//! - `ochp-core`: error type, identifiers and the XML element mapping
//! - `ochp-messages`: shared data types and every request/response message
//! - `ochp-soap`: SOAP envelope, WS-Security credentials, faults and codec
//!
//! # Usage
//!
//! ```no_run
//! use ochp::soap::{OchpCodec, UsernameToken};
//! use ochp::messages::{GetChargePointListRequest, GetChargePointListResponse};
//!
//! let codec = OchpCodec::default().with_credentials(UsernameToken::new("user", "secret"));
//! let request = codec.encode(&GetChargePointListRequest)?;
//! # let reply = request.clone();
//! let response: GetChargePointListResponse = codec.decode(&reply)?;
//! # Ok::<(), ochp::OchpError>(())
//! ```

// Re-export core types
pub use ochp_core::{
    CdrId, ContractId, DirectId, EvseId, OchpError, OchpResult, OperatorId, ParkingId,
    ProviderId, TariffId,
};

pub mod xml {
    pub use ochp_core::xml::*;
}

pub mod messages {
    pub use ochp_messages::*;
}

pub mod soap {
    pub use ochp_soap::*;
}
