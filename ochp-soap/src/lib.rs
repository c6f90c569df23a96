//! SOAP layer for OCHP v1.4
//!
//! This crate wraps OCHP messages in SOAP 1.1 envelopes:
//!
//! - [`SoapEnvelope`]: header entries and the single body entry
//! - [`UsernameToken`]: WS-Security credentials carried in the header
//! - [`SoapFault`]: transport-level errors in place of a response
//! - [`Request`]: dispatch of any request message by element name
//! - [`OchpCodec`]: bytes in, messages out, and back

pub mod codec;
pub mod config;
pub mod envelope;
pub mod fault;
pub mod request;
pub mod security;

pub use codec::{OchpCodec, ReceivedRequest};
pub use config::WriterConfig;
pub use envelope::{SoapEnvelope, SOAP_ENV_NS, SOAP_ENV_PREFIX};
pub use fault::SoapFault;
pub use request::{Request, RequestContext};
pub use security::UsernameToken;
