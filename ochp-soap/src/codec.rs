//! Encoding and decoding of OCHP messages in SOAP envelopes

use crate::config::WriterConfig;
use crate::envelope::SoapEnvelope;
use crate::fault::SoapFault;
use crate::request::{Request, RequestContext};
use crate::security::UsernameToken;
use bytes::{BufMut, Bytes, BytesMut};
use ochp_core::{OchpResult, ParseFailure};
use ochp_messages::OchpMessage;
use xmltree::Element;

/// A decoded request with everything the transport handed over
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedRequest {
    pub request: Request,
    pub context: RequestContext,
    pub credentials: Option<UsernameToken>,
}

/// SOAP codec for OCHP messages
///
/// Outgoing envelopes carry the configured credentials, if any. Incoming
/// faults are returned as [`ochp_core::OchpError::Fault`].
#[derive(Debug, Clone, Default)]
pub struct OchpCodec {
    config: WriterConfig,
    credentials: Option<UsernameToken>,
}

impl OchpCodec {
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: UsernameToken) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn credentials(&self) -> Option<&UsernameToken> {
        self.credentials.as_ref()
    }

    fn envelope(&self, body: Element) -> SoapEnvelope {
        let envelope = SoapEnvelope::new(body);
        match &self.credentials {
            Some(credentials) => envelope.with_credentials(credentials),
            None => envelope,
        }
    }

    /// Serialize a complete envelope
    pub fn write(&self, envelope: &SoapEnvelope) -> OchpResult<Bytes> {
        let mut writer = BytesMut::new().writer();
        envelope
            .to_element()
            .write_with_config(&mut writer, self.config.emitter_config())?;
        Ok(writer.into_inner().freeze())
    }

    pub fn encode<M: OchpMessage>(&self, message: &M) -> OchpResult<Bytes> {
        log::debug!("Encoding {}", M::ELEMENT);
        self.write(&self.envelope(message.to_xml()))
    }

    pub fn encode_request(&self, request: &Request) -> OchpResult<Bytes> {
        log::debug!("Encoding {}", request.element_name());
        self.write(&self.envelope(request.to_element()))
    }

    /// Faults never carry credentials
    pub fn encode_fault(&self, fault: &SoapFault) -> OchpResult<Bytes> {
        log::warn!("Encoding SOAP fault: {}", fault);
        self.write(&SoapEnvelope::fault(fault))
    }

    pub fn read(&self, data: &[u8]) -> OchpResult<SoapEnvelope> {
        SoapEnvelope::from_element(&Element::parse(data)?)
    }

    /// Decode a message, failing on faults and malformed content
    pub fn decode<M: OchpMessage>(&self, data: &[u8]) -> OchpResult<M> {
        log::debug!("Decoding {} ({} bytes)", M::ELEMENT, data.len());
        let body = self.read(data)?.into_body()?;
        M::try_parse(&body)
    }

    /// Decode a message, reporting failures instead of returning them
    pub fn parse<M: OchpMessage>(
        &self,
        data: &[u8],
        on_failure: Option<&mut dyn FnMut(ParseFailure)>,
    ) -> Option<M> {
        match self.decode(data) {
            Ok(message) => Some(message),
            Err(error) => {
                ParseFailure::from_text(&String::from_utf8_lossy(data), error).report(on_failure);
                None
            }
        }
    }

    /// Decode whichever request the envelope carries
    pub fn decode_request(&self, data: &[u8], context: RequestContext) -> OchpResult<ReceivedRequest> {
        let envelope = self.read(data)?;
        let credentials = envelope.credentials()?;
        let request = Request::from_element(&envelope.into_body()?)?;
        log::debug!(
            "Decoded {} (event tracking id {:?})",
            request.element_name(),
            context.event_tracking_id
        );
        Ok(ReceivedRequest {
            request,
            context,
            credentials,
        })
    }

    /// Decode a request or produce the fault to answer with
    pub fn receive(&self, data: &[u8], context: RequestContext) -> Result<ReceivedRequest, SoapFault> {
        self.decode_request(data, context)
            .map_err(|error| SoapFault::from_error(&error))
    }
}
