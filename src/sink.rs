//! Delivery of a lead to the backend.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use crate::{
    config::parse_origin,
    error::{ConfigError, SubmitError},
    input::LeadPayload,
};

/// Path of the lead ingestion endpoint, relative to the API origin.
pub const LEADS_PATH: &str = "/api/leads";

/// Something that accepts a lead.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single UI thread.
#[async_trait(?Send)]
pub trait LeadSink {
    async fn submit_lead(&self, payload: &LeadPayload) -> Result<(), SubmitError>;
}

#[async_trait(?Send)]
impl<S: LeadSink + ?Sized> LeadSink for &S {
    async fn submit_lead(&self, payload: &LeadPayload) -> Result<(), SubmitError> {
        (**self).submit_lead(payload).await
    }
}

/// POSTs leads as JSON to `{api_base}/api/leads`.
///
/// No timeout is set; the call waits as long as the transport does.
#[derive(Debug, Clone)]
pub struct HttpLeadSink {
    client: Client,
    endpoint: Url,
}

impl HttpLeadSink {
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        Self::with_client(Client::new(), api_base)
    }

    pub fn with_client(client: Client, api_base: &str) -> Result<Self, ConfigError> {
        let mut endpoint = parse_origin(api_base)?;
        endpoint.set_query(None);
        endpoint.set_fragment(None);
        if let Ok(mut segments) = endpoint.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(LEADS_PATH.split('/').filter(|s| !s.is_empty()));
        }

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl LeadSink for HttpLeadSink {
    async fn submit_lead(&self, payload: &LeadPayload) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status {
                status: status.as_u16(),
            });
        }

        // The body carries the stored lead; the status alone decides.
        match response.text().await {
            Ok(body) => debug!("lead accepted by {} ({} bytes)", self.endpoint, body.len()),
            Err(err) => debug!("lead accepted by {}, body unreadable: {err}", self.endpoint),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_joined_under_the_origin() {
        let sink = HttpLeadSink::new("https://centralvista.example").unwrap();
        assert_eq!(
            sink.endpoint().as_str(),
            "https://centralvista.example/api/leads"
        );

        let sink = HttpLeadSink::new("http://localhost:8001/").unwrap();
        assert_eq!(sink.endpoint().as_str(), "http://localhost:8001/api/leads");
    }

    #[test]
    fn endpoint_keeps_a_path_prefix() {
        let sink = HttpLeadSink::new("https://example.com/landing").unwrap();
        assert_eq!(
            sink.endpoint().as_str(),
            "https://example.com/landing/api/leads"
        );
    }

    #[test]
    fn endpoint_drops_query_and_fragment() {
        let sink = HttpLeadSink::new("https://x.example/?a=b").unwrap();
        assert_eq!(sink.endpoint().as_str(), "https://x.example/api/leads");

        let sink = HttpLeadSink::new("https://x.example/landing/?utm=ad#contact").unwrap();
        assert_eq!(
            sink.endpoint().as_str(),
            "https://x.example/landing/api/leads"
        );
    }

    #[test]
    fn relative_base_is_rejected() {
        assert!(matches!(
            HttpLeadSink::new("api"),
            Err(ConfigError::InvalidApiBase { .. })
        ));
    }
}
