//! Async SOAP request executor

use reqwest::Client;
use std::collections::HashMap;
use tracing::{debug, warn};
use url::Url;
use xmltree::Element;

use crate::envelope::build_envelope;
use crate::error::Result;
use crate::response::SoapResponse;
use crate::version::SoapVersion;

/// SOAP request executor over a shared `reqwest` connection pool.
///
/// The client is stateless; each [`send`](SoapClient::send) call is an
/// independent network round-trip and many calls can be in flight
/// concurrently. Cancellation is cooperative: dropping the future returned
/// by `send` aborts the in-flight HTTP call, and no partial response is
/// produced. Timeouts belong to the injected [`reqwest::Client`]
/// configuration and surface as [`Error::Http`](crate::Error::Http).
#[derive(Debug, Clone, Default)]
pub struct SoapClient {
    client: Client,
}

impl SoapClient {
    /// Create a client with default transport settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Use a caller-configured `reqwest::Client`
    ///
    /// Useful for sharing HTTP connection pools or setting timeouts and
    /// proxy settings.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Send a SOAP request and map the HTTP answer into a
    /// [`SoapResponse`].
    ///
    /// The body (and optional header) element is wrapped into an envelope
    /// for `version`, serialized single-line, and POSTed to `endpoint`
    /// with the version-correct content-type and action transport. Any
    /// HTTP status code yields `Ok`: a SOAP fault on a 500 is still an
    /// answer. Only transport failures return `Err`.
    ///
    /// The response body is read as text, trimmed, and transcoded
    /// best-effort into a document; a transcoding failure is captured in
    /// [`SoapResponse::document`] without failing the call.
    pub async fn send(
        &self,
        endpoint: &Url,
        version: SoapVersion,
        body: &Element,
        header: Option<&Element>,
        action: &str,
    ) -> Result<SoapResponse> {
        let envelope = build_envelope(version, body, header, None, None);
        let payload = soapdoc::element_to_string(&envelope)?;

        debug!(%endpoint, %version, action, "sending SOAP request");

        let mut request = self
            .client
            .post(endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, version.content_type(action))
            .body(payload);
        if let Some(soap_action) = version.soap_action_header(action) {
            request = request.header("SOAPAction", soap_action);
        }

        let response = request.send().await?;

        let status = response.status().as_u16();
        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in response.headers() {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        let raw_body = response.text().await?.trim().to_string();

        let document = soapdoc::document_from_str(&raw_body);
        if let Err(err) = &document {
            warn!(status, error = %err, "response body could not be transcoded to a document");
        }

        debug!(status, bytes = raw_body.len(), "SOAP response received");

        Ok(SoapResponse {
            status,
            headers,
            raw_body,
            document,
        })
    }
}
