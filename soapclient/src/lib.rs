//! # soapclient - SOAP envelope construction and dispatch
//!
//! Wraps an XML body (and optional header) into a SOAP 1.1 or 1.2
//! envelope, POSTs it to a service endpoint with the version-correct
//! content-type and SOAPAction transport, and maps the HTTP answer into a
//! structured [`SoapResponse`].
//!
//! ## Architecture
//!
//! - [`SoapVersion`] : protocol constants (envelope namespace, action
//!   transport) for SOAP 1.1 and 1.2
//! - [`build_envelope`] : envelope construction around a body/header pair
//! - [`SoapClient`] : async HTTP executor over a shared connection pool
//! - [`SoapResponse`] : status, headers, raw body and best-effort document
//!   view of the answer
//! - [`OperationRegistry`] : service operations registered once at startup
//!   and invoked by name with JSON documents
//!
//! Any HTTP status code is a valid SOAP-level answer; only transport
//! failures abort a call. Success classification against an allow-list of
//! status codes is the caller's business rule
//! ([`SoapResponse::is_success`]).
//!
//! ## Example
//!
//! ```no_run
//! use serde_json::json;
//! use soapclient::{SoapClient, SoapVersion};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SoapClient::new();
//!     let body = soapdoc::document_to_xml(&json!({"GetQuote": {"Symbol": "ACME"}}))?;
//!     let endpoint = Url::parse("http://quotes.example.com/service")?;
//!
//!     let response = client
//!         .send(&endpoint, SoapVersion::Soap11, &body, None, "urn:GetQuote")
//!         .await?;
//!
//!     println!("HTTP {}", response.status);
//!     if let Ok(doc) = &response.document {
//!         println!("{doc}");
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod envelope;
mod error;
mod registry;
mod response;
mod version;

pub use client::SoapClient;
pub use envelope::build_envelope;
pub use error::{Error, Result};
pub use registry::{OperationRegistry, SoapOperation};
pub use response::SoapResponse;
pub use version::{SOAP_11_ENVELOPE_NS, SOAP_12_ENVELOPE_NS, SoapVersion};
