//! Service operation registry
//!
//! Service descriptions are interpreted elsewhere; this registry only
//! consumes the resulting operation tuples (name, action, target
//! namespace, endpoint) and turns them into calls. Built once at startup,
//! read-only afterwards.

use serde_json::Value;
use std::collections::HashMap;
use url::Url;

use crate::client::SoapClient;
use crate::error::{Error, Result};
use crate::response::SoapResponse;
use crate::version::SoapVersion;

/// One invocable service operation, as supplied by a WSDL-interpreting
/// collaborator
#[derive(Debug, Clone)]
pub struct SoapOperation {
    /// Operation name, the registry key
    pub name: String,

    /// Action identifier sent with the request
    pub action: String,

    /// Human-readable description
    pub description: String,

    /// Target namespace applied to the body root element, if any
    pub target_namespace: Option<String>,

    /// Service control endpoint
    pub endpoint: Url,
}

/// Registry mapping operation names to their fixed call parameters
#[derive(Debug, Clone, Default)]
pub struct OperationRegistry {
    client: SoapClient,
    operations: HashMap<String, SoapOperation>,
}

impl OperationRegistry {
    /// Create an empty registry dispatching through `client`
    pub fn new(client: SoapClient) -> Self {
        Self {
            client,
            operations: HashMap::new(),
        }
    }

    /// Register an operation under its name, replacing any previous entry
    pub fn register(&mut self, operation: SoapOperation) {
        self.operations.insert(operation.name.clone(), operation);
    }

    /// Look up an operation by name
    pub fn get(&self, name: &str) -> Option<&SoapOperation> {
        self.operations.get(name)
    }

    /// Iterate over the registered operations
    pub fn operations(&self) -> impl Iterator<Item = &SoapOperation> {
        self.operations.values()
    }

    /// Invoke a registered operation with JSON documents.
    ///
    /// The body (and optional header) document is transcoded to XML, the
    /// operation's target namespace is applied to the body root, and the
    /// call is dispatched to the operation's endpoint with its action.
    /// Transcoding failures are fatal here: without a body there is
    /// nothing to send.
    pub async fn invoke(
        &self,
        name: &str,
        version: SoapVersion,
        body: &Value,
        header: Option<&Value>,
    ) -> Result<SoapResponse> {
        let operation = self
            .operations
            .get(name)
            .ok_or_else(|| Error::UnknownOperation(name.to_string()))?;

        let mut body_element = soapdoc::document_to_xml(body)?;
        let header_element = header.map(soapdoc::document_to_xml).transpose()?;

        if let Some(ns) = operation
            .target_namespace
            .as_deref()
            .filter(|ns| !ns.trim().is_empty())
        {
            body_element = soapdoc::with_target_namespace(&body_element, ns);
        }

        self.client
            .send(
                &operation.endpoint,
                version,
                &body_element,
                header_element.as_ref(),
                &operation.action,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ping_operation() -> SoapOperation {
        SoapOperation {
            name: "Ping".to_string(),
            action: "urn:Ping".to_string(),
            description: "Liveness check".to_string(),
            target_namespace: Some("http://example.com/ns".to_string()),
            endpoint: Url::parse("http://localhost:9/soap").unwrap(),
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = OperationRegistry::new(SoapClient::new());
        registry.register(ping_operation());

        let operation = registry.get("Ping").unwrap();
        assert_eq!(operation.action, "urn:Ping");
        assert!(registry.get("Pong").is_none());
        assert_eq!(registry.operations().count(), 1);
    }

    #[tokio::test]
    async fn test_invoke_unknown_operation() {
        let registry = OperationRegistry::new(SoapClient::new());
        let err = registry
            .invoke("Missing", SoapVersion::Soap11, &json!({"Ping": null}), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownOperation(name) if name == "Missing"));
    }

    #[tokio::test]
    async fn test_invoke_rejects_untranscodable_body() {
        let mut registry = OperationRegistry::new(SoapClient::new());
        registry.register(ping_operation());

        // Two top-level keys cannot name a single root element; this must
        // fail before any network activity.
        let err = registry
            .invoke("Ping", SoapVersion::Soap11, &json!({"A": 1, "B": 2}), None)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Transformation(_)));
    }
}
