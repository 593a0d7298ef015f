//! Invoke a public calculator SOAP service through the operation registry.
//!
//! Run with:
//! ```sh
//! RUST_LOG=debug cargo run --example invoke_operation
//! ```

use serde_json::json;
use soapclient::{OperationRegistry, SoapClient, SoapOperation, SoapVersion};
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Operation parameters as a WSDL-interpreting collaborator would
    // supply them.
    let mut registry = OperationRegistry::new(SoapClient::new());
    registry.register(SoapOperation {
        name: "Add".to_string(),
        action: "http://tempuri.org/Add".to_string(),
        description: "Adds two integers".to_string(),
        target_namespace: Some("http://tempuri.org/".to_string()),
        endpoint: Url::parse("http://www.dneonline.com/calculator.asmx")?,
    });

    let response = registry
        .invoke(
            "Add",
            SoapVersion::Soap11,
            &json!({"Add": {"intA": "2", "intB": "3"}}),
            None,
        )
        .await?;

    println!("HTTP {}", response.status);
    match &response.document {
        Ok(doc) => println!("{}", serde_json::to_string_pretty(doc)?),
        Err(err) => println!("body was not transcodable ({err}):\n{}", response.raw_body),
    }

    Ok(())
}
