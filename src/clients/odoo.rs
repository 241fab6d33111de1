use crate::config::SyncConfig;
use crate::domain::model::Lead;
use crate::domain::ports::LeadSource;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const LEAD_MODEL: &str = "crm.lead";
const LEAD_FIELDS: [&str; 5] = ["id", "name", "email_from", "phone", "probability"];

/// JSON-RPC transport for the backend. One client per run; the session
/// consists only of the uid returned by `authenticate`, passed back on
/// every read.
pub struct OdooRpcClient {
    client: Client,
    endpoint: String,
    db: String,
    username: String,
    password: String,
    fetch_limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcFaultBody>,
}

#[derive(Debug, Deserialize)]
struct RpcFaultBody {
    code: i64,
    message: String,
}

impl OdooRpcClient {
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/jsonrpc", config.odoo_url.trim_end_matches('/')),
            db: config.odoo_db.clone(),
            username: config.odoo_username.clone(),
            password: config.odoo_password.clone(),
            fetch_limit: config.fetch_limit,
        })
    }

    async fn call(
        &self,
        service: &str,
        method: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value> {
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "method": "call",
            "params": {
                "service": service,
                "method": method,
                "args": args,
            },
            "id": 1,
        });

        tracing::debug!("RPC call {}.{} via {}", service, method, self.endpoint);
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(SyncError::UnexpectedResponse {
                endpoint: self.endpoint.clone(),
                message: format!("HTTP status {}", response.status()),
            });
        }

        let envelope: RpcEnvelope = response.json().await?;
        if let Some(fault) = envelope.error {
            return Err(SyncError::RpcFault {
                code: fault.code,
                message: fault.message,
            });
        }

        Ok(envelope.result.unwrap_or(serde_json::Value::Null))
    }
}

#[async_trait]
impl LeadSource for OdooRpcClient {
    async fn authenticate(&self) -> Result<i64> {
        let result = self
            .call(
                "common",
                "authenticate",
                serde_json::json!([self.db, self.username, self.password, {}]),
            )
            .await?;

        // The backend answers `false` instead of a uid on bad credentials.
        result.as_i64().ok_or_else(|| SyncError::AuthenticationFailed {
            message: format!("backend returned {} instead of a user id", result),
        })
    }

    async fn fetch_closed_won(&self, uid: i64) -> Result<Vec<Lead>> {
        let mut options = serde_json::json!({ "fields": LEAD_FIELDS });
        if let Some(limit) = self.fetch_limit {
            options["limit"] = serde_json::json!(limit);
        }

        let result = self
            .call(
                "object",
                "execute_kw",
                serde_json::json!([
                    self.db,
                    uid,
                    self.password,
                    LEAD_MODEL,
                    "search_read",
                    [[["probability", "=", 100]]],
                    options,
                ]),
            )
            .await?;

        Ok(serde_json::from_value(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn test_config(base_url: String) -> SyncConfig {
        SyncConfig {
            odoo_url: base_url,
            odoo_db: "testdb".to_string(),
            odoo_username: "bot".to_string(),
            odoo_password: "secret".to_string(),
            crm_base_url: "http://unused.invalid".to_string(),
            crm_api_key: "unused".to_string(),
            fetch_limit: None,
            http_timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn test_authenticate_returns_uid() {
        let server = MockServer::start();
        let rpc_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/jsonrpc")
                .body_contains("\"authenticate\"")
                .body_contains("\"testdb\"");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": 2}));
        });

        let client = OdooRpcClient::new(&test_config(server.base_url())).unwrap();
        let uid = client.authenticate().await.unwrap();

        rpc_mock.assert();
        assert_eq!(uid, 2);
    }

    #[tokio::test]
    async fn test_authenticate_false_result_is_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/jsonrpc");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": false}));
        });

        let client = OdooRpcClient::new(&test_config(server.base_url())).unwrap();
        let err = client.authenticate().await.unwrap_err();

        assert!(matches!(err, SyncError::AuthenticationFailed { .. }));
    }

    #[tokio::test]
    async fn test_rpc_fault_is_surfaced() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/jsonrpc");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "error": {"code": 200, "message": "Odoo Server Error", "data": {}}
                }));
        });

        let client = OdooRpcClient::new(&test_config(server.base_url())).unwrap();
        let err = client.fetch_closed_won(2).await.unwrap_err();

        match err {
            SyncError::RpcFault { code, message } => {
                assert_eq!(code, 200);
                assert_eq!(message, "Odoo Server Error");
            }
            other => panic!("expected RpcFault, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_closed_won_sends_probability_filter() {
        let server = MockServer::start();
        let rpc_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/jsonrpc")
                .body_contains("\"execute_kw\"")
                .body_contains("\"crm.lead\"")
                .body_contains("\"search_read\"")
                .body_contains("[[[\"probability\",\"=\",100]]]")
                .body_contains("\"email_from\"");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": 1,
                    "result": [
                        {"id": 1, "name": "Acme", "email_from": "a@x.com", "phone": "555", "probability": 100.0},
                        {"id": 3, "name": "Gamma", "email_from": false, "phone": false, "probability": 100.0}
                    ]
                }));
        });

        let client = OdooRpcClient::new(&test_config(server.base_url())).unwrap();
        let leads = client.fetch_closed_won(2).await.unwrap();

        rpc_mock.assert();
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].email_from.as_deref(), Some("a@x.com"));
        assert_eq!(leads[1].email_from, None);
    }

    #[tokio::test]
    async fn test_fetch_closed_won_passes_limit_when_configured() {
        let server = MockServer::start();
        let rpc_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/jsonrpc")
                .body_contains("\"limit\":50");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": []}));
        });

        let mut config = test_config(server.base_url());
        config.fetch_limit = Some(50);
        let client = OdooRpcClient::new(&config).unwrap();
        let leads = client.fetch_closed_won(2).await.unwrap();

        rpc_mock.assert();
        assert!(leads.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_status_is_an_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/jsonrpc");
            then.status(502);
        });

        let client = OdooRpcClient::new(&test_config(server.base_url())).unwrap();
        let err = client.authenticate().await.unwrap_err();

        assert!(matches!(err, SyncError::UnexpectedResponse { .. }));
    }
}
