//! REST client for a Firebase Realtime Database style expense endpoint.
//!
//! Wire shape:
//! - `POST   {base}/expenses.json`      -> `{"name": "<id>"}`
//! - `PUT    {base}/expenses/{id}.json`
//! - `DELETE {base}/expenses/{id}.json`
//! - `GET    {base}/expenses.json`      -> `null` or `{ "<id>": {record}, ... }`

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use shared::{CreateExpenseResponse, Expense, ExpenseData, ExpenseId};
use tracing::{debug, info};

use super::{BackendError, ExpenseBackend};
use crate::config::BackendConfig;

/// HTTP implementation of `ExpenseBackend`
#[derive(Clone)]
pub struct HttpExpenseBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpExpenseBackend {
    /// Build a client for the configured base URL and request timeout
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/expenses.json", self.base_url)
    }

    fn record_url(&self, id: &ExpenseId) -> String {
        format!("{}/expenses/{}.json", self.base_url, id)
    }

    async fn check_status(response: Response) -> Result<Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(BackendError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let response = Self::check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ExpenseBackend for HttpExpenseBackend {
    async fn store_expense(&self, data: &ExpenseData) -> Result<ExpenseId, BackendError> {
        let url = self.collection_url();
        debug!("POST {}", url);

        let response = self.client.post(&url).json(data).send().await?;
        let created: CreateExpenseResponse = Self::parse_json(response).await?;

        info!("💾 Stored expense {}", created.name);
        Ok(ExpenseId::new(created.name))
    }

    async fn update_expense(&self, id: &ExpenseId, data: &ExpenseData) -> Result<(), BackendError> {
        let url = self.record_url(id);
        debug!("PUT {}", url);

        let response = self.client.put(&url).json(data).send().await?;
        Self::check_status(response).await?;

        info!("✏️ Updated expense {}", id);
        Ok(())
    }

    async fn delete_expense(&self, id: &ExpenseId) -> Result<(), BackendError> {
        let url = self.record_url(id);
        debug!("DELETE {}", url);

        let response = self.client.delete(&url).send().await?;
        Self::check_status(response).await?;

        info!("🗑️ Deleted expense {}", id);
        Ok(())
    }

    async fn fetch_expenses(&self) -> Result<Vec<Expense>, BackendError> {
        let url = self.collection_url();
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        // An empty collection comes back as `null`
        let records: Option<BTreeMap<String, ExpenseData>> = Self::parse_json(response).await?;

        let expenses: Vec<Expense> = records
            .unwrap_or_default()
            .into_iter()
            .map(|(id, data)| Expense::from_data(ExpenseId::new(id), data))
            .collect();

        info!("📊 Fetched {} expenses", expenses.len());
        Ok(expenses)
    }
}
