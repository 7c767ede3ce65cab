use dioxus_logger::tracing;
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{config::Config, error::backend::BackendError, model::api::ErrorDto};

/// Thin client over the backend's PostgREST interface.
///
/// Cloning is cheap, the underlying `reqwest::Client` is reference counted.
#[derive(Clone, Debug)]
pub struct PostgrestClient {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
}

impl PostgrestClient {
    /// Creates a new instance of [`PostgrestClient`]
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            rest_url: format!("{}/rest/v1", config.backend_url),
            anon_key: config.anon_key.clone(),
        }
    }

    /// Selects rows from a table.
    ///
    /// # Arguments
    /// - `table` - Table name
    /// - `columns` - PostgREST `select` expression, may embed joins
    /// - `params` - Additional query parameters (ordering, pagination, filters)
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        params: &[(String, String)],
    ) -> Result<Vec<T>, BackendError> {
        tracing::debug!("GET {} select={} params={:?}", table, columns, params);

        let response = self
            .request(Method::GET, table)
            .query(&[("select", columns)])
            .query(params)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Inserts a single row and returns its stored representation.
    pub async fn insert<B, T>(&self, table: &str, columns: &str, row: &B) -> Result<T, BackendError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!("POST {}", table);

        let response = self
            .request(Method::POST, table)
            .query(&[("select", columns)])
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;

        let rows: Vec<T> = Self::parse(response).await?;

        rows.into_iter()
            .next()
            .ok_or_else(|| BackendError::EmptyResponse(format!("insert into {}", table)))
    }

    /// Updates the row with the given ID.
    ///
    /// Returns `Ok(None)` when no row has that ID.
    pub async fn update<B, T>(
        &self,
        table: &str,
        columns: &str,
        id: i64,
        row: &B,
    ) -> Result<Option<T>, BackendError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        tracing::debug!("PATCH {} id={}", table, id);

        let response = self
            .request(Method::PATCH, table)
            .query(&[("select", columns)])
            .query(&[id_filter(id)])
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;

        let rows: Vec<T> = Self::parse(response).await?;

        Ok(rows.into_iter().next())
    }

    /// Deletes the row with the given ID.
    ///
    /// Returns OK regardless of the row existing.
    pub async fn delete(&self, table: &str, id: i64) -> Result<(), BackendError> {
        tracing::debug!("DELETE {} id={}", table, id);

        let response = self
            .request(Method::DELETE, table)
            .query(&[id_filter(id)])
            .send()
            .await?;

        Self::check(response).await?;

        Ok(())
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}/{}", self.rest_url, table))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        let response = Self::check(response).await?;
        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn check(response: Response) -> Result<Response, BackendError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        let message = match serde_json::from_str::<ErrorDto>(&body) {
            Ok(error_dto) => error_dto.message,
            Err(_) => body,
        };

        Err(BackendError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// PostgREST filter selecting a single row by primary key.
pub(crate) fn id_filter(id: i64) -> (String, String) {
    ("id".to_string(), format!("eq.{}", id))
}
