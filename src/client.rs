//! The client facade: one method per remote operation.

use crate::auth::ApiKeys;
use crate::config::ClientConfig;
use crate::endpoint::{self, Endpoint};
use crate::error::Error;
use crate::response;
use crate::transport::{ApiRequest, HttpTransport, RequestBody, Transport};
use crate::validation;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Handle to a FacetDB database.
///
/// Every method is a single request/response round trip: validation (where
/// the operation has any), key resolution, transport, decode. Nothing is
/// retried; a validation or auth failure never reaches the network. The
/// client holds no per-call state and can be shared across tasks.
#[derive(Clone)]
pub struct Client {
    keys: ApiKeys,
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client over HTTPS with the given credentials and configuration.
    pub fn new(keys: ApiKeys, config: ClientConfig) -> Result<Self, Error> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Client::with_transport(keys, config, transport))
    }

    /// Client over a caller-supplied transport. This is the seam integration
    /// tests use to substitute a mock for the network.
    pub fn with_transport(
        keys: ApiKeys,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Client {
            keys,
            base_url: config.base_url,
            transport,
        }
    }

    async fn call(
        &self,
        endpoint: &Endpoint,
        suffix: &str,
        body: RequestBody,
    ) -> Result<Map<String, Value>, Error> {
        let key = self.keys.resolve(endpoint.tier)?;
        let url = format!("{}{}{}", self.base_url, endpoint.path, suffix);
        let raw = self
            .transport
            .execute(ApiRequest {
                method: endpoint.method,
                url,
                key: key.to_string(),
                body,
            })
            .await?;
        response::decode(raw)
    }

    async fn call_json(
        &self,
        endpoint: &Endpoint,
        payload: &Value,
    ) -> Result<Map<String, Value>, Error> {
        self.call(endpoint, "", RequestBody::Json(payload.clone()))
            .await
    }

    async fn call_empty(&self, endpoint: &Endpoint, suffix: &str) -> Result<Map<String, Value>, Error> {
        self.call(endpoint, suffix, RequestBody::Json(Value::Null))
            .await
    }

    /// Information about the database this key pair is bound to.
    pub async fn get_database(&self) -> Result<Map<String, Value>, Error> {
        self.call_empty(&endpoint::GET_DATABASE, "").await
    }

    /// All columns defined in the database.
    pub async fn get_columns(&self) -> Result<Map<String, Value>, Error> {
        self.call_empty(&endpoint::GET_COLUMNS, "").await
    }

    /// Create a column from a definition object, or several from an array.
    /// See [`crate::ColumnDef`] for typed construction.
    pub async fn create_column(&self, definition: &Value) -> Result<Map<String, Value>, Error> {
        validation::validate_column(definition)?;
        self.call_json(&endpoint::CREATE_COLUMN, definition).await
    }

    /// Insert entities and their column values.
    pub async fn insert(&self, data: &Value) -> Result<Map<String, Value>, Error> {
        self.call_json(&endpoint::INSERT_DATA, data).await
    }

    /// Count entities matching a query (or a list of up to 10 named queries).
    pub async fn count_entity(&self, query: &Value) -> Result<Map<String, Value>, Error> {
        validation::validate_count_query(query)?;
        self.call_json(&endpoint::QUERY_COUNT_ENTITY, query).await
    }

    /// Total entity count, over the whole database or the given dimensions.
    pub async fn count_entity_total(
        &self,
        dimensions: Option<&[String]>,
    ) -> Result<Map<String, Value>, Error> {
        let payload = match dimensions {
            Some(dimensions) => json!({ "dimensions": dimensions }),
            None => json!({}),
        };
        self.call_json(&endpoint::QUERY_COUNT_ENTITY_TOTAL, &payload)
            .await
    }

    /// Count events matching a query (or a list of up to 10 named queries).
    pub async fn count_event(&self, query: &Value) -> Result<Map<String, Value>, Error> {
        validation::validate_count_query(query)?;
        self.call_json(&endpoint::QUERY_COUNT_EVENT, query).await
    }

    /// Run an aggregation query.
    pub async fn aggregation(&self, query: &Value) -> Result<Map<String, Value>, Error> {
        self.call_json(&endpoint::QUERY_AGGREGATION, query).await
    }

    /// Extract stored column values for matching entities.
    pub async fn result(&self, query: &Value) -> Result<Map<String, Value>, Error> {
        validation::validate_data_extraction_query(query)?;
        self.call_json(&endpoint::QUERY_RESULT, query).await
    }

    /// Extract matching entities together with their relevance scores.
    pub async fn score(&self, query: &Value) -> Result<Map<String, Value>, Error> {
        validation::validate_data_extraction_query(query)?;
        self.call_json(&endpoint::QUERY_SCORE, query).await
    }

    /// Most frequent values per column, up to 5 named queries of up to
    /// 6 columns each.
    pub async fn top_values(&self, query: &Value) -> Result<Map<String, Value>, Error> {
        validation::validate_top_values_query(query)?;
        self.call_json(&endpoint::QUERY_TOP_VALUES, query).await
    }

    /// Which of the given entity ids exist, optionally within one dimension.
    pub async fn exists_entity(
        &self,
        ids: &[String],
        dimension: Option<&str>,
    ) -> Result<Map<String, Value>, Error> {
        let mut payload = json!({ "ids": ids });
        if let Some(dimension) = dimension {
            payload["dimension"] = Value::String(dimension.to_string());
        }
        self.call_json(&endpoint::QUERY_EXISTS_ENTITY, &payload)
            .await
    }

    /// All saved queries in the database.
    pub async fn get_saved_queries(&self) -> Result<Map<String, Value>, Error> {
        self.call_empty(&endpoint::GET_SAVED_QUERIES, "").await
    }

    /// Execute a saved query by name.
    pub async fn get_saved_query(&self, name: &str) -> Result<Map<String, Value>, Error> {
        self.call_empty(&endpoint::GET_SAVED_QUERY, name).await
    }

    /// Persist a query definition server-side under the name in its payload.
    pub async fn create_saved_query(&self, query: &Value) -> Result<Map<String, Value>, Error> {
        validation::validate_saved_query(query)?;
        self.call_json(&endpoint::CREATE_SAVED_QUERY, query).await
    }

    /// Replace a saved query definition by name.
    pub async fn update_saved_query(
        &self,
        name: &str,
        query: &Value,
    ) -> Result<Map<String, Value>, Error> {
        self.call(
            &endpoint::UPDATE_SAVED_QUERY,
            name,
            RequestBody::Json(query.clone()),
        )
        .await
    }

    /// Delete a saved query by name.
    pub async fn delete_saved_query(&self, name: &str) -> Result<Map<String, Value>, Error> {
        self.call_empty(&endpoint::DELETE_SAVED_QUERY, name).await
    }

    /// Run a SQL statement, passed through verbatim as `application/sql`.
    pub async fn sql(&self, statement: &str) -> Result<Map<String, Value>, Error> {
        self.call(
            &endpoint::QUERY_SQL,
            "",
            RequestBody::Sql(statement.to_string()),
        )
        .await
    }
}
