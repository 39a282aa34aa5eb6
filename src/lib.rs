//! FacetDB client: column management, data insertion and queries over the
//! FacetDB HTTPS API.
//!
//! ```no_run
//! use facetdb_client::{ApiKeys, Client, ClientConfig};
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), facetdb_client::Error> {
//! let client = Client::new(ApiKeys::master("my-key"), ClientConfig::from_env())?;
//! let result = client
//!     .count_entity(&json!({"users-born-in-1980": {"year": {"equals": 1980}}}))
//!     .await?;
//! println!("{:?}", result.get("result"));
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod column;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod response;
pub mod testing;
pub mod transport;
pub mod validation;

pub use auth::{ApiKeys, KeyTier};
pub use client::Client;
pub use column::{Cardinality, ColumnDef, ColumnType};
pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::Error;
pub use transport::{ApiRequest, HttpTransport, RawResponse, RequestBody, Transport};
