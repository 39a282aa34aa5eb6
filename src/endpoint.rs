//! Compiled-in operation descriptors: HTTP method, path and required tier.

use crate::auth::KeyTier;

pub const DATABASE: &str = "/database/";
pub const COLUMN: &str = "/column/";
pub const INSERT: &str = "/insert/";
pub const RESULT: &str = "/data_extraction/result/";
pub const SCORE: &str = "/data_extraction/score/";
pub const TOP_VALUES: &str = "/query/top_values/";
pub const EXISTS_ENTITY: &str = "/query/exists/entity/";
pub const COUNT_ENTITY: &str = "/query/count/entity/";
pub const COUNT_ENTITY_TOTAL: &str = "/query/count/entity/total/";
pub const COUNT_EVENT: &str = "/query/count/event/";
pub const AGGREGATION: &str = "/query/aggregation/";
pub const SAVED: &str = "/query/saved/";
pub const SQL: &str = "/sql/";

/// The only methods the API accepts. Anything else is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_http(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// One remote operation. Saved-query operations append the query name to
/// `path` at call time; everything else is fixed at compile time.
#[derive(Clone, Copy, Debug)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
    pub tier: KeyTier,
}

const fn endpoint(method: Method, path: &'static str, tier: KeyTier) -> Endpoint {
    Endpoint { method, path, tier }
}

pub const GET_DATABASE: Endpoint = endpoint(Method::Get, DATABASE, KeyTier::Admin);
pub const GET_COLUMNS: Endpoint = endpoint(Method::Get, COLUMN, KeyTier::Admin);
pub const GET_SAVED_QUERIES: Endpoint = endpoint(Method::Get, SAVED, KeyTier::Admin);
pub const GET_SAVED_QUERY: Endpoint = endpoint(Method::Get, SAVED, KeyTier::Read);
pub const CREATE_SAVED_QUERY: Endpoint = endpoint(Method::Post, SAVED, KeyTier::Admin);
pub const UPDATE_SAVED_QUERY: Endpoint = endpoint(Method::Put, SAVED, KeyTier::Admin);
pub const DELETE_SAVED_QUERY: Endpoint = endpoint(Method::Delete, SAVED, KeyTier::Admin);
pub const CREATE_COLUMN: Endpoint = endpoint(Method::Post, COLUMN, KeyTier::Write);
pub const INSERT_DATA: Endpoint = endpoint(Method::Post, INSERT, KeyTier::Write);
pub const QUERY_COUNT_ENTITY: Endpoint = endpoint(Method::Post, COUNT_ENTITY, KeyTier::Read);
pub const QUERY_COUNT_ENTITY_TOTAL: Endpoint =
    endpoint(Method::Post, COUNT_ENTITY_TOTAL, KeyTier::Read);
pub const QUERY_COUNT_EVENT: Endpoint = endpoint(Method::Post, COUNT_EVENT, KeyTier::Read);
pub const QUERY_AGGREGATION: Endpoint = endpoint(Method::Post, AGGREGATION, KeyTier::Read);
pub const QUERY_RESULT: Endpoint = endpoint(Method::Post, RESULT, KeyTier::Read);
pub const QUERY_SCORE: Endpoint = endpoint(Method::Post, SCORE, KeyTier::Read);
pub const QUERY_TOP_VALUES: Endpoint = endpoint(Method::Post, TOP_VALUES, KeyTier::Read);
pub const QUERY_EXISTS_ENTITY: Endpoint = endpoint(Method::Post, EXISTS_ENTITY, KeyTier::Read);
pub const QUERY_SQL: Endpoint = endpoint(Method::Post, SQL, KeyTier::Read);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_operations_require_write_tier() {
        assert_eq!(CREATE_COLUMN.tier, KeyTier::Write);
        assert_eq!(INSERT_DATA.tier, KeyTier::Write);
    }

    #[test]
    fn management_operations_require_admin_tier() {
        for ep in [
            GET_DATABASE,
            GET_COLUMNS,
            GET_SAVED_QUERIES,
            CREATE_SAVED_QUERY,
            UPDATE_SAVED_QUERY,
            DELETE_SAVED_QUERY,
        ] {
            assert_eq!(ep.tier, KeyTier::Admin);
        }
    }

    #[test]
    fn query_operations_require_read_tier() {
        for ep in [
            QUERY_COUNT_ENTITY,
            QUERY_COUNT_ENTITY_TOTAL,
            QUERY_COUNT_EVENT,
            QUERY_AGGREGATION,
            QUERY_RESULT,
            QUERY_SCORE,
            QUERY_TOP_VALUES,
            QUERY_EXISTS_ENTITY,
            QUERY_SQL,
            GET_SAVED_QUERY,
        ] {
            assert_eq!(ep.tier, KeyTier::Read);
        }
    }
}
