//! # Helper utilities

use std::marker::PhantomData;

use axum::{body::Bytes, http::header::CONTENT_TYPE, response::IntoResponse};
use serde::Serialize;

/// # Pre-serialized JSON response
///
/// A response body serialized once from a value that does not change for the life of the process,
/// such as the configuration read from an [`EnvSnapshot`][crate::env::EnvSnapshot]. Every
/// response built from it carries the same bytes.
///
/// [`PreSerializedJson`] is cheaply cloneable; cloning only bumps the reference count of the
/// underlying buffer.
#[derive(Debug, Clone)]
pub struct PreSerializedJson<T: ?Sized + Serialize> {
    json_bytes: Bytes,
    type_marker: PhantomData<T>,
}

impl<T: ?Sized + Serialize> PreSerializedJson<T> {
    pub fn new(value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            json_bytes: Bytes::from_owner(serde_json::to_vec(value)?),
            type_marker: PhantomData,
        })
    }
}

impl<T: ?Sized + Serialize> IntoResponse for PreSerializedJson<T> {
    fn into_response(self) -> axum::response::Response {
        ([(CONTENT_TYPE, "application/json")], self.json_bytes).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use axum::{body::to_bytes, response::IntoResponse};

    use super::PreSerializedJson;

    #[tokio::test]
    async fn test_response_replays_serialized_bytes() {
        let value = BTreeMap::from([("a", Some(1)), ("b", None)]);
        let json = PreSerializedJson::new(&value).unwrap();

        for _ in 0..2 {
            let response = json.clone().into_response();
            assert_eq!(response.headers()["content-type"], "application/json");
            let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            assert_eq!(body, r#"{"a":1,"b":null}"#);
        }
    }
}
