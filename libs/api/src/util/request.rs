use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{
    de::{DeserializeOwned, IgnoredAny},
    Deserialize, Deserializer,
};
use tracing::debug;

use crate::ApiError;

/// JSON body whose parse failures are reported as validation errors.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(task = "parse json body", error = %rejection);
                ApiError::ValidationError("Invalid request body".to_string())
            })?;

        Ok(Self(value))
    }
}

/// Query string whose parse failures are reported as validation errors.
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                debug!(task = "parse query", error = %rejection);
                ApiError::ValidationError(
                    "Invalid query parameters".to_string(),
                )
            })?;

        Ok(Self(value))
    }
}

/// Reads an optional text field, treating any non-string JSON value as absent
/// so the handler reports it as a missing field.
pub fn string_or_none<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::Str(value)) => Some(value),
        Some(Text::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod test {
    use rstest::rstest;
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "super::string_or_none")]
        text: Option<String>,
    }

    #[rstest]
    #[case(json!({ "text": "hello" }), Some("hello"))]
    #[case(json!({ "text": "" }), Some(""))]
    #[case(json!({ "text": 42 }), None)]
    #[case(json!({ "text": true }), None)]
    #[case(json!({ "text": ["hello"] }), None)]
    #[case(json!({ "text": { "nested": "hello" } }), None)]
    #[case(json!({ "text": null }), None)]
    #[case(json!({}), None)]
    fn keeps_only_string_values(
        #[case] body: Value,
        #[case] expected: Option<&str>,
    ) {
        let body: Body = serde_json::from_value(body).unwrap();

        assert_eq!(body.text.as_deref(), expected);
    }
}
