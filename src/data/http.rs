use crate::Result;
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Shared HTTP client with a crate User-Agent and a `DNT: 1` header on every
/// request. Building the client once avoids TLS and connection pool setup per
/// fetch.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    let mut headers = HeaderMap::new();
    headers.insert("DNT", HeaderValue::from_static("1"));
    Client::builder()
        .user_agent(concat!("netzplan/", env!("CARGO_PKG_VERSION")))
        .default_headers(headers)
        .build()
        .expect("failed to build reqwest client")
});

/// GETs `url` with `query` and decodes the JSON body. Non-success statuses
/// surface as network errors.
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str, query: &[(&str, String)]) -> Result<T> {
    let resp = HTTP_CLIENT
        .get(url)
        .query(query)
        .send()
        .await?
        .error_for_status()?;
    Ok(resp.json().await?)
}
