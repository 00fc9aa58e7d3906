use std::time::Duration;

use reqwest::{
    header::{
        ACCEPT,
        USER_AGENT,
    },
    Client,
    Response,
};

use crate::core::TangoError;

pub fn http_client() -> Result<Client, TangoError> {
    Client::builder()
        .timeout(Duration::from_secs(120))
        .build()
        .map_err(|e| TangoError::Custom(format!("HTTP client build failed: {e}")))
}

/// Single GET, no retries. A non-success status is an error.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, TangoError> {
    let resp = client
        .get(url)
        .header(USER_AGENT, concat!("tango/", env!("CARGO_PKG_VERSION"), " (+reqwest)"))
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    ensure_success(&resp)?;

    Ok(resp.text().await?)
}

fn ensure_success(resp: &Response) -> Result<(), TangoError> {
    if !resp.status().is_success() {
        return Err(TangoError::HttpStatus {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        });
    }
    Ok(())
}
