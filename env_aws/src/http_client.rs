use anyhow::{anyhow, Context, Result};
use log::info;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// POST `message` JSON-encoded (a quoted string) to a deployed API endpoint.
pub async fn http_post_message(url: &str, message: &str) -> Result<HttpResponse> {
    post_message(&reqwest::Client::new(), url, message).await
}

async fn post_message(
    client: &reqwest::Client,
    url: &str,
    message: &str,
) -> Result<HttpResponse> {
    let payload = serde_json::to_string(message)?;
    info!("HTTP POST {}", url);
    info!("Payload: {}", payload);

    let response = client
        .post(url)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .context(format!("Failed to make request to {}", url))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        return Err(anyhow!(
            "API request failed with status {}: {}",
            status,
            body
        ));
    }

    Ok(HttpResponse {
        status: status.as_u16(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer a single request with `response` on a local port, returning its URL.
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await.unwrap();
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/dev/entry", address)
    }

    async fn post(url: &str) -> Result<HttpResponse> {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        post_message(&client, url, "hello").await
    }

    #[tokio::test]
    async fn test_post_message_returns_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 11\r\nConnection: close\r\n\r\n{\"ok\":true}",
        )
        .await;

        let response = post(&url).await.unwrap();

        assert_eq!(
            response,
            HttpResponse {
                status: 200,
                body: "{\"ok\":true}".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_truncated_body_is_an_error() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\n{\"ok\"",
        )
        .await;

        let result = post(&url).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Failed to read response body"
        );
    }

    #[tokio::test]
    async fn test_error_status_is_reported_with_body() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\nConnection: close\r\n\r\nboom",
        )
        .await;

        let result = post(&url).await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "API request failed with status 500 Internal Server Error: boom"
        );
    }
}
