/// Read the response body as text, logging its size and HTTP status.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    endpoint: &str,
    query: &str,
) -> Result<String, reqwest::Error> {
    let status = resp.status().as_u16();
    let text = resp.text().await?;
    tracing::trace!(endpoint, query, status, bytes = text.len(), "response body received");
    Ok(text)
}
