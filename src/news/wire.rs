use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct EverythingEnvelope {
    pub(crate) status: Option<String>,
    #[serde(default)]
    pub(crate) articles: Option<Vec<WireArticle>>,
    // Present only on error responses.
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct WireArticle {
    pub(crate) title: Option<String>,
    pub(crate) source: Option<WireSource>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: String,
    pub(crate) url: Option<String>,
    pub(crate) description: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct WireSource {
    pub(crate) name: Option<String>,
}
