use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

use crate::{
    core::{
        NewsClient, NsError,
        client::{MAX_TOTAL_RESULTS, PAGE_SIZE, constants::EVERYTHING_PATH},
        net,
    },
    news::{
        model::{NewsArticle, NewsBatch, ProviderFailure},
        wire,
    },
};

const PUBLISHED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Number of page requests actually issued for a page budget.
pub(crate) const fn effective_pages(requested: u32) -> u32 {
    let ceiling = MAX_TOTAL_RESULTS / PAGE_SIZE;
    if requested < ceiling { requested } else { ceiling }
}

pub(crate) fn parse_published_at(raw: &str) -> Result<DateTime<Utc>, NsError> {
    NaiveDateTime::parse_from_str(raw, PUBLISHED_AT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|source| NsError::Date {
            value: raw.to_string(),
            source,
        })
}

pub(super) async fn fetch_news(
    client: &NewsClient,
    query: &str,
    days: u32,
    max_pages: u32,
    now: DateTime<Utc>,
) -> Result<NewsBatch, NsError> {
    let cutoff = TimeDelta::try_days(i64::from(days))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC);
    let pages = effective_pages(max_pages);
    let url = client.base_news().join(EVERYTHING_PATH)?;

    let mut batch = NewsBatch::default();

    for page in 1..=pages {
        let mut page_url = url.clone();
        page_url
            .query_pairs_mut()
            .append_pair("q", query)
            .append_pair("sortBy", "publishedAt")
            .append_pair("language", "en")
            .append_pair("apiKey", client.api_key())
            .append_pair("pageSize", &PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());

        let resp = client.http().get(page_url).send().await?;
        batch.pages_fetched += 1;

        // The provider reports failures in the body, so it is decoded whatever the HTTP status.
        let http_status = resp.status().as_u16();
        let body = net::get_text(resp, "everything", query).await?;
        let envelope: wire::EverythingEnvelope =
            serde_json::from_str(&body).map_err(NsError::Json)?;

        if envelope.status.as_deref() != Some("ok") {
            let failure = ProviderFailure {
                page,
                http_status,
                status: envelope.status,
                code: envelope.code,
                message: envelope.message,
            };
            tracing::warn!(%failure, kept = batch.articles.len(), "stopping pagination");
            batch.failure = Some(failure);
            break;
        }

        let raw = envelope.articles.unwrap_or_default();
        let received = raw.len();
        let before = batch.articles.len();
        for item in raw {
            let published_at = parse_published_at(&item.published_at)?;
            if published_at < cutoff {
                continue;
            }
            batch.articles.push(NewsArticle {
                title: item.title.unwrap_or_default(),
                source: item.source.and_then(|s| s.name).unwrap_or_default(),
                published_at,
                url: item.url.unwrap_or_default(),
                description: item.description,
            });
        }

        tracing::debug!(
            page,
            received,
            kept = batch.articles.len() - before,
            %cutoff,
            "page processed"
        );
    }

    Ok(batch)
}
