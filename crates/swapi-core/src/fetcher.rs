//! Single-resource and paginated fetching over any [`Fetch`] adapter.
//!
//! Pages are requested one at a time, in order, starting at page 1. A
//! listing stops when the server reports no `next` page or when the
//! caller's page limit is reached, whichever comes first. The total
//! `count` in the envelope is never consulted.

use futures_core::Stream;
use futures_util::{TryStreamExt, pin_mut};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};

use crate::Result;
use crate::entity::PagedResults;
use crate::traits::Fetch;
use crate::types::{ApiUrl, ResourceKind};

/// Fetch one record of `kind` by id.
#[instrument(skip(fetcher, api), fields(api = %api))]
pub async fn fetch_resource<T, F>(
    fetcher: &F,
    api: &ApiUrl,
    kind: ResourceKind,
    id: u32,
) -> Result<T>
where
    T: DeserializeOwned + Send + 'static,
    F: Fetch,
{
    let url = api.resource_url(kind, id);
    debug!(%url, "Fetching resource");
    fetcher.fetch(&url).await
}

/// Lazily fetch the page envelopes of a listing.
///
/// The stream yields at most `max_pages` envelopes and ends after the first
/// envelope without a `next` link. With `max_pages == 0` it ends without
/// issuing any request. An error ends the stream.
pub fn fetch_pages<'a, T, F>(
    fetcher: &'a F,
    api: &'a ApiUrl,
    kind: ResourceKind,
    max_pages: u32,
    search: Option<&'a str>,
) -> impl Stream<Item = Result<PagedResults<T>>> + Send + 'a
where
    T: DeserializeOwned + Send + 'static,
    F: Fetch,
{
    async_stream::try_stream! {
        for page in 1..=max_pages {
            let url = api.page_url(kind, page, search);
            debug!(%kind, page, max_pages, "Fetching page");

            let envelope: PagedResults<T> = fetcher.fetch(&url).await?;
            trace!(
                page,
                items = envelope.results.len(),
                count = envelope.count,
                has_next = envelope.has_next(),
                "Page received"
            );

            let last = !envelope.has_next();
            yield envelope;
            if last {
                break;
            }
        }
    }
}

/// Fetch a listing and flatten its pages into one vector.
///
/// Items keep page order, then within-page order. Any failed page fails the
/// whole call; items from earlier pages are dropped.
#[instrument(skip(fetcher, api), fields(api = %api))]
pub async fn collect_pages<T, F>(
    fetcher: &F,
    api: &ApiUrl,
    kind: ResourceKind,
    max_pages: u32,
    search: Option<&str>,
) -> Result<Vec<T>>
where
    T: DeserializeOwned + Send + 'static,
    F: Fetch,
{
    let pages = fetch_pages::<T, F>(fetcher, api, kind, max_pages, search);
    pin_mut!(pages);

    let mut items = Vec::new();
    let mut fetched = 0u32;
    while let Some(page) = pages.try_next().await? {
        fetched += 1;
        items.extend(page.results);
    }

    debug!(pages = fetched, items = items.len(), "Listing complete");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use futures_util::StreamExt;
    use serde_json::{Value, json};

    use crate::entity::Person;
    use crate::error::{DecodeError, Error, RemoteRejection};

    /// Serves canned pages keyed by page number and records every request.
    struct ScriptedFetcher {
        pages: HashMap<u32, Value>,
        fail_on: Option<u32>,
        requests: Mutex<Vec<String>>,
    }

    impl ScriptedFetcher {
        /// A server with `total` pages of two people each.
        fn with_pages(total: u32) -> Self {
            let pages = (1..=total)
                .map(|n| {
                    let next = (n < total)
                        .then(|| format!("https://swapi.dev/api/people/?page={}", n + 1));
                    let results: Vec<Value> = (0..2)
                        .map(|i| person_json(&format!("p{}-{}", n, i), n * 10 + i))
                        .collect();
                    let page = json!({
                        "count": total * 2,
                        "next": next,
                        "previous": null,
                        "results": results,
                    });
                    (n, page)
                })
                .collect();

            Self {
                pages,
                fail_on: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(mut self, page: u32) -> Self {
            self.fail_on = Some(page);
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    fn person_json(name: &str, id: u32) -> Value {
        json!({
            "name": name,
            "url": format!("https://swapi.dev/api/people/{}/", id),
        })
    }

    fn page_number(url: &str) -> u32 {
        let parsed = url::Url::parse(url).unwrap();
        parsed
            .query_pairs()
            .find(|(k, _)| k == "page")
            .map(|(_, v)| v.parse().unwrap())
            .unwrap_or(0)
    }

    #[async_trait]
    impl Fetch for ScriptedFetcher {
        async fn fetch<T>(&self, url: &str) -> Result<T>
        where
            T: DeserializeOwned + Send + 'static,
        {
            self.requests.lock().unwrap().push(url.to_string());

            let page = page_number(url);
            if self.fail_on == Some(page) {
                return Err(RemoteRejection::new(500, url, None).into());
            }

            let body = self
                .pages
                .get(&page)
                .cloned()
                .ok_or_else(|| RemoteRejection::new(404, url, Some("Not found".into())))?;

            serde_json::from_value(body).map_err(|e| DecodeError::new(url, e).into())
        }
    }

    fn api() -> ApiUrl {
        ApiUrl::new("https://swapi.dev").unwrap()
    }

    fn names(people: &[Person]) -> Vec<&str> {
        people.iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn zero_pages_issues_no_request() {
        let fetcher = ScriptedFetcher::with_pages(3);
        let people: Vec<Person> =
            collect_pages(&fetcher, &api(), ResourceKind::People, 0, None)
                .await
                .unwrap();

        assert!(people.is_empty());
        assert!(fetcher.requests().is_empty());
    }

    #[tokio::test]
    async fn single_page_server_is_fetched_once() {
        let fetcher = ScriptedFetcher::with_pages(1);
        let people: Vec<Person> =
            collect_pages(&fetcher, &api(), ResourceKind::People, u32::MAX, None)
                .await
                .unwrap();

        assert_eq!(names(&people), ["p1-0", "p1-1"]);
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[tokio::test]
    async fn page_limit_stops_before_last_page() {
        let fetcher = ScriptedFetcher::with_pages(3);
        let people: Vec<Person> =
            collect_pages(&fetcher, &api(), ResourceKind::People, 2, None)
                .await
                .unwrap();

        assert_eq!(names(&people), ["p1-0", "p1-1", "p2-0", "p2-1"]);
        assert_eq!(
            fetcher.requests(),
            [
                "https://swapi.dev/api/people/?page=1&search=",
                "https://swapi.dev/api/people/?page=2&search=",
            ]
        );
    }

    #[tokio::test]
    async fn missing_next_stops_before_limit() {
        let fetcher = ScriptedFetcher::with_pages(3);
        let people: Vec<Person> =
            collect_pages(&fetcher, &api(), ResourceKind::People, 10, None)
                .await
                .unwrap();

        assert_eq!(people.len(), 6);
        assert_eq!(fetcher.requests().len(), 3);
    }

    #[tokio::test]
    async fn failed_page_fails_whole_listing() {
        let fetcher = ScriptedFetcher::with_pages(3).failing_on(2);
        let result: Result<Vec<Person>> =
            collect_pages(&fetcher, &api(), ResourceKind::People, 3, None).await;

        let err = result.unwrap_err();
        assert!(matches!(err, Error::RemoteRejected(ref r) if r.status == 500));
        assert_eq!(fetcher.requests().len(), 2);
    }

    #[tokio::test]
    async fn stale_count_is_ignored() {
        let mut fetcher = ScriptedFetcher::with_pages(1);
        fetcher.pages.get_mut(&1).unwrap()["count"] = json!(500);

        let people: Vec<Person> =
            collect_pages(&fetcher, &api(), ResourceKind::People, 5, None)
                .await
                .unwrap();

        assert_eq!(people.len(), 2);
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[tokio::test]
    async fn search_term_is_embedded() {
        let fetcher = ScriptedFetcher::with_pages(1);
        let _: Vec<Person> =
            collect_pages(&fetcher, &api(), ResourceKind::People, 1, Some("sky walker"))
                .await
                .unwrap();

        assert_eq!(
            fetcher.requests(),
            ["https://swapi.dev/api/people/?page=1&search=sky+walker"]
        );
    }

    #[tokio::test]
    async fn page_stream_is_lazy() {
        let fetcher = ScriptedFetcher::with_pages(3);
        let api = api();
        let pages = fetch_pages::<Person, _>(&fetcher, &api, ResourceKind::People, 3, None);
        pin_mut!(pages);

        let first = pages.next().await.unwrap().unwrap();
        assert_eq!(first.results.len(), 2);
        assert!(first.has_next());
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[tokio::test]
    async fn fetch_resource_builds_url() {
        let fetcher = ScriptedFetcher::with_pages(1);
        let result: Result<Person> =
            fetch_resource(&fetcher, &api(), ResourceKind::People, 7).await;

        // The scripted server only knows listing pages.
        assert!(result.unwrap_err().is_not_found());
        assert_eq!(fetcher.requests(), ["https://swapi.dev/api/people/7"]);
    }
}
