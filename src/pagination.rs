//! Page-by-page traversal of ConnectWise collections.
//!
//! A [`PaginatedCollection`] wraps one page of a collection response. It
//! knows the page number and size it was fetched with, the caller's filters
//! and the endpoint it came from, which is all it needs to ask for the page
//! after it. Collections are immutable: advancing yields a new one.
//!
//! Whether another page exists is decided once, at construction:
//!
//! 1. a page with no items ends the collection;
//! 2. otherwise an explicit `Link` header wins: `rel="next"` means more pages,
//!    a `Link` header without it means none;
//! 3. otherwise a full page (`items == page_size`) means there may be more.

use futures::stream::{self, Stream, TryStreamExt};
use reqwest::header::{HeaderMap, LINK};
use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::TetherError;
use crate::shape;
use crate::transport::{QueryParams, RawResponse};

/// Query parameter carrying the 1-based page index.
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size.
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Which rule decided whether a collection has another page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The server sent a `Link` header.
    Explicit,
    /// No `Link` header; a full page implies more.
    Heuristic,
    /// The page held no items.
    EmptyPage,
}

/// One entry of a `Link` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// Target URL as sent by the server.
    pub url: String,
    /// Relation, e.g. `next` or `last`.
    pub rel: String,
}

impl PageLink {
    /// True if `rel` is one of this link's space-separated relations.
    pub fn is(&self, rel: &str) -> bool {
        self.rel
            .split_whitespace()
            .any(|candidate| candidate.eq_ignore_ascii_case(rel))
    }

    /// The `page` query parameter of the target URL.
    pub fn page(&self) -> Option<u32> {
        let parsed = url::Url::parse(&self.url).or_else(|_| {
            url::Url::parse("http://localhost/").and_then(|base| base.join(&self.url))
        });
        parsed
            .ok()?
            .query_pairs()
            .find(|(key, _)| key == PAGE_PARAM)
            .and_then(|(_, value)| value.parse().ok())
    }
}

/// Parses a `Link` header value: `<url>; rel="next", <url>; rel="last"`.
///
/// Commas inside `<...>` targets or quoted parameters do not split entries.
/// Entries without both a URL and a `rel` are skipped.
pub fn parse_link_header(header: &str) -> Vec<PageLink> {
    let mut links = Vec::new();
    for entry in split_link_entries(header) {
        let Some(rest) = entry.trim().strip_prefix('<') else {
            continue;
        };
        let Some(end) = rest.find('>') else {
            continue;
        };
        let url = &rest[..end];
        let rel = rest[end + 1..]
            .split(';')
            .map(str::trim)
            .find_map(|param| param.strip_prefix("rel="))
            .map(|value| value.trim_matches('"').trim_matches('\''));

        if let Some(rel) = rel {
            links.push(PageLink {
                url: url.to_string(),
                rel: rel.to_string(),
            });
        }
    }
    links
}

fn split_link_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_target = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (index, ch) in header.char_indices() {
        match ch {
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            '"' if !in_target => in_quotes = !in_quotes,
            ',' if !in_target && !in_quotes => {
                entries.push(&header[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);
    entries
}

fn links_from(headers: &HeaderMap) -> Option<Vec<PageLink>> {
    let mut values = headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .peekable();
    values.peek()?;

    let links: Vec<PageLink> = values.flat_map(parse_link_header).collect();
    if links.is_empty() {
        None
    } else {
        Some(links)
    }
}

/// Reads the explicit continuation signal from response headers.
///
/// `Some(true)` if a `Link` header carries `rel="next"`, `Some(false)` if
/// `Link` entries exist but none is `next`, and `None` without usable `Link`
/// headers.
pub fn next_page_indicator(headers: &HeaderMap) -> Option<bool> {
    links_from(headers).map(|links| links.iter().any(|link| link.is("next")))
}

/// Page numbers advertised by a `Link` header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageLinks {
    /// `rel="first"`
    pub first: Option<u32>,
    /// `rel="prev"`
    pub prev: Option<u32>,
    /// `rel="next"`
    pub next: Option<u32>,
    /// `rel="last"`
    pub last: Option<u32>,
}

impl PageLinks {
    fn from_links(links: &[PageLink]) -> Self {
        let page_of = |rel: &str| links.iter().find(|link| link.is(rel)).and_then(PageLink::page);
        Self {
            first: page_of("first"),
            prev: page_of("prev"),
            next: page_of("next"),
            last: page_of("last"),
        }
    }
}

/// One page of a collection plus what is needed to fetch the next.
#[derive(Debug, Clone)]
pub struct PaginatedCollection<T> {
    items: Vec<T>,
    page: u32,
    page_size: u32,
    endpoint: Endpoint,
    query: QueryParams,
    has_more: bool,
    continuation: Continuation,
    links: PageLinks,
}

impl<T: DeserializeOwned> PaginatedCollection<T> {
    /// Wraps a raw collection response. `filters` must not contain page keys.
    pub(crate) fn from_response(
        response: RawResponse,
        endpoint: Endpoint,
        page: u32,
        page_size: u32,
        filters: QueryParams,
    ) -> Result<Self, TetherError> {
        let items: Vec<T> = shape::parse_many(&response.body)?;
        let parsed_links = links_from(&response.headers);
        let indicator = parsed_links
            .as_ref()
            .map(|links| links.iter().any(|link| link.is("next")));
        let links = parsed_links
            .as_deref()
            .map(PageLinks::from_links)
            .unwrap_or_default();

        let (has_more, continuation) = if items.is_empty() {
            if indicator == Some(true) {
                tracing::warn!(
                    path = %endpoint.full_path(),
                    page,
                    "Server advertised a next page after an empty page; stopping"
                );
            }
            (false, Continuation::EmptyPage)
        } else if let Some(next) = indicator {
            (next, Continuation::Explicit)
        } else {
            (items.len() == page_size as usize, Continuation::Heuristic)
        };

        tracing::debug!(
            path = %endpoint.full_path(),
            page,
            page_size,
            items = items.len(),
            has_more,
            "Received page"
        );

        Ok(Self {
            items,
            page,
            page_size,
            endpoint,
            query: filters,
            has_more,
            continuation,
            links,
        })
    }

    /// Fetches the page after this one.
    ///
    /// Returns `Ok(None)` without issuing a request once the collection is
    /// exhausted, however many times it is called.
    pub async fn fetch_next_page(&self) -> Result<Option<Self>, TetherError> {
        if !self.has_more {
            return Ok(None);
        }
        let next = self
            .page
            .checked_add(1)
            .ok_or_else(|| TetherError::validation("page index overflow"))?;

        self.endpoint
            .paginated(next, self.page_size, Some(&self.query))
            .await
            .map(Some)
    }

    /// Every item of this page and the pages after it, fetched lazily.
    ///
    /// A failed fetch is yielded once and ends the stream.
    pub fn iterate_all(mut self) -> impl Stream<Item = Result<T, TetherError>> {
        let buffered = std::mem::take(&mut self.items).into_iter();

        stream::unfold(Some((buffered, self)), |state| async move {
            let (mut buffered, mut cursor) = state?;
            loop {
                if let Some(item) = buffered.next() {
                    return Some((Ok(item), Some((buffered, cursor))));
                }
                match cursor.fetch_next_page().await {
                    Ok(Some(mut next)) => {
                        buffered = std::mem::take(&mut next.items).into_iter();
                        cursor = next;
                    }
                    Ok(None) => return None,
                    Err(err) => return Some((Err(err), None)),
                }
            }
        })
    }

    /// Drains [`iterate_all`](Self::iterate_all) into a vector.
    pub async fn collect_all(self) -> Result<Vec<T>, TetherError> {
        self.iterate_all().try_collect().await
    }
}

impl<T> PaginatedCollection<T> {
    /// Items on this page, in server order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if this page holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 1-based page index this page was requested with.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size this page was requested with.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Caller filters, without `page` and `pageSize`.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// True if [`fetch_next_page`](Self::fetch_next_page) would issue a request.
    pub fn has_next_page(&self) -> bool {
        self.has_more
    }

    /// Which rule decided [`has_next_page`](Self::has_next_page).
    pub fn continuation(&self) -> Continuation {
        self.continuation
    }

    /// Page numbers from the `Link` header, all `None` without one.
    pub fn links(&self) -> &PageLinks {
        &self.links
    }

    /// Last page number, when the server advertises one.
    pub fn last_page(&self) -> Option<u32> {
        self.links.last
    }

    /// The endpoint the next page is requested from.
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::routes::{get_many, get_one, RouteTable};
    use crate::transport::testing::StubTransport;
    use crate::transport::QueryValue;
    use futures::StreamExt;
    use pretty_assertions::assert_eq;
    use reqwest::Method;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    fn companies(stub: &Arc<StubTransport>) -> Endpoint {
        let mut builder = RouteTable::builder();
        builder
            .route("company/companies", &[get_many("Company")])
            .route("company/companies/{id}", &[get_one("Company")]);
        let transport: Arc<dyn crate::transport::Transport> = stub.clone();
        Endpoint::root(Arc::new(builder.build()), transport)
            .at("company/companies")
            .unwrap()
    }

    fn ids(items: &[Item]) -> Vec<i64> {
        items.iter().map(|item| item.id).collect()
    }

    #[tokio::test]
    async fn test_iterate_all_walks_every_page_once() {
        let stub = Arc::new(StubTransport::new());
        stub.respond_page(1, 3).respond_page(4, 3).respond_page(7, 2);

        let first = companies(&stub)
            .paginated::<Item>(1, 3, None)
            .await
            .unwrap();
        let all = first.collect_all().await.unwrap();

        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let pages: Vec<_> = stub
            .calls()
            .iter()
            .map(|call| call.query[PAGE_PARAM].clone())
            .collect();
        assert_eq!(
            pages,
            vec![QueryValue::Int(1), QueryValue::Int(2), QueryValue::Int(3)]
        );
    }

    #[tokio::test]
    async fn test_fetch_next_page_manually() {
        let stub = Arc::new(StubTransport::new());
        stub.respond_page(1, 2).respond_page(3, 1);

        let first = companies(&stub)
            .paginated::<Item>(1, 2, None)
            .await
            .unwrap();
        assert!(first.has_next_page());
        assert_eq!(first.continuation(), Continuation::Heuristic);

        let second = first.fetch_next_page().await.unwrap().unwrap();
        assert_eq!(second.page(), 2);
        assert_eq!(second.page_size(), 2);
        assert_eq!(ids(second.items()), vec![3]);
        assert!(!second.has_next_page());
    }

    #[tokio::test]
    async fn test_empty_page_is_exhausted() {
        let stub = Arc::new(StubTransport::new());
        stub.respond(RawResponse::ok("[]"));

        let page = companies(&stub)
            .paginated::<Item>(1, 25, None)
            .await
            .unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next_page());
        assert_eq!(page.continuation(), Continuation::EmptyPage);
    }

    #[tokio::test]
    async fn test_blank_body_is_an_empty_page() {
        let stub = Arc::new(StubTransport::new());
        stub.respond(RawResponse::ok(""));

        let page = companies(&stub)
            .paginated::<Item>(1, 25, None)
            .await
            .unwrap();
        assert_eq!(page.len(), 0);
        assert!(!page.has_next_page());
    }

    #[tokio::test]
    async fn test_empty_page_with_next_link_stops() {
        let stub = Arc::new(StubTransport::new());
        stub.respond(
            RawResponse::ok("[]").with_header("link", "<https://cw/?page=2>; rel=\"next\""),
        );

        let page = companies(&stub)
            .paginated::<Item>(1, 25, None)
            .await
            .unwrap();
        assert!(!page.has_next_page());
        assert!(page.fetch_next_page().await.unwrap().is_none());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_filters_are_preserved_across_pages() {
        let stub = Arc::new(StubTransport::new());
        stub.respond_page(1, 2).respond_page(3, 2);

        let mut filters = QueryParams::new();
        filters.insert("conditions".to_string(), "deletedFlag=false".into());
        filters.insert("orderBy".to_string(), "id asc".into());
        filters.insert(PAGE_PARAM.to_string(), 9.into());

        let first = companies(&stub)
            .paginated::<Item>(1, 2, Some(&filters))
            .await
            .unwrap();
        let _second = first.fetch_next_page().await.unwrap().unwrap();

        let calls = stub.calls();
        assert_eq!(calls.len(), 2);
        for (index, call) in calls.iter().enumerate() {
            assert_eq!(call.method, Method::GET);
            assert_eq!(call.path, "company/companies");
            assert_eq!(call.query["conditions"], QueryValue::from("deletedFlag=false"));
            assert_eq!(call.query["orderBy"], QueryValue::from("id asc"));
            assert_eq!(call.query[PAGE_PARAM], QueryValue::Int(index as i64 + 1));
            assert_eq!(call.query[PAGE_SIZE_PARAM], QueryValue::Int(2));
            assert_eq!(call.query.len(), 4);
        }
        assert!(!first.query().contains_key(PAGE_PARAM));
    }

    #[tokio::test]
    async fn test_exhausted_collection_issues_no_requests() {
        let stub = Arc::new(StubTransport::new());
        stub.respond_page(1, 1);

        let page = companies(&stub)
            .paginated::<Item>(1, 5, None)
            .await
            .unwrap();
        assert!(page.fetch_next_page().await.unwrap().is_none());
        assert!(page.fetch_next_page().await.unwrap().is_none());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_next_link_beats_short_page() {
        let stub = Arc::new(StubTransport::new());
        stub.respond(
            RawResponse::ok(r#"[{"id":1},{"id":2}]"#)
                .with_header("link", "<https://cw/apis/3.0/company/companies?page=2&pageSize=3>; rel=\"next\""),
        );

        let page = companies(&stub)
            .paginated::<Item>(1, 3, None)
            .await
            .unwrap();
        assert!(page.has_next_page());
        assert_eq!(page.continuation(), Continuation::Explicit);
        assert_eq!(page.links().next, Some(2));
    }

    #[tokio::test]
    async fn test_link_without_next_beats_full_page() {
        let stub = Arc::new(StubTransport::new());
        stub.respond(
            RawResponse::ok(r#"[{"id":1},{"id":2},{"id":3}]"#)
                .with_header("link", "<https://cw/?page=1&pageSize=3>; rel=\"first\""),
        );

        let page = companies(&stub)
            .paginated::<Item>(4, 3, None)
            .await
            .unwrap();
        assert!(!page.has_next_page());
        assert_eq!(page.continuation(), Continuation::Explicit);
        assert_eq!(page.links().first, Some(1));
    }

    #[tokio::test]
    async fn test_zero_page_or_size_is_rejected_before_request() {
        let stub = Arc::new(StubTransport::new());
        let endpoint = companies(&stub);

        let err = endpoint.paginated::<Item>(0, 25, None).await.unwrap_err();
        assert!(matches!(err, TetherError::Validation(_)));
        let err = endpoint.paginated::<Item>(1, 0, None).await.unwrap_err();
        assert!(matches!(err, TetherError::Validation(_)));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_paginated_requires_a_collection() {
        let stub = Arc::new(StubTransport::new());
        let company = companies(&stub).with_id(12);

        let err = company.paginated::<Item>(1, 25, None).await.unwrap_err();
        assert!(matches!(err, TetherError::UnsupportedOperation { .. }));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_stream_yields_error_once_then_ends() {
        let stub = Arc::new(StubTransport::new());
        stub.respond_page(1, 2).fail(TetherError::Authentication);

        let first = companies(&stub)
            .paginated::<Item>(1, 2, None)
            .await
            .unwrap();
        let results: Vec<_> = first.iterate_all().collect().await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(TetherError::Authentication)));
        assert_eq!(stub.call_count(), 2);
    }

    #[test]
    fn test_parse_link_header_entries() {
        let links = parse_link_header(
            "<https://cw/x?page=2&pageSize=25>; rel=\"next\", <https://cw/x?page=7&pageSize=25>; rel=\"last\"",
        );
        assert_eq!(links.len(), 2);
        assert!(links[0].is("next"));
        assert_eq!(links[0].page(), Some(2));
        assert!(links[1].is("last"));
        assert_eq!(links[1].page(), Some(7));
    }

    #[test]
    fn test_parse_link_header_skips_malformed_entries() {
        let links = parse_link_header("garbage, <https://cw/x?page=3>; rel=prev, <no-rel>");
        assert_eq!(links.len(), 1);
        assert!(links[0].is("prev"));
    }

    #[test]
    fn test_parse_link_header_keeps_commas_inside_targets() {
        let header = "<https://cw/x?fields=id,name&page=3>; rel=\"next\", \
                      <https://cw/x?fields=id,name&page=1>; rel=\"first\"";
        let links = parse_link_header(header);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://cw/x?fields=id,name&page=3");
        assert!(links[0].is("next"));
        assert_eq!(links[0].page(), Some(3));
        assert!(links[1].is("first"));

        let mut headers = HeaderMap::new();
        headers.insert(LINK, header.parse().unwrap());
        assert_eq!(next_page_indicator(&headers), Some(true));
    }

    #[tokio::test]
    async fn test_next_link_with_comma_filters_is_followed() {
        let stub = Arc::new(StubTransport::new());
        stub.respond(RawResponse::ok(r#"[{"id":1}]"#).with_header(
            "link",
            "<https://cw/company/companies?conditions=id in (1,2,3)&page=2&pageSize=5>; rel=\"next\"",
        ));

        let page = companies(&stub)
            .paginated::<Item>(1, 5, None)
            .await
            .unwrap();
        assert!(page.has_next_page());
        assert_eq!(page.continuation(), Continuation::Explicit);
        assert_eq!(page.links().next, Some(2));
    }

    #[test]
    fn test_relative_link_page() {
        let link = PageLink {
            url: "/v4_6_release/apis/3.0/company/companies?pageSize=10&page=4".to_string(),
            rel: "last".to_string(),
        };
        assert_eq!(link.page(), Some(4));
    }

    #[test]
    fn test_next_page_indicator() {
        let mut headers = HeaderMap::new();
        assert_eq!(next_page_indicator(&headers), None);

        headers.append(LINK, "<https://cw/?page=1>; rel=\"first\"".parse().unwrap());
        assert_eq!(next_page_indicator(&headers), Some(false));

        headers.append(LINK, "<https://cw/?page=3>; rel=\"next\"".parse().unwrap());
        assert_eq!(next_page_indicator(&headers), Some(true));
    }

    #[test]
    fn test_next_page_indicator_ignores_unparsable_link() {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, "nothing useful".parse().unwrap());
        assert_eq!(next_page_indicator(&headers), None);
    }
}
