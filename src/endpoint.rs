//! Endpoint handles: one position in the endpoint tree, bound to a transport.
//!
//! An [`Endpoint`] is a cheap, cloneable handle. It points at a node of the
//! shared [`RouteTable`] and remembers the ids bound to the `{id}` segments
//! above it. Paths are never stored; `full_path()` walks the table each time.
//!
//! ```ignore
//! let teams = client.endpoint("service/boards")?.with_id(3).child("teams")?;
//! let first = teams.paginated::<BoardTeam>(1, 25, None).await?;
//! ```

use std::fmt;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::error::TetherError;
use crate::pagination::{PaginatedCollection, PAGE_PARAM, PAGE_SIZE_PARAM};
use crate::routes::{Operation, RouteId, RouteNode, RouteTable, Segment};
use crate::shape::{self, Payload, Returns};
use crate::transport::{QueryParams, QueryValue, Transport};

/// HTTP verbs an endpoint can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl Verb {
    /// The matching reqwest method.
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method().as_str())
    }
}

/// A node of the endpoint tree, ready to issue requests.
#[derive(Clone)]
pub struct Endpoint {
    routes: Arc<RouteTable>,
    transport: Arc<dyn Transport>,
    route: RouteId,
    /// Ids for the placeholder segments on `route`'s ancestry, root to leaf.
    bindings: Vec<i64>,
    /// Ids appended below a route without an `{id}` child.
    detached: Vec<i64>,
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("path", &self.full_path())
            .field("route", &self.route)
            .finish()
    }
}

impl Endpoint {
    /// Creates a handle on the root of `routes`.
    pub fn root(routes: Arc<RouteTable>, transport: Arc<dyn Transport>) -> Self {
        let route = routes.root();
        Self {
            routes,
            transport,
            route,
            bindings: Vec::new(),
            detached: Vec::new(),
        }
    }

    /// The table node this handle sits on.
    ///
    /// For a detached handle (see [`with_id`](Self::with_id)) this is the
    /// deepest declared ancestor.
    pub fn route(&self) -> &RouteNode {
        self.routes.node(self.route)
    }

    /// Index of the table node this handle sits on.
    pub fn route_id(&self) -> RouteId {
        self.route
    }

    /// True if this handle sits below the declared table.
    pub fn is_detached(&self) -> bool {
        !self.detached.is_empty()
    }

    /// This node's own segment, with its id substituted if it has one.
    pub fn segment(&self) -> String {
        if let Some(id) = self.detached.last() {
            return id.to_string();
        }
        match self.route().segment() {
            Segment::Placeholder => self
                .bindings
                .last()
                .map(i64::to_string)
                .unwrap_or_default(),
            Segment::Literal(text) => text.clone(),
        }
    }

    /// The parent node, `None` at the root.
    pub fn parent(&self) -> Option<Endpoint> {
        let mut parent = self.clone();
        if parent.detached.pop().is_some() {
            return Some(parent);
        }
        let node = self.route();
        if matches!(node.segment(), Segment::Placeholder) {
            parent.bindings.pop();
        }
        parent.route = node.parent()?;
        Some(parent)
    }

    /// Resolved path relative to the API root, e.g. `service/boards/3/teams`.
    pub fn full_path(&self) -> String {
        let mut ids = self.bindings.iter().rev();
        let mut segments = Vec::new();
        let mut cursor = Some(self.route);

        while let Some(current) = cursor {
            let node = self.routes.node(current);
            if node.parent().is_some() {
                segments.push(match node.segment() {
                    Segment::Literal(text) => text.clone(),
                    Segment::Placeholder => ids
                        .next()
                        .map(i64::to_string)
                        .unwrap_or_else(|| crate::routes::PLACEHOLDER.to_string()),
                });
            }
            cursor = node.parent();
        }

        segments.reverse();
        segments.extend(self.detached.iter().map(i64::to_string));
        segments.join("/")
    }

    /// Joins `child_segment` onto this node's resolved path.
    ///
    /// The segment is percent-encoded; the result is not registered anywhere.
    pub fn join(&self, child_segment: &str) -> String {
        let child = urlencoding::encode(child_segment.trim_matches('/'));
        let base = self.full_path();
        if base.is_empty() {
            child.into_owned()
        } else {
            format!("{}/{}", base, child)
        }
    }

    /// Returns the registered child called `name`.
    ///
    /// Every call for the same name lands on the same table node.
    ///
    /// # Errors
    ///
    /// Returns `TetherError::UnknownEndpoint` if no such child is registered.
    pub fn child(&self, name: &str) -> Result<Endpoint, TetherError> {
        let child = (!self.is_detached())
            .then(|| self.route().children().get(name).copied())
            .flatten()
            .ok_or_else(|| TetherError::unknown_endpoint(self.join(name)))?;

        Ok(Endpoint {
            routes: Arc::clone(&self.routes),
            transport: Arc::clone(&self.transport),
            route: child,
            bindings: self.bindings.clone(),
            detached: Vec::new(),
        })
    }

    /// Returns a fresh node for `id` below this one.
    ///
    /// Nothing is registered or mutated. If this route declares no `{id}`
    /// child the result is detached: it resolves to the right path but
    /// supports no verbs and no named children.
    pub fn with_id(&self, id: i64) -> Endpoint {
        let mut next = self.clone();
        match self.route().id_child() {
            Some(id_child) if !self.is_detached() => {
                next.route = id_child;
                next.bindings.push(id);
            }
            _ => next.detached.push(id),
        }
        next
    }

    /// Walks a relative path from this node: numeric segments become
    /// [`with_id`](Self::with_id), everything else [`child`](Self::child).
    pub fn at(&self, path: &str) -> Result<Endpoint, TetherError> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self.clone(), |current, segment| {
                match segment.parse::<i64>() {
                    Ok(id) => Ok(current.with_id(id)),
                    Err(_) => current.child(segment),
                }
            })
    }

    /// The operation declared for `verb`; detached handles declare none.
    pub fn operation(&self, verb: Verb) -> Option<&Operation> {
        if self.is_detached() {
            return None;
        }
        self.route().operation(verb)
    }

    /// True if `verb` is declared for this node.
    pub fn supports(&self, verb: Verb) -> bool {
        self.operation(verb).is_some()
    }

    /// Issues one request with `verb` and parses the body per the declared shape.
    ///
    /// # Errors
    ///
    /// - `UnsupportedOperation` if the verb is not declared (no request is made)
    /// - any transport error, unchanged
    /// - `Deserialization` if the body does not match `T`
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        verb: Verb,
        body: Option<&serde_json::Value>,
        query: Option<&QueryParams>,
    ) -> Result<Payload<T>, TetherError> {
        let path = self.full_path();
        let returns = self
            .operation(verb)
            .map(|op| op.returns)
            .ok_or_else(|| TetherError::unsupported(verb, &path))?;
        let query = query.cloned().unwrap_or_default();

        tracing::debug!(verb = %verb, path = %path, "Invoking endpoint");

        let response = self
            .transport
            .issue(verb.method(), &path, body, &query)
            .await?;
        shape::parse_payload(returns, &response.body)
    }

    /// GET this endpoint.
    pub async fn get<T: DeserializeOwned>(
        &self,
        query: Option<&QueryParams>,
    ) -> Result<Payload<T>, TetherError> {
        self.invoke(Verb::Get, None, query).await
    }

    /// POST `body` to this endpoint.
    pub async fn post<T: DeserializeOwned>(
        &self,
        body: Option<&serde_json::Value>,
        query: Option<&QueryParams>,
    ) -> Result<Payload<T>, TetherError> {
        self.invoke(Verb::Post, body, query).await
    }

    /// PUT `body` to this endpoint.
    pub async fn put<T: DeserializeOwned>(
        &self,
        body: Option<&serde_json::Value>,
        query: Option<&QueryParams>,
    ) -> Result<Payload<T>, TetherError> {
        self.invoke(Verb::Put, body, query).await
    }

    /// PATCH this endpoint. ConnectWise expects a JSON Patch array as `body`.
    pub async fn patch<T: DeserializeOwned>(
        &self,
        body: Option<&serde_json::Value>,
        query: Option<&QueryParams>,
    ) -> Result<Payload<T>, TetherError> {
        self.invoke(Verb::Patch, body, query).await
    }

    /// DELETE this endpoint.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        query: Option<&QueryParams>,
    ) -> Result<Payload<T>, TetherError> {
        self.invoke(Verb::Delete, None, query).await
    }

    /// Fetches one page of this collection.
    ///
    /// `query` holds the caller's filters; `page` and `pageSize` are added
    /// here and any copies of them in `query` are dropped.
    ///
    /// # Errors
    ///
    /// - `Validation` if `page` or `page_size` is zero (no request is made)
    /// - `UnsupportedOperation` unless GET on this route returns a list
    /// - any transport or deserialization error, unchanged
    pub async fn paginated<T: DeserializeOwned>(
        &self,
        page: u32,
        page_size: u32,
        query: Option<&QueryParams>,
    ) -> Result<PaginatedCollection<T>, TetherError> {
        if page == 0 {
            return Err(TetherError::validation("page must be at least 1"));
        }
        if page_size == 0 {
            return Err(TetherError::validation("page_size must be at least 1"));
        }

        let path = self.full_path();
        match self.operation(Verb::Get) {
            Some(op) if op.returns == Returns::Many => {}
            _ => return Err(TetherError::unsupported(Verb::Get, path)),
        }

        let mut filters = query.cloned().unwrap_or_default();
        filters.remove(PAGE_PARAM);
        filters.remove(PAGE_SIZE_PARAM);

        let mut request_query = filters.clone();
        request_query.insert(PAGE_PARAM.to_string(), QueryValue::from(page));
        request_query.insert(PAGE_SIZE_PARAM.to_string(), QueryValue::from(page_size));

        tracing::debug!(path = %path, page, page_size, "Fetching page");

        let response = self
            .transport
            .issue(Method::GET, &path, None, &request_query)
            .await?;

        PaginatedCollection::from_response(response, self.clone(), page, page_size, filters)
    }
}
