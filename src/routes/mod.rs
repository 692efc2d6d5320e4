//! The static endpoint tree.
//!
//! Every ConnectWise path is described by data rather than by a dedicated
//! type: a [`RouteTable`] is an arena of [`RouteNode`]s, each knowing its own
//! segment, its parent (by index, never by ownership), its registered named
//! children and, optionally, its `{id}` placeholder child. The table is built
//! once and never changes afterwards.
//!
//! [`manage()`] and [`automate()`] return the tables for the two products,
//! built from the definitions in the `manage` and `automate` submodules.

use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

use crate::endpoint::Verb;
use crate::shape::Returns;

mod automate;
mod manage;

/// Placeholder segment text.
pub const PLACEHOLDER: &str = "{id}";

/// Name of the count child registered on most collections.
pub const COUNT: &str = "count";

/// One verb a route supports, with its declared return shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    /// HTTP verb.
    pub verb: Verb,
    /// What the verb returns.
    pub returns: Returns,
    /// Vendor model name of the returned item, for logs and docs.
    pub model: &'static str,
}

impl Operation {
    /// Creates an operation.
    pub const fn new(verb: Verb, returns: Returns, model: &'static str) -> Self {
        Self {
            verb,
            returns,
            model,
        }
    }
}

pub(crate) const fn get_many(model: &'static str) -> Operation {
    Operation::new(Verb::Get, Returns::Many, model)
}

pub(crate) const fn get_one(model: &'static str) -> Operation {
    Operation::new(Verb::Get, Returns::One, model)
}

pub(crate) const fn post_one(model: &'static str) -> Operation {
    Operation::new(Verb::Post, Returns::One, model)
}

pub(crate) const fn post_many(model: &'static str) -> Operation {
    Operation::new(Verb::Post, Returns::Many, model)
}

pub(crate) const fn put_one(model: &'static str) -> Operation {
    Operation::new(Verb::Put, Returns::One, model)
}

pub(crate) const fn patch_one(model: &'static str) -> Operation {
    Operation::new(Verb::Patch, Returns::One, model)
}

pub(crate) const fn delete_one(model: &'static str) -> Operation {
    Operation::new(Verb::Delete, Returns::One, model)
}

pub(crate) const DELETE_EMPTY: Operation = Operation::new(Verb::Delete, Returns::Empty, "");

/// A row of a route definition table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RouteDef {
    /// Path with `{id}` placeholders, e.g. `service/boards/{id}/teams`.
    pub path: &'static str,
    /// Verbs the path supports.
    pub operations: &'static [Operation],
    /// Registers a `count` child returning `Count`.
    pub count: bool,
    /// Registers an `{id}` child even if no row describes it.
    pub id: bool,
}

/// Index of a node in a [`RouteTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(usize);

/// A path segment in the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Fixed text such as `companies`. The root's literal is empty.
    Literal(String),
    /// `{id}`, resolved at call time by `Endpoint::with_id`.
    Placeholder,
}

impl Segment {
    fn parse(text: &str) -> Self {
        if text.starts_with('{') && text.ends_with('}') {
            Segment::Placeholder
        } else {
            Segment::Literal(text.to_string())
        }
    }

    /// Returns the segment text, `{id}` for placeholders.
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Literal(text) => text,
            Segment::Placeholder => PLACEHOLDER,
        }
    }
}

/// One node of the endpoint tree.
#[derive(Debug)]
pub struct RouteNode {
    segment: Segment,
    parent: Option<RouteId>,
    children: BTreeMap<String, RouteId>,
    id_child: Option<RouteId>,
    operations: Vec<Operation>,
}

impl RouteNode {
    fn new(segment: Segment, parent: Option<RouteId>) -> Self {
        Self {
            segment,
            parent,
            children: BTreeMap::new(),
            id_child: None,
            operations: Vec::new(),
        }
    }

    /// This node's own segment.
    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    /// The parent node, `None` for the root.
    pub fn parent(&self) -> Option<RouteId> {
        self.parent
    }

    /// Registered named children. The `{id}` child is not among them.
    pub fn children(&self) -> &BTreeMap<String, RouteId> {
        &self.children
    }

    /// The `{id}` placeholder child, if declared.
    pub fn id_child(&self) -> Option<RouteId> {
        self.id_child
    }

    /// Declared operations.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The operation declared for `verb`, if any.
    pub fn operation(&self, verb: Verb) -> Option<&Operation> {
        self.operations.iter().find(|op| op.verb == verb)
    }

    /// True if GET returns a list, which is what pagination walks.
    pub fn is_collection(&self) -> bool {
        matches!(self.operation(Verb::Get), Some(op) if op.returns == Returns::Many)
    }
}

/// Arena holding the whole endpoint tree.
#[derive(Debug)]
pub struct RouteTable {
    nodes: Vec<RouteNode>,
}

impl RouteTable {
    /// Starts a new table containing only the root.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder {
            nodes: vec![RouteNode::new(Segment::Literal(String::new()), None)],
        }
    }

    /// The root node (the API base; its segment is empty).
    pub fn root(&self) -> RouteId {
        RouteId(0)
    }

    /// Looks up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` comes from a different table.
    pub fn node(&self, id: RouteId) -> &RouteNode {
        &self.nodes[id.0]
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a table holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Resolves a template path such as `service/boards/{id}/teams`.
    pub fn resolve(&self, path: &str) -> Option<RouteId> {
        split(path).try_fold(self.root(), |current, segment| {
            let node = self.node(current);
            match Segment::parse(segment) {
                Segment::Placeholder => node.id_child,
                Segment::Literal(name) => node.children.get(&name).copied(),
            }
        })
    }

    /// Template path of a node, e.g. `service/boards/{id}/teams`.
    pub fn template(&self, id: RouteId) -> String {
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.node(current);
            if node.parent.is_some() {
                segments.push(node.segment.as_str());
            }
            cursor = node.parent;
        }
        segments.reverse();
        segments.join("/")
    }

    fn from_defs(defs: &[RouteDef]) -> Self {
        let mut builder = Self::builder();
        for def in defs {
            builder.route(def.path, def.operations);
            if def.count {
                builder.route(&format!("{}/{}", def.path, COUNT), &[get_one("Count")]);
            }
            if def.id {
                builder.route(&format!("{}/{}", def.path, PLACEHOLDER), &[]);
            }
        }
        builder.build()
    }
}

/// Builds a [`RouteTable`]; children are registered here and nowhere else.
#[derive(Debug)]
pub struct RouteTableBuilder {
    nodes: Vec<RouteNode>,
}

impl RouteTableBuilder {
    /// Declares `path` with the given operations, creating any missing
    /// intermediate nodes. Declaring a verb twice keeps the later one.
    pub fn route(&mut self, path: &str, operations: &[Operation]) -> &mut Self {
        let mut current = RouteId(0);
        for segment in split(path) {
            current = self.register_child(current, Segment::parse(segment));
        }
        let node = &mut self.nodes[current.0];
        for op in operations {
            node.operations.retain(|existing| existing.verb != op.verb);
            node.operations.push(*op);
        }
        self
    }

    /// Returns the child of `parent` with `segment`, creating it on first use.
    fn register_child(&mut self, parent: RouteId, segment: Segment) -> RouteId {
        let existing = match &segment {
            Segment::Placeholder => self.nodes[parent.0].id_child,
            Segment::Literal(name) => self.nodes[parent.0].children.get(name).copied(),
        };
        if let Some(id) = existing {
            return id;
        }

        let id = RouteId(self.nodes.len());
        let parent_node = &mut self.nodes[parent.0];
        match &segment {
            Segment::Placeholder => parent_node.id_child = Some(id),
            Segment::Literal(name) => {
                parent_node.children.insert(name.clone(), id);
            }
        }
        self.nodes.push(RouteNode::new(segment, Some(parent)));
        id
    }

    /// Freezes the table.
    pub fn build(self) -> RouteTable {
        RouteTable { nodes: self.nodes }
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// The ConnectWise Manage route table, built on first use.
pub fn manage() -> Arc<RouteTable> {
    static TABLE: OnceLock<Arc<RouteTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| Arc::new(RouteTable::from_defs(manage::ROUTES)))
        .clone()
}

/// The ConnectWise Automate route table, built on first use.
pub fn automate() -> Arc<RouteTable> {
    static TABLE: OnceLock<Arc<RouteTable>> = OnceLock::new();
    TABLE
        .get_or_init(|| Arc::new(RouteTable::from_defs(automate::ROUTES)))
        .clone()
}
