//! Read-only view of an actor's 3D model graph and the bone search over it.
//!
//! The host owns the real node graph; [`SceneGraph`] is the small surface the scale
//! resolver needs. [`NodeTree`] is an arena implementation for hosts that mirror their
//! skeleton into Rust (and for tests).

use std::collections::{HashMap, HashSet, VecDeque};

use crate::constants::MAX_NODE_SEARCH;

/// Handle of a node inside one [`SceneGraph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

pub trait SceneGraph {
    /// Root node of the model.
    fn root(&self) -> NodeId;

    /// The engine's fast name index. May miss nodes that exist in the graph.
    fn lookup_by_name(&self, name: &str) -> Option<NodeId>;

    /// Name of a node, or `None` if the handle does not resolve to a node.
    fn node_name(&self, id: NodeId) -> Option<&str>;

    /// Child slots of a node. Empty slots are `None`.
    fn children(&self, id: NodeId) -> &[Option<NodeId>];

    /// Uniform local scale of a node.
    fn local_scale(&self, id: NodeId) -> f32;
}

/// Find a node by exact name.
///
/// Tries the graph's name index first, then falls back to a breadth-first search from
/// the root. The search skips empty child slots and unresolvable handles, never visits a
/// node twice, and stops after [`MAX_NODE_SEARCH`] nodes.
pub fn find_node_by_name(graph: &dyn SceneGraph, name: &str) -> Option<NodeId> {
    if let Some(id) = graph.lookup_by_name(name) {
        return Some(id);
    }

    let root = graph.root();
    let mut queue = VecDeque::from([root]);
    let mut visited = HashSet::from([root]);

    while let Some(current) = queue.pop_front() {
        if visited.len() > MAX_NODE_SEARCH {
            log::warn!(
                "Find bone: gave up on {:?} after {} nodes",
                name,
                MAX_NODE_SEARCH
            );
            return None;
        }

        let Some(current_name) = graph.node_name(current) else {
            log::warn!("Find bone: skipping unresolvable node {:?}", current);
            continue;
        };

        if current_name == name {
            return Some(current);
        }

        for child in graph.children(current).iter().flatten() {
            if visited.insert(*child) {
                queue.push_back(*child);
            }
        }
    }

    None
}

#[derive(Clone, Debug)]
struct SceneNode {
    name: String,
    local_scale: f32,
    children: Vec<Option<NodeId>>,
}

/// Arena-backed model graph.
#[derive(Clone, Debug)]
pub struct NodeTree {
    nodes: Vec<SceneNode>,
    index: HashMap<String, NodeId>,
}

impl NodeTree {
    /// New tree with a single, indexed root node.
    pub fn new(root_name: &str, root_scale: f32) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        };
        let root = tree.push(root_name, root_scale);
        tree.index.insert(root_name.to_owned(), root);
        tree
    }

    fn push(&mut self, name: &str, local_scale: f32) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode {
            name: name.to_owned(),
            local_scale,
            children: Vec::new(),
        });
        id
    }

    /// Add a child and register it in the name index.
    pub fn add_child(&mut self, parent: NodeId, name: &str, local_scale: f32) -> NodeId {
        let id = self.add_unindexed_child(parent, name, local_scale);
        self.index.entry(name.to_owned()).or_insert(id);
        id
    }

    /// Add a child the name index does not know about.
    pub fn add_unindexed_child(&mut self, parent: NodeId, name: &str, local_scale: f32) -> NodeId {
        let id = self.push(name, local_scale);
        self.link(parent, Some(id));
        id
    }

    /// Append a raw child slot. `None` models an empty slot; linking an existing node
    /// (for example an ancestor) builds a non-tree graph.
    pub fn link(&mut self, parent: NodeId, child: Option<NodeId>) {
        if let Some(node) = self.nodes.get_mut(parent.0) {
            node.children.push(child);
        }
    }
}

impl SceneGraph for NodeTree {
    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn lookup_by_name(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    fn node_name(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.0).map(|n| n.name.as_str())
    }

    fn children(&self, id: NodeId) -> &[Option<NodeId>] {
        self.nodes
            .get(id.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn local_scale(&self, id: NodeId) -> f32 {
        self.nodes.get(id.0).map_or(1.0, |n| n.local_scale)
    }
}
