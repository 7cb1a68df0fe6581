use std::collections::{BTreeMap, HashMap};

use crate::data::Dataset;
use crate::itemset::Item;

/// Index of a node in its tree's arena.
pub type NodeId = usize;

#[derive(Debug, Clone)]
pub struct FPNode<I> {
    pub(crate) item: Option<I>,
    pub(crate) count: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: BTreeMap<I, NodeId>,
}

/// A prefix tree of frequency-sorted transactions.
///
/// Nodes live in an arena owned by the tree; parents refer to children and
/// children back to parents by index. `item_nodes` lists, per item, every
/// node carrying it, and `item_counts` sums those nodes' counts.
#[derive(Debug, Clone)]
pub struct FPTree<I> {
    nodes: Vec<FPNode<I>>,
    item_nodes: HashMap<I, Vec<NodeId>>,
    item_counts: HashMap<I, usize>,
    root_index: NodeId,
}

/// The prefix paths leading to every node of one item, each paired with
/// the node's count (the number of times the path occurs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionalPatternBase<I> {
    paths: Vec<(Vec<I>, usize)>,
}

impl<I> FPNode<I> {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: BTreeMap::new(),
        }
    }

    pub fn new_item(item: I, count: usize, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: BTreeMap::new(),
        }
    }

    /// The node's item; `None` for the root.
    pub fn item(&self) -> Option<&I> {
        self.item.as_ref()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn is_root(&self) -> bool {
        self.item.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Child node ids in ascending item order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }
}

impl<I: Item> Default for FPTree<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> FPTree<I> {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            item_nodes: HashMap::new(),
            item_counts: HashMap::new(),
            root_index: 0,
        }
    }

    /// Inserts a transaction `weight` times. `transaction` must already be
    /// reduced to frequent items and sorted by descending frequency.
    pub fn insert(&mut self, transaction: &[I], weight: usize) {
        if weight == 0 {
            return;
        }

        let mut current_index = self.root_index;
        self.nodes[current_index].count += weight;

        for item in transaction {
            if let Some(&child_index) = self.nodes[current_index].children.get(item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
            } else {
                let new_index = self.nodes.len();
                self.nodes.push(FPNode::new_item(item.clone(), weight, current_index));
                self.nodes[current_index].children.insert(item.clone(), new_index);
                self.item_nodes.entry(item.clone()).or_default().push(new_index);
                current_index = new_index;
            }
            *self.item_counts.entry(item.clone()).or_insert(0) += weight;
        }
    }

    /// Number of transactions inserted (the root's count).
    pub fn len(&self) -> usize {
        self.nodes[self.root_index].count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes[self.root_index].is_leaf()
    }

    /// Number of item-carrying nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn root(&self) -> NodeId {
        self.root_index
    }

    pub fn node(&self, id: NodeId) -> &FPNode<I> {
        &self.nodes[id]
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id].children()
    }

    pub fn item_count(&self, item: &I) -> usize {
        self.item_counts.get(item).copied().unwrap_or(0)
    }

    pub fn item_counts(&self) -> &HashMap<I, usize> {
        &self.item_counts
    }

    pub fn item_nodes(&self, item: &I) -> &[NodeId] {
        self.item_nodes.get(item).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Items with their tree-wide counts, least frequent first; ties in
    /// ascending item order.
    pub fn items_by_ascending_frequency(&self) -> Vec<(I, usize)> {
        let mut items: Vec<(I, usize)> = self
            .item_counts
            .iter()
            .map(|(item, &count)| (item.clone(), count))
            .collect();
        items.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        items
    }

    /// Items from the root to `id`, root and `id` itself excluded.
    pub fn prefix_path(&self, id: NodeId) -> Vec<I> {
        let mut path = Vec::new();
        let mut current = self.nodes[id].parent;

        while let Some(idx) = current {
            if let Some(item) = &self.nodes[idx].item {
                path.push(item.clone());
            }
            current = self.nodes[idx].parent;
        }

        path.reverse();
        path
    }

    /// Prefix paths of every node carrying `item`, with multiplicities.
    /// Nodes directly under the root contribute nothing.
    pub fn conditional_pattern_base(&self, item: &I) -> ConditionalPatternBase<I> {
        let paths = self
            .item_nodes(item)
            .iter()
            .filter_map(|&idx| {
                let path = self.prefix_path(idx);
                (!path.is_empty()).then(|| (path, self.nodes[idx].count))
            })
            .collect();
        ConditionalPatternBase { paths }
    }

    /// True when no node, starting at the root, has more than one child.
    pub fn is_single_path(&self) -> bool {
        let mut current_index = self.root_index;

        loop {
            let current_node = &self.nodes[current_index];
            let mut children = current_node.children.values();

            match (children.next(), children.next()) {
                (None, _) => return true,
                (Some(&only), None) => current_index = only,
                (Some(_), Some(_)) => return false,
            }
        }
    }

    /// Items and counts along the path from the root, following the first
    /// child at each step. On a single-path tree this is the whole tree.
    pub fn single_path(&self) -> Vec<(I, usize)> {
        let mut path = Vec::new();
        let mut current_index = self.root_index;

        while let Some(&child_index) = self.nodes[current_index].children.values().next() {
            let child_node = &self.nodes[child_index];
            if let Some(item) = &child_node.item {
                path.push((item.clone(), child_node.count));
            }
            current_index = child_index;
        }
        path
    }
}

impl<I: Item> ConditionalPatternBase<I> {
    /// Number of rows the base stands for, multiplicities included.
    pub fn len(&self) -> usize {
        self.paths.iter().map(|(_, count)| count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn num_paths(&self) -> usize {
        self.paths.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[I], usize)> + Clone + '_ {
        self.paths.iter().map(|(path, count)| (path.as_slice(), *count))
    }

    /// Expands the base into a bag of transactions, each path repeated
    /// once per occurrence.
    pub fn to_dataset(&self) -> Dataset<I> {
        let mut dataset = Dataset::new();
        for (path, count) in &self.paths {
            for _ in 0..*count {
                dataset.push(path.iter().cloned());
            }
        }
        dataset
    }
}
