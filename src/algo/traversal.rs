/*!
Graph traversal primitives.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking).
- [`DepthFirstEvents`], an explicit-stack depth-first search that reports discovery,
  non-tree links and finishing of nodes. All DFS-based analyses of this crate are built
  on top of it, so that path-shaped graphs with millions of nodes do not exhaust the
  native call stack.
- Topological ordering via Kahn's algorithm ([`TopoSearch`]).
- A high-level [`Traversal`] trait that exposes the traversals directly as methods on
  graph data structures.
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`] stores only the node.
/// - [`PredecessorOfNode`] stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)`
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(predecessor, node)`; a root is stored as `(node, node)`.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// The frontier of a traversal.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single item.
    fn init(u: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a bitset of
/// discovered nodes. A node is marked as soon as it enters the frontier, so every node is
/// yielded at most once.
///
/// Note that the stack-based variant yields a valid preorder of *some* search but not the
/// classical recursive DFS order; use [`DepthFirstEvents`] whenever finishing times or
/// ancestor relations matter.
pub struct TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A stack-based traversal iterator over the graph
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

/// A BFS traversal iterator that records predecessor information
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A stack-based traversal iterator that records predecessor information
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.visited.cardinality() as usize + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Returns *true* if `u` was discovered (i.e. yielded or in the frontier)
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let first_unvisited = self.visited.iter_cleared_bits().next();
        match first_unvisited {
            None => false,
            Some(x) => {
                trace!(node = x, "restart traversal");
                self.visited.set_bit(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.stop_at = Some(stopper);
        self
    }

    /// Excludes a node from the search. It will be treated as if it was already visited.
    /// Has no effect on nodes that are already in the frontier, so call it directly after
    /// the constructor.
    pub fn exclude_node(&mut self, u: Node) {
        self.visited.set_bit(u);
    }

    /// Excludes multiple nodes (see [`TraversalSearch::exclude_node`])
    pub fn with_nodes_excluded<N>(mut self, us: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        for u in us {
            self.exclude_node(u);
        }
        self
    }

    /// Consumes the traversal search and returns true iff there exists a path of at least
    /// one edge from the start node to `u`.
    ///
    /// # Warning
    /// Must be called on a fresh iterator.
    pub fn is_node_reachable(mut self, u: Node) -> bool {
        assert_eq!(self.sequencer.cardinality(), 1);
        self.visited.clear_bit(u);
        self.next();
        self.any(|v| v.item() == u)
    }
}

/// Ranks nodes by the position in which an iterator yields them
pub trait RankFromOrder: Iterator<Item = Node> + Sized {
    /// Number of nodes of the underlying graph
    fn number_of_ranked_nodes(&self) -> NumNodes;

    /// Consumes the iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position at which node `u` was yielded.
    /// Returns `None` if the iterator did not cover every node.
    ///
    /// # Panics
    /// Panics if the iterator yields the same node more than once.
    fn ranking(mut self) -> Option<Vec<Node>> {
        let n = self.number_of_ranked_nodes();
        let mut ranking = vec![INVALID_NODE; n as usize];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE);
            ranking[u as usize] = rank;
            rank += 1;
        }

        (rank == n).then_some(ranking)
    }
}

impl<G, S> RankFromOrder for TraversalSearch<'_, G, S, Node>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
{
    fn number_of_ranked_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

/// Iterator implementing topological ordering via Kahn's algorithm:
/// repeatedly emit a node of in-degree 0 and remove its out-links.
///
/// If the graph has a cycle, iteration terminates without covering all nodes.
/// Undirected edges count as arcs in both directions, so only isolated nodes of an
/// undirected graph are emitted.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    stack: Vec<Node>,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();
        let stack = graph
            .vertices()
            .filter(|&u| in_degs[u as usize] == 0)
            .collect();

        Self {
            graph,
            in_degs,
            stack,
        }
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.stack.pop()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.stack.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.graph.len()))
    }
}

impl<G> RankFromOrder for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    fn number_of_ranked_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

/// Tri-color state of a node during a depth-first search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VisitState {
    /// Not discovered yet (white)
    #[default]
    Unvisited,
    /// Discovered and still on the DFS stack (gray)
    InProgress,
    /// All links explored (black)
    Done,
}

/// The tree edge through which a node was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeLink {
    /// The DFS parent
    pub node: Node,
    /// Id of the edge from `node` to the child
    pub id: EdgeId,
}

/// Events emitted by [`DepthFirstEvents`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// `node` was reached for the first time, either as a root (`parent == None`) or via a tree edge
    Discover {
        node: Node,
        parent: Option<TreeLink>,
    },
    /// `node` has a link to an already discovered node.
    ///
    /// - `state == InProgress`: `link.to` is an ancestor of `node` (or `node` itself)
    /// - `state == Done`: `link.to` is a finished descendant or lies in an earlier subtree
    ///
    /// `to_parent` is *true* iff `link` is the very edge through which `node` was discovered,
    /// i.e. the mirrored tree edge of an undirected graph. Parallel edges have different ids
    /// and hence are never flagged.
    NonTreeLink {
        node: Node,
        link: Link,
        state: VisitState,
        to_parent: bool,
    },
    /// All links of `node` have been explored
    Finish {
        node: Node,
        parent: Option<TreeLink>,
    },
}

struct Frame<'a, G>
where
    G: AdjacencyList + 'a,
{
    node: Node,
    parent: Option<TreeLink>,
    links: G::LinkIter<'a>,
}

/// Depth-first search with an explicit call stack.
///
/// Each frame parks the link iterator of its node, so the search resumes exactly where it
/// left off after a child finishes. The iterator covers the whole graph: whenever the
/// stack runs empty, the search restarts at the next unvisited root. Roots are tried in
/// the order `0..n` unless configured with [`DepthFirstEvents::with_roots`].
///
/// # Examples
/// ```
/// use walkgraphs::{prelude::*, algo::*};
///
/// let g = AdjArrayGraph::from_edges(2, true, [(0, 1)]);
/// let finished: Vec<_> = g
///     .depth_first_events()
///     .filter_map(|event| match event {
///         DfsEvent::Finish { node, .. } => Some(node),
///         _ => None,
///     })
///     .collect();
/// assert_eq!(finished, vec![1, 0]);
/// ```
pub struct DepthFirstEvents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    states: Vec<VisitState>,
    call_stack: Vec<Frame<'a, G>>,
    roots: Vec<Node>,
    next_root: usize,
}

impl<'a, G> DepthFirstEvents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            states: vec![VisitState::Unvisited; graph.len()],
            call_stack: Vec::with_capacity(32),
            roots: graph.vertices().collect(),
            next_root: 0,
        }
    }

    /// Restricts and orders the nodes from which new DFS trees are started.
    /// Nodes not reachable from any root are never reported.
    /// ** Panics (during iteration) if a root is `>= n` **
    pub fn with_roots<I>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.roots = roots.into_iter().collect();
        self.next_root = 0;
        self
    }

    /// Returns the current tri-color state of `u`
    pub fn state_of(&self, u: Node) -> VisitState {
        self.states[u as usize]
    }

    /// Returns the nodes currently on the DFS stack, from the root of the current tree
    /// to the most recently discovered node. These are exactly the nodes in state
    /// [`VisitState::InProgress`].
    pub fn active_path(&self) -> impl Iterator<Item = Node> + '_ {
        self.call_stack.iter().map(|frame| frame.node)
    }

    /// Returns the path on the DFS stack from the ancestor `u` down to the current node,
    /// or `None` if `u` is not on the stack
    pub fn active_path_from(&self, u: Node) -> Option<Vec<Node>> {
        let start = self.call_stack.iter().position(|frame| frame.node == u)?;
        Some(self.call_stack[start..].iter().map(|f| f.node).collect())
    }

    /// Number of nodes currently on the DFS stack
    pub fn depth(&self) -> usize {
        self.call_stack.len()
    }

    fn enter(&mut self, node: Node, parent: Option<TreeLink>) -> DfsEvent {
        debug_assert_eq!(self.states[node as usize], VisitState::Unvisited);
        self.states[node as usize] = VisitState::InProgress;
        self.call_stack.push(Frame {
            node,
            parent,
            links: self.graph.links_of(node),
        });
        DfsEvent::Discover { node, parent }
    }

    fn next_unvisited_root(&mut self) -> Option<Node> {
        while let Some(&u) = self.roots.get(self.next_root) {
            self.next_root += 1;
            if self.states[u as usize] == VisitState::Unvisited {
                return Some(u);
            }
        }
        None
    }
}

impl<G> Iterator for DepthFirstEvents<'_, G>
where
    G: AdjacencyList,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(frame) = self.call_stack.last_mut() else {
            let root = self.next_unvisited_root()?;
            return Some(self.enter(root, None));
        };

        let node = frame.node;
        let parent = frame.parent;

        if let Some(link) = frame.links.next() {
            let state = self.states[link.to as usize];
            if state == VisitState::Unvisited {
                return Some(self.enter(link.to, Some(TreeLink { node, id: link.id })));
            }

            return Some(DfsEvent::NonTreeLink {
                node,
                link,
                state,
                to_parent: parent.is_some_and(|p| p.id == link.id),
            });
        }

        self.call_stack.pop()?;
        self.states[node as usize] = VisitState::Done;
        Some(DfsEvent::Finish { node, parent })
    }
}

/// Provides convenient traversal methods (BFS, DFS, topological order, etc.)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(2, false, [(0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns a stack-based iterator over all nodes reachable from `start`
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor of each node
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a stack-based iterator starting from `start` that additionally
    /// yields the predecessor of each node
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns the event stream of a depth-first search over the whole graph
    fn depth_first_events(&self) -> DepthFirstEvents<'_, Self> {
        DepthFirstEvents::new(self)
    }

    /// Returns an iterator yielding nodes in a topological order (Kahn).
    /// Terminates early if the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use walkgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArrayGraph::from_edges(3, true, [(0, 1), (1, 2)]);
    /// let order: Vec<_> = g.topo_search().collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns *true* if there is a path from `u` to `v` (every node reaches itself)
    fn is_reachable(&self, u: Node, v: Node) -> bool {
        u == v || self.bfs(u).is_node_reachable(v)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
