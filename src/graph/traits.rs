use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Zero;

/// Trait alias for vertex identifiers.
///
/// Anything hashable with a total order works as a vertex: integer indices,
/// string labels, interned symbols. The order is only used to break ties
/// between frontier entries of equal priority.
pub trait VertexId: Clone + Eq + Hash + Ord + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Trait alias for edge weights.
///
/// `Zero` supplies the additive identity for the source distance; `Ord` is
/// what the frontier orders by. Integer weights satisfy this directly,
/// floating-point weights via `ordered_float::OrderedFloat`.
pub trait Weight: Copy + Ord + Zero + Debug {}

impl<T> Weight for T where T: Copy + Ord + Zero + Debug {}

/// Trait representing a weighted graph in adjacency-list form
pub trait Graph<V, W>: Debug
where
    V: VertexId,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed arcs in the graph
    fn arc_count(&self) -> usize;

    /// Returns an iterator over all vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the (neighbor, weight) arcs leaving a vertex
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an arc between the two vertices
    fn has_arc(&self, from: &V, to: &V) -> bool;

    /// Gets the weight of an arc if one exists; the minimum when parallel
    /// arcs are present
    fn arc_weight(&self, from: &V, to: &V) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Adds a vertex to the graph; returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a single directed arc between existing vertices
    fn add_arc(&mut self, from: V, to: V, weight: W) -> crate::Result<()>;

    /// Adds an undirected edge: two arcs of equal weight, one per direction
    fn add_edge(&mut self, u: V, v: V, weight: W) -> crate::Result<()>;

    /// Removes all arcs from `from` to `to`; returns true if any were removed
    fn remove_arc(&mut self, from: &V, to: &V) -> bool;
}
