use std::fmt::Debug;
use std::hash::Hash;

/// Provides an interface for conducting searches.
///
/// A candidate is one node of the lazily generated search graph. The
/// driver asks it whether it passes the goal test, and if not, for the
/// candidates reachable one step further on.
pub trait SearchCandidate: Debug + Sized {
    /// Indicates that this candidate satisfies the goal test, which
    /// stops the search and makes this candidate the result.
    fn is_goal(&self) -> bool;

    /// Produces the candidates one step beyond this one, in a fixed
    /// generation order.
    fn children(&self) -> Vec<Self>;

    /// Number of steps between this candidate and the search origin.
    /// Increases by exactly one along every parent-to-child edge.
    fn depth(&self) -> usize;
}

/// A candidate with a canonical, hashable key.
///
/// Two candidates with equal keys occupy the same position in the search
/// space. The driver and the frontiers use keys to keep at most one live
/// copy of any position queued or explored.
pub trait SearchState: SearchCandidate {
    type Key: Debug + Clone + Eq + Hash;

    fn key(&self) -> Self::Key;
}

/// An interface for searching when a heuristic can be provided.
pub trait SearchHeuristic: SearchState {
    /// Estimated total path length through this candidate: the depth
    /// already travelled plus a guess at the remainder. The guess must
    /// never exceed the true remaining distance for best-first search to
    /// return a minimal path.
    fn estimate(&self) -> usize;
}
