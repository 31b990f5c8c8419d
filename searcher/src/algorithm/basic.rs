pub use bfs::{bfs, BreadthFirstSearcher, BreadthFrontier};
pub use dfs::{dfs, DepthFirstSearcher, DepthFrontier};

mod bfs {
    use std::collections::{HashSet, VecDeque};
    use std::default::Default;

    use crate::algorithm::{Frontier, SearchAlgorithm, Solution};
    use crate::errors::Result;
    use crate::traits::SearchState;

    /// First-in, first-out frontier: visitation order is insertion order.
    #[derive(Debug)]
    pub struct BreadthFrontier<S>
    where
        S: SearchState,
    {
        queue: VecDeque<S>,
        members: HashSet<S::Key>,
    }

    impl<S> Default for BreadthFrontier<S>
    where
        S: SearchState,
    {
        fn default() -> Self {
            BreadthFrontier {
                queue: VecDeque::new(),
                members: HashSet::new(),
            }
        }
    }

    impl<S> Frontier for BreadthFrontier<S>
    where
        S: SearchState,
    {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            let item = self.queue.pop_front()?;
            self.members.remove(&item.key());
            Some(item)
        }

        fn push(&mut self, item: Self::Candidate) {
            self.members.insert(item.key());
            self.queue.push_back(item);
        }

        fn contains(&self, key: &S::Key) -> bool {
            self.members.contains(key)
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    pub type BreadthFirstSearcher<S> = SearchAlgorithm<S, BreadthFrontier<S>>;

    /// Breadth-first search, visiting candidates in the order they were
    /// generated. With unit step costs the first goal popped is reached
    /// by a minimum-length path.
    pub fn bfs<S>(origin: S) -> Result<Solution<S>>
    where
        S: SearchState,
    {
        BreadthFirstSearcher::new(origin).run()
    }
}

mod dfs {
    use std::collections::{HashSet, VecDeque};
    use std::default::Default;

    use crate::algorithm::{Frontier, SearchAlgorithm, Solution};
    use crate::errors::Result;
    use crate::traits::SearchState;

    /// Last-in, first-out frontier: the most recent insertion is visited
    /// next.
    #[derive(Debug)]
    pub struct DepthFrontier<S>
    where
        S: SearchState,
    {
        queue: VecDeque<S>,
        members: HashSet<S::Key>,
    }

    impl<S> Default for DepthFrontier<S>
    where
        S: SearchState,
    {
        fn default() -> Self {
            DepthFrontier {
                queue: VecDeque::new(),
                members: HashSet::new(),
            }
        }
    }

    impl<S> Frontier for DepthFrontier<S>
    where
        S: SearchState,
    {
        type Candidate = S;

        fn pop(&mut self) -> Option<Self::Candidate> {
            let item = self.queue.pop_front()?;
            self.members.remove(&item.key());
            Some(item)
        }

        fn push(&mut self, item: Self::Candidate) {
            self.members.insert(item.key());
            self.queue.push_front(item);
        }

        fn contains(&self, key: &S::Key) -> bool {
            self.members.contains(key)
        }

        fn len(&self) -> usize {
            self.queue.len()
        }

        /// Batches are stacked in reverse so that siblings still pop in
        /// generation order.
        fn extend(&mut self, batch: Vec<Self::Candidate>) {
            for item in batch.into_iter().rev() {
                self.push(item);
            }
        }
    }

    pub type DepthFirstSearcher<S> = SearchAlgorithm<S, DepthFrontier<S>>;

    /// Depth-first search, following each branch as far as it goes before
    /// backtracking. The returned path is valid but not necessarily
    /// minimal.
    pub fn dfs<S>(origin: S) -> Result<Solution<S>>
    where
        S: SearchState,
    {
        DepthFirstSearcher::new(origin).run()
    }
}
