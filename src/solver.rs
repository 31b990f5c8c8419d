//! Runs the three search strategies over a puzzle tree.

use std::cell::RefCell;
use std::rc::Rc;

use searcher::{SearchCandidate, SearchError, SearchHeuristic, SearchState, Solution};

use crate::board::{Action, NodeId, PuzzleTree, Tile};
use crate::heuristic::manhattan;

/// Handle to one node of the shared arena, cheap to clone and move
/// through the generic search driver by value.
#[derive(Debug, Clone)]
pub struct PuzzleCandidate {
    tree: Rc<RefCell<PuzzleTree>>,
    id: NodeId,
}

impl PuzzleCandidate {
    fn root(tree: PuzzleTree) -> Self {
        let id = tree.root();
        PuzzleCandidate {
            tree: Rc::new(RefCell::new(tree)),
            id,
        }
    }
}

impl SearchCandidate for PuzzleCandidate {
    fn is_goal(&self) -> bool {
        self.tree.borrow().node(self.id).is_goal()
    }

    fn children(&self) -> Vec<Self> {
        let ids = self.tree.borrow_mut().expand(self.id);
        ids.into_iter()
            .map(|id| PuzzleCandidate {
                tree: Rc::clone(&self.tree),
                id,
            })
            .collect()
    }

    fn depth(&self) -> usize {
        self.tree.borrow().node(self.id).cost()
    }
}

impl SearchState for PuzzleCandidate {
    type Key = Vec<Tile>;

    fn key(&self) -> Self::Key {
        self.tree.borrow().node(self.id).config().to_vec()
    }
}

impl SearchHeuristic for PuzzleCandidate {
    fn estimate(&self) -> usize {
        let tree = self.tree.borrow();
        let node = tree.node(self.id);
        node.cost() + manhattan(node.config(), node.n())
    }
}

/// A solved run, ready for the report layer.
#[derive(Debug)]
pub struct Solved {
    /// Ordered moves from the initial configuration to the goal.
    pub path: Vec<Action>,
    /// Length of that path; equals the goal node's cost.
    pub cost: usize,
    /// Nodes whose children were generated during the search.
    pub expanded: usize,
    /// Deepest node accepted into the frontier.
    pub max_depth: usize,
}

/// What a finished search produced.
#[derive(Debug)]
pub enum SearchOutcome {
    Solved(Solved),
    /// The frontier emptied first: no sequence of moves reaches the
    /// goal from the initial configuration.
    Exhausted { expanded: usize },
}

pub fn breadth_first(tree: PuzzleTree) -> SearchOutcome {
    finish(searcher::bfs(PuzzleCandidate::root(tree)))
}

pub fn depth_first(tree: PuzzleTree) -> SearchOutcome {
    finish(searcher::dfs(PuzzleCandidate::root(tree)))
}

pub fn a_star(tree: PuzzleTree) -> SearchOutcome {
    finish(searcher::astar(PuzzleCandidate::root(tree)))
}

fn finish(result: searcher::SearchResult<Solution<PuzzleCandidate>>) -> SearchOutcome {
    match result {
        Ok(solution) => {
            let tree = solution.goal.tree.borrow();
            let path = tree.path(solution.goal.id);
            let cost = tree.node(solution.goal.id).cost();
            SearchOutcome::Solved(Solved {
                path,
                cost,
                expanded: solution.stats.expanded,
                max_depth: solution.stats.max_depth,
            })
        }
        Err(SearchError::Exhausted(expanded)) => SearchOutcome::Exhausted { expanded },
    }
}
