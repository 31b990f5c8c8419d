//! Board state model: tile configurations and the search tree over them.

use std::fmt;

use crate::PuzzleError;

/// One tile value; 0 is the blank.
pub type Tile = u16;

/// Index of a node inside its [PuzzleTree] arena.
pub type NodeId = usize;

/// The move that produced a state: the direction the blank travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Initial,
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Fixed generation order for children; moves that would leave the
    /// board are skipped rather than represented.
    pub const MOVES: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Action::Initial => "Initial",
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// One board configuration in the search tree.
///
/// Immutable after construction except for the cached `children` list,
/// which [PuzzleTree::expand] fills exactly once.
#[derive(Debug)]
pub struct PuzzleState {
    n: usize,
    config: Vec<Tile>,
    blank: usize,
    cost: usize,
    action: Action,
    parent: Option<NodeId>,
    children: Option<Vec<NodeId>>,
}

impl PuzzleState {
    fn new(
        config: Vec<Tile>,
        n: usize,
        blank: usize,
        parent: Option<NodeId>,
        action: Action,
        cost: usize,
    ) -> Self {
        debug_assert_eq!(config[blank], 0);
        PuzzleState {
            n,
            config,
            blank,
            cost,
            action,
            parent,
            children: None,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn config(&self) -> &[Tile] {
        &self.config
    }

    /// Moves between the root configuration and this one.
    pub fn cost(&self) -> usize {
        self.cost
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Whether this configuration is the sorted goal arrangement.
    pub fn is_goal(&self) -> bool {
        self.config.iter().enumerate().all(|(i, &t)| t as usize == i)
    }

    fn blank_row(&self) -> usize {
        self.blank / self.n
    }

    fn blank_col(&self) -> usize {
        self.blank % self.n
    }

    /// The configuration after sliding the blank one step, along with the
    /// blank's new index, or `None` when the move would leave the board.
    fn shifted(&self, action: Action) -> Option<(Vec<Tile>, usize)> {
        let target = match action {
            Action::Up if self.blank_row() > 0 => self.blank - self.n,
            Action::Down if self.blank_row() < self.n - 1 => self.blank + self.n,
            Action::Left if self.blank_col() > 0 => self.blank - 1,
            Action::Right if self.blank_col() < self.n - 1 => self.blank + 1,
            _ => return None,
        };

        let mut config = self.config.clone();
        config.swap(self.blank, target);
        Some((config, target))
    }
}

impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.config.chunks(self.n) {
            for (i, tile) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Must hold each of 0..n*n exactly once; returns the blank's index.
fn validate(config: &[Tile], n: usize) -> Result<usize, PuzzleError> {
    if n < 2 || n * n != config.len() {
        return Err(PuzzleError::DimensionMismatch {
            n,
            len: config.len(),
        });
    }

    let mut seen = vec![false; config.len()];
    let mut blank = 0;
    for (i, &tile) in config.iter().enumerate() {
        let value = tile as usize;
        if value >= config.len() || seen[value] {
            return Err(PuzzleError::InvalidTile { tile });
        }
        seen[value] = true;
        if value == 0 {
            blank = i;
        }
    }

    Ok(blank)
}

/// Append-only arena of [PuzzleState] nodes rooted at the initial
/// configuration.
///
/// Children and parents reference each other by index, keeping the node
/// graph an acyclic tree with non-owning back-edges. Nodes are never
/// removed: everything generated during a search stays resident until
/// the tree is dropped, so memory grows with the states visited and is
/// bounded only by the reachable state space.
#[derive(Debug)]
pub struct PuzzleTree {
    nodes: Vec<PuzzleState>,
}

impl PuzzleTree {
    /// Validates `config` and roots the arena at it.
    pub fn new(config: Vec<Tile>, n: usize) -> Result<Self, PuzzleError> {
        let blank = validate(&config, n)?;
        let root = PuzzleState::new(config, n, blank, None, Action::Initial, 0);
        Ok(PuzzleTree { nodes: vec![root] })
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &PuzzleState {
        &self.nodes[id]
    }

    /// Number of states materialized so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Children of `id`, generating them on first call.
    ///
    /// Moves are tried in Up, Down, Left, Right order; moves that would
    /// leave the board contribute nothing. The resulting list is cached
    /// on the node and every later call returns it unchanged.
    pub fn expand(&mut self, id: NodeId) -> Vec<NodeId> {
        if let Some(children) = &self.nodes[id].children {
            return children.clone();
        }

        let mut children = Vec::with_capacity(4);
        for &action in Action::MOVES.iter() {
            if let Some((config, blank)) = self.nodes[id].shifted(action) {
                let child = PuzzleState::new(
                    config,
                    self.nodes[id].n,
                    blank,
                    Some(id),
                    action,
                    self.nodes[id].cost + 1,
                );
                children.push(self.nodes.len());
                self.nodes.push(child);
            }
        }

        self.nodes[id].children = Some(children.clone());
        children
    }

    /// Ordered moves from the root to `id`, rebuilt by walking parent
    /// links backwards and reversing.
    pub fn path(&self, id: NodeId) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.nodes[id].cost);
        let mut cursor = Some(id);
        while let Some(i) = cursor {
            let node = &self.nodes[i];
            if node.parent.is_some() {
                actions.push(node.action);
            }
            cursor = node.parent;
        }
        actions.reverse();
        actions
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tree(config: Vec<Tile>) -> PuzzleTree {
        PuzzleTree::new(config, 3).unwrap()
    }

    #[test]
    fn rejects_wrong_length() {
        let result = PuzzleTree::new(vec![0, 1, 2, 3, 4, 5], 3);
        assert!(matches!(
            result,
            Err(PuzzleError::DimensionMismatch { n: 3, len: 6 })
        ));
    }

    #[test]
    fn rejects_boards_smaller_than_two() {
        let result = PuzzleTree::new(vec![0], 1);
        assert!(matches!(result, Err(PuzzleError::DimensionMismatch { .. })));
    }

    #[test]
    fn rejects_duplicate_tiles() {
        // Duplicate 2, missing 3.
        let result = PuzzleTree::new(vec![0, 1, 2, 2, 4, 5, 6, 7, 8], 3);
        assert!(matches!(result, Err(PuzzleError::InvalidTile { tile: 2 })));
    }

    #[test]
    fn rejects_out_of_range_tiles() {
        let result = PuzzleTree::new(vec![0, 1, 2, 3, 4, 5, 6, 7, 9], 3);
        assert!(matches!(result, Err(PuzzleError::InvalidTile { tile: 9 })));
    }

    #[test]
    fn goal_test_matches_sorted_arrangement() {
        assert!(tree(vec![0, 1, 2, 3, 4, 5, 6, 7, 8]).node(0).is_goal());
        assert!(!tree(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]).node(0).is_goal());
    }

    #[test]
    fn center_blank_has_four_children_in_fixed_order() {
        let mut t = tree(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let root = t.root();
        let children = t.expand(root);

        let actions: Vec<Action> = children.iter().map(|&c| t.node(c).action()).collect();
        assert_eq!(
            actions,
            vec![Action::Up, Action::Down, Action::Left, Action::Right]
        );

        let configs: Vec<&[Tile]> = children.iter().map(|&c| t.node(c).config()).collect();
        assert_eq!(configs[0], &[1, 0, 3, 4, 2, 5, 6, 7, 8]);
        assert_eq!(configs[1], &[1, 2, 3, 4, 7, 5, 6, 0, 8]);
        assert_eq!(configs[2], &[1, 2, 3, 0, 4, 5, 6, 7, 8]);
        assert_eq!(configs[3], &[1, 2, 3, 4, 5, 0, 6, 7, 8]);
    }

    #[test]
    fn corner_blank_has_two_children() {
        let mut t = tree(vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let root = t.root();
        let children = t.expand(root);

        let actions: Vec<Action> = children.iter().map(|&c| t.node(c).action()).collect();
        assert_eq!(actions, vec![Action::Down, Action::Right]);
    }

    #[test]
    fn edge_blank_has_three_children() {
        let mut t = tree(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]);
        let root = t.root();
        assert_eq!(t.expand(root).len(), 3);
    }

    #[test]
    fn children_cost_one_more_than_their_parent() {
        let mut t = tree(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let root = t.root();
        for child in t.expand(root) {
            assert_eq!(t.node(child).cost(), 1);
            assert_eq!(t.node(child).parent(), Some(root));
        }
    }

    #[test]
    fn children_stay_permutations() {
        let mut t = tree(vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
        let root = t.root();
        for child in t.expand(root) {
            let mut sorted: Vec<Tile> = t.node(child).config().to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..9).collect::<Vec<Tile>>());
        }
    }

    #[test]
    fn expand_is_idempotent() {
        let mut t = tree(vec![1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let root = t.root();

        let first = t.expand(root);
        let generated = t.len();
        let second = t.expand(root);

        assert_eq!(first, second);
        assert_eq!(t.len(), generated);
    }

    #[test]
    fn path_walks_back_to_the_root() {
        let mut t = tree(vec![1, 2, 0, 3, 4, 5, 6, 7, 8]);
        let root = t.root();
        assert_eq!(t.path(root), Vec::new());

        let left = t.expand(root)[1];
        assert_eq!(t.node(left).action(), Action::Left);
        let again = t
            .expand(left)
            .into_iter()
            .find(|&c| t.node(c).action() == Action::Left)
            .unwrap();

        assert_eq!(t.path(again), vec![Action::Left, Action::Left]);
        assert_eq!(t.node(again).cost(), 2);
        assert!(t.node(again).is_goal());
    }

    #[test]
    fn displays_as_a_grid() {
        let t = tree(vec![1, 2, 5, 3, 4, 0, 6, 7, 8]);
        assert_eq!(t.node(0).to_string(), "1 2 5\n3 4 0\n6 7 8\n");
    }

    #[test]
    fn supports_larger_boards() {
        let config: Vec<Tile> = (0..16).collect();
        let mut t = PuzzleTree::new(config, 4).unwrap();
        let root = t.root();
        assert!(t.node(root).is_goal());
        assert_eq!(t.expand(root).len(), 2);
    }
}
