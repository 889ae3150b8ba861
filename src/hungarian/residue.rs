//! Residue graph of an assignment
//! - Vertex
//! - ResidueGraph
//!
//! An assignment is optimal iff its residue graph has no negative cycle.
//! This gives a check of the solver output which does not depend on the solver itself.
//!
use super::assignment::Assignment;
use super::cost::CostLike;
use super::matrix::CostMatrix;
use petgraph::algo::find_negative_cycle;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

/// Node of the bipartite residue graph
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Vertex {
    Row(usize),
    Column(usize),
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Vertex::Row(i) => write!(f, "r{}", i),
            Vertex::Column(j) => write!(f, "c{}", j),
        }
    }
}

/// ResidueGraph definition
///
/// node `i` is `Row(i)` and node `n + j` is `Column(j)`.
pub type ResidueGraph = DiGraph<Vertex, f64>;

///
/// Convert CostMatrix with Assignment into ResidueGraph.
///
/// For each pair (i, j) with cost c
/// ```text
/// Row(i) -> Column(j)  weight +c  if i is not assigned to j
/// Column(j) -> Row(i)  weight -c  if i is assigned to j
/// ```
///
/// A cycle in this graph exchanges assigned pairs, and its weight is the change of the total cost.
///
pub fn assignment_to_residue<C: CostLike>(
    cost: &CostMatrix<C>,
    assignment: &Assignment,
) -> ResidueGraph {
    assert_eq!(
        assignment.len(),
        cost.size(),
        "assignment (len={}) does not match matrix (n={})",
        assignment.len(),
        cost.size()
    );
    let n = cost.size();
    let mut graph = ResidueGraph::with_capacity(2 * n, n * n);
    for i in 0..n {
        graph.add_node(Vertex::Row(i));
    }
    for j in 0..n {
        graph.add_node(Vertex::Column(j));
    }

    for i in 0..n {
        for j in 0..n {
            let c = cost[(i, j)].to_f64();
            let (row, column) = (NodeIndex::new(i), NodeIndex::new(n + j));
            if assignment[i] == j {
                graph.add_edge(column, row, -c);
            } else {
                graph.add_edge(row, column, c);
            }
        }
    }
    graph
}

///
/// Check if the assignment has the minimum total cost,
/// i.e. no exchange along a cycle can decrease the cost.
///
/// Returns false if the assignment is not a permutation of the matrix size.
///
pub fn is_optimal<C: CostLike>(cost: &CostMatrix<C>, assignment: &Assignment) -> bool {
    if assignment.len() != cost.size() || !assignment.is_permutation() {
        return false;
    }
    if cost.size() < 2 {
        return true;
    }
    let graph = assignment_to_residue(cost, assignment);
    // every node is reachable from Row(0) in a complete bipartite residue graph with n >= 2
    find_negative_cycle(&graph, NodeIndex::new(0)).is_none()
}

///
/// Render the residue graph in graphviz dot format
///
pub fn to_dot(graph: &ResidueGraph) -> String {
    format!("{}", Dot::new(graph))
}
