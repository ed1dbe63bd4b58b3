/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in a directed graph. Each edge is assigned a
//! non-negative weight (or length) $w \colon E \to \mathbb{R}_+$.
//!
//! The weights are *not* checked. On a graph with negative weights the
//! results are unspecified (the algorithm terminates, but the distances may be
//! wrong). Use [`validate_nonnegative`] to check the weights explicitly.
//!
//! Dijkstra's algorithm is essentially an [A*-search][crate::search::astar]
//! using the zero potential (heuristic) for all nodes.
//!
//! # Example
//!
//! ```
//! use rs_pathfind::shortestpath::dijkstra;
//! use std::collections::HashMap;
//!
//! let mut g: HashMap<&str, HashMap<&str, u32>> = HashMap::new();
//! g.entry("A").or_default().extend(vec![("B", 4), ("C", 2)]);
//! g.entry("B").or_default().extend(vec![("C", 1), ("D", 5)]);
//! g.entry("C").or_default().extend(vec![("D", 8)]);
//! g.entry("D").or_default();
//!
//! let tree = dijkstra::shortest_paths(&g, "A");
//! assert_eq!(tree.dist(&"D"), Some(9));
//! assert_eq!(tree.pred(&"D"), Some(&"B"));
//!
//! let (dist, path) = dijkstra::find_path(&g, "A", "D").unwrap();
//! assert_eq!(dist, 9);
//! assert_eq!(path, vec!["A", "B", "D"]);
//! ```

use crate::adjacencies::Adjacencies;
use crate::error::{Error, Result};
use crate::search::astar::{self, AStar, AStarHeuristic};
use crate::shortestpath::ShortestPaths;

use crate::num::traits::Zero;
use log::debug;

/// Internal type used when no heuristic is required.
///
/// Used for standard Dijkstra.
#[derive(Clone, Copy, Default)]
pub struct NoHeur;

impl<N, D> AStarHeuristic<N, D> for NoHeur
where
    D: Zero,
{
    fn call(&self, _u: &N) -> D {
        D::zero()
    }
}

/// Dijkstra search iterator.
pub type Dijkstra<A> = AStar<A, NoHeur>;

/// Start and return a Dijkstra-iterator.
///
/// The returned iterator handles the nodes in the order of a Dijkstra-search.
/// For each node it returns the node, its predecessor on a shortest path and
/// the distance to the start node. The first element is the start node itself.
///
/// # Parameters
///
/// - `adj`: adjacency information for the graph
/// - `src`: the source node at which the search should start.
pub fn start<A>(adj: A, src: A::Node) -> Dijkstra<A>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
{
    astar::start(adj, src, NoHeur)
}

/// Compute the shortest paths from `src` to all reachable nodes.
///
/// Unreachable nodes are missing in the returned tables.
pub fn shortest_paths<A>(adj: A, src: A::Node) -> ShortestPaths<A::Node, A::Weight>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
{
    let mut tree = ShortestPaths::new();
    for (u, pred, d) in start(adj, src) {
        tree.set(u, pred, d);
    }
    debug!("Dijkstra settled {} nodes", tree.len());
    tree
}

/// Return the distance and a shortest path from `src` to `snk`.
///
/// This variant computes the shortest paths to *all* nodes first, see
/// [`find_path`] for a variant stopping as soon as `snk` has been reached.
///
/// # Errors
/// Returns [`Error::NoPath`] if `snk` is not reachable from `src`.
pub fn path_to<A>(adj: A, src: A::Node, snk: A::Node) -> Result<(A::Weight, Vec<A::Node>), A::Node>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
{
    let tree = shortest_paths(adj, src.clone());
    match (tree.dist(&snk), tree.path_to(&snk)) {
        (Some(d), Some(path)) => Ok((d, path)),
        _ => Err(Error::NoPath { src, dst: snk }),
    }
}

/// Return the distance and a shortest path from `src` to `snk`.
///
/// The search stops as soon as `snk` has been handled, the result is the same
/// as the one of [`path_to`].
///
/// # Errors
/// Returns [`Error::NoPath`] if `snk` is not reachable from `src`.
pub fn find_path<A>(adj: A, src: A::Node, snk: A::Node) -> Result<(A::Weight, Vec<A::Node>), A::Node>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
{
    astar::find_path(adj, src, snk, NoHeur)
}

/// Check that all edge weights are non-negative.
///
/// This check is *not* done by the algorithms in this module, it must be
/// called explicitly if required.
///
/// # Errors
/// Returns [`Error::NegativeWeight`] for the first negative edge found.
pub fn validate_nonnegative<A>(adj: A) -> Result<(), A::Node>
where
    A: Adjacencies,
    A::Weight: PartialOrd + Zero,
{
    let zero = A::Weight::zero();
    for u in adj.nodes() {
        for (v, w) in adj.neighs(&u) {
            if w < zero {
                return Err(Error::NegativeWeight { src: u, dst: v });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{find_path, path_to, shortest_paths, start, validate_nonnegative};
    use crate::error::Error;
    use std::collections::{BTreeMap, HashMap};

    fn graph(edges: &[(&'static str, &'static str, f64)]) -> HashMap<&'static str, HashMap<&'static str, f64>> {
        let mut g: HashMap<_, HashMap<_, _>> = HashMap::new();
        for &(u, v, w) in edges {
            g.entry(u).or_default().insert(v, w);
            g.entry(v).or_default();
        }
        g
    }

    #[test]
    fn test_distances() {
        let g = graph(&[
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("B", "C", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
        ]);
        let tree = shortest_paths(&g, "A");
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.dist(&"A"), Some(0.0));
        assert_eq!(tree.dist(&"B"), Some(4.0));
        assert_eq!(tree.dist(&"C"), Some(2.0));
        assert_eq!(tree.dist(&"D"), Some(9.0));
        assert_eq!(tree.pred(&"D"), Some(&"B"));
        assert_eq!(tree.pred(&"A"), None);
    }

    #[test]
    fn test_unreachable() {
        let g = graph(&[("A", "B", 1.0), ("C", "A", 1.0)]);
        let tree = shortest_paths(&g, "A");
        assert!(!tree.reached(&"C"));
        assert_eq!(tree.dist(&"C"), None);
        assert_eq!(path_to(&g, "A", "C"), Err(Error::NoPath { src: "A", dst: "C" }));
        assert_eq!(find_path(&g, "A", "C"), Err(Error::NoPath { src: "A", dst: "C" }));
    }

    #[test]
    fn test_early_exit() {
        let g = graph(&[("s", "a", 1.0), ("a", "t", 1.0), ("s", "b", 5.0), ("b", "c", 1.0)]);
        let (d, path) = find_path(&g, "s", "t").unwrap();
        assert_eq!(d, 2.0);
        assert_eq!(path, vec!["s", "a", "t"]);
        assert_eq!(path_to(&g, "s", "t"), Ok((d, path)));

        // 'b' and 'c' are farther away than 't'
        let settled = start(&g, "s").take_while(|&(u, _, _)| u != "t").count();
        assert_eq!(settled, 2);
    }

    #[test]
    fn test_same_node() {
        let g = graph(&[("A", "B", 1.0)]);
        assert_eq!(path_to(&g, "B", "B"), Ok((0.0, vec!["B"])));
        assert_eq!(find_path(&g, "B", "B"), Ok((0.0, vec!["B"])));
        // not even part of the graph
        assert_eq!(find_path(&g, "Z", "Z"), Ok((0.0, vec!["Z"])));
    }

    #[test]
    fn test_unit_weights() {
        let mut g = BTreeMap::new();
        g.insert(1, vec![2, 3]);
        g.insert(2, vec![4]);
        g.insert(3, vec![4]);
        g.insert(4, vec![5]);
        let tree = shortest_paths(&g, 1);
        assert_eq!(tree.dist(&5), Some(3));
        assert_eq!(tree.path_to(&5).map(|p| p.len()), Some(4));
    }

    #[test]
    fn test_validate() {
        let g = graph(&[("A", "B", 1.0), ("B", "C", 0.0)]);
        assert_eq!(validate_nonnegative(&g), Ok(()));
        let g = graph(&[("A", "B", 1.0), ("B", "C", -0.5)]);
        assert_eq!(validate_nonnegative(&g), Err(Error::NegativeWeight { src: "B", dst: "C" }));
    }
}
