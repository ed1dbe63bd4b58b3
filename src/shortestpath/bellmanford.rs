// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! The shortest-path algorithm by Moore-Bellman-Ford.
//!
//! In contrast to [Dijkstra's algorithm][crate::shortestpath::dijkstra] the
//! edge weights may be negative. The algorithm performs up to $|V|-1$ passes
//! over all edges, relaxing each edge $(u,v)$ with $d(u) + w(u,v) < d(v)$. A
//! pass without any update terminates the algorithm early. If some edge can
//! still be relaxed after $|V|-1$ passes, the graph contains a cycle of
//! negative weight.
//!
//! The number of nodes $|V|$ counts the nodes with an adjacency entry as well
//! as the nodes that only occur as neighbors.
//!
//! # Example
//!
//! ```
//! use rs_pathfind::shortestpath::bellmanford;
//! use rs_pathfind::error::Error;
//! use std::collections::BTreeMap;
//!
//! let mut g: BTreeMap<char, BTreeMap<char, i32>> = BTreeMap::new();
//! g.entry('a').or_default().insert('b', 4);
//! g.entry('a').or_default().insert('c', 2);
//! g.entry('b').or_default().insert('d', -3);
//! g.entry('c').or_default().insert('d', 1);
//!
//! let tree = bellmanford::shortest_paths(&g, 'a').unwrap();
//! assert_eq!(tree.dist(&'d'), Some(1));
//! assert_eq!(tree.path_to(&'d'), Some(vec!['a', 'b', 'd']));
//! assert_eq!(bellmanford::negative_cycle(&g), None);
//!
//! // close a negative cycle
//! g.entry('d').or_default().insert('a', -2);
//! assert_eq!(bellmanford::shortest_paths(&g, 'a'), Err(Error::NegativeCycle));
//! assert_eq!(bellmanford::negative_cycle(&g), Some(vec!['a', 'b', 'd', 'a']));
//! ```

use crate::adjacencies::Adjacencies;
use crate::error::{Error, Result};
use crate::shortestpath::ShortestPaths;

use crate::num::traits::Zero;
use log::{debug, trace};

use std::collections::HashSet;
use std::hash::Hash;

/// An edge `(u, v, w)` of the graph.
type Edge<N, W> = (N, N, W);

/// Collect all nodes and edges of the graph.
///
/// The nodes are returned in enumeration order, followed by the nodes that
/// only occur as neighbors (in order of their first occurrence).
fn collect<A>(adj: &A) -> (Vec<A::Node>, Vec<Edge<A::Node, A::Weight>>)
where
    A: Adjacencies,
{
    let mut nodes = adj.nodes().collect::<Vec<_>>();
    let mut seen = nodes.iter().cloned().collect::<HashSet<_>>();
    let mut edges = vec![];
    for u in &nodes {
        for (v, w) in adj.neighs(u) {
            edges.push((u.clone(), v, w));
        }
    }
    for (_, v, _) in &edges {
        if seen.insert(v.clone()) {
            nodes.push(v.clone());
        }
    }
    (nodes, edges)
}

/// Return the new distance of `v` if edge `(u, v)` can be relaxed.
///
/// Edges leaving unreached nodes are never relaxed.
fn improves<N, W>(tree: &ShortestPaths<N, W>, u: &N, v: &N, w: W) -> Option<W>
where
    N: Clone + Eq + Hash,
    W: Copy + PartialOrd + Zero,
{
    let newdist = tree.dist(u)? + w;
    match tree.dist(v) {
        Some(olddist) if olddist <= newdist => None,
        _ => Some(newdist),
    }
}

/// Relax all edges once.
///
/// Returns `true` if at least one distance has been updated.
fn relax<N, W>(tree: &mut ShortestPaths<N, W>, edges: &[Edge<N, W>]) -> bool
where
    N: Clone + Eq + Hash,
    W: Copy + PartialOrd + Zero,
{
    let mut changed = false;
    for (u, v, w) in edges {
        if let Some(newdist) = improves(tree, u, v, *w) {
            tree.set(v.clone(), Some(u.clone()), newdist);
            changed = true;
        }
    }
    changed
}

/// Run at most `n - 1` relaxation passes from `src`.
///
/// Returns the computed tables and a relaxable edge if one remains.
fn run<N, W>(n: usize, edges: &[Edge<N, W>], src: N) -> (ShortestPaths<N, W>, Option<Edge<N, W>>)
where
    N: Clone + Eq + Hash,
    W: Copy + PartialOrd + Zero,
{
    let mut tree = ShortestPaths::new();
    tree.set(src, None, W::zero());

    let mut passes = 0;
    for _ in 1..n {
        passes += 1;
        if !relax(&mut tree, edges) {
            trace!("Pass {} without updates, stopping early", passes);
            break;
        }
    }
    debug!("Bellman-Ford finished {} of {} passes", passes, n.saturating_sub(1));

    // detection pass
    let witness = edges
        .iter()
        .find(|(u, v, w)| improves(&tree, u, v, *w).is_some())
        .cloned();
    (tree, witness)
}

/// Compute the shortest paths from `src` to all reachable nodes.
///
/// Unreachable nodes are missing in the returned tables.
///
/// # Errors
/// Returns [`Error::NegativeCycle`] if a cycle of negative weight is
/// reachable from `src`.
pub fn shortest_paths<A>(adj: A, src: A::Node) -> Result<ShortestPaths<A::Node, A::Weight>, A::Node>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
{
    let (mut nodes, edges) = collect(&adj);
    if !nodes.contains(&src) {
        nodes.push(src.clone());
    }
    match run(nodes.len(), &edges, src) {
        (tree, None) => Ok(tree),
        (_, Some(_)) => {
            debug!("Negative cycle detected");
            Err(Error::NegativeCycle)
        }
    }
}

/// Return the distance and a shortest path from `src` to `snk`.
///
/// # Errors
/// Returns [`Error::NoPath`] if `snk` is not reachable from `src`, this
/// takes precedence over a negative cycle. Otherwise returns
/// [`Error::NegativeCycle`] if a cycle of negative weight is reachable
/// from `src`.
pub fn path_to<A>(adj: A, src: A::Node, snk: A::Node) -> Result<(A::Weight, Vec<A::Node>), A::Node>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
{
    let (mut nodes, edges) = collect(&adj);
    if !nodes.contains(&src) {
        nodes.push(src.clone());
    }
    let (tree, witness) = run(nodes.len(), &edges, src.clone());
    let d = match tree.dist(&snk) {
        Some(d) => d,
        None => return Err(Error::NoPath { src, dst: snk }),
    };
    if witness.is_some() {
        return Err(Error::NegativeCycle);
    }
    tree.path_to(&snk)
        .map(|path| (d, path))
        .ok_or(Error::NoPath { src, dst: snk })
}

/// Find a cycle of negative weight.
///
/// The search starts at the first node of the graph (in enumeration order),
/// so only cycles reachable from that node are found. If several such cycles
/// exist, an arbitrary one of them is returned.
///
/// The cycle is returned as sequence of nodes in edge direction, the first
/// and the last node are equal. Returns `None` if no negative cycle has been
/// found.
///
/// # Example
///
/// ```
/// use rs_pathfind::shortestpath::bellmanford;
/// use std::collections::HashMap;
///
/// // exchange rates converted to -log(rate)
/// let mut g: HashMap<&str, HashMap<&str, f64>> = HashMap::new();
/// g.entry("USD").or_default().insert("EUR", -(0.9f64).ln());
/// g.entry("EUR").or_default().insert("GBP", -(0.9f64).ln());
/// g.entry("GBP").or_default().insert("USD", -(1.3f64).ln());
///
/// let cycle = bellmanford::negative_cycle(&g).unwrap();
/// assert_eq!(cycle.len(), 4);
/// assert_eq!(cycle.first(), cycle.last());
/// ```
pub fn negative_cycle<A>(adj: A) -> Option<Vec<A::Node>>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
{
    let (nodes, edges) = collect(&adj);
    let n = nodes.len();
    let first = nodes.into_iter().next()?;
    let (mut tree, witness) = run(n, &edges, first);
    let (u, v, w) = witness?;

    // Apply the improving update. Now the predecessor chain of `v` must
    // contain a cycle, so walking back `n` steps ends on the cycle.
    let newdist = improves(&tree, &u, &v, w)?;
    tree.set(v.clone(), Some(u), newdist);
    let mut start = v;
    for _ in 0..n {
        start = tree.pred(&start)?.clone();
    }

    let mut cycle = vec![start.clone()];
    let mut cur = tree.pred(&start)?.clone();
    while cur != start {
        let next = tree.pred(&cur)?.clone();
        cycle.push(cur);
        cur = next;
    }
    cycle.push(start);
    cycle.reverse();
    debug!("Negative cycle with {} edges found", cycle.len() - 1);
    Some(cycle)
}

#[cfg(test)]
mod tests {
    use super::{negative_cycle, path_to, shortest_paths};
    use crate::error::Error;
    use std::collections::{BTreeMap, HashMap};

    fn graph(edges: &[(char, char, i64)]) -> BTreeMap<char, BTreeMap<char, i64>> {
        let mut g: BTreeMap<_, BTreeMap<_, _>> = BTreeMap::new();
        for &(u, v, w) in edges {
            g.entry(u).or_default().insert(v, w);
        }
        g
    }

    fn cycle_weight(g: &BTreeMap<char, BTreeMap<char, i64>>, cycle: &[char]) -> i64 {
        cycle.windows(2).map(|e| g[&e[0]][&e[1]]).sum()
    }

    #[test]
    fn test_negative_weights() {
        let g = graph(&[('A', 'B', -1), ('A', 'C', 4), ('B', 'C', 3), ('B', 'D', 2), ('D', 'B', 1), ('D', 'C', 5)]);
        let tree = shortest_paths(&g, 'A').unwrap();
        assert_eq!(tree.dist(&'B'), Some(-1));
        assert_eq!(tree.dist(&'C'), Some(2));
        assert_eq!(tree.dist(&'D'), Some(1));
        assert_eq!(tree.pred(&'C'), Some(&'B'));
        assert_eq!(path_to(&g, 'A', 'C'), Ok((2, vec!['A', 'B', 'C'])));
        assert_eq!(path_to(&g, 'A', 'A'), Ok((0, vec!['A'])));
    }

    #[test]
    fn test_triangle_cycle() {
        let g = graph(&[('A', 'B', 1), ('B', 'C', -3), ('C', 'A', 1)]);
        assert_eq!(shortest_paths(&g, 'A'), Err(Error::NegativeCycle));
        assert_eq!(path_to(&g, 'A', 'C'), Err(Error::NegativeCycle));

        let cycle = negative_cycle(&g).unwrap();
        assert_eq!(cycle.len(), 4);
        assert_eq!(cycle.first(), cycle.last());
        assert!(['A', 'B', 'C'].iter().all(|u| cycle.contains(u)));
        assert_eq!(cycle_weight(&g, &cycle), -1);
    }

    #[test]
    fn test_cycle_behind_tail() {
        // the cycle c -> d -> e -> c is only reachable via a -> b -> c
        let g = graph(&[('a', 'b', 2), ('b', 'c', 1), ('c', 'd', -2), ('d', 'e', -1), ('e', 'c', 1), ('e', 'f', 3)]);
        let cycle = negative_cycle(&g).unwrap();
        assert_eq!(cycle.first(), cycle.last());
        assert_eq!(cycle.len(), 4);
        assert!(!cycle.contains(&'a') && !cycle.contains(&'b'));
        assert!(cycle_weight(&g, &cycle) < 0);
        assert_eq!(shortest_paths(&g, 'a'), Err(Error::NegativeCycle));
        // the cycle is not reachable from 'f'
        assert!(shortest_paths(&g, 'f').is_ok());
    }

    #[test]
    fn test_no_path_before_cycle() {
        let g = graph(&[('A', 'B', 1), ('B', 'C', -3), ('C', 'A', 1), ('X', 'Y', 1)]);
        assert_eq!(path_to(&g, 'A', 'Y'), Err(Error::NoPath { src: 'A', dst: 'Y' }));
    }

    #[test]
    fn test_unreached_not_detected() {
        // the cycle is not reachable from the first node
        let g = graph(&[('a', 'b', 1), ('x', 'y', -1), ('y', 'x', -1)]);
        assert_eq!(negative_cycle(&g), None);
        assert!(shortest_paths(&g, 'a').is_ok());
    }

    #[test]
    fn test_zero_cycle() {
        let g = graph(&[('a', 'b', 1), ('b', 'a', -1), ('b', 'c', 2)]);
        assert_eq!(negative_cycle(&g), None);
        let tree = shortest_paths(&g, 'a').unwrap();
        assert_eq!(tree.dist(&'c'), Some(3));
        assert_eq!(tree.path_to(&'c'), Some(vec!['a', 'b', 'c']));
    }

    #[test]
    fn test_empty_and_self_loop() {
        let g: HashMap<u32, HashMap<u32, f64>> = HashMap::new();
        assert_eq!(negative_cycle(&g), None);
        let tree = shortest_paths(&g, 7).unwrap();
        assert_eq!(tree.dist(&7), Some(0.0));

        let mut g: HashMap<u32, HashMap<u32, f64>> = HashMap::new();
        g.entry(1).or_default().insert(1, -0.5);
        assert_eq!(negative_cycle(&g), Some(vec![1, 1]));
        assert_eq!(shortest_paths(&g, 1), Err(Error::NegativeCycle));
    }
}
