/*
 * Copyright (c) 2017, 2018, 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Breadth-first-search.
//!
//! The search ignores the edge weights, the distance of a node is the number
//! of edges (hops) on a shortest path from the source. Nodes are marked as
//! seen as soon as they are put into the queue, the predecessor of a node is
//! the node from which it has been discovered first. Neighbors are visited in
//! the order given by the adjacency of the graph, this determines which of
//! several shortest paths is found.
//!
//! # Example
//!
//! ```
//! use rs_pathfind::search::bfs;
//! use std::collections::BTreeMap;
//!
//! let mut g = BTreeMap::new();
//! g.insert("a", vec!["b", "c"]);
//! g.insert("b", vec!["d"]);
//! g.insert("c", vec!["d", "e"]);
//! g.insert("d", vec!["e"]);
//!
//! let order = bfs::start(&g, "a").map(|(v, _, _)| v).collect::<Vec<_>>();
//! assert_eq!(order, vec!["b", "c", "d", "e"]);
//!
//! assert_eq!(bfs::shortest_path(&g, "a", "e").unwrap(), (2, vec!["a", "c", "e"]));
//! assert_eq!(bfs::distances(&g, "b")[&"e"], 2);
//! assert!(bfs::shortest_path(&g, "e", "a").is_err());
//! ```

use crate::adjacencies::Adjacencies;
use crate::error::{Error, Result};
use crate::search::forward_path;

use log::{debug, trace};

use std::collections::{HashMap, HashSet, VecDeque};

/// Start and return a BFS iterator.
///
/// The returned iterator traverses the nodes in breadth-first order. For each
/// node it returns the node, its predecessor and its distance (number of
/// edges) from the source.
///
/// Note that the start node is *not* returned by the iterator.
///
/// # Parameter
/// - `adj`: adjacency information for the graph
/// - `src`: the source node at which the search should start.
pub fn start<A>(adj: A, src: A::Node) -> Bfs<A>
where
    A: Adjacencies,
{
    let mut preds = HashMap::new();
    preds.insert(src.clone(), None);
    let it = adj.neighs(&src);

    Bfs {
        adj,
        preds,
        queue: VecDeque::new(),
        cur: src,
        depth: 0,
        it,
    }
}

/// The BFS iterator.
pub struct Bfs<A>
where
    A: Adjacencies,
{
    adj: A,
    preds: HashMap<A::Node, Option<A::Node>>,
    queue: VecDeque<(A::Node, usize)>,
    /// The node whose neighbors are currently visited.
    cur: A::Node,
    depth: usize,
    it: A::NeighIt,
}

impl<A> Iterator for Bfs<A>
where
    A: Adjacencies,
{
    type Item = (A::Node, A::Node, usize);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for (v, _) in &mut self.it {
                if !self.preds.contains_key(&v) {
                    self.preds.insert(v.clone(), Some(self.cur.clone()));
                    self.queue.push_back((v.clone(), self.depth + 1));
                    return Some((v, self.cur.clone(), self.depth + 1));
                }
            }
            let (u, d) = self.queue.pop_front()?;
            self.it = self.adj.neighs(&u);
            self.cur = u;
            self.depth = d;
        }
    }
}

impl<A> Bfs<A>
where
    A: Adjacencies,
{
    /// Run the bfs completely.
    ///
    /// Note that this method may run forever on an infinite graph.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return the predecessor of a node.
    ///
    /// Returns `None` for the source and for nodes that have not been seen.
    pub fn pred(&self, u: &A::Node) -> Option<&A::Node> {
        self.preds.get(u).and_then(Option::as_ref)
    }

    /// Return `true` if `u` has been seen.
    pub fn is_seen(&self, u: &A::Node) -> bool {
        self.preds.contains_key(u)
    }
}

/// Return the number of hops from `src` to every reachable node.
///
/// The source has distance `0`, unreachable nodes are missing.
pub fn distances<A>(adj: A, src: A::Node) -> HashMap<A::Node, usize>
where
    A: Adjacencies,
{
    let mut dist = HashMap::new();
    dist.insert(src.clone(), 0);
    for (v, _, d) in start(adj, src) {
        dist.insert(v, d);
    }
    debug!("BFS reached {} nodes", dist.len());
    dist
}

/// Return the number of hops and a shortest path from `src` to `dst`.
///
/// The search stops as soon as `dst` has been discovered. If `src == dst` the
/// result is `(0, [src])`, even if `src` is not part of the graph.
///
/// # Errors
/// Returns [`Error::NoPath`] if `dst` is not reachable from `src`.
pub fn shortest_path<A>(adj: A, src: A::Node, dst: A::Node) -> Result<(usize, Vec<A::Node>), A::Node>
where
    A: Adjacencies,
{
    if src == dst {
        return Ok((0, vec![src]));
    }

    let mut bfs = start(adj, src.clone());
    while let Some((v, _, d)) = bfs.next() {
        if v == dst {
            debug!("BFS found path with {} edges", d);
            let path = forward_path(v, |u| bfs.pred(u).cloned());
            return Ok((d, path));
        }
    }
    debug!("BFS exhausted without reaching the destination");
    Err(Error::NoPath { src, dst })
}

/// Return shortest paths from `src` to `dst`.
///
/// At most `max_paths` paths are returned. The paths are enumerated by a
/// second breadth-first search that only follows edges `(u,v)` with
/// `dist(v) = dist(u) + 1`, so the paths are returned in the order in which
/// they are discovered by that search.
///
/// Returns an empty list if `dst` is not reachable or `max_paths` is `0`. If
/// `src == dst` the only path is `[src]`.
///
/// # Example
///
/// ```
/// use rs_pathfind::search::bfs;
/// use std::collections::HashMap;
///
/// let mut g = HashMap::new();
/// g.insert(1, vec![2, 3]);
/// g.insert(2, vec![4]);
/// g.insert(3, vec![4]);
///
/// assert_eq!(bfs::all_shortest_paths(&g, 1, 4, 10), vec![vec![1, 2, 4], vec![1, 3, 4]]);
/// assert_eq!(bfs::all_shortest_paths(&g, 1, 4, 1), vec![vec![1, 2, 4]]);
/// assert!(bfs::all_shortest_paths(&g, 4, 1, 10).is_empty());
/// ```
pub fn all_shortest_paths<A>(adj: A, src: A::Node, dst: A::Node, max_paths: usize) -> Vec<Vec<A::Node>>
where
    A: Adjacencies,
{
    if max_paths == 0 {
        return vec![];
    }
    if src == dst {
        return vec![vec![src]];
    }

    // All nodes closer than `dst` are known once `dst` has been discovered.
    let mut bfs = start(adj, src.clone());
    let mut dist = HashMap::new();
    dist.insert(src.clone(), 0);
    for (v, _, d) in &mut bfs {
        let found = v == dst;
        dist.insert(v, d);
        if found {
            break;
        }
    }
    let dmax = match dist.get(&dst) {
        Some(&d) => d,
        None => return vec![],
    };
    let adj = bfs.adj;

    let mut paths = vec![];
    let mut queue = VecDeque::new();
    queue.push_back(vec![src]);
    while let Some(path) = queue.pop_front() {
        let u = match path.last() {
            Some(u) => u,
            None => continue,
        };
        let du = dist[u];
        for (v, _) in adj.neighs(u) {
            if dist.get(&v) != Some(&(du + 1)) {
                continue;
            }
            if v == dst {
                let mut p = path.clone();
                p.push(v);
                paths.push(p);
                if paths.len() == max_paths {
                    trace!("Path limit {} reached", max_paths);
                    return paths;
                }
            } else if du + 1 < dmax {
                let mut p = path.clone();
                p.push(v);
                queue.push_back(p);
            }
        }
    }
    debug!("Found {} shortest paths with {} edges", paths.len(), dmax);
    paths
}

/// Return the connected components of the graph.
///
/// The components are computed by repeatedly starting a search at the next
/// node (in the order of [`Adjacencies::nodes`]) that has not been visited
/// yet. The edges are followed in their given direction only, so for
/// undirected graphs both directions of each edge must be present in the
/// adjacency.
///
/// # Example
///
/// ```
/// use rs_pathfind::search::bfs;
/// use std::collections::BTreeMap;
///
/// let mut g = BTreeMap::new();
/// g.insert('a', vec!['b']);
/// g.insert('b', vec!['a']);
/// g.insert('c', vec![]);
///
/// let comps = bfs::connected_components(&g);
/// assert_eq!(comps.len(), 2);
/// assert!(comps[0].contains(&'a') && comps[0].contains(&'b'));
/// assert_eq!(comps[1].len(), 1);
/// ```
pub fn connected_components<A>(adj: A) -> Vec<HashSet<A::Node>>
where
    A: Adjacencies,
{
    let mut seen = HashSet::new();
    let mut comps = vec![];
    let mut queue = VecDeque::new();
    for s in adj.nodes() {
        if !seen.insert(s.clone()) {
            continue;
        }
        let mut comp = HashSet::new();
        comp.insert(s.clone());
        queue.push_back(s);
        while let Some(u) = queue.pop_front() {
            for (v, _) in adj.neighs(&u) {
                if seen.insert(v.clone()) {
                    comp.insert(v.clone());
                    queue.push_back(v);
                }
            }
        }
        trace!("Component {} with {} nodes", comps.len(), comp.len());
        comps.push(comp);
    }
    debug!("Found {} components", comps.len());
    comps
}
