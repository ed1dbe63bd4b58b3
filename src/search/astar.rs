/*
 * Copyright (c) 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! A* search.
//!
//! This module implements an A*-search for finding a shortest path from some
//! start node to a goal node. Each node is assigned a heuristic value
//! estimating the distance to the goal. The search handles the nodes in the
//! order of increasing `f(u) = g(u) + h(u)`, where `g(u)` is the length of the
//! best known path from the start node to `u` and `h(u)` the heuristic value.
//! Among nodes with equal `f` the node with the smaller `g` comes first.
//!
//! If the heuristic is *admissible*, i.e. `h(u)` never overestimates the true
//! distance from `u` to the goal, the distance returned for the goal is
//! optimal. This property is not (and cannot be) checked, an inadmissible
//! heuristic silently yields a possibly suboptimal path. The edge weights must
//! be non-negative.
//!
//! Once a node has been handled (popped from the queue) it is final and never
//! considered again.
//!
//! Distances are computed by plain addition of the weight type. With bounded
//! integer weights the length of every path explored must fit into that type,
//! otherwise the addition overflows (and panics in debug builds). Use a wider
//! weight type if necessary.
//!
//! # Example
//!
//! ```
//! use rs_pathfind::search::astar;
//! use std::collections::HashMap;
//!
//! // nodes are points in the plane
//! let mut g: HashMap<(i32, i32), HashMap<(i32, i32), i32>> = HashMap::new();
//! g.entry((0, 0)).or_default().insert((1, 0), 1);
//! g.entry((0, 0)).or_default().insert((0, 1), 1);
//! g.entry((1, 0)).or_default().insert((2, 0), 5);
//! g.entry((0, 1)).or_default().insert((1, 1), 1);
//! g.entry((1, 1)).or_default().insert((2, 0), 2);
//!
//! // manhattan distance heuristic
//! let manh = |u: &(i32, i32), v: &(i32, i32)| (u.0 - v.0).abs() + (u.1 - v.1).abs();
//!
//! let (dist, path) = astar::search(&g, (0, 0), (2, 0), manh).unwrap();
//! assert_eq!(dist, 4);
//! assert_eq!(path, vec![(0, 0), (0, 1), (1, 1), (2, 0)]);
//!
//! assert!(astar::search(&g, (2, 0), (0, 0), manh).is_err());
//! ```

use crate::adjacencies::Adjacencies;
use crate::collections::{BinHeap, ItemPriQueue};
use crate::error::{Error, Result};
use crate::shortestpath::ShortestPaths;

use crate::num::traits::Zero;
use log::{debug, trace};

use std::cmp::Ordering;
use std::collections::HashMap;

/// A* search iterator.
pub struct AStar<A, H>
where
    A: Adjacencies,
{
    adj: A,
    /// `Some(item)` for nodes in the queue, `None` for handled nodes.
    nodes: HashMap<A::Node, Option<usize>>,
    pqueue: BinHeap<A::Node, Data<A::Node, A::Weight>>,
    heur: H,
}

/// The data stored with a node during the search.
#[derive(Clone)]
struct Data<N, D> {
    /// predecessor on currently best path
    pred: Option<N>,
    /// currently best known distance
    distance: D,
    /// the heuristic value of this node
    lower: D,
}

impl<N, D> Data<N, D>
where
    D: Copy + Zero,
{
    fn estimate(&self) -> D {
        self.distance + self.lower
    }
}

impl<N, D> PartialEq for Data<N, D>
where
    D: Copy + Zero + PartialEq,
{
    fn eq(&self, data: &Self) -> bool {
        self.estimate() == data.estimate() && self.distance == data.distance
    }
}

impl<N, D> PartialOrd for Data<N, D>
where
    D: Copy + Zero + PartialOrd,
{
    fn partial_cmp(&self, data: &Self) -> Option<Ordering> {
        match self.estimate().partial_cmp(&data.estimate())? {
            Ordering::Equal => self.distance.partial_cmp(&data.distance),
            ord => Some(ord),
        }
    }
}

/// A heuristic providing a node potential.
///
/// `call(u)` must be a lower bound on the distance from `u` to the goal node.
pub trait AStarHeuristic<N, D> {
    fn call(&self, u: &N) -> D;
}

impl<F, N, D> AStarHeuristic<N, D> for F
where
    F: Fn(&N) -> D,
{
    fn call(&self, u: &N) -> D {
        (*self)(u)
    }
}

/// Start and return an A*-iterator.
///
/// The returned iterator handles the nodes in the order of an A*-search. For
/// each node it returns the node, its predecessor on a shortest path and the
/// distance from the start node. The first element is the start node itself
/// (with no predecessor and distance zero).
///
/// # Parameter
/// - `adj`: adjacency information for the graph
/// - `src`: the source node at which the search should start.
/// - `heur`: the node potential, `heur(u)` must not overestimate the distance
///   from `u` to the goal
pub fn start<A, H>(adj: A, src: A::Node, heur: H) -> AStar<A, H>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
    H: AStarHeuristic<A::Node, A::Weight>,
{
    let mut nodes = HashMap::new();
    let mut pqueue = BinHeap::new();
    let lower = heur.call(&src);
    let item = pqueue.push(
        src.clone(),
        Data {
            pred: None,
            distance: A::Weight::zero(),
            lower,
        },
    );
    nodes.insert(src, Some(item));

    AStar {
        adj,
        nodes,
        pqueue,
        heur,
    }
}

impl<A, H> Iterator for AStar<A, H>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
    H: AStarHeuristic<A::Node, A::Weight>,
{
    type Item = (A::Node, Option<A::Node>, A::Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let (u, data) = self.pqueue.pop_min()?;
        // node is not in the queue anymore, forget its item
        self.nodes.insert(u.clone(), None);
        let d = data.distance;
        for (v, w) in self.adj.neighs(&u) {
            let dist = d + w;
            match self.nodes.get_mut(&v) {
                Some(Some(vitem)) => {
                    // node is known but unhandled
                    let (olddist, lower) = {
                        let data = self.pqueue.value(vitem);
                        (data.distance, data.lower)
                    };
                    if dist < olddist {
                        trace!("decrease key to distance of new path");
                        self.pqueue.decrease_key(
                            vitem,
                            Data {
                                pred: Some(u.clone()),
                                distance: dist,
                                lower,
                            },
                        );
                    }
                }
                None => {
                    // node is unknown
                    let lower = self.heur.call(&v);
                    let item = self.pqueue.push(
                        v.clone(),
                        Data {
                            pred: Some(u.clone()),
                            distance: dist,
                            lower,
                        },
                    );
                    self.nodes.insert(v, Some(item));
                }
                Some(None) => (), // node has been handled
            }
        }
        Some((u, data.pred, d))
    }
}

impl<A, H> AStar<A, H>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
    H: AStarHeuristic<A::Node, A::Weight>,
{
    /// Run the search completely.
    ///
    /// Note that this method may run forever on an infinite graph.
    pub fn run(&mut self) {
        while self.next().is_some() {}
    }

    /// Return `true` if `u` has been handled already.
    pub fn is_handled(&self, u: &A::Node) -> bool {
        matches!(self.nodes.get(u), Some(None))
    }

    /// Return the number of nodes currently waiting in the queue.
    pub fn num_open(&self) -> usize {
        self.pqueue.len()
    }
}

/// Run a search with node potential `heur` until `snk` is handled.
///
/// This is the common implementation of the point-to-point queries of A* and
/// Dijkstra.
pub(crate) fn find_path<A, H>(adj: A, src: A::Node, snk: A::Node, heur: H) -> Result<(A::Weight, Vec<A::Node>), A::Node>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
    H: AStarHeuristic<A::Node, A::Weight>,
{
    if src == snk {
        return Ok((A::Weight::zero(), vec![src]));
    }
    // run search until sink node has been found
    let mut tree = ShortestPaths::new();
    for (u, pred, d) in start(adj, src.clone(), heur) {
        let found = u == snk;
        tree.set(u, pred, d);
        if found {
            debug!("Path found after handling {} nodes", tree.len());
            if let Some(path) = tree.path_to(&snk) {
                return Ok((d, path));
            }
        }
    }
    debug!("No path found after handling {} nodes", tree.len());
    Err(Error::NoPath { src, dst: snk })
}

/// Run an A*-search from `src` to `goal` and return the distance and the path.
///
/// The heuristic `heur(u, goal)` must be admissible, i.e. it must never
/// overestimate the distance from `u` to `goal`. Otherwise the returned path
/// might not be a shortest one. The edge weights must be non-negative.
///
/// The search stops as soon as the goal node is handled. If `src == goal`
/// the result is a distance of zero and the path `[src]`.
///
/// # Errors
/// Returns [`Error::NoPath`] if `goal` is not reachable from `src`.
pub fn search<A, H>(adj: A, src: A::Node, goal: A::Node, heur: H) -> Result<(A::Weight, Vec<A::Node>), A::Node>
where
    A: Adjacencies,
    A::Weight: Copy + PartialOrd + Zero,
    H: Fn(&A::Node, &A::Node) -> A::Weight,
{
    let target = goal.clone();
    find_path(adj, src, goal, move |u: &A::Node| heur(u, &target))
}
