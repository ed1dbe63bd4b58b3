/*
 * Copyright (c) 2018, 2020, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Abstraction of outgoing edges.
//!
//! This module implements the arguably simplest representation of a graph: for
//! each node the list of outgoing edges, each given by the neighboring node and
//! the weight of the edge. No further information like the number of nodes or
//! edges in a graph is available.
//!
//! The trait [`Adjacencies`] is implemented for (references to) the usual
//! adjacency-map representations:
//!
//! - *weighted* graphs `HashMap<N, HashMap<N, W>>` and `BTreeMap<N, BTreeMap<N, W>>`
//!   mapping each node to its neighbors and the weights of the edges,
//! - *unweighted* graphs `HashMap<N, Vec<N>>` and `BTreeMap<N, Vec<N>>` mapping
//!   each node to the sequence of its neighbors, each edge has weight `1`.
//!
//! A node that occurs as a neighbor but not as a key of the map is a dead-end:
//! it simply has no outgoing edges.
//!
//! # Example
//!
//! ```
//! use rs_pathfind::adjacencies::Adjacencies;
//! use std::collections::HashMap;
//!
//! let mut g = HashMap::new();
//! g.insert("a", vec!["b", "c"]);
//! g.insert("b", vec!["c"]);
//!
//! let adj = &g;
//! assert_eq!(adj.neighs(&"a").collect::<Vec<_>>(), vec![("b", 1), ("c", 1)]);
//! // "c" is not a key, it has no outgoing edges
//! assert_eq!(adj.neighs(&"c").count(), 0);
//! ```

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::iter::Cloned;
use std::slice;

/// Outgoing edges of the nodes of a graph.
///
/// Implementors are usually cheap handles (references) to the actual graph
/// data, the algorithms take them by value.
pub trait Adjacencies {
    /// The node type.
    type Node: Clone + Eq + Hash;

    /// The type of the edge weights.
    type Weight: Copy;

    /// Iterator over the nodes of the graph.
    type NodeIt: Iterator<Item = Self::Node>;

    /// Iterator over the outgoing edges of a node.
    type NeighIt: Iterator<Item = (Self::Node, Self::Weight)>;

    /// Return an iterator over all nodes with an adjacency entry.
    ///
    /// Nodes that are only referenced as neighbors are *not* returned.
    fn nodes(&self) -> Self::NodeIt;

    /// Return an iterator over the outgoing edges of `u`.
    ///
    /// Each edge is represented by the neighboring node and the weight. The
    /// iterator is empty if `u` has no adjacency entry.
    fn neighs(&self, u: &Self::Node) -> Self::NeighIt;
}

/// Outgoing edges of a node in a weighted adjacency map.
#[derive(Clone)]
pub struct OutEdges<I>(Option<I>);

impl<'a, N, W, I> Iterator for OutEdges<I>
where
    N: 'a + Clone,
    W: 'a + Copy,
    I: Iterator<Item = (&'a N, &'a W)>,
{
    type Item = (N, W);

    fn next(&mut self) -> Option<(N, W)> {
        let (v, w) = self.0.as_mut()?.next()?;
        Some((v.clone(), *w))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.as_ref().map(|it| it.size_hint()).unwrap_or((0, Some(0)))
    }
}

/// Outgoing edges of a node in an unweighted adjacency list.
///
/// All edges have weight `1`.
#[derive(Clone)]
pub struct UnitEdges<I>(Option<I>);

impl<'a, N, I> Iterator for UnitEdges<I>
where
    N: 'a + Clone,
    I: Iterator<Item = &'a N>,
{
    type Item = (N, usize);

    fn next(&mut self) -> Option<(N, usize)> {
        self.0.as_mut()?.next().map(|v| (v.clone(), 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.as_ref().map(|it| it.size_hint()).unwrap_or((0, Some(0)))
    }
}

impl<'a, N, W, S, T> Adjacencies for &'a HashMap<N, HashMap<N, W, T>, S>
where
    N: Clone + Eq + Hash,
    W: Copy,
    S: BuildHasher,
    T: BuildHasher,
{
    type Node = N;
    type Weight = W;
    type NodeIt = Cloned<hash_map::Keys<'a, N, HashMap<N, W, T>>>;
    type NeighIt = OutEdges<hash_map::Iter<'a, N, W>>;

    fn nodes(&self) -> Self::NodeIt {
        let g: &'a HashMap<_, _, _> = *self;
        g.keys().cloned()
    }

    fn neighs(&self, u: &N) -> Self::NeighIt {
        let g: &'a HashMap<_, _, _> = *self;
        OutEdges(g.get(u).map(|vs| vs.iter()))
    }
}

impl<'a, N, W> Adjacencies for &'a BTreeMap<N, BTreeMap<N, W>>
where
    N: Clone + Ord + Hash,
    W: Copy,
{
    type Node = N;
    type Weight = W;
    type NodeIt = Cloned<btree_map::Keys<'a, N, BTreeMap<N, W>>>;
    type NeighIt = OutEdges<btree_map::Iter<'a, N, W>>;

    fn nodes(&self) -> Self::NodeIt {
        let g: &'a BTreeMap<_, _> = *self;
        g.keys().cloned()
    }

    fn neighs(&self, u: &N) -> Self::NeighIt {
        let g: &'a BTreeMap<_, _> = *self;
        OutEdges(g.get(u).map(|vs| vs.iter()))
    }
}

impl<'a, N, S> Adjacencies for &'a HashMap<N, Vec<N>, S>
where
    N: Clone + Eq + Hash,
    S: BuildHasher,
{
    type Node = N;
    type Weight = usize;
    type NodeIt = Cloned<hash_map::Keys<'a, N, Vec<N>>>;
    type NeighIt = UnitEdges<slice::Iter<'a, N>>;

    fn nodes(&self) -> Self::NodeIt {
        let g: &'a HashMap<_, _, _> = *self;
        g.keys().cloned()
    }

    fn neighs(&self, u: &N) -> Self::NeighIt {
        let g: &'a HashMap<_, _, _> = *self;
        UnitEdges(g.get(u).map(|vs| vs.iter()))
    }
}

impl<'a, N> Adjacencies for &'a BTreeMap<N, Vec<N>>
where
    N: Clone + Ord + Hash,
{
    type Node = N;
    type Weight = usize;
    type NodeIt = Cloned<btree_map::Keys<'a, N, Vec<N>>>;
    type NeighIt = UnitEdges<slice::Iter<'a, N>>;

    fn nodes(&self) -> Self::NodeIt {
        let g: &'a BTreeMap<_, _> = *self;
        g.keys().cloned()
    }

    fn neighs(&self, u: &N) -> Self::NeighIt {
        let g: &'a BTreeMap<_, _> = *self;
        UnitEdges(g.get(u).map(|vs| vs.iter()))
    }
}
