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

//! Shortest path algorithms.

pub mod bellmanford;
pub mod dijkstra;

pub use self::dijkstra::Dijkstra;

use crate::search::forward_path;

use std::collections::HashMap;
use std::hash::Hash;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Single-source shortest path information.
///
/// The distance table and the predecessor table contain exactly the nodes
/// that have been reached from the source. A node missing from the tables has
/// distance "infinity". The source itself has no predecessor.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(bound(
        serialize = "N: serde::Serialize, W: serde::Serialize",
        deserialize = "N: serde::Deserialize<'de> + Eq + Hash, W: serde::Deserialize<'de>"
    ))
)]
pub struct ShortestPaths<N, W> {
    dist: HashMap<N, W>,
    pred: HashMap<N, Option<N>>,
}

impl<N, W> Default for ShortestPaths<N, W> {
    fn default() -> Self {
        ShortestPaths {
            dist: HashMap::new(),
            pred: HashMap::new(),
        }
    }
}

impl<N, W> PartialEq for ShortestPaths<N, W>
where
    N: Eq + Hash,
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist && self.pred == other.pred
    }
}

impl<N, W> ShortestPaths<N, W>
where
    N: Clone + Eq + Hash,
    W: Copy,
{
    pub(crate) fn new() -> Self {
        Default::default()
    }

    /// Set distance and predecessor of `u`.
    pub(crate) fn set(&mut self, u: N, pred: Option<N>, dist: W) {
        self.dist.insert(u.clone(), dist);
        self.pred.insert(u, pred);
    }

    /// Return the distance of `u` from the source.
    ///
    /// Returns `None` if `u` has not been reached (i.e. its distance is infinite).
    pub fn dist(&self, u: &N) -> Option<W> {
        self.dist.get(u).copied()
    }

    /// Return the predecessor of `u` on a shortest path.
    ///
    /// Returns `None` for the source and for unreached nodes.
    pub fn pred(&self, u: &N) -> Option<&N> {
        self.pred.get(u).and_then(Option::as_ref)
    }

    /// Return `true` iff `u` has been reached from the source.
    pub fn reached(&self, u: &N) -> bool {
        self.dist.contains_key(u)
    }

    /// Return the number of reached nodes.
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    /// Return `true` if no node has been reached.
    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// The distance table.
    pub fn distances(&self) -> &HashMap<N, W> {
        &self.dist
    }

    /// The predecessor table.
    pub fn predecessors(&self) -> &HashMap<N, Option<N>> {
        &self.pred
    }

    /// Return the path from the source to `dst`.
    ///
    /// The path contains both end points, it is `[dst]` if `dst` is the source.
    /// Returns `None` if `dst` has not been reached.
    pub fn path_to(&self, dst: &N) -> Option<Vec<N>> {
        if !self.reached(dst) {
            return None;
        }
        Some(forward_path(dst.clone(), |u| self.pred(u).cloned()))
    }

    /// Split into distance table and predecessor table.
    pub fn into_parts(self) -> (HashMap<N, W>, HashMap<N, Option<N>>) {
        (self.dist, self.pred)
    }
}
