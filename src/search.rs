/*
 * Copyright (c) 2019, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Graph search algorithms.
//!
//! This module contains the search algorithms on graphs: breadth-first search
//! on unweighted graphs and A*-search (with its specialization for occupancy
//! grids) on weighted graphs.
//!
//! The searches are implemented as iterators. The iterators produce a sequence
//! of nodes (together with algorithm specific additional information) in the
//! order in which they are visited by the particular search strategy. This
//! allows the search to be stopped as soon as the interesting node has been
//! found. The convenience functions in the submodules do exactly this.

pub mod astar;
pub mod bfs;
pub mod grid;

use std::iter::Iterator;

/// Compute a path from a map of predecessors.
///
/// # Parameters
/// - `dst`: the destination node
/// - `preds(v)`: return the node preceding `v` on the path (or `None` if `v`
///   is the first node of the path)
///
/// # Return
/// An iterator over the nodes of the path starting with `dst` and ending with
/// the first node, i.e. the path in *backward* order.
///
/// The predecessors must not contain a cycle reachable from `dst`, otherwise
/// the iterator is infinite.
///
/// # Example
///
/// ```
/// use rs_pathfind::search::path_from_preds;
/// use std::collections::HashMap;
///
/// let mut preds = HashMap::new();
/// preds.insert('b', 'a');
/// preds.insert('c', 'b');
/// preds.insert('d', 'b');
///
/// let path = path_from_preds('c', |u| preds.get(u).cloned()).collect::<Vec<_>>();
/// assert_eq!(path, vec!['c', 'b', 'a']);
///
/// let path = path_from_preds('a', |u| preds.get(u).cloned()).collect::<Vec<_>>();
/// assert_eq!(path, vec!['a']);
/// ```
pub fn path_from_preds<N, P>(dst: N, preds: P) -> impl Iterator<Item = N>
where
    P: Fn(&N) -> Option<N>,
{
    PathIter { preds, u: Some(dst) }
}

/// Compute the path ending in `dst` in *forward* order.
///
/// This is [`path_from_preds`] followed by reversing the result.
pub(crate) fn forward_path<N, P>(dst: N, preds: P) -> Vec<N>
where
    P: Fn(&N) -> Option<N>,
{
    let mut path = path_from_preds(dst, preds).collect::<Vec<_>>();
    path.reverse();
    path
}

#[doc(hidden)]
struct PathIter<N, P>
where
    P: Fn(&N) -> Option<N>,
{
    preds: P,
    u: Option<N>,
}

impl<N, P> Iterator for PathIter<N, P>
where
    P: Fn(&N) -> Option<N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let u = self.u.take()?;
        self.u = (self.preds)(&u);
        Some(u)
    }
}
