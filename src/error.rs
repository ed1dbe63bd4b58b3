/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Errors returned by the point-to-point and table-producing algorithms.

use thiserror::Error;

/// Error of a shortest-path computation.
///
/// The type parameter `N` is the node type of the graph, so the nodes
/// involved in a failure are handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<N> {
    /// The destination node is not reachable from the source node.
    #[error("no path exists from {src:?} to {dst:?}")]
    NoPath { src: N, dst: N },

    /// The graph contains a cycle of negative total weight reachable from
    /// the source, hence there are no well-defined shortest distances.
    #[error("graph contains a negative cycle")]
    NegativeCycle,

    /// An edge with negative weight has been found where only
    /// non-negative weights are allowed.
    #[error("edge from {src:?} to {dst:?} has a negative weight")]
    NegativeWeight { src: N, dst: N },
}

pub type Result<T, N> = std::result::Result<T, Error<N>>;
