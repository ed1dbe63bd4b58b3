// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! A library of generic shortest-path algorithms.
//!
//! Graphs are plain adjacency maps owned by the caller, see
//! [`Adjacencies`]. Nodes may be of any hashable type, the edge weights of
//! any numeric type.
//!
//! - [`search::bfs`]: breadth-first search on unweighted graphs,
//! - [`search::astar`]: A*-search guided by a heuristic,
//! - [`search::grid`]: A*-search on 2-dimensional occupancy grids,
//! - [`shortestpath::dijkstra`]: Dijkstra's algorithm for non-negative weights,
//! - [`shortestpath::bellmanford`]: Bellman-Ford for arbitrary weights with
//!   negative cycle detection.
//!
//! Point-to-point queries return the distance together with the path
//! (including both end points) or an [`Error`].
//!
//! # Example
//!
//! ```
//! use rs_pathfind::shortestpath::{bellmanford, dijkstra};
//! use rs_pathfind::Error;
//! use std::collections::HashMap;
//!
//! let mut g: HashMap<&str, HashMap<&str, i32>> = HashMap::new();
//! g.entry("home").or_default().insert("park", 3);
//! g.entry("home").or_default().insert("shop", 1);
//! g.entry("shop").or_default().insert("park", 1);
//!
//! assert_eq!(dijkstra::find_path(&g, "home", "park"), Ok((2, vec!["home", "shop", "park"])));
//! assert_eq!(bellmanford::path_to(&g, "home", "park"), Ok((2, vec!["home", "shop", "park"])));
//! assert_eq!(
//!     dijkstra::find_path(&g, "park", "home"),
//!     Err(Error::NoPath { src: "park", dst: "home" })
//! );
//! ```

mod num {
    pub use num_traits as traits;
}

pub mod adjacencies;
pub use self::adjacencies::Adjacencies;

pub mod collections;

pub mod error;
pub use self::error::{Error, Result};

pub mod search;

pub mod shortestpath;
pub use self::shortestpath::ShortestPaths;
