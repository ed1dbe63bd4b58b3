// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Path search on 2-dimensional occupancy grids.
//!
//! A grid is given as a sequence of rows, each cell is either open (`0`) or
//! blocked (any other value). Rows may have different lengths, cells beyond
//! the end of a row are out of bounds. The cells are the nodes of an implicit
//! graph and addressed by `(row, column)`. There is an edge between two
//! neighboring cells if both are open.
//!
//! With [`Movement::FourWay`] a cell is adjacent to its orthogonal neighbors
//! (cost 1), with [`Movement::EightWay`] additionally to its diagonal
//! neighbors (cost √2). Diagonal moves between two blocked orthogonal cells
//! are allowed.
//!
//! # Example
//!
//! ```
//! use rs_pathfind::search::grid::{self, Movement};
//!
//! let rows = vec![
//!     vec![0u8, 0, 0, 0],
//!     vec![1, 1, 1, 0],
//!     vec![0, 0, 0, 0],
//! ];
//!
//! let (dist, path) = grid::search(&rows, (0, 0), (2, 0), Movement::FourWay).unwrap();
//! assert_eq!(dist, 8.0);
//! assert_eq!(path.len(), 9);
//! assert_eq!(path[4], (1, 3));
//!
//! let (dist, _) = grid::search(&rows, (0, 0), (2, 0), Movement::EightWay).unwrap();
//! assert!((dist - (4.0 + 2.0 * std::f64::consts::SQRT_2)).abs() < 1e-9);
//! ```

use crate::adjacencies::Adjacencies;
use crate::error::Result;
use crate::search::astar;

use std::f64::consts::SQRT_2;
use std::slice;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A cell of the grid as `(row, column)`.
pub type Pos = (usize, usize);

/// The allowed moves on a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Movement {
    /// Horizontal and vertical moves with cost 1.
    FourWay,
    /// Additional diagonal moves with cost √2.
    EightWay,
}

impl Default for Movement {
    fn default() -> Self {
        Movement::FourWay
    }
}

const FOUR_WAY: [(isize, isize, f64); 4] = [(-1, 0, 1.0), (0, -1, 1.0), (0, 1, 1.0), (1, 0, 1.0)];

const EIGHT_WAY: [(isize, isize, f64); 8] = [
    (-1, -1, SQRT_2),
    (-1, 0, 1.0),
    (-1, 1, SQRT_2),
    (0, -1, 1.0),
    (0, 1, 1.0),
    (1, -1, SQRT_2),
    (1, 0, 1.0),
    (1, 1, SQRT_2),
];

impl Movement {
    fn moves(self) -> &'static [(isize, isize, f64)] {
        match self {
            Movement::FourWay => &FOUR_WAY,
            Movement::EightWay => &EIGHT_WAY,
        }
    }
}

/// An occupancy grid as implicit graph.
///
/// The grid does not own the cells, it is a cheap handle that can be passed
/// to all algorithms accepting [`Adjacencies`].
///
/// # Example
///
/// ```
/// use rs_pathfind::search::bfs;
/// use rs_pathfind::search::grid::{Grid, Movement};
///
/// let rows = ["0000", "0110", "0000"]
///     .iter()
///     .map(|r| r.bytes().map(|c| c - b'0').collect::<Vec<_>>())
///     .collect::<Vec<_>>();
/// let g = Grid::new(&rows, Movement::FourWay);
///
/// assert_eq!(bfs::distances(g, (0, 0))[&(2, 3)], 5);
/// assert!(!g.is_open((1, 1)));
/// ```
pub struct Grid<'a, R> {
    rows: &'a [R],
    movement: Movement,
}

impl<'a, R> Clone for Grid<'a, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, R> Copy for Grid<'a, R> {}

impl<'a, R> Grid<'a, R>
where
    R: AsRef<[u8]>,
{
    /// Create a grid from a sequence of rows.
    pub fn new(rows: &'a [R], movement: Movement) -> Self {
        Grid { rows, movement }
    }

    /// The allowed moves.
    pub fn movement(&self) -> Movement {
        self.movement
    }

    /// Return `true` if the cell at `pos` is in bounds and open.
    pub fn is_open(&self, pos: Pos) -> bool {
        let (i, j) = pos;
        self.rows
            .get(i)
            .and_then(|row| row.as_ref().get(j))
            .map(|&c| c == 0)
            .unwrap_or(false)
    }
}

impl<'a, R> Adjacencies for Grid<'a, R>
where
    R: AsRef<[u8]>,
{
    type Node = Pos;
    type Weight = f64;
    type NodeIt = GridNodes<'a, R>;
    type NeighIt = GridNeighs<'a, R>;

    /// Return all open cells in row-major order.
    fn nodes(&self) -> Self::NodeIt {
        GridNodes { grid: *self, pos: (0, 0) }
    }

    fn neighs(&self, u: &Pos) -> Self::NeighIt {
        // blocked cells have no outgoing edges
        let moves = if self.is_open(*u) { self.movement.moves() } else { &[] };
        GridNeighs {
            grid: *self,
            pos: *u,
            it: moves.iter(),
        }
    }
}

/// Iterator over the open cells of a grid.
pub struct GridNodes<'a, R> {
    grid: Grid<'a, R>,
    pos: Pos,
}

impl<'a, R> Iterator for GridNodes<'a, R>
where
    R: AsRef<[u8]>,
{
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        while let Some(row) = self.grid.rows.get(self.pos.0) {
            let (i, j) = self.pos;
            if j < row.as_ref().len() {
                self.pos.1 += 1;
                if row.as_ref()[j] == 0 {
                    return Some((i, j));
                }
            } else {
                self.pos = (i + 1, 0);
            }
        }
        None
    }
}

/// Iterator over the neighbors of a cell.
pub struct GridNeighs<'a, R> {
    grid: Grid<'a, R>,
    pos: Pos,
    it: slice::Iter<'static, (isize, isize, f64)>,
}

impl<'a, R> Iterator for GridNeighs<'a, R>
where
    R: AsRef<[u8]>,
{
    type Item = (Pos, f64);

    fn next(&mut self) -> Option<(Pos, f64)> {
        let (i, j) = self.pos;
        for &(di, dj, w) in &mut self.it {
            let v = match (offset(i, di), offset(j, dj)) {
                (Some(vi), Some(vj)) => (vi, vj),
                _ => continue,
            };
            if self.grid.is_open(v) {
                return Some((v, w));
            }
        }
        None
    }
}

fn offset(x: usize, dx: isize) -> Option<usize> {
    if dx < 0 {
        x.checked_sub(dx.unsigned_abs())
    } else {
        x.checked_add(dx as usize)
    }
}

fn delta(u: &Pos, v: &Pos) -> (f64, f64) {
    let di = if u.0 > v.0 { u.0 - v.0 } else { v.0 - u.0 };
    let dj = if u.1 > v.1 { u.1 - v.1 } else { v.1 - u.1 };
    (di as f64, dj as f64)
}

/// The Manhattan distance `|Δrow| + |Δcol|` of two cells.
///
/// This is an admissible heuristic for four-way movement only.
pub fn manhattan(u: &Pos, v: &Pos) -> f64 {
    let (di, dj) = delta(u, v);
    di + dj
}

/// The Euclidean distance of two cells.
///
/// This is an admissible heuristic for four-way and eight-way movement.
pub fn euclidean(u: &Pos, v: &Pos) -> f64 {
    let (di, dj) = delta(u, v);
    di.hypot(dj)
}

/// Run an A*-search on an occupancy grid.
///
/// The heuristic is chosen according to `movement`: [`manhattan`] for
/// four-way and [`euclidean`] for eight-way movement. If `start == goal` the
/// result is `(0, [start])` regardless of the contents of the cell.
///
/// # Errors
/// Returns [`Error::NoPath`][crate::error::Error::NoPath] if `goal` cannot be
/// reached from `start`, in particular if one of both is blocked or out of
/// bounds.
pub fn search<R>(rows: &[R], start: Pos, goal: Pos, movement: Movement) -> Result<(f64, Vec<Pos>), Pos>
where
    R: AsRef<[u8]>,
{
    if start == goal {
        return Ok((0.0, vec![start]));
    }
    let heur: fn(&Pos, &Pos) -> f64 = match movement {
        Movement::FourWay => manhattan,
        Movement::EightWay => euclidean,
    };
    astar::search(Grid::new(rows, movement), start, goal, heur)
}
