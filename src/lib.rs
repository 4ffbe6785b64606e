// Copyright (c) 2015-2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Two classic graph algorithms on small graphs.
//!
//! - Shortest paths with Dijkstra's algorithm on a graph of named places,
//!   see [`ShortestPathMap`] and the fixed [`campus`] map.
//! - Maximum flows with the Ford-Fulkerson method (augmenting paths found
//!   by breadth-first search) on a capacity matrix, see [`FlowNetwork`].
//!
//! The library uses the [`log`] facade but never installs a logger.

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod traits;
pub use self::traits::WeightedGraph;

pub mod graph;
pub use self::graph::{Edge, Graph, Vertex};

pub mod error;
pub use self::error::Error;

// # Algorithms

pub mod maxflow;
pub use self::maxflow::FlowNetwork;

pub mod shortestpath;
pub use self::shortestpath::{ShortestPathMap, Step};

// # Data

pub mod campus;
