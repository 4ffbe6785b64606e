// Copyright (c) 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits for weighted graphs with named vertices.
//!
//! The shortest path algorithms do not depend on a concrete graph type.
//! They only need access to the vertices (by index and by name) and to the
//! incident edges of a vertex.

use crate::graph::{Edge, Vertex};

/// A graph whose vertices are numbered `0..num_vertices()` and whose
/// undirected edges carry a weight.
pub trait WeightedGraph<'a> {
    /// Type of the edge weights.
    type Weight: 'a;

    /// Iterator over incident edges of a vertex.
    ///
    /// Each item is an edge together with the vertex on its other end.
    type NeighIt: Iterator<Item = (&'a Edge<Self::Weight>, usize)>;

    /// Return the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Return the vertex with index `u`.
    fn vertex(&self, u: usize) -> &Vertex;

    /// Return the index of the vertex with the given name.
    fn vertex_id(&self, name: &str) -> Option<usize>;

    /// Return the incident edges of `u` in a fixed order.
    fn neighbors(&'a self, u: usize) -> Self::NeighIt;

    /// Return an edge between `u` and `v`, if there is one.
    fn find_edge(&self, u: usize, v: usize) -> Option<&Edge<Self::Weight>>;
}
