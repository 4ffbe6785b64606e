/*
 * Copyright (c) 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! An undirected graph with named vertices and weighted edges.
//!
//! Vertices are identified by their name. Inserting a name twice returns the
//! vertex that is already present. Internally each vertex gets a dense index
//! in insertion order, which is what the algorithms work with.
//!
//! # Example
//!
//! ```
//! use graph_lab::Graph;
//!
//! let mut g = Graph::new();
//! g.insert_edge_by_vertex_names("a", "b", 3);
//! g.insert_edge_by_vertex_names("b", "c", 4);
//! let a = g.insert_vertex("a");
//!
//! assert_eq!(g.num_vertices(), 3);
//! assert_eq!(a, 0);
//!
//! let b = g.vertex_id("b").unwrap();
//! let c = g.vertex_id("c").unwrap();
//! assert_eq!(g.find_edge(c, b).map(|e| e.weight), Some(4));
//! assert!(g.find_edge(a, c).is_none());
//! ```

use crate::traits::WeightedGraph;

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice::Iter as SliceIter;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A named vertex.
///
/// Two vertices are equal if and only if their names are equal.
#[derive(Clone, Debug, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vertex {
    name: String,
}

impl Vertex {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Vertex { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Hash for Vertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl Borrow<str> for Vertex {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name)
    }
}

/// An undirected weighted edge between the vertices with indices `u` and `v`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    /// Return the end of the edge opposite to `x`.
    ///
    /// `x` must be one of the two end vertices.
    pub fn other(&self, x: usize) -> usize {
        debug_assert!(x == self.u || x == self.v, "Vertex is not incident to edge");
        if x == self.u {
            self.v
        } else {
            self.u
        }
    }

    /// Return the two end vertices of the edge.
    pub fn enodes(&self) -> (usize, usize) {
        (self.u, self.v)
    }
}

/// An undirected graph with named vertices.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Graph<W> {
    vertices: Vec<Vertex>,
    ids: HashMap<String, usize>,
    edges: Vec<Edge<W>>,
    /// The incident edges of each vertex in insertion order.
    adj: Vec<Vec<usize>>,
}

impl<W> Graph<W> {
    pub fn new() -> Self {
        Graph {
            vertices: vec![],
            ids: HashMap::new(),
            edges: vec![],
            adj: vec![],
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Insert a vertex with the given name and return its index.
    ///
    /// If a vertex with this name already exists, the graph is not
    /// changed and the index of the existing vertex is returned.
    pub fn insert_vertex(&mut self, name: &str) -> usize {
        if let Some(&u) = self.ids.get(name) {
            return u;
        }
        let u = self.vertices.len();
        self.vertices.push(Vertex::new(name));
        self.ids.insert(name.to_string(), u);
        self.adj.push(vec![]);
        u
    }

    /// Insert an edge between the vertices with indices `u` and `v`.
    ///
    /// Returns the index of the new edge.
    ///
    /// # Panics
    ///
    /// If `u` or `v` is not a vertex index of this graph.
    pub fn insert_edge(&mut self, u: usize, v: usize, weight: W) -> usize {
        assert!(
            u < self.vertices.len() && v < self.vertices.len(),
            "Invalid vertex index"
        );
        let e = self.edges.len();
        self.edges.push(Edge { u, v, weight });
        self.adj[u].push(e);
        if u != v {
            self.adj[v].push(e);
        }
        e
    }

    /// Insert an edge between two vertices given by name.
    ///
    /// Vertices that do not exist yet are inserted.
    pub fn insert_edge_by_vertex_names(&mut self, a: &str, b: &str, weight: W) -> usize {
        let u = self.insert_vertex(a);
        let v = self.insert_vertex(b);
        self.insert_edge(u, v, weight)
    }

    /// Return the index of the vertex with the given name.
    pub fn vertex_id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Return the vertex with index `u`.
    pub fn vertex(&self, u: usize) -> &Vertex {
        &self.vertices[u]
    }

    /// Return all vertices in insertion order.
    pub fn vertices(&self) -> SliceIter<Vertex> {
        self.vertices.iter()
    }

    /// Return all edges in insertion order.
    pub fn edges(&self) -> SliceIter<Edge<W>> {
        self.edges.iter()
    }

    /// Return the first edge connecting `u` and `v` (in either direction).
    ///
    /// Returns `None` if there is no such edge.
    pub fn find_edge(&self, u: usize, v: usize) -> Option<&Edge<W>> {
        self.adj
            .get(u)?
            .iter()
            .map(|&e| &self.edges[e])
            .find(|e| e.other(u) == v)
    }

    /// Return an iterator over the incident edges of `u` and the opposite vertices.
    pub fn neighs(&self, u: usize) -> Neighs<W> {
        Neighs {
            g: self,
            u,
            it: self.adj[u].iter(),
        }
    }

    /// Return the vertices adjacent to `u`.
    ///
    /// A vertex connected by several edges is returned several times.
    pub fn adjacent_vertices(&self, u: usize) -> impl Iterator<Item = &Vertex> + '_ {
        self.neighs(u).map(move |(_, v)| &self.vertices[v])
    }
}

impl<W: Copy> Graph<W> {
    /// Return the adjacency matrix of the graph.
    ///
    /// Entry `(u,v)` contains the weight of the first edge between `u` and
    /// `v` or `None` if both vertices are not adjacent. The matrix is
    /// symmetric.
    pub fn adjacency_matrix(&self) -> Vec<Vec<Option<W>>> {
        let n = self.num_vertices();
        let mut matrix = vec![vec![None; n]; n];
        for e in &self.edges {
            if matrix[e.u][e.v].is_none() {
                matrix[e.u][e.v] = Some(e.weight);
                matrix[e.v][e.u] = Some(e.weight);
            }
        }
        matrix
    }
}

impl<W> Default for Graph<W> {
    fn default() -> Self {
        Graph::new()
    }
}

/// Iterator over the incident edges of a vertex.
pub struct Neighs<'a, W> {
    g: &'a Graph<W>,
    u: usize,
    it: SliceIter<'a, usize>,
}

impl<'a, W> Iterator for Neighs<'a, W> {
    type Item = (&'a Edge<W>, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.u;
        let g = self.g;
        self.it.next().map(|&e| {
            let edge = &g.edges[e];
            (edge, edge.other(u))
        })
    }
}

impl<'a, W: 'a> WeightedGraph<'a> for Graph<W> {
    type Weight = W;
    type NeighIt = Neighs<'a, W>;

    fn num_vertices(&self) -> usize {
        Graph::num_vertices(self)
    }

    fn vertex(&self, u: usize) -> &Vertex {
        Graph::vertex(self, u)
    }

    fn vertex_id(&self, name: &str) -> Option<usize> {
        Graph::vertex_id(self, name)
    }

    fn neighbors(&'a self, u: usize) -> Neighs<'a, W> {
        self.neighs(u)
    }

    fn find_edge(&self, u: usize, v: usize) -> Option<&Edge<W>> {
        Graph::find_edge(self, u, v)
    }
}
