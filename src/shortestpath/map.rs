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

//! All-pairs shortest paths on a map of named places.
//!
//! A [`ShortestPathMap`] runs [Dijkstra's algorithm][super::dijkstra] once
//! for every vertex when it is created. All queries are answered from the
//! stored tables.
//!
//! Unreachable destinations are reported with the sentinel `-1` by the
//! queries returning distances or step counts.
//!
//! # Example
//!
//! ```
//! use graph_lab::{Graph, ShortestPathMap};
//!
//! let mut g = Graph::new();
//! g.insert_edge_by_vertex_names("home", "bakery", 300);
//! g.insert_edge_by_vertex_names("bakery", "office", 500);
//! g.insert_vertex("island");
//!
//! let map = ShortestPathMap::new(g);
//! let dist = map.shortest_distances_from("home").unwrap();
//! assert_eq!(dist["office"], 800);
//! assert_eq!(dist["island"], -1);
//!
//! let path = map.shortest_path_from_to("office", "home").unwrap().unwrap();
//! assert_eq!(path.len(), 3);
//! assert!(map.shortest_path_from_to("home", "island").unwrap().is_none());
//! assert!(map.shortest_path_from_to("home", "home").is_err());
//! ```

use super::dijkstra;
use super::Step;
use crate::error::{Error, Result};
use crate::graph::Graph;

use crate::num::traits::Signed;

use log::{debug, info};
use std::collections::HashMap;

/// Precomputed shortest paths between all pairs of vertices of a graph.
pub struct ShortestPathMap<W> {
    graph: Graph<W>,
    /// `distances[u][v]` is the length of a shortest path from `u` to `v`.
    distances: Vec<Vec<Option<W>>>,
    /// `paths[u][v]` are the steps of a shortest path from `u` to `v`.
    paths: Vec<Vec<Vec<Step<W>>>>,
}

impl<W> ShortestPathMap<W>
where
    W: Copy + PartialOrd + Signed,
{
    /// Compute all shortest paths of `graph`.
    ///
    /// All edge weights must be non-negative.
    pub fn new(graph: Graph<W>) -> Self {
        let mut distances = Vec::with_capacity(graph.num_vertices());
        let mut paths = Vec::with_capacity(graph.num_vertices());
        for u in 0..graph.num_vertices() {
            let sp = dijkstra::run(&graph, u);
            debug!(
                "Shortest paths from {}: {} reachable vertices",
                graph.vertex(u),
                sp.distances.iter().filter(|d| d.is_some()).count()
            );
            distances.push(sp.distances);
            paths.push(sp.paths);
        }
        info!(
            "Computed shortest paths for {} vertices and {} edges",
            graph.num_vertices(),
            graph.num_edges()
        );

        ShortestPathMap {
            graph,
            distances,
            paths,
        }
    }

    /// Return the underlying graph.
    pub fn graph(&self) -> &Graph<W> {
        &self.graph
    }

    fn lookup(&self, name: &str, role: &str) -> Result<usize> {
        self.graph
            .vertex_id(name)
            .ok_or_else(|| Error::InvalidArgument(format!("{} '{}' is not a vertex of the map", role, name)))
    }

    /// Return the shortest distance from `origin` to every vertex.
    ///
    /// The map is keyed by vertex name. Unreachable vertices have distance `-1`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `origin` is not a vertex of the map.
    pub fn shortest_distances_from(&self, origin: &str) -> Result<HashMap<&str, W>> {
        let u = self.lookup(origin, "origin")?;
        Ok(self
            .graph
            .vertices()
            .zip(&self.distances[u])
            .map(|(v, d)| (v.name(), d.unwrap_or_else(|| -W::one())))
            .collect())
    }

    /// Return the steps of a shortest path from `origin` to `destination`.
    ///
    /// Returns `None` if `destination` cannot be reached.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if one of the vertices is not a vertex of the map or
    /// if both are equal.
    pub fn shortest_path_from_to(&self, origin: &str, destination: &str) -> Result<Option<&[Step<W>]>> {
        let u = self.lookup(origin, "origin")?;
        let v = self.lookup(destination, "destination")?;
        if u == v {
            return Err(Error::InvalidArgument(format!(
                "origin and destination are both '{}'",
                origin
            )));
        }
        let path = &self.paths[u][v];
        Ok(if path.is_empty() { None } else { Some(path) })
    }

    /// Return the number of edges on the shortest path from `origin` to every vertex.
    ///
    /// The map is keyed by vertex name. The origin has step count 0,
    /// unreachable vertices have step count `-1`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `origin` is not a vertex of the map.
    pub fn step_count_from(&self, origin: &str) -> Result<HashMap<&str, i64>> {
        let u = self.lookup(origin, "origin")?;
        Ok(self
            .graph
            .vertices()
            .enumerate()
            .map(|(v, vertex)| {
                let steps = if v == u {
                    0
                } else if self.distances[u][v].is_none() {
                    -1
                } else {
                    self.paths[u][v].len() as i64 - 1
                };
                (vertex.name(), steps)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::ShortestPathMap;
    use crate::error::Error;
    use crate::Graph;

    fn square() -> ShortestPathMap<i32> {
        // a -1- b
        // |     |
        // 4     1
        // |     |
        // d -1- c     e
        let mut g = Graph::new();
        g.insert_edge_by_vertex_names("a", "b", 1);
        g.insert_edge_by_vertex_names("b", "c", 1);
        g.insert_edge_by_vertex_names("c", "d", 1);
        g.insert_edge_by_vertex_names("d", "a", 4);
        g.insert_vertex("e");
        ShortestPathMap::new(g)
    }

    #[test]
    fn test_distances() {
        let map = square();
        let dist = map.shortest_distances_from("a").unwrap();
        assert_eq!(dist.len(), 5);
        assert_eq!(dist["a"], 0);
        assert_eq!(dist["b"], 1);
        assert_eq!(dist["c"], 2);
        assert_eq!(dist["d"], 3);
        assert_eq!(dist["e"], -1);

        let dist = map.shortest_distances_from("e").unwrap();
        assert_eq!(dist["e"], 0);
        assert!(["a", "b", "c", "d"].iter().all(|v| dist[v] == -1));
    }

    #[test]
    fn test_path() {
        let map = square();
        let path = map.shortest_path_from_to("d", "a").unwrap().unwrap();
        let steps: Vec<_> = path.iter().map(|s| (s.point.name(), s.covered_distance)).collect();
        assert_eq!(steps, vec![("d", 0), ("c", 1), ("b", 2), ("a", 3)]);
    }

    #[test]
    fn test_step_counts() {
        let map = square();
        let steps = map.step_count_from("a").unwrap();
        assert_eq!(steps["a"], 0);
        assert_eq!(steps["b"], 1);
        assert_eq!(steps["d"], 3);
        assert_eq!(steps["e"], -1);

        let steps = map.step_count_from("e").unwrap();
        assert_eq!(steps["e"], 0);
        assert_eq!(steps["a"], -1);
    }

    #[test]
    fn test_invalid_arguments() {
        let map = square();
        assert!(matches!(map.shortest_distances_from("z"), Err(Error::InvalidArgument(_))));
        assert!(matches!(map.step_count_from(""), Err(Error::InvalidArgument(_))));
        assert!(matches!(map.shortest_path_from_to("a", "z"), Err(Error::InvalidArgument(_))));
        assert!(matches!(map.shortest_path_from_to("z", "a"), Err(Error::InvalidArgument(_))));
        assert!(matches!(map.shortest_path_from_to("c", "c"), Err(Error::InvalidArgument(_))));
        assert!(matches!(map.shortest_path_from_to("e", "e"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_no_path() {
        let map = square();
        assert_eq!(map.shortest_path_from_to("a", "e"), Ok(None));
        assert_eq!(map.shortest_path_from_to("e", "b"), Ok(None));
    }
}
