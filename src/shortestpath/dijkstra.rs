/*
 * Copyright (c) 2017, 2018, 2021, 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start vertex $s
//! \in V$ to all other vertices in an undirected graph. Each edge is
//! assigned a non-negative weight (or length) $w \colon E \to \mathbb{R}_+$.
//! Negative weights are not detected, the result is meaningless in this
//! case.
//!
//! This implementation selects the next vertex by a linear scan over all
//! unvisited vertices, i.e. it runs in $O(|V|^2)$. Among vertices with equal
//! distance the one with the smallest index is chosen.
//!
//! # Example
//!
//! ```
//! use graph_lab::Graph;
//! use graph_lab::shortestpath::dijkstra;
//!
//! let mut g = Graph::new();
//! g.insert_edge_by_vertex_names("a", "b", 9);
//! g.insert_edge_by_vertex_names("a", "c", 2);
//! g.insert_edge_by_vertex_names("c", "b", 5);
//! g.insert_vertex("d");
//!
//! let sp = dijkstra::run(&g, 0);
//! assert_eq!(sp.distances, vec![Some(0), Some(7), Some(2), None]);
//!
//! let names: Vec<_> = sp.paths[1].iter().map(|s| s.point.name()).collect();
//! assert_eq!(names, vec!["a", "c", "b"]);
//! assert!(sp.paths[3].is_empty());
//! ```

use super::Step;
use crate::traits::WeightedGraph;

use crate::num::traits::Zero;

use log::trace;

/// Shortest paths from a single origin.
#[derive(Clone, Debug)]
pub struct ShortestPaths<W> {
    /// The origin vertex.
    pub origin: usize,
    /// Distance to each vertex, `None` if it is unreachable.
    pub distances: Vec<Option<W>>,
    /// The steps of a shortest path to each vertex.
    ///
    /// The path to an unreachable vertex as well as the path from the
    /// origin to itself is empty.
    pub paths: Vec<Vec<Step<W>>>,
}

/// Run Dijkstra's algorithm from `origin`.
///
/// # Panics
///
/// If `origin` is not a vertex index of `g`.
pub fn run<'a, G>(g: &'a G, origin: usize) -> ShortestPaths<G::Weight>
where
    G: WeightedGraph<'a>,
    G::Weight: Copy + PartialOrd + Zero,
{
    let n = g.num_vertices();
    assert!(origin < n, "Invalid origin vertex");

    let mut distances: Vec<Option<G::Weight>> = vec![None; n];
    let mut paths: Vec<Vec<Step<G::Weight>>> = (0..n).map(|_| Vec::new()).collect();
    let mut visited = vec![false; n];

    distances[origin] = Some(G::Weight::zero());
    let mut current = Some(origin);

    while let Some(u) = current {
        visited[u] = true;
        let du = match distances[u] {
            Some(d) => d,
            None => break,
        };

        for (e, v) in g.neighbors(u) {
            if visited[v] {
                continue;
            }
            let dv = du + e.weight;
            if distances[v].map_or(true, |d| dv < d) {
                trace!("Relax {} -> {}", g.vertex(u), g.vertex(v));
                distances[v] = Some(dv);
                // the origin itself is not stored as its own path
                let mut path = if paths[u].is_empty() {
                    vec![Step::new(g.vertex(u).clone(), du)]
                } else {
                    paths[u].clone()
                };
                path.push(Step::new(g.vertex(v).clone(), dv));
                paths[v] = path;
            }
        }

        current = next_vertex(&distances, &visited);
    }

    ShortestPaths {
        origin,
        distances,
        paths,
    }
}

/// Return the unvisited vertex with smallest finite distance.
fn next_vertex<W>(distances: &[Option<W>], visited: &[bool]) -> Option<usize>
where
    W: Copy + PartialOrd,
{
    let mut best: Option<(usize, W)> = None;
    for (v, d) in distances.iter().enumerate() {
        if visited[v] {
            continue;
        }
        if let Some(d) = *d {
            match best {
                Some((_, bd)) if !(d < bd) => {}
                _ => best = Some((v, d)),
            }
        }
    }
    best.map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::{next_vertex, run};
    use crate::Graph;

    #[test]
    fn test_ties_prefer_smaller_index() {
        let distances = vec![Some(0), Some(5), Some(3), Some(3), None];
        let visited = vec![true, false, false, false, false];
        assert_eq!(next_vertex(&distances, &visited), Some(2));

        let visited = vec![true, true, true, true, false];
        assert_eq!(next_vertex(&distances, &visited), None);
    }

    #[test]
    fn test_shorter_detour() {
        //  a --1-- b --1-- c
        //   \_____10______/
        let mut g = Graph::new();
        g.insert_edge_by_vertex_names("a", "c", 10);
        g.insert_edge_by_vertex_names("a", "b", 1);
        g.insert_edge_by_vertex_names("b", "c", 1);

        let sp = run(&g, 0);
        let c = g.vertex_id("c").unwrap();
        assert_eq!(sp.distances[c], Some(2));
        let dists: Vec<_> = sp.paths[c].iter().map(|s| s.covered_distance).collect();
        assert_eq!(dists, vec![0, 1, 2]);
    }

    #[test]
    fn test_parallel_edges() {
        let mut g = Graph::new();
        g.insert_edge_by_vertex_names("a", "b", 7);
        g.insert_edge_by_vertex_names("b", "a", 4);

        let sp = run(&g, 1);
        assert_eq!(sp.distances, vec![Some(4), Some(0)]);
        assert_eq!(sp.paths[0].len(), 2);
    }

    #[test]
    fn test_isolated_origin() {
        let mut g = Graph::new();
        g.insert_vertex("x");
        g.insert_edge_by_vertex_names("a", "b", 1.5);

        let sp = run(&g, 0);
        assert_eq!(sp.distances, vec![Some(0.0), None, None]);
        assert!(sp.paths.iter().all(|p| p.is_empty()));
    }
}
