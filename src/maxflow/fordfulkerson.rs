/*
 * Copyright (c) 2017, 2018, 2022, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! The Ford-Fulkerson method on a capacity matrix.
//!
//! Augmenting paths are found by breadth-first search in the residual
//! graph, i.e. each augmenting path has the smallest possible number of
//! edges. This is the variant of Edmonds and Karp, which needs at most
//! $O(|V| \cdot |E|)$ augmentations.
//!
//! The network keeps every intermediate state (residual capacities, current
//! flow and the latest augmenting path) so that single augmentation steps
//! can be inspected.
//!
//! # Example
//!
//! ```
//! use graph_lab::maxflow::FlowNetwork;
//!
//! let mut net = FlowNetwork::new(vec![
//!     vec![0, 16, 13, 0, 0, 0],
//!     vec![0, 0, 10, 12, 0, 0],
//!     vec![0, 4, 0, 0, 14, 0],
//!     vec![0, 0, 9, 0, 0, 20],
//!     vec![0, 0, 0, 7, 0, 4],
//!     vec![0, 0, 0, 0, 0, 0],
//! ]);
//!
//! // the first augmenting path is 0 -> 1 -> 3 -> 5
//! assert_eq!(net.step(0, 5), 12);
//! assert!(net.latest_augmenting_path()[1][3]);
//!
//! assert_eq!(net.max_flow(0, 5), 11);
//! assert_eq!(net.value(0), 23);
//! assert_eq!(net.step(0, 5), 0);
//!
//! let mut cut = net.mincut(0);
//! cut.sort();
//! assert_eq!(cut, vec![0, 1, 2, 4]);
//! ```

use crate::num::traits::NumAssign;

use log::{debug, info, trace};
use std::cmp::min;
use std::collections::VecDeque;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A flow network given by a capacity matrix.
///
/// Entry `(i,j)` of the capacity matrix is the capacity of the directed edge
/// from vertex `i` to vertex `j`, zero meaning that there is no such edge.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct FlowNetwork<F> {
    graph: Vec<Vec<F>>,
    residual_graph: Vec<Vec<F>>,
    current_flow: Vec<Vec<F>>,
    latest_augmenting_path: Vec<Vec<bool>>,
}

impl<F> FlowNetwork<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a new network with zero flow.
    ///
    /// # Panics
    ///
    /// If the capacity matrix is not square.
    pub fn new(capacities: Vec<Vec<F>>) -> Self {
        let n = capacities.len();
        assert!(
            capacities.iter().all(|row| row.len() == n),
            "Capacity matrix must be square"
        );
        FlowNetwork {
            residual_graph: capacities.clone(),
            graph: capacities,
            current_flow: vec![vec![F::zero(); n]; n],
            latest_augmenting_path: vec![vec![false; n]; n],
        }
    }

    /// Return the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.graph.len()
    }

    /// Return the original capacities.
    pub fn graph(&self) -> &[Vec<F>] {
        &self.graph
    }

    /// Return the remaining capacity of each directed edge.
    pub fn residual_graph(&self) -> &[Vec<F>] {
        &self.residual_graph
    }

    /// Return the current flow on each directed edge.
    pub fn current_flow(&self) -> &[Vec<F>] {
        &self.current_flow
    }

    /// Return the edges of the augmenting path of the latest step.
    ///
    /// The matrix is all `false` if the latest step did not find a path.
    pub fn latest_augmenting_path(&self) -> &[Vec<bool>] {
        &self.latest_augmenting_path
    }

    /// Return the total flow on the edges leaving `u`.
    pub fn outflow(&self, u: usize) -> F {
        self.current_flow[u].iter().fold(F::zero(), |acc, &f| acc + f)
    }

    /// Return the total flow on the edges entering `u`.
    pub fn inflow(&self, u: usize) -> F {
        self.current_flow.iter().fold(F::zero(), |acc, row| acc + row[u])
    }

    /// Return the net amount of flow leaving the source `src`.
    ///
    /// The inflow of `src` must not exceed its outflow (which is always
    /// true if `src` has only been used as source).
    pub fn value(&self, src: usize) -> F {
        self.outflow(src) - self.inflow(src)
    }

    /// Augment the flow from `src` to `snk` along one shortest augmenting path.
    ///
    /// Returns the amount by which the flow has increased, which is zero if
    /// there is no augmenting path. In this case the flow and the residual
    /// graph are not changed.
    pub fn step(&mut self, src: usize, snk: usize) -> F {
        if self.bfs(src, snk).is_none() {
            trace!("No augmenting path from {} to {}", src, snk);
            return F::zero();
        }

        let cells: Vec<(usize, usize)> = self
            .latest_augmenting_path
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().filter(|&(_, &used)| used).map(move |(j, _)| (i, j)))
            .collect();

        let df = match cells.iter().map(|&(i, j)| self.residual_graph[i][j]).min() {
            Some(df) => df,
            None => return F::zero(),
        };
        debug_assert!(!df.is_zero());

        let (old_out, old_in) = (self.outflow(src), self.inflow(src));

        for &(i, j) in &cells {
            if self.graph[i][j].is_zero() {
                // backward edge, cancel flow on (j,i)
                self.current_flow[j][i] -= df;
            } else {
                // flow on an antiparallel edge is cancelled first
                let cancel = min(df, self.current_flow[j][i]);
                self.current_flow[j][i] -= cancel;
                self.current_flow[i][j] += df - cancel;
            }
            self.residual_graph[i][j] -= df;
            self.residual_graph[j][i] += df;
        }

        let (new_out, new_in) = (self.outflow(src), self.inflow(src));
        // the flow value is recomputed from the source, it must match the bottleneck
        let delta = (new_out + old_in) - (old_out + new_in);
        debug_assert!(delta == df);

        debug!("Augmented flow along {} edges", cells.len());
        delta
    }

    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// Augmentation steps are repeated until no augmenting path is left. The
    /// computation continues from the current flow; the return value is the
    /// total increase of the flow.
    pub fn max_flow(&mut self, src: usize, snk: usize) -> F {
        let mut total = F::zero();
        let mut nsteps = 0usize;
        loop {
            let df = self.step(src, snk);
            if df.is_zero() {
                break;
            }
            total += df;
            nsteps += 1;
        }
        info!("Maximum flow from {} to {} after {} augmentations", src, snk, nsteps);
        total
    }

    /// Return the vertices reachable from `src` in the residual graph.
    ///
    /// After a maximum flow computation these form the source side of a
    /// minimum cut.
    pub fn mincut(&self, src: usize) -> Vec<usize> {
        let n = self.num_vertices();
        let mut seen = vec![false; n];
        let mut queue = VecDeque::with_capacity(n);
        seen[src] = true;
        queue.push_back(src);
        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if !seen[v] && !self.residual_graph[u][v].is_zero() {
                    seen[v] = true;
                    queue.push_back(v);
                }
            }
        }
        (0..n).filter(|&u| seen[u]).collect()
    }

    /// Search a shortest path from `src` to `snk` in the residual graph.
    ///
    /// The edges of the path are marked in `latest_augmenting_path`, which
    /// is cleared first. Returns the BFS predecessor of each vertex or
    /// `None` if `snk` cannot be reached from `src`.
    fn bfs(&mut self, src: usize, snk: usize) -> Option<Vec<Option<usize>>> {
        for row in &mut self.latest_augmenting_path {
            for used in row.iter_mut() {
                *used = false;
            }
        }

        let n = self.num_vertices();
        let mut pred = vec![None; n];
        let mut seen = vec![false; n];
        let mut queue = VecDeque::with_capacity(n);
        seen[src] = true;
        queue.push_back(src);

        while let Some(u) = queue.pop_front() {
            for v in 0..n {
                if seen[v] || self.residual_graph[u][v].is_zero() {
                    continue;
                }
                trace!("BFS visits {} from {}", v, u);
                seen[v] = true;
                pred[v] = Some(u);
                queue.push_back(v);

                if v == snk {
                    let mut v = snk;
                    while let Some(u) = pred[v] {
                        self.latest_augmenting_path[u][v] = true;
                        v = u;
                    }
                    return Some(pred);
                }
            }
        }

        None
    }
}

/// Solve the maxflow problem using the Ford-Fulkerson method.
///
/// The function solves the max flow problem from the source vertex `src` to
/// the sink vertex `snk` on the given capacity matrix.
///
/// The function returns the flow value, the flow on each edge and the
/// vertices in a minimal cut.
pub fn fordfulkerson<F>(capacities: Vec<Vec<F>>, src: usize, snk: usize) -> (F, Vec<Vec<F>>, Vec<usize>)
where
    F: NumAssign + Ord + Copy,
{
    let mut net = FlowNetwork::new(capacities);
    let value = net.max_flow(src, snk);
    let mincut = net.mincut(src);
    (value, net.current_flow, mincut)
}
