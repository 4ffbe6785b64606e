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

use crate::graph::Vertex;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A waypoint on a shortest path.
///
/// Contains the vertex and the distance covered from the start of the path
/// up to (and including) this vertex.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Step<W> {
    pub point: Vertex,
    pub covered_distance: W,
}

impl<W> Step<W> {
    pub fn new(point: Vertex, covered_distance: W) -> Self {
        Step {
            point,
            covered_distance,
        }
    }
}
