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

//! The campus map.
//!
//! 17 points of interest connected by 19 footpaths, lengths in meters.
//! Castle, Papaya and JKH are not connected to the rest of the campus.
//!
//! # Example
//!
//! ```
//! use graph_lab::campus;
//!
//! let map = campus::map();
//! let dist = map.shortest_distances_from("Open Lab").unwrap();
//! assert_eq!(dist["Porter"], 70);
//! assert_eq!(dist["LIT"], 150);
//! assert_eq!(dist["Castle"], -1);
//! ```

use crate::graph::Graph;
use crate::shortestpath::ShortestPathMap;

/// Names of all points of interest.
pub const LOCATIONS: [&str; 17] = [
    "Spar",
    "LIT",
    "Porter",
    "Open Lab",
    "Bank",
    "KHG",
    "Parking",
    "Chat",
    "Bella Casa",
    "Teichwerk",
    "Library",
    "LUI",
    "SP1",
    "SP3",
    "Castle",
    "Papaya",
    "JKH",
];

/// Footpaths between two locations with their length.
pub const PATHS: [(&str, &str, i64); 19] = [
    ("Open Lab", "Porter", 70),
    ("LIT", "Porter", 80),
    ("LIT", "Spar", 50),
    ("Spar", "Porter", 103),
    ("Bank", "Porter", 100),
    ("Spar", "KHG", 165),
    ("KHG", "Bank", 150),
    ("KHG", "Parking", 190),
    ("Parking", "Bella Casa", 145),
    ("Parking", "SP1", 240),
    ("SP1", "SP3", 130),
    ("SP1", "LUI", 175),
    ("Teichwerk", "LUI", 135),
    ("LUI", "Library", 90),
    ("LUI", "Chat", 240),
    ("Chat", "Library", 160),
    ("Chat", "Bank", 115),
    ("Papaya", "Castle", 85),
    ("Papaya", "JKH", 80),
];

/// Return the campus graph.
pub fn graph() -> Graph<i64> {
    let mut g = Graph::new();
    for name in LOCATIONS.iter() {
        g.insert_vertex(name);
    }
    for &(a, b, length) in PATHS.iter() {
        g.insert_edge_by_vertex_names(a, b, length);
    }
    g
}

/// Return the campus map with all shortest paths computed.
pub fn map() -> ShortestPathMap<i64> {
    ShortestPathMap::new(graph())
}
