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

use rustop::opts;

use graph_lab::campus;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Shortest paths on the campus map.";
        opt matrix:bool, desc:"Print the adjacency matrix.";
        opt to:Option<String>, desc:"Print the shortest path to this location.";
        param origin:String, desc:"Start location";
    }
    .parse_or_exit();

    let map = campus::map();

    if args.matrix {
        let g = map.graph();
        for (u, row) in g.adjacency_matrix().iter().enumerate() {
            let row: Vec<_> = row
                .iter()
                .map(|w| w.map_or_else(|| "-".to_string(), |w| w.to_string()))
                .collect();
            println!("{:>10}: {}", g.vertex(u), row.join(" "));
        }
        println!();
    }

    if let Some(destination) = args.to {
        match map.shortest_path_from_to(&args.origin, &destination)? {
            Some(path) => {
                for step in path {
                    println!("{:>10} {:>5}", step.point, step.covered_distance);
                }
            }
            None => println!("No path from {} to {}", args.origin, destination),
        }
        return Ok(());
    }

    let dist = map.shortest_distances_from(&args.origin)?;
    let steps = map.step_count_from(&args.origin)?;
    for name in campus::LOCATIONS.iter() {
        println!("{:>10} distance: {:>5} steps: {:>2}", name, dist[name], steps[name]);
    }

    Ok(())
}
