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

use graph_lab::campus::{self, LOCATIONS};
use graph_lab::Error;

use std::error;

#[test]
fn test_distance_to_itself() -> Result<(), Box<dyn error::Error>> {
    let map = campus::map();
    for &u in LOCATIONS.iter() {
        assert_eq!(map.shortest_distances_from(u)?[u], 0, "Vertex: {}", u);
    }
    Ok(())
}

#[test]
fn test_symmetry() -> Result<(), Box<dyn error::Error>> {
    let map = campus::map();
    for &u in LOCATIONS.iter() {
        let from_u = map.shortest_distances_from(u)?;
        for &v in LOCATIONS.iter() {
            let from_v = map.shortest_distances_from(v)?;
            assert_eq!(from_u[v], from_v[u], "{} <-> {}", u, v);
        }
    }
    Ok(())
}

#[test]
fn test_paths_are_walks() -> Result<(), Box<dyn error::Error>> {
    let map = campus::map();
    let g = map.graph();
    for &u in LOCATIONS.iter() {
        let dist = map.shortest_distances_from(u)?;
        for &v in LOCATIONS.iter() {
            if u == v {
                continue;
            }
            let path = match map.shortest_path_from_to(u, v)? {
                Some(path) => path,
                None => {
                    assert_eq!(dist[v], -1, "{} -> {}", u, v);
                    continue;
                }
            };
            assert_eq!(path[0].point.name(), u);
            assert_eq!(path[0].covered_distance, 0);
            assert_eq!(path[path.len() - 1].point.name(), v);
            assert_eq!(path[path.len() - 1].covered_distance, dist[v]);

            let mut total = 0;
            for w in path.windows(2) {
                let a = g.vertex_id(w[0].point.name()).unwrap();
                let b = g.vertex_id(w[1].point.name()).unwrap();
                let e = g.find_edge(a, b).expect("consecutive steps must be adjacent");
                total += e.weight;
                assert_eq!(w[1].covered_distance, total);
            }
            assert_eq!(total, dist[v]);
        }
    }
    Ok(())
}

#[test]
fn test_equal_endpoints() {
    let map = campus::map();
    for &u in LOCATIONS.iter() {
        assert!(matches!(map.shortest_path_from_to(u, u), Err(Error::InvalidArgument(_))));
    }
}

#[test]
fn test_unknown_vertex() {
    let map = campus::map();
    assert!(map.shortest_distances_from("Mensa").is_err());
    assert!(map.step_count_from("Mensa").is_err());
    assert!(map.shortest_path_from_to("Mensa", "LIT").is_err());
    assert!(map.shortest_path_from_to("LIT", "Mensa").is_err());
}

#[test]
fn test_unreachable_iff_no_steps() -> Result<(), Box<dyn error::Error>> {
    let map = campus::map();
    for &u in LOCATIONS.iter() {
        let dist = map.shortest_distances_from(u)?;
        let steps = map.step_count_from(u)?;
        for &v in LOCATIONS.iter() {
            assert_eq!(dist[v] == -1, steps[v] == -1, "{} -> {}", u, v);
        }
    }
    Ok(())
}

#[test]
fn test_open_lab() -> Result<(), Box<dyn error::Error>> {
    let map = campus::map();
    let dist = map.shortest_distances_from("Open Lab")?;
    assert_eq!(dist["Porter"], 70);
    assert_eq!(dist["LIT"], 150);
    assert_eq!(dist["Spar"], 173);
    assert_eq!(dist["Bank"], 170);
    assert_eq!(dist["Castle"], -1);
    assert_eq!(dist["Papaya"], -1);
    assert_eq!(dist["JKH"], -1);

    let steps = map.step_count_from("Open Lab")?;
    assert_eq!(steps["Open Lab"], 0);
    assert_eq!(steps["Porter"], 1);
    assert_eq!(steps["LIT"], 2);
    assert_eq!(steps["Spar"], 2);
    assert_eq!(steps["JKH"], -1);
    Ok(())
}

#[test]
fn test_teichwerk_library() -> Result<(), Box<dyn error::Error>> {
    let map = campus::map();
    let path = map
        .shortest_path_from_to("Teichwerk", "Library")?
        .expect("Library is reachable");
    let steps: Vec<_> = path.iter().map(|s| (s.point.name(), s.covered_distance)).collect();
    assert_eq!(steps, vec![("Teichwerk", 0), ("LUI", 135), ("Library", 225)]);
    Ok(())
}

#[test]
fn test_separate_component() -> Result<(), Box<dyn error::Error>> {
    let map = campus::map();
    let path = map.shortest_path_from_to("Castle", "JKH")?.expect("JKH is reachable");
    let names: Vec<_> = path.iter().map(|s| s.point.name()).collect();
    assert_eq!(names, vec!["Castle", "Papaya", "JKH"]);
    assert_eq!(path[2].covered_distance, 165);

    assert!(map.shortest_path_from_to("Castle", "Spar")?.is_none());
    Ok(())
}
