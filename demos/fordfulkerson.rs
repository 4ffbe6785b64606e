/*
 * Copyright (c) 2018, 2021, 2023 Frank Fischer <frank-fischer@shadow-soft.de>
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

use time::OffsetDateTime;

use rustop::opts;

use graph_lab::FlowNetwork;

fn print_matrix<T: std::fmt::Display>(name: &str, m: &[Vec<T>]) {
    println!("{}:", name);
    for row in m {
        let row: Vec<_> = row.iter().map(|x| format!("{:>3}", x)).collect();
        println!("  {}", row.join(" "));
    }
}

fn main() {
    env_logger::init();

    let (args, _) = opts! {
        synopsis "Solve the textbook max-flow instance with the Ford-Fulkerson method.";
        opt source:usize=0, desc:"The source vertex.";
        opt sink:usize=5, desc:"The sink vertex.";
        opt steps:bool, desc:"Print every augmenting path.";
    }
    .parse_or_exit();

    let capacities: Vec<Vec<u32>> = vec![
        vec![0, 16, 13, 0, 0, 0],
        vec![0, 0, 10, 12, 0, 0],
        vec![0, 4, 0, 0, 14, 0],
        vec![0, 0, 9, 0, 0, 20],
        vec![0, 0, 0, 7, 0, 4],
        vec![0, 0, 0, 0, 0, 0],
    ];
    let n = capacities.len();
    if args.source >= n || args.sink >= n {
        eprintln!("Source and sink must be smaller than {}", n);
        std::process::exit(1);
    }

    let mut net = FlowNetwork::new(capacities);

    let tstart = OffsetDateTime::now_utc();
    let value = if args.steps {
        let mut total = 0;
        loop {
            let df = net.step(args.source, args.sink);
            if df == 0 {
                break;
            }
            total += df;
            let path: Vec<_> = net
                .latest_augmenting_path()
                .iter()
                .enumerate()
                .flat_map(|(i, row)| row.iter().enumerate().filter(|&(_, &u)| u).map(move |(j, _)| (i, j)))
                .collect();
            println!("Augment by {:>3} along {:?}", df, path);
        }
        total
    } else {
        net.max_flow(args.source, args.sink)
    };
    let tend = OffsetDateTime::now_utc();

    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("Flow: {}", value);
    print_matrix("Flow", net.current_flow());
    print_matrix("Residual", net.residual_graph());
    println!("Min cut: {:?}", net.mincut(args.source));
}
