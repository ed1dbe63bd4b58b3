/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

use rs_pathfind::search::{astar, bfs};
use rs_pathfind::shortestpath::{bellmanford, dijkstra};
use rs_pathfind::Error;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use std::collections::{BTreeMap, HashMap, HashSet};

const SEEDS: &[u64] = &[1, 7, 42, 1234, 98765];

/// Random edges `(u, v, w)` with `lo <= w < hi`.
fn random_edges(seed: u64, n: u64, m: usize, lo: i64, hi: i64) -> Vec<(u64, u64, i64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(lo..hi)))
        .collect()
}

fn weighted(n: u64, edges: &[(u64, u64, i64)]) -> BTreeMap<u64, BTreeMap<u64, i64>> {
    let mut g = BTreeMap::new();
    for u in 0..n {
        g.insert(u, BTreeMap::new());
    }
    for &(u, v, w) in edges {
        g.entry(u).or_insert_with(BTreeMap::new).insert(v, w);
    }
    g
}

fn unweighted(n: u64, edges: &[(u64, u64, i64)]) -> HashMap<u64, Vec<u64>> {
    let mut g = HashMap::new();
    for u in 0..n {
        g.insert(u, vec![]);
    }
    for &(u, v, _) in edges {
        let neighs = g.entry(u).or_insert_with(Vec::new);
        if !neighs.contains(&v) {
            neighs.push(v);
        }
    }
    g
}

fn path_weight(g: &BTreeMap<u64, BTreeMap<u64, i64>>, path: &[u64]) -> i64 {
    path.windows(2).map(|e| g[&e[0]][&e[1]]).sum()
}

#[test]
fn test_unit_weights_agree() {
    for &seed in SEEDS {
        let n = 40;
        let g = unweighted(n, &random_edges(seed, n, 80, 0, 1));
        for src in 0..5 {
            let hops = bfs::distances(&g, src);
            let tree = dijkstra::shortest_paths(&g, src);
            let settled = astar::start(&g, src, |_: &u64| 0)
                .map(|(u, _, d)| (u, d))
                .collect::<HashMap<_, _>>();
            assert_eq!(&hops, tree.distances());
            assert_eq!(hops, settled);

            for dst in 0..n {
                match bfs::shortest_path(&g, src, dst) {
                    Ok((d, path)) => {
                        assert_eq!(Some(&d), hops.get(&dst));
                        assert_eq!(path.len(), d + 1);
                    }
                    Err(err) => {
                        assert_eq!(err, Error::NoPath { src, dst });
                        assert!(!hops.contains_key(&dst));
                    }
                }
            }
        }
    }
}

#[test]
fn test_paths_match_distances() {
    for &seed in SEEDS {
        let n = 30;
        let g = weighted(n, &random_edges(seed, n, 100, 0, 20));
        for src in 0..n {
            let tree = dijkstra::shortest_paths(&g, src);
            let bf = bellmanford::shortest_paths(&g, src).unwrap();
            assert_eq!(tree.distances(), bf.distances());

            for (v, &d) in tree.distances() {
                let path = tree.path_to(v).unwrap();
                assert_eq!(path_weight(&g, &path), d);
                assert_eq!(path[0], src);

                let (d2, path2) = dijkstra::find_path(&g, src, *v).unwrap();
                assert_eq!(d2, d);
                assert_eq!(path_weight(&g, &path2), d);

                let (d3, path3) = bellmanford::path_to(&g, src, *v).unwrap();
                assert_eq!(d3, d);
                assert_eq!(path_weight(&g, &path3), d);
            }
        }
    }
}

#[test]
fn test_astar_admissible() {
    // grid graph with random weights >= 1, so manhattan distance is admissible
    let size = 8i64;
    for &seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut g: HashMap<(i64, i64), HashMap<(i64, i64), i64>> = HashMap::new();
        for x in 0..size {
            for y in 0..size {
                for &(dx, dy) in &[(1, 0), (-1, 0), (0, 1), (0, -1)] {
                    let (nx, ny) = (x + dx, y + dy);
                    if 0 <= nx && nx < size && 0 <= ny && ny < size {
                        let w = rng.gen_range(1..=5);
                        g.entry((x, y)).or_default().insert((nx, ny), w);
                    }
                }
            }
        }
        let manh = |u: &(i64, i64), v: &(i64, i64)| (u.0 - v.0).abs() + (u.1 - v.1).abs();

        for _ in 0..10 {
            let src = (rng.gen_range(0..size), rng.gen_range(0..size));
            let dst = (rng.gen_range(0..size), rng.gen_range(0..size));
            let (d, path) = astar::search(&g, src, dst, manh).unwrap();
            let (d2, _) = dijkstra::find_path(&g, src, dst).unwrap();
            assert_eq!(d, d2);
            let w: i64 = path.windows(2).map(|e| g[&e[0]][&e[1]]).sum();
            assert_eq!(w, d);
        }
    }
}

#[test]
fn test_negative_weights_acyclic() {
    // edges only from smaller to larger nodes, so there are no cycles
    for &seed in SEEDS {
        let n = 25;
        let edges = random_edges(seed, n, 120, -10, 10)
            .into_iter()
            .filter(|&(u, v, _)| u < v)
            .collect::<Vec<_>>();
        let g = weighted(n, &edges);

        // dynamic program in topological order
        let mut best: HashMap<u64, i64> = HashMap::new();
        best.insert(0, 0);
        for u in 0..n {
            if let Some(&du) = best.get(&u) {
                for (&v, &w) in &g[&u] {
                    let e = best.entry(v).or_insert(du + w);
                    if du + w < *e {
                        *e = du + w;
                    }
                }
            }
        }

        let tree = bellmanford::shortest_paths(&g, 0).unwrap();
        assert_eq!(tree.distances(), &best);
        for (v, &d) in &best {
            assert_eq!(path_weight(&g, &tree.path_to(v).unwrap()), d);
        }
        assert_eq!(bellmanford::negative_cycle(&g), None);
    }
}

#[test]
fn test_negative_cycles() {
    for &seed in SEEDS {
        let n = 20;
        let mut g = weighted(n, &random_edges(seed, n, 50, -3, 15));
        assert_eq!(bellmanford::negative_cycle(&g).is_some(), bellmanford::shortest_paths(&g, 0).is_err());

        // plant a negative cycle reachable from node 0
        g.get_mut(&0).unwrap().insert(1, 1);
        g.get_mut(&1).unwrap().insert(2, -10);
        g.get_mut(&2).unwrap().insert(0, 1);

        let cycle = bellmanford::negative_cycle(&g).unwrap();
        assert!(cycle.len() >= 2);
        assert_eq!(cycle.first(), cycle.last());
        assert!(path_weight(&g, &cycle) < 0);
        // a simple cycle
        assert_eq!(cycle[1..].iter().collect::<HashSet<_>>().len(), cycle.len() - 1);

        assert_eq!(bellmanford::shortest_paths(&g, 0), Err(Error::NegativeCycle));
        assert_eq!(bellmanford::shortest_paths(&g, cycle[0]), Err(Error::NegativeCycle));
    }
}

#[test]
fn test_all_shortest_paths() {
    for &seed in SEEDS {
        let n = 30;
        let g = unweighted(n, &random_edges(seed, n, 90, 0, 1));
        let hops = bfs::distances(&g, 0);
        for dst in 0..n {
            let paths = bfs::all_shortest_paths(&g, 0, dst, 20);
            match hops.get(&dst) {
                None => assert!(paths.is_empty()),
                Some(&d) => {
                    assert!(!paths.is_empty() && paths.len() <= 20);
                    for path in &paths {
                        assert_eq!(path.len(), d + 1);
                        assert_eq!(path.iter().collect::<HashSet<_>>().len(), path.len());
                        assert!(path.windows(2).all(|e| g[&e[0]].contains(&e[1])));
                    }
                    let distinct = paths.iter().collect::<HashSet<_>>();
                    assert_eq!(distinct.len(), paths.len());
                    // the first path is the one found by the plain search
                    if let Ok((_, path)) = bfs::shortest_path(&g, 0, dst) {
                        assert_eq!(path.len(), paths[0].len());
                    }
                }
            }
        }
    }
}

#[cfg(feature = "serialize")]
#[test]
fn test_serialize() -> Result<(), Box<dyn std::error::Error>> {
    use rs_pathfind::search::grid::Movement;
    use rs_pathfind::ShortestPaths;

    let mut g: HashMap<String, HashMap<String, f64>> = HashMap::new();
    g.entry("a".to_string()).or_default().insert("b".to_string(), 1.5);
    g.entry("b".to_string()).or_default().insert("c".to_string(), 2.0);

    let tree = dijkstra::shortest_paths(&g, "a".to_string());
    let json = serde_json::to_string(&tree)?;
    let tree2: ShortestPaths<String, f64> = serde_json::from_str(&json)?;
    assert_eq!(tree, tree2);
    assert_eq!(tree2.dist(&"c".to_string()), Some(3.5));

    let json = serde_json::to_string(&Movement::EightWay)?;
    assert_eq!(json, "\"EightWay\"");
    assert_eq!(serde_json::from_str::<Movement>(&json)?, Movement::EightWay);

    Ok(())
}
