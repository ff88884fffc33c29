use std::collections::VecDeque;

use gridpath_core::{CellType, GridMap, Point};
use gridpath_paths::{Heuristic, PathError, PathFinder, SearchConfig};
use proptest::prelude::*;

fn arb_map() -> impl Strategy<Value = GridMap> {
    (1..10i32, 1..10i32).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::bool::weighted(0.3), (w * h) as usize).prop_map(
            move |mask| {
                let cells = mask
                    .into_iter()
                    .map(|b| if b { CellType::Blocked } else { CellType::Walkable })
                    .collect();
                GridMap::from_cells(w, h, cells).unwrap()
            },
        )
    })
}

fn arb_cell() -> impl Strategy<Value = Point> {
    (-2..12i32, -2..12i32).prop_map(|(x, y)| Point::new(x, y))
}

/// 8-connected flood fill, independent of the search code.
fn reachable(map: &GridMap, start: Point, goal: Point) -> bool {
    let mut seen = vec![false; map.len()];
    let mut queue = VecDeque::from([start]);
    seen[map.idx(start).unwrap()] = true;
    while let Some(c) = queue.pop_front() {
        if c == goal {
            return true;
        }
        for dy in -1..=1 {
            for dx in -1..=1 {
                let n = c.shift(dx, dy);
                if let Some(i) = map.idx(n) {
                    if map.is_walkable(n) && !seen[i] {
                        seen[i] = true;
                        queue.push_back(n);
                    }
                }
            }
        }
    }
    false
}

fn expected_outcome(map: &GridMap, start: Point, goal: Point) -> Option<PathError> {
    if let Some(&cell) = [start, goal].iter().find(|c| !map.in_bounds(**c)) {
        return Some(PathError::OutOfBounds { cell });
    }
    if let Some(&cell) = [start, goal].iter().find(|c| !map.is_walkable(**c)) {
        return Some(PathError::Blocked { cell });
    }
    if !reachable(map, start, goal) {
        return Some(PathError::Unreachable);
    }
    None
}

fn check_query(
    cfg: SearchConfig,
    map: &GridMap,
    start: Point,
    goal: Point,
) -> Result<(), TestCaseError> {
    let mut finder =
        PathFinder::with_config(map, cfg).map_err(|e| TestCaseError::fail(e.to_string()))?;
    let result = finder.find_path(start, goal);
    match (expected_outcome(map, start, goal), result) {
        (None, Ok(path)) => {
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&goal));
            for w in path.windows(2) {
                prop_assert!(w[0].is_adjacent(w[1]));
            }
            for c in &path {
                prop_assert!(map.is_walkable(*c));
            }
            prop_assert!(finder.expanded() <= map.len());
        }
        (Some(PathError::Unreachable), Err(PathError::Unreachable)) => {
            prop_assert!(finder.expanded() <= map.len());
        }
        (Some(expected), Err(err)) => {
            prop_assert_eq!(expected, err);
        }
        (expected, got) => {
            return Err(TestCaseError::fail(format!(
                "expected {expected:?}, got {got:?}"
            )));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn outcome_matches_flood_fill(map in arb_map(), start in arb_cell(), goal in arb_cell()) {
        check_query(SearchConfig::default(), &map, start, goal)?;
    }

    #[test]
    fn relaxed_octile_outcome_matches_flood_fill(
        map in arb_map(),
        start in arb_cell(),
        goal in arb_cell(),
    ) {
        let cfg = SearchConfig::default()
            .with_heuristic(Heuristic::Octile)
            .with_relaxation(true);
        check_query(cfg, &map, start, goal)?;
    }

    #[test]
    fn queries_are_deterministic(map in arb_map(), start in arb_cell(), goal in arb_cell()) {
        let mut finder = PathFinder::new(&map);
        let first = finder.find_path(start, goal);
        prop_assert_eq!(finder.find_path(start, goal), first.clone());
        prop_assert_eq!(PathFinder::new(&map).find_path(start, goal), first);
    }

    #[test]
    fn out_of_range_always_reports_out_of_bounds(
        map in arb_map(),
        offset in 1..5i32,
        side in 0..4u8,
        as_start in any::<bool>(),
    ) {
        let other = Point::ZERO;
        let bad = match side {
            0 => Point::new(-offset, 0),
            1 => Point::new(map.width() - 1 + offset, 0),
            2 => Point::new(0, -offset),
            _ => Point::new(0, map.height() - 1 + offset),
        };
        let (start, goal) = if as_start { (bad, other) } else { (other, bad) };
        prop_assert_eq!(
            PathFinder::new(&map).find_path(start, goal),
            Err(PathError::OutOfBounds { cell: bad })
        );
    }
}
