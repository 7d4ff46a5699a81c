use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use rayon::prelude::*;

use crate::{game::Hunt, solve::Solver, value::HuntValue};

/// Solves many starting hunts across the rayon pool.
///
/// Each worker starts from a copy of `solver` and owns it alone, so no cache is
/// ever shared between threads. Once every hunt is solved the worker caches are
/// merged back into `solver`. Results come back in the order of `hunts`.
pub fn solve_all(solver: &mut Solver, hunts: &[Hunt]) -> Vec<HuntValue> {
    let done = AtomicUsize::new(0);
    let base = &*solver;
    let (merged, mut values) = hunts
        .par_iter()
        .enumerate()
        .fold(
            || (base.fork(), Vec::new()),
            |(mut worker, mut values), (i, hunt)| {
                values.push((i, worker.solve(*hunt)));
                let done = done.fetch_add(1, Ordering::Relaxed) + 1;
                if done % 10 == 0 || done == hunts.len() {
                    info!("solved {} of {} hunts", done, hunts.len());
                }
                (worker, values)
            },
        )
        .reduce(
            || (Solver::new(), Vec::new()),
            |(mut a, mut a_values), (b, b_values)| {
                a.merge(b);
                a_values.extend(b_values);
                (a, a_values)
            },
        );

    solver.merge(merged);
    values.sort_by_key(|(i, _)| *i);
    values.into_iter().map(|(_, value)| value).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Loadout;

    fn hunts() -> Vec<Hunt> {
        [0, 1, 2]
            .into_iter()
            .flat_map(|crystal_saves| {
                [false, true].into_iter().map(move |skip_priority| {
                    Hunt::new(
                        16,
                        3,
                        Loadout {
                            crystal_saves,
                            skip_priority,
                            ..Loadout::standard()
                        },
                    )
                })
            })
            .collect()
    }

    #[test]
    fn matches_sequential_solve() {
        let hunts = hunts();
        let parallel = solve_all(&mut Solver::new(), &hunts);
        let mut solver = Solver::new();
        let sequential: Vec<_> = hunts.iter().map(|hunt| solver.solve(*hunt)).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn worker_caches_flow_back() {
        let hunts = hunts();
        let mut solver = Solver::new();
        let first = solve_all(&mut solver, &hunts);
        assert!(hunts.iter().all(|hunt| solver.get(hunt).is_some()));

        let transitions = solver.transitions();
        let again: Vec<_> = hunts.iter().map(|hunt| solver.solve(*hunt)).collect();
        assert_eq!(again, first);
        assert_eq!(solver.transitions(), transitions);
    }

    #[test]
    fn empty_input() {
        let mut solver = Solver::new();
        assert!(solve_all(&mut solver, &[]).is_empty());
        assert!(solver.is_empty());
    }
}
