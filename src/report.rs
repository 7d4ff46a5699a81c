use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use itertools::{iproduct, Itertools};
use log::{debug, info};

use crate::{
    error::HuntError,
    game::{Hunt, Loadout},
    render::{format_sig, Summary, SIG_FIGS},
    solve::{parallel, Solver},
    value::HuntValue,
};

pub const HEADER: [&str; 14] = [
    "Average Loot Chests",
    "Perfect Hunt Rate",
    "Average Armory Chests",
    "Armory Chest",
    "Saver",
    "Crystal Saver",
    "Reinforced Crystal Saver",
    "x2",
    "x2 x2",
    "Ad Saver",
    "Want Perfect",
    "Raw Loot",
    "Raw Perfect",
    "Raw Armory",
];

/// One combination of upgrades and strategy in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggles {
    pub perfect: bool,
    pub skip_priority: bool,
    pub doublers: i32,
    pub crystal_saves: i32,
    pub saver: bool,
    pub armory: bool,
}

impl Toggles {
    /// Every sensible combination, armory toggling fastest.
    pub fn iter_all() -> impl Iterator<Item = Toggles> {
        const BOOLS: [bool; 2] = [false, true];
        iproduct!(BOOLS, BOOLS, 0..=2, 0..=2, BOOLS, BOOLS)
            .map(
                |(perfect, skip_priority, doublers, crystal_saves, saver, armory)| Toggles {
                    perfect,
                    skip_priority,
                    doublers,
                    crystal_saves,
                    saver,
                    armory,
                },
            )
            .filter(Toggles::is_sensible)
    }

    /// Skip priority needs a saver to skip, and the perfect strategy chases
    /// the doubled saver, which needs skip priority and exactly one doubler.
    pub fn is_sensible(&self) -> bool {
        if self.skip_priority && !self.saver {
            return false;
        }
        if self.perfect && (!self.skip_priority || self.doublers != 1) {
            return false;
        }
        true
    }

    pub fn loadout(&self) -> Loadout {
        Loadout {
            savers: i32::from(self.saver),
            crystal_saves: self.crystal_saves,
            doublers: self.doublers,
            skip_priority: self.skip_priority,
            perfect_wanted: self.perfect,
            armory: self.armory,
        }
    }

    fn flags(&self) -> [bool; 8] {
        [
            self.armory,
            self.saver,
            self.crystal_saves > 0,
            self.crystal_saves > 1,
            self.doublers > 0,
            self.doublers > 1,
            self.skip_priority,
            self.perfect,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub toggles: Toggles,
    /// Solved value with the perfect bonus applied.
    pub value: HuntValue,
}

impl Row {
    pub fn new(toggles: Toggles, solved: HuntValue) -> Self {
        Self {
            toggles,
            value: solved.with_perfect_bonus(),
        }
    }

    pub fn fields(&self) -> Vec<String> {
        let value = &self.value;
        let formatted = [value.loot, value.perfect_percent(), value.armory]
            .into_iter()
            .map(|x| format_sig(x, SIG_FIGS));
        let flags = self
            .toggles
            .flags()
            .into_iter()
            .map(|flag| if flag { "True" } else { "False" }.to_string());
        let raw = [value.loot, value.perfect, value.armory]
            .into_iter()
            .map(|x| x.to_string());
        formatted.chain(flags).chain(raw).collect()
    }
}

fn hunts(chests: i32, mimics: i32) -> Vec<(Toggles, Hunt)> {
    Toggles::iter_all()
        .map(|toggles| (toggles, Hunt::new(chests, mimics, toggles.loadout())))
        .collect()
}

/// Solves every report row with one shared solver.
pub fn rows(solver: &mut Solver, chests: i32, mimics: i32) -> Vec<Row> {
    let rows = hunts(chests, mimics)
        .into_iter()
        .map(|(toggles, hunt)| {
            let row = Row::new(toggles, solver.solve(hunt));
            debug!("{:?} -> {}, cache {}", toggles, row.value, solver.len());
            row
        })
        .collect_vec();
    info!(
        "solved {} rows, {} hunts cached, {} transitions",
        rows.len(),
        solver.len(),
        solver.transitions()
    );
    rows
}

/// Solves every report row across the rayon pool, folding what the workers
/// solved back into `solver`.
pub fn rows_parallel(solver: &mut Solver, chests: i32, mimics: i32) -> Vec<Row> {
    let (toggles, hunts): (Vec<_>, Vec<_>) = hunts(chests, mimics).into_iter().unzip();
    let values = parallel::solve_all(solver, &hunts);
    info!("solved {} rows in parallel, {} hunts cached", values.len(), solver.len());
    toggles
        .into_iter()
        .zip(values)
        .map(|(toggles, value)| Row::new(toggles, value))
        .collect()
}

pub fn write_report<W: Write>(out: &mut W, rows: &[Row]) -> std::io::Result<()> {
    writeln!(out, "{}", HEADER.join(","))?;
    for row in rows {
        writeln!(out, "{}", row.fields().join(","))?;
    }
    Ok(())
}

pub fn save_report(path: &Path, rows: &[Row]) -> Result<(), HuntError> {
    info!("writing {} rows to {}", rows.len(), path.display());
    let file = File::create(path).map_err(|err| HuntError::io(path, err))?;
    let mut out = BufWriter::new(file);
    write_report(&mut out, rows)
        .and_then(|_| out.flush())
        .map_err(|err| HuntError::io(path, err))
}

/// Solves the standard hunt with and without skip priority.
pub fn summarize(solver: &mut Solver, chests: i32, mimics: i32) -> Summary {
    let hunt = Hunt::new(chests, mimics, Loadout::standard());
    let plain = solver.solve(hunt).with_perfect_bonus();
    let skip = solver.solve(hunt.with_skip_priority(true)).with_perfect_bonus();
    Summary { plain, skip }
}
