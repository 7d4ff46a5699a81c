//! Exact expected values for the chest hunt mini-game.
//!
//! A [`Hunt`] describes the chests still closed along with the player's
//! upgrades and strategy. [`Solver`] walks every way the hunt can play out,
//! caching each hunt it solves, and returns a [`HuntValue`]: expected loot
//! chests, perfect hunt probability and expected armory chests, all as exact
//! decimals.
//!
//! ```rust
//! use chest_hunt::{Hunt, Loadout, Solver};
//!
//! let mut solver = Solver::new();
//! let value = solver.solve(Hunt::new(30, 4, Loadout::standard()));
//! assert!(value.perfect <= rust_decimal::Decimal::ONE);
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod report;
pub mod save;
pub mod solve;
pub mod value;

pub use error::HuntError;
pub use game::{Chest, Hunt, Loadout};
pub use render::{format_sig, Summary};
pub use solve::Solver;
pub use value::HuntValue;
