//! Running games: setup, decision makers and the match loop.
//!
//! ## Example
//!
//! ```
//! use cuttle::core::RulesConfig;
//! use cuttle::game::{Match, MatchConfig};
//!
//! let mut game = Match::self_play(42, RulesConfig::default())
//!     .unwrap()
//!     .with_config(MatchConfig::new().with_max_actions(500));
//!
//! let outcome = game.play().unwrap();
//! println!("{outcome:?} after {} actions", game.actions_taken());
//! ```

mod builder;
mod chooser;
mod driver;

pub use builder::GameBuilder;
pub use chooser::{ActionChooser, Choice, FirstLegal, RandomChooser, ScriptedChooser};
pub use driver::{Match, MatchConfig, MatchOutcome};
