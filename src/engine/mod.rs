//! Turn sequencing: the state machine that plays a game.
//!
//! `MemoryGame` accepts selections, schedules delayed resolution, and
//! reports every change as a `GameEvent`. The phases it moves through
//! live in `phase`; the notification vocabulary lives in `event`.

pub mod event;
pub mod game;
pub mod phase;

pub use event::GameEvent;
pub use game::{IgnoredReason, MemoryGame, ResolveOutcome, SelectOutcome, TurnRecord};
pub use phase::Phase;
