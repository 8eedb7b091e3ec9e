//! UI state: the active mode and the clock fields being edited
//!
//! The mode machine is explicit, finite, and deterministic. Field editing
//! is only reachable from the three adjust modes.

pub mod events;
pub mod fields;
pub mod machine;

pub use events::Event;
pub use fields::ClockFields;
pub use machine::Mode;
