//! Data models for golf society records.
//!
//! These are the read-only inputs the engine consumes:
//!
//! - `Member`, `Gender`: roster entries with an optional handicap index
//! - `Event`, `EventResult`: competitions and the raw scores entered for them
//! - `TeeBlock`: par / course rating / slope rating for one set of tees
//!
//! Backend records arrive with several spellings for the same key
//! (`handicapIndex`, `handicap_index`, `hcp`, ...). They are all resolved
//! here by serde so the computational modules only ever see one schema.

mod de;
pub mod event;
pub mod member;
pub mod tee;

pub use event::{Event, EventResult, EventStatus, ScoringFormat};
pub use member::{Gender, Member};
pub use tee::TeeBlock;
