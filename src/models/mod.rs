//! Report payloads returned by the HTTP API.
//!
//! Every payload serializes in camelCase. Derived totals (`totalWinCount`,
//! `yearPodiumCount`, ...) are computed by the constructors so the serialized
//! form always agrees with the nested lists.

pub mod fastest_laps;
pub mod leading_laps;
pub mod misc;
pub mod podiums;
pub mod points;
pub mod poles;
pub mod wins;

pub use fastest_laps::*;
pub use leading_laps::*;
pub use misc::*;
pub use podiums::*;
pub use points::*;
pub use poles::*;
pub use wins::*;
