//! Day-progress dial driven by a short series of reference times.
//!
//! [`arrange`] maps a timestamp to a position in [0, 1) so that midnight
//! sits at 0 and each reference time lands on a fixed tick, however
//! unevenly the references are spread through the day. Typical input is
//! the five daily prayer timestamps for one date.

pub mod arrange;

pub use arrange::{Bracket, arrange, find_bracket};
