//! Position of a timestamp on a six-segment day dial.
//!
//! Up to five reference times split the day into segments of fixed output
//! width, independent of how far apart the references actually are:
//!
//! ```text
//! 0        1/12     3/12     5/12     7/12     9/12  10/12       1
//! |--lead--|--r0-r1-|--r1-r2-|--r2-r3-|--r3-r4-|-tail-|  unused  |
//!   midnight..r0                                r4..midnight
//! ```
//!
//! The lead-in and the tail are half a segment wide, the four interior
//! brackets one segment (1/6) each. The tail ends just below 10/12, and the
//! next midnight starts again at 0.

use chrono::{Duration, NaiveDateTime, NaiveTime};

/// Width of one interior bracket.
const SEGMENT: f64 = 1.0 / 6.0;

/// Width of the lead-in and tail segments.
const HALF_SEGMENT: f64 = 1.0 / 12.0;

/// Bracket index assigned to the segment ending at the last reference time.
const LAST_BRACKET: i64 = 4;

/// Largest `f64` strictly below 1.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

/// The pair of consecutive reference times around a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    /// Latest reference time at or before the query.
    pub lower: NaiveDateTime,
    /// The reference time right after `lower`.
    pub upper: NaiveDateTime,
    /// Segment number on the dial. With five references this runs 0..=3;
    /// shorter series start at higher indices.
    pub index: i64,
}

impl Bracket {
    /// Linear position of `query` between `lower` and `upper`.
    ///
    /// The result is in [0, 1) only when `lower <= query < upper`, as for a
    /// bracket returned by [`find_bracket`]; other queries extrapolate.
    pub fn local_fraction(&self, query: NaiveDateTime) -> f64 {
        ratio(query - self.lower, self.upper - self.lower)
    }
}

/// Find the bracket containing `query`, scanning from the latest reference
/// backwards.
///
/// Returns `None` if `query` is before the first reference or at or after
/// the last one.
pub fn find_bracket(reference_times: &[NaiveDateTime], query: NaiveDateTime) -> Option<Bracket> {
    let n = reference_times.len();
    if n < 2 || query >= reference_times[n - 1] {
        return None;
    }
    let i = reference_times[..n - 1].iter().rposition(|&t| t <= query)?;
    Some(Bracket {
        lower: reference_times[i],
        upper: reference_times[i + 1],
        index: LAST_BRACKET + 1 - (n - i) as i64,
    })
}

/// Map `query` onto [0, 1) relative to an ascending series of reference
/// times on the same day.
///
/// - No references: 0.
/// - Before the first reference: the share of the time since midnight,
///   scaled into the lead-in segment.
/// - At or after the last: the share of the time until the next midnight,
///   scaled into the tail segment.
/// - Otherwise: the share of the enclosing bracket, placed in that
///   bracket's segment.
///
/// Queries outside the references' day, or series longer than five
/// entries, are clamped into [0, 1).
pub fn arrange(reference_times: &[NaiveDateTime], query: NaiveDateTime) -> f64 {
    let (Some(&first), Some(&last)) = (reference_times.first(), reference_times.last()) else {
        return 0.0;
    };

    let position = if query < first {
        ratio(time_of_day(query), time_of_day(first)) * HALF_SEGMENT
    } else if query >= last {
        let Some(midnight) = next_midnight(last) else {
            return 0.0;
        };
        ratio(query - last, midnight - last) * HALF_SEGMENT
            + LAST_BRACKET as f64 * SEGMENT
            + HALF_SEGMENT
    } else {
        let Some(bracket) = find_bracket(reference_times, query) else {
            return 0.0;
        };
        bracket.local_fraction(query) * SEGMENT + bracket.index as f64 * SEGMENT + HALF_SEGMENT
    };
    position.clamp(0.0, BELOW_ONE)
}

fn time_of_day(t: NaiveDateTime) -> Duration {
    t.time() - NaiveTime::MIN
}

fn next_midnight(t: NaiveDateTime) -> Option<NaiveDateTime> {
    Some(t.date().succ_opt()?.and_time(NaiveTime::MIN))
}

/// `num / den` on whole-nanosecond durations, 0 when `den` is not positive.
fn ratio(num: Duration, den: Duration) -> f64 {
    let den = duration_seconds(den);
    if den <= 0.0 {
        return 0.0;
    }
    duration_seconds(num) / den
}

fn duration_seconds(d: Duration) -> f64 {
    d.num_seconds() as f64 + f64::from(d.subsec_nanos()) * 1e-9
}
