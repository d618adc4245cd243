//! # Config — compile-time constants
//!
//! Central knobs for the definition-catalog engine. Everything here is fixed
//! at build time; nothing is runtime-reconfigurable. The demo CLI layers its
//! own environment-variable switches on top where that suits a host, but the
//! engine itself reads only these constants.

/// Maximum number of records the offset index will hold. A resource with
/// more lines than this is silently truncated to the first `MAX_RECORDS`
/// records — a documented data-loss policy, not an error.
///
/// Must not exceed 1024: random rotation maps a 10-bit draw onto the record
/// count, so the count has to fit inside the sampler's draw space.
pub const MAX_RECORDS: usize = 512;

/// Per-record load/display cap in bytes. Longer records are silently
/// clamped to this many content bytes.
pub const MAX_RECORD_LENGTH: usize = 350;

/// Seconds between cursor rotations.
pub const ROTATE_PERIOD_SECS: u32 = 10;

/// Seconds between display refreshes. Refresh beats that are not rotation
/// beats reveal the definition for the current record.
pub const REVEAL_PERIOD_SECS: u32 = 5;

const _: () = assert!(MAX_RECORDS <= 1024);
const _: () = assert!(MAX_RECORDS > 0);
const _: () = assert!(MAX_RECORD_LENGTH > 0);
const _: () = assert!(REVEAL_PERIOD_SECS > 0 && ROTATE_PERIOD_SECS % REVEAL_PERIOD_SECS == 0);
