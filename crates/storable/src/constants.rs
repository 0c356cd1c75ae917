//! Wire format constants.

/// Hard ceiling on a declared envelope body size, in bytes.
///
/// Payloads cross a process trust boundary; a corrupted or hostile size
/// field must not cause an unbounded allocation.
pub const MAX_BODY_SIZE: i32 = 10 * 1024 * 1024;
