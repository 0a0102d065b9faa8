//! Process exit codes

/// Nothing at or above ERROR was found
pub const EXIT_SUCCESS: i32 = 0;
/// An ERROR issue was found, or the command failed
pub const EXIT_ERROR: i32 = 1;
/// A CRITICAL issue was found, or the attribution template is invalid
pub const EXIT_CRITICAL: i32 = 2;
