//! Exit code constants for the subkeeper CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid state)
//! - 2: Config failure (unset path, parse error, invalid value)
//! - 3: IO failure (read or write)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid state.
pub const USER_ERROR: i32 = 1;

/// Config failure: unset/empty config path, parse error, or invalid value.
pub const CONFIG_FAILURE: i32 = 2;

/// IO failure: the config file could not be read or written.
pub const IO_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_FAILURE, IO_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(CONFIG_FAILURE, 2);
        assert_eq!(IO_FAILURE, 3);
    }
}
