//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

/// Get an environment variable, treating unset and blank values as absent.
pub fn get_env_opt(name: &'static str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an optional environment variable. Unset is `Ok(None)`, unparsable is an error.
pub fn get_env_parse_opt<T: FromStr>(name: &'static str) -> Result<Option<T>, Error> {
    match get_env_opt(name) {
        Some(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::WrongFormat(name)),
        None => Ok(None),
    }
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    WrongFormat(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so they can run in parallel.

    #[test]
    fn test_parse_opt_unset_is_none() {
        let parsed: Option<u64> = get_env_parse_opt("LIB_UTILS_TEST_UNSET_VAR").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_parse_opt_wrong_format() {
        env::set_var("LIB_UTILS_TEST_BAD_NUMBER", "thirty");
        let parsed = get_env_parse_opt::<u64>("LIB_UTILS_TEST_BAD_NUMBER");
        assert!(matches!(parsed, Err(Error::WrongFormat("LIB_UTILS_TEST_BAD_NUMBER"))));
    }

    #[test]
    fn test_blank_value_is_absent() {
        env::set_var("LIB_UTILS_TEST_BLANK", "   ");
        assert!(get_env_opt("LIB_UTILS_TEST_BLANK").is_none());
        assert!(get_env_parse_opt::<u64>("LIB_UTILS_TEST_BLANK").unwrap().is_none());
    }

    #[test]
    fn test_parse_opt_trims_value() {
        env::set_var("LIB_UTILS_TEST_PADDED_NUMBER", " 45 ");
        assert_eq!(get_env_parse_opt::<u64>("LIB_UTILS_TEST_PADDED_NUMBER").unwrap(), Some(45));
    }
}
