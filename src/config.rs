use crate::error::Error;
use std::num::NonZeroUsize;

/// Everything a run needs to know up front.
#[derive(Clone, Debug)]
pub struct Config {
    /// Total buffer length in bytes, terminator included.
    pub length: usize,
    /// Seed for the random source. `None` derives one from the wall clock.
    pub seed: Option<u64>,
    /// Abort after this many consecutive zero-byte successful transfers.
    /// `None` keeps retrying forever.
    pub stall_limit: Option<NonZeroUsize>,
}

impl Config {
    /// Parses a command line of the form `<program> <length> [seed]`.
    pub fn from_args(mut arguments: impl Iterator<Item = String>) -> Result<Config, Error> {
        let program = arguments
            .next()
            .unwrap_or_else(|| "big-buffer-write".to_string());
        let length_argument = arguments.next().ok_or(Error::MissingLength { program })?;
        let length = length_argument
            .parse::<usize>()
            .map_err(|_| Error::InvalidLength {
                argument: length_argument.clone(),
            })?;
        let seed = match arguments.next() {
            Some(seed_argument) => {
                Some(seed_argument.parse::<u64>().map_err(|_| Error::InvalidSeed {
                    argument: seed_argument.clone(),
                })?)
            }
            None => None,
        };
        Ok(Config {
            length,
            seed,
            stall_limit: None,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            length: 0,
            seed: None,
            stall_limit: None,
        }
    }
}
