#![deny(missing_debug_implementations)]

//! `big-buffer-write` generates a pseudo-random buffer of a requested size
//! and writes it to standard output *to completion*: partial transfers are
//! resumed where they left off, interrupted system calls are retried, and any
//! real failure is reported together with how many bytes made it out.
//!
//! The binary takes the buffer length and an optional seed:
//!
//! ```text
//! $ big-buffer-write 1048576 > big.txt
//! seed 1754400000
//! wrote 65536 bytes (983040 remaining)
//! ...
//! wrote 16384 bytes (0 remaining)
//! ```
//!
//! Every byte except the last is drawn uniformly from the printable ASCII
//! range `[0x20, 0x7E)`; the last byte is a newline. After the buffer has
//! been fully drained, the fixed marker `"\nSUCCESS\n"` is written to the
//! same stream: one small write straight after a very large one, checking
//! that the sink is still usable.
//!
//! The seed is reported on `stderr` before any bytes are generated, so a run
//! can be reproduced exactly by passing it back in:
//!
//! ```text
//! $ big-buffer-write 1048576 1754400000 > same-bytes-again.txt
//! ```
//!
//! # Using the pieces as a library
//!
//! The generator and the writer are ordinary functions over
//! [`rand::Rng`] and [`std::io::Write`], so they compose with any sink:
//!
//! ```
//! use big_buffer_write::{buffer, writer};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let buffer = buffer::generate(&mut rng, 64).unwrap();
//!
//! let mut sink = Vec::new();
//! let mut diagnostics = Vec::new();
//! let written =
//!     writer::write_to_completion(&mut sink, &mut diagnostics, &buffer, None).unwrap();
//! assert_eq!(written, 64);
//! assert_eq!(sink, buffer);
//! ```
//!
//! # Error handling
//!
//! Fallible operations return [`Error`]. The one condition that is *not* an
//! error from the caller's point of view is an interrupted write
//! ([`std::io::ErrorKind::Interrupted`]): the writer retries it internally
//! and it is never observable outside the write loop. Every other failure is
//! reported on `stderr` and makes the process exit with code 1.

pub mod buffer;
pub mod config;
pub mod context;
pub mod error;
pub mod writer;

use crate::{config::Config, context::Context};
pub use error::Error;
use rand::{rngs::StdRng, SeedableRng};
use std::{
    io::Write,
    time::{SystemTime, UNIX_EPOCH},
};

/// Written to the primary output after the buffer has been fully drained.
pub const SUCCESS_MARKER: &[u8] = b"\nSUCCESS\n";

/// Runs one complete invocation against the given streams: report the seed,
/// generate the buffer, drain it into `context.stdout`, then write the
/// [`SUCCESS_MARKER`].
pub fn run<Stdout, Stderr>(
    context: &mut Context<Stdout, Stderr>,
    config: &Config,
) -> Result<(), Error>
where
    Stdout: Write,
    Stderr: Write,
{
    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let _ = writeln!(context.stderr, "seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let buffer = buffer::generate(&mut rng, config.length)?;
    let bytes_written = writer::write_to_completion(
        &mut context.stdout,
        &mut context.stderr,
        &buffer,
        config.stall_limit,
    )?;
    context
        .stdout
        .write_all(SUCCESS_MARKER)
        .map_err(|error| Error::sink_failure(bytes_written, error))?;
    Ok(())
}

fn seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
