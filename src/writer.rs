//! The write-to-completion loop.

use crate::error::Error;
use std::{
    io::{self, Write},
    num::NonZeroUsize,
};

/// Drives `buffer` into `sink` until every byte has been accepted.
///
/// A single [`Write::write`] call may transfer fewer bytes than requested;
/// the loop advances past whatever was accepted and retries with the rest.
/// [`io::ErrorKind::Interrupted`] is treated as a transfer of zero bytes and
/// retried immediately; any other error aborts with
/// [`Error::SinkFailure`] carrying the number of bytes already written. After
/// every successful transfer one progress line
/// (`wrote X bytes (Y remaining)`) is written to `diagnostics`, best effort.
///
/// A zero-byte successful transfer is legal and the loop will retry it
/// forever by default. Passing a `stall_limit` bounds that: after the given
/// number of *consecutive* zero-byte transfers the loop aborts with
/// [`Error::SinkStalled`]. Any transfer that moves bytes resets the counter.
///
/// Returns the total number of bytes written, which on success always equals
/// `buffer.len()`.
///
/// ```
/// use big_buffer_write::writer::write_to_completion;
///
/// let mut sink = Vec::new();
/// let mut diagnostics = Vec::new();
/// let written = write_to_completion(&mut sink, &mut diagnostics, b"hello\n", None).unwrap();
/// assert_eq!(written, 6);
/// assert_eq!(sink, b"hello\n");
/// ```
pub fn write_to_completion<Sink, Diagnostics>(
    sink: &mut Sink,
    diagnostics: &mut Diagnostics,
    buffer: &[u8],
    stall_limit: Option<NonZeroUsize>,
) -> Result<usize, Error>
where
    Sink: Write,
    Diagnostics: Write,
{
    let mut offset = 0;
    let mut consecutive_zero_writes = 0;
    while offset < buffer.len() {
        match sink.write(&buffer[offset..]) {
            Ok(written) => {
                offset += written;
                let _ = writeln!(
                    diagnostics,
                    "wrote {} bytes ({} remaining)",
                    written,
                    buffer.len() - offset
                );
                if written == 0 {
                    consecutive_zero_writes += 1;
                    if let Some(limit) = stall_limit {
                        if consecutive_zero_writes >= limit.get() {
                            return Err(Error::SinkStalled {
                                bytes_written: offset,
                                zero_writes: consecutive_zero_writes,
                            });
                        }
                    }
                } else {
                    consecutive_zero_writes = 0;
                }
            }
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(Error::sink_failure(offset, error)),
        }
    }
    Ok(offset)
}
