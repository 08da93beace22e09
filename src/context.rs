//! Abstractions over the process's output streams, so that everything the
//! program writes can be captured in tests.

use std::io::{self, Write};

/// The process's standard output as a raw, unbuffered sink.
///
/// Every [`Write::write`] call issues a single `write(2)` on the underlying
/// file descriptor. A call may therefore transfer fewer bytes than requested,
/// and may fail with [`io::ErrorKind::Interrupted`] when a signal arrives
/// before any bytes are moved. The buffered [`std::io::stdout`] handle would
/// hide both conditions.
#[derive(Clone, Debug)]
pub struct Stdout;

impl Write for Stdout {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        #[cfg(unix)]
        {
            nix::unistd::write(io::stdout(), buffer).map_err(io::Error::from)
        }
        #[cfg(not(unix))]
        {
            io::stdout().write(buffer)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        #[cfg(unix)]
        {
            Ok(())
        }
        #[cfg(not(unix))]
        {
            io::stdout().flush()
        }
    }
}

#[derive(Clone, Debug)]
pub struct Stderr;

impl Write for Stderr {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        io::stderr().write(buffer)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// The two streams a run writes to: `stdout` is the sink for the generated
/// buffer, `stderr` receives the seed, progress lines, and errors.
#[derive(Clone, Debug)]
pub struct Context<Stdout, Stderr> {
    pub(crate) stdout: Stdout,
    pub(crate) stderr: Stderr,
}

impl Context<Stdout, Stderr> {
    pub fn production() -> Self {
        Context {
            stdout: Stdout,
            stderr: Stderr,
        }
    }
}
