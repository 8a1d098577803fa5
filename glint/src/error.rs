//! Errors risen by handle factories and operations.

use std::{error, fmt, io};

use crate::shader::ShaderType;

/// Everything that can go wrong at the driver boundary.
///
/// Errors are raised at the point of detection; the crate never retries and
/// never disposes of a partially constructed object on your behalf.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
  /// The caller supplied an illegal value: a dead or zero name, an empty
  /// identifier, a reserved prefix, an out-of-range location, or a shader
  /// that is already / not attached.
  InvalidArgument(String),

  /// The object is in the wrong state for the operation, e.g. querying
  /// attribute locations on a program that has not been linked.
  FailedPrecondition(String),

  /// The driver refused to allocate a fresh name; the payload names the
  /// object class that was asked for.
  ResourceExhausted(&'static str),

  /// Shader compilation failed. The payload carries the driver's compile
  /// log verbatim.
  CompilationFailed(ShaderType, String),

  /// An I/O failure while loading shader source from a file or reader.
  Io(io::Error),
}

impl Error {
  /// Create an [`Error::InvalidArgument`].
  pub fn invalid_argument<R>(reason: R) -> Self
  where
    R: Into<String>,
  {
    Error::InvalidArgument(reason.into())
  }

  /// Create an [`Error::FailedPrecondition`].
  pub fn failed_precondition<R>(reason: R) -> Self
  where
    R: Into<String>,
  {
    Error::FailedPrecondition(reason.into())
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      Error::InvalidArgument(ref reason) => write!(f, "invalid argument: {}", reason),

      Error::FailedPrecondition(ref reason) => write!(f, "failed precondition: {}", reason),

      Error::ResourceExhausted(what) => {
        write!(f, "driver refused to allocate a {} name", what)
      }

      Error::CompilationFailed(ty, ref log) => write!(f, "{} compilation error: {}", ty, log),

      Error::Io(ref e) => write!(f, "shader source i/o error: {}", e),
    }
  }
}

impl error::Error for Error {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      Error::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for Error {
  fn from(e: io::Error) -> Self {
    Error::Io(e)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_carries_the_reason() {
    let e = Error::invalid_argument("empty attribute name");
    assert_eq!(e.to_string(), "invalid argument: empty attribute name");

    let e = Error::ResourceExhausted("buffer");
    assert_eq!(e.to_string(), "driver refused to allocate a buffer name");
  }

  #[test]
  fn compile_errors_carry_the_log() {
    let e = Error::CompilationFailed(ShaderType::Vertex, "0:1: syntax error".to_owned());
    assert_eq!(
      e.to_string(),
      "vertex shader compilation error: 0:1: syntax error"
    );
  }

  #[test]
  fn io_errors_convert_and_expose_their_source() {
    use std::error::Error as _;

    let e = Error::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
    assert!(matches!(e, Error::Io(_)));
    assert!(e.source().is_some());
  }
}
