//! Renderbuffer object handles.

use gl::types::*;
use log::trace;

use crate::error::Error;

/// Handle on one renderbuffer object.
///
/// Same value discipline as [`BufferHandle`](crate::buffer::BufferHandle):
/// copies alias, disposal is explicit and happens exactly once.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RenderbufferHandle {
  handle: GLuint,
}

impl RenderbufferHandle {
  /// Ask the driver for a fresh renderbuffer name.
  pub fn generate() -> Result<Self, Error> {
    let mut handle: GLuint = 0;

    unsafe { gl::GenRenderbuffers(1, &mut handle) };

    if handle == 0 {
      return Err(Error::ResourceExhausted("renderbuffer"));
    }

    trace!("generated renderbuffer object {}", handle);
    Ok(RenderbufferHandle { handle })
  }

  /// Wrap a renderbuffer name that already lives in the current context.
  pub fn adopt(id: GLuint) -> Result<Self, Error> {
    if unsafe { gl::IsRenderbuffer(id) } != gl::TRUE {
      return Err(Error::invalid_argument(format!(
        "{} is not a live renderbuffer name",
        id
      )));
    }

    Ok(RenderbufferHandle { handle: id })
  }

  /// The raw driver name.
  pub fn id(&self) -> GLuint {
    self.handle
  }

  /// Release the renderbuffer object. Every copy of this handle goes stale.
  pub fn dispose(self) {
    trace!("disposing renderbuffer object {}", self.handle);
    unsafe { gl::DeleteRenderbuffers(1, &self.handle) };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn handle(id: GLuint) -> RenderbufferHandle {
    RenderbufferHandle { handle: id }
  }

  #[test]
  fn comparisons_follow_the_name() {
    assert_eq!(handle(4), handle(4));
    assert_ne!(handle(4), handle(5));
    assert!(handle(4) < handle(5));
  }
}
