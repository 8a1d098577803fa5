//! Buffer object handles.

use gl::types::*;
use log::trace;

use crate::error::Error;

/// Handle on one buffer object.
///
/// A handle is a plain value over the driver name: copies alias the same
/// buffer, comparisons and ordering follow the name, and nothing is released
/// until [`BufferHandle::dispose`] — which the caller invokes exactly once
/// across all aliases. The crate does not reference-count.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BufferHandle {
  handle: GLuint,
}

impl BufferHandle {
  /// Ask the driver for a fresh buffer name.
  ///
  /// A zero name means the driver refused to allocate and is reported as
  /// [`Error::ResourceExhausted`].
  pub fn generate() -> Result<Self, Error> {
    let mut handle: GLuint = 0;

    unsafe { gl::GenBuffers(1, &mut handle) };

    if handle == 0 {
      return Err(Error::ResourceExhausted("buffer"));
    }

    trace!("generated buffer object {}", handle);
    Ok(BufferHandle { handle })
  }

  /// Wrap a buffer name that already lives in the current context.
  ///
  /// The name is checked against the driver's predicate; anything that is
  /// not a live buffer object — zero included — is rejected with
  /// [`Error::InvalidArgument`].
  pub fn adopt(id: GLuint) -> Result<Self, Error> {
    if unsafe { gl::IsBuffer(id) } != gl::TRUE {
      return Err(Error::invalid_argument(format!(
        "{} is not a live buffer name",
        id
      )));
    }

    Ok(BufferHandle { handle: id })
  }

  /// The raw driver name.
  pub fn id(&self) -> GLuint {
    self.handle
  }

  /// Release the buffer object. Every copy of this handle goes stale.
  pub fn dispose(self) {
    trace!("disposing buffer object {}", self.handle);
    unsafe { gl::DeleteBuffers(1, &self.handle) };
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::BTreeMap;

  fn handle(id: GLuint) -> BufferHandle {
    BufferHandle { handle: id }
  }

  #[test]
  fn equality_follows_the_name() {
    assert_eq!(handle(1), handle(1));
    assert_ne!(handle(1), handle(2));
  }

  #[test]
  fn ordering_follows_the_name() {
    assert!(handle(1) < handle(2));
    assert!(handle(2) > handle(1));
    assert!(handle(3) <= handle(3));
  }

  #[test]
  fn copies_alias_the_same_name() {
    let a = handle(7);
    let b = a;

    assert_eq!(a, b);
    assert_eq!(a.id(), b.id());
  }

  #[test]
  fn usable_as_map_keys() {
    let mut names = BTreeMap::new();
    names.insert(handle(1), "positions");
    names.insert(handle(2), "normals");

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&handle(1)), Some(&"positions"));
    assert_eq!(names.get(&handle(2)), Some(&"normals"));
  }
}
