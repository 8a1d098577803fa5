//! Vertex attribute pointer parameter blocks.

use std::os::raw::c_void;

use gl::types::*;

/// How a vertex attribute reads from the currently bound array buffer.
///
/// The defaults describe the most common vertex format: four tightly packed,
/// unnormalized single-precision floats starting at offset zero and feeding
/// attribute index zero. Setters chain by value:
///
/// ```
/// use glint::VertexAttribPointer;
///
/// let normals = VertexAttribPointer::new().index(1).size(3).stride(24);
/// assert_eq!(normals.size, 3);
/// ```
///
/// No field combination is validated here; an illegal combination surfaces
/// when the pointer is applied against a bound buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct VertexAttribPointer {
  /// Attribute index the pointer feeds.
  pub index: GLuint,
  /// Components per vertex, 1 to 4.
  pub size: GLint,
  /// Component type, e.g. `gl::FLOAT`.
  pub ty: GLenum,
  /// Whether fixed-point data is normalized on fetch.
  pub normalized: bool,
  /// Byte stride between consecutive vertices; `0` means tightly packed.
  pub stride: GLsizei,
  /// Byte offset of the first component within the buffer.
  pub offset: usize,
}

impl Default for VertexAttribPointer {
  fn default() -> Self {
    VertexAttribPointer {
      index: 0,
      size: 4,
      ty: gl::FLOAT,
      normalized: false,
      stride: 0,
      offset: 0,
    }
  }
}

impl VertexAttribPointer {
  /// A parameter block describing the default vertex format.
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the attribute index to feed.
  pub fn index(mut self, index: GLuint) -> Self {
    self.index = index;
    self
  }

  /// Set the component count per vertex.
  pub fn size(mut self, size: GLint) -> Self {
    self.size = size;
    self
  }

  /// Set the component type.
  pub fn ty(mut self, ty: GLenum) -> Self {
    self.ty = ty;
    self
  }

  /// Mark fixed-point data for normalization on fetch.
  pub fn normalized(mut self, normalized: bool) -> Self {
    self.normalized = normalized;
    self
  }

  /// Set the byte stride between consecutive vertices.
  pub fn stride(mut self, stride: GLsizei) -> Self {
    self.stride = stride;
    self
  }

  /// Set the byte offset of the first component.
  pub fn offset(mut self, offset: usize) -> Self {
    self.offset = offset;
    self
  }

  /// Issue the pointer against the currently bound array buffer.
  pub fn apply(&self) {
    unsafe {
      gl::VertexAttribPointer(
        self.index,
        self.size,
        self.ty,
        if self.normalized { gl::TRUE } else { gl::FALSE },
        self.stride,
        self.offset as *const c_void,
      );
    }
  }

  /// Enable the attribute array at this pointer's index.
  pub fn enable(&self) {
    unsafe { gl::EnableVertexAttribArray(self.index) };
  }

  /// Disable the attribute array at this pointer's index.
  pub fn disable(&self) {
    unsafe { gl::DisableVertexAttribArray(self.index) };
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_describe_four_packed_floats() {
    let ptr = VertexAttribPointer::new();

    assert_eq!(ptr.index, 0);
    assert_eq!(ptr.size, 4);
    assert_eq!(ptr.ty, gl::FLOAT);
    assert!(!ptr.normalized);
    assert_eq!(ptr.stride, 0);
    assert_eq!(ptr.offset, 0);
  }

  #[test]
  fn setters_chain_by_value() {
    let ptr = VertexAttribPointer::new()
      .index(2)
      .size(3)
      .ty(gl::UNSIGNED_BYTE)
      .normalized(true)
      .stride(32)
      .offset(12);

    assert_eq!(ptr.index, 2);
    assert_eq!(ptr.size, 3);
    assert_eq!(ptr.ty, gl::UNSIGNED_BYTE);
    assert!(ptr.normalized);
    assert_eq!(ptr.stride, 32);
    assert_eq!(ptr.offset, 12);
  }

  #[test]
  fn setters_leave_untouched_fields_at_their_defaults() {
    let ptr = VertexAttribPointer::new().index(5);

    assert_eq!(ptr.size, 4);
    assert_eq!(ptr.ty, gl::FLOAT);
  }
}
