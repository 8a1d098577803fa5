//! Shader object handles.
//!
//! A [`ShaderHandle`] wraps one shader name and lifts source upload,
//! readback, compilation and log retrieval into methods. Compilation
//! *failure* is not reported by [`ShaderHandle::compile`] itself — that is
//! the driver contract — but observed afterwards through
//! [`ShaderHandle::compiled`] and [`ShaderHandle::info_log`]. The
//! [`factory`](crate::factory) module elevates a failed compile to an error.

use std::ffi::CString;
use std::fmt;
use std::ptr::null;

use gl::types::*;
use log::trace;

use crate::error::Error;
use crate::query;

/// A shader stage class.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ShaderType {
  /// Vertex shader.
  Vertex,
  /// Tessellation control shader.
  TessellationControl,
  /// Tessellation evaluation shader.
  TessellationEvaluation,
  /// Geometry shader.
  Geometry,
  /// Fragment shader.
  Fragment,
}

impl ShaderType {
  /// The raw driver enum for this shader class.
  pub fn to_gl(self) -> GLenum {
    match self {
      ShaderType::Vertex => gl::VERTEX_SHADER,
      ShaderType::TessellationControl => gl::TESS_CONTROL_SHADER,
      ShaderType::TessellationEvaluation => gl::TESS_EVALUATION_SHADER,
      ShaderType::Geometry => gl::GEOMETRY_SHADER,
      ShaderType::Fragment => gl::FRAGMENT_SHADER,
    }
  }

  /// Map a raw driver enum back to a shader class; `None` if `raw` does not
  /// name one.
  pub fn from_gl(raw: GLenum) -> Option<Self> {
    match raw {
      gl::VERTEX_SHADER => Some(ShaderType::Vertex),
      gl::TESS_CONTROL_SHADER => Some(ShaderType::TessellationControl),
      gl::TESS_EVALUATION_SHADER => Some(ShaderType::TessellationEvaluation),
      gl::GEOMETRY_SHADER => Some(ShaderType::Geometry),
      gl::FRAGMENT_SHADER => Some(ShaderType::Fragment),
      _ => None,
    }
  }
}

impl fmt::Display for ShaderType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ShaderType::Vertex => f.write_str("vertex shader"),
      ShaderType::TessellationControl => f.write_str("tessellation control shader"),
      ShaderType::TessellationEvaluation => f.write_str("tessellation evaluation shader"),
      ShaderType::Geometry => f.write_str("geometry shader"),
      ShaderType::Fragment => f.write_str("fragment shader"),
    }
  }
}

/// Handle on one shader object.
///
/// Same value discipline as every handle in the crate: copies alias the same
/// shader, the name orders and hashes the handle, and
/// [`ShaderHandle::dispose`] is explicit.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ShaderHandle {
  handle: GLuint,
}

impl ShaderHandle {
  /// Ask the driver for a fresh shader object of class `ty`.
  pub fn create(ty: ShaderType) -> Result<Self, Error> {
    let handle = unsafe { gl::CreateShader(ty.to_gl()) };

    if handle == 0 {
      return Err(Error::ResourceExhausted("shader"));
    }

    trace!("created {} object {}", ty, handle);
    Ok(ShaderHandle { handle })
  }

  /// Wrap a shader name that already lives in the current context.
  pub fn adopt(id: GLuint) -> Result<Self, Error> {
    if unsafe { gl::IsShader(id) } != gl::TRUE {
      return Err(Error::invalid_argument(format!(
        "{} is not a live shader name",
        id
      )));
    }

    Ok(ShaderHandle { handle: id })
  }

  /// Wrap a name the driver itself just handed out.
  pub(crate) fn from_name(handle: GLuint) -> Self {
    ShaderHandle { handle }
  }

  /// The raw driver name.
  pub fn id(&self) -> GLuint {
    self.handle
  }

  /// Upload `src` as the shader's source, replacing whatever was uploaded
  /// before.
  ///
  /// Empty source is accepted here; the compile step is where the driver
  /// rejects it.
  pub fn set_source(&self, src: &str) -> Result<(), Error> {
    let c_src = CString::new(src.as_bytes())
      .map_err(|_| Error::invalid_argument("shader source contains a NUL byte"))?;

    unsafe { gl::ShaderSource(self.handle, 1, [c_src.as_ptr()].as_ptr(), null()) };

    Ok(())
  }

  /// Read the current source back from the driver.
  pub fn source(&self) -> String {
    let len = self.get_iv(gl::SHADER_SOURCE_LENGTH);

    query::read_string(len, |cap, written, buf| unsafe {
      gl::GetShaderSource(self.handle, cap, written, buf)
    })
  }

  /// Trigger compilation of the uploaded source.
  ///
  /// Failure is not reported here; observe it through
  /// [`ShaderHandle::compiled`] and [`ShaderHandle::info_log`].
  pub fn compile(&self) {
    unsafe { gl::CompileShader(self.handle) };
  }

  /// Post-compile status.
  pub fn compiled(&self) -> bool {
    self.get_iv(gl::COMPILE_STATUS) == gl::TRUE.into()
  }

  /// The driver's compile log.
  pub fn info_log(&self) -> String {
    let len = self.get_iv(gl::INFO_LOG_LENGTH);

    query::read_string(len, |cap, written, buf| unsafe {
      gl::GetShaderInfoLog(self.handle, cap, written, buf)
    })
  }

  /// The shader class declared at creation.
  pub fn shader_type(&self) -> Result<ShaderType, Error> {
    let raw = self.get_iv(gl::SHADER_TYPE);

    ShaderType::from_gl(raw as GLenum).ok_or_else(|| {
      Error::invalid_argument(format!("driver reported unknown shader type {:#x}", raw))
    })
  }

  /// Release the shader object. Every copy of this handle goes stale.
  pub fn dispose(self) {
    trace!("disposing shader object {}", self.handle);
    unsafe { gl::DeleteShader(self.handle) };
  }

  fn get_iv(&self, pname: GLenum) -> GLint {
    let mut value: GLint = 0;
    unsafe { gl::GetShaderiv(self.handle, pname, &mut value) };
    value
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shader_type_round_trips_through_the_driver_enum() {
    for ty in [
      ShaderType::Vertex,
      ShaderType::TessellationControl,
      ShaderType::TessellationEvaluation,
      ShaderType::Geometry,
      ShaderType::Fragment,
    ] {
      assert_eq!(ShaderType::from_gl(ty.to_gl()), Some(ty));
    }
  }

  #[test]
  fn unknown_driver_enums_map_to_none() {
    assert_eq!(ShaderType::from_gl(gl::FLOAT_VEC4), None);
  }

  #[test]
  fn display_names_the_stage() {
    assert_eq!(ShaderType::Vertex.to_string(), "vertex shader");
    assert_eq!(ShaderType::Fragment.to_string(), "fragment shader");
  }

  #[test]
  fn handles_compare_by_name() {
    let a = ShaderHandle::from_name(1);
    let b = ShaderHandle::from_name(2);

    assert_ne!(a, b);
    assert!(a < b);
    assert_eq!(a, ShaderHandle::from_name(1));
  }
}
