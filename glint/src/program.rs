//! Program object handles and introspection.
//!
//! A [`ProgramHandle`] wraps one program name. Beyond the common handle
//! contract it manages shader attachment, linking, validation and the
//! introspection of active attributes and uniforms.
//!
//! A program moves through three states: *unlinked* right after
//! [`ProgramHandle::create`] (shaders may be attached and detached;
//! location queries are invalid; introspection is empty), *linked-ok* once
//! [`ProgramHandle::link`] succeeds (introspection is meaningful and
//! [`ProgramHandle::use_program`] is legal) and *linked-failed* when it does
//! not ([`ProgramHandle::info_log`] carries the diagnostics). `link` is an
//! idempotent attempt; [`ProgramHandle::validate`] is an independent check
//! against the current rendering state, observed through
//! [`ProgramHandle::valid`].

use std::collections::HashMap;
use std::ffi::CString;

use gl::types::*;
use log::trace;

use crate::error::Error;
use crate::query;
use crate::shader::ShaderHandle;
use crate::variable::{Attribute, Uniform, Variable};

/// Handle on one program object.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ProgramHandle {
  handle: GLuint,
}

impl ProgramHandle {
  /// Ask the driver for a fresh program object.
  pub fn create() -> Result<Self, Error> {
    let handle = unsafe { gl::CreateProgram() };

    if handle == 0 {
      return Err(Error::ResourceExhausted("program"));
    }

    trace!("created program object {}", handle);
    Ok(ProgramHandle { handle })
  }

  /// Wrap a program name that already lives in the current context.
  pub fn adopt(id: GLuint) -> Result<Self, Error> {
    if unsafe { gl::IsProgram(id) } != gl::TRUE {
      return Err(Error::invalid_argument(format!(
        "{} is not a live program name",
        id
      )));
    }

    Ok(ProgramHandle { handle: id })
  }

  /// The raw driver name.
  pub fn id(&self) -> GLuint {
    self.handle
  }

  /// Attach `shader` to the program.
  ///
  /// Attaching a shader that is already attached is an
  /// [`Error::InvalidArgument`]; the check is a linear scan of
  /// [`ProgramHandle::shaders`].
  pub fn attach(&self, shader: ShaderHandle) -> Result<(), Error> {
    if self.shaders().contains(&shader) {
      return Err(Error::invalid_argument(format!(
        "shader {} is already attached to program {}",
        shader.id(),
        self.handle
      )));
    }

    unsafe { gl::AttachShader(self.handle, shader.id()) };

    Ok(())
  }

  /// Detach `shader` from the program.
  ///
  /// Detaching a shader that is not attached is an
  /// [`Error::InvalidArgument`].
  pub fn detach(&self, shader: ShaderHandle) -> Result<(), Error> {
    if !self.shaders().contains(&shader) {
      return Err(Error::invalid_argument(format!(
        "shader {} is not attached to program {}",
        shader.id(),
        self.handle
      )));
    }

    unsafe { gl::DetachShader(self.handle, shader.id()) };

    Ok(())
  }

  /// Enumerate the currently attached shaders.
  pub fn shaders(&self) -> Vec<ShaderHandle> {
    let count = self.get_iv(gl::ATTACHED_SHADERS);
    if count <= 0 {
      return Vec::new();
    }

    let mut names: Vec<GLuint> = vec![0; count as usize];
    let mut written: GLsizei = 0;

    unsafe {
      gl::GetAttachedShaders(
        self.handle,
        count as GLsizei,
        &mut written,
        names.as_mut_ptr(),
      );
    }

    names.truncate(written as usize);
    names.into_iter().map(ShaderHandle::from_name).collect()
  }

  /// Attempt to link the attached shaders.
  ///
  /// Failure is not reported here; observe it through
  /// [`ProgramHandle::linked`] and [`ProgramHandle::info_log`].
  pub fn link(&self) {
    trace!("linking program object {}", self.handle);
    unsafe { gl::LinkProgram(self.handle) };
  }

  /// Post-link status.
  pub fn linked(&self) -> bool {
    self.get_iv(gl::LINK_STATUS) == gl::TRUE.into()
  }

  /// Ask the driver whether the program could execute against the current
  /// rendering state.
  pub fn validate(&self) {
    unsafe { gl::ValidateProgram(self.handle) };
  }

  /// Status of the last [`ProgramHandle::validate`] call.
  pub fn valid(&self) -> bool {
    self.get_iv(gl::VALIDATE_STATUS) == gl::TRUE.into()
  }

  /// Install the program into the current rendering state.
  pub fn use_program(&self) {
    unsafe { gl::UseProgram(self.handle) };
  }

  /// The driver's link and validation log.
  pub fn info_log(&self) -> String {
    let len = self.get_iv(gl::INFO_LOG_LENGTH);

    query::read_string(len, |cap, written, buf| unsafe {
      gl::GetProgramInfoLog(self.handle, cap, written, buf)
    })
  }

  /// Enumerate the active attributes of the program, keyed by name.
  ///
  /// Empty before a successful link. Names are unique within a linked
  /// program, so the mapping loses nothing.
  pub fn active_attributes(&self) -> HashMap<String, Attribute> {
    self
      .active_variables(
        gl::ACTIVE_ATTRIBUTES,
        gl::ACTIVE_ATTRIBUTE_MAX_LENGTH,
        |handle, index, cap, name_len, size, ty, buf| unsafe {
          gl::GetActiveAttrib(handle, index, cap, name_len, size, ty, buf)
        },
        |handle, name| unsafe { gl::GetAttribLocation(handle, name) },
      )
      .into_iter()
      .map(|(name, variable)| (name, Attribute::new(variable)))
      .collect()
  }

  /// Enumerate the active uniforms of the program, keyed by name.
  pub fn active_uniforms(&self) -> HashMap<String, Uniform> {
    self
      .active_variables(
        gl::ACTIVE_UNIFORMS,
        gl::ACTIVE_UNIFORM_MAX_LENGTH,
        |handle, index, cap, name_len, size, ty, buf| unsafe {
          gl::GetActiveUniform(handle, index, cap, name_len, size, ty, buf)
        },
        |handle, name| unsafe { gl::GetUniformLocation(handle, name) },
      )
      .into_iter()
      .map(|(name, variable)| (name, Uniform::new(variable)))
      .collect()
  }

  /// Location of the active attribute `name`.
  ///
  /// An empty name is an [`Error::InvalidArgument`]; querying before a
  /// successful link is an [`Error::FailedPrecondition`]. A name that is
  /// simply not active yields `-1`, as the driver reports it.
  pub fn attrib_location(&self, name: &str) -> Result<GLint, Error> {
    let c_name = location_name(name, "attribute")?;

    if !self.linked() {
      return Err(Error::failed_precondition(format!(
        "program {} must be linked before querying attribute locations",
        self.handle
      )));
    }

    Ok(unsafe { gl::GetAttribLocation(self.handle, c_name.as_ptr()) })
  }

  /// Bind the attribute `name` to `index`, effective at the next link.
  pub fn bind_attrib_location(&self, name: &str, index: GLuint) -> Result<(), Error> {
    let c_name = location_name(name, "attribute")?;

    unsafe { gl::BindAttribLocation(self.handle, index, c_name.as_ptr()) };

    Ok(())
  }

  /// Location of the fragment output `name`.
  ///
  /// Same preconditions as [`ProgramHandle::attrib_location`]: the name must
  /// be non-empty and the program linked.
  pub fn frag_data_location(&self, name: &str) -> Result<GLint, Error> {
    let c_name = location_name(name, "fragment output")?;

    if !self.linked() {
      return Err(Error::failed_precondition(format!(
        "program {} must be linked before querying fragment output locations",
        self.handle
      )));
    }

    Ok(unsafe { gl::GetFragDataLocation(self.handle, c_name.as_ptr()) })
  }

  /// Route the fragment output `name` to the draw buffer `location`,
  /// effective at the next link.
  ///
  /// Fails with [`Error::InvalidArgument`] when the name is empty, when it
  /// uses the reserved `gl_` prefix, or when `location` is not below the
  /// driver's draw-buffer count (`MAX_DRAW_BUFFERS`, queried once per call).
  pub fn bind_frag_data_location(&self, name: &str, location: GLuint) -> Result<(), Error> {
    let c_name = location_name(name, "fragment output")?;

    if name.starts_with("gl_") {
      return Err(Error::invalid_argument(format!(
        "fragment output name {} uses the reserved gl_ prefix",
        name
      )));
    }

    let mut max_draw_buffers: GLint = 0;
    unsafe { gl::GetIntegerv(gl::MAX_DRAW_BUFFERS, &mut max_draw_buffers) };

    if location >= max_draw_buffers as GLuint {
      return Err(Error::invalid_argument(format!(
        "draw buffer {} is out of range (driver maximum is {})",
        location, max_draw_buffers
      )));
    }

    unsafe { gl::BindFragDataLocation(self.handle, location, c_name.as_ptr()) };

    Ok(())
  }

  /// Release the program object. Every copy of this handle goes stale.
  pub fn dispose(self) {
    trace!("disposing program object {}", self.handle);
    unsafe { gl::DeleteProgram(self.handle) };
  }

  /// The querying state machine shared by attribute and uniform
  /// enumeration: read the active count (early exit on zero), size one
  /// scratch buffer from the max-name-length query, then do one
  /// `getActive*` plus one `get*Location` round-trip per index. The scratch
  /// buffer is dropped with the call.
  fn active_variables<A, L>(
    &self,
    count_pname: GLenum,
    max_len_pname: GLenum,
    get_active: A,
    get_location: L,
  ) -> HashMap<String, Variable>
  where
    A: Fn(GLuint, GLuint, GLsizei, *mut GLsizei, *mut GLint, *mut GLenum, *mut GLchar),
    L: Fn(GLuint, *const GLchar) -> GLint,
  {
    let count = self.get_iv(count_pname);
    if count <= 0 {
      return HashMap::new();
    }

    // terminator included; at least one byte so the scratch pointer is valid
    let max_len = self.get_iv(max_len_pname).max(1) as usize;
    let mut scratch: Vec<u8> = vec![0; max_len];
    let mut variables = HashMap::with_capacity(count as usize);

    for index in 0..count as GLuint {
      let mut name_len: GLsizei = 0;
      let mut size: GLint = 0;
      let mut ty: GLenum = 0;

      get_active(
        self.handle,
        index,
        max_len as GLsizei,
        &mut name_len,
        &mut size,
        &mut ty,
        scratch.as_mut_ptr() as *mut GLchar,
      );

      // the scratch buffer holds the NUL-terminated name at this point
      let location = get_location(self.handle, scratch.as_ptr() as *const GLchar);
      let name = String::from_utf8_lossy(&scratch[..name_len as usize]).into_owned();

      let variable = Variable::new(location, name.clone(), self.handle, size, ty);
      variables.insert(name, variable);
    }

    variables
  }

  fn get_iv(&self, pname: GLenum) -> GLint {
    let mut value: GLint = 0;
    unsafe { gl::GetProgramiv(self.handle, pname, &mut value) };
    value
  }
}

/// Check and convert an identifier destined for a location call.
fn location_name(name: &str, what: &str) -> Result<CString, Error> {
  if name.is_empty() {
    return Err(Error::invalid_argument(format!("empty {} name", what)));
  }

  CString::new(name)
    .map_err(|_| Error::invalid_argument(format!("{} name contains a NUL byte", what)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn handles_compare_by_name() {
    let a = ProgramHandle { handle: 1 };
    let b = ProgramHandle { handle: 2 };

    assert!(a < b);
    assert_eq!(a, ProgramHandle { handle: 1 });
    assert_ne!(a, b);
  }

  #[test]
  fn location_names_reject_empty_and_nul() {
    assert!(matches!(
      location_name("", "attribute"),
      Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
      location_name("a\0b", "attribute"),
      Err(Error::InvalidArgument(_))
    ));
    assert!(location_name("MCVertex", "attribute").is_ok());
  }
}
