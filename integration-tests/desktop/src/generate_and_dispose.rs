//! Every factory must hand back a nonzero name, and disposal must go
//! through without a driver error.

use glint::{BufferHandle, ProgramHandle, RenderbufferHandle, ShaderHandle, ShaderType};

pub fn fixture() {
  let buffer = BufferHandle::generate().expect("fresh buffer name");
  assert!(buffer.id() > 0);

  let other = BufferHandle::generate().expect("second buffer name");
  assert_ne!(buffer, other);

  buffer.dispose();
  other.dispose();

  let renderbuffer = RenderbufferHandle::generate().expect("fresh renderbuffer name");
  assert!(renderbuffer.id() > 0);
  renderbuffer.dispose();

  let shader = ShaderHandle::create(ShaderType::Fragment).expect("fresh shader name");
  assert!(shader.id() > 0);
  shader.dispose();

  let program = ProgramHandle::create().expect("fresh program name");
  assert!(program.id() > 0);
  program.dispose();

  assert_eq!(unsafe { gl::GetError() }, gl::NO_ERROR);
}
