//! Adoption validates the name against the driver predicate: dead names and
//! zero are rejected, live names round-trip.

use glint::{BufferHandle, Error, ProgramHandle, RenderbufferHandle, ShaderHandle};

fn expect_invalid<T: std::fmt::Debug>(result: Result<T, Error>) {
  match result {
    Err(Error::InvalidArgument(_)) => (),
    other => panic!("expected InvalidArgument, got {:?}", other),
  }
}

pub fn fixture() {
  expect_invalid(BufferHandle::adopt(0xFFFF_FFFF));
  expect_invalid(BufferHandle::adopt(0));
  expect_invalid(RenderbufferHandle::adopt(0));
  expect_invalid(ShaderHandle::adopt(0));
  expect_invalid(ProgramHandle::adopt(0));

  // a generated name only becomes a live buffer object once bound
  let buffer = BufferHandle::generate().expect("fresh buffer name");
  unsafe {
    gl::BindBuffer(gl::ARRAY_BUFFER, buffer.id());
    gl::BindBuffer(gl::ARRAY_BUFFER, 0);
  }

  let adopted = BufferHandle::adopt(buffer.id()).expect("adopting a live buffer");
  assert_eq!(adopted, buffer);
  assert_eq!(adopted.id(), buffer.id());

  buffer.dispose();
}
