//! Fragment-data bindings reject reserved, empty and out-of-range requests.

use glint::{Error, ProgramHandle};

fn expect_invalid(result: Result<(), Error>) {
  match result {
    Err(Error::InvalidArgument(_)) => (),
    other => panic!("expected InvalidArgument, got {:?}", other),
  }
}

pub fn fixture() {
  let program = ProgramHandle::create().expect("fresh program name");

  expect_invalid(program.bind_frag_data_location("gl_Foo", 0));
  expect_invalid(program.bind_frag_data_location("", 0));
  expect_invalid(program.bind_frag_data_location("FragColor", 1_000_000));

  // a legal binding goes through
  program
    .bind_frag_data_location("FragColor", 0)
    .expect("legal binding");

  program.dispose();
}
