//! Attaching an attached shader must fail, as must detaching a detached
//! one; `shaders()` tracks membership throughout.

use glint::{factory, Error, ProgramHandle, ShaderType};

const VERTEX_SRC: &str = "#version 140\nvoid main(){gl_Position=vec4(0.0);}";

pub fn fixture() {
  let program = ProgramHandle::create().expect("fresh program name");
  assert!(program.shaders().is_empty());

  let vertex =
    factory::from_source(ShaderType::Vertex, VERTEX_SRC).expect("compiled vertex shader");

  program.attach(vertex).expect("first attach");
  assert!(program.shaders().contains(&vertex));

  match program.attach(vertex) {
    Err(Error::InvalidArgument(_)) => (),
    other => panic!("second attach must fail with InvalidArgument, got {:?}", other),
  }

  program.detach(vertex).expect("detach");
  assert!(!program.shaders().contains(&vertex));

  match program.detach(vertex) {
    Err(Error::InvalidArgument(_)) => (),
    other => panic!("second detach must fail with InvalidArgument, got {:?}", other),
  }

  vertex.dispose();
  program.dispose();
}
