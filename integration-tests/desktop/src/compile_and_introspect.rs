//! The full happy path: compile a vertex shader, link it into a program and
//! enumerate the active attributes — plus the state checks around an
//! unlinked program.

use glint::{factory, Error, ProgramHandle, ShaderType};

const VERTEX_SRC: &str = "#version 140\nin vec4 MCVertex;\nvoid main(){gl_Position=MCVertex;}";

pub fn fixture() {
  let vertex =
    factory::from_source(ShaderType::Vertex, VERTEX_SRC).expect("compiled vertex shader");
  assert!(vertex.compiled());

  let program = ProgramHandle::create().expect("fresh program name");
  program.attach(vertex).expect("attach");

  // unlinked: location queries are premature, introspection is empty
  match program.attrib_location("MCVertex") {
    Err(Error::FailedPrecondition(_)) => (),
    other => panic!("expected FailedPrecondition before link, got {:?}", other),
  }
  assert!(program.active_attributes().is_empty());

  program.link();
  assert!(program.linked(), "link log: {}", program.info_log());

  let attributes = program.active_attributes();
  assert_eq!(attributes.len(), 1);

  let mc_vertex = &attributes["MCVertex"];
  assert!(mc_vertex.location() >= 0);
  assert_eq!(mc_vertex.name(), "MCVertex");
  assert_eq!(mc_vertex.program(), program.id());
  assert_eq!(mc_vertex.size(), 1);
  assert_eq!(mc_vertex.ty(), gl::FLOAT_VEC4);

  let location = program.attrib_location("MCVertex").expect("location query");
  assert_eq!(location, mc_vertex.location());

  // no uniforms were declared
  assert!(program.active_uniforms().is_empty());

  program.validate();
  let _ = program.valid();

  program.detach(vertex).expect("detach");
  vertex.dispose();
  program.dispose();
}
