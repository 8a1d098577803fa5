//! Uploaded source reads back through the two-step query.

use glint::{ShaderHandle, ShaderType};

const SRC: &str = "#version 140\nin vec4 MCVertex;\nvoid main(){gl_Position=MCVertex;}";

pub fn fixture() {
  let shader = ShaderHandle::create(ShaderType::Vertex).expect("fresh shader name");

  shader.set_source(SRC).expect("source upload");
  shader.compile();
  assert!(shader.compiled(), "compile log: {}", shader.info_log());

  // drivers hand the text back verbatim
  assert_eq!(shader.source(), SRC);
  assert_eq!(shader.shader_type().expect("declared class"), ShaderType::Vertex);

  shader.dispose();
}
