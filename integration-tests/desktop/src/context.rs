//! Hidden-window core-profile 3.3 context for the scenarios.

use std::os::raw::c_void;

use glfw::Context as _;

/// Keeps the window — and with it the GL context — alive while a scenario
/// runs.
pub struct Context {
  _window: glfw::Window,
  _glfw: glfw::Glfw,
}

pub fn create() -> Context {
  let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS).expect("GLFW initialization");

  glfw.window_hint(glfw::WindowHint::OpenGlProfile(
    glfw::OpenGlProfileHint::Core,
  ));
  glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
  glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
  glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
  glfw.window_hint(glfw::WindowHint::Visible(false));

  let (mut window, _events) = glfw
    .create_window(512, 512, "glint integration scenarios", glfw::WindowMode::Windowed)
    .expect("window creation");

  window.make_current();
  gl::load_with(|s| window.get_proc_address(s) as *const c_void);

  Context {
    _window: window,
    _glfw: glfw,
  }
}
