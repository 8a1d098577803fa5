//! Active program inputs as immutable values.
//!
//! Enumerating a linked program yields one [`Variable`] per active input.
//! [`Attribute`] and [`Uniform`] are nominal wrappers over the same value:
//! the distinction exists so that attribute and uniform enumerations cannot
//! be mixed up at the type level, and carries no behavior of its own.

use std::ops::Deref;

use gl::types::*;

/// One active input of a linked program.
///
/// Immutable after construction. Equality is structural over all five
/// fields.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Variable {
  location: GLint,
  name: String,
  program: GLuint,
  size: GLint,
  ty: GLenum,
}

impl Variable {
  pub(crate) fn new(location: GLint, name: String, program: GLuint, size: GLint, ty: GLenum) -> Self {
    Variable {
      location,
      name,
      program,
      size,
      ty,
    }
  }

  /// Binding location; `-1` when the name is not an active location in the
  /// program.
  pub fn location(&self) -> GLint {
    self.location
  }

  /// The identifier used in the shader source.
  pub fn name(&self) -> &str {
    &self.name
  }

  /// Name of the program this variable was enumerated from.
  pub fn program(&self) -> GLuint {
    self.program
  }

  /// Element count: arrays report their length, everything else `1`.
  pub fn size(&self) -> GLint {
    self.size
  }

  /// Raw driver type code, e.g. `gl::FLOAT_VEC4`.
  pub fn ty(&self) -> GLenum {
    self.ty
  }
}

/// A [`Variable`] enumerated from a program's active attributes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Attribute(Variable);

impl Attribute {
  pub(crate) fn new(variable: Variable) -> Self {
    Attribute(variable)
  }
}

impl Deref for Attribute {
  type Target = Variable;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

/// A [`Variable`] enumerated from a program's active uniforms.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Uniform(Variable);

impl Uniform {
  pub(crate) fn new(variable: Variable) -> Self {
    Uniform(variable)
  }
}

impl Deref for Uniform {
  type Target = Variable;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn mc_vertex() -> Variable {
    Variable::new(0, "MCVertex".to_owned(), 3, 1, gl::FLOAT_VEC4)
  }

  #[test]
  fn equality_is_structural_over_all_fields() {
    assert_eq!(mc_vertex(), mc_vertex());

    let other_location = Variable::new(1, "MCVertex".to_owned(), 3, 1, gl::FLOAT_VEC4);
    assert_ne!(mc_vertex(), other_location);

    let other_type = Variable::new(0, "MCVertex".to_owned(), 3, 1, gl::FLOAT_VEC3);
    assert_ne!(mc_vertex(), other_type);
  }

  #[test]
  fn accessors_expose_the_quintuple() {
    let var = mc_vertex();

    assert_eq!(var.location(), 0);
    assert_eq!(var.name(), "MCVertex");
    assert_eq!(var.program(), 3);
    assert_eq!(var.size(), 1);
    assert_eq!(var.ty(), gl::FLOAT_VEC4);
  }

  #[test]
  fn nominal_wrappers_deref_to_the_shared_value() {
    let attribute = Attribute::new(mc_vertex());
    let uniform = Uniform::new(mc_vertex());

    assert_eq!(attribute.name(), "MCVertex");
    assert_eq!(uniform.ty(), gl::FLOAT_VEC4);
    assert_eq!(*attribute, *uniform);
  }

  #[test]
  fn inactive_locations_are_representable() {
    let var = Variable::new(-1, "unused".to_owned(), 3, 1, gl::FLOAT);
    assert_eq!(var.location(), -1);
  }
}
