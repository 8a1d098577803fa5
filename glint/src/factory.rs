//! Loading and compiling shaders from files, readers and strings.
//!
//! Three layered entry points converge on one primitive:
//! [`from_path`] opens a file and hands it to [`from_reader`], which reads
//! to end-of-input and hands the text to [`from_source`], which creates,
//! uploads and compiles — turning a failed compile into an
//! [`Error::CompilationFailed`] carrying the driver log.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::Error;
use crate::shader::{ShaderHandle, ShaderType};

/// Load, upload and compile a shader of class `ty` from the file at `path`.
///
/// The file is read in the platform's default text mode. An unopenable file
/// is an [`Error::Io`].
pub fn from_path<P>(ty: ShaderType, path: P) -> Result<ShaderHandle, Error>
where
  P: AsRef<Path>,
{
  let path = path.as_ref();
  debug!("loading {} source from {}", ty, path.display());

  let file = File::open(path)?;
  from_reader(ty, BufReader::new(file))
}

/// Read `reader` to end-of-input and compile the result as a shader of
/// class `ty`.
///
/// Lines are joined with a single line-feed terminator, whatever the
/// input's own line endings were.
pub fn from_reader<R>(ty: ShaderType, reader: R) -> Result<ShaderHandle, Error>
where
  R: BufRead,
{
  let source = read_source(reader)?;
  from_source(ty, &source)
}

/// Create a shader of class `ty`, upload `src` and compile it.
///
/// A failed compile is an [`Error::CompilationFailed`] whose payload is the
/// driver log. The shader object stays alive on failure — the factory does
/// not clean up behind itself, so disposal remains with the caller either
/// way.
pub fn from_source(ty: ShaderType, src: &str) -> Result<ShaderHandle, Error> {
  let shader = ShaderHandle::create(ty)?;

  shader.set_source(src)?;
  shader.compile();

  if !shader.compiled() {
    return Err(Error::CompilationFailed(ty, shader.info_log()));
  }

  Ok(shader)
}

/// Join the reader's lines with single line-feed terminators.
fn read_source<R>(reader: R) -> Result<String, Error>
where
  R: BufRead,
{
  let mut source = String::new();

  for line in reader.lines() {
    source.push_str(&line?);
    source.push('\n');
  }

  Ok(source)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Cursor;

  #[test]
  fn lines_are_joined_with_line_feeds() {
    let source = read_source(Cursor::new("#version 140\r\nin vec4 MCVertex;")).unwrap();
    assert_eq!(source, "#version 140\nin vec4 MCVertex;\n");
  }

  #[test]
  fn lone_terminators_do_not_double_up() {
    let source = read_source(Cursor::new("void main(){}\n")).unwrap();
    assert_eq!(source, "void main(){}\n");
  }

  #[test]
  fn empty_input_reads_empty() {
    let source = read_source(Cursor::new("")).unwrap();
    assert_eq!(source, "");
  }
}
