//! The two-step string query protocol.
//!
//! Several driver calls hand back strings the same way: a first query yields
//! the byte size (terminator included), then a fill call writes into a
//! caller-provided scratch buffer and reports how many bytes it actually
//! wrote. The scratch buffer is transient; it lives for the duration of one
//! call and is dropped with it.

use gl::types::*;

/// Run the fill step of a two-step string query.
///
/// `len` is the size reported by the first query, terminator included. The
/// `fill` closure receives the buffer capacity, a slot for the written byte
/// count (terminator excluded) and the scratch buffer itself.
pub(crate) fn read_string<F>(len: GLint, fill: F) -> String
where
  F: FnOnce(GLsizei, *mut GLsizei, *mut GLchar),
{
  if len <= 0 {
    return String::new();
  }

  let mut written: GLsizei = 0;
  let mut bytes: Vec<u8> = Vec::with_capacity(len as usize);

  fill(len as GLsizei, &mut written, bytes.as_mut_ptr() as *mut GLchar);

  // the driver never writes more than len - 1 bytes plus the terminator
  unsafe { bytes.set_len(written as usize) };

  String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reads_the_written_prefix() {
    let s = read_string(6, |cap, written, buf| {
      assert_eq!(cap, 6);

      let bytes = b"hello\0";
      unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, bytes.len());
        *written = 5;
      }
    });

    assert_eq!(s, "hello");
  }

  #[test]
  fn zero_size_short_circuits() {
    let s = read_string(0, |_, _, _| panic!("fill step must not run"));
    assert_eq!(s, "");
  }

  #[test]
  fn negative_size_short_circuits() {
    let s = read_string(-1, |_, _, _| panic!("fill step must not run"));
    assert_eq!(s, "");
  }
}
