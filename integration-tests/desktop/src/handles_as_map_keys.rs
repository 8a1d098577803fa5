//! Handles order by name and therefore key associative containers.

use std::collections::BTreeMap;

use glint::BufferHandle;

pub fn fixture() {
  let b1 = BufferHandle::generate().expect("first buffer");
  let b2 = BufferHandle::generate().expect("second buffer");
  assert_ne!(b1, b2);

  let mut uploads = BTreeMap::new();
  uploads.insert(b1, "positions");
  uploads.insert(b2, "normals");

  assert_eq!(uploads.len(), 2);
  assert_eq!(uploads.get(&b1), Some(&"positions"));
  assert_eq!(uploads.get(&b2), Some(&"normals"));

  b1.dispose();
  b2.dispose();
}
