//! Type-safe value handles over the OpenGL core-profile 3.x object model.
//!
//! Raw OpenGL exposes its resources — buffer objects, shaders, programs,
//! renderbuffers — as opaque unsigned-integer names generated and destroyed
//! through free-standing C calls. This crate wraps each class of name in a
//! small `Copy` value type and lifts the common queries and mutations
//! (compile, link, enumerate active attributes and uniforms) into
//! `Result`-returning methods.
//!
//! # Handle discipline
//!
//! Every handle follows the same rules:
//!
//! - **Construction** goes through a factory: `generate`/`create` asks the
//!   driver for a fresh name and rejects a zero answer, while `adopt` wraps
//!   a name that already lives in the current context after validating it
//!   against the driver's `is*` predicate.
//! - **Disposal** is explicit. Handles are plain values, never scope
//!   guards: copies alias the same GPU object, the crate does not
//!   reference-count, and the caller disposes exactly once across all
//!   aliases. After `dispose`, every alias is stale and further operations
//!   on it are a caller error.
//! - **Comparisons** — equality, ordering, hashing — follow the name, so
//!   handles work directly as keys of ordered and hashed containers.
//!
//! # Context affinity
//!
//! Every operation targets the calling thread's current GL context, which
//! the crate never records, verifies or switches. The host is responsible
//! for making a core-profile 3.x context current and for loading function
//! pointers (`gl::load_with`) before the first handle is touched. A handle
//! is only meaningful on the context that created it.
//!
//! # Logging
//!
//! The crate talks through the [`log`] facade: object lifecycle at `trace`
//! level, shader-source loading at `debug`. Hook up any logger — or none —
//! as usual.

pub mod buffer;
pub mod error;
pub mod factory;
pub mod layout;
pub mod program;
mod query;
pub mod renderbuffer;
pub mod shader;
pub mod variable;
pub mod vertex;

pub use crate::buffer::BufferHandle;
pub use crate::error::Error;
pub use crate::layout::{BufferLayout, BufferRegion};
pub use crate::program::ProgramHandle;
pub use crate::renderbuffer::RenderbufferHandle;
pub use crate::shader::{ShaderHandle, ShaderType};
pub use crate::variable::{Attribute, Uniform, Variable};
pub use crate::vertex::VertexAttribPointer;
