//! Module tool adapters.

mod go;
mod noop;

pub use go::{DEFAULT_GO_BINARY, GoModuleTool};
pub use noop::NoopModuleTool;
