//! Command implementations.

pub mod backends;
pub mod extract;
pub mod render;

pub use self::backends::execute_backends;
pub use self::extract::execute_extract;
pub use self::render::execute_render_csv;
