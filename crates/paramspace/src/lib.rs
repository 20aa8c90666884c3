//! Terminal front end for `paramspace_core`: YAML space loading, text heat
//! maps and logging setup.

pub mod demo;
pub mod logging;
pub mod render;

pub use logging::init_logging;
pub use render::{LoggedControls, TextRenderer};
