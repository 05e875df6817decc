//! Creates an empty OpenGL context with GLFW
//!
//! Nothing is drawn, so the window stays black until it is closed.

use gl_context::prelude::TutorialConfig;

fn main() -> std::process::ExitCode {
    tutorials::start("empty_context", TutorialConfig::empty_context())
}
