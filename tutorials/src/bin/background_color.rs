//! Paints a dark gray background over the empty context
//!
//! The back buffer is cleared to the background color and swapped to the
//! front once, before the event loop starts.

use gl_context::prelude::TutorialConfig;

fn main() -> std::process::ExitCode {
    tutorials::start("background_color", TutorialConfig::background_color())
}
