mod art;
pub use art::Art;

mod home;
pub use home::Home;

mod projects;
pub use projects::Projects;

mod publications;
pub use publications::Publications;

use dioxus::prelude::*;

/// Subscribes to the platform's language code signal (if provided) so a view
/// re-renders when the locale changes elsewhere. Returns the current code for
/// use in a hidden marker node.
fn use_lang_marker() -> String {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    lang_code.as_ref().map(|s| s()).unwrap_or_default()
}
