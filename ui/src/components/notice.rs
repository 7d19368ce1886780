use dioxus::prelude::*;

use crate::t;

/// Shown in place of a page when the embedded content failed to load.
#[component]
pub fn ContentUnavailable(reason: String) -> Element {
    rsx! {
        section { class: "page page-error",
            h1 { {t!("content-error-title")} }
            p { class: "page-error__detail", {t!("content-error-detail", reason = reason.as_str())} }
        }
    }
}
