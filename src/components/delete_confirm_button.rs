//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second confirms.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a × button initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `label` - Accessible title of the initial button (e.g. "Delete record #12")
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        type="button"
                        class="confirm-btn"
                        on:click=move |_| {
                            set_asking.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| set_asking.set(false)>
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    type="button"
                    class="delete-btn"
                    title=label.clone()
                    on:click=move |_| set_asking.set(true)
                >
                    "×"
                </button>
            }
            .into_any()
        }
    }
}
