//! Top-right toast stack.

use leptos::prelude::*;

use crate::state::ui::{Toast, UiState};

/// Renders queued toasts. Each toast is removed by its close button or by
/// the auto-dismiss scheduled when it was queued.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-container">
            <For
                each=move || ui.with(|u| u.toasts.clone())
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = format!("toast toast--{}", toast.kind.color_class());
                    let icon = format!("fas fa-{} toast__icon", toast.kind.icon());
                    view! {
                        <div class=class role="alert">
                            <div class="toast__body">
                                <i class=icon></i>
                                {toast.message}
                            </div>
                            <button
                                type="button"
                                class="toast__close"
                                aria-label="关闭"
                                on:click=move |_| {
                                    ui.update(|state| {
                                        state.dismiss_toast(id);
                                    });
                                }
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
