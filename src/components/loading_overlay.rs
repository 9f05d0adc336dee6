//! Full-screen spinner shown while any request is in flight.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.with(|u| u.loader_visible)>
            <div class="global-loader">
                <div class="loading"></div>
            </div>
        </Show>
    }
}
