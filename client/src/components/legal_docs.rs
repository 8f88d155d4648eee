//! Legal documents accordion (privacy, terms, refund).

use leptos::prelude::*;

use crate::state::legal::LegalSection;
use crate::state::ui::UiState;

#[component]
pub fn LegalDocs() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let panels = LegalSection::ALL
        .into_iter()
        .map(|section| {
            let is_open = move || ui.with(|u| u.legal.is_open(section));
            view! {
                <div class="accordion__item" class:accordion__item--open=is_open data-section=section.id()>
                    <button
                        class="accordion__trigger"
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| ui.update(|u| u.legal.toggle(section))
                    >
                        {section.title()}
                    </button>
                    <Show when=is_open>
                        <div class="accordion__content">
                            <p>{section.intro()}</p>
                            <ul>{section.points().iter().map(|point| view! { <li>{*point}</li> }).collect_view()}</ul>
                        </div>
                    </Show>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="legal" class="legal">
            <div class="container">
                <h3 class="section-title">"Правовые документы"</h3>
                <div class="accordion">{panels}</div>
            </div>
        </section>
    }
}
