//! Top bar with brand, section anchors and the cart trigger.

use catalog::StorefrontState;
use leptos::prelude::*;

use crate::components::cart_dialog::CartDialog;
use crate::state::ui::UiState;
use crate::util::format::cart_badge_label;

/// Sticky header. The cart button shows an entry-count badge and opens
/// [`CartDialog`].
#[component]
pub fn SiteHeader() -> impl IntoView {
    let storefront = expect_context::<RwSignal<StorefrontState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let badge = move || storefront.with(|s| cart_badge_label(s.cart().len()));
    let on_close = Callback::new(move |()| ui.update(UiState::close_cart));

    view! {
        <header class="site-header">
            <div class="container site-header__inner">
                <a class="site-header__brand" href="#">
                    <span class="site-header__logo" aria-hidden="true">"🎮"</span>
                    <h1 class="site-header__title">"Steam Keys Store"</h1>
                </a>

                <nav class="site-header__nav">
                    <a href="#">"Главная"</a>
                    <a href="#catalog">"Каталог"</a>
                    <a href="#legal">"Документы"</a>
                </nav>

                <button
                    class="btn btn--outline site-header__cart"
                    on:click=move |_| ui.update(UiState::open_cart)
                    title="Корзина"
                    aria-label="Корзина"
                >
                    "🛒"
                    {move || badge().map(|count| view! { <span class="badge badge--count">{count}</span> })}
                </button>
            </div>
        </header>
        <Show when=move || ui.get().cart_open>
            <CartDialog on_close=on_close/>
        </Show>
    }
}
