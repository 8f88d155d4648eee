//! Modal listing cart entries with per-entry removal and the total.
//!
//! Entries are rendered by position, not keyed by id: the same key added
//! twice shows up as two rows, and either row's remove button drops both.

use catalog::StorefrontState;
use leptos::prelude::*;

use crate::util::format::format_price;

#[component]
pub fn CartDialog(on_close: Callback<()>) -> impl IntoView {
    let storefront = expect_context::<RwSignal<StorefrontState>>();

    let is_empty = move || storefront.with(|s| s.cart().is_empty());
    let total = move || storefront.with(|s| format_price(s.cart_total()));
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let rows = move || {
        storefront
            .get()
            .cart()
            .entries()
            .iter()
            .map(|entry| {
                let id = entry.id;
                view! {
                    <li class="cart-dialog__row">
                        <span class="cart-dialog__title">{entry.title.clone()}</span>
                        <span class="cart-dialog__price">{format_price(entry.price.into())}</span>
                        <button
                            class="btn btn--danger btn--sm"
                            on:click=move |_| {
                                storefront.update(|s| {
                                    s.remove_from_cart(id);
                                });
                            }
                            title="Удалить"
                            aria-label="Удалить"
                        >
                            "✕"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog cart-dialog"
                role="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Корзина"</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(()) title="Закрыть">
                        "✕"
                    </button>
                </div>
                <Show
                    when=move || !is_empty()
                    fallback=|| view! { <p class="cart-dialog__empty">"Корзина пуста"</p> }
                >
                    <ul class="cart-dialog__list">{rows}</ul>
                    <hr class="separator"/>
                    <div class="cart-dialog__total">
                        <span>"Итого:"</span>
                        <span class="cart-dialog__total-amount">{total}</span>
                    </div>
                    // Checkout is not wired to any payment flow.
                    <button class="btn btn--primary btn--block">"Оформить заказ"</button>
                </Show>
            </div>
        </div>
    }
}
