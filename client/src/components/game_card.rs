//! Catalog card for one game key.

use catalog::{CatalogItem, StorefrontState};
use leptos::prelude::*;

use crate::util::format::{format_discount, format_price, format_rating};

/// Card with cover, badges, price and the add-to-cart button.
///
/// The button is disabled for out-of-stock items; `StorefrontState` itself
/// does not check stock.
#[component]
pub fn GameCard(item: CatalogItem) -> impl IntoView {
    let storefront = expect_context::<RwSignal<StorefrontState>>();

    let in_stock = item.in_stock;
    let discount = item.discount.map(format_discount);
    let original_price = item.original_price.map(|price| format_price(price.into()));
    let genres = item
        .genre
        .iter()
        .map(|genre| view! { <span class="badge badge--genre">{genre.clone()}</span> })
        .collect_view();
    let price = format_price(item.price.into());
    let rating = format_rating(item.rating);
    let title = item.title.clone();
    let image = item.image.clone();
    let platform = item.platform.clone();

    let on_add = move |_| storefront.update(|s| s.add_to_cart(&item));

    view! {
        <article class="game-card" class:game-card--sold-out={!in_stock}>
            <div class="game-card__media">
                <img class="game-card__image" src=image alt=title.clone()/>
                {discount.map(|label| view! { <span class="badge badge--discount">{label}</span> })}
                {(!in_stock)
                    .then(|| {
                        view! {
                            <div class="game-card__overlay">
                                <span class="badge badge--danger">"Нет в наличии"</span>
                            </div>
                        }
                    })}
            </div>
            <div class="game-card__body">
                <div class="game-card__meta">
                    <span class="game-card__platform">{platform}</span>
                    <span class="game-card__rating">"★ " {rating}</span>
                </div>
                <h4 class="game-card__title">{title}</h4>
                <div class="game-card__genres">{genres}</div>
                <div class="game-card__footer">
                    <span class="game-card__price">{price}</span>
                    {original_price.map(|label| view! { <span class="game-card__original-price">{label}</span> })}
                    <button
                        class="btn btn--primary btn--sm game-card__add"
                        disabled={!in_stock}
                        on:click=on_add
                        title="В корзину"
                        aria-label="В корзину"
                    >
                        "🛒"
                    </button>
                </div>
            </div>
        </article>
    }
}
