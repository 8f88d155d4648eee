//! Static footer.

use leptos::prelude::*;

const PLATFORMS: &[&str] = &["Steam", "Epic Games", "Origin"];
const SUPPORT_EMAIL: &str = "support@steamkeys.ru";

#[component]
pub fn SiteFooter() -> impl IntoView {
    let support_href = format!("mailto:{SUPPORT_EMAIL}");
    let support_label = format!("email поддержки: {SUPPORT_EMAIL}");

    view! {
        <footer class="site-footer">
            <div class="container site-footer__grid">
                <div>
                    <span class="site-footer__brand">"🎮 Steam Keys Store"</span>
                    <p>"Лучший магазин игровых ключей с мгновенной доставкой и гарантией качества."</p>
                </div>
                <div>
                    <h4>"Платформы"</h4>
                    <ul>
                        {PLATFORMS.iter().map(|name| view! { <li><a href="#">{*name}</a></li> }).collect_view()}
                    </ul>
                </div>
                <div>
                    <h4>"Поддержка"</h4>
                    <a href=support_href>{support_label}</a>
                </div>
            </div>
            <hr class="separator"/>
            <p class="site-footer__copyright">"© 2024 Steam Keys Store. Все права защищены."</p>
        </footer>
    }
}
