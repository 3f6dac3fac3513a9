//! Fixed top navigation bar with a slide-down mobile menu.

use leptos::prelude::*;

use crate::data::content::PRIMARY_NAV;
use crate::state::nav::Page;

/// Top navigation. The mobile menu flag is local and closes on every navigation.
#[component]
pub fn Navbar(#[prop(into)] current_page: Signal<Page>, on_navigate: Callback<Page>) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let go = move |page: Page| {
        menu_open.set(false);
        on_navigate.run(page);
    };

    let item_class = move |page: Page| {
        if current_page.get() == page { "navbar__item navbar__item--active" } else { "navbar__item" }
    };

    view! {
        <nav class="navbar">
            <button class="navbar__brand" on:click=move |_| go(Page::Home)>
                <span class="navbar__brand-dot"></span>
                "REBIRTH STUDIO"
            </button>

            <div class="navbar__links">
                {PRIMARY_NAV
                    .iter()
                    .map(|item| {
                        let page = item.page;
                        view! {
                            <button class=move || item_class(page) on:click=move |_| go(page)>
                                {item.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button class="navbar__cta" on:click=move |_| go(Page::Contact)>
                    "Start a project"
                </button>
            </div>

            <button
                class="navbar__toggle"
                class:navbar__toggle--open=move || menu_open.get()
                aria-label="Toggle Menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                <span class="navbar__bar"></span>
                <span class="navbar__bar"></span>
                <span class="navbar__bar"></span>
            </button>
        </nav>

        <div class="mobile-menu" class:mobile-menu--open=move || menu_open.get()>
            <div class="mobile-menu__items">
                <span class="mobile-menu__caption">"\u{2014} MENU"</span>
                {PRIMARY_NAV
                    .iter()
                    .enumerate()
                    .map(|(i, item)| {
                        let page = item.page;
                        view! {
                            <div class="mobile-menu__row">
                                <button
                                    class="mobile-menu__item"
                                    style=format!("--stagger: {i}")
                                    on:click=move |_| go(page)
                                >
                                    {item.label}
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button class="mobile-menu__item mobile-menu__invite" on:click=move |_| go(Page::Contact)>
                    "Let's create something together \u{2192}"
                </button>
            </div>

            <div class="mobile-menu__footer">
                <div class="mobile-menu__cities">
                    <span>"ACCRA"</span>
                    <span>"LONDON"</span>
                </div>
                <span class="mobile-menu__year">"\u{a9} 2026"</span>
            </div>
        </div>
    }
}
