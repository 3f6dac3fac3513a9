//! Site footer: brand, city clocks, navigation and social links.

use leptos::prelude::*;

use crate::data::content::{FOOTER_NAV, SOCIAL_LINKS};
use crate::state::nav::Page;
use crate::util::clock::{self, ACCRA, CityClock, LONDON};
use crate::util::scroll_fx::scroll_to_top;

/// Footer shown under every view.
///
/// The clocks refresh every minute on the client; the interval is cancelled
/// when the footer unmounts.
#[component]
pub fn Footer(on_navigate: Callback<Page>) -> impl IntoView {
    let accra = RwSignal::new(clock::PLACEHOLDER.to_owned());
    let london = RwSignal::new(clock::PLACEHOLDER.to_owned());

    #[cfg(feature = "hydrate")]
    {
        let refresh = move || {
            accra.set(clock::read(ACCRA));
            london.set(clock::read(LONDON));
        };
        let ticker = StoredValue::new_local(None::<gloo_timers::callback::Interval>);
        Effect::new(move || {
            refresh();
            ticker.set_value(Some(gloo_timers::callback::Interval::new(clock::REFRESH_MS, refresh)));
        });
        on_cleanup(move || {
            ticker.try_update_value(Option::take);
        });
    }

    let clock_block = move |city: CityClock, time: RwSignal<String>| {
        view! {
            <div class="footer__clock">
                <span class="footer__clock-city">{format!("CURRENT_LOC / {}", city.city)}</span>
                <span class="footer__clock-time">
                    {move || time.get()}
                    <span class="footer__clock-zone">{city.abbrev}</span>
                </span>
            </div>
        }
    };

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand-col">
                    <button class="footer__brand" on:click=move |_| on_navigate.run(Page::Home)>
                        "REBIRTH" <br/> "STUDIO"
                    </button>
                    <div class="footer__clocks">
                        {clock_block(ACCRA, accra)}
                        {clock_block(LONDON, london)}
                    </div>
                </div>

                <div class="footer__links">
                    <div class="footer__column">
                        <span class="footer__heading">"NAVIGATION"</span>
                        <ul>
                            {FOOTER_NAV
                                .iter()
                                .map(|link| {
                                    let page = link.page;
                                    view! {
                                        <li>
                                            <button class="footer__link" on:click=move |_| on_navigate.run(page)>
                                                {link.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="footer__column">
                        <span class="footer__heading">"CONNECT"</span>
                        <ul>
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                class="footer__link"
                                                href=link.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                            >
                                                {link.label}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>
            </div>

            <div class="footer__bar">
                <div class="footer__legal">
                    <p>"\u{a9} 2024 REBIRTH CREATIVE STUDIO"</p>
                    <p class="footer__tagline">"REDESIGNING THE CULTURAL LANDSCAPE"</p>
                </div>
                <div class="footer__actions">
                    <button class="footer__small">"Privacy"</button>
                    <button class="footer__small">"Terms"</button>
                    <button class="footer__top" aria-label="Back to top" on:click=move |_| scroll_to_top(true)>
                        "\u{2191}"
                    </button>
                </div>
            </div>
        </footer>
    }
}
