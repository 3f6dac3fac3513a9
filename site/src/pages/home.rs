//! Landing page: hero, credo, pinned capability strip, client dossier,
//! testimonial card stack and the closing call to action.

use leptos::html;
use leptos::prelude::*;

use crate::data::content::{CAPABILITIES, HERO_IMAGE, PARTNERS, REVIEWS};
use crate::state::nav::Page;
use crate::state::reviews::{CardState, ReviewDeck};
#[cfg(feature = "hydrate")]
use crate::state::reviews::FLY_OUT_MS;
use crate::util::scroll_fx::use_scroll_fx;

#[component]
pub fn HomePage(on_navigate: Callback<Page>) -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    use_scroll_fx(root);

    let marquee_text = PARTNERS.iter().map(|p| p.name.to_uppercase()).collect::<Vec<_>>().join(" ");

    view! {
        <div class="home" node_ref=root>
            <section class="home-hero">
                <h1 class="home-hero__title">
                    <div class="home-hero__line hero-item" style="--stagger: 0">"Digital"</div>
                    <div class="home-hero__line home-hero__line--right hero-item" style="--stagger: 1">
                        <span class="accent">"C"</span>
                        <span
                            class="home-hero__clip"
                            style=format!("background-image: url('{HERO_IMAGE}')")
                        >
                            "U"
                        </span>
                        <span class="accent">"LTURE"</span>
                    </div>
                    <div class="home-hero__line home-hero__line--indent hero-item" style="--stagger: 2">
                        "Redefined."
                    </div>
                </h1>
                <div class="home-hero__actions hero-item" style="--stagger: 3">
                    <button class="link-arrow" on:click=move |_| on_navigate.run(Page::Expertise)>
                        "Explore Capabilities " <span>"\u{2192}"</span>
                    </button>
                </div>
            </section>

            <section class="home-credo">
                <span class="eyebrow">"THE CREDO"</span>
                <p class="home-credo__text reveal">
                    "We take ordinary ideas, twist them, and turn them into "
                    <span class="muted">"bold stories"</span>
                    " that reshape culture and spark creativity."
                </p>
            </section>

            <section
                class="home-capabilities"
                style=format!("--panels: {}", CAPABILITIES.len())
                data-pin-panels=CAPABILITIES.len().to_string()
            >
                <div class="home-capabilities__viewport">
                    <div class="home-capabilities__track" data-pin-track="">
                        {CAPABILITIES
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="capability-card">
                                        <div class="capability-card__text">
                                            <span class="capability-card__tag">
                                                {format!("[{} // {}]", item.id, item.tag)}
                                            </span>
                                            <h3 class="capability-card__title">{item.title}</h3>
                                            <p class="capability-card__desc">{item.desc}</p>
                                            <button
                                                class="btn btn--ghost"
                                                on:click=move |_| on_navigate.run(Page::Expertise)
                                            >
                                                "View Portfolio"
                                            </button>
                                        </div>
                                        <div class="capability-card__media">
                                            <img src=item.img alt=item.title/>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>

            <section class="home-dossier">
                <div class="home-dossier__marquee" aria-hidden="true">
                    <div class="home-dossier__marquee-line" data-marquee="">
                        {marquee_text.clone()} " " {marquee_text}
                    </div>
                </div>

                <div class="home-dossier__header">
                    <div>
                        <span class="eyebrow">"// THE STRATEGIC ALLIANCE"</span>
                        <h2 class="home-dossier__title">
                            "Meet some of our " <br/> <span class="accent">"clients."</span>
                        </h2>
                    </div>
                    <div class="home-dossier__status">
                        <p>"Selected Partners / 2024"</p>
                        <span>"STATUS: TRANSMITTING_DATA"</span>
                    </div>
                </div>

                <div class="home-dossier__grid">
                    {PARTNERS
                        .iter()
                        .map(|partner| {
                            view! {
                                <div
                                    class=format!("partner reveal {}", partner.size.class())
                                    style=format!("--offset: {}rem", partner.offset_rem)
                                >
                                    <div class="partner__media">
                                        <img src=partner.img alt=partner.name data-parallax="0.15"/>
                                    </div>
                                    <div class="partner__caption">
                                        <span class="partner__id">{format!("ID_{}", partner.id)}</span>
                                        <h3 class="partner__name">{partner.name}</h3>
                                        <p class="partner__role">"Cultural Strategic Partner"</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <ReviewStack/>

            <section class="home-cta">
                <h2 class="home-cta__title reveal">"Start " <span class="accent">"Today."</span></h2>
                <button class="btn btn--solid" on:click=move |_| on_navigate.run(Page::Contact)>
                    "Join The Family"
                </button>
            </section>
        </div>
    }
}

/// Testimonial card stack. "Next" flies the top card off, then advances.
#[component]
fn ReviewStack() -> impl IntoView {
    let deck = RwSignal::new(ReviewDeck::new(REVIEWS.len()));

    #[cfg(feature = "hydrate")]
    let pending = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        pending.try_update_value(Option::take);
    });

    let on_next = move |_| {
        if deck.try_update(ReviewDeck::begin_advance).flatten().is_none() {
            return;
        }
        #[cfg(feature = "hydrate")]
        pending.set_value(Some(gloo_timers::callback::Timeout::new(FLY_OUT_MS, move || {
            deck.update(|d| {
                d.finish_advance();
            });
        })));
        #[cfg(not(feature = "hydrate"))]
        deck.update(|d| {
            d.finish_advance();
        });
    };

    view! {
        <section class="home-reviews">
            <h2 class="home-reviews__title">"The " <span class="accent">"Response."</span></h2>
            <div class="review-stack">
                {REVIEWS
                    .iter()
                    .enumerate()
                    .map(|(idx, review)| {
                        let class = move || {
                            let state = deck.with(|d| d.card_state(idx));
                            match state {
                                CardState::Stacked => "review-card",
                                CardState::Leaving => "review-card review-card--leaving",
                                CardState::Dismissed => "review-card review-card--dismissed",
                            }
                        };
                        let style = move || {
                            let pose = deck.with(|d| d.pose(idx));
                            format!(
                                "--rotate: {}deg; z-index: {}; --enter-delay: {}ms",
                                pose.rotate_deg,
                                pose.z_index,
                                idx * 100,
                            )
                        };
                        view! {
                            <div class=class style=style>
                                <div class="review-card__index">{format!("RB / 0{}", idx + 1)}</div>
                                <p class="review-card__quote">{format!("\u{201c}{}\u{201d}", review.quote)}</p>
                                <div class="review-card__byline">
                                    <span class="review-card__author">{review.author}</span>
                                    <span class="review-card__role">{review.role}</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="review-stack__next" aria-label="Next testimonial" on:click=on_next>
                "\u{2192}"
            </button>
        </section>
    }
}
