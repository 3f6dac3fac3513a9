//! Services page: expertise matrix, process phases and consultation calls to action.

use leptos::html;
use leptos::prelude::*;

use crate::data::content::{EXPERTISE_MATRIX, PROCESS_PHASES};
use crate::state::nav::Page;
use crate::util::scroll_fx::use_scroll_fx;

#[component]
pub fn ExpertisePage(on_navigate: Callback<Page>) -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    use_scroll_fx(root);

    view! {
        <div class="expertise" node_ref=root>
            <section class="expertise__backdrop" aria-hidden="true">
                <span data-parallax="-0.2" data-parallax-page="">"RCS"</span>
            </section>

            <section class="expertise-hero">
                <h1 class="expertise-hero__title hero-item" style="--stagger: 0">
                    "Expertise " <br/> "& Process."
                </h1>
                <p class="expertise-hero__lede hero-item" style="--stagger: 1">
                    "We combine high-level strategy with pixel-perfect execution to create brands that don't just \
                     exist\u{2014}they lead."
                </p>
            </section>

            <section class="expertise-matrix">
                {EXPERTISE_MATRIX
                    .iter()
                    .enumerate()
                    .map(|(idx, item)| {
                        let side = if idx % 2 == 0 { "matrix-item" } else { "matrix-item matrix-item--flipped" };
                        view! {
                            <div class=format!("{side} reveal reveal--reversible")>
                                <div class="matrix-item__media">
                                    <img src=item.img alt=item.title/>
                                </div>
                                <div class="matrix-item__text">
                                    <span class="matrix-item__id">{format!("[{}]", item.id)}</span>
                                    <h3 class="matrix-item__title">{item.title}</h3>
                                    <p class="matrix-item__desc">{item.desc}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="expertise-process">
                <div class="expertise-process__header">
                    <div>
                        <span class="eyebrow">"HOW WE WORK"</span>
                        <h2 class="expertise-process__title">
                            "The " <span class="accent">"Rebirth"</span> " Protocol."
                        </h2>
                    </div>
                    <p class="expertise-process__note">
                        "A rigid framework for liquid creativity. We believe that structure allows for the boldest \
                         expression."
                    </p>
                </div>

                <div class="expertise-process__steps">
                    {PROCESS_PHASES
                        .iter()
                        .map(|phase| {
                            view! {
                                <div class="process-step reveal reveal--from-left">
                                    <div class="process-step__index">{format!("[{}]", phase.phase)}</div>
                                    <div class="process-step__heading">
                                        <h3>{phase.title}</h3>
                                        <span class="process-step__label">{phase.label}</span>
                                    </div>
                                    <p class="process-step__desc">{phase.desc}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="expertise-philosophy">
                <h2 class="expertise-philosophy__quote reveal">
                    "\u{201c}We don't build assets; we nurture "
                    <span class="accent">"ecosystems"</span>
                    " where brands flourish.\u{201d}"
                </h2>
                <button class="btn btn--light" on:click=move |_| on_navigate.run(Page::Contact)>
                    "Initiate Project"
                </button>
            </section>

            <section class="expertise-cta">
                <h2 class="expertise-cta__title reveal">
                    "Elevate your " <br/> <span class="accent">"cultural footprint."</span>
                </h2>
                <button class="link-arrow" on:click=move |_| on_navigate.run(Page::Contact)>
                    "Schedule a Consultation " <span>"\u{2192}"</span>
                </button>
            </section>
        </div>
    }
}
