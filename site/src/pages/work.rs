//! Portfolio index. Every case study record, alternating image side.

use leptos::html;
use leptos::prelude::*;

use crate::data::projects::PROJECTS;
use crate::state::nav::Page;
use crate::util::scroll_fx::use_scroll_fx;

#[component]
pub fn WorkPage(on_navigate: Callback<Page>, on_navigate_to_project: Callback<String>) -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    use_scroll_fx(root);

    view! {
        <div class="work" node_ref=root>
            <section class="work__index">
                <header class="work__header hero-item" style="--stagger: 0">
                    <h1 class="work__title">"Selected " <br/> "Portfolios"</h1>
                    <p class="work__kicker">"\u{2014} ARCHIVE INDEX 2024"</p>
                </header>

                <div class="work__list">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(idx, project)| {
                            let layout = if idx % 2 == 0 { "work-item" } else { "work-item work-item--reversed" };
                            let id = project.id;
                            view! {
                                <button
                                    class=format!("{layout} reveal reveal--reversible")
                                    on:click=move |_| on_navigate_to_project.run(id.to_owned())
                                >
                                    <div class="work-item__media">
                                        <img src=project.image_url alt=project.title/>
                                        <div class="work-item__hover">
                                            <span>{format!("Case Study 0{}", idx + 1)}</span>
                                            <span class="work-item__arrow">"\u{2192}"</span>
                                        </div>
                                    </div>
                                    <div class="work-item__text">
                                        <span class="work-item__category">{project.category}</span>
                                        <h3 class="work-item__title">{project.title}</h3>
                                        <div class="work-item__rule"></div>
                                        <p class="work-item__meta">
                                            {format!("{} / {}", project.client, project.year)}
                                        </p>
                                    </div>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="work-cta">
                <h2 class="work-cta__title reveal">
                    "You like what you see? " <br/> <span class="accent">"Manifest your vision."</span>
                </h2>
                <button
                    class="work-cta__orb"
                    aria-label="Start a project"
                    on:click=move |_| on_navigate.run(Page::Contact)
                >
                    <span>"\u{2197}"</span>
                </button>
            </section>
        </div>
    }
}
