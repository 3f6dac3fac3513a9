//! Case study page.
//!
//! Renders `resolve_project(project_id)`, so an unknown id shows the default
//! case study instead of an empty page. The view is keyed on the id by the
//! shell; moving to the next case study remounts it and rebinds scroll
//! effects to the new fragments.

use leptos::html;
use leptos::prelude::*;

use crate::data::projects::{next_project, resolve_project};
use crate::state::nav::Page;
use crate::util::scroll_fx::use_scroll_fx;

#[component]
pub fn ProjectDetailPage(
    project_id: String,
    on_navigate: Callback<Page>,
    on_navigate_to_project: Callback<String>,
) -> impl IntoView {
    let root = NodeRef::<html::Div>::new();
    use_scroll_fx(root);

    let project = resolve_project(&project_id);
    let next = next_project(project.id);

    let title_chars = project
        .title
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            view! {
                <span class="hero-char" style=format!("--i: {i}")>
                    {ch.to_string()}
                </span>
            }
        })
        .collect::<Vec<_>>();

    let next_title = next
        .title
        .split_whitespace()
        .map(|word| view! { <span class="project-next__word">{word}</span> })
        .collect::<Vec<_>>();

    view! {
        <div class="project" node_ref=root>
            <div class="project__progress" data-scroll-progress=""></div>

            <section class="project-hero">
                <button class="project-hero__back" on:click=move |_| on_navigate.run(Page::Work)>
                    "\u{2190} Portfolio"
                </button>
                <div class="project-hero__unit hero-item" style="--stagger: 0">
                    <span class="dot"></span>
                    <span>{format!("// {}", project.unit_code())}</span>
                </div>

                <h1 class="project-hero__title" aria-label=project.title>
                    {title_chars}
                </h1>

                <div class="project-meta hero-item" style="--stagger: 2">
                    <div class="project-meta__cell">
                        <p class="project-meta__label">"Client"</p>
                        <p class="project-meta__value">{project.client}</p>
                    </div>
                    <div class="project-meta__cell">
                        <p class="project-meta__label">"Protocol"</p>
                        <div class="project-meta__list">
                            {project.services.iter().map(|s| view! { <span>{*s}</span> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="project-meta__cell">
                        <p class="project-meta__label">"Location"</p>
                        <p class="project-meta__value">{project.location}</p>
                    </div>
                    <div class="project-meta__cell project-meta__cell--wide-only">
                        <p class="project-meta__label">"Year"</p>
                        <p class="project-meta__value">{project.year}</p>
                    </div>
                </div>
            </section>

            <section class="project-synopsis">
                <span class="eyebrow">"// SYNOPSIS"</span>
                <p class="project-synopsis__text reveal">{project.description}</p>
            </section>

            <section class="project-credits">
                <span class="eyebrow">"// CREDITS"</span>
                <dl class="project-credits__list">
                    {project
                        .team
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="project-credits__row reveal">
                                    <dt>{member.role}</dt>
                                    <dd>{member.name}</dd>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
            </section>

            <section class="project-gallery">
                {project
                    .fragments
                    .iter()
                    .map(|frag| {
                        view! {
                            <figure class=format!("fragment reveal reveal--reversible {}", frag.span.class())>
                                <div class=format!("fragment__frame {}", frag.aspect.class())>
                                    <img src=frag.url alt=frag.label data-parallax=frag.parallax.to_string()/>
                                </div>
                                <figcaption class="fragment__caption">
                                    <span class="fragment__label">{format!("[{}]", frag.label)}</span>
                                    <span class="fragment__meta">{frag.meta}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="project-next">
                <span class="project-next__kicker">"NEXT_CASE_STUDY"</span>
                <button
                    class="project-next__link"
                    on:click=move |_| on_navigate_to_project.run(next.id.to_owned())
                >
                    <h2 class="project-next__title">{next_title}</h2>
                    <div class="project-next__cta">
                        <span class="project-next__rule"></span>
                        <span>"Initialize Transfer"</span>
                        <span class="project-next__arrow">"\u{2192}"</span>
                    </div>
                </button>
            </section>
        </div>
    }
}
