//! Multi-step inquiry form.
//!
//! DESIGN
//! ======
//! All form state is one local `RwSignal<ContactForm>` owned by this view.
//! The form stays mounted while the confirmation screen is shown on top of
//! it, so "Return" lands back on the same values and the step observer
//! keeps running.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::data::content::CONTACT_SERVICES;
use crate::state::contact::{ContactForm, STEP_COUNT};
use crate::util::scroll_fx::use_viewport_steps;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let root = NodeRef::<html::Div>::new();

    let on_step = Callback::new(move |step: usize| {
        if form.with_untracked(|f| f.active_step) != step {
            form.update(|f| f.set_active_step(step));
        }
    });
    use_viewport_steps(root, on_step);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            if let Err(e) = f.submit() {
                #[cfg(feature = "hydrate")]
                log::debug!("inquiry blocked: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = e;
            }
        });
    };

    let background = move || form.with(ContactForm::background);
    let error_text = move || form.with(|f| f.error.map(|e| e.to_string()));
    let dossier = move || form.with(ContactForm::dossier_label);

    view! {
        <div class="contact" node_ref=root>
            <div class="contact__backdrop">
                {move || {
                    let src = background();
                    view! { <img class="contact__backdrop-img" src=src alt=""/> }
                }}
            </div>

            <aside class="contact-status" aria-hidden="true">
                <div class="contact-status__label">
                    <span>"Status"</span>
                    <strong>"TRANSMITTING"</strong>
                </div>
                <div class="contact-status__steps">
                    {(0..STEP_COUNT)
                        .map(|step| {
                            let class = move || {
                                if form.with(|f| f.active_step) == step {
                                    "contact-status__bar contact-status__bar--active"
                                } else {
                                    "contact-status__bar"
                                }
                            };
                            view! { <div class=class></div> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </aside>

            <form class="contact-form" novalidate=true on:submit=on_submit>
                <div class="contact-form__step" data-step="0">
                    <span class="contact-form__prompt">"I am"</span>
                    <input
                        class="contact-form__input contact-form__input--xl"
                        type="text"
                        placeholder="[Name]"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <span class="contact-form__prompt contact-form__prompt--sub">"representing"</span>
                    <input
                        class="contact-form__input contact-form__input--lg"
                        type="text"
                        placeholder="[Entity]"
                        prop:value=move || form.with(|f| f.company.clone())
                        on:input=move |ev| form.update(|f| f.company = event_target_value(&ev))
                    />
                </div>

                <div class="contact-form__step" data-step="1">
                    <span class="contact-form__prompt">"Reach me at"</span>
                    <input
                        class="contact-form__input contact-form__input--xl"
                        type="email"
                        placeholder="[Email Address]"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </div>

                <div class="contact-form__step" data-step="2">
                    <span class="contact-form__prompt">"Seeking expertise in"</span>
                    <div class="contact-form__services">
                        {CONTACT_SERVICES
                            .iter()
                            .map(|&service| {
                                let class = move || {
                                    if form.with(|f| f.is_selected(service)) {
                                        "service-toggle service-toggle--selected"
                                    } else {
                                        "service-toggle"
                                    }
                                };
                                view! {
                                    <button
                                        type="button"
                                        class=class
                                        on:click=move |_| form.update(|f| f.toggle_service(service))
                                    >
                                        {service}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="contact-form__step" data-step="3">
                    <span class="contact-form__prompt">"To build"</span>
                    <textarea
                        class="contact-form__input contact-form__input--area"
                        rows="2"
                        placeholder="[Manifest your vision...]"
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                    ></textarea>

                    <div class="contact-form__footer">
                        <p class="contact-form__note">
                            "Inquiries are strictly confidential within the Rebirth network."
                        </p>
                        <Show when=move || error_text().is_some()>
                            <p class="contact-form__error" role="alert">{move || error_text().unwrap_or_default()}</p>
                        </Show>
                        <button type="submit" class="btn btn--solid">"Transmit Inquire"</button>
                    </div>
                </div>
            </form>

            <Show when=move || dossier().is_some()>
                <div class="contact-dossier">
                    <span>{move || dossier().unwrap_or_default()}</span>
                    <span class="contact-dossier__ping"></span>
                </div>
            </Show>

            <Show when=move || form.with(|f| f.submitted)>
                <div class="contact-sent">
                    <div class="contact-sent__curtain"></div>
                    <div class="contact-sent__body">
                        <p class="contact-sent__kicker">"Archive Entry Recorded"</p>
                        <h1 class="contact-sent__title">"See you " <span class="accent">"Soon."</span></h1>
                        <button class="btn btn--outline" on:click=move |_| form.update(ContactForm::return_to_form)>
                            "Return"
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
