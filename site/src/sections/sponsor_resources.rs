use crate::gate::{Attempt, Gate, Tier};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Tier-gated sponsor onboarding guides.
///
/// The only stateful section on the page. All transitions go through the
/// [`Gate`] model: selecting a tier (or reselecting the current one) locks
/// the panel and clears the input, and submission clears it on both
/// outcomes, so the field is never left holding a stale passphrase.
#[component]
pub fn SponsorResources() -> impl IntoView {
    let (gate, set_gate) = signal(Gate::default());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut outcome = Attempt::Denied;
        set_gate.update(|g| outcome = g.submit());
        if outcome == Attempt::Denied {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Incorrect password");
            }
        }
    };

    view! {
        <section id="sponsor-resources" class="min-h-screen bg-gray-900 text-white flex items-center justify-center py-16">
            <div class="container mx-auto text-center px-4">
                <h2 class="text-4xl font-bold mb-6">"Sponsor Resources"</h2>
                <p class="text-lg mb-8">
                    "Already a sponsor? Select your tier and enter the password from "
                    "your welcome email to access your onboarding guide."
                </p>

                <div class="flex justify-center gap-4 mb-8">
                    {Tier::ALL
                        .into_iter()
                        .map(|tier| {
                            view! {
                                <button
                                    class=move || if gate.get().state().selected() == Some(tier) {
                                        "bg-pink-600 py-2 px-4 text-white rounded"
                                    } else {
                                        "bg-gray-700 py-2 px-4 text-white rounded"
                                    }
                                    on:click=move |_| set_gate.update(|g| g.select(tier))
                                >
                                    {tier.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <Show when=move || gate.get().state().awaiting_passphrase()>
                    <form class="flex justify-center gap-4" on:submit=submit>
                        <input
                            type="password"
                            class="py-2 px-4 text-gray-900 rounded"
                            placeholder="Enter password"
                            prop:value=move || gate.get().attempt().to_string()
                            on:input=move |ev| {
                                set_gate.update(|g| g.input(event_target_value(&ev)))
                            }
                        />
                        <button type="submit" class="bg-pink-600 py-2 px-4 text-white rounded">
                            "Unlock"
                        </button>
                    </form>
                </Show>

                {move || {
                    gate.get().state().unlocked().map(|tier| {
                        view! {
                            <div class="bg-gray-100 text-gray-900 rounded p-8 max-w-2xl mx-auto text-left">
                                <h3 class="text-2xl font-bold mb-4">{tier.label()}" Sponsor Guide"</h3>
                                {tier.guide()
                                    .iter()
                                    .map(|paragraph| view! { <p class="mb-3">{*paragraph}</p> })
                                    .collect_view()}
                            </div>
                        }
                    })
                }}
            </div>
        </section>
    }
}
