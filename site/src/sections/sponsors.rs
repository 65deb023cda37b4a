use super::SPONSOR_DECK_URL;
use leptos::prelude::*;

#[component]
pub fn Sponsors() -> impl IntoView {
    view! {
        <section id="sponsors" class="min-h-screen bg-gray-200 text-gray-900 flex items-center justify-center py-16">
            <div class="container mx-auto text-center px-4">
                <h2 class="text-4xl font-bold mb-6">"Our Sponsors"</h2>
                <p class="text-lg">
                    "Become a sponsor and join us in creating one-of-a-kind experiences. "
                    "Tailor your sponsorship to our themes and be part of the future of "
                    "phygital experiences."
                </p>
                <a href=SPONSOR_DECK_URL class="mt-6 inline-block bg-pink-600 py-2 px-4 text-white rounded">
                    "Download Sponsor Deck"
                </a>
            </div>
        </section>
    }
}
