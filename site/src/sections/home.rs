use super::EVENT_YEAR;
use leptos::prelude::*;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen bg-blue-900 text-white flex items-center justify-center">
            <div class="text-center px-4">
                <h1 class="text-5xl font-bold mb-4">"Welcome to Cyberjam "{EVENT_YEAR}</h1>
                <p class="text-xl">
                    "A one-of-a-kind collaborative hackathon pushing the boundaries of "
                    "what's possible with phygital experiences."
                </p>
                <a href="#register" class="mt-6 inline-block bg-pink-600 py-2 px-4 text-white rounded">
                    "Register Now"
                </a>
            </div>
        </section>
    }
}
