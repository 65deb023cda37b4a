use super::EVENT_YEAR;
use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="min-h-screen bg-gray-100 text-gray-900 flex items-center justify-center py-16">
            <div class="container mx-auto text-center px-4">
                <h2 class="text-4xl font-bold mb-6">"About Cyberjam"</h2>
                <p class="text-lg">
                    "Cyberjam "{EVENT_YEAR}" is an immersive hackathon taking place from "
                    "October 19th to October 27th at Chicago 1871. Teams of 5 will work "
                    "together on phygital experiences combining art, technology, and "
                    "innovation across five thematic tracks: Governance, Fashion, "
                    "Security & Privacy, Sports & Gaming, and AI."
                </p>
            </div>
        </section>
    }
}
