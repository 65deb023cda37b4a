use super::RECAP_VIDEO_EMBED_URL;
use leptos::prelude::*;

#[component]
pub fn Recap() -> impl IntoView {
    view! {
        <section id="2023cyberjam" class="min-h-screen bg-gray-100 text-gray-900 flex items-center justify-center py-16">
            <div class="container mx-auto text-center px-4">
                <h2 class="text-4xl font-bold mb-6 text-pink-600">"Cyberjam 2023"</h2>
                <p class="text-lg">"Check out the highlights from Cyberjam 2023!"</p>
                <div class="flex justify-center items-center mt-6">
                    <iframe
                        width="939"
                        height="528"
                        src=RECAP_VIDEO_EMBED_URL
                        title="ETHChicago presents the 2023 CyberJam"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                        referrerpolicy="strict-origin-when-cross-origin"
                        allowfullscreen=true
                    ></iframe>
                </div>
                <div class="flex justify-center items-center mt-6">
                    <img
                        src="assets/recap-2023.png"
                        alt="Teams presenting at Cyberjam 2023"
                        class="max-w-2xl w-full rounded"
                    />
                </div>
            </div>
        </section>
    }
}
