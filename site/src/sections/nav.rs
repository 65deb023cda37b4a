use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-10 bg-gray-900 text-white py-4">
            <div class="container mx-auto flex justify-between items-center px-4">
                <a href="#home" class="flex items-center justify-center w-20 h-20 rounded-full">
                    <img src="assets/cyberjam-logo.png" alt="Cyberjam" class="w-full h-full object-cover" />
                </a>
                <div>
                    <a href="#about" class="px-4">"About"</a>
                    <a href="#sponsors" class="px-4">"Sponsors"</a>
                    <a href="#register" class="px-4">"Register"</a>
                    <a href="#2023cyberjam" class="px-4">"2023 Cyberjam"</a>
                    <a href="#sponsor-resources" class="px-4">"Sponsor Resources"</a>
                </div>
            </div>
        </nav>
    }
}
