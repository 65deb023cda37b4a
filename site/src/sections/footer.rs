use super::EVENT_YEAR;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white py-8">
            <div class="container mx-auto text-center px-4">
                <div class="flex justify-center gap-6 mb-4">
                    <a href="https://twitter.com/EthChicago" target="_blank" class="underline">"Twitter"</a>
                    <a href="https://www.instagram.com/ethchicago" target="_blank" class="underline">"Instagram"</a>
                    <a href="https://discord.gg/ethchicago" target="_blank" class="underline">"Discord"</a>
                </div>
                <p class="text-sm text-gray-400">"Cyberjam "{EVENT_YEAR}" — presented by ETHChicago"</p>
            </div>
        </footer>
    }
}
