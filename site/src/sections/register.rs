use super::{EVENT_YEAR, REGISTRATION_FORM_URL};
use leptos::prelude::*;

#[component]
pub fn Register() -> impl IntoView {
    view! {
        <section id="register" class="min-h-screen bg-blue-900 text-white flex items-center justify-center py-16">
            <div class="container mx-auto text-center px-4">
                <h2 class="text-4xl font-bold mb-6">"Register Now"</h2>
                <p class="text-lg">
                    "Join us in shaping the future of immersive experiences. Secure your "
                    "spot now and be a part of Cyberjam "{EVENT_YEAR}"."
                </p>
                <div class="flex justify-center items-center mt-6">
                    <img
                        src="assets/register-banner.png"
                        alt="Cyberjam registration"
                        class="max-w-xl w-full rounded"
                    />
                </div>
                <a
                    href=REGISTRATION_FORM_URL
                    class="mt-6 inline-block bg-pink-600 py-2 px-4 text-white rounded"
                >
                    "Register"
                </a>
            </div>
        </section>
    }
}
