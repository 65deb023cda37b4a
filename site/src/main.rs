// Cyberjam Landing Page — Leptos 0.8 Edition

mod gate;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Home />
            <About />
            <Sponsors />
            <Register />
            <Recap />
            <SponsorResources />
        </main>
        <Footer />
    }
}
