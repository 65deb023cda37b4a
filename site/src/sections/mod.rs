// Landing page sections, composed top to bottom by `App`.

/// Event year shown across the page (single source of truth)
pub const EVENT_YEAR: &str = "2024";

/// Outbound links. Opaque hrefs, not part of the page's logic.
pub const REGISTRATION_FORM_URL: &str = "/registration-form";
pub const SPONSOR_DECK_URL: &str = "/sponsor-deck";
pub const RECAP_VIDEO_EMBED_URL: &str = "https://www.youtube.com/embed/Qu6LKDAfDZI";

mod about;
mod footer;
mod home;
mod nav;
mod recap;
mod register;
mod sponsor_resources;
mod sponsors;

pub use about::About;
pub use footer::Footer;
pub use home::Home;
pub use nav::Nav;
pub use recap::Recap;
pub use register::Register;
pub use sponsor_resources::SponsorResources;
pub use sponsors::Sponsors;
