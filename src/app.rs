use leptos::prelude::*;

use crate::components::IntroOverlay;
use crate::config::AppConfig;
use crate::pages::Planner;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_browser();

    view! {
        <main class="app">
            <IntroOverlay
                star_count=config.warp_star_count
                duration_ms=config.intro_duration_ms
                fade_ms=config.intro_fade_ms
            />
            <Planner config=config />
        </main>
    }
}
