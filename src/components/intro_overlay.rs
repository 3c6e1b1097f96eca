use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq)]
enum IntroPhase {
    Visible,
    Fading,
    Hidden,
}

impl IntroPhase {
    fn style(&self) -> &'static str {
        match self {
            IntroPhase::Visible => "opacity: 1",
            IntroPhase::Fading => "opacity: 0",
            IntroPhase::Hidden => "display: none",
        }
    }
}

struct WarpStar {
    left: f64,
    top: f64,
    duration: f64,
    delay: f64,
}

impl WarpStar {
    fn random() -> Self {
        Self {
            left: js_sys::Math::random() * 100.0,
            top: js_sys::Math::random() * 100.0,
            duration: 1.0 + js_sys::Math::random() * 2.0,
            delay: js_sys::Math::random() * 2.0,
        }
    }

    fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-duration: {:.2}s; animation-delay: {:.2}s",
            self.left, self.top, self.duration, self.delay
        )
    }
}

/// Splash screen shown while the page settles; fades out, then is removed.
#[component]
pub fn IntroOverlay(star_count: usize, duration_ms: u32, fade_ms: u32) -> impl IntoView {
    let phase = RwSignal::new(IntroPhase::Visible);

    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        phase.set(IntroPhase::Fading);
        TimeoutFuture::new(fade_ms).await;
        phase.set(IntroPhase::Hidden);
    });

    let stars = (0..star_count)
        .map(|_| {
            let star = WarpStar::random();
            view! { <div class="warp-star" style=star.style()></div> }
        })
        .collect_view();

    view! {
        <div class="initial-loading" style=move || phase.get().style()>
            <div class="warp-stars">{stars}</div>
            <div class="initial-loading-title">"DevPlan"</div>
        </div>
    }
}
