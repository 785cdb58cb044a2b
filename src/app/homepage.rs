use chrono::{DateTime, Datelike};
use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    accessibility::AccessibilityControls,
    desktop::RetroDesktop,
    era_container::{EraContainer, EraSection},
    era_navigation::EraNavigation,
    particles::ParticleCanvas,
    project::ProjectList,
    scroll_indicator::ScrollIndicator,
    typography::{ColorPalette, Typography, TypographyDemo},
};
use crate::{era::Era, theme::TypographyVariant};

fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <ParticleCanvas />
        <EraContainer>
            <EraSection era=Era::Past class="bg-past-accent1 p-0">
                <RetroDesktop />
            </EraSection>
            <EraSection era=Era::Present class="text-white">
                <div class="max-w-5xl mx-auto space-y-12">
                    <header class="space-y-4">
                        <Typography era=Era::Present variant=TypographyVariant::H1>
                            "Building software across eras"
                        </Typography>
                        <Typography era=Era::Present variant=TypographyVariant::P class="opacity-80">
                            "Full-stack engineer. Swipe, use the arrow keys or the dots below to travel in time."
                        </Typography>
                    </header>
                    <section class="space-y-4">
                        <Typography era=Era::Present variant=TypographyVariant::H2>
                            "Projects"
                        </Typography>
                        <ProjectList />
                    </section>
                    <section>
                        <TypographyDemo era=Era::Present />
                    </section>
                </div>
            </EraSection>
            <EraSection era=Era::Future class="text-future-secondary">
                <div class="max-w-5xl mx-auto space-y-12">
                    <Typography era=Era::Future variant=TypographyVariant::H1>
                        "What comes next"
                    </Typography>
                    <Typography era=Era::Future variant=TypographyVariant::P class="opacity-80">
                        "Interfaces that listen, adapt and write half the code with you."
                    </Typography>
                    <ColorPalette era=Era::Future />
                    <TypographyDemo era=Era::Future />
                    <footer class="future-body text-xs opacity-60 pt-12">
                        {format!("© {} · rendered with Leptos", build_year())}
                    </footer>
                </div>
            </EraSection>
        </EraContainer>
        <EraNavigation />
        <ScrollIndicator />
        <AccessibilityControls />
    }
}
