use leptos::{either::EitherOf9, prelude::*};

use crate::{
    era::Era,
    theme::{
        class_names, font_families, palette, responsive_spacing, typography_class, HeadingStyle,
        TypographyVariant,
    },
};

/// Text element styled for an era. The tag follows the variant.
#[component]
pub fn Typography(
    era: Era,
    variant: TypographyVariant,
    #[prop(optional)] heading: HeadingStyle,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let class = class_names(&[&typography_class(era, variant, heading), &class]);
    match variant {
        TypographyVariant::H1 => EitherOf9::A(view! { <h1 class=class>{children()}</h1> }),
        TypographyVariant::H2 => EitherOf9::B(view! { <h2 class=class>{children()}</h2> }),
        TypographyVariant::H3 => EitherOf9::C(view! { <h3 class=class>{children()}</h3> }),
        TypographyVariant::H4 => EitherOf9::D(view! { <h4 class=class>{children()}</h4> }),
        TypographyVariant::H5 => EitherOf9::E(view! { <h5 class=class>{children()}</h5> }),
        TypographyVariant::H6 => EitherOf9::F(view! { <h6 class=class>{children()}</h6> }),
        TypographyVariant::P => EitherOf9::G(view! { <p class=class>{children()}</p> }),
        TypographyVariant::Code => EitherOf9::H(view! { <code class=class>{children()}</code> }),
        TypographyVariant::Span => EitherOf9::I(view! { <span class=class>{children()}</span> }),
    }
}

#[component]
pub fn TypographyDemo(era: Era) -> impl IntoView {
    let fonts = font_families(era).join(", ");
    view! {
        <div class="space-y-4 rounded-lg bg-black/10" style:padding=responsive_spacing(8)>
            <Typography era=era variant=TypographyVariant::H2>
                {era.label()}
            </Typography>
            <Typography era=era variant=TypographyVariant::H4 heading=HeadingStyle::Linux>
                "Same era, other desktop"
            </Typography>
            <Typography era=era variant=TypographyVariant::P>
                "The quick brown fox jumps over the lazy dog."
            </Typography>
            <Typography era=era variant=TypographyVariant::Code>
                "fn main() { println!(\"hello\"); }"
            </Typography>
            <Typography era=era variant=TypographyVariant::Span class="block opacity-70">
                {format!("Fonts: {fonts}")}
            </Typography>
        </div>
    }
}

/// Swatches for every slot of an era's palette.
#[component]
pub fn ColorPalette(era: Era) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-5 gap-4" role="list" aria-label=format!("{} colors", era.label())>
            {palette(era)
                .slots()
                .into_iter()
                .map(|(slot, color)| {
                    view! {
                        <div class="flex flex-col items-center gap-2" role="listitem">
                            <div
                                class="w-16 h-16 rounded-lg border border-white/20"
                                style:background-color=color
                            ></div>
                            <span class="text-xs">{slot}</span>
                            <code class="text-xs opacity-70">{color}</code>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
