//! Color and typography tables for the three eras. These values mirror the
//! custom properties and font families declared in `tailwind.config.js`.

use crate::era::Era;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent1: &'static str,
    pub accent2: &'static str,
    pub accent3: &'static str,
}

impl EraPalette {
    pub fn slots(&self) -> [(&'static str, &'static str); 5] {
        [
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent1", self.accent1),
            ("accent2", self.accent2),
            ("accent3", self.accent3),
        ]
    }
}

// Windows 95
pub const PAST_COLORS: EraPalette = EraPalette {
    primary: "#00807E",
    secondary: "#C0C0C0",
    accent1: "#008080",
    accent2: "#FF0000",
    accent3: "#FFA500",
};

pub const PRESENT_COLORS: EraPalette = EraPalette {
    primary: "#171C28",
    secondary: "#0078D7",
    accent1: "#67E480",
    accent2: "#E83E8C",
    accent3: "#FF8A00",
};

pub const FUTURE_COLORS: EraPalette = EraPalette {
    primary: "#080C24",
    secondary: "#FFFFFF",
    accent1: "#00F0FF",
    accent2: "#FF00A0",
    accent3: "#7B00FF",
};

pub fn palette(era: Era) -> EraPalette {
    match era {
        Era::Past => PAST_COLORS,
        Era::Present => PRESENT_COLORS,
        Era::Future => FUTURE_COLORS,
    }
}

/// `--{era}-{slot}: {color};` declarations for every era, suitable for a
/// `:root` style attribute.
pub fn all_css_vars() -> String {
    Era::ALL
        .iter()
        .flat_map(|era| {
            palette(*era)
                .slots()
                .into_iter()
                .map(move |(slot, color)| format!("--{era}-{slot}: {color};"))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn font_families(era: Era) -> &'static [&'static str] {
    match era {
        Era::Past => &["MS Sans Serif", "VT323", "Courier New"],
        Era::Present => &["Roboto", "Ubuntu", "Inter", "SF Pro Text", "Cascadia Code"],
        Era::Future => &["Orbitron", "Space Grotesk", "JetBrains Mono"],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypographyVariant {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    P,
    Code,
    Span,
}

impl TypographyVariant {
    pub fn is_heading(self) -> bool {
        matches!(
            self,
            Self::H1 | Self::H2 | Self::H3 | Self::H4 | Self::H5 | Self::H6
        )
    }

    pub fn size_class(self) -> &'static str {
        match self {
            Self::H1 => "text-4xl font-bold",
            Self::H2 => "text-3xl font-bold",
            Self::H3 => "text-2xl font-semibold",
            Self::H4 => "text-xl font-semibold",
            Self::H5 => "text-lg font-medium",
            Self::H6 => "text-base font-medium",
            Self::P | Self::Span => "text-base",
            Self::Code => "text-sm",
        }
    }
}

/// The present era can dress its headings as either desktop OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingStyle {
    #[default]
    Windows,
    Linux,
}

fn era_class(era: Era, variant: TypographyVariant, heading: HeadingStyle) -> &'static str {
    match (era, variant) {
        (Era::Past, v) if v.is_heading() => "past-heading",
        (Era::Past, TypographyVariant::Code) => "past-code",
        (Era::Past, _) => "past-body",
        (Era::Present, v) if v.is_heading() => match heading {
            HeadingStyle::Windows => "present-heading-windows",
            HeadingStyle::Linux => "present-heading-linux",
        },
        (Era::Present, TypographyVariant::Code) => "present-code",
        (Era::Present, _) => "present-body",
        (Era::Future, v) if v.is_heading() => "future-heading",
        (Era::Future, TypographyVariant::Code) => "future-code",
        (Era::Future, _) => "future-body",
    }
}

pub fn typography_class(era: Era, variant: TypographyVariant, heading: HeadingStyle) -> String {
    class_names(&[era_class(era, variant, heading), variant.size_class()])
}

/// Joins class fragments, skipping empty ones.
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spacing scale built on a 4px base unit.
pub fn responsive_spacing(base: u32) -> String {
    match base {
        4 => "1rem".to_string(),
        8 => "2rem".to_string(),
        16 => "4rem".to_string(),
        24 => "6rem".to_string(),
        32 => "8rem".to_string(),
        48 => "12rem".to_string(),
        64 => "16rem".to_string(),
        96 => "24rem".to_string(),
        other => format!("{}rem", other as f64 / 4.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_lookup() {
        assert_eq!(palette(Era::Past).accent1, "#008080");
        assert_eq!(palette(Era::Present).secondary, "#0078D7");
        assert_eq!(palette(Era::Future).accent3, "#7B00FF");
    }

    #[test]
    fn test_css_vars_cover_every_slot() {
        let vars = all_css_vars();
        assert!(vars.contains("--past-primary: #00807E;"));
        assert!(vars.contains("--present-accent2: #E83E8C;"));
        assert!(vars.contains("--future-secondary: #FFFFFF;"));
        assert_eq!(vars.matches(';').count(), 15);
    }

    #[test]
    fn test_typography_classes() {
        assert_eq!(
            typography_class(Era::Past, TypographyVariant::H1, HeadingStyle::Windows),
            "past-heading text-4xl font-bold"
        );
        assert_eq!(
            typography_class(Era::Present, TypographyVariant::H3, HeadingStyle::Linux),
            "present-heading-linux text-2xl font-semibold"
        );
        assert_eq!(
            typography_class(Era::Future, TypographyVariant::Code, HeadingStyle::Windows),
            "future-code text-sm"
        );
        assert_eq!(
            typography_class(Era::Present, TypographyVariant::Span, HeadingStyle::Linux),
            "present-body text-base"
        );
    }

    #[test]
    fn test_class_names_skips_empty() {
        assert_eq!(class_names(&["a", "", "  ", "b c"]), "a b c");
        assert_eq!(class_names(&[]), "");
    }

    #[test]
    fn test_responsive_spacing() {
        assert_eq!(responsive_spacing(16), "4rem");
        assert_eq!(responsive_spacing(96), "24rem");
        assert_eq!(responsive_spacing(12), "3rem");
        assert_eq!(responsive_spacing(10), "2.5rem");
    }
}
