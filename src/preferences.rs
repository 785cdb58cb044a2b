use std::{collections::HashMap, fmt, str::FromStr};

use codee::{string::FromToStringCodec, Decoder, Encoder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const HIGH_CONTRAST_QUERY: &str = "(prefers-contrast: more)";
pub const FONT_SIZE_KEY: &str = "fontSize";
pub const FONT_SIZE_ATTR: &str = "data-font-size";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("couldn't write preference {0}")]
    Write(String),
    #[error("unknown font size: {0}")]
    UnknownFontSize(String),
}

/// The two on/off accessibility switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preference {
    ReducedMotion,
    HighContrast,
}

impl Preference {
    pub fn key(self) -> &'static str {
        match self {
            Preference::ReducedMotion => "reducedMotion",
            Preference::HighContrast => "highContrast",
        }
    }

    /// Class placed on the document root while the preference is on.
    pub fn class_name(self) -> &'static str {
        match self {
            Preference::ReducedMotion => "reduced-motion",
            Preference::HighContrast => "high-contrast",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preference::ReducedMotion => "Reduced Motion",
            Preference::HighContrast => "High Contrast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(FontSize::Small),
            "medium" => Ok(FontSize::Medium),
            "large" => Ok(FontSize::Large),
            other => Err(PreferenceError::UnknownFontSize(other.to_string())),
        }
    }
}

/// Durable string storage keyed by preference name.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// The element the preferences are applied to, normally `<html>`.
pub trait DocumentRoot {
    fn set_class(&mut self, class: &str, enabled: bool);
    fn set_data(&mut self, name: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl PreferenceStore for web_sys::Storage {
    fn get(&self, key: &str) -> Option<String> {
        self.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.set_item(key, value)
            .map_err(|_| PreferenceError::Write(key.to_string()))
    }
}

impl DocumentRoot for web_sys::Element {
    fn set_class(&mut self, class: &str, enabled: bool) {
        _ = self.class_list().toggle_with_force(class, enabled);
    }

    fn set_data(&mut self, name: &str, value: &str) {
        _ = self.set_attribute(name, value);
    }
}

fn read<T: FromStr>(store: &impl PreferenceStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    <FromToStringCodec as Decoder<T>>::decode(&raw).ok()
}

fn write<T: ToString>(
    store: &mut impl PreferenceStore,
    key: &str,
    value: &T,
) -> Result<(), PreferenceError> {
    let raw = <FromToStringCodec as Encoder<T>>::encode(value)
        .map_err(|_| PreferenceError::Write(key.to_string()))?;
    store.set(key, &raw)
}

/// What the platform media queries report before any explicit choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemPreferences {
    pub reduced_motion: bool,
    pub high_contrast: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibilityPreferences {
    pub reduced_motion: bool,
    pub high_contrast: bool,
    pub font_size: FontSize,
}

impl AccessibilityPreferences {
    /// System defaults, overridden by any previously stored choice.
    pub fn load(store: &impl PreferenceStore, system: SystemPreferences) -> Self {
        Self {
            reduced_motion: read(store, Preference::ReducedMotion.key())
                .unwrap_or(system.reduced_motion),
            high_contrast: read(store, Preference::HighContrast.key())
                .unwrap_or(system.high_contrast),
            font_size: read(store, FONT_SIZE_KEY).unwrap_or_default(),
        }
    }

    pub fn get(&self, pref: Preference) -> bool {
        match pref {
            Preference::ReducedMotion => self.reduced_motion,
            Preference::HighContrast => self.high_contrast,
        }
    }

    fn slot(&mut self, pref: Preference) -> &mut bool {
        match pref {
            Preference::ReducedMotion => &mut self.reduced_motion,
            Preference::HighContrast => &mut self.high_contrast,
        }
    }

    /// Flips `pref`, persists it and returns the new value. The in-memory
    /// value changes even if the write fails.
    pub fn toggle(
        &mut self,
        pref: Preference,
        store: &mut impl PreferenceStore,
    ) -> Result<bool, PreferenceError> {
        let slot = self.slot(pref);
        *slot = !*slot;
        let value = *slot;
        write(store, pref.key(), &value)?;
        Ok(value)
    }

    pub fn set_font_size(
        &mut self,
        size: FontSize,
        store: &mut impl PreferenceStore,
    ) -> Result<(), PreferenceError> {
        self.font_size = size;
        write(store, FONT_SIZE_KEY, &size)
    }

    pub fn apply(&self, root: &mut impl DocumentRoot) {
        for pref in [Preference::ReducedMotion, Preference::HighContrast] {
            root.set_class(pref.class_name(), self.get(pref));
        }
        root.set_data(FONT_SIZE_ATTR, self.font_size.as_str());
    }
}
