// UI Preferences
// Theme and template choice as an explicit value object, persisted through a
// PreferenceStore rather than ambient global state.

pub mod handlers;
pub mod store;

use serde::{Deserialize, Serialize};
use tracing::warn;

use store::{PreferenceStore, StoreError};

pub const THEME_KEY: &str = "theme";
pub const TEMPLATE_KEY: &str = "selectedTemplate";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TemplateName {
    #[default]
    Professional,
    Modern,
    Creative,
    Minimal,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

impl TemplateName {
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateName::Professional => "professional",
            TemplateName::Modern => "modern",
            TemplateName::Creative => "creative",
            TemplateName::Minimal => "minimal",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "professional" => Some(TemplateName::Professional),
            "modern" => Some(TemplateName::Modern),
            "creative" => Some(TemplateName::Creative),
            "minimal" => Some(TemplateName::Minimal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    pub theme: Theme,
    pub selected_template: TemplateName,
}

impl Preferences {
    /// Reads both keys. Missing or unrecognized values fall back to defaults.
    pub async fn load(store: &dyn PreferenceStore) -> Result<Self, StoreError> {
        let theme = match store.get(THEME_KEY).await? {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!("Ignoring unknown theme '{raw}'");
                Theme::default()
            }),
            None => Theme::default(),
        };
        let selected_template = match store.get(TEMPLATE_KEY).await? {
            Some(raw) => TemplateName::parse(&raw).unwrap_or_else(|| {
                warn!("Ignoring unknown template '{raw}'");
                TemplateName::default()
            }),
            None => TemplateName::default(),
        };

        Ok(Preferences {
            theme,
            selected_template,
        })
    }

    pub async fn save(&self, store: &dyn PreferenceStore) -> Result<(), StoreError> {
        store.set(THEME_KEY, self.theme.as_str()).await?;
        store
            .set(TEMPLATE_KEY, self.selected_template.as_str())
            .await
    }
}
