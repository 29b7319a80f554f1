//! Structured response cards.
//!
//! A card is the platform-neutral shape of a rich reply: a title, a list of
//! named fields, an optional image and footer. Dispatch layers map it onto
//! whatever their platform offers; [`fmt::Display`] renders it as markdown.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Accent color used for flight log cards.
pub const BRAND_COLOR: u32 = 0x00a6_4f;

/// A single named value on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
    /// Hint that the field may share a row with its neighbours
    pub inline: bool,
}

/// Structured reply with a title, fields, and optional image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<CardField>,
    pub image_url: Option<String>,
    pub footer: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            color: BRAND_COLOR,
            fields: Vec::new(),
            image_url: None,
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append an inline field.
    pub fn field(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.fields.push(CardField {
            name: name.into(),
            value: value.to_string(),
            inline: true,
        });
        self
    }

    pub fn image(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Look up a field value by name.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;

        if let Some(description) = &self.description {
            writeln!(f)?;
            writeln!(f, "{description}")?;
        }

        if !self.fields.is_empty() {
            writeln!(f)?;
            for field in &self.fields {
                writeln!(f, "- **{}**: {}", field.name, field.value)?;
            }
        }

        if let Some(url) = &self.image_url {
            writeln!(f)?;
            writeln!(f, "![flight image]({url})")?;
        }

        if let Some(footer) = &self.footer {
            writeln!(f)?;
            writeln!(f, "*{footer}*")?;
        }

        Ok(())
    }
}
