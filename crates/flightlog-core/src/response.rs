//! Reply payloads returned by the command processor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{display::Card, error::FlightLogError};

/// Who gets to see a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Only the caller (ephemeral)
    Private,
    /// Everyone in the channel
    Public,
}

/// Content of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "lowercase")]
pub enum ResponseBody {
    /// One or more size-bounded text blocks, delivered in order
    Blocks(Vec<String>),
    /// A structured card
    Card(Card),
}

/// A complete reply to one command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub visibility: Visibility,
    pub body: ResponseBody,
}

impl Response {
    pub fn private_text(text: impl Into<String>) -> Self {
        Self {
            visibility: Visibility::Private,
            body: ResponseBody::Blocks(vec![text.into()]),
        }
    }

    pub fn private_blocks(blocks: Vec<String>) -> Self {
        Self {
            visibility: Visibility::Private,
            body: ResponseBody::Blocks(blocks),
        }
    }

    pub fn public_card(card: Card) -> Self {
        Self {
            visibility: Visibility::Public,
            body: ResponseBody::Card(card),
        }
    }

    /// The uniform reply for a failed command: its user message, private.
    pub fn from_error(error: &FlightLogError) -> Self {
        Self::private_text(error.user_message())
    }

    pub fn is_private(&self) -> bool {
        self.visibility == Visibility::Private
    }

    /// Text blocks as delivered; a card counts as a single block.
    pub fn blocks(&self) -> Vec<String> {
        match &self.body {
            ResponseBody::Blocks(blocks) => blocks.clone(),
            ResponseBody::Card(card) => vec![card.to_string()],
        }
    }

    /// Image attached to the reply, if any.
    pub fn image_url(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Card(card) => card.image_url.as_deref(),
            ResponseBody::Blocks(_) => None,
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            ResponseBody::Blocks(blocks) => {
                for block in blocks {
                    f.write_str(block)?;
                    if !block.ends_with('\n') {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
            ResponseBody::Card(card) => write!(f, "{card}"),
        }
    }
}
