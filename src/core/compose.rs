//! Document body composition
//!
//! Picks the live playlist or the expired placeholder for an identifier and
//! finishes it with the matching footer.

use crate::core::footer::FooterCodec;

/// Fixed playlist shown once a document has expired
pub const EXPIRED_PLACEHOLDER: &str = include_str!("expired_placeholder.m3u");

/// Builds final document bodies
#[derive(Debug, Clone)]
pub struct ContentComposer {
    footer: FooterCodec,
}

impl ContentComposer {
    pub fn new(footer: FooterCodec) -> Self {
        Self { footer }
    }

    /// Content body for the expiry state, without footer
    ///
    /// Expiry replaces the live body wholesale.
    pub fn select_body<'a>(&self, live_body: &'a str, expired: bool) -> &'a str {
        if expired {
            EXPIRED_PLACEHOLDER
        } else {
            live_body
        }
    }

    /// Final document body: chosen content plus a fresh footer
    pub fn compose(&self, identifier: &str, live_body: &str, expired: bool) -> String {
        self.footer
            .add_footer(self.select_body(live_body, expired), identifier, expired)
    }

    /// The footer codec used for composition
    pub fn footer(&self) -> &FooterCodec {
        &self.footer
    }
}
