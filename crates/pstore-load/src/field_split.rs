//! Field-split loader — whitespace tokens parsed one by one.
//!
//! Fields are separated by Unicode whitespace, so vertical tab, NEL (U+0085)
//! and no-break space (U+00A0) split just like space, tab and newline.
//!
//! Tokens are kept verbatim as the store's text, so each must already be the
//! canonical decimal rendering of its value. Anything else is rejected rather
//! than coerced. Ascending order is always verified.

use pstore_core::digits::is_canonical;
use pstore_core::{LoadError, Loaded, Strategy};

use crate::Loader;

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldSplit;

impl Loader for FieldSplit {
    fn strategy(&self) -> Strategy {
        Strategy::FieldSplit
    }

    fn load(&self, bytes: &[u8]) -> Result<Loaded, LoadError> {
        let mut index = Vec::new();
        let mut text = Vec::new();

        let decoded = String::from_utf8_lossy(bytes);

        for (position, token) in decoded.split_whitespace().enumerate() {
            let value = is_canonical(token)
                .then(|| token.parse::<u64>().ok())
                .flatten()
                .ok_or_else(|| LoadError::MalformedToken {
                    position,
                    token: token.to_string(),
                })?;
            index.push(value);
            text.push(token.to_string());
        }

        let loaded = Loaded { index, text };
        loaded.verify_order()?;
        Ok(loaded)
    }
}
