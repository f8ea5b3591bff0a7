// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transfer options and the ordered option map
//!
//! An [`Options`] map holds at most one [`TransferOption`] per [`OptionKey`].
//! Setting a key that is already present replaces its value in place, so a
//! key keeps the position of its first insertion.

use std::time::Duration;

use reqwest::Method;
use strum_macros::{AsRefStr, Display, EnumDiscriminants};

use super::encoding::Encoding;
use super::header_list::HeaderList;
use super::request::Payload;

/// A single setting passed through to the transfer layer
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(name(OptionKey), derive(Hash, Display, AsRefStr))]
pub enum TransferOption {
    /// Request method
    Method(Method),
    /// Request body
    Body(Payload),
    /// Header lines, merged with the client's own headers
    Headers(HeaderList),
    /// Whole-transfer timeout; zero disables it
    Timeout(Duration),
    /// Connection phase timeout
    ConnectTimeout(Duration),
    /// Follow `Location` headers
    FollowLocation(bool),
    /// Redirect limit, only honoured while following redirects
    MaxRedirects(usize),
    /// User-Agent header
    UserAgent(String),
    /// Accepted content encodings
    Encoding(Encoding),
    /// Referer header
    Referer(String),
    /// Raw Cookie header value, e.g. `"a=1; b=2"`
    Cookie(String),
    /// Proxy URL used for every scheme
    Proxy(String),
    /// Verify the peer certificate
    VerifyPeer(bool),
    /// HTTP basic authentication
    BasicAuth {
        username: String,
        password: Option<String>,
    },
}

impl TransferOption {
    /// Key identifying this option in an [`Options`] map
    pub fn key(&self) -> OptionKey {
        OptionKey::from(self)
    }
}

/// Ordered option map with last-writer-wins semantics per key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: Vec<TransferOption>,
}

impl Options {
    /// Create an empty option map
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, replacing any existing value for the same key
    pub fn set(&mut self, option: TransferOption) {
        let key = option.key();
        match self.entries.iter_mut().find(|o| o.key() == key) {
            Some(slot) => *slot = option,
            None => self.entries.push(option),
        }
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, option: TransferOption) -> Self {
        self.set(option);
        self
    }

    /// Get the option stored under a key
    pub fn get(&self, key: OptionKey) -> Option<&TransferOption> {
        self.entries.iter().find(|o| o.key() == key)
    }

    /// Remove and return the option stored under a key
    pub fn remove(&mut self, key: OptionKey) -> Option<TransferOption> {
        let index = self.entries.iter().position(|o| o.key() == key)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, key: OptionKey) -> bool {
        self.get(key).is_some()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = OptionKey> + '_ {
        self.entries.iter().map(TransferOption::key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransferOption> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `overrides` on top of `self`: overlapping keys take the value
    /// from `overrides`, keys present in only one map are kept
    pub fn merged(&self, overrides: &Options) -> Options {
        let mut merged = self.clone();
        for option in overrides {
            merged.set(option.clone());
        }
        merged
    }

    /// Remove the embedded header list, if any
    pub fn take_headers(&mut self) -> HeaderList {
        match self.remove(OptionKey::Headers) {
            Some(TransferOption::Headers(headers)) => headers,
            _ => HeaderList::new(),
        }
    }
}

impl FromIterator<TransferOption> for Options {
    fn from_iter<I: IntoIterator<Item = TransferOption>>(iter: I) -> Self {
        let mut options = Options::new();
        for option in iter {
            options.set(option);
        }
        options
    }
}

impl<const N: usize> From<[TransferOption; N]> for Options {
    fn from(options: [TransferOption; N]) -> Self {
        options.into_iter().collect()
    }
}

impl IntoIterator for Options {
    type Item = TransferOption;
    type IntoIter = std::vec::IntoIter<TransferOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = &'a TransferOption;
    type IntoIter = std::slice::Iter<'a, TransferOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut options = Options::new();
        options.set(TransferOption::Referer("https://a.example".into()));
        options.set(TransferOption::VerifyPeer(false));
        options.set(TransferOption::Referer("https://b.example".into()));

        assert_eq!(options.len(), 2);
        assert_eq!(
            options.keys().collect::<Vec<_>>(),
            [OptionKey::Referer, OptionKey::VerifyPeer]
        );
        assert_eq!(
            options.get(OptionKey::Referer),
            Some(&TransferOption::Referer("https://b.example".into()))
        );
    }

    #[test]
    fn test_merged_call_options_win() {
        let defaults = Options::from([
            TransferOption::Timeout(Duration::from_secs(5)),
            TransferOption::Referer("https://default.example".into()),
        ]);
        let call = Options::from([
            TransferOption::Timeout(Duration::from_secs(1)),
            TransferOption::Cookie("a=1".into()),
        ]);

        let merged = defaults.merged(&call);

        assert_eq!(merged.len(), 3);
        assert_eq!(
            merged.get(OptionKey::Timeout),
            Some(&TransferOption::Timeout(Duration::from_secs(1)))
        );
        assert!(merged.contains(OptionKey::Referer));
        assert!(merged.contains(OptionKey::Cookie));
        // inputs untouched
        assert_eq!(
            defaults.get(OptionKey::Timeout),
            Some(&TransferOption::Timeout(Duration::from_secs(5)))
        );
    }

    #[test]
    fn test_take_headers() {
        let mut options = Options::new()
            .with(TransferOption::Headers(HeaderList::new().header("X-Trace", "t")))
            .with(TransferOption::FollowLocation(false));

        let headers = options.take_headers();
        assert_eq!(headers.as_slice(), ["X-Trace: t"]);
        assert!(!options.contains(OptionKey::Headers));
        assert_eq!(options.len(), 1);

        assert!(options.take_headers().is_empty());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(TransferOption::MaxRedirects(2).key().as_ref(), "MaxRedirects");
        assert_eq!(
            TransferOption::BasicAuth {
                username: "u".into(),
                password: None
            }
            .key(),
            OptionKey::BasicAuth
        );
    }
}
