use alloc::{collections::BTreeMap, string::String, vec::Vec};

use crate::{
    errors::{Bip39Error, Result},
    normalize::normalize,
};

pub const MAX_WORDS_DICT: usize = 2048;

/// The BIP39 English wordlist, one word per line.
pub const ENGLISH: &str = include_str!("wordlists/english.txt");

/// An ordered table of 2048 unique words. The position of a word is its
/// 11-bit code.
///
/// Lookups are exact matches against the NFKD form of each entry, while
/// encoding emits entries exactly as they were loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wordlist {
    words: Vec<String>,
    index: BTreeMap<String, u16>,
}

impl Wordlist {
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.len() != MAX_WORDS_DICT {
            return Err(Bip39Error::BadWordlistLength(words.len()));
        }

        let mut index = BTreeMap::new();
        for (i, word) in words.iter().enumerate() {
            let key = normalize(Some(word.as_str())).into_owned();
            if key.is_empty() || key.chars().any(char::is_whitespace) {
                return Err(Bip39Error::BadWordlistEntry(i));
            }
            if index.insert(key, i as u16).is_some() {
                return Err(Bip39Error::DuplicateWord(i));
            }
        }

        log::trace!("loaded wordlist starting with {:?}", words[0]);

        Ok(Self { words, index })
    }

    /// Parses a newline-separated table. `\r\n` line endings and a trailing
    /// newline are accepted.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(text.lines())
    }

    /// The embedded English table, built on first use.
    #[cfg(feature = "std")]
    pub fn english() -> &'static Wordlist {
        static ENGLISH_WORDLIST: std::sync::OnceLock<Wordlist> = std::sync::OnceLock::new();
        ENGLISH_WORDLIST
            .get_or_init(|| Wordlist::parse(ENGLISH).expect("embedded English wordlist is valid"))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: u16) -> Option<&str> {
        self.words.get(index as usize).map(String::as_str)
    }

    /// Position of an NFKD-normalized word.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.index.get(word).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub(crate) fn word(&self, index: u16) -> &str {
        &self.words[index as usize]
    }
}

#[cfg(test)]
mod tests_wordlist {
    use super::*;
    use alloc::format;

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{}", i)).collect()
    }

    #[test]
    fn test_english_table() {
        let list = Wordlist::english();
        assert_eq!(list.len(), MAX_WORDS_DICT);
        assert_eq!(list.get(0), Some("abandon"));
        assert_eq!(list.get(3), Some("about"));
        assert_eq!(list.get(2047), Some("zoo"));
        assert_eq!(list.get(2048), None);
        assert_eq!(list.index_of("wrong"), Some(2037));
        assert_eq!(list.index_of("risky"), None);
        assert_eq!(list.index_of("Zoo"), None);
    }

    #[test]
    fn test_english_is_shared() {
        assert!(core::ptr::eq(Wordlist::english(), Wordlist::english()));
    }

    #[test]
    fn test_index_matches_position() {
        let list = Wordlist::english();
        for (i, word) in list.iter().enumerate() {
            assert_eq!(list.index_of(word), Some(i as u16));
        }
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(
            Wordlist::from_words(numbered(2047)),
            Err(Bip39Error::BadWordlistLength(2047))
        );
        assert_eq!(
            Wordlist::from_words(numbered(2049)),
            Err(Bip39Error::BadWordlistLength(2049))
        );
        assert_eq!(
            Wordlist::parse(""),
            Err(Bip39Error::BadWordlistLength(0))
        );
    }

    #[test]
    fn test_duplicate_word() {
        let mut words = numbered(MAX_WORDS_DICT);
        words[100] = String::from("w7");
        assert_eq!(
            Wordlist::from_words(words),
            Err(Bip39Error::DuplicateWord(100))
        );
    }

    #[test]
    fn test_duplicate_after_normalization() {
        let mut words = numbered(MAX_WORDS_DICT);
        words[1] = String::from("caf\u{e9}");
        words[2] = String::from("cafe\u{301}");
        assert_eq!(Wordlist::from_words(words), Err(Bip39Error::DuplicateWord(2)));
    }

    #[test]
    fn test_bad_entries() {
        let mut words = numbered(MAX_WORDS_DICT);
        words[5] = String::new();
        assert_eq!(
            Wordlist::from_words(words),
            Err(Bip39Error::BadWordlistEntry(5))
        );

        let mut words = numbered(MAX_WORDS_DICT);
        words[9] = String::from("two words");
        assert_eq!(
            Wordlist::from_words(words),
            Err(Bip39Error::BadWordlistEntry(9))
        );
    }

    #[test]
    fn test_parse_crlf() {
        let text = numbered(MAX_WORDS_DICT).join("\r\n") + "\r\n";
        let list = Wordlist::parse(&text).unwrap();
        assert_eq!(list.get(2047), Some("w2047"));
        assert_eq!(list.index_of("w0"), Some(0));
    }

    #[test]
    fn test_lookup_uses_normalized_form() {
        let mut words = numbered(MAX_WORDS_DICT);
        words[42] = String::from("caf\u{e9}");
        let list = Wordlist::from_words(words).unwrap();
        assert_eq!(list.index_of("cafe\u{301}"), Some(42));
        assert_eq!(list.get(42), Some("caf\u{e9}"));
        assert_eq!(list.word(42), "caf\u{e9}");
    }
}
