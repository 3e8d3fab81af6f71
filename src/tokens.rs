//! Word level input: whitespace separated tokens mapped to 64-bit codes.
//!
//! The engines compare symbols by equality only, so words are replaced by
//! their hash. Each side keeps its own reverse map to turn codes in edit
//! statistics back into the original words.
//!
//! Hashing is not injective: two different words with the same code compare
//! equal. Such collisions are detected per side, counted in
//! [`TokenCodes::collisions`], and logged. For `FxHasher` on 64 bits they are
//! extremely unlikely for any realistic vocabulary.
use std::hash::{Hash, Hasher};

use log::{debug, warn};
use rustc_hash::{FxHashMap as HashMap, FxHasher};

pub type TokenCode = u64;

/// A tokenized text: its codes in order, and the reverse lookup.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TokenCodes {
    pub codes: Vec<TokenCode>,
    /// Reverse map from code to the first token that produced it.
    pub lookup: HashMap<TokenCode, String>,
    /// Number of distinct tokens that hashed to an already taken code.
    pub collisions: usize,
}

/// Hash a single token. Stable across runs.
pub fn hash_token(token: &str) -> TokenCode {
    let mut hasher = FxHasher::default();
    token.hash(&mut hasher);
    hasher.finish()
}

/// Split `text` on runs of Unicode whitespace and hash every token.
pub fn tokenize_and_hash(text: &str) -> TokenCodes {
    let mut tokens = TokenCodes::default();
    for token in text.split_whitespace() {
        tokens.push(token);
    }
    debug!(
        "tokenized {} words into {} distinct codes",
        tokens.codes.len(),
        tokens.lookup.len()
    );
    tokens
}

impl TokenCodes {
    fn push(&mut self, token: &str) {
        let code = hash_token(token);
        match self.lookup.get(&code) {
            Some(known) if known != token => {
                warn!("hash collision: {token:?} and {known:?} share code {code:#018x}");
                self.collisions += 1;
            }
            Some(_) => {}
            None => {
                self.lookup.insert(code, token.to_string());
            }
        }
        self.codes.push(code);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// The token registered for `code`, if any.
    pub fn token(&self, code: TokenCode) -> Option<&str> {
        self.lookup.get(&code).map(String::as_str)
    }

    /// The token at position `i`, as resolved through the reverse map.
    pub fn render(&self, i: usize) -> &str {
        self.token(self.codes[i]).unwrap_or_default()
    }
}
