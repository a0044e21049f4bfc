//! Search-string interpretation.
//!
//! A raw search string mixes free-text terms with structured tokens:
//! `chain:ethereum` (or `blockchain:ethereum`), `type:image`, `#1234`, and
//! bare all-digit tokens that read as token ids. [`parse`] separates the
//! two, case-folding everything except token ids.

/// Parsed form of a search string. Recomputed on every parse; never stored
/// across query changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredQuery {
    /// Lowercased free-text terms, ANDed together.
    pub terms: Vec<String>,
    /// Lowercase chain name from a `chain:`/`blockchain:` token.
    pub blockchain: Option<String>,
    /// Lowercase type class from a `type:` token (`image`, `video`, ...).
    pub file_type: Option<String>,
    /// Literal token id from a `#`-prefixed or bare all-digit token.
    pub token_id: Option<String>,
}

impl StructuredQuery {
    /// True when the query imposes no constraint at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
            && self.blockchain.is_none()
            && self.file_type.is_none()
            && self.token_id.is_none()
    }
}

/// Split on whitespace, keeping a double-quoted substring together as one
/// token with the quotes stripped. An unterminated quote runs to the end
/// of the input.
fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = raw.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if c == '"' {
            chars.next();
            let mut token = String::new();
            for ch in chars.by_ref() {
                if ch == '"' {
                    break;
                }
                token.push(ch);
            }
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                token.push(ch);
                chars.next();
            }
            tokens.push(token);
        }
    }

    tokens
}

/// Parse a raw search string into a [`StructuredQuery`].
///
/// Tokens are classified left to right, first matching rule wins per
/// token. `chain:`/`blockchain:` and `type:` overwrite on repetition
/// (last occurrence wins); the token id keeps its first value, whether it
/// came from a `#` token or a bare digit token. Empty input yields an
/// unconstrained query.
pub fn parse(raw: &str) -> StructuredQuery {
    let mut query = StructuredQuery::default();

    for token in tokenize(raw) {
        if let Some(rest) = token.strip_prefix("blockchain:") {
            query.blockchain = Some(rest.to_lowercase());
        } else if let Some(rest) = token.strip_prefix("chain:") {
            query.blockchain = Some(rest.to_lowercase());
        } else if let Some(rest) = token.strip_prefix("type:") {
            query.file_type = Some(rest.to_lowercase());
        } else if let Some(rest) = token.strip_prefix('#') {
            if query.token_id.is_none() {
                query.token_id = Some(rest.to_string());
            }
        } else if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            if query.token_id.is_none() {
                query.token_id = Some(token);
            }
        } else {
            query.terms.push(token.to_lowercase());
        }
    }

    query
}
