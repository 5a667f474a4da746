use crate::kind::Kind;
use crate::token::RawToken;

/// A borrowed snapshot of a pool's source buffer and filled tokens, shared
/// by every [`Token`] handle produced from one parse.
#[derive(Clone, Copy)]
pub(crate) struct View<'a> {
    pub(crate) source: &'a [u8],
    pub(crate) tokens: &'a [RawToken],
}

/// A read-only handle onto one token in a parsed tree.
///
/// `Token` borrows its pool rather than owning data: it is a thin
/// `(view, index)` pair, cheap to copy, with no parsing logic of its own.
/// Navigation (C10) and structural comparison (C9) are implemented as
/// methods on this type.
#[derive(Clone, Copy)]
pub struct Token<'a> {
    view: View<'a>,
    index: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(view: View<'a>, index: usize) -> Self {
        Token { view, index }
    }

    fn raw_token(&self) -> &RawToken {
        &self.view.tokens[self.index]
    }

    /// Index of this token within the pool it came from. Exposed for
    /// diagnostics and for round-tripping through external indexes; not
    /// meaningful across different pools.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The token's kind.
    pub fn kind(&self) -> Kind {
        self.raw_token().kind
    }

    /// Byte offset of the first byte of this token in the source buffer.
    pub fn start(&self) -> usize {
        self.raw_token().start as usize
    }

    /// Byte offset one past the last byte of this token in the source
    /// buffer.
    pub fn end(&self) -> usize {
        self.raw_token().end as usize
    }

    /// Number of immediate children: key/value pairs for an object,
    /// elements for an array, always `0` for a string or primitive.
    pub fn size(&self) -> usize {
        self.raw_token().size as usize
    }

    /// The raw source bytes this token spans. For a string, the span is
    /// already quote-free (set that way by the string sub-parser), so this
    /// is the string's content, not its surrounding quotes.
    pub fn raw(&self) -> &'a [u8] {
        &self.view.source[self.start()..self.end()]
    }

    /// [`Token::raw`] interpreted as UTF-8, if valid. A tiny convenience
    /// wrapper; it performs no parsing of its own.
    pub fn as_str(&self) -> Option<&'a str> {
        core::str::from_utf8(self.raw()).ok()
    }

    /// The source text of a string token. Returns `None` for non-string
    /// tokens.
    pub fn str_contents(&self) -> Option<&'a str> {
        if self.kind() != Kind::String {
            return None;
        }
        self.as_str()
    }

    /// This token's parent, or `None` at the root.
    pub fn parent(&self) -> Option<Token<'a>> {
        self.raw_token()
            .parent
            .get()
            .map(|i| Token::new(self.view, i))
    }

    /// This token's first child, if it has one.
    ///
    /// Because tokens are bump-allocated strictly in the order their
    /// opening byte is encountered, and a container's children are fully
    /// parsed (recursively) before the container returns, a non-empty
    /// container's first child always sits at `index + 1`. No separate
    /// first-child pointer is stored.
    pub fn child(&self) -> Option<Token<'a>> {
        if self.size() == 0 {
            None
        } else {
            Some(Token::new(self.view, self.index + 1))
        }
    }

    /// The next token at the same level (the next key for an object entry,
    /// the next element for an array entry), if any.
    pub fn next_sibling(&self) -> Option<Token<'a>> {
        self.raw_token()
            .sibling
            .get()
            .map(|i| Token::new(self.view, i))
    }

    /// Iterate this token's immediate children, in source order.
    pub fn children(&self) -> Children<'a> {
        Children {
            next: self.child(),
        }
    }

    /// True if this is an object token with a key whose contents equal
    /// `key` exactly (no escape decoding).
    ///
    /// An object's children are its key tokens; each key's sibling link
    /// chains directly to the next key, skipping over the key's own value
    /// (and that value's whole subtree, however deep). A key's value is
    /// reached via [`Token::child`], the same way any other container
    /// reaches its first child.
    pub fn has_key(&self, key: &str) -> bool {
        self.find_key(key).is_some()
    }

    /// Look up the value token for `key` on an object token.
    pub fn get(&self, key: &str) -> Option<Token<'a>> {
        self.find_key(key)?.child()
    }

    fn find_key(&self, key: &str) -> Option<Token<'a>> {
        if self.kind() != Kind::Object {
            return None;
        }
        let mut entry = self.child();
        while let Some(k) = entry {
            if k.str_contents() == Some(key) {
                return Some(k);
            }
            entry = k.next_sibling();
        }
        None
    }
}

impl core::fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Token")
            .field("kind", &self.kind())
            .field("start", &self.start())
            .field("end", &self.end())
            .field("size", &self.size())
            .finish()
    }
}

/// Iterator over a token's immediate children, yielded by [`Token::children`].
pub struct Children<'a> {
    next: Option<Token<'a>>,
}

impl<'a> Iterator for Children<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next_sibling();
        Some(current)
    }
}
