use crate::error::ParseError;
use crate::node::{Token, View};
use crate::parser::{Parser, DEFAULT_MAX_DEPTH};
use crate::token::{RawToken, TokenIndex};

/// Backing storage for a [`TokenPool`]. `Borrowed` is the allocation-free
/// path: the caller supplies a fixed-size array up front and the pool never
/// writes outside it. `Owned` is a convenience path for callers who would
/// rather let the pool grow a `Vec` on demand; it is only available with
/// the `alloc` feature (on by default).
enum Storage<'s> {
    Borrowed(&'s mut [RawToken]),
    #[cfg(feature = "alloc")]
    Owned(Vec<RawToken>),
}

impl Storage<'_> {
    fn capacity(&self) -> usize {
        match self {
            Storage::Borrowed(buf) => buf.len(),
            #[cfg(feature = "alloc")]
            Storage::Owned(vec) => vec.capacity(),
        }
    }

    fn as_slice(&self) -> &[RawToken] {
        match self {
            Storage::Borrowed(buf) => buf,
            #[cfg(feature = "alloc")]
            Storage::Owned(vec) => vec,
        }
    }
}

/// Fixed-capacity, bump-allocated arena of tokens over a single source
/// buffer. A pool is parsed once via [`TokenPool::parse`] (or
/// [`TokenPool::parse_with_max_depth`]); call [`TokenPool::reset`] to reuse
/// it for a different parse.
pub struct TokenPool<'s> {
    source: &'s [u8],
    storage: Storage<'s>,
    toknext: usize,
}

impl<'s> TokenPool<'s> {
    /// Build a pool over caller-owned storage. No allocation occurs; the
    /// pool can hold at most `storage.len()` tokens.
    pub fn new(source: &'s [u8], storage: &'s mut [RawToken]) -> Self {
        TokenPool {
            source,
            storage: Storage::Borrowed(storage),
            toknext: 0,
        }
    }

    /// Build a pool backed by a growable `Vec`, reserving room for
    /// `capacity` tokens up front. Requires the `alloc` feature.
    #[cfg(feature = "alloc")]
    pub fn with_capacity(source: &'s [u8], capacity: usize) -> Self {
        TokenPool {
            source,
            storage: Storage::Owned(Vec::with_capacity(capacity)),
            toknext: 0,
        }
    }

    /// Number of tokens currently filled.
    pub fn len(&self) -> usize {
        self.toknext
    }

    /// True if no tokens have been filled yet.
    pub fn is_empty(&self) -> bool {
        self.toknext == 0
    }

    /// Total number of tokens this pool can hold without growing.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Discard all filled tokens so the pool (and its backing storage) can
    /// be reused for another parse.
    pub fn reset(&mut self) {
        self.toknext = 0;
    }

    /// Parse the pool's source buffer using the default recursion limit.
    pub fn parse(&mut self) -> Result<Token<'_>, ParseError> {
        self.parse_with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Parse the pool's source buffer, rejecting input nested deeper than
    /// `max_depth`.
    pub fn parse_with_max_depth(&mut self, max_depth: u32) -> Result<Token<'_>, ParseError> {
        self.reset();
        let source = self.source;
        let root = Parser::new(source, self, max_depth).parse_root()?;
        Ok(self.token_at(root))
    }

    pub(crate) fn source(&self) -> &'s [u8] {
        self.source
    }

    pub(crate) fn alloc(&mut self) -> Option<TokenIndex> {
        let index = self.toknext;
        if index >= self.storage.capacity() {
            return None;
        }
        match &mut self.storage {
            Storage::Borrowed(buf) => buf[index] = RawToken::UNASSIGNED,
            #[cfg(feature = "alloc")]
            Storage::Owned(vec) => {
                if index < vec.len() {
                    vec[index] = RawToken::UNASSIGNED;
                } else {
                    vec.push(RawToken::UNASSIGNED);
                }
            }
        }
        self.toknext += 1;
        Some(TokenIndex::some(index))
    }

    pub(crate) fn get(&self, index: TokenIndex) -> &RawToken {
        &self.storage.as_slice()[index.0 as usize]
    }

    pub(crate) fn get_mut(&mut self, index: TokenIndex) -> &mut RawToken {
        let i = index.0 as usize;
        match &mut self.storage {
            Storage::Borrowed(buf) => &mut buf[i],
            #[cfg(feature = "alloc")]
            Storage::Owned(vec) => &mut vec[i],
        }
    }

    /// `index` is always a real token on this path: a successful
    /// `parse_root` never returns `TokenIndex::NONE`.
    fn token_at(&self, index: TokenIndex) -> Token<'_> {
        Token::new(
            View {
                source: self.source,
                tokens: self.storage.as_slice(),
            },
            index.0 as usize,
        )
    }
}
