use crate::kind::Kind;

/// Index into a [`crate::TokenPool`]'s backing storage. `NONE` stands in for
/// "no such token" (no parent, no sibling) so [`RawToken`] stays a plain,
/// `Copy`, fixed-size record with no `Option` niggling its layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct TokenIndex(pub(crate) u32);

impl TokenIndex {
    pub(crate) const NONE: TokenIndex = TokenIndex(u32::MAX);

    pub(crate) fn some(index: usize) -> Self {
        debug_assert!(index < u32::MAX as usize, "token index overflow");
        TokenIndex(index as u32)
    }

    pub(crate) fn is_none(self) -> bool {
        self == TokenIndex::NONE
    }

    pub(crate) fn get(self) -> Option<usize> {
        if self.is_none() {
            None
        } else {
            Some(self.0 as usize)
        }
    }
}

/// Plain-old-data storage record for one token. Carries no lifetime and no
/// back-pointer to the source buffer or pool; those are supplied at the
/// query layer by [`crate::Token`].
///
/// Its fields are private: the only way to produce one is
/// [`RawToken::default`], which is all a caller needs to build the backing
/// array a [`crate::TokenPool`] is constructed over.
#[derive(Debug, Clone, Copy)]
pub struct RawToken {
    pub(crate) kind: Kind,
    pub(crate) start: u32,
    pub(crate) end: u32,
    pub(crate) size: u32,
    pub(crate) parent: TokenIndex,
    pub(crate) sibling: TokenIndex,
}

impl RawToken {
    pub(crate) const UNASSIGNED: RawToken = RawToken {
        kind: Kind::Unassigned,
        start: 0,
        end: 0,
        size: 0,
        parent: TokenIndex::NONE,
        sibling: TokenIndex::NONE,
    };
}

impl Default for RawToken {
    fn default() -> Self {
        RawToken::UNASSIGNED
    }
}
