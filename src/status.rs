/// Closed vocabulary of outcomes a parse step can produce.
///
/// `Status` is the internal control-flow currency passed between the
/// sub-parsers; it carries no position information. [`crate::ParseError`]
/// is the public-facing type and pairs a `Status` with the byte offset
/// where it was raised. The full vocabulary below mirrors the original C
/// library's enum exactly, including a handful of members
/// (`Ok`, `NullParam`, `InvalidStart`, `InvalidEnd`, `UnknownError`) that
/// this crate keeps constructible and matchable for API completeness but
/// never actually returns: there is no null pointer in a safe Rust surface,
/// success is expressed as `Result::Ok` rather than a `Status` value, and
/// the parser builds `start`/`end` by construction so they cannot drift
/// out of I2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Input was a syntactically valid JSON object. Never constructed by
    /// this crate; a successful parse is `Result::Ok`, not this variant.
    Ok,
    /// Caller supplied a null source or pool. Never constructed by this
    /// crate; retained only for vocabulary parity with the C original.
    NullParam,
    /// Pool capacity reached before the parse completed.
    NoMem,
    /// The first non-whitespace byte is not `{`.
    NonObject,
    /// The array sub-parser was invoked on a byte that is not `[`.
    NonArray,
    /// Found `{`, `[`, or a primitive where an object key was required.
    ObjNoKey,
    /// A key's lexeme was the empty string.
    EmptyKey,
    /// An object closed with a key that had no value.
    KeyNoVal,
    /// A second value appeared for the same key. Retained for vocabulary
    /// parity; this crate's C6 state table always routes back through
    /// `Comma`/`Key` before a value can recur, so a key's value slot can
    /// never be filled twice.
    KeyMultipleVal,
    /// A value appeared without an intervening `:`.
    ValNoColon,
    /// Adjacent key/value pairs appeared without a `,` between them.
    ValNoComma,
    /// A `,` was encountered where a key was required. Retained for
    /// vocabulary parity; this crate's object grammar classifies that byte
    /// as plain `Invalid` (see C6's state table).
    CommaNoKey,
    /// A leading or consecutive `,` inside an array.
    StrayComma,
    /// Two array elements appeared without a `,` between them.
    ArraySeparator,
    /// An array's elements are not all the same [`crate::Kind`].
    MixedArray,
    /// A number or literal failed the C4 grammar.
    InvalidPrimitive,
    /// Any other illegal byte in structural position.
    Invalid,
    /// A token's `start` index was inconsistent with I2. Never constructed
    /// by this crate; tokens are built with a valid `start` by construction.
    InvalidStart,
    /// A token's `end` index was inconsistent with I2. Never constructed by
    /// this crate; tokens are built with a valid `end` by construction.
    InvalidEnd,
    /// A parent relationship was inconsistent with I4/I6.
    InvalidParent,
    /// A non-root aggregate's parent was not a key.
    ObjectInvalidParent,
    /// The buffer ended mid-token or mid-container.
    PartialToken,
    /// The opening and closing quote style of a string did not match.
    BadString,
    /// Recursion depth exceeded the configured cap.
    NestDepthExceeded,
    /// Reserved for unclassified paths. Never constructed by this crate.
    UnknownError,
}
