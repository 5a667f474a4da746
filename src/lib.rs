//! A strict, allocation-free JSON tokenizer for resource-constrained
//! embedded and real-time contexts.
//!
//! The entry point is [`TokenPool`]: give it a source buffer and either
//! caller-owned token storage or (with the default `alloc` feature) a
//! growable one, then call [`TokenPool::parse`]. A successful parse hands
//! back a [`Token`] over the root object; navigate from there with
//! [`Token::child`], [`Token::next_sibling`], [`Token::get`] and friends.
//! A failed parse hands back a [`ParseError`] carrying a [`Status`] and the
//! byte offset where the problem was detected.
//!
//! The root of every parse is an Object: bare top-level arrays or scalar
//! values are rejected with [`Status::NonObject`]. Bytes after the
//! outermost `}` are never inspected.
//!
//! ```
//! use jtok::{RawToken, TokenPool};
//!
//! let mut tokens = [RawToken::default(); 8];
//! let mut pool = TokenPool::new(br#"{"name":"ada","age":36}"#, &mut tokens);
//! let root = pool.parse().expect("valid json");
//! assert_eq!(root.get("name").unwrap().str_contents(), Some("ada"));
//! ```

mod equality;
mod error;
mod kind;
mod node;
mod parser;
mod pool;
mod status;
mod token;

pub use error::ParseError;
pub use kind::Kind;
pub use node::{Children, Token};
pub use parser::DEFAULT_MAX_DEPTH;
pub use pool::TokenPool;
pub use status::Status;
pub use token::RawToken;
