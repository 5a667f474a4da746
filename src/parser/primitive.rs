use super::Parser;
use crate::error::ParseError;
use crate::kind::Kind;
use crate::status::Status;
use crate::token::TokenIndex;

/// States of the number grammar's validation state machine (C4). Mirrors
/// the shape `[sign] digits ['.' digits] [('e'|'E') [sign] digits]`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum NumState {
    Start,
    Sign,
    IntDigits,
    Dot,
    FracDigits,
    ExpE,
    ExpSign,
    ExpDigits,
}

impl NumState {
    fn is_accepting(self) -> bool {
        matches!(self, NumState::IntDigits | NumState::FracDigits | NumState::ExpDigits)
    }
}

pub(crate) fn is_primitive_start(b: u8) -> bool {
    matches!(b, b'-' | b'+' | b'0'..=b'9' | b't' | b'f' | b'n')
}

impl<'p, 's> Parser<'p, 's> {
    /// Scan `true`/`false`/`null` or a number starting at the current
    /// position and allocate a Primitive token spanning it. The cursor is
    /// left on the terminating structural byte, not past it.
    pub(crate) fn parse_primitive(&mut self, parent: TokenIndex) -> Result<TokenIndex, ParseError> {
        let start = self.pos;
        #[cfg(feature = "trace")]
        let _span = self.trace_enter(Kind::Primitive, start);
        match self.peek() {
            Some(b't') => self.scan_literal(b"true")?,
            Some(b'f') => self.scan_literal(b"false")?,
            Some(b'n') => self.scan_literal(b"null")?,
            Some(b'-' | b'+' | b'0'..=b'9') => self.scan_number()?,
            _ => return Err(self.err(Status::InvalidPrimitive)),
        }
        let end = self.pos;
        self.alloc_token(Kind::Primitive, start, end, parent)
    }

    fn scan_literal(&mut self, literal: &'static [u8]) -> Result<(), ParseError> {
        let start = self.pos;
        for &expected in literal {
            match self.peek() {
                Some(b) if b == expected => self.advance(),
                Some(_) => {
                    self.pos = start;
                    return Err(self.err(Status::InvalidPrimitive));
                }
                None => {
                    self.pos = start;
                    return Err(self.err(Status::PartialToken));
                }
            }
        }
        if !Self::is_terminator(self.peek()) {
            self.pos = start;
            return Err(self.err(Status::InvalidPrimitive));
        }
        Ok(())
    }

    fn scan_number(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let mut state = NumState::Start;
        loop {
            let b = self.peek();
            if Self::is_terminator(b) {
                return if state.is_accepting() {
                    Ok(())
                } else if b.is_none() {
                    self.pos = start;
                    Err(self.err(Status::PartialToken))
                } else {
                    self.pos = start;
                    Err(self.err(Status::InvalidPrimitive))
                };
            }
            let next = match (state, b) {
                (NumState::Start, Some(b'+' | b'-')) => NumState::Sign,
                (NumState::Start, Some(b'0'..=b'9')) => NumState::IntDigits,
                (NumState::Sign, Some(b'0'..=b'9')) => NumState::IntDigits,
                (NumState::IntDigits, Some(b'0'..=b'9')) => NumState::IntDigits,
                (NumState::IntDigits, Some(b'.')) => NumState::Dot,
                (NumState::IntDigits, Some(b'e' | b'E')) => NumState::ExpE,
                (NumState::Dot, Some(b'0'..=b'9')) => NumState::FracDigits,
                (NumState::FracDigits, Some(b'0'..=b'9')) => NumState::FracDigits,
                (NumState::FracDigits, Some(b'e' | b'E')) => NumState::ExpE,
                (NumState::ExpE, Some(b'+' | b'-')) => NumState::ExpSign,
                (NumState::ExpE, Some(b'0'..=b'9')) => NumState::ExpDigits,
                (NumState::ExpSign, Some(b'0'..=b'9')) => NumState::ExpDigits,
                (NumState::ExpDigits, Some(b'0'..=b'9')) => NumState::ExpDigits,
                _ => {
                    self.pos = start;
                    return Err(self.err(Status::InvalidPrimitive));
                }
            };
            state = next;
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::RawToken;
    use crate::{Kind, Status, TokenPool};

    fn parse_err(src: &str) -> Status {
        let mut buf = [RawToken::default(); 4];
        let body = format!("{{\"k\":{src}}}");
        let mut pool = TokenPool::new(body.as_bytes(), &mut buf);
        pool.parse().unwrap_err().status
    }

    fn value_text(src: &str) -> String {
        let mut buf = [RawToken::default(); 4];
        let body = format!("{{\"k\":{src}}}");
        let mut pool = TokenPool::new(body.as_bytes(), &mut buf);
        let root = pool.parse().unwrap();
        root.get("k").unwrap().as_str().unwrap().to_string()
    }

    #[test]
    fn accepts_plain_integer() {
        assert_eq!(value_text("42"), "42");
    }

    #[test]
    fn accepts_signed_fraction_with_exponent() {
        assert_eq!(value_text("-12.5e+10"), "-12.5e+10");
    }

    #[test]
    fn accepts_literals() {
        assert_eq!(value_text("true"), "true");
        assert_eq!(value_text("false"), "false");
        assert_eq!(value_text("null"), "null");
    }

    #[test]
    fn rejects_number_followed_by_letters() {
        assert_eq!(parse_err("12true"), Status::InvalidPrimitive);
        assert_eq!(parse_err("123null"), Status::InvalidPrimitive);
    }

    #[test]
    fn rejects_garbled_literal() {
        assert_eq!(parse_err("trueABC"), Status::InvalidPrimitive);
    }

    #[test]
    fn rejects_leading_dot() {
        assert_eq!(parse_err(".5"), Status::InvalidPrimitive);
    }

    #[test]
    fn rejects_trailing_dot() {
        assert_eq!(parse_err("5."), Status::InvalidPrimitive);
    }

    #[test]
    fn rejects_double_dot() {
        assert_eq!(parse_err("1.2.3"), Status::InvalidPrimitive);
    }

    #[test]
    fn rejects_bare_exponent() {
        assert_eq!(parse_err("e9"), Status::InvalidPrimitive);
    }

    #[test]
    fn produces_primitive_kind() {
        let mut buf = [RawToken::default(); 4];
        let mut pool = TokenPool::new(br#"{"k":7}"#, &mut buf);
        let root = pool.parse().unwrap();
        assert_eq!(root.get("k").unwrap().kind(), Kind::Primitive);
    }
}
