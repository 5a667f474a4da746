use super::Parser;
use crate::error::ParseError;
use crate::kind::Kind;
use crate::status::Status;
use crate::token::TokenIndex;

impl<'p, 's> Parser<'p, 's> {
    /// Scan a quoted lexeme starting at the current position (which must be
    /// on an opening `"` or `'`) and allocate a String token spanning its
    /// content, quotes excluded. `is_key` enables the `EmptyKey` check.
    pub(crate) fn parse_string(
        &mut self,
        parent: TokenIndex,
        is_key: bool,
    ) -> Result<TokenIndex, ParseError> {
        let quote = match self.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => return Err(self.err(Status::Invalid)),
        };
        let other_quote = if quote == b'"' { b'\'' } else { b'"' };
        #[cfg(feature = "trace")]
        let _span = self.trace_enter(Kind::String, self.pos);
        self.advance();
        let content_start = self.pos;

        loop {
            match self.peek() {
                None => return Err(self.err(Status::PartialToken)),
                Some(b'\\') => {
                    self.advance();
                    self.scan_escape()?;
                }
                Some(b) if b == quote => break,
                Some(b) if b == other_quote => return Err(self.err(Status::BadString)),
                Some(_) => self.advance(),
            }
        }

        let content_end = self.pos;
        self.advance(); // consume closing quote

        if is_key && content_end == content_start {
            return Err(self.err_at(Status::EmptyKey, content_start));
        }

        self.alloc_token(Kind::String, content_start, content_end, parent)
    }

    fn scan_escape(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            None => Err(self.err(Status::PartialToken)),
            Some(b'"' | b'\'' | b'/' | b'\\' | b'b' | b'f' | b'r' | b'n' | b't') => {
                self.advance();
                Ok(())
            }
            Some(b'u') => {
                self.advance();
                for _ in 0..4 {
                    match self.peek() {
                        None => return Err(self.err(Status::PartialToken)),
                        Some(b) if b.is_ascii_hexdigit() => self.advance(),
                        Some(_) => return Err(self.err(Status::Invalid)),
                    }
                }
                Ok(())
            }
            Some(_) => Err(self.err(Status::Invalid)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::RawToken;
    use crate::{Status, TokenPool};

    fn parse_key_value(src: &str) -> Result<String, Status> {
        let body = format!("{{{src}:0}}");
        let mut buf = [RawToken::default(); 4];
        let mut pool = TokenPool::new(body.as_bytes(), &mut buf);
        pool.parse()
            .map(|root| {
                root.child()
                    .and_then(|k| k.str_contents())
                    .unwrap_or_default()
                    .to_string()
            })
            .map_err(|e| e.status)
    }

    #[test]
    fn plain_key() {
        assert_eq!(parse_key_value(r#""hello""#), Ok("hello".to_string()));
    }

    #[test]
    fn single_quoted_key() {
        assert_eq!(parse_key_value("'hello'"), Ok("hello".to_string()));
    }

    #[test]
    fn unescaped_opposite_quote_is_bad_string() {
        assert_eq!(parse_key_value(r#""it's""#), Err(Status::BadString));
        assert_eq!(parse_key_value(r#"'say "hi"'"#), Err(Status::BadString));
    }

    #[test]
    fn escaped_opposite_quote_is_allowed() {
        assert_eq!(parse_key_value(r#""it\'s""#), Ok(r"it\'s".to_string()));
        assert_eq!(
            parse_key_value(r#""say \"hi\"""#),
            Ok(r#"say \"hi\""#.to_string())
        );
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(parse_key_value(r#""""#), Err(Status::EmptyKey));
    }

    #[test]
    fn unterminated_string_is_partial() {
        let mut buf = [RawToken::default(); 4];
        let mut pool = TokenPool::new(br#"{"a":"b"#, &mut buf);
        assert_eq!(pool.parse().unwrap_err().status, Status::PartialToken);
    }

    #[test]
    fn bad_escape_is_invalid() {
        let mut buf = [RawToken::default(); 4];
        let mut pool = TokenPool::new(br#"{"a":"b\qc"}"#, &mut buf);
        assert_eq!(pool.parse().unwrap_err().status, Status::Invalid);
    }

    #[test]
    fn unicode_escape_requires_four_hex_digits() {
        let mut buf = [RawToken::default(); 4];
        let mut pool = TokenPool::new(br#"{"a":"\u00"}"#, &mut buf);
        let status = pool.parse().unwrap_err().status;
        assert!(status == Status::PartialToken || status == Status::Invalid);
    }
}
