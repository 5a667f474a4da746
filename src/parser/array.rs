use super::Parser;
use crate::error::ParseError;
use crate::kind::Kind;
use crate::status::Status;
use crate::token::TokenIndex;

/// States of the array sub-parser (C5). `Start` is the state on entry and
/// immediately after `[`; `AfterComma` follows a `,` and requires a value;
/// `AfterValue` follows a successfully parsed element and requires `,` or
/// `]`.
#[derive(Clone, Copy, PartialEq, Eq)]
enum ArrState {
    Start,
    AfterComma,
    AfterValue,
}

impl<'p, 's> Parser<'p, 's> {
    pub(crate) fn parse_array(
        &mut self,
        parent: TokenIndex,
        depth: u32,
    ) -> Result<TokenIndex, ParseError> {
        self.check_depth(depth)?;
        if self.peek() != Some(b'[') {
            return Err(self.err(Status::NonArray));
        }
        let start = self.pos;
        #[cfg(feature = "trace")]
        let _span = self.trace_enter(Kind::Array, start);
        let arr = self.alloc_token(Kind::Array, start, start, parent)?;
        self.advance();

        let mut state = ArrState::Start;
        let mut last_child: Option<TokenIndex> = None;
        let mut element_kind: Option<Kind> = None;

        loop {
            self.skip_ws();
            match self.peek() {
                Some(b']') => match state {
                    ArrState::Start | ArrState::AfterValue => {
                        self.advance();
                        self.set_end(arr, self.pos);
                        return Ok(arr);
                    }
                    ArrState::AfterComma => return Err(self.err(Status::Invalid)),
                },
                Some(b',') => match state {
                    ArrState::AfterValue => state = ArrState::AfterComma,
                    ArrState::Start | ArrState::AfterComma => {
                        return Err(self.err(Status::StrayComma))
                    }
                },
                Some(b) if is_value_start(b) => match state {
                    ArrState::Start | ArrState::AfterComma => {
                        let element = self.parse_value(arr, depth)?;
                        let kind = self.kind_of(element);
                        match element_kind {
                            Some(k) if k != kind => return Err(self.err(Status::MixedArray)),
                            Some(_) => {}
                            None => element_kind = Some(kind),
                        }
                        if let Some(prev) = last_child {
                            self.link_sibling(prev, element);
                        }
                        last_child = Some(element);
                        self.bump_size(arr);
                        state = ArrState::AfterValue;
                    }
                    ArrState::AfterValue => return Err(self.err(Status::ArraySeparator)),
                },
                None => return Err(self.err(Status::PartialToken)),
                _ => return Err(self.err(Status::Invalid)),
            }
        }
    }
}

pub(crate) fn is_value_start(b: u8) -> bool {
    matches!(b, b'{' | b'[' | b'"' | b'\'' | b'-' | b'+' | b'0'..=b'9' | b't' | b'f' | b'n')
}
