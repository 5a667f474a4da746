use super::Parser;
use crate::error::ParseError;
use crate::kind::Kind;
use crate::status::Status;
use crate::token::TokenIndex;

/// States of the object sub-parser (C6). `Colon`/`Value` carry the index of
/// the key currently being completed so the value's parent and the key's
/// own `size` bump are always well-defined — there is no state in which a
/// "current key" needs to exist but might not.
#[derive(Clone, Copy)]
enum ObjState {
    Key,
    Colon(TokenIndex),
    Value(TokenIndex),
    Comma,
}

impl<'p, 's> Parser<'p, 's> {
    pub(crate) fn parse_object(
        &mut self,
        parent: TokenIndex,
        depth: u32,
    ) -> Result<TokenIndex, ParseError> {
        self.check_depth(depth)?;
        if self.peek() != Some(b'{') {
            return Err(self.err(Status::NonObject));
        }
        let start = self.pos;
        #[cfg(feature = "trace")]
        let _span = self.trace_enter(Kind::Object, start);
        let obj = self.alloc_token(Kind::Object, start, start, parent)?;
        self.advance();

        let mut state = ObjState::Key;
        let mut last_key: Option<TokenIndex> = None;

        loop {
            self.skip_ws();
            let byte = self.peek();
            state = match state {
                ObjState::Key => match byte {
                    Some(b'"' | b'\'') => {
                        let key = self.parse_string(obj, true)?;
                        if let Some(prev) = last_key {
                            self.link_sibling(prev, key);
                        }
                        last_key = Some(key);
                        self.bump_size(obj);
                        ObjState::Colon(key)
                    }
                    Some(b'}') => {
                        self.advance();
                        self.set_end(obj, self.pos);
                        return Ok(obj);
                    }
                    Some(b'{' | b'[') => return Err(self.err(Status::ObjNoKey)),
                    Some(b) if super::primitive::is_primitive_start(b) => {
                        return Err(self.err(Status::ObjNoKey))
                    }
                    None => return Err(self.err(Status::PartialToken)),
                    _ => return Err(self.err(Status::Invalid)),
                },
                ObjState::Colon(key) => match byte {
                    Some(b':') => {
                        self.advance();
                        ObjState::Value(key)
                    }
                    Some(b'}') => return Err(self.err(Status::KeyNoVal)),
                    Some(b',') => return Err(self.err(Status::Invalid)),
                    Some(b'"' | b'\'' | b'{' | b'[') => return Err(self.err(Status::ValNoColon)),
                    Some(b) if super::primitive::is_primitive_start(b) => {
                        return Err(self.err(Status::ValNoColon))
                    }
                    None => return Err(self.err(Status::PartialToken)),
                    _ => return Err(self.err(Status::Invalid)),
                },
                ObjState::Value(key) => match byte {
                    Some(b'"' | b'\'') => {
                        self.parse_string(key, false)?;
                        self.bump_size(key);
                        ObjState::Comma
                    }
                    Some(b'{' | b'[') => {
                        self.parse_value(key, depth)?;
                        self.bump_size(key);
                        ObjState::Comma
                    }
                    Some(b) if super::primitive::is_primitive_start(b) => {
                        self.parse_primitive(key)?;
                        self.bump_size(key);
                        ObjState::Comma
                    }
                    Some(b'}') => return Err(self.err(Status::KeyNoVal)),
                    None => return Err(self.err(Status::PartialToken)),
                    _ => return Err(self.err(Status::Invalid)),
                },
                ObjState::Comma => match byte {
                    Some(b',') => {
                        self.advance();
                        ObjState::Key
                    }
                    Some(b'}') => {
                        self.advance();
                        self.set_end(obj, self.pos);
                        return Ok(obj);
                    }
                    Some(b'"' | b'\'') => return Err(self.err(Status::ValNoComma)),
                    None => return Err(self.err(Status::PartialToken)),
                    _ => return Err(self.err(Status::Invalid)),
                },
            };
        }
    }
}
