use crate::kind::Kind;
use crate::node::Token;

/// Numbers within this distance of each other compare equal. Chosen to
/// absorb the last-bit rounding `f64::parse` introduces on decimal
/// literals without treating genuinely distinct values as the same.
const EPSILON: f64 = 1e-9;

impl<'a> Token<'a> {
    /// Structural equality between two tokens, each possibly from a
    /// different pool and a different source buffer.
    ///
    /// * Strings compare their raw bytes exactly, quotes included, with no
    ///   escape decoding.
    /// * Primitives compare as the literal keywords `true`/`false`/`null`,
    ///   or else as `f64` within [`EPSILON`].
    /// * Arrays compare element-wise in order.
    /// * Objects compare their key/value pairs without regard to order.
    pub fn equal(&self, other: &Token<'_>) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        match self.kind() {
            Kind::Unassigned => false,
            Kind::String => string_equal(self, other),
            Kind::Primitive => primitive_equal(self, other),
            Kind::Array => array_equal(self, other),
            Kind::Object => object_equal(self, other),
        }
    }
}

fn string_equal(a: &Token<'_>, b: &Token<'_>) -> bool {
    a.raw() == b.raw()
}

fn primitive_equal(a: &Token<'_>, b: &Token<'_>) -> bool {
    for literal in [&b"true"[..], &b"false"[..], &b"null"[..]] {
        if a.raw() == literal || b.raw() == literal {
            return a.raw() == b.raw();
        }
    }
    match (a.as_str().and_then(parse_number), b.as_str().and_then(parse_number)) {
        (Some(x), Some(y)) => (x - y).abs() < EPSILON,
        _ => false,
    }
}

fn parse_number(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

fn array_equal(a: &Token<'_>, b: &Token<'_>) -> bool {
    if a.size() != b.size() {
        return false;
    }
    let mut left = a.child();
    let mut right = b.child();
    loop {
        match (left, right) {
            (Some(l), Some(r)) => {
                if !l.equal(&r) {
                    return false;
                }
                left = l.next_sibling();
                right = r.next_sibling();
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

fn object_equal(a: &Token<'_>, b: &Token<'_>) -> bool {
    if a.size() != b.size() {
        return false;
    }
    let mut a_key = a.child();
    while let Some(ak) = a_key {
        let a_value = match ak.child() {
            Some(v) => v,
            None => return false,
        };
        let Some(key_str) = ak.str_contents() else {
            return false;
        };
        let Some(b_value) = b.get(key_str) else {
            return false;
        };
        if !a_value.equal(&b_value) {
            return false;
        }
        a_key = ak.next_sibling();
    }
    true
}

#[cfg(test)]
mod tests {
    use crate::TokenPool;
    use crate::token::RawToken;

    fn parse_into<'s>(pool: &'s mut TokenPool<'s>) -> crate::Token<'s> {
        pool.parse().expect("valid json")
    }

    #[test]
    fn primitives_equal_numerically() {
        let mut buf1 = [RawToken::default(); 4];
        let mut buf2 = [RawToken::default(); 4];
        let mut p1 = TokenPool::new(br#"{"k":1.0}"#, &mut buf1);
        let mut p2 = TokenPool::new(br#"{"k":1.00}"#, &mut buf2);
        let t1 = parse_into(&mut p1).get("k").unwrap();
        let t2 = parse_into(&mut p2).get("k").unwrap();
        assert!(t1.equal(&t2));
    }

    #[test]
    fn strings_require_exact_bytes() {
        let mut buf1 = [RawToken::default(); 4];
        let mut buf2 = [RawToken::default(); 4];
        let mut p1 = TokenPool::new(br#"{"k":"a"}"#, &mut buf1);
        let mut p2 = TokenPool::new(br#"{"k":"a "}"#, &mut buf2);
        let t1 = parse_into(&mut p1).get("k").unwrap();
        let t2 = parse_into(&mut p2).get("k").unwrap();
        assert!(!t1.equal(&t2));
    }

    #[test]
    fn objects_equal_regardless_of_key_order() {
        let mut buf1 = [RawToken::default(); 16];
        let mut buf2 = [RawToken::default(); 16];
        let mut p1 = TokenPool::new(br#"{"a":1,"b":2}"#, &mut buf1);
        let mut p2 = TokenPool::new(br#"{"b":2,"a":1}"#, &mut buf2);
        let t1 = parse_into(&mut p1);
        let t2 = parse_into(&mut p2);
        assert!(t1.equal(&t2));
    }

    #[test]
    fn arrays_require_order() {
        let mut buf1 = [RawToken::default(); 16];
        let mut buf2 = [RawToken::default(); 16];
        let mut p1 = TokenPool::new(br#"{"k":[1,2]}"#, &mut buf1);
        let mut p2 = TokenPool::new(br#"{"k":[2,1]}"#, &mut buf2);
        let t1 = parse_into(&mut p1).get("k").unwrap();
        let t2 = parse_into(&mut p2).get("k").unwrap();
        assert!(!t1.equal(&t2));
    }
}
