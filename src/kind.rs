/// The four token kinds a tokenizer can produce, plus the sentinel used for
/// slots that have not been filled in yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A slot that has not been assigned a token yet. Never observed on a
    /// token returned from a successful parse.
    Unassigned,
    /// A number or bare literal (`true`, `false`, `null`).
    Primitive,
    /// A `{ ... }` object.
    Object,
    /// A `[ ... ]` array.
    Array,
    /// A quoted string, including object keys.
    String,
}

impl Kind {
    /// Short name used in error messages and trace output.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Unassigned => "UNASSIGNED",
            Kind::Primitive => "PRIMITIVE",
            Kind::Object => "OBJECT",
            Kind::Array => "ARRAY",
            Kind::String => "STRING",
        }
    }
}

impl core::fmt::Display for Kind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
