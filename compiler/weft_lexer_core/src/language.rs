/// Grammar index.
///
/// The host grammar is markup; style and script are embedded in it. The
/// discriminants are the language indices the host editor passes to the
/// per-language queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Language {
    Markup = 0,
    Style = 1,
    Script = 2,
}

impl Language {
    pub const ALL: [Language; 3] = [Self::Markup, Self::Style, Self::Script];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Language::index`]; `None` for an out-of-range index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Markup),
            1 => Some(Self::Style),
            2 => Some(Self::Script),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Markup => "markup",
            Self::Style => "style",
            Self::Script => "script",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
