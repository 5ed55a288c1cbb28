//! Accent section location
//!
//! Field values produced by the pitch-graph generator carry the diagram
//! between a fixed pair of HTML comment markers. Hand-authored diagrams use a
//! second marker vocabulary; a start marker only ever pairs with the end
//! marker of the same vocabulary.

/// The two sentinel vocabularies that can delimit an accent section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SentinelKind {
    /// `<!-- accent_start -->` … `<!-- accent_end -->`, written by the graph generator
    Generated,

    /// `<!-- user_accent_start -->` … `<!-- user_accent_end -->`, written by hand
    User,
}

impl SentinelKind {
    /// The literal start marker of this vocabulary
    pub fn start_marker(&self) -> &'static str {
        match self {
            SentinelKind::Generated => "<!-- accent_start -->",
            SentinelKind::User => "<!-- user_accent_start -->",
        }
    }

    /// The literal end marker of this vocabulary
    pub fn end_marker(&self) -> &'static str {
        match self {
            SentinelKind::Generated => "<!-- accent_end -->",
            SentinelKind::User => "<!-- user_accent_end -->",
        }
    }
}

/// A located accent section, borrowing the field value it was found in.
///
/// Offsets always sit on marker boundaries, so every accessor returns a
/// well-formed slice of the original field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentSection<'a> {
    field: &'a str,
    start: usize,
    body_start: usize,
    body_end: usize,
    end: usize,
    kind: SentinelKind,
}

impl<'a> AccentSection<'a> {
    /// Which sentinel vocabulary delimits this section
    pub fn kind(&self) -> SentinelKind {
        self.kind
    }

    /// Field content before the start marker
    pub fn prefix(&self) -> &'a str {
        &self.field[..self.start]
    }

    /// Field content after the end marker
    pub fn suffix(&self) -> &'a str {
        &self.field[self.end..]
    }

    /// Section content between the markers
    pub fn body(&self) -> &'a str {
        &self.field[self.body_start..self.body_end]
    }

    /// The whole section, sentinel markers included
    pub fn raw(&self) -> &'a str {
        &self.field[self.start..self.end]
    }
}

/// Find the first complete accent section in a field value.
///
/// Each vocabulary is matched independently: the candidate is the first start
/// marker together with the first end marker of the *same* vocabulary after
/// it. A start marker with no following end marker is not a match. When both
/// vocabularies form a pair, the one starting earlier wins.
pub fn find_accent_section(field: &str) -> Option<AccentSection<'_>> {
    let mut found: Option<AccentSection<'_>> = None;

    for kind in [SentinelKind::Generated, SentinelKind::User] {
        let start = match field.find(kind.start_marker()) {
            Some(idx) => idx,
            None => continue,
        };
        let body_start = start + kind.start_marker().len();
        let body_end = match field[body_start..].find(kind.end_marker()) {
            Some(rel) => body_start + rel,
            None => continue,
        };
        let end = body_end + kind.end_marker().len();

        let earlier = match &found {
            Some(section) => start < section.start,
            None => true,
        };
        if earlier {
            found = Some(AccentSection {
                field,
                start,
                body_start,
                body_end,
                end,
                kind,
            });
        }
    }

    found
}
