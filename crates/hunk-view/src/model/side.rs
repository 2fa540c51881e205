/// Which side of the diff a line or decoration belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DiffSide {
    /// The old version (left side in split mode).
    Base,
    /// The new version (right side in split mode).
    #[default]
    Head,
}

impl DiffSide {
    /// Letter used in row anchors (`L` for base, `R` for head).
    pub fn anchor_letter(&self) -> char {
        match self {
            DiffSide::Base => 'L',
            DiffSide::Head => 'R',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiffSide::Base => "base",
            DiffSide::Head => "head",
        }
    }
}

impl std::fmt::Display for DiffSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
