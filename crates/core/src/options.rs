//! Transformation options.

/// Stems that mark a `'` inside single quotes as part of a contraction.
///
/// This is a rough approximation: stems not in the list still close the span,
/// and words that merely end in one of them ("Mexican") keep it open.
pub const DEFAULT_CONTRACTION_STEMS: &[&str] = &["can", "you", "don"];

/// Options for a single transformation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Output suffixes that turn a closing-looking `'` inside single quotes into an apostrophe.
    pub contraction_stems: Vec<String>,
    /// Recognize a leading `---` block as YAML front matter.
    pub front_matter: bool,
}

impl Options {
    /// Append extra contraction stems to the current list.
    pub fn with_contraction_stems<I, S>(mut self, stems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for stem in stems {
            let stem = stem.into();
            if !stem.is_empty() && !self.contraction_stems.contains(&stem) {
                self.contraction_stems.push(stem);
            }
        }
        self
    }

    /// Enable or disable front matter detection.
    pub fn with_front_matter(mut self, enabled: bool) -> Self {
        self.front_matter = enabled;
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            contraction_stems: DEFAULT_CONTRACTION_STEMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            front_matter: true,
        }
    }
}
