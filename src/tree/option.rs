//! Command options
//!
//! An option is a leaf of the command tree: a canonical name plus the
//! alternate flag forms a user may type for it.

/// A named option (flag) and its alternate forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
    name: String,
    candidates: Vec<String>,
}

impl CommandOption {
    /// Create an option with no alternate forms
    pub fn new(name: impl Into<String>) -> Self {
        CommandOption {
            name: name.into(),
            candidates: Vec::new(),
        }
    }

    /// Builder form of [`add_candidates`](Self::add_candidates)
    pub fn with_candidates<I, S>(mut self, candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_candidates(candidates);
        self
    }

    /// Canonical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternate forms, in insertion order
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Append one alternate form. Duplicates are kept.
    pub fn add_candidate(&mut self, candidate: impl Into<String>) {
        self.candidates.push(candidate.into());
    }

    /// Append several alternate forms after the existing ones
    pub fn add_candidates<I, S>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidates.extend(candidates.into_iter().map(Into::into));
    }

    /// The alternate forms followed by the canonical name
    pub fn completions(&self) -> Vec<String> {
        let mut res = Vec::with_capacity(self.candidates.len() + 1);
        res.extend(self.candidates.iter().cloned());
        res.push(self.name.clone());
        res
    }
}
