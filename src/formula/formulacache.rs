use super::formula::Formula;
use super::formulacompiler::compile;
use super::parsefailure::ParseFailure;

struct CacheEntry {
    text: String,
    result: Result<Option<Formula>, ParseFailure>
}

/// Keeps the last compiled formula so that it is compiled once per distinct
/// input text and recompiled as soon as the text changes.
///
/// Belongs to the caller; the computation functions themselves hold no state.
#[derive(Default)]
pub struct FormulaCache {
    entry: Option<CacheEntry>,
    compilations: usize
}

impl FormulaCache {
    pub fn new() -> FormulaCache {
        FormulaCache::default()
    }

    pub fn compile(&mut self, text: &str) -> Result<Option<Formula>, ParseFailure> {
        let stale = self.entry
            .as_ref()
            .map_or(true, |entry| entry.text != text);
        if stale {
            self.compilations += 1;
            self.entry = Some(CacheEntry {
                text: text.to_owned(),
                result: compile(text)
            });
        }
        match &self.entry {
            Some(entry) => entry.result.clone(),
            None => Ok(None)
        }
    }

    /// How many times the compiler actually ran.
    pub fn compilations(&self) -> usize {
        self.compilations
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }
}
