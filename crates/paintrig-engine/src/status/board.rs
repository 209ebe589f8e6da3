use std::collections::BTreeMap;

use crate::error::SceneError;

use super::StatusSink;

/// In-memory status sink with a fixed set of targets.
#[derive(Debug, Default, Clone)]
pub struct StatusBoard {
    texts: BTreeMap<String, String>,
}

impl StatusBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut board = Self::new();
        for t in targets {
            board.register(t);
        }
        board
    }

    /// Adds a target with empty text. Re-registering keeps the current text.
    pub fn register(&mut self, target: impl Into<String>) {
        self.texts.entry(target.into()).or_default();
    }

    pub fn text(&self, target: &str) -> Option<&str> {
        self.texts.get(target).map(String::as_str)
    }

    /// All targets joined as `text | text`, in target-name order.
    pub fn line(&self) -> String {
        self.texts
            .values()
            .filter(|t| !t.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl StatusSink for StatusBoard {
    fn set_text(&mut self, target: &str, text: &str) -> Result<(), SceneError> {
        let slot = self
            .texts
            .get_mut(target)
            .ok_or_else(|| SceneError::UnknownStatusTarget(target.to_string()))?;
        slot.clear();
        slot.push_str(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_target_errors() {
        let mut board = StatusBoard::new();
        assert_eq!(
            board.set_text("numdot", "x"),
            Err(SceneError::UnknownStatusTarget("numdot".into()))
        );
    }

    #[test]
    fn line_joins_non_empty_targets() {
        let mut board = StatusBoard::with_targets(["b", "a", "c"]);
        board.set_text("a", "one").unwrap();
        board.set_text("b", "two").unwrap();
        assert_eq!(board.line(), "one | two");
    }
}
