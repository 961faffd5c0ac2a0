//! The interaction boundary used to ask the player for choices.

use std::collections::VecDeque;

use tracing::debug;

/// Presents a message with an ordered list of labelled choices.
///
/// Implementations return the index of the chosen label, or `None` when no
/// choice was made (input closed, user cancelled). The game treats `None` and
/// out-of-range indices as "nothing happens".
pub trait Prompt {
    /// Ask the user to pick one of `labels`.
    fn choose(&mut self, message: &str, labels: &[String]) -> Option<usize>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn choose(&mut self, message: &str, labels: &[String]) -> Option<usize> {
        (**self).choose(message, labels)
    }
}

/// Ask `prompt` for a choice and discard anything outside `labels`.
pub fn select(prompt: &mut impl Prompt, message: &str, labels: &[String]) -> Option<usize> {
    match prompt.choose(message, labels) {
        Some(index) if index < labels.len() => Some(index),
        Some(index) => {
            debug!(index, choices = labels.len(), "ignoring out-of-range selection");
            None
        }
        None => None,
    }
}

/// A prompt that replays a fixed sequence of selections.
///
/// Once the script runs out every further question gets `None`. Every question
/// asked is recorded so tests can inspect the labels that were offered.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    script: VecDeque<Option<usize>>,
    asked: Vec<(String, Vec<String>)>,
}

impl ScriptedPrompt {
    /// Create a prompt that answers with `choices` in order.
    pub fn new(choices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: choices.into_iter().map(Some).collect(),
            asked: Vec::new(),
        }
    }

    /// Queue a "no selection" answer.
    pub fn then_cancel(mut self) -> Self {
        self.script.push_back(None);
        self
    }

    /// Queue another selection.
    pub fn then(mut self, choice: usize) -> Self {
        self.script.push_back(Some(choice));
        self
    }

    /// Every `(message, labels)` pair asked so far.
    pub fn asked(&self) -> &[(String, Vec<String>)] {
        &self.asked
    }

    /// Returns true if every scripted answer has been used.
    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl Prompt for ScriptedPrompt {
    fn choose(&mut self, message: &str, labels: &[String]) -> Option<usize> {
        self.asked.push((message.to_string(), labels.to_vec()));
        self.script.pop_front().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scripted_prompt_replays_in_order() {
        let mut prompt = ScriptedPrompt::new([1, 0]).then_cancel();
        let opts = labels(&["a", "b"]);

        assert_eq!(prompt.choose("q", &opts), Some(1));
        assert_eq!(prompt.choose("q", &opts), Some(0));
        assert_eq!(prompt.choose("q", &opts), None);
        assert!(prompt.is_exhausted());
        assert_eq!(prompt.choose("q", &opts), None);
        assert_eq!(prompt.asked().len(), 4);
    }

    #[test]
    fn select_discards_out_of_range() {
        let opts = labels(&["only"]);
        let mut prompt = ScriptedPrompt::new([3, 0]);

        assert_eq!(select(&mut prompt, "q", &opts), None);
        assert_eq!(select(&mut prompt, "q", &opts), Some(0));
    }

    #[test]
    fn asked_records_labels() {
        let mut prompt = ScriptedPrompt::default();
        select(&mut prompt, "Pick one", &labels(&["x", "y"]));

        let (message, offered) = &prompt.asked()[0];
        assert_eq!(message, "Pick one");
        assert_eq!(offered, &labels(&["x", "y"]));
    }
}
