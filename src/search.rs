// src/search.rs
use crate::region_data::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Down,
    Up,
    Enter,
    Escape,
}

impl SearchKey {
    /// Map a `KeyboardEvent::key()` value to a navigation key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(SearchKey::Down),
            "ArrowUp" => Some(SearchKey::Up),
            "Enter" => Some(SearchKey::Enter),
            "Escape" => Some(SearchKey::Escape),
            _ => None,
        }
    }
}

/// What the input should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    /// State changed; the default browser action should be suppressed.
    Handled,
    /// A result was chosen; carries its region id.
    Select(String),
}

/// Where a document `mousedown` landed relative to the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Input,
    Results,
    Elsewhere,
}

/// Live state of the search box. Results are held as region ids in dataset
/// order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub results: Vec<String>,
    pub expanded: bool,
    pub highlighted: Option<usize>,
}

impl SearchState {
    pub fn set_query(&mut self, dataset: &Dataset, query: String) {
        self.results = dataset
            .search(&query)
            .into_iter()
            .map(|r| r.id.clone())
            .collect();
        self.query = query;
        self.highlighted = None;
        self.expanded = true;
    }

    pub fn focus(&mut self) {
        self.expanded = true;
    }

    /// Hide the result list, leaving the query as typed.
    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    /// Presses outside the input and the result list collapse the list.
    pub fn pointer_down(&mut self, target: ClickTarget) {
        if target == ClickTarget::Elsewhere {
            self.collapse();
        }
    }

    pub fn key(&mut self, key: SearchKey) -> KeyOutcome {
        if key == SearchKey::Escape {
            if !self.expanded {
                return KeyOutcome::Ignored;
            }
            self.collapse();
            return KeyOutcome::Handled;
        }
        if self.results.is_empty() {
            return KeyOutcome::Ignored;
        }
        let last = self.results.len() - 1;
        match key {
            SearchKey::Down => {
                self.highlighted = Some(match self.highlighted {
                    None => 0,
                    Some(i) => (i + 1).min(last),
                });
                KeyOutcome::Handled
            }
            SearchKey::Up => {
                self.highlighted = Some(self.highlighted.map_or(0, |i| i.saturating_sub(1)));
                KeyOutcome::Handled
            }
            SearchKey::Enter => match self.highlighted.and_then(|i| self.results.get(i)) {
                Some(id) => KeyOutcome::Select(id.clone()),
                None => KeyOutcome::Ignored,
            },
            SearchKey::Escape => KeyOutcome::Ignored,
        }
    }

    /// Reset after a result has been chosen.
    pub fn select(&mut self) {
        self.query.clear();
        self.results.clear();
        self.highlighted = None;
        self.expanded = false;
    }

    /// Clear button: empties the query but keeps the list open for typing.
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.highlighted = None;
    }

    pub fn visible_results(&self) -> &[String] {
        if self.expanded {
            &self.results
        } else {
            &[]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(query: &str) -> (Dataset, SearchState) {
        let data = Dataset::load().unwrap();
        let mut state = SearchState::default();
        state.focus();
        state.set_query(&data, query.to_string());
        (data, state)
    }

    #[test]
    fn test_empty_query_has_no_results() {
        let (_, state) = typed("");
        assert!(state.results.is_empty());
        assert!(state.visible_results().is_empty());
    }

    #[test]
    fn test_query_the_returns_empty() {
        let (_, state) = typed("the");
        assert!(state.results.is_empty());
    }

    #[test]
    fn test_results_follow_dataset_order() {
        let (_, state) = typed("pradesh");
        assert_eq!(state.results, vec!["AP", "AR", "HP", "MP", "UP"]);
        assert_eq!(state.visible_results().len(), 5);
    }

    #[test]
    fn test_escape_keeps_query() {
        let (_, mut state) = typed("ker");
        assert_eq!(state.key(SearchKey::Escape), KeyOutcome::Handled);
        assert!(!state.expanded);
        assert_eq!(state.query, "ker");
        assert!(state.visible_results().is_empty());
        assert_eq!(state.results, vec!["KL"]);
        assert_eq!(state.key(SearchKey::Escape), KeyOutcome::Ignored);
    }

    #[test]
    fn test_down_up_stay_in_bounds() {
        let (_, mut state) = typed("pradesh");
        assert_eq!(state.key(SearchKey::Up), KeyOutcome::Handled);
        assert_eq!(state.highlighted, Some(0));
        for _ in 0..10 {
            state.key(SearchKey::Down);
        }
        assert_eq!(state.highlighted, Some(4));
        for _ in 0..10 {
            state.key(SearchKey::Up);
        }
        assert_eq!(state.highlighted, Some(0));
    }

    #[test]
    fn test_arrows_do_not_reopen_list() {
        let (_, mut state) = typed("pradesh");
        state.key(SearchKey::Escape);
        assert_eq!(state.key(SearchKey::Down), KeyOutcome::Handled);
        assert!(!state.expanded);
        assert!(state.visible_results().is_empty());
        state.key(SearchKey::Up);
        assert!(!state.expanded);

        state.focus();
        assert_eq!(state.visible_results().len(), 5);
    }

    #[test]
    fn test_pointer_down_outside_collapses() {
        let (_, mut state) = typed("goa");
        state.pointer_down(ClickTarget::Input);
        assert!(state.expanded);
        state.pointer_down(ClickTarget::Results);
        assert!(state.expanded);
        state.pointer_down(ClickTarget::Elsewhere);
        assert!(!state.expanded);
        assert_eq!(state.query, "goa");
    }

    #[test]
    fn test_enter_selects_highlighted() {
        let (_, mut state) = typed("pradesh");
        assert_eq!(state.key(SearchKey::Enter), KeyOutcome::Ignored);
        state.key(SearchKey::Down);
        state.key(SearchKey::Down);
        assert_eq!(state.key(SearchKey::Enter), KeyOutcome::Select("AR".to_string()));
    }

    #[test]
    fn test_keys_ignored_without_results() {
        let (_, mut state) = typed("zzz");
        assert_eq!(state.key(SearchKey::Down), KeyOutcome::Ignored);
        assert_eq!(state.key(SearchKey::Enter), KeyOutcome::Ignored);
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_typing_resets_highlight() {
        let (data, mut state) = typed("a");
        state.key(SearchKey::Down);
        state.key(SearchKey::Down);
        state.set_query(&data, "an".to_string());
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn test_select_clears_and_collapses() {
        let (_, mut state) = typed("goa");
        state.select();
        assert!(state.query.is_empty());
        assert!(state.results.is_empty());
        assert!(!state.expanded);
    }

    #[test]
    fn test_clear_keeps_focus() {
        let (_, mut state) = typed("goa");
        state.clear();
        assert!(state.query.is_empty());
        assert!(state.results.is_empty());
        assert!(state.expanded);
    }

    #[test]
    fn test_collapse_and_refocus() {
        let (_, mut state) = typed("kar");
        state.collapse();
        assert_eq!(state.query, "kar");
        state.focus();
        assert_eq!(state.visible_results(), &["KA".to_string()]);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(SearchKey::from_key("ArrowDown"), Some(SearchKey::Down));
        assert_eq!(SearchKey::from_key("Escape"), Some(SearchKey::Escape));
        assert_eq!(SearchKey::from_key("a"), None);
    }
}
