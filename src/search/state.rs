use crate::source::Suggestion;

/// Everything the dropdown renders besides the query text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub suggestions: Vec<Suggestion>,
    pub is_loading: bool,
    /// Status line; empty means nothing to show
    pub message: String,
    /// Highlighted row. Always a valid index into `suggestions` when set.
    pub active_index: Option<usize>,
    pub selected_id: Option<i64>,
}

/// Partial record merged into [`SearchState`] by [`SearchState::update`].
/// `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct SearchUpdate {
    pub suggestions: Option<Vec<Suggestion>>,
    pub is_loading: Option<bool>,
    pub message: Option<String>,
    pub active_index: Option<Option<usize>>,
    pub selected_id: Option<Option<i64>>,
}

impl SearchState {
    /// Shallow merge. Replacing the suggestions resets the active index
    /// unless the same update sets one; an out-of-range index is dropped.
    pub fn update(&mut self, update: SearchUpdate) {
        if let Some(suggestions) = update.suggestions {
            self.suggestions = suggestions;
            self.active_index = None;
        }
        if let Some(is_loading) = update.is_loading {
            self.is_loading = is_loading;
        }
        if let Some(message) = update.message {
            self.message = message;
        }
        if let Some(active_index) = update.active_index {
            self.active_index = active_index.filter(|&i| i < self.suggestions.len());
        }
        if let Some(selected_id) = update.selected_id {
            self.selected_id = selected_id;
        }
    }

    pub fn active_suggestion(&self) -> Option<&Suggestion> {
        self.active_index.and_then(|i| self.suggestions.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birds() -> Vec<Suggestion> {
        vec![
            Suggestion::new(1, "American Robin"),
            Suggestion::new(2, "Ruffed Grouse"),
        ]
    }

    #[test]
    fn update_touches_only_given_fields() {
        let mut state = SearchState {
            message: "keep me".to_string(),
            selected_id: Some(9),
            ..SearchState::default()
        };
        state.update(SearchUpdate {
            is_loading: Some(true),
            ..SearchUpdate::default()
        });
        assert!(state.is_loading);
        assert_eq!(state.message, "keep me");
        assert_eq!(state.selected_id, Some(9));
    }

    #[test]
    fn replacing_suggestions_clears_active_index() {
        let mut state = SearchState::default();
        state.update(SearchUpdate {
            suggestions: Some(birds()),
            active_index: Some(Some(1)),
            ..SearchUpdate::default()
        });
        assert_eq!(state.active_index, Some(1));
        assert_eq!(state.active_suggestion().map(|s| s.id), Some(2));

        state.update(SearchUpdate {
            suggestions: Some(birds()),
            ..SearchUpdate::default()
        });
        assert_eq!(state.active_index, None);
    }

    #[test]
    fn out_of_range_active_index_is_dropped() {
        let mut state = SearchState::default();
        state.update(SearchUpdate {
            suggestions: Some(birds()),
            ..SearchUpdate::default()
        });
        state.update(SearchUpdate {
            active_index: Some(Some(2)),
            ..SearchUpdate::default()
        });
        assert_eq!(state.active_index, None);
    }
}
