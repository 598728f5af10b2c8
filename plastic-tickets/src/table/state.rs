use std::fmt;

use plasticdom::NodeId;

use super::comparator::Comparator;
use crate::sort::SortDirection;

/// The table's current sort.
///
/// Either nothing is sorted, or exactly one button is active together with
/// its direction and comparator.
pub enum SortState<T> {
    Neutral,
    Sorted {
        button: NodeId,
        direction: SortDirection,
        comparator: Comparator<T>,
    },
}

/// What a click did to the sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Transition {
    /// A new button became active, descending.
    Activated,
    /// The active button went from descending to ascending.
    Flipped,
    /// The active button was clicked while ascending; back to neutral.
    Reset,
}

impl<T> Default for SortState<T> {
    fn default() -> Self {
        SortState::Neutral
    }
}

impl<T> Clone for SortState<T> {
    fn clone(&self) -> Self {
        match self {
            SortState::Neutral => SortState::Neutral,
            SortState::Sorted {
                button,
                direction,
                comparator,
            } => SortState::Sorted {
                button: *button,
                direction: *direction,
                comparator: comparator.clone(),
            },
        }
    }
}

impl<T> fmt::Debug for SortState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortState::Neutral => write!(f, "Neutral"),
            SortState::Sorted {
                button, direction, ..
            } => f
                .debug_struct("Sorted")
                .field("button", button)
                .field("direction", direction)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> SortState<T> {
    pub fn is_neutral(&self) -> bool {
        matches!(self, SortState::Neutral)
    }

    pub fn active_button(&self) -> Option<NodeId> {
        match self {
            SortState::Neutral => None,
            SortState::Sorted { button, .. } => Some(*button),
        }
    }

    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::Neutral => None,
            SortState::Sorted { direction, .. } => Some(*direction),
        }
    }

    pub fn comparator(&self) -> Option<&Comparator<T>> {
        match self {
            SortState::Neutral => None,
            SortState::Sorted { comparator, .. } => Some(comparator),
        }
    }

    /// Apply a click on `button`.
    ///
    /// Clicking the active button cycles descending -> ascending -> neutral
    /// and keeps the comparator it was activated with. Clicking any other
    /// button activates it descending with `comparator`.
    pub(crate) fn click(&mut self, button: NodeId, comparator: Comparator<T>) -> Transition {
        if self.active_button() != Some(button) {
            *self = SortState::Sorted {
                button,
                direction: SortDirection::Descending,
                comparator,
            };
            return Transition::Activated;
        }

        if self.direction() == Some(SortDirection::Descending) {
            if let SortState::Sorted { direction, .. } = self {
                *direction = SortDirection::Ascending;
            }
            Transition::Flipped
        } else {
            *self = SortState::Neutral;
            Transition::Reset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasticdom::Document;

    fn buttons() -> (NodeId, NodeId) {
        let mut doc = Document::new();
        (doc.create_element("button"), doc.create_element("button"))
    }

    fn cmp() -> Comparator<i32> {
        Comparator::plain(|a: &i32, b: &i32| a.cmp(b))
    }

    #[test]
    fn test_same_button_cycles() {
        let (a, _) = buttons();
        let mut state = SortState::default();

        assert_eq!(state.click(a, cmp()), Transition::Activated);
        assert_eq!(state.direction(), Some(SortDirection::Descending));
        assert_eq!(state.click(a, cmp()), Transition::Flipped);
        assert_eq!(state.direction(), Some(SortDirection::Ascending));
        assert_eq!(state.click(a, cmp()), Transition::Reset);
        assert!(state.is_neutral());
        assert_eq!(state.click(a, cmp()), Transition::Activated);
    }

    #[test]
    fn test_other_button_restarts_descending() {
        let (a, b) = buttons();
        let mut state = SortState::default();

        state.click(a, cmp());
        state.click(a, cmp());
        assert_eq!(state.click(b, cmp()), Transition::Activated);
        assert_eq!(state.active_button(), Some(b));
        assert_eq!(state.direction(), Some(SortDirection::Descending));
    }

    #[test]
    fn test_neutral_has_no_parts() {
        let state = SortState::<i32>::Neutral;
        assert_eq!(state.active_button(), None);
        assert_eq!(state.direction(), None);
        assert!(state.comparator().is_none());
    }
}
