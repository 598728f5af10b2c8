//! Sort button handling for PlasticTable.

use log::{debug, error, warn};
use plasticdom::{Document, DomError, NodeId};

use super::comparator::Comparator;
use super::controller::PlasticTable;
use super::state::{SortState, Transition};
use crate::error::TableError;

impl<T: 'static> PlasticTable<T> {
    /// Return to the neutral state and relabel every registered button.
    pub fn reset_sorting(&self, doc: &mut Document) {
        self.inner.borrow_mut().state = SortState::Neutral;
        self.relabel_all(doc);
    }

    fn relabel_all(&self, doc: &mut Document) {
        let (buttons, neutral) = {
            let inner = self.inner.borrow();
            (inner.buttons.clone(), inner.config.neutral_glyph.clone())
        };
        for button in buttons {
            if let Err(err) = doc.set_text(button, neutral.as_str()) {
                warn!("[table] Cannot relabel sort button: {}", err);
            }
        }
    }

    /// Advance the sort state for a click on `button`.
    ///
    /// Clicking the active button flips descending to ascending, or resets
    /// an ascending sort. Clicking any other button resets and activates it
    /// descending with `comparator`. The button loses focus either way. This
    /// does not re-render; call [`rebuild`](Self::rebuild) afterwards.
    pub fn on_sort_click(
        &self,
        doc: &mut Document,
        button: NodeId,
        comparator: Comparator<T>,
    ) -> Result<(), TableError> {
        if !doc.contains(button) {
            return Err(DomError::NodeNotFound(button).into());
        }

        let transition = self.inner.borrow_mut().state.click(button, comparator);
        let config = self.config();
        match transition {
            Transition::Activated => {
                self.relabel_all(doc);
                doc.set_text(button, config.descending_glyph)?;
            }
            Transition::Flipped => {
                doc.set_text(button, config.ascending_glyph)?;
            }
            Transition::Reset => self.relabel_all(doc),
        }
        doc.blur(button);

        debug!(
            "[table] Sort click on {}: {:?} -> {:?}",
            button,
            transition,
            self.direction()
        );
        Ok(())
    }

    /// Make `button` a sort control for this table.
    ///
    /// The button is labelled neutral and gets a click handler that advances
    /// the sort state and rebuilds. Registering a button again replaces its
    /// handler and adds a second registry entry.
    pub fn register_sort_button(
        &self,
        doc: &mut Document,
        button: NodeId,
        comparator: Comparator<T>,
    ) -> Result<(), TableError> {
        let neutral = self.inner.borrow().config.neutral_glyph.clone();
        doc.set_text(button, neutral)?;

        let table = self.clone();
        doc.set_onclick(button, move |doc, target| {
            let result = table
                .on_sort_click(doc, target, comparator.clone())
                .and_then(|()| table.rebuild(doc));
            if let Err(err) = result {
                error!("[table] Sort button {} failed: {}", target, err);
            }
        })?;

        self.inner.borrow_mut().buttons.push(button);
        Ok(())
    }
}
