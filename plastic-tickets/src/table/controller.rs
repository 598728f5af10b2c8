use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use plasticdom::{Document, NodeId};

use super::state::SortState;
use crate::config::{MissingBodyPolicy, TableConfig};
use crate::error::TableError;

/// Populates one freshly inserted `<tr>` for a row record.
pub type RowBuilder<T> = dyn Fn(&T, &mut Document, NodeId);

type FilterFunc<T> = dyn Fn(&T) -> bool;

pub(super) struct Inner<T> {
    pub(super) data: Rc<[T]>,
    pub(super) body_id: String,
    pub(super) row_builder: Rc<RowBuilder<T>>,
    pub(super) filter_func: Option<Rc<FilterFunc<T>>>,
    pub(super) state: SortState<T>,
    /// Every registered sort button, in registration order. A button
    /// registered twice appears twice.
    pub(super) buttons: Vec<NodeId>,
    pub(super) config: TableConfig,
}

/// Controller for one sortable, filterable table.
///
/// `PlasticTable` is a shared handle: clones refer to the same table, which
/// is how click handlers installed by
/// [`register_sort_button`](Self::register_sort_button) reach it. No borrow of
/// the shared state is held while caller callbacks run.
pub struct PlasticTable<T> {
    pub(super) inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for PlasticTable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for PlasticTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PlasticTable")
            .field("rows", &inner.data.len())
            .field("body_id", &inner.body_id)
            .field("state", &inner.state)
            .field("buttons", &inner.buttons)
            .field("filtered", &inner.filter_func.is_some())
            .finish()
    }
}

impl<T: 'static> PlasticTable<T> {
    /// Create a table over `data` whose body container has id `body_id`.
    pub fn new<F>(data: impl Into<Rc<[T]>>, body_id: impl Into<String>, row_builder: F) -> Self
    where
        F: Fn(&T, &mut Document, NodeId) + 'static,
    {
        Self::with_config(data, body_id, row_builder, TableConfig::default())
    }

    pub fn with_config<F>(
        data: impl Into<Rc<[T]>>,
        body_id: impl Into<String>,
        row_builder: F,
        config: TableConfig,
    ) -> Self
    where
        F: Fn(&T, &mut Document, NodeId) + 'static,
    {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                data: data.into(),
                body_id: body_id.into(),
                row_builder: Rc::new(row_builder),
                filter_func: None,
                state: SortState::Neutral,
                buttons: Vec::new(),
                config,
            })),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn data(&self) -> Rc<[T]> {
        Rc::clone(&self.inner.borrow().data)
    }

    pub(super) fn config(&self) -> TableConfig {
        self.inner.borrow().config.clone()
    }

    pub fn sort_state(&self) -> SortState<T> {
        self.inner.borrow().state.clone()
    }

    pub fn active_button(&self) -> Option<NodeId> {
        self.inner.borrow().state.active_button()
    }

    pub fn direction(&self) -> Option<crate::SortDirection> {
        self.inner.borrow().state.direction()
    }

    pub fn registered_buttons(&self) -> Vec<NodeId> {
        self.inner.borrow().buttons.clone()
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Only rows for which `filter` returns true are rendered.
    /// Takes effect on the next rebuild.
    pub fn set_filter_func<F>(&self, filter: F)
    where
        F: Fn(&T) -> bool + 'static,
    {
        self.inner.borrow_mut().filter_func = Some(Rc::new(filter));
    }

    /// Render every row again. Takes effect on the next rebuild.
    pub fn clear_filter_func(&self) {
        self.inner.borrow_mut().filter_func = None;
    }

    pub fn has_filter_func(&self) -> bool {
        self.inner.borrow().filter_func.is_some()
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Indices into [`data`](Self::data) of the rows a rebuild would render,
    /// in render order.
    ///
    /// Filtering keeps source order; the active comparator, if any, is then
    /// applied with a stable sort.
    pub fn visible_indices(&self) -> Vec<usize> {
        let (data, filter, state) = {
            let inner = self.inner.borrow();
            (
                Rc::clone(&inner.data),
                inner.filter_func.clone(),
                inner.state.clone(),
            )
        };

        let mut visible: Vec<usize> = match &filter {
            Some(filter) => (0..data.len()).filter(|&i| filter(&data[i])).collect(),
            None => (0..data.len()).collect(),
        };

        if let SortState::Sorted {
            direction,
            comparator,
            ..
        } = &state
        {
            visible.sort_by(|&a, &b| comparator.compare(&data[a], &data[b], *direction));
        }

        visible
    }

    /// Filter, sort and re-render the table body.
    ///
    /// A new container with the old container's tag and id is filled with one
    /// row per visible record and swapped in at the old container's place.
    pub fn rebuild(&self, doc: &mut Document) -> Result<(), TableError> {
        let (body_id, policy, row_builder) = {
            let inner = self.inner.borrow();
            (
                inner.body_id.clone(),
                inner.config.missing_body,
                Rc::clone(&inner.row_builder),
            )
        };

        let Some(old_body) = doc.get_element_by_id(&body_id) else {
            return match policy {
                MissingBodyPolicy::Ignore => {
                    warn!("[table] Body container `{}` not found, skipping rebuild", body_id);
                    Ok(())
                }
                MissingBodyPolicy::Error => Err(TableError::MissingBody(body_id)),
            };
        };

        let rows = self.visible_indices();
        let data = self.data();

        let tag = doc.tag(old_body)?.to_string();
        let new_body = doc.create_element(&tag);
        doc.set_attr(new_body, "id", body_id.as_str())?;
        for &index in &rows {
            let tr = doc.insert_row(new_body)?;
            row_builder(&data[index], doc, tr);
        }
        doc.replace_child(new_body, old_body)?;

        debug!(
            "[table] Rebuilt `{}`: {} of {} rows, {} -> {}",
            body_id,
            rows.len(),
            data.len(),
            old_body,
            new_body
        );
        Ok(())
    }
}
