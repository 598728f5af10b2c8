//! The material stock overview page.

use std::collections::BTreeSet;

use clap::ValueEnum;
use plastic_tickets::{Comparator, PlasticTable, get_selected_values, populate_with_options};
use plasticdom::{Document, Element, NodeId, to_html, to_text};

use crate::error::DemoError;
use crate::model::StockEntry;

pub const BODY_ID: &str = "stock-body";
pub const METHODS_ID: &str = "production-methods";
pub const TYPES_ID: &str = "material-types";

/// Output format of the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Whole document as HTML
    Html,
    /// Stock table as aligned text
    Text,
}

/// Columns with a sort button in their header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortColumn {
    Label,
    Name,
    Type,
    Temp,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Label,
        SortColumn::Name,
        SortColumn::Type,
        SortColumn::Temp,
    ];

    fn button_id(self) -> &'static str {
        match self {
            SortColumn::Label => "sort-label",
            SortColumn::Name => "sort-name",
            SortColumn::Type => "sort-type",
            SortColumn::Temp => "sort-temp",
        }
    }

    fn comparator(self) -> Comparator<StockEntry> {
        match self {
            SortColumn::Label => Comparator::by_key(|r: &StockEntry| Some(r.label)),
            SortColumn::Name => Comparator::by_key(|r: &StockEntry| Some(r.name.to_lowercase())),
            SortColumn::Type => Comparator::by_key(|r: &StockEntry| Some(r.material_type.clone())),
            SortColumn::Temp => Comparator::by_key(|r: &StockEntry| r.optimal_temp),
        }
    }
}

const COLUMNS: [(&str, Option<SortColumn>); 6] = [
    ("Label ", Some(SortColumn::Label)),
    ("Name ", Some(SortColumn::Name)),
    ("Method", None),
    ("Type ", Some(SortColumn::Type)),
    ("Color", None),
    ("Temp ", Some(SortColumn::Temp)),
];

pub struct Page {
    pub doc: Document,
    pub table: PlasticTable<StockEntry>,
    pub table_node: NodeId,
    pub methods: NodeId,
    pub types: NodeId,
}

impl Page {
    /// Build the page: filter selects, the stock table with its sort
    /// buttons, and an initial render.
    pub fn build(rows: Vec<StockEntry>) -> Result<Self, DemoError> {
        let mut doc = Document::new();
        let root = doc.root();

        let methods = doc.insert(root, Element::select().id(METHODS_ID).multiple())?;
        let types = doc.insert(root, Element::select().id(TYPES_ID).multiple())?;
        populate_with_options(&mut doc, methods, distinct(&rows, |r| &r.production_method))?;
        populate_with_options(&mut doc, types, distinct(&rows, |r| &r.material_type))?;

        let header = Element::tr().children(COLUMNS.iter().map(|&(title, sort)| {
            let th = Element::th(title);
            match sort {
                Some(column) => th.child(Element::button().id(column.button_id())),
                None => th,
            }
        }));
        let table_node = doc.insert(
            root,
            Element::table()
                .id("stock")
                .child(Element::thead().child(header))
                .child(Element::tbody().id(BODY_ID)),
        )?;

        let table = PlasticTable::new(rows, BODY_ID, build_row);
        for column in SortColumn::ALL {
            let button = doc.get_element_by_id(column.button_id()).ok_or_else(|| {
                DemoError::Usage(format!("sort button `{}` missing", column.button_id()))
            })?;
            table.register_sort_button(&mut doc, button, column.comparator())?;
        }
        table.rebuild(&mut doc)?;

        Ok(Self {
            doc,
            table,
            table_node,
            methods,
            types,
        })
    }

    /// Mark exactly the options of `select` whose values are in `values`.
    pub fn select_values(&mut self, select: NodeId, values: &[String]) -> Result<(), DemoError> {
        let options = self.doc.children(select)?.to_vec();
        let mut known = Vec::with_capacity(options.len());
        for option in options {
            let value = self.doc.attr(option, "value")?.unwrap_or_default().to_string();
            self.doc.set_selected(option, values.contains(&value))?;
            known.push(value);
        }

        if let Some(unknown) = values.iter().find(|v| !known.contains(*v)) {
            return Err(DemoError::Usage(format!("unknown option `{unknown}`")));
        }
        Ok(())
    }

    /// Filter rows by the current select state, then rebuild.
    ///
    /// An empty selection matches everything.
    pub fn apply_filters(&mut self, include_consumed: bool) -> Result<(), DemoError> {
        let methods = get_selected_values(&self.doc, Some(self.methods));
        let types = get_selected_values(&self.doc, Some(self.types));
        log::info!("Filtering by methods {:?} and types {:?}", methods, types);

        self.table.set_filter_func(move |row: &StockEntry| {
            (include_consumed || !row.consumed)
                && (methods.is_empty() || methods.contains(&row.production_method))
                && (types.is_empty() || types.contains(&row.material_type))
        });
        self.table.rebuild(&mut self.doc)?;
        log::info!(
            "Showing {} of {} stock rows",
            self.table.visible_indices().len(),
            self.table.data().len()
        );
        Ok(())
    }

    /// Click the sort button of `column`.
    pub fn click(&mut self, column: SortColumn) -> Result<(), DemoError> {
        let button = self
            .doc
            .get_element_by_id(column.button_id())
            .ok_or_else(|| DemoError::Usage(format!("no sort button for {column:?}")))?;
        self.doc.click(button)?;
        Ok(())
    }

    pub fn render(&self, format: Format) -> Result<String, DemoError> {
        let out = match format {
            Format::Html => {
                let mut html = to_html(&self.doc, self.doc.root())?;
                html.push('\n');
                html
            }
            Format::Text => to_text(&self.doc, self.table_node)?,
        };
        Ok(out)
    }
}

fn distinct<'a>(
    rows: &'a [StockEntry],
    field: impl Fn(&'a StockEntry) -> &'a String,
) -> BTreeSet<&'a str> {
    rows.iter().map(|r| field(r).as_str()).collect()
}

fn build_row(row: &StockEntry, doc: &mut Document, tr: NodeId) {
    let temp = row
        .optimal_temp
        .map(|t| format!("{t:.0} °C"))
        .unwrap_or_else(|| "n/a".to_string());
    let cells = [
        row.label.to_string(),
        row.name.clone(),
        row.production_method.clone(),
        row.material_type.clone(),
        row.color.clone(),
        temp,
    ];

    for text in cells {
        if let Err(err) = doc.insert_cell(tr).and_then(|cell| doc.set_text(cell, text)) {
            log::error!("Cannot render stock row {}: {}", row.label, err);
        }
    }
}
