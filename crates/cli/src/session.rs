//! One interactive run: collect entries, append them, reload the file, list
//! everything, then search.
//!
//! Errors never end the run. A bad answer while entering an entry is
//! reported and the entry becomes [`InventoryItem::default()`]; the remaining
//! prompts for that entry are not asked. Store failures are reported and the
//! run continues with whatever was loaded.

use stockbook_infra::{ItemStore, LoadOutcome, StoreError};
use stockbook_inventory::{Category, InventoryItem, SearchCriteria, filter};

use crate::config::ShellConfig;
use crate::console::{InputProvider, OutputSink};
use crate::errors::{
    InputParseError, parse_category, parse_date, parse_integer, parse_price, parse_text,
};
use crate::render::Renderer;

const CATEGORY_CHOICES: &str = "0 - Electronics, 1 - Clothing, 2 - Groceries, 3 - Furniture";

/// What a run did, for the caller's logs and for tests.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub entered: Vec<InventoryItem>,
    pub appended: usize,
    pub loaded: Vec<InventoryItem>,
    pub criteria: SearchCriteria,
    pub matches: Vec<InventoryItem>,
    pub input_errors: usize,
    pub store_errors: usize,
}

pub struct Session<S> {
    store: S,
    renderer: Renderer,
}

impl<S: ItemStore> Session<S> {
    pub fn new(store: S, renderer: Renderer) -> Self {
        Self { store, renderer }
    }

    pub fn from_config(store: S, config: &ShellConfig) -> Self {
        Self::new(store, Renderer::new(config.output, config.currency.clone()))
    }

    pub fn run<I, O>(&self, input: &mut I, out: &mut O) -> SessionReport
    where
        I: InputProvider + ?Sized,
        O: OutputSink + ?Sized,
    {
        let mut prompter = Prompter::new(input, out);
        let mut report = SessionReport::default();

        report.entered = collect_items(&mut prompter);

        match self.store.append(&report.entered) {
            Ok(written) => report.appended = written,
            Err(err) => {
                report.store_errors += 1;
                prompter.store_failure("writing to", &err);
            }
        }

        let outcome = match self.store.load_all() {
            Ok(outcome) => outcome,
            Err(err) => {
                report.store_errors += 1;
                prompter.store_failure("reading from", &err);
                LoadOutcome::default()
            }
        };
        for err in &outcome.errors {
            report.store_errors += 1;
            prompter.store_failure("reading from", err);
        }
        report.loaded = outcome.items;

        prompter.line("");
        prompter.line("Items read from file:");
        self.renderer.listing(&mut *prompter.out, &report.loaded);

        prompter.line("");
        prompter.line("Search by parameters:");
        report.criteria = read_criteria(&mut prompter);
        report.matches = filter(&report.loaded, &report.criteria);

        prompter.line("Search results:");
        self.renderer.listing(&mut *prompter.out, &report.matches);

        report.input_errors = prompter.input_errors;
        tracing::info!(
            entered = report.entered.len(),
            appended = report.appended,
            loaded = report.loaded.len(),
            matched = report.matches.len(),
            input_errors = report.input_errors,
            store_errors = report.store_errors,
            "session finished"
        );
        report
    }
}

/// Prompt/answer plumbing shared by the collection and search steps.
struct Prompter<'a, I: ?Sized, O: ?Sized> {
    input: &'a mut I,
    out: &'a mut O,
    input_errors: usize,
}

impl<'a, I, O> Prompter<'a, I, O>
where
    I: InputProvider + ?Sized,
    O: OutputSink + ?Sized,
{
    fn new(input: &'a mut I, out: &'a mut O) -> Self {
        Self {
            input,
            out,
            input_errors: 0,
        }
    }

    fn line(&mut self, text: &str) {
        self.out.line(text);
    }

    fn ask(&mut self, prompt: &str, field: &'static str) -> Result<String, InputParseError> {
        self.out.line(prompt);
        match self.input.next_line() {
            Some(Ok(raw)) => Ok(raw),
            Some(Err(err)) => Err(InputParseError::unreadable(field, &err)),
            None => Err(InputParseError::end_of_input(field)),
        }
    }

    fn ask_field<T>(
        &mut self,
        prompt: &str,
        field: &'static str,
        parse: fn(&'static str, &str) -> Result<T, InputParseError>,
    ) -> Result<T, InputParseError> {
        let raw = self.ask(prompt, field)?;
        parse(field, &raw)
    }

    /// Empty answer (or end of input) skips; a bad answer is reported and skips.
    fn ask_optional<T>(
        &mut self,
        prompt: &str,
        field: &'static str,
        parse: fn(&'static str, &str) -> Result<T, InputParseError>,
    ) -> Option<T> {
        let raw = match self.ask(prompt, field) {
            Ok(raw) => raw,
            Err(InputParseError::EndOfInput { .. }) => {
                tracing::debug!(field, "input ended; criterion skipped");
                return None;
            }
            Err(err) => {
                self.input_failure(&err);
                return None;
            }
        };
        if raw.is_empty() {
            return None;
        }
        match parse(field, &raw) {
            Ok(value) => Some(value),
            Err(err) => {
                self.input_failure(&err);
                None
            }
        }
    }

    fn input_failure(&mut self, err: &InputParseError) {
        self.input_errors += 1;
        tracing::warn!(error = %err, "rejected interactive input");
        self.out.line(&format!("Error entering data: {err}"));
    }

    fn store_failure(&mut self, action: &str, err: &StoreError) {
        tracing::warn!(error = %err, "store operation failed");
        self.out.line(&format!("Error {action} file: {err}"));
    }
}

fn collect_items<I, O>(p: &mut Prompter<'_, I, O>) -> Vec<InventoryItem>
where
    I: InputProvider + ?Sized,
    O: OutputSink + ?Sized,
{
    let count = match p.ask_field(
        "Enter the number of items to write to the file:",
        "item count",
        parse_integer,
    ) {
        Ok(count) => usize::try_from(count).unwrap_or(0),
        Err(err) => {
            p.input_failure(&err);
            0
        }
    };

    let mut items = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        match read_item(p) {
            Ok(item) => {
                tracing::debug!(item = %item, "entry collected");
                items.push(item);
            }
            Err(err @ InputParseError::EndOfInput { .. }) => {
                p.input_failure(&err);
                break;
            }
            Err(err) => {
                p.input_failure(&err);
                items.push(InventoryItem::default());
            }
        }
    }
    items
}

fn read_item<I, O>(p: &mut Prompter<'_, I, O>) -> Result<InventoryItem, InputParseError>
where
    I: InputProvider + ?Sized,
    O: OutputSink + ?Sized,
{
    Ok(InventoryItem {
        warehouse_number: p.ask_field(
            "Enter warehouse number:",
            "warehouse number",
            parse_integer,
        )?,
        category: p.ask_field(
            &format!("Choose category ({CATEGORY_CHOICES}):"),
            "category",
            parse_category,
        )?,
        code: p.ask_field("Enter product code:", "product code", parse_text)?,
        name: p.ask_field("Enter product name:", "product name", parse_text)?,
        date_added: p.ask_field("Enter date added (yyyy-MM-dd):", "date added", parse_date)?,
        shelf_life_days: p.ask_field("Enter shelf life (days):", "shelf life", parse_integer)?,
        quantity: p.ask_field("Enter quantity:", "quantity", parse_integer)?,
        unit_price: p.ask_field("Enter unit price:", "unit price", parse_price)?,
    })
}

fn read_criteria<I, O>(p: &mut Prompter<'_, I, O>) -> SearchCriteria
where
    I: InputProvider + ?Sized,
    O: OutputSink + ?Sized,
{
    let warehouse_number = p.ask_optional(
        "Enter warehouse number to search for (leave empty to skip):",
        "warehouse number",
        parse_integer,
    );
    let category: Option<Category> = p.ask_optional(
        &format!("Enter category to search for ({CATEGORY_CHOICES}, leave empty to skip):"),
        "category",
        parse_category,
    );
    let name_contains = p.ask_optional(
        "Enter product name to search for (leave empty to skip):",
        "product name",
        parse_text,
    );

    SearchCriteria {
        warehouse_number,
        category,
        name_contains,
    }
}
