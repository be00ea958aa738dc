//! Parses interactive commands into messages.
//!
//! Row numbers refer to the `#` column of the last rendered table, which
//! counts visible (filtered) rows from 1.

use std::collections::BTreeSet;

use anyhow::{Context, Result, bail};

use artic_model::{ArtworkId, PageSize};
use artic_state::{
    AppState, BulkMessage, Message, PageMessage, SearchMessage, SelectionMessage, TableView,
};

/// One line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Messages to dispatch, in order.
    Messages(Vec<Message>),
    Help,
    Quit,
    /// Blank line.
    Empty,
}

impl From<Message> for Input {
    fn from(message: Message) -> Self {
        Self::Messages(vec![message])
    }
}

pub const HELP: &str = "\
Commands:
  n, next              next page
  p, prev              previous page
  first | last         first or last page
  page <N>             go to page N
  rows <6|12|24>       change rows per page
  search <text>        filter the loaded page (/<text> works too)
  clear-search         remove the filter
  select <#>...        select rows by number
  deselect <#>...      deselect rows by number
  toggle <#>...        flip rows by number
  only <#>...          select exactly these visible rows
  all | none           select or deselect every row on the page
  bulk <N>             select the first N artworks of the collection
  clear                clear the whole selection
  reload               fetch the current page again
  dismiss              hide the last error
  help | quit";

/// Interpret `line` against the rows currently shown.
pub fn parse_line(line: &str, state: &AppState) -> Result<Input> {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(term) = line.strip_prefix('/') {
        return Ok(Message::from(SearchMessage::Changed(term.to_string())).into());
    }
    if let Some(term) = line.strip_prefix("search ") {
        return Ok(Message::from(SearchMessage::Changed(term.to_string())).into());
    }

    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(Input::Empty);
    };
    let args: Vec<&str> = words.collect();

    let input = match command {
        "n" | "next" => Message::from(PageMessage::Next).into(),
        "p" | "prev" | "previous" => Message::from(PageMessage::Previous).into(),
        "first" => Message::from(PageMessage::First).into(),
        "last" => Message::from(PageMessage::Last).into(),
        "page" | "goto" => {
            let number = single_arg(command, &args)?
                .parse::<u32>()
                .context("page number must be a positive integer")?;
            Message::from(PageMessage::GoTo(number)).into()
        }
        "rows" => {
            let rows = single_arg(command, &args)?
                .parse::<u32>()
                .context("rows must be 6, 12 or 24")?;
            let size = PageSize::try_from(rows)?;
            Message::from(PageMessage::SizeChanged(size)).into()
        }
        "search" => Message::from(SearchMessage::Cleared).into(),
        "clear-search" => Message::from(SearchMessage::Cleared).into(),
        "select" => per_row(state, &args, SelectionMessage::Add)?,
        "deselect" => per_row(state, &args, SelectionMessage::Remove)?,
        "toggle" => per_row(state, &args, SelectionMessage::Toggle)?,
        "only" => only_rows(state, &args)?,
        "all" => Message::from(SelectionMessage::PageToggled(true)).into(),
        "none" => Message::from(SelectionMessage::PageToggled(false)).into(),
        "bulk" => {
            let count = single_arg(command, &args)?
                .parse::<i64>()
                .context("bulk count must be an integer")?;
            Input::Messages(vec![
                BulkMessage::InputChanged(Some(count)).into(),
                BulkMessage::Apply.into(),
            ])
        }
        "clear" => Message::from(SelectionMessage::Cleared).into(),
        "reload" => Message::from(PageMessage::Reload).into(),
        "dismiss" => Message::DismissError.into(),
        "help" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        other => bail!("unknown command `{other}`, try `help`"),
    };
    Ok(input)
}

fn single_arg<'a>(command: &str, args: &[&'a str]) -> Result<&'a str> {
    match args {
        [value] => Ok(value),
        _ => bail!("`{command}` takes exactly one argument"),
    }
}

/// Ids of the visible rows named by `args`.
fn row_ids(state: &AppState, args: &[&str]) -> Result<Vec<ArtworkId>> {
    if args.is_empty() {
        bail!("give at least one row number");
    }
    let view = TableView::from_state(state);
    args.iter()
        .map(|arg| {
            let position: usize = arg
                .parse()
                .with_context(|| format!("`{arg}` is not a row number"))?;
            position
                .checked_sub(1)
                .and_then(|index| view.rows.get(index))
                .map(|row| row.record.id)
                .with_context(|| format!("no row {position} on this page"))
        })
        .collect()
}

fn per_row(
    state: &AppState,
    args: &[&str],
    message: fn(ArtworkId) -> SelectionMessage,
) -> Result<Input> {
    let messages = row_ids(state, args)?
        .into_iter()
        .map(|id| message(id).into())
        .collect();
    Ok(Input::Messages(messages))
}

/// Visible rows become exactly `args`; rows hidden by the filter keep their
/// state.
fn only_rows(state: &AppState, args: &[&str]) -> Result<Input> {
    let chosen = row_ids(state, args)?;
    let view = TableView::from_state(state);
    let visible: BTreeSet<ArtworkId> = view.rows.iter().map(|row| row.record.id).collect();

    let mut rows: BTreeSet<ArtworkId> = state
        .selection
        .selected_on_page(&state.records)
        .into_iter()
        .map(|record| record.id)
        .filter(|id| !visible.contains(id))
        .collect();
    rows.extend(chosen);

    Ok(Message::from(SelectionMessage::RowsChanged(rows)).into())
}
