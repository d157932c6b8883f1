//! Line-oriented search session.
//!
//! Each input line is one form interaction: edit a field, press 조회 (search)
//! or 초기화 (reset), move the pager. Edits never touch the results until
//! `search` runs, same as the form.

use super::render::{render_filter_form, render_messages, render_page, render_text_list};
use moviesearch::api::{CmdMessage, CmdResult, MovieSearchApi};
use moviesearch::error::{MovieSearchError, Result};
use moviesearch::filters::{ALL, FIELD_NAMES};
use moviesearch::model::SortOrder;
use moviesearch::store::DataStore;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "moviesearch> ";

const HELP_LINES: &[&str] = &[
    "set <field> <value>   edit a filter field (see `fields`)",
    "clear <field>         empty a field (years and index go back to 전체)",
    "search | 조회          run the search, back to page 1",
    "reset | 초기화         clear every filter and show the whole catalogue",
    "page <n>              jump to page n",
    "next | prev           move one page",
    "sort <latest|title>   pick the sort selector (display only)",
    "more                  show or hide the extra filters",
    "show                  print the form and the current page",
    "fields                list field names",
    "quit | exit           leave the session",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Set { field: String, value: String },
    Clear(String),
    Search,
    Reset,
    Page(usize),
    Next,
    Prev,
    Sort(SortOrder),
    More,
    Show,
    Fields,
    Help,
    Quit,
    Empty,
}

/// The value `clear` writes into a field.
fn cleared_value(field: &str) -> &'static str {
    match field {
        "productionYearStart" | "productionYearEnd" | "titleIndex" => ALL,
        f if f.starts_with("classification.") => "false",
        _ => "",
    }
}

fn invalid(message: impl Into<String>) -> MovieSearchError {
    MovieSearchError::InvalidInput(message.into())
}

pub fn parse_line(line: &str) -> Result<ShellCommand> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "" => ShellCommand::Empty,
        "set" => {
            let (field, value) = match rest.split_once(char::is_whitespace) {
                Some((field, value)) => (field, value.trim()),
                None => (rest, ""),
            };
            if field.is_empty() {
                return Err(invalid("usage: set <field> <value>"));
            }
            ShellCommand::Set {
                field: field.to_string(),
                value: value.to_string(),
            }
        }
        "clear" => {
            if rest.is_empty() {
                return Err(invalid("usage: clear <field>"));
            }
            ShellCommand::Clear(rest.to_string())
        }
        "search" | "조회" => ShellCommand::Search,
        "reset" | "초기화" => ShellCommand::Reset,
        "page" => {
            let page = rest
                .parse()
                .map_err(|_| invalid(format!("Invalid page number: {}", rest)))?;
            ShellCommand::Page(page)
        }
        "next" => ShellCommand::Next,
        "prev" => ShellCommand::Prev,
        "sort" => ShellCommand::Sort(rest.parse()?),
        "more" => ShellCommand::More,
        "show" => ShellCommand::Show,
        "fields" => ShellCommand::Fields,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(invalid(format!("Unknown command: {} (try `help`)", other))),
    };
    Ok(command)
}

pub struct Session<'a, S: DataStore> {
    pub api: &'a mut MovieSearchApi<S>,
    pub year_options: &'a [String],
    pub use_color: bool,
}

impl<S: DataStore> Session<'_, S> {
    fn form(&self) -> String {
        render_filter_form(
            self.api.filters(),
            self.api.more_filters(),
            self.year_options,
            self.use_color,
        )
    }

    fn result(&self, result: &CmdResult) -> String {
        let mut output = String::new();
        if let Some(view) = &result.page {
            output.push_str(&render_page(view, self.api.sort_order(), self.use_color));
        }
        output.push_str(&render_messages(&result.messages, self.use_color));
        output
    }

    /// Applies one command. `None` ends the session.
    fn execute(&mut self, command: ShellCommand) -> Result<Option<String>> {
        let output = match command {
            ShellCommand::Empty => String::new(),
            ShellCommand::Set { field, value } => {
                let result = self.api.edit_named_field(&field, &value)?;
                render_messages(&result.messages, self.use_color)
            }
            ShellCommand::Clear(field) => {
                let result = self.api.edit_named_field(&field, cleared_value(&field))?;
                render_messages(&result.messages, self.use_color)
            }
            ShellCommand::Search => {
                let result = self.api.search();
                self.result(&result)
            }
            ShellCommand::Reset => {
                let result = self.api.reset();
                format!("{}{}", self.form(), self.result(&result))
            }
            ShellCommand::Page(page) => {
                let result = self.api.change_page(page);
                self.result(&result)
            }
            ShellCommand::Next => {
                let result = self.api.next_page();
                self.result(&result)
            }
            ShellCommand::Prev => {
                let result = self.api.prev_page();
                self.result(&result)
            }
            ShellCommand::Sort(order) => {
                let result = self.api.set_sort_order(order);
                self.result(&result)
            }
            ShellCommand::More => {
                self.api.toggle_more_filters();
                self.form()
            }
            ShellCommand::Show => {
                let page = render_page(&self.api.page_view(), self.api.sort_order(), self.use_color);
                format!("{}{}", self.form(), page)
            }
            ShellCommand::Fields => {
                let names: Vec<String> = FIELD_NAMES.iter().map(|f| f.to_string()).collect();
                render_text_list(&names, "No fields.", self.use_color)
            }
            ShellCommand::Help => {
                let lines: Vec<String> = HELP_LINES.iter().map(|l| l.to_string()).collect();
                render_text_list(&lines, "", self.use_color)
            }
            ShellCommand::Quit => return Ok(None),
        };
        Ok(Some(output))
    }

    /// Reads commands until `quit` or end of input. Bad lines are reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let page = render_page(&self.api.page_view(), self.api.sort_order(), self.use_color);
        write!(out, "{}{}", self.form(), page)?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line?;
            log::debug!("shell: {}", line.trim());

            match parse_line(&line).and_then(|command| self.execute(command)) {
                Ok(Some(output)) => write!(out, "{}", output)?,
                Ok(None) => break,
                Err(e) => {
                    let message = CmdMessage::error(e.to_string());
                    write!(out, "{}", render_messages(&[message], self.use_color))?;
                }
            }
        }
        Ok(())
    }
}
