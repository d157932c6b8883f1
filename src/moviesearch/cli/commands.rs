//! # CLI Layer
//!
//! This module is **one possible UI client** for moviesearch. The library knows
//! nothing about terminals; this layer is the only place that:
//! - Parses arguments (clap) and shell lines
//! - Writes to stdout/stderr
//! - Picks colors and formats tables for humans
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call the API and print output
//!
//! Business rules are tested in the command layer; tests here and in `tests/`
//! only cover argument handling and output.

use super::render::{
    render_config, render_filter_form, render_messages, render_page, render_text_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands, FilterArgs,
};
use super::shell::Session;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use moviesearch::api::{CmdMessage, CmdResult, ConfigAction, MovieSearchApi};
use moviesearch::config::MovieSearchConfig;
use moviesearch::error::{MovieSearchError, Result};
use moviesearch::filters::FIELD_NAMES;
use moviesearch::model::SortOrder;
use moviesearch::store::sample::SampleStore;
use std::path::PathBuf;

pub const HOME_ENV: &str = "MOVIESEARCH_HOME";

struct AppContext {
    api: MovieSearchApi<SampleStore>,
    config: MovieSearchConfig,
    config_dir: PathBuf,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::setup_logging(cli.verbose);

    // Top level gets grouped help, subcommands get clap's own
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Search {
            filters,
            page,
            sort,
            more,
            json,
        }) => handle_search(&mut ctx, filters, page, sort, more, json),
        Some(Commands::List { page, json }) => handle_list(&mut ctx, page, json),
        Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Fields) => handle_fields(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Help { command }) => handle_help(command),
        None => handle_list(&mut ctx, 1, false),
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "moviesearch", "moviesearch")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MovieSearchError::Config("Could not determine config directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = MovieSearchConfig::load(&config_dir).unwrap_or_else(|e| {
        log::warn!("ignoring config in {}: {}", config_dir.display(), e);
        MovieSearchConfig::default()
    });
    log::debug!("config dir {}", config_dir.display());

    let api = MovieSearchApi::new(SampleStore, &config)?;
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();

    Ok(AppContext {
        api,
        config,
        config_dir,
        use_color,
    })
}

fn print_page_result(ctx: &AppContext, result: &CmdResult, json: bool) -> Result<()> {
    if let Some(view) = &result.page {
        if json {
            println!("{}", serde_json::to_string_pretty(view)?);
        } else {
            print!("{}", render_page(view, ctx.api.sort_order(), ctx.use_color));
        }
    }
    print_messages(ctx, &result.messages, json);
    Ok(())
}

/// Messages go to stderr when stdout carries JSON.
fn print_messages(ctx: &AppContext, messages: &[CmdMessage], to_stderr: bool) {
    let output = render_messages(messages, ctx.use_color);
    if output.is_empty() {
        return;
    }
    if to_stderr {
        eprint!("{}", output);
    } else {
        print!("{}", output);
    }
}

fn handle_search(
    ctx: &mut AppContext,
    filters: FilterArgs,
    page: usize,
    sort: Option<String>,
    more: bool,
    json: bool,
) -> Result<()> {
    let mut messages = Vec::new();
    for (field, value) in filters.edits() {
        let result = ctx.api.edit_named_field(&field, &value)?;
        messages.extend(result.messages);
    }
    if let Some(sort) = sort {
        let order: SortOrder = sort.parse()?;
        ctx.api.set_sort_order(order);
    }
    if more && !ctx.api.more_filters() {
        ctx.api.toggle_more_filters();
    }

    let mut result = ctx.api.search();
    if page != 1 {
        result = ctx.api.change_page(page);
    }
    messages.append(&mut result.messages);
    result.messages = messages;

    if more && !json {
        print!(
            "{}",
            render_filter_form(
                ctx.api.filters(),
                true,
                &ctx.config.year_options,
                ctx.use_color
            )
        );
    }
    print_page_result(ctx, &result, json)
}

fn handle_list(ctx: &mut AppContext, page: usize, json: bool) -> Result<()> {
    let result = ctx.api.change_page(page);
    print_page_result(ctx, &result, json)
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    Session {
        api: &mut ctx.api,
        year_options: &ctx.config.year_options,
        use_color: ctx.use_color,
    }
    .run(stdin.lock(), &mut stdout)
}

fn handle_fields(ctx: &AppContext) -> Result<()> {
    let names: Vec<String> = FIELD_NAMES.iter().map(|f| f.to_string()).collect();
    print!("{}", render_text_list(&names, "No fields.", ctx.use_color));
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(&ctx.config_dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    print_messages(ctx, &result.messages, false);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
