//! # Rendering Module
//!
//! Styled terminal output for the filter form, the result page, command
//! messages and configuration.
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust because
//! they need Unicode-aware widths: most titles are Hangul, two columns per
//! character. Templates only arrange the pre-computed strings and select styles
//! through the `style` filter, which is a no-op when color is off.

use super::styles::{names, THEME};
use super::templates::{
    CONFIG_TEMPLATE, FORM_TEMPLATE, MESSAGES_TEMPLATE, PAGE_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use minijinja::{Environment, Value};
use moviesearch::api::{CmdMessage, MessageLevel, PageView};
use moviesearch::config::MovieSearchConfig;
use moviesearch::dates::format_date;
use moviesearch::filters::{ClassificationFlag, FilterState};
use moviesearch::model::{Movie, SortOrder};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const COLUMN_GAP: &str = "  ";
pub const EMPTY_MESSAGE: &str = "검색 결과가 없습니다.";
/// Page links shown at once; the pager moves in blocks of this size.
pub const PAGER_BLOCK: usize = 10;

/// Result table columns: header and maximum display width.
const COLUMNS: &[(&str, usize)] = &[
    ("영화명", 20),
    ("영화명(영문)", 28),
    ("영화코드", 8),
    ("제작연도", 8),
    ("제작국가", 8),
    ("유형", 6),
    ("장르", 14),
    ("제작상태", 8),
    ("감독", 14),
    ("제작사", 20),
];

#[derive(Serialize)]
struct FormField {
    label: String,
    value: String,
    note: String,
}

#[derive(Serialize)]
struct FormData {
    title: String,
    fields: Vec<FormField>,
    expanded: bool,
    hint: String,
}

#[derive(Serialize)]
struct PagerLink {
    label: String,
    current: bool,
}

#[derive(Serialize)]
struct PageData {
    total_count: usize,
    sort_label: String,
    header: String,
    rows: Vec<String>,
    empty: bool,
    empty_message: String,
    show_pager: bool,
    has_prev: bool,
    has_next: bool,
    pages: Vec<PagerLink>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: String,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

/// Renders a template with the theme's `style` filter registered.
fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match THEME.get(name.as_str()) {
            Some(style) if use_color && !text.is_empty() => {
                style.clone().force_styling(true).apply_to(&text).to_string()
            }
            _ => text,
        }
    });
    env.add_template("inline", template)?;
    env.get_template("inline")?.render(data)
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn field(label: &str, value: String, note: &str) -> FormField {
    FormField {
        label: pad_to_width(label, 10),
        value,
        note: note.to_string(),
    }
}

/// Renders the filter form summary. The extra section only shows when expanded.
pub fn render_filter_form(
    filters: &FilterState,
    expanded: bool,
    year_options: &[String],
    use_color: bool,
) -> String {
    let year_note = if year_options.is_empty() {
        String::new()
    } else {
        format!("  [{}]", year_options.join("|"))
    };
    let dates = filters.release_dates();
    let date_note = if dates.is_inverted() {
        "  (start is after end, nothing matches)"
    } else {
        ""
    };
    let show_date = |d: Option<chrono::NaiveDate>| d.map(format_date).unwrap_or_else(|| "-".into());

    let mut fields = vec![
        field("영화명", or_dash(&filters.title), ""),
        field("감독명", or_dash(&filters.director), ""),
        field(
            "제작연도",
            format!(
                "{} ~ {}",
                filters.production_year_start, filters.production_year_end
            ),
            &year_note,
        ),
        field(
            "개봉일자",
            format!(
                "{} ~ {}",
                show_date(filters.release_date_start),
                show_date(filters.release_date_end)
            ),
            date_note,
        ),
        field("제작상태", or_dash(&filters.production_status), ""),
        field("장르", or_dash(&filters.genre), ""),
        field("유형", or_dash(&filters.movie_type), ""),
        field("인덱스", filters.title_index.clone(), ""),
    ];

    if expanded {
        let not_applied = "  (not applied)";
        let boxes = ClassificationFlag::all()
            .iter()
            .map(|flag| {
                let mark = if filters.classification.get(*flag) {
                    "x"
                } else {
                    " "
                };
                format!("[{}] {}", mark, flag.label())
            })
            .collect::<Vec<_>>()
            .join(" ");
        fields.push(field("영화구분", boxes, not_applied));
        fields.push(field("등급", or_dash(&filters.rating), not_applied));
        fields.push(field(
            "상영형태",
            or_dash(&filters.screening_type),
            not_applied,
        ));
        fields.push(field("국적", or_dash(&filters.nationality), not_applied));
        fields.push(field(
            "대표국적",
            or_dash(&filters.representative_nationality),
            not_applied,
        ));
    }

    let data = FormData {
        title: "영화 검색".to_string(),
        fields,
        expanded,
        hint: "more filters hidden (toggle with `more`)".to_string(),
    };

    render_template(FORM_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn movie_cells(movie: &Movie) -> [String; 10] {
    [
        movie.title_korean.clone(),
        movie.title_english.clone(),
        movie.id.clone(),
        movie.production_year.to_string(),
        movie.production_country.clone(),
        movie.movie_type.clone(),
        movie.genre.clone(),
        movie.production_status.clone(),
        movie.director.clone(),
        movie.production_company.clone(),
    ]
}

/// Column widths: the widest cell or header, capped per column.
fn column_widths(rows: &[[String; 10]]) -> Vec<usize> {
    COLUMNS
        .iter()
        .enumerate()
        .map(|(i, (header, max))| {
            let widest = rows
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0);
            widest.min(*max)
        })
        .collect()
}

fn layout_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad_to_width(&truncate_to_width(cell.as_ref(), *width), *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    line.trim_end().to_string()
}

fn pager_links(view: &PageView) -> Vec<PagerLink> {
    let current = view.current_page.clamp(1, view.total_pages.max(1));
    let first = (current - 1) / PAGER_BLOCK * PAGER_BLOCK + 1;
    let last = (first + PAGER_BLOCK - 1).min(view.total_pages);
    (first..=last)
        .map(|p| PagerLink {
            label: p.to_string(),
            current: p == view.current_page,
        })
        .collect()
}

/// Renders the total line, the result table and the pager.
pub fn render_page(view: &PageView, sort: SortOrder, use_color: bool) -> String {
    let rows: Vec<[String; 10]> = view.movies.iter().map(movie_cells).collect();
    let widths = column_widths(&rows);
    let headers: Vec<&str> = COLUMNS.iter().map(|(h, _)| *h).collect();

    let data = PageData {
        total_count: view.total_count,
        sort_label: sort.label().to_string(),
        header: layout_row(&headers, &widths),
        rows: rows.iter().map(|r| layout_row(&r[..], &widths)).collect(),
        empty: view.movies.is_empty(),
        empty_message: EMPTY_MESSAGE.to_string(),
        show_pager: view.shows_pager(),
        has_prev: view.has_prev(),
        has_next: view.has_next(),
        pages: pager_links(view),
    };

    render_template(PAGE_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders command messages using the template system with themed styles.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let message_data: Vec<MessageData> = messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            };
            MessageData {
                content: msg.content.clone(),
                style: style.to_string(),
            }
        })
        .collect();

    let data = MessagesData {
        messages: message_data,
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn render_config(config: &MovieSearchConfig, use_color: bool) -> String {
    let entries = moviesearch::config::KEYS
        .iter()
        .map(|key| ConfigEntry {
            key: key.to_string(),
            value: config.get(key).unwrap_or_default(),
        })
        .collect();

    render_template(CONFIG_TEMPLATE, &ConfigData { entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };

    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}
