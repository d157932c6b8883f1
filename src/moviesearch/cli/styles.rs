use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub mod names {
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const COUNT: &str = "count";
    pub const HEADER: &str = "header";
    pub const CURRENT_PAGE: &str = "current_page";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        (names::HEADING, Style::new().bold()),
        (names::LABEL, Style::new().cyan()),
        (names::MUTED, Style::new().dim().italic()),
        (names::COUNT, Style::new().bold().yellow()),
        (names::HEADER, Style::new().bold().underlined()),
        (names::CURRENT_PAGE, Style::new().bold().reverse()),
        (names::INFO, Style::new().dim()),
        (names::SUCCESS, Style::new().green()),
        (names::WARNING, Style::new().yellow()),
        (names::ERROR, Style::new().red()),
    ])
});
