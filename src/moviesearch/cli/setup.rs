use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "moviesearch",
    bin_name = "moviesearch",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Filter and page through the movie catalogue", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Search,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Search => "Search Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "search" | "list" | "shell" => Some(CommandGroup::Search),
            "fields" | "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[CommandGroup::Search, CommandGroup::Misc]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("moviesearch {version}\n"));
    output.push_str("Filter and page through the movie catalogue\n");
    output.push('\n');
    output.push_str("Usage: moviesearch [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("      --no-color   Disable colored output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Search { .. }) => "search",
        Some(Commands::List { .. }) => "list",
        Some(Commands::Shell) => "shell",
        Some(Commands::Fields) => "fields",
        Some(Commands::Config { .. }) => "config",
        Some(Commands::Help { .. }) => "help",
        None => {
            print_grouped_help();
            return;
        }
    };
    print_help_for_command(name);
}

pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one search and print a page of results
    #[command(alias = "s", display_order = 1)]
    Search {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Sort selector: latest or title (shown only, results keep catalogue order)
        #[arg(long)]
        sort: Option<String>,

        /// Show the extra filters in the form summary
        #[arg(long)]
        more: bool,

        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the catalogue without filtering
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Interactive search session reading commands from stdin
    #[command(display_order = 3)]
    Shell,

    /// List filter field names accepted by `shell` (set/clear)
    #[command(display_order = 10)]
    Fields,

    /// Get or set configuration
    #[command(display_order = 11)]
    Config {
        /// Configuration key (page-size, more-filters, year-options)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print help for moviesearch or a subcommand
    #[command(display_order = 12)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Korean or English title contains
    #[arg(short, long, help_heading = "Filters")]
    pub title: Option<String>,

    /// Director contains
    #[arg(short, long, help_heading = "Filters")]
    pub director: Option<String>,

    /// Single production year (same as --year-start Y --year-end Y)
    #[arg(short, long, value_name = "YEAR", help_heading = "Filters",
          conflicts_with_all = ["year_start", "year_end"])]
    pub year: Option<String>,

    /// Earliest production year
    #[arg(long, value_name = "YEAR", help_heading = "Filters")]
    pub year_start: Option<String>,

    /// Latest production year
    #[arg(long, value_name = "YEAR", help_heading = "Filters")]
    pub year_end: Option<String>,

    /// Released on or after
    #[arg(long = "from", value_name = "YYYY-MM-DD", help_heading = "Filters")]
    pub release_from: Option<String>,

    /// Released on or before
    #[arg(long = "to", value_name = "YYYY-MM-DD", help_heading = "Filters")]
    pub release_to: Option<String>,

    /// Production status contains
    #[arg(long, help_heading = "Filters")]
    pub status: Option<String>,

    /// Genre contains
    #[arg(long, help_heading = "Filters")]
    pub genre: Option<String>,

    /// Type (장편, 단편, ...) contains
    #[arg(long = "type", value_name = "TYPE", help_heading = "Filters")]
    pub movie_type: Option<String>,

    /// Title starts with
    #[arg(long, value_name = "INITIAL", help_heading = "Filters")]
    pub index: Option<String>,

    /// Classification checkbox (general, art, independent); not applied
    #[arg(long, value_name = "FLAG", help_heading = "Recorded only")]
    pub classification: Vec<String>,

    /// Rating; not applied
    #[arg(long, help_heading = "Recorded only")]
    pub rating: Option<String>,

    /// Screening type; not applied
    #[arg(long, help_heading = "Recorded only")]
    pub screening_type: Option<String>,

    /// Nationality; not applied
    #[arg(long, help_heading = "Recorded only")]
    pub nationality: Option<String>,

    /// Representative nationality; not applied
    #[arg(long, help_heading = "Recorded only")]
    pub representative_nationality: Option<String>,
}

impl FilterArgs {
    /// The flags as `(form field, value)` pairs, in form order.
    pub fn edits(&self) -> Vec<(String, String)> {
        let mut edits = Vec::new();
        let mut push = |field: &str, value: &Option<String>| {
            if let Some(v) = value {
                edits.push((field.to_string(), v.clone()));
            }
        };

        push("title", &self.title);
        push("productionYearStart", &self.year);
        push("productionYearEnd", &self.year);
        push("productionYearStart", &self.year_start);
        push("productionYearEnd", &self.year_end);
        push("director", &self.director);
        push("releaseDateStart", &self.release_from);
        push("releaseDateEnd", &self.release_to);
        push("productionStatus", &self.status);
        push("genre", &self.genre);
        push("type", &self.movie_type);
        push("titleIndex", &self.index);
        push("rating", &self.rating);
        push("screeningType", &self.screening_type);
        push("nationality", &self.nationality);
        push("representativeNationality", &self.representative_nationality);

        for flag in &self.classification {
            edits.push((format!("classification.{}", flag), "true".to_string()));
        }
        edits
    }
}
