//! Command-line definition

use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, Command};
use pipeline_model::{DevelopmentPhase, TherapeuticArea};
use pipeline_portfolio::{DetailTab, UserRole};

/// Build the `pipeline` command
pub(crate) fn command() -> Command {
    Command::new("pipeline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Drug-development pipeline portfolio")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_name("FILE")
                .value_parser(value_parser!(std::path::PathBuf))
                .help("TOML file with seed, count and reference_date"),
        )
        .arg(
            Arg::new("count")
                .long("count")
                .global(true)
                .value_parser(value_parser!(usize))
                .help("Number of programs to generate [default: 50]"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u32))
                .help("Stream seed [default: 12345]"),
        )
        .arg(
            Arg::new("reference-date")
                .long("reference-date")
                .global(true)
                .value_name("YYYY-MM-DD")
                .value_parser(value_parser!(NaiveDate))
                .help("Date generated dates are relative to [default: today, UTC]"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON"),
        )
        .subcommand(
            Command::new("generate")
                .about("Print the generated programs as JSON")
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Indent the JSON output"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List programs matching a search and facet filters")
                .arg(
                    Arg::new("query")
                        .long("query")
                        .short('q')
                        .help("Case-insensitive search over name, code, indication and area"),
                )
                .arg(
                    Arg::new("phase")
                        .long("phase")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(DevelopmentPhase))
                        .help("Keep programs in this phase (repeatable)"),
                )
                .arg(
                    Arg::new("area")
                        .long("area")
                        .action(ArgAction::Append)
                        .value_parser(value_parser!(TherapeuticArea))
                        .help("Keep programs in this therapeutic area (repeatable)"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show one program's detail view")
                .arg(Arg::new("id").required(true).help("Program id, e.g. PRG001"))
                .arg(
                    Arg::new("tab")
                        .long("tab")
                        .default_value("overview")
                        .value_parser(value_parser!(DetailTab))
                        .help("overview, studies or milestones"),
                )
                .arg(user_arg())
                .arg(role_arg()),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit a copy of a program and print it; nothing is saved")
                .arg(Arg::new("id").required(true).help("Program id, e.g. PRG001"))
                .arg(
                    Arg::new("set")
                        .long("set")
                        .required(true)
                        .action(ArgAction::Append)
                        .value_name("FIELD=VALUE")
                        .help("description, indication or mechanism (repeatable)"),
                )
                .arg(user_arg())
                .arg(role_arg()),
        )
        .subcommand(Command::new("summary").about("Print portfolio-wide counts"))
}

fn user_arg() -> Arg {
    Arg::new("user")
        .long("user")
        .default_value("chan")
        .help("Name of the signed-in user")
}

fn role_arg() -> Arg {
    Arg::new("role")
        .long("role")
        .default_value("edit")
        .value_parser(value_parser!(UserRole))
        .help("view, edit or admin")
}
