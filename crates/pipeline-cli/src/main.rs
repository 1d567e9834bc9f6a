//! `pipeline` command-line front end
//!
//! Generates the portfolio once at startup and answers one query against it.

mod cli;
mod config;
mod render;

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use pipeline_mockgen::Generator;
use pipeline_model::{DevelopmentPhase, TherapeuticArea};
use pipeline_portfolio::{
    to_json, to_json_pretty, CurrentUser, DetailTab, EditSession, Portfolio, ProgramEdit,
    ProgramFilter, UserRole,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = cli::command().get_matches();
    init_tracing(matches.get_flag("log-json"));

    if let Err(e) = run(&matches) {
        tracing::error!(error = %e, "Command failed");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for JSON output
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = config::resolve(matches)?;
    let programs = Generator::new(config)
        .generate()
        .context("failed to generate portfolio")?;
    let portfolio = Portfolio::new(programs);

    match matches.subcommand() {
        Some(("generate", args)) => {
            let json = if args.get_flag("pretty") {
                to_json_pretty(portfolio.programs())?
            } else {
                to_json(portfolio.programs())?
            };
            println!("{json}");
        }
        Some(("list", args)) => {
            let mut filter = ProgramFilter::new();
            if let Some(query) = args.get_one::<String>("query") {
                filter = filter.with_query(query.as_str());
            }
            if let Some(phases) = args.get_many::<DevelopmentPhase>("phase") {
                filter = filter.with_phases(phases.copied());
            }
            if let Some(areas) = args.get_many::<TherapeuticArea>("area") {
                filter = filter.with_areas(areas.copied());
            }
            let hits = portfolio.search(&filter);
            tracing::debug!(hits = hits.len(), "Search complete");
            print!("{}", render::program_list(&hits, portfolio.len()));
        }
        Some(("show", args)) => {
            let id = required::<String>(args, "id")?;
            let tab = args.get_one::<DetailTab>("tab").copied().unwrap_or_default();
            let detail = portfolio.detail(id, tab)?;
            print!("{}", render::program_detail(&detail, &current_user(args)?));
        }
        Some(("edit", args)) => {
            let id = required::<String>(args, "id")?;
            let user = current_user(args)?;
            if !user.can_edit() {
                bail!("editing is not offered to role {}", user.role);
            }
            let mut session = EditSession::begin(portfolio.require(id)?);
            for assignment in args.get_many::<String>("set").into_iter().flatten() {
                session.apply(parse_assignment(assignment)?);
            }
            let edited = session.save();
            println!("{}", to_json_pretty(std::slice::from_ref(&edited))?);
        }
        Some(("summary", _)) => print!("{}", render::summary(&portfolio.summary())),
        _ => bail!("no subcommand given"),
    }
    Ok(())
}

fn required<'a, T>(args: &'a ArgMatches, name: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    args.get_one::<T>(name)
        .with_context(|| format!("missing argument {name}"))
}

fn current_user(args: &ArgMatches) -> Result<CurrentUser> {
    let name = required::<String>(args, "user")?;
    let role = args.get_one::<UserRole>("role").copied().unwrap_or_default();
    Ok(CurrentUser::new(name.as_str(), role))
}

/// Parse `field=value`
fn parse_assignment(assignment: &str) -> Result<ProgramEdit> {
    let (field, value) = assignment
        .split_once('=')
        .with_context(|| format!("expected FIELD=VALUE, got {assignment:?}"))?;
    Ok(ProgramEdit::parse(field, value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments() {
        assert_eq!(
            parse_assignment("mechanism=Cell Therapy").unwrap(),
            ProgramEdit::Mechanism("Cell Therapy".to_string())
        );
        assert_eq!(
            parse_assignment("description=a=b").unwrap(),
            ProgramEdit::Description("a=b".to_string())
        );
        assert!(parse_assignment("mechanism").is_err());
        assert!(parse_assignment("phase=Approved").is_err());
    }

    #[test]
    fn view_role_cannot_edit() {
        let matches = cli::command()
            .try_get_matches_from([
                "pipeline", "edit", "PRG001", "--set", "mechanism=x", "--role", "view",
                "--count", "1", "--reference-date", "2025-01-15",
            ])
            .unwrap();
        let err = run(&matches).unwrap_err();
        assert!(err.to_string().contains("not offered to role view"));
    }

    #[test]
    fn unknown_program_is_an_error() {
        let matches = cli::command()
            .try_get_matches_from([
                "pipeline", "show", "PRG999", "--count", "2", "--reference-date", "2025-01-15",
            ])
            .unwrap();
        assert!(run(&matches).is_err());
    }

    #[test]
    fn zero_count_is_rejected() {
        let matches = cli::command()
            .try_get_matches_from(["pipeline", "summary", "--count", "0"])
            .unwrap();
        let err = run(&matches).unwrap_err();
        assert!(format!("{err:#}").contains("failed to generate portfolio"));
    }
}
