//! navctl - inspect resolved navigation
//!
//! Resolves the sidebar, command palette, trails and breadcrumbs for a given
//! role and entitlement set, and validates catalog/policy files.
//!
//! Logs go to stderr so `--json` output on stdout stays machine-readable.

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use nav_core::{NavConfig, NavigationResolver};
use nav_model::{walk, Entitlements, NavContext};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn cli() -> Command {
    Command::new("navctl")
        .version(nav_core::VERSION)
        .about("Resolve role- and license-aware navigation")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML config selecting catalog, policy and log filter"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("context")
                .long("context")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .conflicts_with_all([
                    "role",
                    "no-atlvs",
                    "opendeck",
                    "ghxstship",
                    "projects-assigned",
                ])
                .help("JSON file with role, entitlements and projectsAssignedCount"),
        )
        .arg(
            Arg::new("role")
                .long("role")
                .global(true)
                .help("Raw role string, normalized like a session role"),
        )
        .arg(
            Arg::new("no-atlvs")
                .long("no-atlvs")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Disable the ATLVS license"),
        )
        .arg(
            Arg::new("opendeck")
                .long("opendeck")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable the OPENDECK license"),
        )
        .arg(
            Arg::new("ghxstship")
                .long("ghxstship")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable the GHXSTSHIP license"),
        )
        .arg(
            Arg::new("projects-assigned")
                .long("projects-assigned")
                .global(true)
                .default_value("0")
                .value_parser(value_parser!(u32))
                .help("Number of projects the user is assigned to"),
        )
        .subcommand(Command::new("sections").about("Print sidebar sections"))
        .subcommand(Command::new("commands").about("Print command palette entries"))
        .subcommand(
            Command::new("trail")
                .about("Print the catalog trail for a URL path")
                .arg(Arg::new("path").required(true).help("URL path, e.g. /finance/budgets")),
        )
        .subcommand(
            Command::new("breadcrumbs")
                .about("Print breadcrumbs and sibling options for a URL path")
                .arg(Arg::new("path").required(true).help("URL path, e.g. /finance/budgets")),
        )
        .subcommand(Command::new("validate").about("Load and cross-check catalog and policy"))
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<NavConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => NavConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(NavConfig::default()),
    }
}

fn load_context(matches: &ArgMatches) -> anyhow::Result<NavContext> {
    if let Some(path) = matches.get_one::<PathBuf>("context") {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read context {}", path.display()))?;
        return serde_json::from_str(&source)
            .with_context(|| format!("invalid context {}", path.display()));
    }

    let entitlements = Entitlements::new(
        !matches.get_flag("no-atlvs"),
        matches.get_flag("opendeck"),
        matches.get_flag("ghxstship"),
    );
    let assigned = matches.get_one::<u32>("projects-assigned").copied().unwrap_or_default();

    let ctx = NavContext::new(matches.get_one::<String>("role").map(String::as_str))
        .with_entitlements(entitlements)
        .with_projects_assigned(assigned);
    tracing::debug!("Context from flags: {:?}", ctx);
    Ok(ctx)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[derive(Serialize)]
struct TrailEntry<'a> {
    id: &'a str,
    label: &'a str,
    path: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidationReport {
    valid: bool,
    modules: usize,
    pages: usize,
    error: Option<String>,
}

fn validate(config: &NavConfig, json: bool) -> anyhow::Result<ExitCode> {
    let report = match NavigationResolver::from_config(config) {
        Ok(resolver) => ValidationReport {
            valid: true,
            modules: resolver.catalog().len(),
            pages: walk(resolver.catalog().nodes()).count(),
            error: None,
        },
        Err(err) => ValidationReport {
            valid: false,
            modules: 0,
            pages: 0,
            error: Some(err.to_string()),
        },
    };

    if json {
        print_json(&report)?;
    } else if let Some(error) = &report.error {
        println!("invalid: {error}");
    } else {
        println!("ok: {} modules, {} routes", report.modules, report.pages);
    }

    Ok(if report.valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    let config = load_config(matches)?;
    init_logging(&config.log_filter);
    let json = matches.get_flag("json");

    if let Some(("validate", _)) = matches.subcommand() {
        return validate(&config, json);
    }

    let resolver = NavigationResolver::from_config(&config).context("failed to build resolver")?;

    match matches.subcommand() {
        Some(("sections", _)) => {
            let sections = resolver.sections(&load_context(matches)?);
            if json {
                print_json(&sections)?;
            } else {
                for section in &sections {
                    println!("{}", section.label);
                    for item in &section.items {
                        println!("  {:<24} {}", item.label, item.href);
                    }
                }
            }
        }
        Some(("commands", _)) => {
            let commands = resolver.commands(&load_context(matches)?);
            if json {
                print_json(&commands)?;
            } else {
                for command in &commands {
                    println!("{:<40} {}", command.id, command.href);
                }
            }
        }
        Some(("trail", args)) => {
            let path = args.get_one::<String>("path").map(String::as_str).unwrap_or_default();
            let trail: Vec<TrailEntry<'_>> = resolver
                .trail(path)
                .into_iter()
                .map(|node| TrailEntry {
                    id: &node.id,
                    label: &node.label,
                    path: node.path.as_deref(),
                })
                .collect();

            if json {
                print_json(&trail)?;
            } else if trail.is_empty() {
                println!("(no match)");
            } else {
                let labels: Vec<&str> = trail.iter().map(|e| e.label).collect();
                println!("{}", labels.join(" > "));
            }
        }
        Some(("breadcrumbs", args)) => {
            let path = args.get_one::<String>("path").map(String::as_str).unwrap_or_default();
            let crumbs = resolver.breadcrumbs(path);

            if json {
                print_json(&crumbs)?;
            } else {
                let labels: Vec<&str> = crumbs.crumbs.iter().map(|c| c.label.as_str()).collect();
                let marker = if crumbs.resolved { "" } else { " (from url)" };
                println!("{}{marker}", labels.join(" / "));
                for option in &crumbs.siblings {
                    println!("  {:<24} {}", option.label, option.href);
                }
            }
        }
        _ => {}
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    match run(&matches) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
