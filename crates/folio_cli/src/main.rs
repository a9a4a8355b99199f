//! Command-line probe for the portfolio core.
//!
//! # Responsibility
//! - Print catalog queries and route resolution without a browser.
//! - Replay a navigation session against a terminal host.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::catalog::load_builtin;
use folio_core::{
    core_version, init_from_config, AppConfig, Catalog, CategoryFilter, NavigationController,
    NavigationHost, Project, ProjectDetailView, ProjectService, Route, ScrollBehavior,
};
use log::info;
use serde_json::{json, Value};
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", about = "Portfolio catalog and navigation probe", version)]
struct Cli {
    /// JSON config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Absolute directory for rolling log files; overrides the config.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Print machine-readable JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the core version.
    Version,
    /// List categories present in the catalog.
    Categories,
    /// List projects, optionally filtered (`All`, `WebXR`, `Unity XR`, ...).
    Projects {
        #[arg(long, default_value = "All")]
        category: String,
    },
    /// Show one project case study.
    Project { id: String },
    /// Resolve a location path to its route and highlighted page.
    Route { path: String },
    /// Replay navigation requests starting from `--from`.
    Navigate {
        #[arg(long, default_value = "/")]
        from: String,
        /// Page ids (`home`, `about`, `projects`, `contact`).
        #[arg(required = true)]
        pages: Vec<String>,
    },
}

/// Host that reports effects on stdout and settles transitions immediately.
struct TerminalHost {
    quiet: bool,
}

impl NavigationHost for TerminalHost {
    fn push_location(&mut self, path: &str) {
        if !self.quiet {
            println!("  push {path}");
        }
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        if !self.quiet {
            println!("  scroll top ({behavior:?})");
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
        config.validate()?;
    }
    init_from_config(&config).map_err(anyhow::Error::msg)?;

    let catalog = load_builtin(config.duplicate_ids).context("loading project catalog")?;
    info!(
        "event=cli_start module=cli status=ok projects={}",
        catalog.len()
    );

    match cli.command {
        Command::Version => println!("folio_core {}", core_version()),
        Command::Categories => print_categories(&catalog, cli.json)?,
        Command::Projects { category } => print_projects(&catalog, &category, cli.json)?,
        Command::Project { id } => print_project(&catalog, &id, cli.json)?,
        Command::Route { path } => print_route(&path, cli.json)?,
        Command::Navigate { from, pages } => {
            replay_navigation(&from, &pages, config.scroll_behavior, cli.json)?
        }
    }
    Ok(())
}

fn print_categories(catalog: &Catalog, json: bool) -> Result<()> {
    let categories = catalog.get_all_categories();
    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }
    for category in categories {
        println!("{category}");
    }
    Ok(())
}

fn print_projects(catalog: &Catalog, category: &str, json: bool) -> Result<()> {
    let filter: CategoryFilter = category
        .parse()
        .with_context(|| format!("invalid category filter `{category}`"))?;
    let service = ProjectService::new(catalog);
    let listing = service.list_projects(filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing.projects)?);
        return Ok(());
    }
    if listing.is_empty() {
        println!("No projects found in this category.");
        return Ok(());
    }
    for project in &listing.projects {
        println!(
            "{:<24} {:<12} {}",
            project.id,
            project.category,
            project.display_title()
        );
    }
    Ok(())
}

fn print_project(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let service = ProjectService::new(catalog);
    let view = service.open_detail(id);

    if json {
        println!("{}", serde_json::to_string_pretty(&detail_json(&view)?)?);
        return Ok(());
    }
    print!("{}", detail_text(&view));
    Ok(())
}

/// JSON body for the detail page: the record, or a not-found marker.
fn detail_json(view: &ProjectDetailView<'_>) -> Result<Value> {
    match view {
        ProjectDetailView::Found(project) => Ok(serde_json::to_value(project)?),
        ProjectDetailView::NotFound { requested_id } => Ok(json!({
            "found": false,
            "requestedId": requested_id,
        })),
    }
}

/// Terminal rendering of the detail page. Not-found points back to the listing.
fn detail_text(view: &ProjectDetailView<'_>) -> String {
    match view {
        ProjectDetailView::Found(project) => project_text(project),
        ProjectDetailView::NotFound { requested_id } => format!(
            "Project not found: {requested_id}\nBack to projects: folio projects\n"
        ),
    }
}

fn project_text(project: &Project) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_project(&mut out, project);
    out
}

fn write_project(out: &mut String, project: &Project) -> std::fmt::Result {
    writeln!(out, "{}", project.title)?;
    writeln!(out, "{}", project.headline())?;
    writeln!(out, "[{}] {}", project.category, project.tags.join(", "))?;
    if let Some(url) = &project.links.demo_url {
        writeln!(out, "demo:   {url}")?;
    }
    if let Some(url) = &project.links.github_url {
        writeln!(out, "source: {url}")?;
    }

    let Some(study) = &project.case_study else {
        return Ok(());
    };
    if let Some(problem) = &study.problem_statement {
        writeln!(out, "\nProblem Statement\n  {problem}")?;
    }
    if !study.system_overview.is_empty() {
        writeln!(out, "\nSystem Overview")?;
        for paragraph in &study.system_overview {
            writeln!(out, "  {paragraph}")?;
        }
    }
    for (heading, notes) in [
        ("Key Decisions", &study.key_decisions),
        ("Asset Considerations", &study.asset_considerations),
    ] {
        if notes.is_empty() {
            continue;
        }
        writeln!(out, "\n{heading}")?;
        for note in notes {
            writeln!(out, "  - {}: {}", note.title, note.description)?;
        }
    }
    if let Some(outcomes) = &study.outcomes {
        writeln!(out, "\nWhat Worked")?;
        for line in &outcomes.what_worked {
            writeln!(out, "  + {line}")?;
        }
        writeln!(out, "\nWhat To Improve")?;
        for line in &outcomes.what_improve {
            writeln!(out, "  - {line}")?;
        }
    }
    Ok(())
}

fn print_route(path: &str, json: bool) -> Result<()> {
    let route = Route::parse(path);
    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
        return Ok(());
    }
    println!("route: {route:?}");
    println!("page:  {}", route.page());
    println!("key:   {}", route.key());
    Ok(())
}

fn replay_navigation(
    from: &str,
    pages: &[String],
    scroll_behavior: ScrollBehavior,
    json: bool,
) -> Result<()> {
    let host = TerminalHost { quiet: json };
    let mut controller = NavigationController::new(host, from).with_scroll_behavior(scroll_behavior);
    controller.enter_finished();

    let mut snapshots = Vec::with_capacity(pages.len());
    for page_id in pages {
        if !json {
            println!("navigate {page_id}");
        }
        controller.navigate(page_id);
        controller.exit_finished();
        controller.enter_finished();

        let snapshot = controller.snapshot();
        if !json {
            let items: Vec<String> = controller
                .navigation_items()
                .iter()
                .map(|item| {
                    if item.active {
                        format!("[{}]", item.label)
                    } else {
                        item.label.to_string()
                    }
                })
                .collect();
            println!(
                "  at {} page={} menu_open={} nav: {}",
                snapshot.state.location(),
                snapshot.state.current_page(),
                snapshot.state.mobile_menu_open(),
                items.join(" ")
            );
        }
        snapshots.push(snapshot);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshots)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{detail_json, detail_text};
    use folio_core::{
        CaseStudy, Catalog, Category, DuplicateIdPolicy, Outcomes, Project, ProjectService,
    };
    use serde_json::json;

    fn catalog() -> Catalog {
        let mut with_study = Project::new("a", "Project A", Category::WebXr, "first");
        with_study.tags = vec!["WebXR".to_string(), "Three.js".to_string()];
        with_study.case_study = Some(CaseStudy {
            problem_statement: Some("Teams needed shared spaces.".to_string()),
            outcomes: Some(Outcomes {
                what_worked: vec!["fast joins".to_string()],
                what_improve: vec!["load time".to_string()],
            }),
            ..CaseStudy::default()
        });
        Catalog::from_projects(
            vec![
                with_study,
                Project::new("b", "Project B", Category::Simulation, "second"),
            ],
            DuplicateIdPolicy::FirstWins,
        )
        .expect("catalog")
    }

    #[test]
    fn missing_project_renders_not_found_with_listing_link() {
        let catalog = catalog();
        let service = ProjectService::new(&catalog);
        let view = service.open_detail("removed-project");

        assert_eq!(
            detail_text(&view),
            "Project not found: removed-project\nBack to projects: folio projects\n"
        );
        assert_eq!(
            detail_json(&view).unwrap(),
            json!({ "found": false, "requestedId": "removed-project" })
        );
    }

    #[test]
    fn found_project_renders_record_and_case_study() {
        let catalog = catalog();
        let service = ProjectService::new(&catalog);
        let view = service.open_detail("a");

        let text = detail_text(&view);
        assert!(text.starts_with("Project A\nfirst\n[WebXR] WebXR, Three.js\n"));
        assert!(text.contains("\nProblem Statement\n  Teams needed shared spaces.\n"));
        assert!(text.contains("\nWhat Worked\n  + fast joins\n"));
        assert!(text.contains("\nWhat To Improve\n  - load time\n"));

        let value = detail_json(&view).unwrap();
        assert_eq!(value["id"], "a");
        assert_eq!(value["problemStatement"], "Teams needed shared spaces.");
    }

    #[test]
    fn summary_only_project_skips_case_study_sections() {
        let catalog = catalog();
        let service = ProjectService::new(&catalog);

        let text = detail_text(&service.open_detail("b"));
        assert_eq!(text, "Project B\nsecond\n[Simulation] \n");
    }
}
