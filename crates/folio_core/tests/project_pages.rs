use folio_core::{
    builtin_service, Catalog, Category, CategoryFilter, DuplicateIdPolicy, Project,
    ProjectDetailView, ProjectService,
};

fn small_service() -> ProjectService<Catalog> {
    let catalog = Catalog::from_projects(
        vec![
            Project::new("a", "Project A", Category::WebXr, "first"),
            Project::new("b", "Project B", Category::Simulation, "second"),
        ],
        DuplicateIdPolicy::FirstWins,
    )
    .expect("catalog");
    ProjectService::new(catalog)
}

#[test]
fn all_filter_lists_every_record_in_order() {
    let service = builtin_service();
    let listing = service.list_projects(CategoryFilter::All);
    assert_eq!(listing.len(), 10);
    assert_eq!(listing.projects[0].id, "webxr-collaboration");
    assert_eq!(listing.projects[9].id, "path-planning");
}

#[test]
fn category_filter_only_returns_matching_projects() {
    let service = builtin_service();
    let filter: CategoryFilter = "Experiments".parse().expect("filter label");
    let listing = service.list_projects(filter);

    assert_eq!(listing.filter, CategoryFilter::Only(Category::Experiments));
    let ids: Vec<&str> = listing.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["nn-visualization", "particle-benchmark"]);
    assert!(listing.projects.iter().all(|p| filter.matches(p)));
}

#[test]
fn empty_category_is_a_normal_listing_state() {
    let service = small_service();
    let listing = service.list_projects(CategoryFilter::Only(Category::UnityXr));
    assert!(listing.is_empty());
    assert_eq!(
        service.available_categories(),
        vec![Category::WebXr, Category::Simulation]
    );
}

#[test]
fn filter_options_lead_with_all() {
    let service = small_service();
    let labels: Vec<&str> = service
        .filter_options()
        .iter()
        .map(|option| option.label())
        .collect();
    assert_eq!(
        labels,
        vec!["All", "WebXR", "Unity XR", "Simulation", "Experiments"]
    );
}

#[test]
fn detail_resolves_fresh_each_call() {
    let service = small_service();

    let first = service.open_detail("a");
    let second = service.open_detail(" a ");
    assert_eq!(first, second);
    assert_eq!(first.project().map(|p| p.title.as_str()), Some("Project A"));

    let missing = service.open_detail("c");
    assert!(!missing.is_found());
    assert_eq!(
        missing,
        ProjectDetailView::NotFound {
            requested_id: "c".to_string()
        }
    );
}

#[test]
fn detail_for_summary_only_project_has_no_case_study() {
    let service = builtin_service();
    let project = service
        .open_detail("path-planning")
        .project()
        .expect("present");
    assert!(!project.has_case_study());
    assert_eq!(project.headline(), project.description);
}
