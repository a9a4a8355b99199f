use folio_core::catalog::{builtin, load_builtin};
use folio_core::{
    get_all_categories, get_project_by_id, get_projects_by_category, Catalog, CatalogError,
    Category, DuplicateIdPolicy, Project,
};

fn scenario_catalog() -> Catalog {
    Catalog::from_projects(
        vec![
            Project::new("a", "Project A", Category::WebXr, "first"),
            Project::new("b", "Project B", Category::Simulation, "second"),
        ],
        DuplicateIdPolicy::FirstWins,
    )
    .expect("scenario catalog")
}

#[test]
fn scenario_queries_match_expected_results() {
    let catalog = scenario_catalog();

    let webxr: Vec<&str> = catalog
        .get_projects_by_category(Category::WebXr)
        .iter()
        .map(|project| project.id.as_str())
        .collect();
    assert_eq!(webxr, vec!["a"]);
    assert_eq!(
        catalog.get_all_categories(),
        vec![Category::WebXr, Category::Simulation]
    );
    assert!(catalog.get_project_by_id("c").is_none());
}

#[test]
fn builtin_catalog_loads_with_authored_duplicate() {
    let catalog = builtin();
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.duplicate_ids(), ["procedural-generator".to_string()]);

    let err = load_builtin(DuplicateIdPolicy::Reject).expect_err("strict load must fail");
    assert!(matches!(
        err,
        CatalogError::DuplicateId { ref id, first_index: 2, duplicate_index: 3 }
            if id == "procedural-generator"
    ));
}

#[test]
fn every_unique_builtin_id_resolves_to_its_record() {
    let catalog = builtin();
    for (index, project) in catalog.all().iter().enumerate() {
        let found = get_project_by_id(project.id.as_str()).expect("present id resolves");
        let first_index = catalog
            .all()
            .iter()
            .position(|candidate| candidate.id == project.id)
            .expect("position");
        assert!(std::ptr::eq(found, &catalog.all()[first_index]));
        if first_index == index {
            assert_eq!(found, project);
        }
    }
}

#[test]
fn duplicate_builtin_id_resolves_to_case_study_entry() {
    let first = get_project_by_id("procedural-generator").expect("present");
    assert!(first.has_case_study());
    let again = get_project_by_id("procedural-generator").expect("present");
    assert!(std::ptr::eq(first, again));
}

#[test]
fn missing_ids_are_not_found() {
    for id in ["", "c", "PROCEDURAL-GENERATOR", "experiments", "fluid-simulation "] {
        assert!(get_project_by_id(id).is_none(), "unexpected hit for `{id}`");
    }
}

#[test]
fn category_filter_preserves_catalog_order() {
    for category in Category::ALL {
        let filtered = get_projects_by_category(category);
        assert!(filtered.iter().all(|project| project.category == category));

        let expected: Vec<&str> = builtin()
            .all()
            .iter()
            .filter(|project| project.category == category)
            .map(|project| project.id.as_str())
            .collect();
        let actual: Vec<&str> = filtered.iter().map(|project| project.id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    let unity: Vec<&str> = get_projects_by_category(Category::UnityXr)
        .iter()
        .map(|project| project.id.as_str())
        .collect();
    assert_eq!(
        unity,
        vec![
            "unity-training",
            "procedural-generator",
            "procedural-generator",
            "ar-placement"
        ]
    );
}

#[test]
fn builtin_categories_are_first_seen_and_unique() {
    assert_eq!(
        get_all_categories(),
        vec![
            Category::WebXr,
            Category::UnityXr,
            Category::Simulation,
            Category::Experiments
        ]
    );
}

#[test]
fn category_with_no_projects_yields_empty_list() {
    let catalog = scenario_catalog();
    assert!(catalog
        .get_projects_by_category(Category::Experiments)
        .is_empty());
}

#[test]
fn builtin_catalog_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| get_all_categories().len()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), 4);
    }
}
