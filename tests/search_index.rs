use catalog_core::persistence::{load_index, save_index};
use catalog_core::{search_index, CatalogError, CourseSearchEntry, SearchIndex};

fn course(n: usize) -> CourseSearchEntry {
    CourseSearchEntry {
        slug: format!("dept-{n}"),
        course_code: format!("DEPT {n}"),
        course_title: format!("Topic number {n}"),
        course_context: if n % 2 == 0 { Some(format!("Context {n}")) } else { None },
    }
}

#[test]
fn loaded_index_mirrors_the_asset() {
    let source: Vec<CourseSearchEntry> = (1000..1040).map(course).collect();
    let json = serde_json::to_string(&source).unwrap();

    let index = SearchIndex::from_json_str(&json).unwrap();
    assert_eq!(index.len(), source.len());
    assert_eq!(index.entries(), source.as_slice());
}

#[test]
fn bundled_index_is_shared_and_stable() {
    let first = search_index().unwrap();
    let second = search_index().unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.entries(), second.entries());
    assert!(first.get_by_code("math 3339").is_some());
}

#[test]
fn bundled_asset_file_matches_compiled_index() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/search_index.json");
    let from_disk = load_index(&path).unwrap();
    assert_eq!(from_disk.entries(), search_index().unwrap().entries());
}

#[test]
fn normalized_asset_reloads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("normalized.json");
    save_index(search_index().unwrap(), &out).unwrap();
    assert_eq!(
        load_index(&out).unwrap().entries(),
        search_index().unwrap().entries()
    );
}

#[test]
fn bundled_search_finds_courses_by_code_and_title() {
    let index = search_index().unwrap();

    let calculus: Vec<&str> = index
        .search("calculus", 10)
        .iter()
        .map(|hit| hit.entry.course_code.as_str())
        .collect();
    assert_eq!(calculus, ["MATH 1431", "MATH 1432"]);

    let hits = index.search("cosc 3", 10);
    assert!(hits.iter().all(|hit| hit.entry.course_code.starts_with("COSC 3")));
    assert_eq!(hits.len(), 2);

    let data_structures: Vec<&str> = index
        .search("data structures", 10)
        .iter()
        .map(|hit| hit.entry.slug.as_str())
        .collect();
    assert_eq!(data_structures, ["cosc-2436", "cosc-3320"]);
}

#[test]
fn bundled_typo_suggestion() {
    let index = search_index().unwrap();
    assert!(index.search("mth 3339", 10).is_empty());
    let suggested: Vec<&str> = index
        .suggest_codes("mth 3339")
        .iter()
        .map(|e| e.course_code.as_str())
        .collect();
    assert_eq!(suggested, ["MATH 3339"]);
}

#[test]
fn duplicate_codes_fail_the_load() {
    let json = r#"[
        {"slug": "a", "courseCode": "MATH 3339", "courseTitle": "A"},
        {"slug": "b", "courseCode": "math 3339 ", "courseTitle": "B"}
    ]"#;
    assert!(matches!(
        SearchIndex::from_json_str(json),
        Err(CatalogError::DuplicateCode(_))
    ));
}
