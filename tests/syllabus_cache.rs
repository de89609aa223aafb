use catalog_core::source::DirSyllabusSource;
use catalog_core::{SyllabusCache, SyllabusRecord};

fn syllabus(term: &str) -> SyllabusRecord {
    SyllabusRecord {
        term: term.to_string(),
        section: Some("10001".to_string()),
        instructor: None,
        url: format!("https://example.edu/{}.pdf", term.to_lowercase().replace(' ', "-")),
    }
}

#[test]
fn set_then_get_across_spellings() {
    let mut cache = SyllabusCache::new();
    let a = vec![syllabus("Fall 2024")];

    cache.set("math 3339", a.clone());
    assert_eq!(cache.get("MATH 3339"), Some(a.as_slice()));
    assert_eq!(cache.get("\tMath 3339  "), Some(a.as_slice()));
    assert_eq!(cache.get("MATH 3340"), None);
}

#[test]
fn never_set_codes_are_absent() {
    let cache = SyllabusCache::new();
    for code in ["MATH 3339", "", "   ", "cosc 1336"] {
        assert!(cache.get(code).is_none());
    }
}

#[test]
fn setting_twice_does_not_accumulate() {
    let mut cache = SyllabusCache::new();
    let x = vec![syllabus("Fall 2024"), syllabus("Spring 2025")];
    cache.set("PHYS 1301", x.clone());
    cache.set("PHYS 1301", x.clone());
    assert_eq!(cache.get("PHYS 1301"), Some(x.as_slice()));
}

#[test]
fn later_set_wins() {
    let mut cache = SyllabusCache::new();
    let x = vec![syllabus("Fall 2024")];
    let y = vec![syllabus("Spring 2025"), syllabus("Summer 2025")];
    cache.set("ENGL 1301", x);
    cache.set("engl 1301", y.clone());
    assert_eq!(cache.get("ENGL 1301"), Some(y.as_slice()));
}

#[test]
fn separate_caches_do_not_share_state() {
    let mut first = SyllabusCache::new();
    let second = SyllabusCache::new();
    first.set("MATH 3339", vec![syllabus("Fall 2024")]);
    assert!(second.get("MATH 3339").is_none());
}

#[test]
fn bundled_syllabus_directory_fills_the_cache() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/syllabi");
    let source = DirSyllabusSource::new(dir);
    let mut cache = SyllabusCache::new();

    let terms: Vec<String> = cache
        .get_or_fetch("math 3339", &source)
        .unwrap()
        .iter()
        .map(|s| s.term.clone())
        .collect();
    assert_eq!(terms, ["Fall 2024", "Spring 2025"]);
    assert!(cache.get_or_fetch("HIST 1377", &source).unwrap().is_empty());
    assert_eq!(cache.len(), 2);
}
