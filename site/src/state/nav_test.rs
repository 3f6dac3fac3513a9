use super::*;
use crate::data::projects::resolve_project;

// =============================================================
// Page
// =============================================================

#[test]
fn page_default_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

#[test]
fn page_all_lists_each_variant_once() {
    for (i, a) in Page::ALL.iter().enumerate() {
        for (j, b) in Page::ALL.iter().enumerate() {
            assert_eq!(i == j, a == b);
        }
    }
}

#[test]
fn page_slugs_are_unique_and_lowercase() {
    let slugs: Vec<&str> = Page::ALL.iter().map(|p| p.slug()).collect();
    for slug in &slugs {
        assert_eq!(*slug, slug.to_lowercase());
        assert_eq!(slugs.iter().filter(|s| *s == slug).count(), 1);
    }
}

#[test]
fn page_serializes_as_snake_case_slug() {
    for page in Page::ALL {
        let json = serde_json::to_string(&page).expect("page should serialize");
        assert_eq!(json, format!("\"{}\"", page.slug()));
        let back: Page = serde_json::from_str(&json).expect("page should deserialize");
        assert_eq!(back, page);
    }
}

#[test]
fn page_rejects_gallery() {
    assert!(serde_json::from_str::<Page>("\"gallery\"").is_err());
}

// =============================================================
// NavState defaults
// =============================================================

#[test]
fn nav_state_default_shows_home() {
    let state = NavState::default();
    assert_eq!(state.page, Page::Home);
    assert_eq!(state.view_key(), ViewKey::Home);
}

#[test]
fn nav_state_default_selects_default_project() {
    let state = NavState::default();
    assert_eq!(state.project_id, DEFAULT_PROJECT_ID);
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_mounts_exactly_the_target_view() {
    for target in Page::ALL {
        let mut state = NavState::default();
        state.navigate(target);
        assert_eq!(state.page, target);
        assert_eq!(state.view_key().page(), target);
    }
}

#[test]
fn navigate_reaches_every_page_from_every_page() {
    for from in Page::ALL {
        for to in Page::ALL {
            let mut state = NavState::default();
            state.navigate(from);
            state.navigate(to);
            assert_eq!(state.view_key().page(), to, "{from:?} -> {to:?}");
        }
    }
}

#[test]
fn navigate_keeps_selected_project() {
    let mut state = NavState::default();
    state.navigate_to_project("kalys-house");
    state.navigate(Page::Work);
    state.navigate(Page::Project);
    assert_eq!(state.view_key(), ViewKey::Project("kalys-house".to_owned()));
}

#[test]
fn navigate_to_same_page_keeps_view_key() {
    let mut state = NavState::default();
    state.navigate(Page::Expertise);
    let before = state.view_key();
    state.navigate(Page::Expertise);
    assert_eq!(state.view_key(), before);
}

#[test]
fn contact_then_home_unmounts_contact() {
    let mut state = NavState::default();
    state.navigate(Page::Contact);
    let contact_key = state.view_key();
    state.navigate(Page::Home);
    assert_eq!(state.view_key(), ViewKey::Home);
    assert_ne!(state.view_key(), contact_key);
}

// =============================================================
// navigate_to_project
// =============================================================

#[test]
fn navigate_to_project_sets_page_and_id() {
    let mut state = NavState::default();
    state.navigate_to_project("kalys-house");
    assert_eq!(state.page, Page::Project);
    assert_eq!(state.project_id, "kalys-house");
}

#[test]
fn navigate_to_project_accepts_unknown_id() {
    let mut state = NavState::default();
    state.navigate(Page::Contact);
    state.navigate_to_project("not-a-real-id");
    assert_eq!(state.page, Page::Project);
    assert_eq!(state.view_key(), ViewKey::Project("not-a-real-id".to_owned()));
}

#[test]
fn navigate_to_other_project_changes_view_key() {
    let mut state = NavState::default();
    state.navigate_to_project("fix-the-country");
    let first = state.view_key();
    state.navigate_to_project("kalys-house");
    assert_ne!(state.view_key(), first);
}

#[test]
fn navigate_to_known_project_renders_its_record() {
    let mut state = NavState::default();
    state.navigate_to_project("kalys-house");
    let record = resolve_project(&state.project_id);
    assert_eq!(record.title, "Kaly's House");
    let labels: Vec<&str> = record.fragments.iter().map(|f| f.label).collect();
    assert_eq!(
        labels,
        ["ARCHIVE_01", "ARCHIVE_02", "ARCHIVE_03", "ARCHIVE_04", "ARCHIVE_05", "ARCHIVE_06"]
    );
}

#[test]
fn navigate_to_unknown_project_renders_fallback_record() {
    let mut state = NavState::default();
    state.navigate_to_project("not-a-real-id");
    let record = resolve_project(&state.project_id);
    assert_eq!(record.id, DEFAULT_PROJECT_ID);
    assert_eq!(record.title, "Fix The Country");
    assert!(!record.fragments.is_empty());
}
