use super::*;

// =============================================================
// get_project_by_id
// =============================================================

#[test]
fn get_project_by_id_finds_every_listed_record() {
    for project in &PROJECTS {
        let found = get_project_by_id(project.id).expect("listed id should resolve");
        assert_eq!(found.id, project.id);
        assert_eq!(found.title, project.title);
    }
}

#[test]
fn get_project_by_id_returns_none_for_unknown_ids() {
    for id in ["", "not-a-real-id", "KALYS-HOUSE", "kalys-house ", "24-hours-with-kalyjay", "gallery"] {
        assert!(get_project_by_id(id).is_none(), "{id:?} should not resolve");
    }
}

#[test]
fn project_ids_are_unique() {
    for (i, a) in PROJECTS.iter().enumerate() {
        for b in PROJECTS.iter().skip(i + 1) {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn default_project_is_listed() {
    assert!(get_project_by_id(DEFAULT_PROJECT_ID).is_some());
}

// =============================================================
// Record contents
// =============================================================

#[test]
fn kalys_house_fragments_are_in_source_order() {
    let project = get_project_by_id("kalys-house").expect("kalys-house is listed");
    assert_eq!(project.title, "Kaly's House");
    assert_eq!(project.fragments.len(), 6);
    assert_eq!(project.fragments[0].meta, "PRIMARY_BANNER");
    assert_eq!(project.fragments[0].span, Span::Full);
    assert_eq!(project.fragments[1].aspect, Aspect::Portrait);
    assert!((project.fragments[1].parallax - 0.12).abs() < f64::EPSILON);
    for (i, frag) in project.fragments.iter().enumerate() {
        assert_eq!(frag.label, format!("ARCHIVE_{:02}", i + 1));
    }
}

#[test]
fn every_record_has_media_and_credits() {
    for project in &PROJECTS {
        assert!(!project.fragments.is_empty(), "{} has no fragments", project.id);
        assert!(!project.team.is_empty(), "{} has no team", project.id);
        assert!(!project.services.is_empty(), "{} has no services", project.id);
        assert!(project.image_url.starts_with("https://"));
    }
}

#[test]
fn unit_code_uppercases_and_replaces_dashes() {
    let project = get_project_by_id("kalys-house").expect("kalys-house is listed");
    assert_eq!(project.unit_code(), "UNIT_KALYS_HOUSE");
}

#[test]
fn span_and_aspect_classes_are_distinct() {
    assert_ne!(Span::Full.class(), Span::Narrow.class());
    assert_ne!(Span::Narrow.class(), Span::Wide.class());
    assert_ne!(Aspect::Panorama.class(), Aspect::Portrait.class());
    assert_ne!(Aspect::Portrait.class(), Aspect::Landscape.class());
}

// =============================================================
// resolve_project / next_project
// =============================================================

#[test]
fn resolve_project_returns_match_when_present() {
    assert_eq!(resolve_project("kalys-house").id, "kalys-house");
}

#[test]
fn resolve_project_falls_back_to_default() {
    let project = resolve_project("not-a-real-id");
    assert_eq!(project.id, DEFAULT_PROJECT_ID);
    assert_eq!(project.fragments, get_project_by_id(DEFAULT_PROJECT_ID).map(|p| p.fragments).unwrap_or_default());
}

#[test]
fn next_project_cycles_through_listing() {
    let mut id = PROJECTS[0].id;
    let mut seen = Vec::new();
    for _ in 0..PROJECTS.len() {
        seen.push(id);
        id = next_project(id).id;
    }
    assert_eq!(id, PROJECTS[0].id);
    assert_eq!(seen.len(), PROJECTS.len());
}

#[test]
fn next_project_of_unknown_id_follows_default() {
    assert_eq!(next_project("not-a-real-id").id, next_project(DEFAULT_PROJECT_ID).id);
}
