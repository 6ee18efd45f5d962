use super::*;
use proptest::prelude::*;

fn competency() -> impl Strategy<Value = Competency> {
    prop::sample::select(Competency::ALL.to_vec())
}

fn grade() -> impl Strategy<Value = GradeRank> {
    prop::sample::select(GradeRank::ALL.to_vec())
}

fn maybe_grade() -> impl Strategy<Value = Option<GradeRank>> {
    prop::option::of(grade())
}

fn state_from(selections: &[Option<GradeRank>]) -> AssessmentState {
    let mut state = AssessmentState::new();
    for (c, s) in Competency::ALL.iter().zip(selections) {
        if let Some(rank) = s {
            state.set_grade(*c, *rank);
        }
    }
    state
}

#[test]
fn test_initial_state_is_blank() {
    let state = AssessmentState::new();
    assert_eq!(state.assessed_count(), 0);
    assert!(state.hover().is_none());
    assert!(!state.is_fully_assessed());
    for c in Competency::ALL {
        for r in GradeRank::ALL {
            assert_eq!(state.opacity_for(c, r), 0.0);
        }
    }
}

#[test]
fn test_research_b_end_to_end() {
    let mut state = AssessmentState::new();
    state.set_grade(Competency::Research, GradeRank::B);

    for r in [GradeRank::F, GradeRank::D, GradeRank::C, GradeRank::B] {
        assert_eq!(state.opacity_for(Competency::Research, r), r.opacity());
    }
    assert_eq!(state.opacity_for(Competency::Research, GradeRank::A), 0.0);
    assert!(!state.is_fully_assessed());

    state.set_grade(Competency::Concepts, GradeRank::A);
    state.set_grade(Competency::FailFix, GradeRank::F);
    state.set_grade(Competency::Communicate, GradeRank::C);
    assert!(!state.is_fully_assessed());
    assert_eq!(state.unassessed(), vec![Competency::Evaluate]);

    state.set_grade(Competency::Evaluate, GradeRank::D);
    assert!(state.is_fully_assessed());
}

#[test]
fn test_hover_above_selection_previews_single_ring() {
    let mut state = AssessmentState::new();
    state.set_grade(Competency::Evaluate, GradeRank::D);
    state.set_hover(Some(HoverPointer::new(Competency::Evaluate, GradeRank::A)));

    assert_eq!(state.opacity_for(Competency::Evaluate, GradeRank::A), 1.0);
    assert_eq!(state.opacity_for(Competency::Evaluate, GradeRank::B), 0.0);
    assert_eq!(state.opacity_for(Competency::Evaluate, GradeRank::C), 0.0);
    assert_eq!(state.opacity_for(Competency::Concepts, GradeRank::A), 0.0);
}

#[test]
fn test_hover_on_unassessed_competency() {
    let mut state = AssessmentState::new();
    state.set_hover(Some(HoverPointer::new(Competency::Concepts, GradeRank::C)));
    assert_eq!(state.opacity_for(Competency::Concepts, GradeRank::C), 0.50);
    assert_eq!(state.opacity_for(Competency::Concepts, GradeRank::D), 0.0);
}

#[test]
fn test_set_grade_overwrites_and_lowers() {
    let mut state = AssessmentState::new();
    state.set_grade(Competency::Research, GradeRank::A);
    state.set_grade(Competency::Research, GradeRank::D);
    assert_eq!(state.selection(Competency::Research), Some(GradeRank::D));
    assert_eq!(state.opacity_for(Competency::Research, GradeRank::C), 0.0);
    assert_eq!(state.opacity_for(Competency::Research, GradeRank::D), 0.35);
}

#[test]
fn test_should_show_hover() {
    let mut state = AssessmentState::new();
    assert!(state.should_show_hover(Competency::Research, GradeRank::F));
    state.set_grade(Competency::Research, GradeRank::C);
    assert!(!state.should_show_hover(Competency::Research, GradeRank::C));
    assert!(!state.should_show_hover(Competency::Research, GradeRank::D));
    assert!(state.should_show_hover(Competency::Research, GradeRank::B));
}

#[test]
fn test_without_hover_keeps_selections() {
    let mut state = AssessmentState::new();
    state.set_grade(Competency::Communicate, GradeRank::B);
    state.set_hover(Some(HoverPointer::new(Competency::Communicate, GradeRank::A)));
    let snapshot = state.without_hover();
    assert!(snapshot.hover().is_none());
    assert_eq!(snapshot.selection(Competency::Communicate), Some(GradeRank::B));
    assert!(state.hover().is_some());
}

#[test]
fn test_parse_hover_pointer() {
    let hover: HoverPointer = "fail-fix:b".parse().unwrap();
    assert_eq!(hover, HoverPointer::new(Competency::FailFix, GradeRank::B));
    assert!(matches!(
        "research".parse::<HoverPointer>(),
        Err(HoverParseError::Shape(_))
    ));
    assert!(matches!(
        "research:Z".parse::<HoverPointer>(),
        Err(HoverParseError::Grade(_))
    ));
}

proptest! {
    #[test]
    fn prop_unassessed_without_matching_hover_is_zero(
        c in competency(),
        r in grade(),
        hover in prop::option::of((competency(), grade())),
    ) {
        let mut state = AssessmentState::new();
        state.set_hover(hover.map(|(hc, hr)| HoverPointer::new(hc, hr)));
        prop_assume!(hover != Some((c, r)));
        prop_assert_eq!(state.opacity_for(c, r), 0.0);
    }

    #[test]
    fn prop_monotonic_fill(
        selections in prop::collection::vec(maybe_grade(), 5),
        c in competency(),
        r in grade(),
    ) {
        let state = state_from(&selections);
        match state.selection(c) {
            Some(s) if r <= s => prop_assert_eq!(state.opacity_for(c, r), r.opacity()),
            _ => prop_assert_eq!(state.opacity_for(c, r), 0.0),
        }
    }

    #[test]
    fn prop_hover_never_changes_selection(
        selections in prop::collection::vec(maybe_grade(), 5),
        hovers in prop::collection::vec(prop::option::of((competency(), grade())), 0..8),
    ) {
        let mut state = state_from(&selections);
        let before: Vec<_> = state.selections().collect();
        for h in hovers {
            state.set_hover(h.map(|(hc, hr)| HoverPointer::new(hc, hr)));
        }
        let after: Vec<_> = state.selections().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_clear_all_restores_initial(
        selections in prop::collection::vec(maybe_grade(), 5),
        hover in prop::option::of((competency(), grade())),
    ) {
        let mut state = state_from(&selections);
        state.set_hover(hover.map(|(hc, hr)| HoverPointer::new(hc, hr)));
        state.clear_all();
        prop_assert_eq!(state, AssessmentState::new());
    }

    #[test]
    fn prop_fully_assessed_iff_five_selected(
        selections in prop::collection::vec(maybe_grade(), 5),
    ) {
        let state = state_from(&selections);
        let n = selections.iter().filter(|s| s.is_some()).count();
        prop_assert_eq!(state.is_fully_assessed(), n == 5);
        prop_assert_eq!(state.assessed_count(), n);
    }
}
