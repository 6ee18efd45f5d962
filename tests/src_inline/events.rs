use super::*;

#[test]
fn test_parse_segment_events() {
    assert_eq!(
        parse_event("set research B").unwrap(),
        Some(SessionEvent::Activate(Competency::Research, GradeRank::B))
    );
    assert_eq!(
        parse_event("  HOVER fail-fix 4 ").unwrap(),
        Some(SessionEvent::HoverEnter(Competency::FailFix, GradeRank::A))
    );
    assert_eq!(parse_event("leave").unwrap(), Some(SessionEvent::HoverLeave));
}

#[test]
fn test_parse_skips_blank_and_comments() {
    assert_eq!(parse_event("").unwrap(), None);
    assert_eq!(parse_event("   # set research A").unwrap(), None);
}

#[test]
fn test_parse_free_text_keeps_spaces() {
    assert_eq!(
        parse_event("student  Jane Doe").unwrap(),
        Some(SessionEvent::Student("Jane Doe".to_string()))
    );
    assert_eq!(
        parse_event("level 6").unwrap(),
        Some(SessionEvent::Level(QualificationLevel::Level6))
    );
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        parse_event("grade research A"),
        Err(EventParseError::UnknownCommand(_))
    ));
    assert!(matches!(
        parse_event("set research"),
        Err(EventParseError::MissingArgument { command: "set", .. })
    ));
    assert!(matches!(
        parse_event("set design A"),
        Err(EventParseError::Competency(_))
    ));
    assert!(matches!(
        parse_event("set research E"),
        Err(EventParseError::Grade(_))
    ));
    assert!(matches!(
        parse_event("level"),
        Err(EventParseError::MissingArgument { command: "level", .. })
    ));
    assert!(matches!(
        parse_event("level 9"),
        Err(EventParseError::Level(_))
    ));
}

#[test]
fn test_apply_replays_pointer_sequence() {
    let mut session = Session::new();
    let script = [
        "hover research C",
        "set research C",
        "hover research D",
        "hover research A",
        "leave",
        "export",
    ];
    let outcomes: Vec<_> = script
        .iter()
        .map(|line| {
            let event = parse_event(line).unwrap().unwrap();
            apply_event(&mut session, &event)
        })
        .collect();

    assert_eq!(
        outcomes,
        vec![
            EventOutcome::Applied,
            EventOutcome::Applied,
            EventOutcome::HoverIgnored,
            EventOutcome::Applied,
            EventOutcome::Applied,
            EventOutcome::ExportRequested,
        ]
    );
    assert_eq!(
        session.state().selection(Competency::Research),
        Some(GradeRank::C)
    );
    assert!(session.state().hover().is_none());
}

#[test]
fn test_apply_clear_resets_session() {
    let mut session = Session::new();
    for line in ["student Jane", "level 6", "set evaluate A", "clear"] {
        let event = parse_event(line).unwrap().unwrap();
        apply_event(&mut session, &event);
    }
    assert!(session.identity().is_empty());
    assert_eq!(session.level(), QualificationLevel::Level5);
    assert_eq!(session.state().assessed_count(), 0);
}

#[test]
fn test_ignored_hover_event_drops_stale_preview() {
    let mut session = Session::new();
    for line in ["set research C", "hover research A"] {
        let event = parse_event(line).unwrap().unwrap();
        assert_eq!(apply_event(&mut session, &event), EventOutcome::Applied);
    }
    let event = parse_event("hover research F").unwrap().unwrap();
    assert_eq!(apply_event(&mut session, &event), EventOutcome::HoverIgnored);
    assert!(session.state().hover().is_none());
}
