use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("assessment_wheel_main_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn render_args(cli: Cli) -> RenderArgs {
    match cli.command {
        Command::Render(args) => args,
        other => panic!("expected render, got {other:?}"),
    }
}

#[test]
fn test_parse_render_defaults() {
    let cli = Cli::try_parse_from(["assessment-wheel", "render", "--research", "B"]).unwrap();
    let args = render_args(cli);
    assert_eq!(args.grades.research, Some(GradeRank::B));
    assert_eq!(args.grades.evaluate, None);
    assert_eq!(args.level, QualificationLevel::Level5);
    assert_eq!(args.output.format, WheelFormat::Svg);
    assert_eq!(args.output.out, PathBuf::from("."));
    assert!(!args.output.force);
}

#[test]
fn test_parse_render_full() {
    let cli = Cli::try_parse_from([
        "assessment-wheel",
        "render",
        "--research",
        "a",
        "--fail-fix",
        "0",
        "--hover",
        "concepts:C",
        "--level",
        "6",
        "--student",
        "Jane",
        "--format",
        "svgz",
        "--out",
        "out",
        "--force",
    ])
    .unwrap();
    let args = render_args(cli);
    assert_eq!(args.grades.research, Some(GradeRank::A));
    assert_eq!(args.grades.fail_fix, Some(GradeRank::F));
    assert_eq!(
        args.hover,
        Some(HoverPointer::new(Competency::Concepts, GradeRank::C))
    );
    assert_eq!(args.level, QualificationLevel::Level6);
    assert_eq!(args.output.format, WheelFormat::Svgz);
    assert!(args.output.force);
}

#[test]
fn test_parse_rejects_bad_grade() {
    assert!(Cli::try_parse_from(["assessment-wheel", "render", "--research", "E"]).is_err());
    assert!(Cli::try_parse_from(["assessment-wheel", "render", "--hover", "research"]).is_err());
}

#[test]
fn test_session_from_args_applies_hover_rules() {
    let cli = Cli::try_parse_from([
        "assessment-wheel",
        "render",
        "--concepts",
        "B",
        "--hover",
        "concepts:C",
    ])
    .unwrap();
    let session = session_from_args(&render_args(cli));
    assert_eq!(
        session.state().selection(Competency::Concepts),
        Some(GradeRank::B)
    );
    assert!(session.state().hover().is_none());
}

#[test]
fn test_play_script_writes_reports() {
    let dir = make_temp_dir();
    let script = dir.join("session.txt");
    std::fs::write(
        &script,
        "# full session\nstudent Jane\nproject Kindness\nset research A\nset concepts B\nset fail-fix C\nset communicate D\nset evaluate F\nexport\n",
    )
    .unwrap();

    let args = PlayArgs {
        script,
        output: OutputArgs {
            out: dir.clone(),
            format: WheelFormat::Svg,
            force: false,
        },
    };
    run_play(&args, &Rubric::builtin()).unwrap();

    assert!(dir.join("summary.json").exists());
    assert!(dir.join("report.txt").exists());
    assert!(dir.join("Jane_Kindness_Assessment.svg").exists());
}

#[test]
fn test_play_reports_line_of_bad_event() {
    let dir = make_temp_dir();
    let script = dir.join("broken.txt");
    std::fs::write(&script, "set research A\n\nset research Q\n").unwrap();

    let args = PlayArgs {
        script,
        output: OutputArgs {
            out: dir,
            format: WheelFormat::Svg,
            force: true,
        },
    };
    let err = run_play(&args, &Rubric::builtin()).unwrap_err();
    match err {
        AppError::Script { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_play_incomplete_without_force_fails() {
    let dir = make_temp_dir();
    let script = dir.join("partial.txt");
    std::fs::write(&script, "set research A\n").unwrap();

    let args = PlayArgs {
        script,
        output: OutputArgs {
            out: dir.clone(),
            format: WheelFormat::Svg,
            force: false,
        },
    };
    assert!(matches!(
        run_play(&args, &Rubric::builtin()),
        Err(AppError::Export(_))
    ));
    assert!(!dir.join("summary.json").exists());
}

#[test]
fn test_export_reports_returns_refusal_without_writing() {
    let dir = make_temp_dir();
    let mut session = Session::new();
    session.activate_segment(Competency::Evaluate, GradeRank::A);
    let config = RunConfig {
        out_dir: dir.clone(),
        format: WheelFormat::Svg,
        allow_incomplete: false,
    };

    let err = export_reports(
        &session,
        &Rubric::builtin(),
        &WheelGeometry::new(WHEEL_CENTER),
        &config,
    )
    .unwrap_err();
    match err {
        AppError::Export(ExportError::NotFullyAssessed { missing }) => {
            assert_eq!(missing.len(), 4);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}
