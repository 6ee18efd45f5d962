use super::*;

#[test]
fn test_builtin_rubric_is_total() {
    let rubric = Rubric::builtin();
    assert_eq!(rubric.validate(), Ok(()));
}

#[test]
fn test_lookup_level5_research_a() {
    let rubric = Rubric::builtin();
    let text = rubric.lookup(
        QualificationLevel::Level5,
        Competency::Research,
        Some(GradeRank::A),
    );
    assert_eq!(
        text,
        "Shows motivation and curiosity throughout the process. Analyses the brief to define the problem clearly. Investigates a wide range of reliable secondary sources, potentially primary too. Reflects critically on findings to develop original and relevant personal insights."
    );
}

#[test]
fn test_lookup_level6_fail_fix_f() {
    let rubric = Rubric::builtin();
    let text = rubric.lookup(
        QualificationLevel::Level6,
        Competency::FailFix,
        Some(GradeRank::F),
    );
    assert_eq!(
        text,
        "Ideas remain largely unchanged. No reflection or adaptation is evident in the process."
    );
}

#[test]
fn test_lookup_unassessed_sentinel() {
    let rubric = Rubric::builtin();
    for level in QualificationLevel::ALL {
        for competency in Competency::ALL {
            assert_eq!(rubric.lookup(level, competency, None), "Not assessed");
        }
    }
}

#[test]
fn test_levels_differ() {
    let rubric = Rubric::builtin();
    for competency in Competency::ALL {
        for rank in GradeRank::ALL {
            assert_ne!(
                rubric.entry(QualificationLevel::Level5, competency, rank),
                rubric.entry(QualificationLevel::Level6, competency, rank)
            );
        }
    }
}

#[test]
fn test_gap_is_reported() {
    let mut table = [level5::LEVEL5, level6::LEVEL6];
    table[1][Competency::Evaluate.index()][GradeRank::C.index()] = "  ";
    let err = Rubric::from_table(table).unwrap_err();
    assert_eq!(
        err,
        RubricGap {
            level: QualificationLevel::Level6,
            competency: Competency::Evaluate,
            rank: GradeRank::C,
        }
    );
}

#[test]
fn test_parse_level() {
    assert_eq!("5".parse(), Ok(QualificationLevel::Level5));
    assert_eq!("Level 6".parse(), Ok(QualificationLevel::Level6));
    assert_eq!(
        "Creative Thinking Qualification Level 6".parse(),
        Ok(QualificationLevel::Level6)
    );
    assert!("7".parse::<QualificationLevel>().is_err());
}
