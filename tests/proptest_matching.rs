//! Property-based tests for the matching engine.
//!
//! Ensures the documented invariants hold across arbitrary inputs: score
//! bounds, band containment, category thresholds, determinism, and
//! improvement-path caps — with no panics anywhere.

use proptest::option;
use proptest::prelude::*;

use unimatch::matching::{Category, match_program};
use unimatch::model::{Achievements, ProgramContext, StudentProfile};

fn arb_student() -> impl Strategy<Value = StudentProfile> {
    (
        option::of(0.0_f64..6.0),
        option::of(prop_oneof![Just(4.0_f64), Just(5.0), Just(10.0), Just(100.0)]),
        option::of(0.0_f64..9.5),
        option::of(0_i32..=120),
        option::of(0_i32..=1600),
        option::of(0.0_f64..200_000.0),
        prop_oneof![Just(String::new()), Just("KZ".to_string()), Just("US".to_string())],
        (0_u32..4, 0_u32..4, 0_u32..4, 0_u32..4, 0_u32..4),
    )
        .prop_map(
            |(gpa, gpa_scale, ielts, toefl, sat, budget_year, citizenship, ach)| StudentProfile {
                gpa,
                gpa_scale,
                ielts,
                toefl,
                sat,
                budget_year,
                budget_currency: None,
                citizenship,
                graduation_year: None,
                achievements: Achievements {
                    olympiads: ach.0,
                    leadership: ach.1,
                    sports: ach.2,
                    volunteering: ach.3,
                    other: ach.4,
                },
            },
        )
}

fn arb_program() -> impl Strategy<Value = ProgramContext> {
    let averages = (
        option::of(0.0_f64..100.0),
        option::of(0.1_f64..5.0),
        option::of(4.0_f64..9.0),
        option::of(60_i32..=120),
        option::of(800_i32..=1600),
    );
    let money = (
        option::of(1_000.0_f64..150_000.0),
        any::<bool>(),
        prop::collection::vec(10.0_f64..=100.0, 0..3),
    );
    let eligibility = prop::collection::vec(
        prop_oneof![Just("KZ".to_string()), Just("DE".to_string())],
        0..2,
    );

    (averages, money, 0.8_f64..=1.4, eligibility).prop_map(
        |(
            (acceptance_rate, avg_gpa, avg_ielts, avg_toefl, avg_sat),
            (tuition_amount, has_scholarship, scholarship_coverages),
            competitive_factor,
            eligible_citizenships,
        )| {
            ProgramContext {
                id: "prog".into(),
                acceptance_rate,
                avg_gpa,
                avg_ielts,
                avg_toefl,
                avg_sat,
                tuition_amount,
                competitive_factor,
                has_scholarship,
                scholarship_coverages,
                eligible_citizenships,
                ..Default::default()
            }
        },
    )
}

proptest! {
    // 500 cases: the engine is O(1) per call, so broad coverage is cheap.
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn overall_score_is_bounded(student in arb_student(), program in arb_program()) {
        let result = match_program(&student, &program);
        prop_assert!((0..=100).contains(&result.overall_score));
    }

    #[test]
    fn category_follows_the_overall_score(student in arb_student(), program in arb_program()) {
        let result = match_program(&student, &program);
        let expected = match result.overall_score {
            s if s >= 70 => Category::Safety,
            s if s < 40 => Category::Reach,
            _ => Category::Target,
        };
        prop_assert_eq!(result.category, expected);
    }

    #[test]
    fn sub_scores_stay_in_their_bands(student in arb_student(), program in arb_program()) {
        let result = match_program(&student, &program);
        prop_assert!((0..=25).contains(&result.breakdown.gpa), "gpa {}", result.breakdown.gpa);
        prop_assert!((0..=20).contains(&result.breakdown.language));
        prop_assert!((0..=15).contains(&result.breakdown.tests));
        prop_assert!((0..=60).contains(&result.academic_score));
        prop_assert!((0..=30).contains(&result.competitive_score));
        prop_assert!((0..=20).contains(&result.financial_score));
        prop_assert!((0..=10).contains(&result.special_score));
        prop_assert_eq!(result.special_score, result.breakdown.extras);
    }

    #[test]
    fn matching_is_deterministic(student in arb_student(), program in arb_program()) {
        let first = match_program(&student, &program);
        let second = match_program(&student, &program);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn improvement_steps_capped_and_gated(student in arb_student(), program in arb_program()) {
        let result = match_program(&student, &program);
        let path = &result.improvement_path;
        prop_assert!(path.next_3_steps.len() <= 3);
        if result.overall_score >= 70 {
            prop_assert!(path.next_3_steps.is_empty());
            prop_assert_eq!(path.gap_points, 0);
        } else {
            prop_assert_eq!(path.gap_points, 70 - result.overall_score);
        }
        prop_assert_eq!(path.current_score, result.overall_score);
    }

    #[test]
    fn full_budget_coverage_always_scores_the_band(
        student in arb_student(),
        program in arb_program(),
        budget_margin in 0.0_f64..50_000.0,
    ) {
        let mut student = student;
        let mut program = program;
        let tuition = 42_000.0;
        program.tuition_amount = Some(tuition);
        student.budget_year = Some(tuition + budget_margin);

        let result = match_program(&student, &program);
        prop_assert_eq!(result.financial_score, 20);
        prop_assert!(result.financial_status.covered_by_budget);
    }

    #[test]
    fn empty_budget_without_scholarship_is_capped(
        student in arb_student(),
        program in arb_program(),
    ) {
        let mut student = student;
        let mut program = program;
        student.budget_year = Some(0.0);
        program.tuition_amount = Some(50_000.0);
        program.has_scholarship = false;

        let result = match_program(&student, &program);
        prop_assert!(result.financial_score <= 6);
    }

    #[test]
    fn reasons_are_never_empty_for_scored_programs(
        student in arb_student(),
        program in arb_program(),
    ) {
        // Achievements alone always log one reason, so every result
        // explains itself.
        let result = match_program(&student, &program);
        prop_assert!(!result.reasons.is_empty());
    }
}
