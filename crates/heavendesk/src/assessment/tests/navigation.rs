use crate::assessment::catalog::{total_questions, Section, CATALOG};
use crate::assessment::navigation::{Advance, AnswerSheet, NavigationError, QuizCursor};

fn complete_section(sheet: &mut AnswerSheet, section: Section, option: usize) {
    for index in 0..section.definition().questions.len() {
        sheet
            .select(section, index, option)
            .expect("catalog question accepts option");
    }
}

#[test]
fn cursor_starts_on_first_question() {
    let cursor = QuizCursor::start();
    assert!(cursor.is_first());
    assert_eq!(cursor.section().key, "frontDesk");
    assert_eq!(cursor.question().map(|q| q.id), Some(CATALOG[0].questions[0].id));
    assert_eq!(cursor.global_index(), 0);

    let expected = 100.0 / total_questions() as f32;
    assert!((cursor.progress_percent() - expected).abs() < f32::EPSILON * 100.0);
}

#[test]
fn answering_moves_within_section_and_stops_at_its_end() {
    let mut cursor = QuizCursor::start();
    for expected in 1..6 {
        cursor = cursor.after_answer();
        assert_eq!(cursor.question_index, expected);
    }
    assert!(cursor.is_last_question_in_section());

    let stayed = cursor.after_answer();
    assert_eq!(stayed, cursor);
    assert_eq!(stayed.section_index, 0);
}

#[test]
fn next_is_blocked_until_section_is_complete() {
    let mut sheet = AnswerSheet::new();
    let cursor = QuizCursor {
        section_index: 0,
        question_index: 5,
    };
    sheet.select(Section::FrontDesk, 0, 2).expect("valid");
    assert_eq!(cursor.next(&sheet), Advance::Blocked);

    complete_section(&mut sheet, Section::FrontDesk, 1);
    assert_eq!(
        cursor.next(&sheet),
        Advance::Moved(QuizCursor {
            section_index: 1,
            question_index: 0,
        })
    );
}

#[test]
fn completing_last_section_requests_submission() {
    let mut sheet = AnswerSheet::new();
    complete_section(&mut sheet, Section::TechStack, 0);
    let cursor = QuizCursor {
        section_index: CATALOG.len() - 1,
        question_index: 5,
    };
    assert!(cursor.is_last_section());
    assert_eq!(cursor.next(&sheet), Advance::Submit);
    assert!((cursor.progress_percent() - 100.0).abs() < 0.001);
}

#[test]
fn back_crosses_into_previous_section() {
    let cursor = QuizCursor {
        section_index: 2,
        question_index: 0,
    };
    assert_eq!(
        cursor.back(),
        QuizCursor {
            section_index: 1,
            question_index: 5,
        }
    );

    let cursor = QuizCursor {
        section_index: 2,
        question_index: 3,
    };
    assert_eq!(cursor.back().question_index, 2);
    assert_eq!(QuizCursor::start().back(), QuizCursor::start());
}

#[test]
fn global_index_counts_previous_sections() {
    let cursor = QuizCursor {
        section_index: 3,
        question_index: 2,
    };
    assert_eq!(cursor.global_index(), 20);
}

#[test]
fn select_rejects_out_of_range_choices() {
    let mut sheet = AnswerSheet::new();
    assert_eq!(
        sheet.select(Section::Sales, 0, 4),
        Err(NavigationError::UnknownOption(4))
    );
    assert_eq!(
        sheet.select(Section::Sales, 6, 0),
        Err(NavigationError::UnknownQuestion {
            section: Section::Sales,
            index: 6,
        })
    );
    assert_eq!(sheet.answered_count(), 0);
}

#[test]
fn reselecting_replaces_previous_answer() {
    let mut sheet = AnswerSheet::new();
    sheet.select(Section::Support, 1, 3).expect("valid");
    sheet.select(Section::Support, 1, 0).expect("valid");
    assert_eq!(sheet.answer(Section::Support, 1), Some(0));
    assert_eq!(sheet.answered_count(), 1);
}

#[test]
fn raw_answers_cover_every_question_with_zero_defaults() {
    let mut sheet = AnswerSheet::new();
    sheet.select(Section::Marketing, 2, 3).expect("valid");

    let raw = sheet.to_raw_answers();
    assert_eq!(raw.len(), CATALOG.len());
    for section in Section::ALL {
        let codes = raw.section(section.key()).expect("section present");
        assert_eq!(codes.len(), 6);
    }
    assert_eq!(raw.section("marketing"), Some(&[0, 0, 3, 0, 0, 0][..]));
}
