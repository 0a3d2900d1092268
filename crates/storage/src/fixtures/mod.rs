//! Static catalog and canned results loaded by `InMemoryRepository::seeded`.

mod catalog;
mod results;

pub use results::mock_results;
pub use catalog::mock_tests;

/// Author recorded on every seeded test.
pub const CREATED_BY: &str = "admin-user";

#[cfg(test)]
mod tests {
    use super::*;
    use ielts_core::model::{QuestionId, Test, TestResult, TestSkill};

    #[test]
    fn listening_test_1_has_five_questions_over_two_sections() {
        let tests = mock_tests();
        let test = tests
            .iter()
            .find(|t| t.id().as_str() == "listening-test-1")
            .unwrap();
        assert_eq!(test.skill(), TestSkill::Listening);
        assert_eq!(test.sections().len(), 2);
        assert_eq!(test.sections()[0].questions.len(), 3);
        assert_eq!(test.total_question_count(), 5);
        assert_eq!(test.meta().duration, 40);
    }

    #[test]
    fn reading_matching_question_expects_a_list() {
        let tests = mock_tests();
        let test = tests
            .iter()
            .find(|t| t.id().as_str() == "reading-test-1")
            .unwrap();
        let q4 = test.find_question(&QuestionId::new("q4")).unwrap();
        assert!(q4.kind.expects_list());
        assert_eq!(q4.correct_answer.as_list().map(<[String]>::len), Some(2));
        assert_eq!(q4.marks, 2);
    }

    #[test]
    fn writing_tests_have_both_targets() {
        for test in mock_tests() {
            if let Test::Writing(writing) = test {
                let targets: Vec<u32> = writing.tasks().iter().map(|t| t.word_count).collect();
                assert_eq!(targets, [150, 250]);
            }
        }
    }

    #[test]
    fn every_result_points_at_a_seeded_test() {
        let tests = mock_tests();
        let results = mock_results();
        assert_eq!(results.len(), 6);
        for result in &results {
            let test = tests
                .iter()
                .find(|t| t.id() == &result.summary().test_id)
                .unwrap();
            assert_eq!(test.skill(), result.skill());
        }
    }

    #[test]
    fn generated_review_marks_every_fourth_passage_question_wrong() {
        let results = mock_results();
        let Some(TestResult::Reading(reading)) = results.first() else {
            panic!("reading result first");
        };
        let passage1 = &reading.question_review[0];
        assert_eq!(passage1.questions.len(), 14);
        // indices 0, 4, 8, 12 are wrong
        assert_eq!(passage1.correct_count(), 10);
    }
}
