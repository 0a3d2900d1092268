use std::sync::Arc;

use ielts_core::model::{Test, TestId, TestSkill, UserRole};
use services::Registration;
use storage::{Storage, StorageError, TestRepository};

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_skills_with_counts() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("IELTS Practice"), "missing app name in {html}");
    assert!(html.contains("Listening"), "missing skill card in {html}");
    assert!(html.contains("Browse 2 tests"), "missing test count in {html}");
    assert!(html.contains("Sign in"), "missing sign in link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_greets_signed_in_user() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness
        .services
        .auth()
        .sign_in("cand@example.com", UserRole::Candidate)
        .await
        .expect("sign in");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Signed in as cand@example.com"), "missing user in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_list_renders_cards_for_skill() {
    let mut harness = setup_view_harness(ViewKind::TestList(TestSkill::Reading));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("IELTS Reading Tests"), "missing heading in {html}");
    assert!(
        html.contains("IELTS Academic Reading Practice Test 1"),
        "missing card in {html}"
    );
    assert!(!html.contains("Listening Practice Test"), "wrong skill in {html}");
    assert!(html.contains("Start test"), "missing start link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn listening_exam_shows_full_timer_and_questions() {
    let mut harness = setup_view_harness(ViewKind::Exam(TestSkill::Listening, "listening-test-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("40:00"), "missing timer in {html}");
    assert!(html.contains("0/5 answered"), "missing progress in {html}");
    assert!(html.contains("A studio flat"), "missing choice in {html}");
    assert!(html.contains("sample-listening.mp3"), "missing audio in {html}");
    assert!(html.contains("Submit test"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reading_exam_renders_passage_and_toolbar() {
    let mut harness = setup_view_harness(ViewKind::Exam(TestSkill::Reading, "reading-test-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Tang Dynasty"), "missing passage in {html}");
    assert!(html.contains("Clear highlights"), "missing toolbar in {html}");
    assert!(html.contains("60:00"), "missing timer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn writing_exam_renders_task_editor() {
    let mut harness = setup_view_harness(ViewKind::Exam(TestSkill::Writing, "writing-test-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Task 1"), "missing task tab in {html}");
    assert!(
        html.contains("0 words (minimum 150 words)"),
        "missing word count in {html}"
    );
    assert!(html.contains("writing-response"), "missing editor in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_for_unknown_test_shows_not_found() {
    let mut harness = setup_view_harness(ViewKind::Exam(TestSkill::Reading, "reading-test-99"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Test not found"), "missing not found in {html}");
    assert!(html.contains("Back to Reading tests"), "missing back link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exam_with_mismatched_skill_shows_not_found() {
    let mut harness = setup_view_harness(ViewKind::Exam(TestSkill::Writing, "listening-test-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Test not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_renders_band_score() {
    let mut harness =
        setup_view_harness(ViewKind::Results(TestSkill::Reading, "reading-result-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("IELTS Academic Reading Practice Test 1"),
        "missing title in {html}"
    );
    assert!(html.contains("7.5"), "missing band score in {html}");
    assert!(html.contains("28/40 correct"), "missing ratio in {html}");
    assert!(html.contains("Passage 1"), "missing section score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_links_to_neighbouring_tests() {
    let mut harness =
        setup_view_harness(ViewKind::Results(TestSkill::Reading, "reading-result-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Retake this test"), "missing retake link in {html}");
    assert!(
        html.contains("Next test: IELTS Academic Reading Practice Test 2"),
        "missing next link in {html}"
    );
    assert!(!html.contains("Previous test:"), "first test has no previous in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_lists_results_for_signed_in_user() {
    let mut harness = setup_view_harness(ViewKind::History);
    harness
        .services
        .auth()
        .sign_in("cand@example.com", UserRole::Candidate)
        .await
        .expect("sign in");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Your Test Results"), "missing heading in {html}");
    assert!(html.contains("Search results..."), "missing search in {html}");
    assert!(
        html.contains("IELTS General Training Writing Practice Test"),
        "missing writing result in {html}"
    );
    assert!(html.contains("Completed on Dec 5, 2023"), "missing date in {html}");
    assert!(html.contains("score-high"), "missing score colour in {html}");
    assert!(html.contains("Time spent: 54 minutes"), "missing time spent in {html}");
    assert_eq!(html.matches("View Details").count(), 6, "expected six cards in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn history_asks_anonymous_users_to_sign_in() {
    let mut harness = setup_view_harness(ViewKind::History);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Sign in to see the tests"), "missing prompt in {html}");
    assert!(!html.contains("View Details"), "cards leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn register_view_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Register);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Create Your Account"), "missing heading in {html}");
    assert!(html.contains("register-name"), "missing name input in {html}");
    assert!(html.contains("register-confirm"), "missing confirm input in {html}");
    assert!(html.contains("Create account"), "missing submit in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn registered_user_sees_history() {
    let mut harness = setup_view_harness(ViewKind::History);
    let form = Registration {
        full_name: "Ana Lima".to_string(),
        email: "ana@example.com".to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
    };
    let user = harness.services.auth().register(&form).await.expect("register");
    assert_eq!(user.role, UserRole::Candidate);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("View Details"), "missing cards in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_for_generated_id_is_not_found() {
    let mut harness = setup_view_harness(ViewKind::Results(
        TestSkill::Listening,
        "listening-result-6a3b0c1e-0000-4000-8000-000000000000",
    ));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Result not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_rejects_wrong_skill() {
    let mut harness =
        setup_view_harness(ViewKind::Results(TestSkill::Writing, "reading-result-1"));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Result not found"), "missing not found in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn content_manager_asks_anonymous_users_to_sign_in() {
    let mut harness = setup_view_harness(ViewKind::ContentManager);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Please sign in"), "missing sign in prompt in {html}");
    assert!(!html.contains("New test"), "form leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn content_manager_turns_away_candidates() {
    let mut harness = setup_view_harness(ViewKind::ContentManager);
    harness
        .services
        .auth()
        .sign_in("cand@example.com", UserRole::Candidate)
        .await
        .expect("sign in");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Only admins"), "missing denial in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn content_manager_lists_tests_for_admins() {
    let mut harness = setup_view_harness(ViewKind::ContentManager);
    harness
        .services
        .auth()
        .sign_in("admin@example.com", UserRole::Admin)
        .await
        .expect("sign in");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("New test"), "missing create form in {html}");
    assert!(
        html.contains("IELTS General Training Writing Practice Test"),
        "missing row in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn login_view_renders_form() {
    let mut harness = setup_view_harness(ViewKind::Login);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("login-email"), "missing email input in {html}");
    assert!(html.contains("Content manager"), "missing role option in {html}");
}

struct FailingTests;

#[async_trait::async_trait]
impl TestRepository for FailingTests {
    async fn get_test(&self, _id: &TestId) -> Result<Option<Test>, StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }

    async fn list_tests(&self) -> Result<Vec<Test>, StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }

    async fn list_tests_by_skill(&self, _skill: TestSkill) -> Result<Vec<Test>, StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }

    async fn upsert_test(&self, _test: &Test) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }

    async fn delete_test(&self, _id: &TestId) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn storage_failures_render_error_state() {
    let mut storage = Storage::seeded();
    storage.tests = Arc::new(FailingTests);

    let mut harness = setup_view_harness_with_storage(ViewKind::Home, &storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");

    let mut harness =
        setup_view_harness_with_storage(ViewKind::TestList(TestSkill::Listening), &storage);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
}
