use super::*;
use crate::test_utils::setup_test_db;
use chrono::Duration;

#[test]
fn test_create_question() {
    let pool = setup_test_db();
    let pub_date = Utc::now();

    let question = create_question(&pool, "What's up?".to_string(), pub_date).unwrap();

    assert_eq!(question.get_question_text(), "What's up?");
    assert_eq!(question.get_pub_date(), pub_date);
}

#[test]
fn test_get_question_includes_future() {
    let pool = setup_test_db();
    let future = create_question(&pool, "Future question.".to_string(), Utc::now() + Duration::days(30)).unwrap();

    let retrieved = get_question(&pool, &future.get_id()).unwrap().unwrap();

    assert_eq!(retrieved, future);
}

#[test]
fn test_get_question_nonexistent() {
    let pool = setup_test_db();
    assert!(get_question(&pool, "nonexistent").unwrap().is_none());
}

#[test]
fn test_get_published_question_past() {
    let pool = setup_test_db();
    let now = Utc::now();
    let past = create_question(&pool, "Past Question.".to_string(), now - Duration::days(5)).unwrap();

    let retrieved = get_published_question(&pool, &past.get_id(), now).unwrap();

    assert_eq!(retrieved, Some(past));
}

#[test]
fn test_get_published_question_future_is_hidden() {
    let pool = setup_test_db();
    let now = Utc::now();
    let future = create_question(&pool, "Future question.".to_string(), now + Duration::days(5)).unwrap();

    assert!(get_published_question(&pool, &future.get_id(), now).unwrap().is_none());
}

#[test]
fn test_get_published_question_at_exact_pub_date() {
    let pool = setup_test_db();
    let now = Utc::now();
    let question = create_question(&pool, "Right now.".to_string(), now).unwrap();

    assert!(get_published_question(&pool, &question.get_id(), now).unwrap().is_some());
}

#[test]
fn test_get_published_question_nonexistent() {
    let pool = setup_test_db();
    assert!(get_published_question(&pool, "nonexistent", Utc::now()).unwrap().is_none());
}

#[test]
fn test_latest_questions_empty() {
    let pool = setup_test_db();
    assert!(latest_questions(&pool, Utc::now()).unwrap().is_empty());
}

#[test]
fn test_latest_questions_excludes_future() {
    let pool = setup_test_db();
    let now = Utc::now();
    let past = create_question(&pool, "Past question.".to_string(), now - Duration::days(30)).unwrap();
    create_question(&pool, "Future question.".to_string(), now + Duration::days(30)).unwrap();

    let latest = latest_questions(&pool, now).unwrap();

    assert_eq!(latest, vec![past]);
}

#[test]
fn test_latest_questions_newest_first() {
    let pool = setup_test_db();
    let now = Utc::now();
    let question1 = create_question(&pool, "Past question 1.".to_string(), now - Duration::days(30)).unwrap();
    let question2 = create_question(&pool, "Past question 2.".to_string(), now - Duration::days(5)).unwrap();

    let latest = latest_questions(&pool, now).unwrap();

    assert_eq!(latest, vec![question2, question1]);
}

#[test]
fn test_latest_questions_capped_at_five() {
    let pool = setup_test_db();
    let now = Utc::now();
    for days in 1..=7 {
        create_question(&pool, format!("Question {}", days), now - Duration::days(days)).unwrap();
    }

    let latest = latest_questions(&pool, now).unwrap();

    assert_eq!(latest.len(), LATEST_QUESTIONS_LIMIT);
    let texts: Vec<String> = latest.iter().map(|q| q.get_question_text()).collect();
    assert_eq!(texts, vec!["Question 1", "Question 2", "Question 3", "Question 4", "Question 5"]);
}

#[test]
fn test_list_questions_includes_everything() {
    let pool = setup_test_db();
    let now = Utc::now();
    let past = create_question(&pool, "Past".to_string(), now - Duration::days(3)).unwrap();
    let future = create_question(&pool, "Future".to_string(), now + Duration::days(3)).unwrap();

    let all = list_questions(&pool).unwrap();

    assert_eq!(all, vec![future, past]);
}
