//! End-to-end library workflow: register, plan coursework, study, reload, analyze.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use studytrack_core::{
    AnalyticsEngine, Course, CredentialHasher, Day, JsonStore, Roster, SaltedSha256,
    SessionController, SessionTask, SessionType, Student, Task, TaskStatus,
};

fn assigned() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn test_full_study_workflow() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("database.json");

    // Register
    let mut roster = Roster::open(JsonStore::new(&db_path)).unwrap();
    let mut student = Student::new("kiara@example.com", "B00777");
    student.set_password(&SaltedSha256, "hunter22").unwrap();
    roster.add_student(student).unwrap();

    // Plan coursework
    {
        let student = roster.get_student_mut("kiara@example.com").unwrap();
        student.add_course(Course::new("CSCI2134"));
        let lab = Task::new(student.next_task_id(), "Lab 4", assigned())
            .with_due_date("2026-10-20")
            .with_weight(40.0);
        student.add_task_to_course(lab, "CSCI2134").unwrap();
        let exam = Task::new(student.next_task_id(), "Final exam", assigned())
            .with_due_date("TBD")
            .with_weight(60.0);
        student.add_task_to_course(exam, "CSCI2134").unwrap();
    }

    // Study for 90 minutes on the lab
    {
        let student = roster.get_student_mut("kiara@example.com").unwrap();
        let mut controller = SessionController::new();
        let start = Utc.with_ymd_and_hms(2026, 10, 18, 14, 0, 0).unwrap();
        let lab = student.task(1).cloned();
        controller.start_session_at(start, SessionType::Study, lab.as_ref());
        let mut session = controller
            .stop_session_at(start + Duration::minutes(90), &mut student.tasks)
            .unwrap();
        session.session_id = student.next_session_id();
        student.add_study_session(session);
        assert_eq!(student.course("CSCI2134").unwrap().tasks[0].total_work_time, 90);
        student
            .update_task(1, |t| {
                t.status = TaskStatus::Done;
                t.points_earned = Some(85.0);
            })
            .unwrap();
    }
    roster.save().unwrap();

    // Reload from disk
    let roster = Roster::open(JsonStore::new(&db_path)).unwrap();
    let student = roster.get_student("kiara@example.com").unwrap();
    assert!(SaltedSha256.verify("hunter22", &student.password_hash));
    assert!(student.check_password(&SaltedSha256, "hunter22"));
    assert_eq!(student.study_sessions.len(), 1);
    assert_eq!(student.study_sessions[0].duration_minutes, 90);
    match &student.study_sessions[0].task {
        SessionTask::Record(task) => assert_eq!(task.title, "Lab 4"),
        other => panic!("expected resolved task, got {other:?}"),
    }

    let engine = AnalyticsEngine::new();
    let now = assigned().and_hms_opt(8, 0, 0).unwrap();

    // 1.5 h of work = 15 points, plus 50 for the finished lab
    let day = Day::all_of(student, assigned());
    assert_eq!(engine.daily_score(&day), 65.0);

    // 85% of 40 with the exam still ungraded
    let course = student.course("CSCI2134").unwrap();
    assert_eq!(engine.course_grade(course), 34.0);

    let rec = engine.recommend(student, now);
    assert_eq!(rec.task.map(|t| t.id), Some(2));
    assert_eq!(rec.message, "Priority Score: -1.0 (Weight: 60% / Days Left: ?)");
}

#[test]
fn test_login_with_wrong_password_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut roster = Roster::open(JsonStore::new(dir.path().join("db.json"))).unwrap();
    let mut student = Student::new("jules@example.com", "B00888");
    student.set_password(&SaltedSha256, "correct horse").unwrap();
    roster.add_student(student).unwrap();

    let student = roster.get_student("jules@example.com").unwrap();
    assert!(!student.check_password(&SaltedSha256, "battery staple"));
}
