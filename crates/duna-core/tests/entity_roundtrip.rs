//! Serde roundtrip and JsonSchema validation tests for the wire contracts.

use chrono::{NaiveDate, TimeZone, Utc};
use schemars::schema_for;
use duna_core::entities::*;
use duna_core::enums::*;
use duna_core::identity::UserIdentity;
use duna_core::requests::*;
use duna_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_task() -> Task {
    let created = Utc.with_ymd_and_hms(2026, 5, 1, 8, 30, 0).unwrap();
    Task {
        id: 42,
        title: "Linear algebra problem set".into(),
        description: "Chapters 4 and 5".into(),
        status: TaskStatus::Pending,
        priority: Priority::High,
        deadline: Some(Utc.with_ymd_and_hms(2026, 5, 8, 23, 59, 0).unwrap()),
        category: Some("Math".into()),
        recurrence: Recurrence::Weekly,
        order: 3,
        created_at: created,
        updated_at: created,
        subtasks: vec![Subtask {
            id: 1,
            title: "Exercise 4.2".into(),
            status: TaskStatus::Completed,
            order: 0,
            created_at: Some(created),
            updated_at: None,
        }],
        days_until_deadline: Some(7),
        status_label: Some("upcoming".into()),
    }
}

roundtrip_and_validate!(task_roundtrip, Task, sample_task());

roundtrip_and_validate!(
    time_log_roundtrip,
    TimeLog,
    TimeLog {
        id: 9,
        duration_minutes: 45,
        estimated_minutes: Some(60),
        notes: "Focused session".into(),
        logged_date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
        created_at: None,
    }
);

roundtrip_and_validate!(
    note_roundtrip,
    Note,
    Note {
        id: 2,
        content: "Ask about eigenvalues in office hours".into(),
        created_at: Utc::now(),
        updated_at: None,
    }
);

roundtrip_and_validate!(
    comment_roundtrip,
    Comment,
    Comment {
        id: 5,
        content: "Looks good".into(),
        created_at: Utc::now(),
        updated_at: Some(Utc::now()),
        user: Some(CommentAuthor {
            username: "ana".into(),
        }),
    }
);

roundtrip_and_validate!(
    filter_preset_roundtrip,
    FilterPreset,
    FilterPreset {
        id: 1,
        name: "Urgent math".into(),
        priority_filter: "high".into(),
        category_filter: "Math".into(),
        status_filter: "all".into(),
        created_at: None,
    }
);

roundtrip_and_validate!(theme_roundtrip, Theme, Theme::default());

roundtrip_and_validate!(
    productivity_roundtrip,
    ProductivityStats,
    ProductivityStats {
        total_tasks_completed: 31,
        total_study_minutes: 1200,
        current_streak: 4,
        last_activity_date: NaiveDate::from_ymd_opt(2026, 5, 3),
    }
);

roundtrip_and_validate!(
    draft_roundtrip,
    TaskDraft,
    TaskDraft::from_task(&sample_task())
);

roundtrip_and_validate!(
    token_pair_roundtrip,
    TokenPair,
    TokenPair {
        access: "header.payload.sig".into(),
        refresh: "refresh-token".into(),
    }
);

roundtrip_and_validate!(
    identity_roundtrip,
    UserIdentity,
    UserIdentity {
        username: "ana".into(),
    }
);

#[test]
fn draft_from_task_keeps_editable_fields() {
    let task = sample_task();
    let draft = TaskDraft::from_task(&task);
    assert_eq!(draft.title, task.title);
    assert_eq!(draft.category, "Math");
    assert_eq!(draft.recurrence, Recurrence::Weekly);
    assert_eq!(draft.deadline, task.deadline);
}

#[test]
fn goal_roundtrip() {
    let goal = Goal {
        id: 4,
        title: "Ten tasks a week".into(),
        target_value: 10,
        current_value: 6,
        unit: "tasks".into(),
    };
    let json = serde_json::to_string(&goal).unwrap();
    let recovered: Goal = serde_json::from_str(&json).unwrap();
    pretty_assertions::assert_eq!(recovered, goal);
}
