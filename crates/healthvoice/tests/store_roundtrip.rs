mod common;

use chrono::Duration;
use common::{fixed_now, sqlite_service};
use healthvoice_store::{export_jsonl, import_jsonl, LogStore};

fn seed(service: &healthvoice_insights::HealthService<healthvoice_store::SqliteLogStore>) {
    let notes = [
        ("alice", "headache, took Advil", 0),
        ("alice", "slept 7 hours, feeling calm", 1),
        ("bob", "so stressed about work, took Tylenol", 1),
        ("alice", "went to the gym, feeling great", 2),
        ("bob", "cough and fever", 5),
    ];
    for (owner, text, days_ago) in notes {
        service
            .record_note_at(text, Some(owner), fixed_now() - Duration::days(days_ago))
            .unwrap();
    }
}

#[test]
fn test_views_are_scoped_to_owner() {
    let temp = tempfile::TempDir::new().unwrap();
    let service = sqlite_service(temp.path());
    seed(&service);

    let alice = service.insights_at(7, Some("alice"), fixed_now()).unwrap();
    assert_eq!(alice.analysis_period.total_logs, 3);
    assert_eq!(alice.medications_timing[0].medication, "Advil");
    assert_eq!(alice.lifestyle_context.sleep.average_hours, Some(7.0));
    assert_eq!(alice.lifestyle_context.exercise.mentions, 1);
    assert_eq!(alice.lifestyle_context.stress.mentions, 0);

    let bob = service.trends_at(7, Some("bob"), fixed_now()).unwrap();
    assert_eq!(bob.total_logs, 2);
    assert_eq!(bob.medication_adherence.medications[0].name, "Tylenol");

    let everyone = service.clinical_summary_at(7, None, fixed_now()).unwrap();
    assert_eq!(everyone.total_logs, 5);
}

#[test]
fn test_export_import_keeps_views_identical() {
    let temp = tempfile::TempDir::new().unwrap();
    let source_dir = temp.path().join("source");
    let target_dir = temp.path().join("target");
    let file = temp.path().join("export.jsonl");

    let source = sqlite_service(&source_dir);
    seed(&source);
    assert_eq!(export_jsonl(source.store(), None, &file).unwrap(), 5);

    let target = sqlite_service(&target_dir);
    assert_eq!(import_jsonl(target.store(), &file).unwrap(), 5);
    assert_eq!(target.store().count().unwrap(), 5);

    for owner in [Some("alice"), Some("bob"), None] {
        assert_eq!(
            source.insights_at(7, owner, fixed_now()).unwrap(),
            target.insights_at(7, owner, fixed_now()).unwrap()
        );
        assert_eq!(
            source.trends_at(30, owner, fixed_now()).unwrap(),
            target.trends_at(30, owner, fixed_now()).unwrap()
        );
    }
}
