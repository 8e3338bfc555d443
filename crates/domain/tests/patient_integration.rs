//! Integration tests for the patient service.
//!
//! These tests run the full read-modify-write cycle against an in-memory
//! store and check what ends up persisted.

use std::sync::Arc;

use common::{PatientId, PatientRecord};
use domain::{
    DomainError, NewPatient, PatientService, PatientUpdate, PatientView, SortField, SortOrder,
    ValidationError, Verdict,
};
use patient_store::{InMemoryPatientStore, PatientStore};

/// Helper to create a test patient service
fn create_service() -> PatientService<InMemoryPatientStore> {
    PatientService::new(InMemoryPatientStore::new())
}

fn new_patient(id: &str, name: &str, height: f64, weight: f64) -> NewPatient {
    NewPatient {
        id: id.to_string(),
        name: name.to_string(),
        city: "Kolkata".to_string(),
        age: 41,
        gender: "male".to_string(),
        height,
        weight,
    }
}

mod create_and_read {
    use super::*;

    #[tokio::test]
    async fn create_then_get_with_other_case() {
        let service = create_service();

        let id = service
            .create(new_patient("p1", "Arjun Das", 1.75, 70.0))
            .await
            .unwrap();
        assert_eq!(id.as_str(), "P1");

        let record = service.get(&PatientId::new("p1")).await.unwrap();
        assert_eq!(record.name, "Arjun Das");

        let record = service.get(&PatientId::new("P1")).await.unwrap();
        assert_eq!(record.name, "Arjun Das");
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected_and_original_kept() {
        let service = create_service();
        service
            .create(new_patient("P1", "Original", 1.75, 70.0))
            .await
            .unwrap();

        let err = service
            .create(new_patient("p1", "Impostor", 1.60, 50.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::AlreadyExists(ref id) if id.as_str() == "P1"));

        let record = service.get(&PatientId::new("P1")).await.unwrap();
        assert_eq!(record.name, "Original");
        assert_eq!(service.store().patient_count().await, 1);
    }

    #[tokio::test]
    async fn invalid_create_does_not_touch_store() {
        let service = create_service();

        let err = service
            .create(new_patient("P1", "Nobody", 0.0, 70.0))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidHeight(_))
        ));
        assert_eq!(service.store().patient_count().await, 0);
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let service = create_service();
        let err = service.get(&PatientId::new("P404")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_returns_insertion_order() {
        let service = create_service();
        for id in ["P3", "P1", "P2"] {
            service
                .create(new_patient(id, id, 1.7, 65.0))
                .await
                .unwrap();
        }

        let collection = service.list().await.unwrap();
        let ids: Vec<_> = collection.ids().map(PatientId::as_str).collect();
        assert_eq!(ids, vec!["P3", "P1", "P2"]);
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn weight_only_update_preserves_other_attributes() {
        let service = create_service();
        service
            .create(new_patient("P1", "Arjun Das", 1.75, 70.0))
            .await
            .unwrap();
        let before = service.get(&PatientId::new("P1")).await.unwrap();
        assert_eq!(PatientView::from(before.clone()).verdict, Verdict::NormalWeight);

        let update = PatientUpdate {
            weight: Some(95.0),
            ..PatientUpdate::default()
        };
        service.update(&PatientId::new("p1"), update).await.unwrap();

        let after = service.get(&PatientId::new("P1")).await.unwrap();
        assert_eq!(
            after,
            PatientRecord {
                weight: 95.0,
                ..before
            }
        );

        let view = PatientView::from(after);
        assert_eq!(view.bmi, 31.02);
        assert_eq!(view.verdict, Verdict::Obesity);
    }

    #[tokio::test]
    async fn update_ignores_body_id() {
        let service = create_service();
        service
            .create(new_patient("P1", "Arjun Das", 1.75, 70.0))
            .await
            .unwrap();

        let update = PatientUpdate {
            id: Some("P2".to_string()),
            city: Some("Shillong".to_string()),
            ..PatientUpdate::default()
        };
        service.update(&PatientId::new("P1"), update).await.unwrap();

        let collection = service.list().await.unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(
            collection.get(&PatientId::new("P1")).unwrap().city,
            "Shillong"
        );
    }

    #[tokio::test]
    async fn update_unknown_is_not_found() {
        let service = create_service();
        let err = service
            .update(&PatientId::new("P404"), PatientUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_merged_record_is_not_stored() {
        let service = create_service();
        service
            .create(new_patient("P1", "Arjun Das", 1.75, 70.0))
            .await
            .unwrap();

        let update = PatientUpdate {
            name: Some("Changed".to_string()),
            weight: Some(-1.0),
            ..PatientUpdate::default()
        };
        let err = service
            .update(&PatientId::new("P1"), update)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let record = service.get(&PatientId::new("P1")).await.unwrap();
        assert_eq!(record.name, "Arjun Das");
        assert_eq!(record.weight, 70.0);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let service = create_service();
        service
            .create(new_patient("P1", "Arjun Das", 1.75, 70.0))
            .await
            .unwrap();

        service.delete(&PatientId::new("p1")).await.unwrap();

        let err = service.get(&PatientId::new("P1")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(service.store().patient_count().await, 0);
    }

    #[tokio::test]
    async fn delete_unknown_is_not_found() {
        let service = create_service();
        let err = service.delete(&PatientId::new("P1")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}

mod sorting {
    use super::*;

    #[tokio::test]
    async fn sort_by_bmi_desc() {
        let service = create_service();
        service
            .create(new_patient("P1", "Lean", 1.80, 60.0))
            .await
            .unwrap();
        service
            .create(new_patient("P2", "Heavy", 1.60, 90.0))
            .await
            .unwrap();
        service
            .create(new_patient("P3", "Middle", 1.70, 70.0))
            .await
            .unwrap();

        let sorted = service
            .sorted(SortField::Bmi, SortOrder::Desc)
            .await
            .unwrap();
        let names: Vec<_> = sorted.iter().map(|(_, r)| r.name.as_str()).collect();
        assert_eq!(names, vec!["Heavy", "Middle", "Lean"]);
    }
}

mod concurrency {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_are_all_persisted() {
        let service = Arc::new(create_service());

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move {
                    service
                        .create(new_patient(&format!("P{i}"), "Concurrent", 1.7, 65.0))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let collection = service.store().load().await.unwrap();
        assert_eq!(collection.len(), 20);
    }
}
