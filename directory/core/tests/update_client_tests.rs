// Copyright (c) 2026 Patron Labs
// SPDX-License-Identifier: AGPL-3.0
//! Pipeline-order and fault-injection tests for the update use case.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use patron_core::application::{
    DirectoryError, ServiceOrigin, StandardUpdateClientUseCase, UpdateClientUseCase,
};
use patron_core::domain::client::{Client, ClientId, ClientPayload};
use patron_core::domain::repository::ClientRepository;
use patron_core::domain::services::{DocumentSynchronizer, NotificationSender, TransientFault};
use patron_core::infrastructure::repositories::InMemoryClientRepository;

struct RecordingNotifier {
    fail: bool,
    calls: AtomicUsize,
    last_email: Mutex<Option<String>>,
}

impl RecordingNotifier {
    fn healthy() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            calls: AtomicUsize::new(0),
            last_email: Mutex::new(None),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            calls: AtomicUsize::new(0),
            last_email: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationSender for RecordingNotifier {
    async fn send(&self, email: &str, _message: &str) -> Result<(), TransientFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_email.lock() = Some(email.to_string());
        if self.fail {
            return Err(TransientFault::Unavailable("injected fault".to_string()));
        }
        Ok(())
    }
}

struct RecordingDocSync {
    fail: bool,
    calls: AtomicUsize,
}

impl RecordingDocSync {
    fn healthy() -> Arc<Self> {
        Arc::new(Self {
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentSynchronizer for RecordingDocSync {
    async fn sync_documents(&self, _email: &str) -> Result<(), TransientFault> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TransientFault::Unavailable("injected fault".to_string()));
        }
        Ok(())
    }
}

async fn seeded_repository() -> Arc<InMemoryClientRepository> {
    let repo = Arc::new(InMemoryClientRepository::new());
    repo.create(&Client {
        id: ClientId::new("a"),
        first_name: "John".to_string(),
        last_name: "Smith".to_string(),
        email: "john.smith@example.com".to_string(),
        phone_number: "+18202820232".to_string(),
    })
    .await
    .unwrap();
    repo
}

fn patch() -> ClientPayload {
    ClientPayload {
        id: String::new(),
        first_name: "Johnny".to_string(),
        last_name: "Smithers".to_string(),
        email: "johnny@example.com".to_string(),
        phone_number: "+15550000000".to_string(),
    }
}

#[tokio::test]
async fn happy_path_overlays_patch_and_notifies_new_email() {
    let repo = seeded_repository().await;
    let notifier = RecordingNotifier::healthy();
    let docs = RecordingDocSync::healthy();
    let pipeline =
        StandardUpdateClientUseCase::new(repo.clone(), notifier.clone(), docs.clone());

    pipeline.handle(&ClientId::new("a"), patch()).await.unwrap();

    let stored = repo.get_by_id(&ClientId::new("a")).await.unwrap().unwrap();
    assert_eq!(stored.id, ClientId::new("a"));
    assert_eq!(stored.first_name, "Johnny");
    assert_eq!(stored.last_name, "Smithers");
    assert_eq!(stored.email, "johnny@example.com");
    assert_eq!(stored.phone_number, "+15550000000");

    assert_eq!(notifier.calls(), 1);
    assert_eq!(docs.calls(), 1);
    // The notification goes to the address from the patch, not the old one.
    assert_eq!(
        notifier.last_email.lock().as_deref(),
        Some("johnny@example.com")
    );
}

#[tokio::test]
async fn unknown_id_fails_before_any_collaborator_call() {
    let repo = Arc::new(InMemoryClientRepository::new());
    let notifier = RecordingNotifier::healthy();
    let docs = RecordingDocSync::healthy();
    let pipeline =
        StandardUpdateClientUseCase::new(repo.clone(), notifier.clone(), docs.clone());

    let err = pipeline
        .handle(&ClientId::new("missing"), patch())
        .await
        .unwrap_err();

    assert!(matches!(err, DirectoryError::NotFound));
    assert_eq!(notifier.calls(), 0);
    assert_eq!(docs.calls(), 0);
}

#[tokio::test]
async fn invalid_patch_short_circuits_before_any_effect() {
    let repo = seeded_repository().await;
    let notifier = RecordingNotifier::healthy();
    let docs = RecordingDocSync::healthy();
    let pipeline =
        StandardUpdateClientUseCase::new(repo.clone(), notifier.clone(), docs.clone());

    let mut incomplete = patch();
    incomplete.email.clear();
    let err = pipeline
        .handle(&ClientId::new("a"), incomplete)
        .await
        .unwrap_err();

    assert!(matches!(err, DirectoryError::Validation("email")));

    let stored = repo.get_by_id(&ClientId::new("a")).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "John");
    assert_eq!(notifier.calls(), 0);
    assert_eq!(docs.calls(), 0);
}

#[tokio::test]
async fn notification_fault_surfaces_after_the_write_committed() {
    let repo = seeded_repository().await;
    let notifier = RecordingNotifier::failing();
    let docs = RecordingDocSync::healthy();
    let pipeline =
        StandardUpdateClientUseCase::new(repo.clone(), notifier.clone(), docs.clone());

    let err = pipeline
        .handle(&ClientId::new("a"), patch())
        .await
        .unwrap_err();

    match err {
        DirectoryError::ExternalService { origin, .. } => {
            assert_eq!(origin, ServiceOrigin::Notification);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    // The new values are live even though the request failed.
    let stored = repo.get_by_id(&ClientId::new("a")).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Johnny");
    assert_eq!(stored.email, "johnny@example.com");

    // The pipeline stops at the first fault.
    assert_eq!(notifier.calls(), 1);
    assert_eq!(docs.calls(), 0);
}

#[tokio::test]
async fn docsync_fault_preserves_the_write_and_the_notification() {
    let repo = seeded_repository().await;
    let notifier = RecordingNotifier::healthy();
    let docs = RecordingDocSync::failing();
    let pipeline =
        StandardUpdateClientUseCase::new(repo.clone(), notifier.clone(), docs.clone());

    let err = pipeline
        .handle(&ClientId::new("a"), patch())
        .await
        .unwrap_err();

    match err {
        DirectoryError::ExternalService { origin, .. } => {
            assert_eq!(origin, ServiceOrigin::DocSync);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    assert_eq!(notifier.calls(), 1);
    assert_eq!(docs.calls(), 1);

    let stored = repo.get_by_id(&ClientId::new("a")).await.unwrap().unwrap();
    assert_eq!(stored.first_name, "Johnny");
}
