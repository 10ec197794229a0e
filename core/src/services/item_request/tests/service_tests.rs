//! Tests for the ItemRequestService.

use std::sync::Arc;

use crate::domain::entities::item::Item;
use crate::domain::entities::item_request::ItemRequestDraft;
use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{
    InMemoryItemRepository, InMemoryItemRequestRepository, InMemoryUserRepository, ItemRepository,
    UserRepository,
};
use crate::services::item_request::ItemRequestService;

type Service = ItemRequestService<InMemoryItemRequestRepository, InMemoryUserRepository, InMemoryItemRepository>;

struct Fixture {
    service: Service,
    items: Arc<InMemoryItemRepository>,
    first: User,
    second: User,
}

async fn fixture() -> Fixture {
    let users = Arc::new(InMemoryUserRepository::new());
    let items = Arc::new(InMemoryItemRepository::new());
    let first = users.save(User::new("Name", "test@test.ru")).await.unwrap();
    let second = users.save(User::new("Name 2", "test2@test.ru")).await.unwrap();

    let service = ItemRequestService::new(
        Arc::new(InMemoryItemRequestRepository::new()),
        users,
        Arc::clone(&items),
    );

    Fixture {
        service,
        items,
        first,
        second,
    }
}

#[tokio::test]
async fn test_blank_description_is_rejected_before_lookup() {
    let f = fixture().await;

    for draft in [ItemRequestDraft::default(), ItemRequestDraft::new("   ")] {
        // Unknown requester, yet the description error wins
        let result = f.service.create(99, draft).await;
        assert_eq!(result.unwrap_err(), DomainError::validation("Description is empty"));
    }
}

#[tokio::test]
async fn test_create_stamps_time_and_requester() {
    let f = fixture().await;

    let request = f
        .service
        .create(f.first.id, ItemRequestDraft::new("Нужен Клей"))
        .await
        .unwrap();

    assert!(request.id > 0);
    assert_eq!(request.requester, f.first);
    assert_eq!(request.description, "Нужен Клей");
    assert!(request.created <= chrono::Utc::now());

    let result = f.service.create(99, ItemRequestDraft::new("Нужен Клей")).await;
    assert_eq!(result.unwrap_err(), DomainError::not_found("User not found"));
}

#[tokio::test]
async fn test_description_is_stored_as_given() {
    let f = fixture().await;

    let request = f
        .service
        .create(f.first.id, ItemRequestDraft::new("  Нужен Клей\n"))
        .await
        .unwrap();
    assert_eq!(request.description, "  Нужен Клей\n");
}

#[tokio::test]
async fn test_find_all_returns_requested_size_by_default() {
    let f = fixture().await;
    for n in 0..150 {
        f.service
            .create(f.first.id, ItemRequestDraft::new(format!("Нужен инструмент {n}")))
            .await
            .unwrap();
    }

    let page = f.service.find_all(f.second.id, 0, 150).await.unwrap();
    assert_eq!(page.len(), 150);
}

#[tokio::test]
async fn test_find_by_requester_requires_user() {
    let f = fixture().await;

    let result = f.service.find_by_requester_id(99).await;
    assert_eq!(result.unwrap_err(), DomainError::not_found("User not found"));

    assert!(f.service.find_by_requester_id(f.first.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_visibility_between_users() {
    let f = fixture().await;
    f.service.create(f.first.id, ItemRequestDraft::new("Нужен Клей")).await.unwrap();
    f.service.create(f.second.id, ItemRequestDraft::new("Нужен Молоток")).await.unwrap();
    f.service.create(f.first.id, ItemRequestDraft::new("Нужна дрель")).await.unwrap();

    let for_first = f.service.find_all(f.first.id, 0, 10).await.unwrap();
    assert_eq!(for_first.len(), 1);
    assert!(for_first.iter().all(|r| r.requester.id != f.first.id));

    let for_second = f.service.find_all(f.second.id, 0, 10).await.unwrap();
    let descriptions: Vec<&str> = for_second.iter().map(|r| r.description.as_str()).collect();
    assert_eq!(descriptions, vec!["Нужна дрель", "Нужен Клей"]);

    let own = f.service.find_by_requester_id(f.first.id).await.unwrap();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|r| r.requester.id == f.first.id));

    let second_page = f.service.find_all(f.second.id, 1, 1).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].description, "Нужен Клей");
}

#[tokio::test]
async fn test_get_for_user_attaches_answers() {
    let f = fixture().await;
    let request = f
        .service
        .create(f.first.id, ItemRequestDraft::new("Нужен Клей"))
        .await
        .unwrap();
    let answer = f
        .items
        .save(Item::new("Клей", "Секундный клей момент", true, f.second.clone()).in_response_to(request.id))
        .await
        .unwrap();

    let view = f.service.get_for_user(f.second.id, request.id).await.unwrap();
    assert_eq!(view.request, request);
    assert_eq!(view.items, vec![answer]);

    let result = f.service.get_for_user(99, request.id).await;
    assert_eq!(result.unwrap_err(), DomainError::not_found("User not found"));

    let result = f.service.get_for_user(f.first.id, 42).await;
    assert_eq!(result.unwrap_err(), DomainError::not_found("Request not found"));
}

#[tokio::test]
async fn test_with_items_keeps_order() {
    let f = fixture().await;
    f.service.create(f.first.id, ItemRequestDraft::new("Нужен Клей")).await.unwrap();
    f.service.create(f.first.id, ItemRequestDraft::new("Нужна дрель")).await.unwrap();

    let own = f.service.find_by_requester_id(f.first.id).await.unwrap();
    let enriched = f.service.with_items(own.clone()).await.unwrap();

    assert_eq!(enriched.len(), 2);
    assert_eq!(enriched[0].request, own[0]);
    assert!(enriched.iter().all(|r| r.items.is_empty()));
}
