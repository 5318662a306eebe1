use mytutor_server::{
    models::domain::{PageResult, RunBatch},
    repositories::{HistoryRepository, InMemoryHistoryRepository},
};

fn batch_with_pages(digest: &str, pages: &[usize]) -> RunBatch {
    let mut batch = RunBatch::new(digest, None);
    for &page in pages {
        batch.push(PageResult {
            page,
            explanation: format!("explanation {}", page),
            example: "example".to_string(),
            mini_test: "test".to_string(),
            test_solution: "solution".to_string(),
        });
    }
    batch
}

async fn assert_history_contract(repo: &dyn HistoryRepository) {
    assert!(repo.list("s").await.unwrap().is_empty());

    let first = batch_with_pages("one", &[1, 2]);
    let second = batch_with_pages("two", &[]);

    assert_eq!(repo.append("s", first.clone()).await.unwrap(), 1);
    assert_eq!(repo.append("s", second.clone()).await.unwrap(), 2);

    // append-only, in order, batches unchanged
    let listed = repo.list("s").await.unwrap();
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    assert_eq!(repo.find_by_run("s", 1).await.unwrap(), Some(first));
    assert_eq!(repo.find_by_run("s", 2).await.unwrap(), Some(second));
    assert_eq!(repo.find_by_run("s", 3).await.unwrap(), None);

    // other sessions are isolated
    assert!(repo.list("other").await.unwrap().is_empty());
}

#[actix_web::test]
async fn in_memory_history_repository_satisfies_contract() {
    let repo = InMemoryHistoryRepository::new();
    assert_history_contract(&repo).await;
}

#[actix_web::test]
async fn in_memory_history_repository_keeps_empty_batches() {
    let repo = InMemoryHistoryRepository::new();

    repo.append("s", RunBatch::new("d", Some("10-12"))).await.unwrap();

    let listed = repo.list("s").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].is_empty());
    assert_eq!(listed[0].page_expression.as_deref(), Some("10-12"));
}
