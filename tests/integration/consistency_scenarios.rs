//! End-to-end consistency scenarios against the on-disk stores

use ctxkit::context::ContextCommandService;
use ctxkit::error::{ApiError, NotFound};
use ctxkit::store::{
    ContextConfigStore, MemoryContextConfigStore, MemoryTokenStore, SledTokenStore, TokenStore,
    TomlContextConfigStore,
};
use ctxkit::token::TokenCommandService;
use tempfile::TempDir;

fn disk_stores(dir: &TempDir) -> (SledTokenStore, TomlContextConfigStore) {
    let tokens = SledTokenStore::new(dir.path().join("tokens")).unwrap();
    let contexts = TomlContextConfigStore::new(dir.path().join("contexts.toml"));
    (tokens, contexts)
}

#[test]
fn test_set_rename_delete_scenario() {
    let dir = TempDir::new().unwrap();
    let (tokens, contexts) = disk_stores(&dir);

    TokenCommandService::set(&tokens, "a", "http://x", "s1").unwrap();
    ContextCommandService::set(&tokens, &contexts, "c1", "t1", "a").unwrap();
    assert_eq!(contexts.get().unwrap().current_context, "c1");

    TokenCommandService::rename(&tokens, &contexts, "a", "b").unwrap();
    let cfg = contexts.get().unwrap();
    assert_eq!(cfg.find("c1").unwrap().token_name, "b");
    assert!(matches!(
        tokens.get("a", false),
        Err(ApiError::NotFound(NotFound::Token(_)))
    ));
    assert_eq!(tokens.get("b", false).unwrap().secret, "s1");

    let result = TokenCommandService::delete(&tokens, &contexts, "b").unwrap();
    assert_eq!(result.deleted_contexts, vec!["c1".to_string()]);
    let cfg = contexts.get().unwrap();
    assert!(cfg.find("c1").is_none());
    assert!(tokens.list(true).unwrap().is_empty());
}

#[test]
fn test_delete_token_removes_every_referencing_context() {
    let dir = TempDir::new().unwrap();
    let (tokens, contexts) = disk_stores(&dir);

    TokenCommandService::set(&tokens, "a", "e", "s").unwrap();
    TokenCommandService::set(&tokens, "z", "e", "s").unwrap();
    ContextCommandService::set(&tokens, &contexts, "c1", "t1", "a").unwrap();
    ContextCommandService::set(&tokens, &contexts, "keep", "t2", "z").unwrap();
    ContextCommandService::set(&tokens, &contexts, "c2", "t3", "a").unwrap();

    TokenCommandService::delete(&tokens, &contexts, "a").unwrap();

    let names: Vec<String> = contexts
        .get()
        .unwrap()
        .available_contexts
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["keep".to_string()]);
    assert!(tokens.get("z", true).is_ok());
}

#[test]
fn test_delete_missing_context_writes_nothing() {
    let tokens = MemoryTokenStore::new();
    let contexts = MemoryContextConfigStore::new();
    TokenCommandService::set(&tokens, "a", "e", "s").unwrap();
    ContextCommandService::set(&tokens, &contexts, "c1", "t1", "a").unwrap();
    let writes = contexts.writes();

    let err = ContextCommandService::delete(&contexts, "missing").unwrap_err();
    assert_eq!(err.to_string(), "could not find context: missing");
    assert_eq!(contexts.writes(), writes);
    assert_eq!(contexts.get().unwrap().available_contexts.len(), 1);
}

#[test]
fn test_renamed_token_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let (tokens, contexts) = disk_stores(&dir);
        TokenCommandService::set(&tokens, "a", "e", "s").unwrap();
        ContextCommandService::set(&tokens, &contexts, "c1", "t1", "a").unwrap();
        TokenCommandService::rename(&tokens, &contexts, "a", "b").unwrap();
    }

    let contexts = TomlContextConfigStore::new(dir.path().join("contexts.toml"));
    let cfg = contexts.get().unwrap();
    assert_eq!(cfg.current_context, "c1");
    assert_eq!(cfg.find("c1").unwrap().token_name, "b");
}

#[test]
fn test_use_context_then_current_token() {
    let tokens = MemoryTokenStore::new();
    let contexts = MemoryContextConfigStore::new();
    TokenCommandService::set(&tokens, "a", "ea", "sa").unwrap();
    TokenCommandService::set(&tokens, "b", "eb", "sb").unwrap();
    ContextCommandService::set(&tokens, &contexts, "c1", "t1", "a").unwrap();
    ContextCommandService::set(&tokens, &contexts, "c2", "t2", "b").unwrap();

    ContextCommandService::use_context(&tokens, &contexts, "c2").unwrap();
    let (context, token) = ContextCommandService::current_token(&tokens, &contexts).unwrap();
    assert_eq!(context.tenant, "t2");
    assert_eq!(token.endpoint, "eb");
    assert_eq!(token.secret, "sb");
}
