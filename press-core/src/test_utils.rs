//! 测试辅助模块
//!
//! In-memory store implementing every storage trait, with call recording.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CoreError, CoreResult};
use crate::services::PatchContext;
use crate::traits::{PressSettingsRepository, RootDomainRepository, SchemaRegistry, Secrets};
use crate::types::{PlaintextSecret, PressSettings, RootDomain, SchemaRef, SecretRef};

// ===== MockStore =====

#[derive(Default)]
struct MockState {
    settings: Option<PressSettings>,
    settings_secret: Option<PlaintextSecret>,
    root_domains: HashMap<String, RootDomain>,
    reloaded_schemas: Vec<SchemaRef>,
    reveal_calls: usize,
    insert_calls: usize,
    /// 如果 Some，insert 时返回此错误
    insert_error: Option<String>,
    fail_schema_reload: bool,
}

pub struct MockStore {
    state: RwLock<MockState>,
}

impl MockStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(MockState::default()),
        })
    }

    pub async fn put_settings(&self, settings: PressSettings) {
        self.state.write().await.settings = Some(settings);
    }

    pub async fn put_root_domain(&self, root_domain: RootDomain) {
        self.state
            .write()
            .await
            .root_domains
            .insert(root_domain.name.clone(), root_domain);
    }

    pub async fn root_domain(&self, name: &str) -> Option<RootDomain> {
        self.state.read().await.root_domains.get(name).cloned()
    }

    pub async fn root_domain_count(&self) -> usize {
        self.state.read().await.root_domains.len()
    }

    pub async fn reloaded_schemas(&self) -> Vec<SchemaRef> {
        self.state.read().await.reloaded_schemas.clone()
    }

    pub async fn reveal_calls(&self) -> usize {
        self.state.read().await.reveal_calls
    }

    pub async fn insert_calls(&self) -> usize {
        self.state.read().await.insert_calls
    }

    pub async fn set_insert_error(&self, err: Option<String>) {
        self.state.write().await.insert_error = err;
    }

    pub async fn fail_schema_reload(&self) {
        self.state.write().await.fail_schema_reload = true;
    }
}

#[async_trait]
impl SchemaRegistry for MockStore {
    async fn reload_schema(&self, schema: &SchemaRef) -> CoreResult<()> {
        let mut state = self.state.write().await;
        state.reloaded_schemas.push(*schema);
        if state.fail_schema_reload {
            return Err(CoreError::SchemaNotFound(schema.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PressSettingsRepository for MockStore {
    async fn get_singleton(&self) -> CoreResult<PressSettings> {
        self.state
            .read()
            .await
            .settings
            .clone()
            .ok_or_else(|| CoreError::SettingsNotFound(PressSettings::INSTANCE_NAME.to_string()))
    }

    async fn save(
        &self,
        settings: &PressSettings,
        aws_secret_access_key: Option<&PlaintextSecret>,
    ) -> CoreResult<()> {
        let mut state = self.state.write().await;
        state.settings = Some(settings.clone());
        if let Some(secret) = aws_secret_access_key {
            state.settings_secret = Some(secret.clone());
        }
        Ok(())
    }
}

#[async_trait]
impl RootDomainRepository for MockStore {
    async fn exists(&self, name: &str) -> CoreResult<bool> {
        Ok(self.state.read().await.root_domains.contains_key(name))
    }

    async fn insert(&self, root_domain: &RootDomain) -> CoreResult<()> {
        let mut state = self.state.write().await;
        state.insert_calls += 1;
        if let Some(ref msg) = state.insert_error {
            return Err(CoreError::StorageError(msg.clone()));
        }
        if state.root_domains.contains_key(&root_domain.name) {
            return Err(CoreError::DuplicateRecord {
                record_type: RootDomain::RECORD_TYPE.to_string(),
                name: root_domain.name.clone(),
            });
        }
        state
            .root_domains
            .insert(root_domain.name.clone(), root_domain.clone());
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> CoreResult<Option<RootDomain>> {
        Ok(self.state.read().await.root_domains.get(name).cloned())
    }
}

#[async_trait]
impl Secrets for MockStore {
    async fn reveal(&self, secret: &SecretRef) -> CoreResult<PlaintextSecret> {
        let mut state = self.state.write().await;
        state.reveal_calls += 1;
        if *secret != PressSettings::secret_ref(PressSettings::AWS_SECRET_ACCESS_KEY) {
            return Err(CoreError::SecretNotSet(secret.to_string()));
        }
        if state.settings.is_none() {
            return Err(CoreError::RecordNotFound {
                record_type: secret.record_type.clone(),
                name: secret.record_name.clone(),
            });
        }
        state
            .settings_secret
            .clone()
            .ok_or_else(|| CoreError::SecretNotSet(secret.to_string()))
    }
}

// ===== 工厂方法 =====

pub fn example_settings() -> PressSettings {
    PressSettings::new("example.com", "generic", "AKIAEXAMPLE")
}

pub async fn seed_settings(store: &MockStore, settings: PressSettings, secret: &str) {
    PressSettingsRepository::save(store, &settings, Some(&PlaintextSecret::new(secret)))
        .await
        .unwrap();
}

pub fn create_test_context(store: &Arc<MockStore>) -> PatchContext {
    PatchContext::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    )
}
