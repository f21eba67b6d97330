//! Backfill the `Root Domain` record from `Press Settings`

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::services::{Patch, PatchContext, PatchOutcome};
use crate::types::{PressSettings, RootDomain, SchemaRef};

/// Ensures a `Root Domain` exists for the domain configured in `Press Settings`.
///
/// Steps, in order:
/// 1. reload the `Root Domain` schema (always)
/// 2. load the settings singleton; a blank domain is rejected
/// 3. if no root domain with that name exists, reveal the AWS secret and insert one
///
/// An existing record is never touched, so re-running is safe.
pub struct CreateRootDomainFromPressSettings;

#[async_trait]
impl Patch for CreateRootDomainFromPressSettings {
    fn name(&self) -> &'static str {
        "press.patches.v0_0_1.create_root_domain_from_press_settings"
    }

    async fn execute(&self, ctx: &PatchContext) -> CoreResult<PatchOutcome> {
        log::info!("Running patch {}", self.name());

        ctx.schema_registry
            .reload_schema(&SchemaRef::ROOT_DOMAIN)
            .await?;

        let settings = ctx.press_settings.get_singleton().await?;
        if settings.domain.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Press Settings domain is not set".to_string(),
            ));
        }

        if ctx.root_domains.exists(&settings.domain).await? {
            log::info!(
                "Root domain {} already exists, leaving it unchanged",
                settings.domain
            );
            return Ok(PatchOutcome::AlreadyExists {
                name: settings.domain,
            });
        }

        let secret = ctx
            .secrets
            .reveal(&PressSettings::secret_ref(
                PressSettings::AWS_SECRET_ACCESS_KEY,
            ))
            .await?;
        let root_domain = RootDomain::from_press_settings(&settings, secret);
        ctx.root_domains.insert(&root_domain).await?;

        log::info!(
            "Created root domain {} (dns provider: {})",
            root_domain.name,
            root_domain.dns_provider
        );
        Ok(PatchOutcome::Created {
            name: root_domain.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        create_test_context, example_settings, seed_settings, MockStore,
    };
    use crate::types::PlaintextSecret;

    #[tokio::test]
    async fn creates_root_domain_from_settings() {
        let store = MockStore::new();
        seed_settings(&store, example_settings(), "s3cr3t").await;
        let ctx = create_test_context(&store);

        let outcome = CreateRootDomainFromPressSettings
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            PatchOutcome::Created {
                name: "example.com".to_string()
            }
        );
        let created = store.root_domain("example.com").await.unwrap();
        assert_eq!(created.name, "example.com");
        assert_eq!(created.dns_provider, "generic");
        assert_eq!(created.aws_access_key_id, "AKIAEXAMPLE");
        assert_eq!(created.aws_secret_access_key.expose(), "s3cr3t");
    }

    #[tokio::test]
    async fn second_run_is_a_no_op() {
        let store = MockStore::new();
        seed_settings(&store, example_settings(), "s3cr3t").await;
        let ctx = create_test_context(&store);

        CreateRootDomainFromPressSettings
            .execute(&ctx)
            .await
            .unwrap();
        let second = CreateRootDomainFromPressSettings
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(
            second,
            PatchOutcome::AlreadyExists {
                name: "example.com".to_string()
            }
        );
        assert_eq!(store.root_domain_count().await, 1);
        assert_eq!(store.insert_calls().await, 1);
    }

    #[tokio::test]
    async fn existing_record_is_not_overwritten() {
        let store = MockStore::new();
        seed_settings(&store, example_settings(), "s3cr3t").await;
        let pre_seeded = RootDomain {
            name: "example.com".to_string(),
            dns_provider: "AWS Route 53".to_string(),
            aws_access_key_id: "AKIAOTHER".to_string(),
            aws_secret_access_key: PlaintextSecret::new("other-secret"),
        };
        store.put_root_domain(pre_seeded.clone()).await;
        let ctx = create_test_context(&store);

        CreateRootDomainFromPressSettings
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(store.root_domain("example.com").await.unwrap(), pre_seeded);
        assert_eq!(store.insert_calls().await, 0);
    }

    #[tokio::test]
    async fn secret_not_revealed_when_record_exists() {
        let store = MockStore::new();
        seed_settings(&store, example_settings(), "s3cr3t").await;
        let ctx = create_test_context(&store);
        CreateRootDomainFromPressSettings
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(store.reveal_calls().await, 1);

        CreateRootDomainFromPressSettings
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(store.reveal_calls().await, 1);
    }

    #[tokio::test]
    async fn missing_settings_is_fatal() {
        let store = MockStore::new();
        let ctx = create_test_context(&store);

        let result = CreateRootDomainFromPressSettings.execute(&ctx).await;

        assert!(matches!(result, Err(CoreError::SettingsNotFound(_))));
        assert_eq!(store.root_domain_count().await, 0);
    }

    #[tokio::test]
    async fn schema_reloaded_even_when_insert_is_skipped() {
        let store = MockStore::new();
        seed_settings(&store, example_settings(), "s3cr3t").await;
        store
            .put_root_domain(RootDomain::from_press_settings(
                &example_settings(),
                PlaintextSecret::new("s3cr3t"),
            ))
            .await;
        let ctx = create_test_context(&store);

        CreateRootDomainFromPressSettings
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(store.reloaded_schemas().await, vec![SchemaRef::ROOT_DOMAIN]);
    }

    #[tokio::test]
    async fn schema_reloaded_before_settings_are_read() {
        let store = MockStore::new();
        let ctx = create_test_context(&store);

        let _ = CreateRootDomainFromPressSettings.execute(&ctx).await;

        assert_eq!(store.reloaded_schemas().await, vec![SchemaRef::ROOT_DOMAIN]);
    }

    #[tokio::test]
    async fn schema_failure_stops_the_patch() {
        let store = MockStore::new();
        seed_settings(&store, example_settings(), "s3cr3t").await;
        store.fail_schema_reload().await;
        let ctx = create_test_context(&store);

        let result = CreateRootDomainFromPressSettings.execute(&ctx).await;

        assert!(matches!(result, Err(CoreError::SchemaNotFound(_))));
        assert_eq!(store.root_domain_count().await, 0);
    }

    #[tokio::test]
    async fn missing_secret_is_fatal() {
        let store = MockStore::new();
        store.put_settings(example_settings()).await;
        let ctx = create_test_context(&store);

        let result = CreateRootDomainFromPressSettings.execute(&ctx).await;

        assert!(matches!(result, Err(CoreError::SecretNotSet(_))));
        assert_eq!(store.root_domain_count().await, 0);
    }

    #[tokio::test]
    async fn insert_failure_propagates() {
        let store = MockStore::new();
        seed_settings(&store, example_settings(), "s3cr3t").await;
        store
            .set_insert_error(Some("database is locked".to_string()))
            .await;
        let ctx = create_test_context(&store);

        let result = CreateRootDomainFromPressSettings.execute(&ctx).await;

        assert!(matches!(result, Err(CoreError::StorageError(_))));
        assert_eq!(store.root_domain_count().await, 0);
    }

    #[tokio::test]
    async fn blank_domain_is_rejected() {
        let store = MockStore::new();
        seed_settings(
            &store,
            PressSettings::new("  ", "generic", "AKIAEXAMPLE"),
            "s3cr3t",
        )
        .await;
        let ctx = create_test_context(&store);

        let result = CreateRootDomainFromPressSettings.execute(&ctx).await;

        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        assert_eq!(store.root_domain_count().await, 0);
        assert_eq!(store.reveal_calls().await, 0);
        assert_eq!(store.insert_calls().await, 0);
    }
}
