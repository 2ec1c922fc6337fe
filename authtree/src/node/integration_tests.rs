//! End-to-end tests for the profile property node.

#[cfg(test)]
mod tests {
    use crate::context::{keys, SharedContext};
    use crate::diagnostics::{CollectingDiagnostics, DiagnosticLevel, NoOpDiagnostics};
    use crate::errors::{AttributeLookupError, IdentityResolutionError};
    use crate::identity::IdentityAttributeResolver;
    use crate::node::{GetProfilePropertyNode, Node, ProfilePropertyConfig, SingleOutcome};
    use crate::testing::{
        assert_single_outcome, assert_state_lacks, assert_state_value,
        assert_unmapped_keys_preserved, ScriptedResolver, TestAttempt, TestProfile,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;

    fn mail_and_cn() -> ProfilePropertyConfig {
        ProfilePropertyConfig::new()
            .with_property("mail", "userEmail")
            .with_property("cn", "displayName")
    }

    fn node(
        config: ProfilePropertyConfig,
        resolver: Arc<dyn IdentityAttributeResolver>,
    ) -> GetProfilePropertyNode {
        GetProfilePropertyNode::new(Arc::new(config), resolver)
            .with_diagnostics(Arc::new(NoOpDiagnostics))
    }

    #[test]
    fn test_mail_found_cn_missing() {
        let store = TestProfile::store(&[
            TestProfile::new("/", "alice").with_attribute("mail", &["a@example.com"]),
        ]);
        let node = node(mail_and_cn(), Arc::new(store));
        let ctx = TestAttempt::for_user("alice", "/").build();

        let action = node.process(&ctx);
        let state = assert_single_outcome(&action);

        assert_state_value(state, "userEmail", "a@example.com");
        assert_state_lacks(state, "displayName");
        assert_unmapped_keys_preserved(ctx.shared_state(), state, node.config());
    }

    #[test]
    fn test_missing_attribute_leaves_existing_value() {
        let store = TestProfile::store(&[
            TestProfile::new("/", "alice").with_attribute("mail", &["a@example.com"]),
        ]);
        let node = node(mail_and_cn(), Arc::new(store));
        let ctx = TestAttempt::for_user("alice", "/")
            .with_state("displayName", "Previously Set")
            .build();

        let action = node.process(&ctx);
        let state = assert_single_outcome(&action);

        assert_state_value(state, "displayName", "Previously Set");
        assert_state_value(state, "userEmail", "a@example.com");
    }

    #[test]
    fn test_resolved_value_overwrites_existing_key() {
        let resolver =
            ScriptedResolver::for_user("alice", "/").with_values("mail", ["new@example.com"]);
        let node = node(mail_and_cn(), Arc::new(resolver));
        let ctx = TestAttempt::for_user("alice", "/")
            .with_state("userEmail", "old@example.com")
            .build();

        let action = node.process(&ctx);

        assert_state_value(assert_single_outcome(&action), "userEmail", "new@example.com");
        assert_state_value(ctx.shared_state(), "userEmail", "old@example.com");
    }

    #[test]
    fn test_identity_failure_yields_copy_of_input() {
        let resolver = Arc::new(ScriptedResolver::unresolvable(
            IdentityResolutionError::not_found("alice", "/"),
        ));
        let node = node(mail_and_cn(), resolver.clone());
        let ctx = TestAttempt::for_user("alice", "/").with_state("authLevel", 0).build();

        let action = node.process(&ctx);

        assert_eq!(action.outcome, SingleOutcome::ID);
        assert_eq!(assert_single_outcome(&action), ctx.shared_state());
        assert_eq!(resolver.lookup_count(), 0);
    }

    #[test]
    fn test_failure_on_one_mapping_keeps_the_other() {
        let resolver = ScriptedResolver::for_user("alice", "/")
            .with_failure("mail", AttributeLookupError::session("SSO token expired"))
            .with_values("cn", ["Alice Example"]);
        let diagnostics = Arc::new(CollectingDiagnostics::new());
        let node = node(mail_and_cn(), Arc::new(resolver)).with_diagnostics(diagnostics.clone());

        let action = node.process(&TestAttempt::for_user("alice", "/").build());
        let state = assert_single_outcome(&action);

        assert_state_lacks(state, "userEmail");
        assert_state_value(state, "displayName", "Alice Example");

        let errors = diagnostics.records_at(DiagnosticLevel::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("mail"));
    }

    #[test]
    fn test_lookups_follow_configuration_order() {
        let resolver = Arc::new(ScriptedResolver::for_user("alice", "/"));
        let config = ProfilePropertyConfig::new()
            .with_property("sn", "surname")
            .with_property("mail", "userEmail")
            .with_property("cn", "displayName");
        let node = node(config, resolver.clone());

        let _ = node.process(&TestAttempt::for_user("alice", "/").build());

        assert_eq!(resolver.lookups(), vec!["sn", "mail", "cn"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let store = TestProfile::store(&[TestProfile::new("/", "alice")
            .with_attribute("mail", &["a@example.com"])
            .with_attribute("cn", &["Alice"])]);
        let node = node(mail_and_cn(), Arc::new(store));
        let ctx = TestAttempt::for_user("alice", "/").build();
        let before = ctx.shared_state().copy();

        let action = node.process(&ctx);

        assert_eq!(ctx.shared_state(), &before);
        assert_eq!(assert_single_outcome(&action).len(), before.len() + 2);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let store = TestProfile::store(&[TestProfile::new("/", "alice")
            .with_attribute("mail", &["a@example.com", "alice@example.org"])
            .with_attribute("cn", &["Alice"])]);
        let node = node(mail_and_cn(), Arc::new(store));
        let ctx = TestAttempt::for_user("alice", "/").with_state("authLevel", 1).build();

        let first = node.process(&ctx);
        let second = node.process(&ctx);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first.shared_state).unwrap(),
            serde_json::to_string(&second.shared_state).unwrap()
        );
        assert_state_value(assert_single_outcome(&first), "userEmail", "a@example.com");
    }

    #[test]
    fn test_several_sources_may_share_a_destination() {
        let resolver = ScriptedResolver::for_user("alice", "/")
            .with_values("mail", ["a@example.com"])
            .with_values("altMail", ["alt@example.com"]);
        let config = ProfilePropertyConfig::new()
            .with_property("mail", "contact")
            .with_property("altMail", "contact");
        let node = node(config, Arc::new(resolver));

        let action = node.process(&TestAttempt::for_user("alice", "/").build());

        // later mappings win
        assert_state_value(assert_single_outcome(&action), "contact", "alt@example.com");
    }

    #[test]
    fn test_shared_destination_follows_document_order() {
        let resolver = ScriptedResolver::for_user("alice", "/")
            .with_values("mail", ["a@example.com"])
            .with_values("altMail", ["alt@example.com"]);
        let config = ProfilePropertyConfig::from_value(json!({
            "properties": {"mail": "contact", "altMail": "contact"}
        }))
        .unwrap();
        let resolver = Arc::new(resolver);
        let node = node(config, resolver.clone());

        let action = node.process(&TestAttempt::for_user("alice", "/").build());

        assert_eq!(resolver.lookups(), vec!["mail", "altMail"]);
        assert_state_value(assert_single_outcome(&action), "contact", "alt@example.com");
    }

    #[test]
    fn test_non_string_username_is_treated_as_missing() {
        let store = TestProfile::store(&[
            TestProfile::new("/", "alice").with_attribute("mail", &["a@example.com"]),
        ]);
        let node = node(mail_and_cn(), Arc::new(store));
        let ctx = TestAttempt::new()
            .with_state(keys::USERNAME, json!(["alice"]))
            .with_state(keys::REALM, "/")
            .build();

        let action = node.process(&ctx);

        assert_eq!(assert_single_outcome(&action), ctx.shared_state());
    }

    #[test]
    fn test_realm_scopes_identity() {
        let store = TestProfile::store(&[
            TestProfile::new("/employees", "alice").with_attribute("mail", &["staff@example.com"]),
            TestProfile::new("/customers", "alice").with_attribute("mail", &["me@example.net"]),
        ]);
        let node = node(mail_and_cn(), Arc::new(store));

        let action = node.process(&TestAttempt::for_user("alice", "/customers").build());

        assert_state_value(assert_single_outcome(&action), "userEmail", "me@example.net");
    }

    #[test]
    fn test_diagnostics_trace_each_lookup() {
        let resolver =
            ScriptedResolver::for_user("alice", "/").with_values("mail", ["a@example.com"]);
        let diagnostics = Arc::new(CollectingDiagnostics::new());
        let node = node(mail_and_cn(), Arc::new(resolver)).with_diagnostics(diagnostics.clone());

        let _ = node.process(&TestAttempt::for_user("alice", "/").build());

        let infos: Vec<String> = diagnostics
            .records_at(DiagnosticLevel::Info)
            .into_iter()
            .map(|r| r.message)
            .collect();
        assert!(infos.contains(&"Looking for profile attribute mail".to_string()));
        assert!(infos.contains(&"Looking for profile attribute cn".to_string()));
        assert!(infos.contains(&"Injected 1 of 2 profile attributes".to_string()));

        let errors = diagnostics.records_at(DiagnosticLevel::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Unable to find attribute: cn");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_one_node_serves_concurrent_attempts() {
        let profiles: Vec<TestProfile> = (0..32)
            .map(|i| {
                let mail = format!("user{i}@example.com");
                TestProfile::new("/", &format!("user{i}")).with_attribute("mail", &[mail.as_str()])
            })
            .collect();
        let store = Arc::new(TestProfile::store(&profiles));
        let node = Arc::new(node(mail_and_cn(), store));

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let node = Arc::clone(&node);
                tokio::task::spawn_blocking(move || {
                    let ctx = TestAttempt::for_user(&format!("user{i}"), "/").build();
                    let action = node.process(&ctx);
                    (i, action)
                })
            })
            .collect();

        for handle in handles {
            let (i, action) = handle.await.unwrap();
            let state: &SharedContext = assert_single_outcome(&action);
            assert_state_value(state, "userEmail", &format!("user{i}@example.com"));
            assert_state_value(state, keys::USERNAME, &format!("user{i}"));
        }
    }
}
