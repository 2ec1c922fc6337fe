//! Comprehensive tests for context module.

#[cfg(test)]
mod tests {
    use crate::context::{keys, AttemptIdentity, SharedContext, TreeContext};
    use serde_json::json;

    #[test]
    fn test_tree_context_reads_identity_keys() {
        let state = SharedContext::new()
            .with(keys::USERNAME, "alice")
            .with(keys::REALM, "/employees");
        let ctx = TreeContext::new(state);

        assert_eq!(ctx.username(), Some("alice"));
        assert_eq!(ctx.realm(), Some("/employees"));
    }

    #[test]
    fn test_tree_context_missing_identity_keys() {
        let ctx = TreeContext::new(SharedContext::new().with(keys::USERNAME, 42));

        assert_eq!(ctx.username(), None);
        assert_eq!(ctx.realm(), None);
    }

    #[test]
    fn test_tree_context_with_attempt() {
        let attempt = AttemptIdentity::new();
        let ctx = TreeContext::new(SharedContext::new()).with_attempt(attempt.clone());

        assert_eq!(ctx.attempt(), &attempt);
    }

    #[test]
    fn test_shared_state_collect_and_iterate() {
        let ctx: SharedContext = vec![
            ("username".to_string(), json!("alice")),
            ("authLevel".to_string(), json!(0)),
        ]
        .into_iter()
        .collect();

        let entries: Vec<(&str, &serde_json::Value)> = ctx.iter().collect();
        assert_eq!(entries[0], ("username", &json!("alice")));
        assert_eq!(entries[1], ("authLevel", &json!(0)));
        assert_eq!(ctx.to_value(), json!({"username": "alice", "authLevel": 0}));
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let a = SharedContext::new().with("x", 1).with("y", 2);
        let b = SharedContext::new().with("y", 2).with("x", 1);
        assert_eq!(a, b);
    }
}
