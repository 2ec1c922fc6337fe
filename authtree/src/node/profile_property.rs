//! Node that copies profile attributes of the authenticating user into the
//! shared state.

use super::{
    Action, AttributeKind, ConfigAttribute, Node, NodeMetadata, Outcome, ProfilePropertyConfig,
    SingleOutcome,
};
use crate::context::TreeContext;
use crate::diagnostics::{DiagnosticsSink, TracingDiagnostics};
use crate::errors::AttributeLookupError;
use crate::identity::{AttributeValues, IdentityAttributeResolver, IdentityHandle};
use std::fmt;
use std::sync::Arc;
use tracing::info_span;

/// Reads configured profile attributes of the current user and writes them
/// into a copy of the shared state.
///
/// The node never fails an attempt. An identity that cannot be resolved, an
/// attribute the user does not have, or a store error only produce error
/// diagnostics; the affected mappings are skipped and the node continues to
/// its single outcome.
///
/// A multi-valued attribute contributes its first value only. Which value is
/// first is decided by the resolver's value order.
///
/// One instance is shared by all concurrent attempts. It holds no
/// per-attempt state.
pub struct GetProfilePropertyNode {
    config: Arc<ProfilePropertyConfig>,
    resolver: Arc<dyn IdentityAttributeResolver>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl fmt::Debug for GetProfilePropertyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GetProfilePropertyNode")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GetProfilePropertyNode {
    /// Node type name.
    pub const NODE_TYPE: &'static str = "GetProfilePropertyNode";

    /// Name of the node's only configuration field.
    pub const PROPERTIES_ATTRIBUTE: &'static str = "properties";

    /// Creates a node that reports diagnostics through `tracing`.
    #[must_use]
    pub fn new(
        config: Arc<ProfilePropertyConfig>,
        resolver: Arc<dyn IdentityAttributeResolver>,
    ) -> Self {
        Self {
            config,
            resolver,
            diagnostics: Arc::new(TracingDiagnostics::new(Self::NODE_TYPE)),
        }
    }

    /// Replaces the diagnostics sink.
    #[must_use]
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Returns the node's configuration.
    #[must_use]
    pub fn config(&self) -> &ProfilePropertyConfig {
        &self.config
    }

    /// Describes this node type to the tree configuration system.
    #[must_use]
    pub fn metadata() -> NodeMetadata {
        NodeMetadata::new(Self::NODE_TYPE, SingleOutcome::outcomes()).with_attribute(
            ConfigAttribute::new(Self::PROPERTIES_ATTRIBUTE, AttributeKind::StringMap, 100)
                .required(),
        )
    }

    fn resolve_identity(&self, context: &TreeContext) -> Option<IdentityHandle> {
        let username = context.username().unwrap_or_default();
        let realm = context.realm().unwrap_or_default();

        match self.resolver.resolve_identity(username, realm) {
            Ok(identity) => Some(identity),
            Err(err) => {
                self.diagnostics.error(
                    &format!("Unable to resolve identity of user '{username}' in realm '{realm}'"),
                    Some(&err),
                );
                None
            }
        }
    }

    fn lookup(
        &self,
        identity: Option<&IdentityHandle>,
        attribute: &str,
    ) -> Result<AttributeValues, AttributeLookupError> {
        let identity = identity.ok_or_else(|| AttributeLookupError::unresolved(attribute))?;
        self.resolver.attribute_values(identity, attribute)
    }
}

impl Node for GetProfilePropertyNode {
    fn process(&self, context: &TreeContext) -> Action {
        let span = info_span!(
            "profile_property_node",
            attempt_id = %context.attempt().attempt_id,
            mappings = self.config.len()
        );
        let _entered = span.enter();

        self.diagnostics.info("Starting");

        let identity = self.resolve_identity(context);
        let mut shared_state = context.shared_state().copy();
        let mut injected = 0_usize;

        for (source, destination) in self.config.properties() {
            self.diagnostics
                .info(&format!("Looking for profile attribute {source}"));

            match self.lookup(identity.as_ref(), source) {
                Ok(values) => match values.first() {
                    Some(value) => {
                        shared_state.put(destination.as_str(), value.as_str());
                        injected += 1;
                    }
                    None => self
                        .diagnostics
                        .error(&format!("Unable to find attribute: {source}"), None),
                },
                Err(err) => self.diagnostics.error(
                    &format!("Error reading profile attribute '{source}'"),
                    Some(&err),
                ),
            }
        }

        self.diagnostics.info(&format!(
            "Injected {injected} of {} profile attributes",
            self.config.len()
        ));

        Action::go_to(SingleOutcome::ID)
            .replace_shared_state(shared_state)
            .build()
    }

    fn outcomes(&self) -> Vec<Outcome> {
        SingleOutcome::outcomes()
    }
}
