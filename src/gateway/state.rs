//! Gateway 应用状态

use std::sync::Arc;

use crate::verifier::ClaimVerifier;

/// Gateway 应用状态
///
/// 仅持有共享的上游客户端；处理器本身无跨请求状态。
#[derive(Clone)]
pub struct AppState {
    verifier: Arc<ClaimVerifier>,
}

impl AppState {
    pub fn new(verifier: ClaimVerifier) -> Self {
        Self {
            verifier: Arc::new(verifier),
        }
    }

    pub fn verifier(&self) -> &ClaimVerifier {
        &self.verifier
    }
}
