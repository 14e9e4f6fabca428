#![allow(dead_code)]

use mealie_client::{ClientConfig, MealieClient};
use wiremock::MockServer;

pub const TEST_TOKEN: &str = "test-token-1234567890";

pub struct TestEnvironment {
    pub server: MockServer,
    pub client: MealieClient,
}

impl TestEnvironment {
    /// Mock server plus a client pointed at it, without a token and with
    /// request logging on.
    pub async fn new() -> Self {
        Self::with_debug(true).await
    }

    pub async fn with_debug(debug: bool) -> Self {
        let server = MockServer::start().await;
        let client = MealieClient::new(ClientConfig::new(server.uri()).with_debug(debug));
        Self { server, client }
    }

    /// Same as [`TestEnvironment::new`] with [`TEST_TOKEN`] already set.
    pub async fn authenticated() -> Self {
        let mut env = Self::new().await;
        env.client.set_token(TEST_TOKEN);
        env
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}
