use gallery_service::config::{GalleryConfig, GoogleConfig, ModelConfig};
use gallery_service::startup::Application;
use secrecy::Secret;
use std::time::Duration;

pub const TEST_MODEL: &str = "gemini-3-pro-image-preview";

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service on a random port against the given upstream.
    pub async fn spawn(api_base_url: &str, api_key: &str) -> Self {
        let config = GalleryConfig {
            common: service_core::config::Config { port: 0 },
            google: GoogleConfig {
                api_key: Secret::new(api_key.to_string()),
                api_base_url: api_base_url.to_string(),
            },
            models: ModelConfig {
                image_model: TEST_MODEL.to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the HTTP server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}
