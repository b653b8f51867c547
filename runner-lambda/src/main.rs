use anyhow::Context;
use function_core::config::{self, RuntimeConfig, RuntimeMode};
use function_core::telemetry::init_tracing;
use function_core::{InboundRequest, OutboundResponse, handle};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::{error, info};

/// Entry point for API Gateway invocations.
///
/// Handler failures are logged and returned to the runtime so the invocation
/// is reported as failed.
pub async fn lambda_handler(event: LambdaEvent<InboundRequest>) -> Result<OutboundResponse, Error> {
    let request_id = event.context.request_id.clone();

    match handle(&event.payload) {
        Ok(response) => Ok(response),
        Err(e) => {
            error!(%request_id, "Handler failed: {}", e);
            Err(e.into())
        }
    }
}

/// Runs the handler once against an event read from a file or stdin and
/// prints the response as JSON.
fn run_local(config: &RuntimeConfig) -> anyhow::Result<()> {
    let request = config::load_event(config.event_path.as_deref())?;

    let (response, failure) = match handle(&request) {
        Ok(response) => (response, None),
        Err(e) => {
            error!("Handler failed: {}", e);
            (e.to_response(), Some(e))
        }
    };

    let output = serde_json::to_string_pretty(&response).context("Failed to print response")?;
    println!("{output}");

    match failure {
        Some(e) => Err(e).context("Local invocation failed"),
        None => Ok(()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = RuntimeConfig::from_env();
    init_tracing(&config.log_filter);

    match config.mode {
        RuntimeMode::Lambda => {
            info!("Running in AWS Lambda environment");
            lambda_runtime::run(service_fn(lambda_handler)).await
        }
        RuntimeMode::Local => {
            info!("Running in local development mode");
            run_local(&config)?;
            info!("Local invocation completed successfully");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use function_core::ResponseBody;
    use lambda_runtime::Context;

    #[tokio::test]
    async fn test_lambda_handler_echoes_authorization() {
        let request = InboundRequest::new("GET", "/test").with_header("Authorization", "Bearer test-token");
        let event = LambdaEvent::new(request, Context::default());

        let response = lambda_handler(event).await.unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        let body: ResponseBody = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body.authorization, "Bearer test-token");
    }

    #[tokio::test]
    async fn test_lambda_handler_accepts_raw_gateway_event() {
        let payload: InboundRequest = serde_json::from_value(serde_json::json!({
            "resource": "/{proxy+}",
            "path": "/hello",
            "httpMethod": "POST",
            "headers": null,
            "body": "{\"ignored\":true}"
        }))
        .unwrap();

        let response = lambda_handler(LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap();

        assert_eq!(response.status_code, 200);
        let body: ResponseBody = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body.authorization, "");
    }

    #[test]
    fn test_run_local_with_event_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"httpMethod":"GET","path":"/test","headers":{"authorization":"Bearer local"}}"#,
        )
        .unwrap();

        let config = RuntimeConfig {
            event_path: Some(file.path().to_path_buf()),
            ..RuntimeConfig::default()
        };

        assert!(run_local(&config).is_ok());
    }

    #[test]
    fn test_run_local_with_missing_event_file() {
        let config = RuntimeConfig {
            event_path: Some("/nonexistent/event.json".into()),
            ..RuntimeConfig::default()
        };

        let err = run_local(&config).unwrap_err();
        assert!(err.to_string().contains("Failed to read event file"));
    }
}
