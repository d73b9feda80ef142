//! tts-relay - 文本转语音代理服务
//!
//! 启动流程：加载配置 → 初始化日志 → 创建合成客户端 → 启动 HTTP 服务

use std::sync::Arc;

use tts_relay::application::SpeechSynthesizerPort;
use tts_relay::config::{load_config, print_config, ProviderConfig, ProviderKind};
use tts_relay::domain::VoiceSelection;
use tts_relay::infrastructure::adapters::{
    FakeSpeechClient, FakeSpeechClientConfig, OpenAiSpeechClient, OpenAiSpeechClientConfig,
};
use tts_relay::infrastructure::http::{AppState, HttpServer, ServerConfig};

/// 按配置创建合成客户端
fn build_synthesizer(config: &ProviderConfig) -> anyhow::Result<Arc<dyn SpeechSynthesizerPort>> {
    let synthesizer: Arc<dyn SpeechSynthesizerPort> = match config.kind {
        ProviderKind::OpenAi => {
            let client_config =
                OpenAiSpeechClientConfig::new(config.base_url.clone(), config.api_key.clone())
                    .with_timeout(config.timeout_secs);
            Arc::new(OpenAiSpeechClient::new(client_config)?)
        }
        ProviderKind::Fake => Arc::new(FakeSpeechClient::new(FakeSpeechClientConfig {
            audio_file_path: config.fake_audio_path.clone(),
            ..Default::default()
        })?),
    };
    Ok(synthesizer)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},tts_relay={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("tts-relay v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    let synthesizer = build_synthesizer(&config.provider)?;
    let selection = VoiceSelection::new(&config.provider.model, &config.provider.voice);

    let mut server_config = ServerConfig::new(&config.server.host, config.server.port);
    if config.server.static_files.enabled {
        server_config = server_config.with_static_files(
            &config.server.static_files.dir,
            &config.server.static_files.path,
        );
    }

    let state = AppState::new(synthesizer, selection);
    let server = HttpServer::new(server_config, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
