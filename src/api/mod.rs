mod gemini;

pub use gemini::GeminiClient;

use crate::error::{Result, StoryboardError};
use async_trait::async_trait;
use clap::ValueEnum;
use tracing::info;

/// 固定的系统指令，约束模型按可解析的分镜协议输出
pub const SYSTEM_PROMPT: &str = r#"你是一名专业的电影分镜师。请将用户提供的小说文本转化为 6-8 个电影级分镜片段，并进行流体叙事检查。
输出要求：
1. 每个分镜片段之间用一个空行分隔
2. 片段内每个镜头单独一行，行首标注时间码，格式为 起始-结束（如 0:00-0:05）
3. 需要强调的切换镜头可在时间码后以 ▲ 标记
4. 只输出分镜内容本身，不要编号标题，不要任何额外说明"#;

/// 固定采样温度，略带创造性但遵循协议
pub const TEMPERATURE: f32 = 0.7;

/// 支持的三个后端模型
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModelId {
    #[value(name = "gemini-3-pro-preview")]
    Gemini3ProPreview,
    #[value(name = "gemini-2.5-pro-preview-09-2025")]
    Gemini25ProPreview,
    #[value(name = "gemini-3-flash-preview")]
    Gemini3FlashPreview,
}

impl ModelId {
    /// 透传给后端的模型名，本层不做进一步校验
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Gemini3ProPreview => "gemini-3-pro-preview",
            ModelId::Gemini25ProPreview => "gemini-2.5-pro-preview-09-2025",
            ModelId::Gemini3FlashPreview => "gemini-3-flash-preview",
        }
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单次生成请求，随调用创建、随调用丢弃
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// 原始输入文本，不做修剪
    pub source_text: String,
    pub model: ModelId,
    pub system_instruction: &'static str,
    pub temperature: f32,
}

/// 文本生成后端的统一入口，一次调用对应一次出站请求
#[async_trait]
pub trait TextGenerator {
    async fn generate_text(&self, request: &GenerationRequest) -> Result<String>;
}

/// 分镜生成编排器：前置检查、单次请求、失败归类
///
/// 后端句柄在启动时注入一次，缺失是合法状态，首次调用时报错。
pub struct StoryboardGenerator<B> {
    backend: Option<B>,
}

impl<B: TextGenerator> StoryboardGenerator<B> {
    pub fn new(backend: Option<B>) -> Self {
        Self { backend }
    }

    /// 发起一次生成调用并返回原始回复文本
    ///
    /// 不重试、不流式、不超时；一次请求，一个结论。
    pub async fn generate(&self, source_text: &str, model: ModelId) -> Result<String> {
        let backend = self.backend.as_ref().ok_or(StoryboardError::MissingApiKey)?;

        if source_text.trim().is_empty() {
            return Err(StoryboardError::EmptyInput);
        }

        info!("Generating storyboard with model {}...", model);

        let request = GenerationRequest {
            source_text: source_text.to_string(),
            model,
            system_instruction: SYSTEM_PROMPT,
            temperature: TEMPERATURE,
        };

        let reply = backend.generate_text(&request).await?;
        if reply.is_empty() {
            return Err(StoryboardError::EmptyReply);
        }

        info!("Generated reply: {} characters", reply.len());
        Ok(reply)
    }
}
