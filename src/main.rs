mod api;
mod error;
mod render;
mod segment;

use anyhow::Context;
use api::{GeminiClient, ModelId, StoryboardGenerator};
use clap::Parser;
use error::Result;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "cine-script")]
#[command(about = "Generate cinematic storyboard scripts from narrative text", long_about = None)]
struct Args {
    /// Input narrative text
    #[arg(short, long)]
    text: Option<String>,

    /// Input text file path
    #[arg(short, long)]
    file: Option<String>,

    /// Backend model
    #[arg(short, long, value_enum, default_value = "gemini-3-flash-preview")]
    model: ModelId,

    /// Save the raw reply text to this file
    #[arg(short, long)]
    output: Option<String>,

    /// Print parsed segments as JSON instead of rendered scenes
    #[arg(long)]
    json: bool,

    /// Gemini API key
    #[arg(long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    // 加载环境变量
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // API key 缺失是合法状态，推迟到首次生成调用时报错
    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("GEMINI_API_KEY").ok());

    // 获取输入文本
    let input_text = if let Some(text) = args.text.clone() {
        text
    } else if let Some(file_path) = args.file.clone() {
        tokio::fs::read_to_string(&file_path)
            .await
            .context(format!("Failed to read file: {}", file_path))?
    } else {
        eprintln!("Error: Either --text or --file must be provided");
        std::process::exit(1);
    };

    info!("Input text length: {} characters", input_text.len());

    let generator = StoryboardGenerator::new(api_key.map(GeminiClient::new));

    if let Err(e) = run_generation(&generator, &input_text, &args).await {
        error!("Storyboard generation failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_generation(
    generator: &StoryboardGenerator<GeminiClient>,
    input_text: &str,
    args: &Args,
) -> Result<()> {
    let reply = generator.generate(input_text, args.model).await?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &reply).await?;
        info!("Raw reply saved to: {}", output_path);
    }

    let segments = segment::parse_segments(&reply);
    info!("Parsed {} segments", segments.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        print!("{}", render::render(&reply, &segments));
    }

    Ok(())
}
