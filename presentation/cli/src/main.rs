use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use dotenvy::dotenv;

use business::application::autobiography::generate::GenerateAutobiographyUseCaseImpl;
use business::application::transcription::transcribe::TranscribeAudioUseCaseImpl;
use business::domain::autobiography::services::ManuscriptArchiveService;
use business::domain::autobiography::use_cases::generate::{
    GenerateAutobiographyParams, GenerateAutobiographyUseCase,
};
use business::domain::autobiography::value_objects::ManuscriptFormat;
use business::domain::logger::Logger;
use business::domain::transcription::use_cases::transcribe::{
    TranscribeAudioParams, TranscribeAudioUseCase,
};
use logger::TracingLogger;
use openai::chapter_writer::ChapterWriterOpenAI;
use openai::client::OpenAIClient;
use openai::composer::AutobiographyComposerOpenAI;
use openai::transcriber::WhisperTranscriberOpenAI;
use openai::transcript_analyzer::TranscriptAnalyzerOpenAI;
use storage::input::{self, InputKind};
use storage::manuscript::archive::ManuscriptArchiveFs;

/// Turns a life-story transcript or voice recording into a finished
/// autobiography and writes the manuscript files.
#[derive(Debug, Parser)]
#[command(
    name = "autobiography",
    group(ArgGroup::new("source").required(true).args(["input", "text"]))
)]
struct Args {
    /// Input file, either a text transcript (.txt, .md) or an audio recording
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Life-story text passed directly on the command line
    #[arg(short, long)]
    text: Option<String>,

    /// Directory the manuscript files are written to
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Language of the audio recording
    #[arg(short, long, default_value = "ko")]
    language: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let args = Args::parse();

    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY environment variable must be set")?;
    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());

    let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

    let transcript = match (&args.input, &args.text) {
        (Some(path), _) => {
            read_input(path, &api_key, &model, &args.language, logger.clone()).await?
        }
        (_, Some(text)) => text.clone(),
        (None, None) => anyhow::bail!("either --input or --text is required"),
    };

    let generate: Arc<dyn GenerateAutobiographyUseCase> =
        Arc::new(GenerateAutobiographyUseCaseImpl {
            analyzer: Arc::new(TranscriptAnalyzerOpenAI::new(OpenAIClient::new(
                api_key.clone(),
                model.clone(),
            ))),
            writer: Arc::new(ChapterWriterOpenAI::new(OpenAIClient::new(
                api_key.clone(),
                model.clone(),
            ))),
            composer: Arc::new(AutobiographyComposerOpenAI::new(OpenAIClient::new(
                api_key,
                model,
            ))),
            logger,
        });

    println!("Generating the autobiography, this can take a few minutes...");

    let autobiography = generate
        .execute(GenerateAutobiographyParams { transcript })
        .await?;

    let archive = ManuscriptArchiveFs::new(args.output);
    let saved = archive
        .save(&autobiography, &ManuscriptFormat::ALL)
        .await?;

    println!(
        "Generated \"{}\" by {}.",
        autobiography.title, autobiography.author_name
    );
    for manuscript in saved {
        println!("  {}: {}", manuscript.format, manuscript.path);
    }

    Ok(())
}

/// Reads the input file, transcribing it first when it is a recording.
async fn read_input(
    path: &Path,
    api_key: &str,
    model: &str,
    language: &str,
    logger: Arc<dyn Logger>,
) -> anyhow::Result<String> {
    let kind = input::detect_input_kind(path)
        .with_context(|| format!("unsupported input file: {}", path.display()))?;

    match kind {
        InputKind::Text => input::read_text_file(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        InputKind::Audio(_) => {
            let audio = tokio::fs::read(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;

            let transcribe = TranscribeAudioUseCaseImpl {
                transcriber: Arc::new(WhisperTranscriberOpenAI::new(OpenAIClient::new(
                    api_key.to_string(),
                    model.to_string(),
                ))),
                logger,
            };

            println!("Transcribing {}...", path.display());

            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default();

            Ok(transcribe
                .execute(TranscribeAudioParams {
                    file_name,
                    audio,
                    language: language.to_string(),
                })
                .await?)
        }
    }
}
