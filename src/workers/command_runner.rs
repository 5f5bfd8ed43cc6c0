use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use futures::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};
use crate::config::config_manager::ConfigManager;
use crate::enums::analysis_facet::AnalysisFacet;
use crate::enums::commands::Commands;
use crate::errors::{ForensicError, ForensicResult};
use crate::helpers::input_validator::{ensure_facets_present, ensure_files_present};
use crate::logger::animated_logger::AnimatedLogger;
use crate::logger::report_printer::ReportPrinter;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::archive_service::{fixed_archive_name, ArchiveService};
use crate::services::code_analyzer::CodeAnalyzer;
use crate::services::code_fixer::CodeFixer;
use crate::services::conversation::{ConversationHandle, ConversationService};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::chat_message::ChatMessage;
use crate::structs::chat_transcript::ChatTranscript;
use crate::structs::config::config::Config;
use crate::structs::source_file::SourceFile;
use crate::traits::ai_provider::AiProvider;

pub struct AnalyzeOptions {
    pub archive: PathBuf,
    pub issue: Option<String>,
    pub facets: Vec<AnalysisFacet>,
    pub fix: bool,
    pub chat: bool,
    pub output: Option<PathBuf>,
}

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ForensicResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::Analyze { archive, issue, facet, fix, chat, output } => {
                let options = AnalyzeOptions { archive, issue, facets: facet, fix, chat, output };
                self.analyze_command(options).await
            }
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> ForensicResult<()> {
        log::info!("🚀 Initializing code-forensics configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to pick your model and default facets.", path.display());
        log::info!("🔧 Run 'code-forensics validate' to check your configuration.");
        Ok(())
    }

    async fn validate_command(&self) -> ForensicResult<()> {
        log::info!("🔍 Validating code-forensics configuration...");

        let config = Self::load_config()?;
        log::info!("✅ Configuration is valid");
        log::info!("🤖 Model: {} ({})", config.ai.model, config.ai.provider);
        log::info!(
            "🎯 Default facets: {}",
            config.analysis.facets.iter().map(AnalysisFacet::label).collect::<Vec<_>>().join(", ")
        );

        ConfigManager::resolve_api_key(&config)?;
        log::info!("🔑 API key found in {}", config.ai.api_key_env);
        Ok(())
    }

    fn load_config() -> ForensicResult<Config> {
        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config).map_err(|errors| {
            ForensicError::config_error(
                &errors.join("; "),
                None,
                Some("Fix the listed problems or run 'code-forensics init' for a fresh config"),
            )
        })?;
        Ok(config)
    }

    async fn analyze_command(&self, options: AnalyzeOptions) -> ForensicResult<()> {
        let config = Self::load_config()?;

        let facets = if options.facets.is_empty() {
            config.analysis.facets.clone()
        } else {
            options.facets.clone()
        };
        ensure_facets_present(&facets)?;

        let api_key = ConfigManager::resolve_api_key(&config)?;
        let ai_provider: Arc<dyn AiProvider> = Arc::new(GeminiProvider::new(api_key, &config.ai));

        log::info!("📦 Extracting {}", options.archive.display());
        let files = ArchiveService::extract_from_path(&options.archive).await?;
        ensure_files_present(&files)?;

        let issue = options.issue.clone().unwrap_or_default();
        let analyzer = CodeAnalyzer::new(Arc::clone(&ai_provider));

        let mut logger = AnimatedLogger::new("Analyzing code".to_string());
        logger.start();
        let report = match analyzer.analyze(&files, &issue, &facets).await {
            Ok(report) => {
                logger.stop("Analysis complete").await;
                report
            }
            Err(e) => {
                logger.error("Analysis failed").await;
                return Err(e);
            }
        };

        ReportPrinter::print_analysis_report(&report);

        let conversation = if options.chat {
            Some(ConversationService::new(Arc::clone(&ai_provider)).start_conversation(&files, &issue)?)
        } else {
            None
        };

        if options.fix {
            let output_dir = options.output.clone().unwrap_or_else(|| config.output.output_dir.clone());
            let archive_name = options.archive.file_name().map(|name| name.to_string_lossy().to_string());
            self.fix_command(ai_provider, &files, &report, archive_name.as_deref(), &output_dir).await?;
        }

        if let Some(conversation) = conversation {
            self.chat_loop(&conversation).await?;
        }

        Ok(())
    }

    async fn fix_command(
        &self,
        ai_provider: Arc<dyn AiProvider>,
        files: &[SourceFile],
        report: &AnalysisResult,
        archive_name: Option<&str>,
        output_dir: &Path,
    ) -> ForensicResult<()> {
        let fixer = CodeFixer::new(ai_provider);

        let mut logger = AnimatedLogger::new("Applying fixes and generating new codebase".to_string());
        logger.start();
        let changed_files = match fixer.generate_fixes(files, report).await {
            Ok(changed_files) => {
                logger.stop("Fix generation complete").await;
                changed_files
            }
            Err(e) => {
                logger.error("Fix generation failed").await;
                return Err(e);
            }
        };

        ReportPrinter::print_fix_summary(&changed_files);

        let blob = ArchiveService::create_archive(&changed_files, &fixed_archive_name(archive_name))?;
        let saved = ArchiveService::save_archive(blob, output_dir).await?;
        log::info!("📥 Archive ready: {}", saved.display());
        Ok(())
    }

    async fn chat_loop(&self, conversation: &ConversationHandle) -> ForensicResult<()> {
        let mut transcript = ChatTranscript::with_greeting();
        Self::print_last(&transcript);
        println!("(type 'exit' or 'quit' to leave)");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("\n🧑 You: ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let message = line.trim();
            if message.is_empty() {
                continue;
            }
            if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
                break;
            }

            transcript.push_user(message);

            let mut stream = match conversation.send_message(message).await {
                Ok(stream) => stream,
                Err(e) => {
                    log::error!("Chat error: {}", e.technical_details());
                    transcript.push_error(&e.to_string());
                    Self::print_last(&transcript);
                    continue;
                }
            };

            transcript.begin_model_turn();
            print!("🤖 AI: ");
            while let Some(result) = stream.next().await {
                match result {
                    Ok(delta) => {
                        print!("{}", delta);
                        std::io::stdout().flush()?;
                        transcript.append_to_last(&delta);
                    }
                    Err(e) => {
                        log::error!("Chat error: {}", e.technical_details());
                        transcript.push_error(&e.to_string());
                        println!();
                        Self::print_last(&transcript);
                    }
                }
            }
            println!();
        }

        log::info!("👋 Conversation ended after {} messages", transcript.messages().len());
        Ok(())
    }

    fn print_last(transcript: &ChatTranscript) {
        if let Some(message) = transcript.messages().last() {
            Self::print_message(message);
        }
    }

    fn print_message(message: &ChatMessage) {
        println!("🤖 AI: {}", message.content);
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
