//! `attest analyze` — run the trust-score pipeline on one file.

use std::path::Path;

use anyhow::Context;
use attest_config::AttestConfig;
use attest_core::CertificateSubmission;
use attest_oracle::{GeminiOracle, TemplateLookupTool};
use attest_pipeline::TrustPipeline;
use attest_registry::{HttpTemplateStore, MemoryTemplateStore, RegistryClient, TemplateStore};

use crate::activity::{self, ActivityRecord};
use crate::cli::AnalyzeArgs;
use crate::media;

pub async fn handle(args: &AnalyzeArgs, config: &AttestConfig) -> anyhow::Result<()> {
    if !config.oracle.is_configured() {
        anyhow::bail!(
            "oracle is not configured; set ATTEST_ORACLE__API_KEY or add [oracle] api_key to .attest/config.toml"
        );
    }

    if args.seed || !config.registry.is_configured() {
        if !args.seed {
            tracing::warn!("no registry configured, using seeded in-memory template store");
        }
        run(args, config, MemoryTemplateStore::seeded()).await
    } else {
        let store =
            HttpTemplateStore::new(config.registry.base_url.clone(), config.registry.timeout_secs);
        run(args, config, store).await
    }
}

async fn run<S: TemplateStore + 'static>(
    args: &AnalyzeArgs,
    config: &AttestConfig,
    store: S,
) -> anyhow::Result<()> {
    let submission = load_submission(&args.file, args.institution.as_deref()).await?;
    let file_name = submission
        .file_name
        .clone()
        .unwrap_or_else(|| args.file.display().to_string());

    let tool = TemplateLookupTool::new(RegistryClient::new(store));
    let oracle = GeminiOracle::new(
        config.oracle.api_key.clone(),
        config.oracle.model.clone(),
        config.oracle.base_url.clone(),
        config.oracle.timeout_secs,
        tool,
    );
    let pipeline = TrustPipeline::new(oracle);

    match pipeline.generate_trust_score(&submission).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            if !args.no_activity {
                let record = ActivityRecord::from_report(
                    &file_name,
                    &report,
                    config.general.fraud_threshold,
                );
                append_activity(config, &record)?;
            }
            Ok(())
        }
        Err(error) => {
            if !args.no_activity {
                let record = ActivityRecord::failure(&file_name, &error.to_string());
                append_activity(config, &record)?;
            }
            Err(error.into())
        }
    }
}

async fn load_submission(
    path: &Path,
    institution: Option<&str>,
) -> anyhow::Result<CertificateSubmission> {
    let media_type = media::media_type_for(path).with_context(|| {
        format!(
            "unsupported file type '{}': expected pdf, png, jpg, or webp",
            path.display()
        )
    })?;

    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read '{}'", path.display()))?;

    let mut submission = CertificateSubmission::new(bytes, media_type);
    if let Some(name) = institution {
        submission = submission.with_declared_institution(name);
    }
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        submission = submission.with_file_name(name);
    }
    Ok(submission)
}

fn append_activity(config: &AttestConfig, record: &ActivityRecord) -> anyhow::Result<()> {
    let path = Path::new(&config.general.activity_log);
    activity::append(path, record)
        .with_context(|| format!("failed to append activity record to '{}'", path.display()))
}
