//! CLI binary for md2medium.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `PublishConfig` / `Credentials` and prints results.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use md2medium::config::DEFAULT_API_BASE;
use md2medium::{
    prepare, publish, Credentials, ImageHost, Post, ProgressCallback, PublishConfig,
    PublishPayload, PublishProgressCallback, PublishStatus,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}

// ── CLI progress callback using indicatif ────────────────────────────────────

/// Spinner on stderr while a request is in flight, plus the status lines
/// the user needs (author id hint, what is being published).
struct CliProgressCallback {
    bar: ProgressBar,
    quiet: bool,
}

impl CliProgressCallback {
    fn new(quiet: bool) -> Arc<Self> {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
        bar.set_style(style);
        Arc::new(Self { bar, quiet })
    }

    /// Print a line to stderr without tearing the spinner.
    fn say(&self, line: String) {
        if !self.quiet {
            self.bar.suspend(|| eprintln!("{line}"));
        }
    }

    fn start_spinner(&self, msg: &'static str) {
        self.bar.set_message(msg);
        self.bar.enable_steady_tick(Duration::from_millis(80));
    }

    fn clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl PublishProgressCallback for CliProgressCallback {
    fn on_author_lookup_start(&self) {
        self.say("MEDIUM_USER_ID not set, fetching from API...".to_string());
        self.start_spinner("Fetching user id…");
    }

    fn on_author_resolved(&self, user_id: &str, looked_up: bool) {
        if looked_up {
            self.say(format!("Your Medium user ID is: {}", bold(user_id)));
            self.say(format!("Set it as: export MEDIUM_USER_ID={user_id}"));
        }
    }

    fn on_publish_start(&self, title: &str, status: PublishStatus) {
        self.say(format!("Publishing '{title}' to Medium as {status}..."));
        self.start_spinner("Publishing…");
    }

    fn on_publish_complete(&self, _post: &Post) {
        self.clear();
    }
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Create a draft
  md2medium content/posts/my-post.md

  # Publish publicly, pointing Medium at the original
  md2medium --publish --canonical https://example.org/posts/my-post/ content/posts/my-post.md

  # Show the request body without sending anything
  md2medium --dry-run content/posts/my-post.md

ENVIRONMENT VARIABLES:
  MEDIUM_TOKEN            Integration token (required)
                          Get one at https://medium.com/me/settings/security
  MEDIUM_USER_ID          Author id; looked up via GET /me when unset
  MEDIUM_API_BASE         Override the API endpoint
  MD2MEDIUM_IMAGE_OWNER   GitHub owner serving static/ images
  MD2MEDIUM_IMAGE_REPO    GitHub repository serving static/ images
  MD2MEDIUM_IMAGE_BRANCH  Branch serving static/ images
  RUST_LOG                Log filter (overrides --verbose / --quiet)
"#;

/// Cross-post a Markdown file to Medium.
#[derive(Parser, Debug)]
#[command(
    name = "md2medium",
    version,
    about = "Cross-post a Markdown blog post to Medium",
    long_about = "Read a Markdown file with optional `---` front matter, rewrite relative \
image links to raw GitHub URLs, and create a Medium post (draft by default).",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the Markdown file.
    file: PathBuf,

    /// Publish immediately (default is draft).
    #[arg(long)]
    publish: bool,

    /// Canonical URL (your blog post URL for SEO).
    #[arg(long, value_name = "URL")]
    canonical: Option<String>,

    /// Medium integration token.
    #[arg(long, env = "MEDIUM_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Medium user id; fetched from the API when absent.
    #[arg(long, env = "MEDIUM_USER_ID")]
    user_id: Option<String>,

    /// GitHub owner hosting the site's static/ directory.
    #[arg(long, env = "MD2MEDIUM_IMAGE_OWNER", default_value = "kvsankar")]
    image_owner: String,

    /// GitHub repository hosting the site's static/ directory.
    #[arg(long, env = "MD2MEDIUM_IMAGE_REPO", default_value = "blog")]
    image_repo: String,

    /// Branch to build raw image URLs from.
    #[arg(long, env = "MD2MEDIUM_IMAGE_BRANCH", default_value = "main")]
    image_branch: String,

    /// Medium API base URL.
    #[arg(long, env = "MEDIUM_API_BASE", default_value = DEFAULT_API_BASE, hide = true)]
    api_base: String,

    /// HTTP timeout per request in seconds.
    #[arg(long, env = "MD2MEDIUM_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Print the request body that would be sent and exit.
    #[arg(long)]
    dry_run: bool,

    /// Print the created post as JSON.
    #[arg(long)]
    json: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "MD2MEDIUM_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and the result.
    #[arg(short, long, env = "MD2MEDIUM_QUIET")]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Dry run: no credentials, no network ──────────────────────────────
    if cli.dry_run {
        let config = build_config(&cli, None)?;
        let prepared = prepare(&cli.file, &config).await?;
        let payload =
            PublishPayload::from_prepared(&prepared, config.status, config.canonical_url.as_deref());
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).context("Failed to serialise payload")?
        );
        return Ok(());
    }

    // Checked before anything touches the network.
    let credentials = Credentials::new(cli.token.clone(), cli.user_id.clone())?;

    let progress = CliProgressCallback::new(cli.quiet || cli.json);
    let config = build_config(&cli, Some(progress.clone() as ProgressCallback))?;

    let result = publish(&cli.file, &credentials, &config).await;
    progress.clear();
    let output = result?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialise output")?
        );
    } else {
        println!(
            "{} Post published as {}",
            green("Success!"),
            config.status
        );
        println!("URL: {}", output.post.url);
        if !cli.quiet && !output.post.tags.is_empty() {
            eprintln!("{}", dim(&format!("tags: {}", output.post.tags.join(", "))));
        }
    }

    Ok(())
}

/// Map CLI args to `PublishConfig`.
fn build_config(cli: &Cli, progress: Option<ProgressCallback>) -> Result<PublishConfig> {
    let status = if cli.publish {
        PublishStatus::Public
    } else {
        PublishStatus::Draft
    };

    let mut builder = PublishConfig::builder()
        .status(status)
        .image_host(ImageHost::new(
            cli.image_owner.clone(),
            cli.image_repo.clone(),
            cli.image_branch.clone(),
        ))
        .api_base(cli.api_base.clone())
        .timeout_secs(cli.timeout);

    if let Some(ref url) = cli.canonical {
        builder = builder.canonical_url(url.clone());
    }
    if let Some(cb) = progress {
        builder = builder.progress_callback(cb);
    }

    builder.build().context("Invalid configuration")
}
