//! Headless harness for the stopwatch navigation shell.
//!
//! Wires the production collaborators (SQLite session store, write-through
//! preferences, HTTP feedback sender, store-review deep link) to logging page
//! stubs and drives the coordinator from stdin:
//!
//! ```text
//! start | reset | save      timer page events
//! history | timer           reveal transitions
//! scroll <x>                report a scroll offset in points
//! y | n                     answer the current survey question
//! <any other text>          free-text body while the survey input is open
//! quit
//! ```

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use dotenvy::dotenv;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use stopwatch_shell::feedback::{
    DeepLinkReviewPrompt, FeedbackSender, HttpFeedbackSender, LogFeedbackSender, SurveyInput,
    SurveyQuestion,
};
use stopwatch_shell::models::AppConfig;
use stopwatch_shell::services::{
    ConnectRetry, PreferencesStore, SessionStore, SqliteSessionStore,
};
use stopwatch_shell::shell::{
    Coordinator, DialogHost, HistoryEvent, HistoryPage, SurveyDriver, TimerEvent, TimerPage,
};

// Stand-in viewport, points. Only ratios matter to the shell.
const VIEWPORT_WIDTH: f64 = 375.0;

struct LoggingTimerPage;

impl TimerPage for LoggingTimerPage {
    fn refresh_history_hint(&mut self) {
        info!("[timer page] refresh history hint");
    }

    fn set_history_button_visible(&mut self, visible: bool) {
        info!("[timer page] history button visible: {}", visible);
    }
}

struct LoggingHistoryPage;

impl HistoryPage for LoggingHistoryPage {
    fn show_live_preview(&mut self) {
        info!("[history page] show live preview");
    }

    fn hide_live_preview(&mut self) {
        info!("[history page] hide live preview");
    }

    fn reload(&mut self) {
        info!("[history page] reload list");
    }
}

struct ConsoleDialogHost;

impl DialogHost for ConsoleDialogHost {
    fn present(&mut self, question: SurveyQuestion) {
        println!("== {} [y/n{}]", question.prompt(), match question {
            SurveyQuestion::FeedbackInput => ", or type your feedback",
            _ => "",
        });
    }

    fn dismiss(&mut self) {
        println!("== (dialog dismissed)");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cfg = AppConfig::from_env()?;

    let store = Arc::new(
        SqliteSessionStore::connect(&cfg.database_url, ConnectRetry::from_env()).await?,
    );
    info!("{} sessions on record", store.session_count().await?);

    let prefs = PreferencesStore::open(cfg.prefs_path.clone())?;

    let sender: Arc<dyn FeedbackSender> = match &cfg.feedback_url {
        Some(url) => Arc::new(HttpFeedbackSender::new(
            reqwest::Client::new(),
            url.clone(),
        )),
        None => Arc::new(LogFeedbackSender),
    };

    let survey = SurveyDriver::new(
        Box::new(ConsoleDialogHost),
        sender,
        Box::new(DeepLinkReviewPrompt::default()),
    );

    let mut coordinator = Coordinator::new(
        store.clone(),
        prefs,
        VIEWPORT_WIDTH,
        Box::new(LoggingTimerPage),
        Box::new(LoggingHistoryPage),
        survey,
    );

    coordinator.initialize().await?;
    println!("stopwatch-shell ready; commands: start reset save history timer scroll <x> y n quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "quit" | "exit" => break,
            "start" => {
                coordinator.handle_timer_event(TimerEvent::Started).await?;
            }
            "reset" => {
                coordinator.handle_timer_event(TimerEvent::Reset).await?;
            }
            "save" => {
                let id = store.record_session(Utc::now(), 0).await?;
                info!("recorded session {}", id);
                coordinator.handle_timer_event(TimerEvent::Saved).await?;
            }
            "history" => {
                coordinator.handle_timer_event(TimerEvent::ShowHistory).await?;
            }
            "timer" => {
                coordinator.handle_history_event(HistoryEvent::ShowTimer);
            }
            "y" if coordinator.survey_active() => {
                coordinator.survey_answer(SurveyInput::Positive).await;
            }
            "n" if coordinator.survey_active() => {
                coordinator.survey_answer(SurveyInput::Negative).await;
            }
            _ => {
                if let Some(offset) = line.strip_prefix("scroll ") {
                    match offset.trim().parse::<f64>() {
                        Ok(x) => coordinator.on_scroll(x)?,
                        Err(_) => println!("scroll expects a number, got {:?}", offset),
                    }
                } else if coordinator.survey_active() {
                    coordinator
                        .survey_answer(SurveyInput::Submit(line.to_string()))
                        .await;
                } else {
                    println!("unknown command: {:?}", line);
                }
            }
        }
    }

    info!(
        "exiting on page {:?}, paging enabled: {}",
        coordinator.surface().current_page(),
        coordinator.surface().scroll_enabled()
    );
    Ok(())
}
