// src/views/page.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    config::{Config, NICKNAME_MAX_CHARS},
    models::{question::QuestionBank, ranking::RankingEntry, session::SessionState},
    timing::format_elapsed,
    views::scripts::{clock_script, idle_reset_script},
};

const CLOCK_ELEMENT_ID: &str = "elapsed";

/// Where the inactivity reset sends the browser. `GET /` always opens a fresh session.
const RESET_URL: &str = "/";

/// Per-request additions to the page that are not part of the session itself.
#[derive(Debug, Default, Clone)]
pub struct PageExtras {
    pub notice: Option<String>,
    pub warning: Option<String>,
    /// Nickname to keep in the input after a rejected registration.
    pub name: String,
    pub ranking: Option<Vec<RankingEntry>>,
}

impl PageExtras {
    pub fn warning(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            warning: Some(message.into()),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn ranking(rows: Vec<RankingEntry>, notice: Option<String>) -> Self {
        Self {
            notice,
            ranking: Some(rows),
            ..Self::default()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionView {
    /// Zero-based index, echoed back with the answer to detect stale submissions.
    pub index: usize,
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub clock_label: String,
}

#[derive(Debug, Serialize)]
pub struct RankingRow {
    pub rank: usize,
    pub name: String,
    pub score: u32,
    pub time: String,
}

#[derive(Debug, Serialize)]
pub struct ResultsView {
    pub score: u32,
    pub total: usize,
    pub registered: bool,
    pub name: String,
    pub name_max: usize,
    pub ranking: Option<Vec<RankingRow>>,
}

/// Everything the template needs; a pure function of bank, session and extras.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub title: String,
    pub question: Option<QuestionView>,
    pub results: Option<ResultsView>,
    pub notice: Option<String>,
    pub warning: Option<String>,
    pub scripts: Vec<String>,
}

impl PageView {
    pub fn project(
        config: &Config,
        bank: &QuestionBank,
        session: &SessionState,
        now: DateTime<Utc>,
        extras: PageExtras,
    ) -> Self {
        let active_question = if session.finished {
            None
        } else {
            bank.get(session.current_index)
        };

        let (question, results, scripts) = match active_question {
            Some(q) => {
                let view = QuestionView {
                    index: session.current_index,
                    number: session.current_index + 1,
                    total: bank.len(),
                    prompt: q.prompt.clone(),
                    options: q.options.clone(),
                    clock_label: format_elapsed(session.elapsed(now)),
                };
                let clock = clock_script(
                    CLOCK_ELEMENT_ID,
                    session.started_at.timestamp_millis(),
                    config.clock_tick,
                );
                (Some(view), None, vec![clock])
            }
            None => {
                let ranking = extras.ranking.map(|rows| {
                    rows.into_iter()
                        .enumerate()
                        .map(|(idx, row)| RankingRow {
                            rank: idx + 1,
                            name: row.name,
                            score: row.score,
                            time: format!("{:.1}", row.time_taken_seconds),
                        })
                        .collect()
                });
                let view = ResultsView {
                    score: session.score,
                    total: bank.len(),
                    registered: session.registered.is_some(),
                    name: extras.name,
                    name_max: NICKNAME_MAX_CHARS,
                    ranking,
                };
                let idle = idle_reset_script(RESET_URL, config.idle_reset);
                (None, Some(view), vec![idle])
            }
        };

        Self {
            title: config.quiz_title.clone(),
            question,
            results,
            notice: extras.notice,
            warning: extras.warning,
            scripts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn active_session_projects_current_question() {
        let bank = QuestionBank::builtin();
        let mut session = SessionState::new(t(0));
        session.advance(&bank, "1985");

        let page = PageView::project(
            &Config::default(),
            &bank,
            &session,
            t(75),
            PageExtras::default(),
        );
        let q = page.question.unwrap();

        assert_eq!((q.index, q.number, q.total), (1, 2, 3));
        assert_eq!(q.options, bank.get(1).unwrap().options);
        assert_eq!(q.clock_label, "01:15");
        assert!(page.results.is_none());
        assert!(page.scripts[0].contains("setInterval"));
    }

    #[test]
    fn finished_session_projects_results_with_idle_reset() {
        let bank = QuestionBank::builtin();
        let mut session = SessionState::new(t(0));
        for answer in ["2004", "4 bits", "Rust"] {
            session.advance(&bank, answer);
        }

        let rows = vec![RankingEntry {
            name: "GuestB".to_string(),
            score: 2,
            time_taken_seconds: 15.0,
        }];
        let page = PageView::project(
            &Config::default(),
            &bank,
            &session,
            t(20),
            PageExtras::ranking(rows, Some("ok".to_string())),
        );

        assert!(page.question.is_none());
        let results = page.results.unwrap();
        assert_eq!((results.score, results.total), (2, 3));
        let ranking = results.ranking.unwrap();
        assert_eq!(ranking[0].rank, 1);
        assert_eq!(ranking[0].time, "15.0");
        assert_eq!(page.notice.as_deref(), Some("ok"));
        assert_eq!(page.scripts.len(), 1);
        assert!(page.scripts[0].contains("setTimeout(resetApp, 30000)"));
    }
}
