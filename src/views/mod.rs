// src/views/mod.rs

pub mod page;
pub mod scripts;

use minijinja::Environment;

use crate::error::AppError;

pub use page::{PageExtras, PageView};

/// Compiled page templates. Built once at startup and shared.
#[derive(Debug)]
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.add_template("layout.html", include_str!("../../templates/layout.html"))?;
        env.add_template("quiz.html", include_str!("../../templates/quiz.html"))?;
        Ok(Self { env })
    }

    pub fn render(&self, page: &PageView) -> Result<String, AppError> {
        let template = self.env.get_template("quiz.html")?;
        Ok(template.render(page)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::{
        config::Config,
        models::{question::QuestionBank, ranking::RankingEntry, session::SessionState},
    };

    fn start() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn finished(bank: &QuestionBank) -> SessionState {
        let mut session = SessionState::new(start());
        while !session.finished {
            session.advance(bank, "nope");
        }
        session
    }

    #[test]
    fn question_page_lists_every_option_as_a_button() {
        let views = Views::new().unwrap();
        let bank = QuestionBank::builtin();
        let session = SessionState::new(start());
        let page = PageView::project(
            &Config::default(),
            &bank,
            &session,
            start(),
            PageExtras::default(),
        );

        let html = views.render(&page).unwrap();

        assert!(html.contains("Festival Original Quiz"));
        assert!(html.contains("Question 1 of 3"));
        assert!(html.contains(r#"<span id="elapsed">00:00</span>"#));
        for (idx, option) in bank.get(0).unwrap().options.iter().enumerate() {
            assert!(html.contains(&format!(r#"name="option" value="{}""#, idx)));
            assert!(html.contains(option.as_str()));
        }
        assert!(!html.contains("resetApp"));
    }

    #[test]
    fn results_page_escapes_player_input() {
        let views = Views::new().unwrap();
        let bank = QuestionBank::builtin();
        let session = finished(&bank);
        let extras = PageExtras::warning("Nicknames can be at most 6 characters.", "<b>x</b>");
        let page = PageView::project(&Config::default(), &bank, &session, start(), extras);

        let html = views.render(&page).unwrap();

        assert!(html.contains("0 correct"));
        assert!(html.contains("Nicknames can be at most 6 characters."));
        assert!(!html.contains("<b>x</b>"));
        assert!(html.contains(r#"maxlength="6""#));
        assert!(html.contains("resetApp"));
        assert!(!html.contains("id=\"elapsed\""));
    }

    #[test]
    fn ranking_table_appears_after_registration() {
        let views = Views::new().unwrap();
        let bank = QuestionBank::builtin();
        let mut session = finished(&bank);
        session.registered = Some(RankingEntry {
            name: "Mika".to_string(),
            score: 0,
            time_taken_seconds: 9.0,
        });
        let rows = vec![RankingEntry {
            name: "GuestA".to_string(),
            score: 3,
            time_taken_seconds: 12.5,
        }];
        let page = PageView::project(
            &Config::default(),
            &bank,
            &session,
            start(),
            PageExtras::ranking(rows, None),
        );

        let html = views.render(&page).unwrap();

        assert!(html.contains("GuestA"));
        assert!(html.contains("12.5"));
        assert!(!html.contains(r#"action="/register""#));
        assert!(html.contains(r#"action="/restart""#));
    }
}
