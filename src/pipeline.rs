//! Question in, answers out

use crate::answer::{fetch_answers, Answers};
use crate::client::PageSource;
use crate::config::Config;
use crate::error::Result;
use crate::links::find_links;
use crate::query::sanitize_question;
use crate::request::Request;

/// Sanitize the question, search, then fetch the selected answer(s)
pub async fn run<S: PageSource>(source: &S, config: &Config, request: &Request) -> Result<Answers> {
    let question = sanitize_question(request.question.as_slice())?;
    let links = find_links(source, config, &question).await?;
    fetch_answers(source, &links, request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HowdoiError;
    use crate::output::render;
    use std::cell::RefCell;

    const SEARCH: &str = r#"
        <div class="r"><a href="/url?q=https://stackoverflow.com/questions/1/open-file&sa=U">1</a></div>
        <div class="r"><a href="/url?q=https://stackoverflow.com/tags/python&sa=U">tag</a></div>
        <div class="r"><a href="/url?q=https://stackoverflow.com/questions/2/read-file&sa=U">2</a></div>
    "#;

    /// Records every requested URL
    struct Recorder {
        search: &'static str,
        requested: RefCell<Vec<String>>,
    }

    impl Recorder {
        fn new(search: &'static str) -> Self {
            Self {
                search,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl PageSource for Recorder {
        async fn fetch(&self, url: &str) -> Result<String> {
            self.requested.borrow_mut().push(url.to_string());
            if url.contains("/search?") {
                return Ok(self.search.to_string());
            }
            let id = if url.contains("/questions/1/") { 1 } else { 2 };
            Ok(format!(
                r#"<div class="answer"><pre>answer {}</pre></div>"#,
                id
            ))
        }
    }

    fn request(words: &[&str], position: i64, num_answers: i64) -> Request {
        Request::new(
            words.iter().map(|w| w.to_string()).collect(),
            position,
            num_answers,
            false,
            false,
        )
    }

    #[tokio::test]
    async fn test_single_answer() {
        let source = Recorder::new(SEARCH);
        let answers = run(&source, &Config::default(), &request(&["open", "file?"], 1, 1))
            .await
            .unwrap();
        assert_eq!(render(&answers), "answer 1");

        let requested = source.requested.borrow();
        assert_eq!(
            requested[0],
            "https://www.google.com/search?q=site:stackoverflow.com%20open+file"
        );
        assert_eq!(
            requested[1],
            "https://stackoverflow.com/questions/1/open-file?answertab=votes"
        );
    }

    #[tokio::test]
    async fn test_second_position_skips_filtered_link() {
        let source = Recorder::new(SEARCH);
        let answers = run(&source, &Config::default(), &request(&["read", "file"], 2, 1))
            .await
            .unwrap();
        assert_eq!(render(&answers), "answer 2");
    }

    #[tokio::test]
    async fn test_many_answers() {
        let source = Recorder::new(SEARCH);
        let answers = run(&source, &Config::default(), &request(&["file"], 1, 2))
            .await
            .unwrap();
        assert_eq!(
            render(&answers),
            "==== Answer 1 ====\nanswer 1\n==== Answer 2 ====\nanswer 2"
        );
        assert_eq!(source.requested.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_question_never_searches() {
        let source = Recorder::new(SEARCH);
        let err = run(&source, &Config::default(), &request(&[" "], 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, HowdoiError::InvalidInput));
        assert!(source.requested.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_no_results() {
        let source = Recorder::new("<html><body>nothing</body></html>");
        let err = run(&source, &Config::default(), &request(&["zzz"], 1, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, HowdoiError::NoSearchResults));
    }
}
