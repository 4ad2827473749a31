//! Per-invocation request options

/// Everything one invocation asks for. Built once and passed explicitly
/// through every pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub question: Vec<String>,
    /// 1-based answer position
    pub position: usize,
    pub num_answers: usize,
    pub show_full_text: bool,
    pub show_link_only: bool,
}

impl Request {
    /// Build a request, coercing non-positive position/count to 1
    pub fn new(
        question: Vec<String>,
        position: i64,
        num_answers: i64,
        show_full_text: bool,
        show_link_only: bool,
    ) -> Self {
        Self {
            question,
            position: at_least_one(position),
            num_answers: at_least_one(num_answers),
            show_full_text,
            show_link_only,
        }
    }
}

fn at_least_one(value: i64) -> usize {
    usize::try_from(value).ok().filter(|v| *v >= 1).unwrap_or(1)
}
