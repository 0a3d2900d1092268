use ielts_core::model::{BandScore, ResultId, TestResult, TestSkill};

use crate::vm::time_fmt::format_short_date;

/// One past attempt on the results history page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultCardVm {
    pub id: ResultId,
    pub skill: TestSkill,
    pub skill_label: &'static str,
    pub title: String,
    pub completed_label: String,
    pub score_label: String,
    pub score_class: &'static str,
    pub time_spent: String,
}

impl From<&TestResult> for ResultCardVm {
    fn from(result: &TestResult) -> Self {
        let summary = result.summary();
        Self {
            id: summary.id.clone(),
            skill: result.skill(),
            skill_label: result.skill().label(),
            title: summary.test_title.clone(),
            completed_label: format!("Completed on {}", format_short_date(summary.completed_at)),
            score_label: summary.score.to_string(),
            score_class: score_class(summary.score),
            time_spent: summary.time_spent.clone(),
        }
    }
}

/// Colour band for a score: 7.5 and up, 6.0 and up, 5.0 and up, below.
#[must_use]
pub fn score_class(score: BandScore) -> &'static str {
    match score.value() {
        v if v >= 7.5 => "score-high",
        v if v >= 6.0 => "score-good",
        v if v >= 5.0 => "score-fair",
        _ => "score-low",
    }
}

/// Skill tab and title search of the history page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// `None` is the "All" tab.
    pub skill: Option<TestSkill>,
    pub search: String,
}

impl HistoryFilter {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.skill.is_some() || !self.search.trim().is_empty()
    }

    /// Cards for the results that pass the filter, in stored order.
    #[must_use]
    pub fn apply(&self, results: &[TestResult]) -> Vec<ResultCardVm> {
        let query = self.search.trim().to_lowercase();
        results
            .iter()
            .filter(|r| self.skill.is_none_or(|skill| r.skill() == skill))
            .filter(|r| query.is_empty() || r.summary().test_title.to_lowercase().contains(&query))
            .map(ResultCardVm::from)
            .collect()
    }

    #[must_use]
    pub fn empty_message(&self) -> &'static str {
        if self.is_active() {
            "No results match your search criteria."
        } else {
            "You haven't completed any tests yet."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::fixtures::mock_results;

    fn ids(cards: &[ResultCardVm]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn all_tab_keeps_stored_order() {
        let cards = HistoryFilter::default().apply(&mock_results());
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].id.as_str(), "reading-result-1");
        assert_eq!(cards[0].completed_label, "Completed on Dec 5, 2023");
        assert_eq!(cards[0].score_label, "7.5");
        assert_eq!(cards[0].score_class, "score-high");
    }

    #[test]
    fn skill_tab_and_search_combine() {
        let filter = HistoryFilter {
            skill: Some(TestSkill::Reading),
            search: "  TEST 2 ".to_string(),
        };
        assert_eq!(ids(&filter.apply(&mock_results())), ["reading-result-2"]);

        let filter = HistoryFilter {
            skill: Some(TestSkill::Writing),
            search: "general".to_string(),
        };
        assert_eq!(ids(&filter.apply(&mock_results())), ["writing-result-2"]);
    }

    #[test]
    fn score_bands() {
        let band = |v| score_class(BandScore::saturating(v));
        assert_eq!(band(8.0), "score-high");
        assert_eq!(band(6.0), "score-good");
        assert_eq!(band(5.5), "score-fair");
        assert_eq!(band(4.5), "score-low");
    }

    #[test]
    fn empty_message_depends_on_filters() {
        let mut filter = HistoryFilter::default();
        assert_eq!(filter.empty_message(), "You haven't completed any tests yet.");
        filter.search = "ielts".to_string();
        assert!(filter.is_active());
        assert_eq!(filter.empty_message(), "No results match your search criteria.");
    }
}
