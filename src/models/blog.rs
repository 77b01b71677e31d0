//! Blog article teasers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog article listed in the "Latest blog articles" column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Article title
    pub title: String,
    /// Publication date; only the month and year are displayed
    pub published: NaiveDate,
}

impl BlogPost {
    /// Publication month as shown on the page (e.g., "February 2026").
    #[must_use]
    pub fn display_date(&self) -> String {
        self.published.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date_is_month_and_year() {
        let post = BlogPost {
            title: "Choosing between Postgres and Redis per workload".to_string(),
            published: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
        };
        assert_eq!(post.display_date(), "December 2025");
    }
}
