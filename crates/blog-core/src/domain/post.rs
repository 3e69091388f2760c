use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::{not_blank, required_web_url};

/// Database-assigned identifier of a post.
pub type PostId = i32;

/// Human-readable date format stamped on new posts, e.g. `October 19, 2026`.
const POST_DATE_FORMAT: &str = "%B %d, %Y";

/// Post entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub subtitle: String,
    /// Creation date, set once and never edited.
    pub date: String,
    /// Rich-text HTML. Opaque to the store.
    pub body: String,
    pub author: String,
    pub img_url: String,
}

/// The editable fields of a post, as submitted by the create and edit forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostDraft {
    #[validate(
        custom(function = "not_blank"),
        length(max = 250, message = "Must be at most 250 characters.")
    )]
    pub title: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 250, message = "Must be at most 250 characters.")
    )]
    pub subtitle: String,
    #[validate(custom(function = "not_blank"))]
    pub body: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 250, message = "Must be at most 250 characters.")
    )]
    pub author: String,
    #[validate(
        custom(function = "required_web_url"),
        length(max = 250, message = "Must be at most 250 characters.")
    )]
    pub img_url: String,
}

/// A validated draft stamped with its creation date, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    pub body: String,
    pub author: String,
    pub img_url: String,
}

impl NewPost {
    /// Stamp a draft with the given creation date.
    pub fn from_draft(draft: PostDraft, created_on: NaiveDate) -> Self {
        Self {
            title: draft.title,
            subtitle: draft.subtitle,
            date: format_post_date(created_on),
            body: draft.body,
            author: draft.author,
            img_url: draft.img_url,
        }
    }

    /// Materialise the stored record once the database has assigned an id.
    pub fn with_id(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            subtitle: self.subtitle,
            date: self.date,
            body: self.body,
            author: self.author,
            img_url: self.img_url,
        }
    }
}

impl Post {
    /// Overwrite every editable field, keeping `id` and `date`.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.subtitle = draft.subtitle;
        self.body = draft.body;
        self.author = draft.author;
        self.img_url = draft.img_url;
    }

    /// The editable fields of this post, used to pre-fill the edit form.
    pub fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            body: self.body.clone(),
            author: self.author.clone(),
            img_url: self.img_url.clone(),
        }
    }
}

/// Format a creation date the way posts display it.
pub fn format_post_date(date: NaiveDate) -> String {
    date.format(POST_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Hello".to_string(),
            subtitle: "World".to_string(),
            body: "<p>x</p>".to_string(),
            author: "A".to_string(),
            img_url: "http://example.com/i.png".to_string(),
        }
    }

    #[test]
    fn test_date_format_matches_long_month_style() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        assert_eq!(format_post_date(date), "October 09, 2026");
    }

    #[test]
    fn test_apply_keeps_id_and_date() {
        let created = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let mut post = NewPost::from_draft(draft(), created).with_id(7);

        let mut edited = draft();
        edited.title = "Changed".to_string();
        post.apply(edited);

        assert_eq!(post.id, 7);
        assert_eq!(post.date, "January 02, 2024");
        assert_eq!(post.title, "Changed");
        assert_eq!(post.subtitle, "World");
    }

    #[test]
    fn test_to_draft_round_trips_editable_fields() {
        let created = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let post = NewPost::from_draft(draft(), created).with_id(1);
        assert_eq!(post.to_draft(), draft());
    }
}
