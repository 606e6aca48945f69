//! Reddit integration catalog. Generated data; keep alphabetized by
//! action key.

use serde_json::json;

use crate::action::{ActionSpec, ResultExtraction};
use crate::app::App;
use crate::extract::ExtractionMode;
use crate::field::{FieldDef, FieldKind};

/// The Reddit app record.
#[must_use]
pub fn app() -> App {
    App::new("reddit", "Reddit")
        .with_icon("Reddit")
        .with_documentation("https://docs.composio.dev")
        .with_extraction_mode(ExtractionMode::SingleKeyUnwrap)
        .with_action(
            ActionSpec::new("REDDIT_CREATE_REDDIT_POST", "Create Reddit Post")
                .with_fields([
                    "REDDIT_CREATE_REDDIT_POST_flair_id",
                    "REDDIT_CREATE_REDDIT_POST_kind",
                    "REDDIT_CREATE_REDDIT_POST_subreddit",
                    "REDDIT_CREATE_REDDIT_POST_text",
                    "REDDIT_CREATE_REDDIT_POST_title",
                    "REDDIT_CREATE_REDDIT_POST_url",
                ])
                .with_extract(ResultExtraction::field("items")),
        )
        .with_action(
            ActionSpec::new("REDDIT_DELETE_REDDIT_COMMENT", "Delete Reddit Comment")
                .with_field("REDDIT_DELETE_REDDIT_COMMENT_id"),
        )
        .with_action(
            ActionSpec::new("REDDIT_DELETE_REDDIT_POST", "Delete Reddit Post")
                .with_field("REDDIT_DELETE_REDDIT_POST_id"),
        )
        .with_action(
            ActionSpec::new("REDDIT_EDIT_REDDIT_COMMENT_OR_POST", "Edit Reddit Comment Or Post")
                .with_fields([
                    "REDDIT_EDIT_REDDIT_COMMENT_OR_POST_text",
                    "REDDIT_EDIT_REDDIT_COMMENT_OR_POST_thing_id",
                ]),
        )
        .with_action(
            ActionSpec::new("REDDIT_GET_USER_FLAIR", "Get User Flair")
                .with_field("REDDIT_GET_USER_FLAIR_subreddit")
                .with_extract(ResultExtraction::field("flair_list")),
        )
        .with_action(
            ActionSpec::new("REDDIT_POST_REDDIT_COMMENT", "Post Reddit Comment").with_fields([
                "REDDIT_POST_REDDIT_COMMENT_text",
                "REDDIT_POST_REDDIT_COMMENT_thing_id",
            ]),
        )
        .with_action(
            ActionSpec::new("REDDIT_RETRIEVE_POST_COMMENTS", "Retrieve Post Comments")
                .with_field("REDDIT_RETRIEVE_POST_COMMENTS_article")
                .with_extract(ResultExtraction::field("comments")),
        )
        .with_action(
            ActionSpec::new("REDDIT_RETRIEVE_REDDIT_POST", "Retrieve Reddit Post")
                .with_fields([
                    "REDDIT_RETRIEVE_REDDIT_POST_size",
                    "REDDIT_RETRIEVE_REDDIT_POST_subreddit",
                ])
                .with_extract(ResultExtraction::field("posts_list")),
        )
        .with_action(
            ActionSpec::new("REDDIT_RETRIEVE_SPECIFIC_COMMENT", "Retrieve Specific Comment")
                .with_field("REDDIT_RETRIEVE_SPECIFIC_COMMENT_id")
                .with_extract(ResultExtraction::field("things")),
        )
        .with_action(
            ActionSpec::new("REDDIT_SEARCH_ACROSS_SUBREDDITS", "Search Across Subreddits")
                .with_fields([
                    "REDDIT_SEARCH_ACROSS_SUBREDDITS_limit",
                    "REDDIT_SEARCH_ACROSS_SUBREDDITS_restrict_sr",
                    "REDDIT_SEARCH_ACROSS_SUBREDDITS_search_query",
                    "REDDIT_SEARCH_ACROSS_SUBREDDITS_sort",
                ])
                .with_extract(ResultExtraction::field("search_results")),
        )
        .with_field(
            FieldDef::new("REDDIT_CREATE_REDDIT_POST_flair_id", "Flair Id")
                .with_help("The ID of the flair to apply to the post. Use the 'REDDIT_GET_USER_FLAIR' action to find available flair IDs for the specified subreddit.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_CREATE_REDDIT_POST_kind", "Kind")
                .with_help("The type of the post. Use 'self' for a text-based post or 'link' for a post that links to an external URL.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_CREATE_REDDIT_POST_subreddit", "Subreddit")
                .with_help("The name of the subreddit (without the 'r/' prefix) where the post will be submitted.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_CREATE_REDDIT_POST_text", "Text")
                .with_help("The markdown-formatted text content for a 'self' post. Required if `kind` is 'self'."),
        )
        .with_field(
            FieldDef::new("REDDIT_CREATE_REDDIT_POST_title", "Title")
                .with_help("The title of the post. Must be 300 characters or less.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_CREATE_REDDIT_POST_url", "Url")
                .with_help("The URL for a 'link' post. Required if `kind` is 'link'."),
        )
        .with_field(
            FieldDef::new("REDDIT_DELETE_REDDIT_COMMENT_id", "Id")
                .with_help("The full 'thing ID' (fullname, e.g., 't1_c0s4w1c') of the comment to delete; typically starts with 't1_'.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_DELETE_REDDIT_POST_id", "Id")
                .with_help("The full name (fullname) of the Reddit post to be deleted. This ID must start with 't3_' followed by the post's unique base36 identifier.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_EDIT_REDDIT_COMMENT_OR_POST_text", "Text")
                .with_help("The new raw markdown text for the body of the comment or self-post.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_EDIT_REDDIT_COMMENT_OR_POST_thing_id", "Thing Id")
                .with_help("The full name (fullname) of the comment or self-post to edit, e.g. 't1_' for a comment or 't3_' for a post plus the item's ID.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_GET_USER_FLAIR_subreddit", "Subreddit")
                .with_help("Name of the subreddit (e.g., 'pics', 'gaming') for which to retrieve available link flairs.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_POST_REDDIT_COMMENT_text", "Text")
                .with_help("The raw Markdown text of the comment to be submitted.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_POST_REDDIT_COMMENT_thing_id", "Thing Id")
                .with_help("The ID of the parent post (link) or comment, prefixed with 't3_' for a post or 't1_' for a comment.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_RETRIEVE_POST_COMMENTS_article", "Article")
                .with_help("Base_36 ID of the Reddit post (e.g., 'q5u7q5'), typically found in the post's URL and not including the 't3_' prefix.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_RETRIEVE_REDDIT_POST_size", "Size")
                .with_kind(FieldKind::Integer)
                .with_help("The maximum number of posts to return. Default is 5. Set to 0 to retrieve all available posts.")
                .with_default(json!(5)),
        )
        .with_field(
            FieldDef::new("REDDIT_RETRIEVE_REDDIT_POST_subreddit", "Subreddit")
                .with_help("The name of the subreddit from which to retrieve posts (e.g., 'popular', 'pics'). Do not include 'r/'.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_RETRIEVE_SPECIFIC_COMMENT_id", "Id")
                .with_help("Fullname of the comment or post to retrieve (e.g., 't1_c123456', 't3_x56789').")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_SEARCH_ACROSS_SUBREDDITS_limit", "Limit")
                .with_kind(FieldKind::Integer)
                .with_help("The maximum number of search results to return. Default is 5. Maximum allowed value is 100.")
                .with_default(json!(5)),
        )
        .with_field(
            FieldDef::new("REDDIT_SEARCH_ACROSS_SUBREDDITS_restrict_sr", "Restrict Sr")
                .with_kind(FieldKind::Boolean)
                .with_help("If True (default), confines the search to posts and comments within subreddits.")
                .with_default(json!(true)),
        )
        .with_field(
            FieldDef::new("REDDIT_SEARCH_ACROSS_SUBREDDITS_search_query", "Search Query")
                .with_help("The search query string used to find content across subreddits.")
                .required(),
        )
        .with_field(
            FieldDef::new("REDDIT_SEARCH_ACROSS_SUBREDDITS_sort", "Sort")
                .with_help("The criterion for sorting search results: 'relevance' (default), 'new', 'top', or 'comments'.")
                .with_default(json!("relevance")),
        )
        .with_default_action("REDDIT_CREATE_REDDIT_POST")
        .with_default_action("REDDIT_RETRIEVE_REDDIT_POST")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_consistent() {
        app().validate().unwrap();
    }

    #[test]
    fn default_tools_are_sanitized_display_names() {
        let tools = app().default_tools();
        assert!(tools.contains("Create-Reddit-Post"));
        assert!(tools.contains("Retrieve-Reddit-Post"));
        assert_eq!(tools.len(), 2);
    }

    #[test]
    fn create_post_lists_fields_in_catalog_order() {
        let app = app();
        let action = app.action("REDDIT_CREATE_REDDIT_POST").unwrap();
        assert_eq!(action.fields.len(), 6);
        assert_eq!(action.fields[0], "REDDIT_CREATE_REDDIT_POST_flair_id");
        assert_eq!(action.fields[5], "REDDIT_CREATE_REDDIT_POST_url");
        assert_eq!(action.result_field(), Some("items"));
    }

    #[test]
    fn restrict_sr_is_boolean_kind() {
        let app = app();
        let field = app.field("REDDIT_SEARCH_ACROSS_SUBREDDITS_restrict_sr").unwrap();
        assert_eq!(field.kind, FieldKind::Boolean);
        assert_eq!(field.default, Some(json!(true)));
    }
}
