//! Google Drive integration catalog. Generated data; keep alphabetized
//! by action key.

use serde_json::json;

use crate::action::{ActionSpec, ResultExtraction};
use crate::app::App;
use crate::extract::ExtractionMode;
use crate::field::{FieldDef, FieldKind};

/// The Google Drive app record.
#[must_use]
pub fn app() -> App {
    App::new("googledrive", "GoogleDrive")
        .with_icon("GoogleDrive")
        .with_documentation("https://docs.composio.dev")
        .with_extraction_mode(ExtractionMode::RecursiveSearch)
        .with_action(
            ActionSpec::new(
                "GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE",
                "Add File Sharing Preference",
            )
            .with_fields([
                "GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_domain",
                "GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_email_address",
                "GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_file_id",
                "GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_role",
                "GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_type",
            ]),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_COPY_FILE", "Copy File").with_fields([
                "GOOGLEDRIVE_COPY_FILE_file_id",
                "GOOGLEDRIVE_COPY_FILE_new_title",
            ]),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_CREATE_FILE_FROM_TEXT", "Create A File From Text")
                .with_fields([
                    "GOOGLEDRIVE_CREATE_FILE_FROM_TEXT_file_name",
                    "GOOGLEDRIVE_CREATE_FILE_FROM_TEXT_mime_type",
                    "GOOGLEDRIVE_CREATE_FILE_FROM_TEXT_parent_id",
                    "GOOGLEDRIVE_CREATE_FILE_FROM_TEXT_text_content",
                ]),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_CREATE_FOLDER", "Create A Folder").with_fields([
                "GOOGLEDRIVE_CREATE_FOLDER_folder_name",
                "GOOGLEDRIVE_CREATE_FOLDER_parent_id",
            ]),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_DELETE_FOLDER_OR_FILE", "Delete Folder Or File")
                .with_field("GOOGLEDRIVE_DELETE_FOLDER_OR_FILE_file_id"),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_DOWNLOAD_FILE", "Download A File From Google Drive")
                .with_fields([
                    "GOOGLEDRIVE_DOWNLOAD_FILE_file_id",
                    "GOOGLEDRIVE_DOWNLOAD_FILE_mime_type",
                ]),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_EDIT_FILE", "Edit File")
                .with_fields([
                    "GOOGLEDRIVE_EDIT_FILE_content",
                    "GOOGLEDRIVE_EDIT_FILE_file_id",
                    "GOOGLEDRIVE_EDIT_FILE_mime_type",
                ])
                .with_extract(ResultExtraction::field("data")),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_FIND_FILE", "Find Files")
                .with_fields([
                    "GOOGLEDRIVE_FIND_FILE_folder_id",
                    "GOOGLEDRIVE_FIND_FILE_full_text_contains",
                    "GOOGLEDRIVE_FIND_FILE_full_text_not_contains",
                    "GOOGLEDRIVE_FIND_FILE_include_items_from_all_drives",
                    "GOOGLEDRIVE_FIND_FILE_mime_type",
                    "GOOGLEDRIVE_FIND_FILE_modified_after",
                    "GOOGLEDRIVE_FIND_FILE_name_contains",
                    "GOOGLEDRIVE_FIND_FILE_name_exact",
                    "GOOGLEDRIVE_FIND_FILE_name_not_contains",
                    "GOOGLEDRIVE_FIND_FILE_page_size",
                    "GOOGLEDRIVE_FIND_FILE_page_token",
                    "GOOGLEDRIVE_FIND_FILE_starred",
                    "GOOGLEDRIVE_FIND_FILE_supports_all_drives",
                ])
                .with_extract(ResultExtraction::field("files")),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_FIND_FOLDER", "Find Folder")
                .with_fields([
                    "GOOGLEDRIVE_FIND_FOLDER_full_text_contains",
                    "GOOGLEDRIVE_FIND_FOLDER_full_text_not_contains",
                    "GOOGLEDRIVE_FIND_FOLDER_modified_after",
                    "GOOGLEDRIVE_FIND_FOLDER_name_contains",
                    "GOOGLEDRIVE_FIND_FOLDER_name_exact",
                    "GOOGLEDRIVE_FIND_FOLDER_name_not_contains",
                    "GOOGLEDRIVE_FIND_FOLDER_starred",
                ])
                .with_extract(ResultExtraction::field("folders")),
        )
        .with_action(
            ActionSpec::new("GOOGLEDRIVE_PARSE_FILE", "Export Or Download A File").with_fields([
                "GOOGLEDRIVE_PARSE_FILE_file_id",
                "GOOGLEDRIVE_PARSE_FILE_mime_type",
            ]),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_domain", "Domain")
                .with_help("Domain to grant permission to (e.g., 'example.com'). Required if 'type' is 'domain'."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_email_address", "Email Address")
                .with_help("Email address of the user or group. Required if 'type' is 'user' or 'group'."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_file_id", "File Id")
                .with_help("Unique identifier of the file to update sharing settings for.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_role", "Role")
                .with_help("Permission role to grant.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_ADD_FILE_SHARING_PREFERENCE_type", "Type")
                .with_help("Type of grantee for the permission.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_COPY_FILE_file_id", "File Id")
                .with_help("The unique identifier for the file on Google Drive that you want to copy.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_COPY_FILE_new_title", "New Title")
                .with_help("The title to assign to the new copy. If not provided, the copy keeps the original title prefixed with 'Copy of '."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_CREATE_FILE_FROM_TEXT_file_name", "File Name")
                .with_help("Desired name for the new file on Google Drive.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_CREATE_FILE_FROM_TEXT_mime_type", "Mime Type")
                .with_help("MIME type for the new file, determining how Google Drive interprets its content.")
                .with_default(json!("text/plain")),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_CREATE_FILE_FROM_TEXT_parent_id", "Parent Id")
                .with_help("ID of the parent folder; if omitted, the file is created in the root of 'My Drive'."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_CREATE_FILE_FROM_TEXT_text_content", "Text Content")
                .with_help("Plain text content to be written into the new file.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_CREATE_FOLDER_folder_name", "Folder Name")
                .with_help("Name for the new folder.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_CREATE_FOLDER_parent_id", "Parent Id")
                .with_help("ID or name of the parent folder. If omitted, the folder is created in the Drive root."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_DELETE_FOLDER_OR_FILE_file_id", "File Id")
                .with_help("The unique identifier (ID) of the folder or file to be permanently deleted from Google Drive.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_DOWNLOAD_FILE_file_id", "File Id")
                .with_help("The unique identifier of the file to be downloaded from Google Drive.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_DOWNLOAD_FILE_mime_type", "Mime Type")
                .with_help("Target MIME type for exporting Google Workspace documents. MUST be omitted for non-Workspace files."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_EDIT_FILE_content", "Content")
                .with_help("New textual content to overwrite the existing file; will be UTF-8 encoded for upload.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_EDIT_FILE_file_id", "File Id")
                .with_help("Identifier of the Google Drive file to update.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_EDIT_FILE_mime_type", "Mime Type")
                .with_help("MIME type of the 'content' being uploaded; must accurately represent its format.")
                .with_default(json!("text/plain")),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_folder_id", "Folder Id")
                .with_help("ID of the folder to search within. If omitted, searches the root folder ('My Drive')."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_full_text_contains", "Full Text Contains")
                .with_help("Searches file content for this text (case-insensitive)."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_full_text_not_contains", "Full Text Not Contains")
                .with_help("Excludes files whose content contains this text (case-insensitive)."),
        )
        .with_field(
            FieldDef::new(
                "GOOGLEDRIVE_FIND_FILE_include_items_from_all_drives",
                "Include Items From All Drives",
            )
            .with_kind(FieldKind::Boolean)
            .with_help("Set to true to search all drives, including shared drives. If true, 'supports_all_drives' must also be true.")
            .with_default(json!(true)),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_mime_type", "Mime Type")
                .with_help("Filters files by a specific MIME type (e.g., 'application/pdf')."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_modified_after", "Modified After")
                .with_help("Filters for files modified after this UTC RFC3339 timestamp (e.g., '2023-01-01T00:00:00Z')."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_name_contains", "Name Contains")
                .with_help("Searches for files whose names contain this string (case-insensitive)."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_name_exact", "Name Exact")
                .with_help("Searches for files with an exact, case-sensitive name match."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_name_not_contains", "Name Not Contains")
                .with_help("Excludes files whose names contain this string (case-insensitive)."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_page_size", "Page Size")
                .with_kind(FieldKind::Integer)
                .with_help("The maximum number of files to return per page. Must be at least 1.")
                .with_default(json!(5)),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_page_token", "Page Token")
                .with_help("Token for fetching a specific page of results. If omitted or empty, the first page is returned.")
                .with_default(json!("")),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_starred", "Starred")
                .with_kind(FieldKind::Boolean)
                .with_help("Filters for files that are starred (True) or not starred (False)."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FILE_supports_all_drives", "Supports All Drives")
                .with_kind(FieldKind::Boolean)
                .with_help("Indicates if the application supports searching 'My Drive' and shared drives.")
                .with_default(json!(true)),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FOLDER_full_text_contains", "Full Text Contains")
                .with_help("A string to search for within the full text content of files within folders (case-insensitive)."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FOLDER_full_text_not_contains", "Full Text Not Contains")
                .with_help("A string to exclude from the full text content of files within folders (case-insensitive)."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FOLDER_modified_after", "Modified After")
                .with_help("Search for folders modified after a specific date and time, in RFC 3339 format."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FOLDER_name_contains", "Name Contains")
                .with_help("A substring to search for within folder names (case-insensitive)."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FOLDER_name_exact", "Name Exact")
                .with_help("The exact name of the folder to search for (case-sensitive)."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FOLDER_name_not_contains", "Name Not Contains")
                .with_help("A substring to exclude from folder names."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_FIND_FOLDER_starred", "Starred")
                .with_kind(FieldKind::Boolean)
                .with_help("Set to true to search for folders that are starred, or false for those that are not."),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_PARSE_FILE_file_id", "File Id")
                .with_help("The unique ID of the file stored in Google Drive that you want to export or download.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLEDRIVE_PARSE_FILE_mime_type", "Mime Type")
                .with_help("Target MIME type for exporting Google Workspace documents to a different format."),
        )
        .with_default_action("GOOGLEDRIVE_FIND_FILE")
        .with_default_action("GOOGLEDRIVE_FIND_FOLDER")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_consistent() {
        app().validate().unwrap();
    }

    #[test]
    fn uses_recursive_search_policy() {
        assert_eq!(app().extraction_mode, ExtractionMode::RecursiveSearch);
    }

    #[test]
    fn find_file_extracts_files_field() {
        let app = app();
        let action = app.action("GOOGLEDRIVE_FIND_FILE").unwrap();
        assert_eq!(action.result_field(), Some("files"));
        assert_eq!(action.fields.len(), 13);
    }

    #[test]
    fn boolean_fields_match_source_tables() {
        let app = app();
        for key in [
            "GOOGLEDRIVE_FIND_FILE_include_items_from_all_drives",
            "GOOGLEDRIVE_FIND_FILE_starred",
            "GOOGLEDRIVE_FIND_FILE_supports_all_drives",
            "GOOGLEDRIVE_FIND_FOLDER_starred",
        ] {
            assert_eq!(app.field(key).unwrap().kind, FieldKind::Boolean, "{key}");
        }
    }
}
