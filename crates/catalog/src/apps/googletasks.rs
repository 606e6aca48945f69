//! Google Tasks integration catalog. Generated data; keep alphabetized
//! by action key.

use serde_json::json;

use crate::action::{ActionSpec, ResultExtraction};
use crate::app::App;
use crate::extract::ExtractionMode;
use crate::field::{FieldDef, FieldKind};

/// The Google Tasks app record.
#[must_use]
pub fn app() -> App {
    App::new("googletasks", "Google Tasks")
        .with_icon("GoogleTasks")
        .with_documentation("https://docs.composio.dev")
        .with_extraction_mode(ExtractionMode::RecursiveSearch)
        .with_action(
            ActionSpec::new("GOOGLETASKS_CLEAR_TASKS", "Clear Tasks")
                .with_field("GOOGLETASKS_CLEAR_TASKS_tasklist")
                .with_extract(ResultExtraction::field("response_data")),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_CREATE_TASK_LIST", "Create A Task List")
                .with_field("GOOGLETASKS_CREATE_TASK_LIST_tasklist_title"),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_DELETE_TASK", "Delete Task").with_fields([
                "GOOGLETASKS_DELETE_TASK_task_id",
                "GOOGLETASKS_DELETE_TASK_tasklist_id",
            ]),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_DELETE_TASK_LIST", "Delete Task List")
                .with_field("GOOGLETASKS_DELETE_TASK_LIST_tasklist_id"),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_GET_TASK", "Get Task")
                .with_fields(["GOOGLETASKS_GET_TASK_task_id", "GOOGLETASKS_GET_TASK_tasklist_id"])
                .with_extract(ResultExtraction::field("task")),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_GET_TASK_LIST", "Get Task List")
                .with_field("GOOGLETASKS_GET_TASK_LIST_tasklist_id")
                .with_extract(ResultExtraction::field("task_list")),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_INSERT_TASK", "Insert Task")
                .with_fields([
                    "GOOGLETASKS_INSERT_TASK_completed",
                    "GOOGLETASKS_INSERT_TASK_deleted",
                    "GOOGLETASKS_INSERT_TASK_due",
                    "GOOGLETASKS_INSERT_TASK_etag",
                    "GOOGLETASKS_INSERT_TASK_hidden",
                    "GOOGLETASKS_INSERT_TASK_id",
                    "GOOGLETASKS_INSERT_TASK_notes",
                    "GOOGLETASKS_INSERT_TASK_status",
                    "GOOGLETASKS_INSERT_TASK_task_parent",
                    "GOOGLETASKS_INSERT_TASK_task_previous",
                    "GOOGLETASKS_INSERT_TASK_tasklist_id",
                    "GOOGLETASKS_INSERT_TASK_title",
                ])
                .with_extract(ResultExtraction::field("task")),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_LIST_TASKS", "List Tasks")
                .with_fields([
                    "GOOGLETASKS_LIST_TASKS_completedMax",
                    "GOOGLETASKS_LIST_TASKS_completedMin",
                    "GOOGLETASKS_LIST_TASKS_dueMax",
                    "GOOGLETASKS_LIST_TASKS_dueMin",
                    "GOOGLETASKS_LIST_TASKS_maxResults",
                    "GOOGLETASKS_LIST_TASKS_pageToken",
                    "GOOGLETASKS_LIST_TASKS_showCompleted",
                    "GOOGLETASKS_LIST_TASKS_showDeleted",
                    "GOOGLETASKS_LIST_TASKS_showHidden",
                    "GOOGLETASKS_LIST_TASKS_tasklist_id",
                    "GOOGLETASKS_LIST_TASKS_updatedMin",
                ])
                .with_extract(ResultExtraction::field("tasks")),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_LIST_TASK_LISTS", "List Task Lists")
                .with_fields([
                    "GOOGLETASKS_LIST_TASK_LISTS_maxResults",
                    "GOOGLETASKS_LIST_TASK_LISTS_pageToken",
                ])
                .with_extract(ResultExtraction::field("items")),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_MOVE_TASK", "Move Task").with_fields([
                "GOOGLETASKS_MOVE_TASK_destinationTasklist",
                "GOOGLETASKS_MOVE_TASK_parent",
                "GOOGLETASKS_MOVE_TASK_previous",
                "GOOGLETASKS_MOVE_TASK_task",
                "GOOGLETASKS_MOVE_TASK_tasklist",
            ]),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_PATCH_TASK", "Patch Task")
                .with_fields([
                    "GOOGLETASKS_PATCH_TASK_completed",
                    "GOOGLETASKS_PATCH_TASK_deleted",
                    "GOOGLETASKS_PATCH_TASK_due",
                    "GOOGLETASKS_PATCH_TASK_etag",
                    "GOOGLETASKS_PATCH_TASK_hidden",
                    "GOOGLETASKS_PATCH_TASK_id",
                    "GOOGLETASKS_PATCH_TASK_notes",
                    "GOOGLETASKS_PATCH_TASK_status",
                    "GOOGLETASKS_PATCH_TASK_task_id",
                    "GOOGLETASKS_PATCH_TASK_tasklist_id",
                    "GOOGLETASKS_PATCH_TASK_title",
                ])
                .with_extract(ResultExtraction::field("task")),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_PATCH_TASK_LIST", "Patch Task List")
                .with_fields([
                    "GOOGLETASKS_PATCH_TASK_LIST_tasklist_id",
                    "GOOGLETASKS_PATCH_TASK_LIST_updated_title",
                ])
                .with_extract(ResultExtraction::field("response_data")),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_UPDATE_TASK", "Update Task").with_fields([
                "GOOGLETASKS_UPDATE_TASK_due",
                "GOOGLETASKS_UPDATE_TASK_notes",
                "GOOGLETASKS_UPDATE_TASK_status",
                "GOOGLETASKS_UPDATE_TASK_task",
                "GOOGLETASKS_UPDATE_TASK_tasklist",
                "GOOGLETASKS_UPDATE_TASK_title",
            ]),
        )
        .with_action(
            ActionSpec::new("GOOGLETASKS_UPDATE_TASK_LIST", "Update Task List").with_fields([
                "GOOGLETASKS_UPDATE_TASK_LIST_tasklist_id",
                "GOOGLETASKS_UPDATE_TASK_LIST_title",
            ]),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_CLEAR_TASKS_tasklist", "Tasklist")
                .with_help("The identifier of the task list from which to clear completed tasks. Use '@default' for the default task list.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_CREATE_TASK_LIST_tasklist_title", "Tasklist Title")
                .with_help("Title for the new task list. The maximum allowed length is 1024 characters.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_DELETE_TASK_task_id", "Task Id")
                .with_help("The unique identifier of the Google Task to be deleted.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_DELETE_TASK_tasklist_id", "Tasklist Id")
                .with_help("The unique identifier of the Google Task list from which the task will be deleted.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_DELETE_TASK_LIST_tasklist_id", "Tasklist Id")
                .with_help("Unique identifier of the Google Task list to be deleted."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_GET_TASK_task_id", "Task Id")
                .with_help("Unique identifier of the Google Task to retrieve.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_GET_TASK_tasklist_id", "Tasklist Id")
                .with_help("Unique identifier of the task list containing the task.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_GET_TASK_LIST_tasklist_id", "Tasklist Id")
                .with_help("Unique identifier of the task list to retrieve.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_completed", "Completed")
                .with_help("Completion date of the task (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_deleted", "Deleted")
                .with_kind(FieldKind::Boolean)
                .with_help("Flag indicating whether the task has been deleted."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_due", "Due")
                .with_help("Due date of the task (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_etag", "Etag").with_help("ETag of the resource."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_hidden", "Hidden")
                .with_kind(FieldKind::Boolean)
                .with_help("Flag indicating whether the task is hidden."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_id", "Id").with_help("Task identifier."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_notes", "Notes")
                .with_help("Notes describing the task."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_status", "Status")
                .with_help("Status of the task (needsAction or completed).")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_task_parent", "Task Parent")
                .with_help("Parent task identifier; omit for a top-level task."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_task_previous", "Task Previous")
                .with_help("Previous sibling task identifier; omit for the first position."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_tasklist_id", "Tasklist Id")
                .with_help("Identifier of the task list to insert the task into.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_INSERT_TASK_title", "Title")
                .with_help("Title of the task. Maximum length allowed: 1024 characters.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_completedMax", "Completed Max")
                .with_help("Upper bound for a task's completion date (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_completedMin", "Completed Min")
                .with_help("Lower bound for a task's completion date (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_dueMax", "Due Max")
                .with_help("Upper bound for a task's due date (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_dueMin", "Due Min")
                .with_help("Lower bound for a task's due date (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_maxResults", "Max Results")
                .with_kind(FieldKind::Integer)
                .with_help("Maximum number of tasks returned on one page."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_pageToken", "Page Token")
                .with_help("Token specifying the result page to return."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_showCompleted", "Show Completed")
                .with_kind(FieldKind::Boolean)
                .with_help("Whether completed tasks are returned in the result."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_showDeleted", "Show Deleted")
                .with_kind(FieldKind::Boolean)
                .with_help("Whether deleted tasks are returned in the result."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_showHidden", "Show Hidden")
                .with_kind(FieldKind::Boolean)
                .with_help("Whether hidden tasks are returned in the result."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_tasklist_id", "Tasklist Id")
                .with_help("Identifier of the task list to enumerate.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASKS_updatedMin", "Updated Min")
                .with_help("Lower bound for a task's last modification time (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASK_LISTS_maxResults", "Max Results")
                .with_kind(FieldKind::Integer)
                .with_help("Maximum number of task lists returned on one page.")
                .with_default(json!(20)),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_LIST_TASK_LISTS_pageToken", "Page Token")
                .with_help("Token specifying the result page to return."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_MOVE_TASK_destinationTasklist", "Destination Tasklist")
                .with_help("Destination task list identifier; omit to move within the same list."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_MOVE_TASK_parent", "Parent")
                .with_help("New parent task identifier; omit to move to the top level."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_MOVE_TASK_previous", "Previous")
                .with_help("New previous sibling task identifier; omit to move to the first position."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_MOVE_TASK_task", "Task")
                .with_help("Task identifier.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_MOVE_TASK_tasklist", "Tasklist")
                .with_help("Task list identifier.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_completed", "Completed")
                .with_help("Completion date of the task (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_deleted", "Deleted")
                .with_kind(FieldKind::Boolean)
                .with_help("Flag indicating whether the task has been deleted."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_due", "Due")
                .with_help("Due date of the task (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_etag", "Etag").with_help("ETag of the resource."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_hidden", "Hidden")
                .with_kind(FieldKind::Boolean)
                .with_help("Flag indicating whether the task is hidden."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_id", "Id").with_help("Task identifier."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_notes", "Notes")
                .with_help("Notes describing the task."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_status", "Status")
                .with_help("Status of the task (needsAction or completed).")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_task_id", "Task Id")
                .with_help("Identifier of the task to be updated.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_tasklist_id", "Tasklist Id")
                .with_help("Identifier of the Google Task list that contains the task to be updated.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_title", "Title")
                .with_help("Title of the task. Maximum length allowed: 1024 characters.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_LIST_tasklist_id", "Tasklist Id")
                .with_help("The unique identifier of the task list to be updated.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_PATCH_TASK_LIST_updated_title", "Updated Title")
                .with_help("The new title for the task list.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_UPDATE_TASK_due", "Due")
                .with_help("Due date of the task (RFC 3339 timestamp)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_UPDATE_TASK_notes", "Notes")
                .with_help("Notes describing the task."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_UPDATE_TASK_status", "Status")
                .with_help("Status of the task (needsAction or completed)."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_UPDATE_TASK_task", "Task")
                .with_help("Task identifier.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_UPDATE_TASK_tasklist", "Tasklist")
                .with_help("Task list identifier.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_UPDATE_TASK_title", "Title")
                .with_help("Title of the task."),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_UPDATE_TASK_LIST_tasklist_id", "Tasklist Id")
                .with_help("Task list identifier.")
                .required(),
        )
        .with_field(
            FieldDef::new("GOOGLETASKS_UPDATE_TASK_LIST_title", "Title")
                .with_help("Title of the task list. Maximum length allowed: 1024 characters.")
                .required(),
        )
        .with_default_action("GOOGLETASKS_CREATE_TASK_LIST")
        .with_default_action("GOOGLETASKS_DELETE_TASK")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_consistent() {
        app().validate().unwrap();
    }

    #[test]
    fn insert_task_extracts_task_field() {
        let app = app();
        let action = app.action("GOOGLETASKS_INSERT_TASK").unwrap();
        assert_eq!(action.fields.len(), 12);
        assert_eq!(action.result_field(), Some("task"));
    }

    #[test]
    fn boolean_fields_match_source_tables() {
        let app = app();
        for key in [
            "GOOGLETASKS_INSERT_TASK_deleted",
            "GOOGLETASKS_INSERT_TASK_hidden",
            "GOOGLETASKS_LIST_TASKS_showCompleted",
            "GOOGLETASKS_LIST_TASKS_showDeleted",
            "GOOGLETASKS_LIST_TASKS_showHidden",
            "GOOGLETASKS_PATCH_TASK_deleted",
            "GOOGLETASKS_PATCH_TASK_hidden",
        ] {
            assert_eq!(app.field(key).unwrap().kind, FieldKind::Boolean, "{key}");
        }
    }
}
