//! Form and query payloads for the HTTP surface.
//!
//! Field names use the camelCase wire layout. Absent fields
//! default to empty strings except where "absent" and "empty" mean different
//! things (the edit-task title).

use serde::Deserialize;

#[derive(Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "boardId")]
    pub board_id: Option<String>,
}

#[derive(Deserialize)]
pub struct NewBoardForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
pub struct NewCategoryForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameCategoryForm {
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCategoryForm {
    #[serde(default)]
    pub category_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTaskForm {
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTaskForm {
    #[serde(default)]
    pub task_id: String,
    /// Option so an omitted title is distinguishable from a submitted empty one.
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskForm {
    #[serde(default)]
    pub task_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusForm {
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderTaskForm {
    #[serde(default)]
    pub task_id: String,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub position: String,
}

#[derive(Deserialize)]
pub struct EmailLoginForm {
    #[serde(default)]
    pub email: String,
}

#[derive(Deserialize)]
pub struct CodeLoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_form_defaults() {
        let form: NewTaskForm =
            serde_json::from_str(r#"{"categoryId":"c1","title":"Fix"}"#).unwrap();
        assert_eq!(form.category_id, "c1");
        assert_eq!(form.title, "Fix");
        assert!(form.description.is_none());
        assert!(form.status.is_none());
    }

    #[test]
    fn test_edit_task_form_absent_vs_empty_title() {
        let absent: EditTaskForm = serde_json::from_str(r#"{"taskId":"t1"}"#).unwrap();
        assert!(absent.title.is_none());

        let empty: EditTaskForm = serde_json::from_str(r#"{"taskId":"t1","title":""}"#).unwrap();
        assert_eq!(empty.title.as_deref(), Some(""));
    }

    #[test]
    fn test_reorder_form_missing_fields_default_to_empty() {
        let form: ReorderTaskForm = serde_json::from_str(r#"{"taskId":"t1"}"#).unwrap();
        assert_eq!(form.task_id, "t1");
        assert_eq!(form.category_id, "");
        assert_eq!(form.position, "");
    }

    #[test]
    fn test_dashboard_query_board_id() {
        let query: DashboardQuery = serde_json::from_str(r#"{"boardId":"b1"}"#).unwrap();
        assert_eq!(query.board_id.as_deref(), Some("b1"));

        let query: DashboardQuery = serde_json::from_str("{}").unwrap();
        assert!(query.board_id.is_none());
    }
}
