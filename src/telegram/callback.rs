//! Callback payload decoding
//!
//! Inline-button payloads are opaque strings on the wire. They are decoded
//! exactly once, here, into a tagged command; everything downstream
//! switches on enums. Unknown payloads decode to `None` and are dropped at
//! the router.

use crate::core::types::Department;

/// Admin-panel actions carried in `admin_*` payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminAction {
    /// "What do you want to add?" submenu.
    ShowAddMenu,
    /// Department-selection menu for editing.
    ChooseDepartment,
    /// A department key was picked. Kept as the raw key so the engine can
    /// reject stale or forged payloads with a proper notice.
    AddDepartment { key: String },
    /// Start the add-event dialog.
    AddEvent,
    /// Event list with delete buttons.
    DeleteMenu,
    /// Delete one event by id.
    DeleteEvent { id: i64 },
    /// Back to the top-level admin menu.
    Back,
}

/// Decoded inline-button press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackCommand {
    /// Open the department-selection menu.
    Departments,
    /// Show the event feed.
    Events,
    /// Show one department's page.
    Department(Department),
    /// Back to the main menu.
    BackToMain,
    Admin(AdminAction),
}

impl CallbackCommand {
    /// Wire encoding used when building keyboards.
    pub fn as_callback_data(&self) -> String {
        match self {
            CallbackCommand::Departments => "departments".to_string(),
            CallbackCommand::Events => "events".to_string(),
            CallbackCommand::Department(dept) => format!("department_{}", dept.key()),
            CallbackCommand::BackToMain => "back_to_main".to_string(),
            CallbackCommand::Admin(action) => match action {
                AdminAction::ShowAddMenu => "admin_add".to_string(),
                AdminAction::ChooseDepartment => "admin_add_dept".to_string(),
                AdminAction::AddDepartment { key } => format!("admin_add_dept_{}", key),
                AdminAction::AddEvent => "admin_add_event".to_string(),
                AdminAction::DeleteMenu => "admin_delete".to_string(),
                AdminAction::DeleteEvent { id } => format!("admin_del_event_{}", id),
                AdminAction::Back => "admin_back".to_string(),
            },
        }
    }

    /// Decodes a raw payload; `None` for anything unrecognized.
    pub fn parse(data: &str) -> Option<CallbackCommand> {
        match data {
            "departments" => return Some(CallbackCommand::Departments),
            "events" => return Some(CallbackCommand::Events),
            "back_to_main" => return Some(CallbackCommand::BackToMain),
            "admin_add" => return Some(CallbackCommand::Admin(AdminAction::ShowAddMenu)),
            "admin_add_dept" => return Some(CallbackCommand::Admin(AdminAction::ChooseDepartment)),
            "admin_add_event" => return Some(CallbackCommand::Admin(AdminAction::AddEvent)),
            "admin_delete" => return Some(CallbackCommand::Admin(AdminAction::DeleteMenu)),
            "admin_back" => return Some(CallbackCommand::Admin(AdminAction::Back)),
            _ => {}
        }

        if let Some(key) = data.strip_prefix("admin_add_dept_") {
            return Some(CallbackCommand::Admin(AdminAction::AddDepartment { key: key.to_string() }));
        }
        if let Some(raw_id) = data.strip_prefix("admin_del_event_") {
            return raw_id
                .parse::<i64>()
                .ok()
                .map(|id| CallbackCommand::Admin(AdminAction::DeleteEvent { id }));
        }
        if let Some(key) = data.strip_prefix("department_") {
            return key.parse::<Department>().ok().map(CallbackCommand::Department);
        }

        None
    }
}
