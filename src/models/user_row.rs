use crate::models::{Role, UserRecord};

/// One line of the rendered users list.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub editing: bool,
}

impl UserRow {
    pub fn from_record(user: &UserRecord, editing: bool) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            editing,
        }
    }
}

/// An `<option>` of a selector.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn roles(current: Role) -> Vec<SelectOption> {
        Role::ALL
            .iter()
            .map(|r| SelectOption {
                value: r.as_str().to_string(),
                label: r.label().to_string(),
                selected: *r == current,
            })
            .collect()
    }

    pub fn page_sizes(sizes: &[u32], current: u32) -> Vec<SelectOption> {
        sizes
            .iter()
            .map(|n| SelectOption {
                value: n.to_string(),
                label: n.to_string(),
                selected: *n == current,
            })
            .collect()
    }
}
