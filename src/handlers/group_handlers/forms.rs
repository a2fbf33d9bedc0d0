use serde::Deserialize;

use crate::auth::validate::{MAX_NAME_LEN, validate_required};
use crate::errors::AppError;
use crate::models::group::NewGroup;

#[derive(Debug, Deserialize)]
pub struct GroupForm {
    pub name: String,
    pub csrf_token: String,
}

impl GroupForm {
    pub fn to_new_group(&self, leader_id: i64) -> Result<NewGroup, AppError> {
        let name = validate_required(&self.name, "Group name", MAX_NAME_LEN)?;
        Ok(NewGroup { name: name.to_string(), leader_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str) -> GroupForm {
        GroupForm { name: name.to_string(), csrf_token: String::new() }
    }

    #[test]
    fn new_group_belongs_to_the_leader() {
        let g = form(" Romans study ").to_new_group(42).unwrap();
        assert_eq!(g.name, "Romans study");
        assert_eq!(g.leader_id, 42);
    }

    #[test]
    fn blank_name_is_a_validation_error() {
        assert!(matches!(form("").to_new_group(1), Err(AppError::Validation(_))));
    }
}
