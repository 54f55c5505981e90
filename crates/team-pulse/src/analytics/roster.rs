use serde::{Deserialize, Serialize};

use super::performance::domain::{EmployeeId, TeamId};

/// Employee directory record mirrored from the external user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub department: String,
    pub team: Option<TeamId>,
}

/// Team record; `created_by` identifies the team lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub created_by: EmployeeId,
    pub members: Vec<EmployeeId>,
}

impl Team {
    pub fn lead(&self) -> &EmployeeId {
        &self.created_by
    }

    pub fn is_member(&self, employee: &EmployeeId) -> bool {
        self.members.contains(employee)
    }

    /// Fellow members of the team, excluding the employee themselves.
    pub fn peers_of(&self, employee: &EmployeeId) -> Vec<EmployeeId> {
        self.members
            .iter()
            .filter(|member| *member != employee)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Team {
        Team {
            id: TeamId("platform".to_string()),
            name: "Platform".to_string(),
            created_by: EmployeeId("ava".to_string()),
            members: vec![
                EmployeeId("ava".to_string()),
                EmployeeId("noah".to_string()),
                EmployeeId("mia".to_string()),
            ],
        }
    }

    #[test]
    fn peers_exclude_the_employee() {
        let team = team();
        let peers = team.peers_of(&EmployeeId("noah".to_string()));
        assert_eq!(
            peers,
            vec![EmployeeId("ava".to_string()), EmployeeId("mia".to_string())]
        );
    }

    #[test]
    fn lead_is_the_creator() {
        let team = team();
        assert_eq!(team.lead(), &EmployeeId("ava".to_string()));
        assert!(team.is_member(team.lead()));
    }

    #[test]
    fn peers_of_non_member_is_full_roster() {
        let team = team();
        let peers = team.peers_of(&EmployeeId("zoe".to_string()));
        assert_eq!(peers.len(), 3);
    }
}
