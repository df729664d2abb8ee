use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Row lifecycle stored as a plain string column on `users`, `influencers`
/// and `brands`. Deactivation flips it to `Deleted`; rows are never removed.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "deleted")]
    Deleted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveEnum;

    #[test]
    fn maps_to_db_strings() {
        assert_eq!(Status::Active.to_value(), "active");
        assert_eq!(Status::Deleted.to_value(), "deleted");
    }

    #[test]
    fn parses_db_strings() {
        assert_eq!(
            Status::try_from_value(&"active".to_owned()).unwrap(),
            Status::Active
        );
        assert_eq!(
            Status::try_from_value(&"deleted".to_owned()).unwrap(),
            Status::Deleted
        );
        assert!(Status::try_from_value(&"archived".to_owned()).is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "\"active\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"deleted\"").unwrap(),
            Status::Deleted
        );
    }
}
