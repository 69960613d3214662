//! Root for all SeaORM entity modules.
//! The user record is the owner of everything else: profiles, prediction
//! results and permission grants are removed together with their user.

pub mod auth_group;
pub mod auth_permission;
pub mod group_permission;
pub mod prediction_result;
pub mod sociodemographic_profile;
pub mod user;
pub mod user_group;
pub mod user_permission;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::auth_group::Entity as AuthGroup;
    pub use super::auth_permission::Entity as AuthPermission;
    pub use super::group_permission::Entity as GroupPermission;
    pub use super::prediction_result::Entity as PredictionResult;
    pub use super::sociodemographic_profile::Entity as SociodemographicProfile;
    pub use super::user::Entity as User;
    pub use super::user_group::Entity as UserGroup;
    pub use super::user_permission::Entity as UserPermission;
}
