use accounts::{NewUser, UserManager};
use anyhow::Result;
use model::entities::user;
use tracing::{debug, info, trace};

use crate::cli::CreateUserArgs;
use crate::config::connect;

pub async fn create_user(database_url: &str, args: CreateUserArgs) -> Result<()> {
    trace!("Entering create_user command");
    let manager = UserManager::new(connect(database_url).await?);

    let user = run(&manager, args).await?;
    println!("{}", serde_json::to_string_pretty(&user)?);
    Ok(())
}

/// Create the account described by `args`.
pub async fn run(manager: &UserManager, args: CreateUserArgs) -> Result<user::Model> {
    debug!("Creating user {}", args.email);
    let extra = NewUser {
        name: args.name,
        paternal_surname: args.paternal_surname,
        maternal_surname: args.maternal_surname,
        is_active: args.active,
        is_staff: args.staff,
        is_superuser: false,
    };

    let password = args.password.as_deref().filter(|p| !p.is_empty());
    let user = manager.create_user(&args.email, password, extra).await?;
    info!("Created user {} ({})", user.id, user.full_name().trim());
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_manager;
    use accounts::{AccountError, PasswordExt};

    fn args(email: &str) -> CreateUserArgs {
        CreateUserArgs {
            email: email.to_string(),
            password: Some("pw".to_string()),
            name: "Ana".to_string(),
            paternal_surname: "Lopez".to_string(),
            maternal_surname: "Diaz".to_string(),
            active: false,
            staff: false,
        }
    }

    #[tokio::test]
    async fn test_run_creates_inactive_user() {
        let manager = setup_test_manager().await;

        let user = run(&manager, args("ana@EXAMPLE.com")).await.unwrap();

        assert_eq!(user.email, "ana@example.com");
        assert_eq!(user.full_name(), "Ana Lopez Diaz");
        assert!(!user.is_active);
        assert!(user.check_password("pw"));

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["email"], "ana@example.com");
        assert!(json.get("password").is_none());
    }

    #[tokio::test]
    async fn test_run_with_flags_and_empty_password() {
        let manager = setup_test_manager().await;

        let user = run(
            &manager,
            CreateUserArgs {
                password: Some(String::new()),
                active: true,
                staff: true,
                ..args("staff@example.com")
            },
        )
        .await
        .unwrap();

        assert!(user.is_active);
        assert!(user.is_staff);
        assert!(!user.is_superuser);
        assert!(!user.has_usable_password());
    }

    #[tokio::test]
    async fn test_run_rejects_empty_email() {
        let manager = setup_test_manager().await;

        let err = run(&manager, args("")).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AccountError>(),
            Some(AccountError::EmptyEmail)
        ));
    }
}
