pub mod choices;
pub mod entities;

#[cfg(test)]
mod test {
    use chrono::Utc;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, PaginatorTrait, QueryFilter, Set,
    };

    use super::choices::*;
    use super::*;
    use entities::{prediction_result, sociodemographic_profile, user};
    use entities::prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        // Connect to the SQLite database
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    async fn new_user(db: &DatabaseConnection, email: &str) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            email: Set(email.to_string()),
            name: Set("Ana".to_string()),
            paternal_surname: Set("Lopez".to_string()),
            maternal_surname: Set("Diaz".to_string()),
            password: Set("!unusable".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    fn profile_for(user_id: i32, age: i16) -> sociodemographic_profile::ActiveModel {
        sociodemographic_profile::ActiveModel {
            user_id: Set(user_id),
            age: Set(age),
            monthly_income: Set(8500),
            number_of_children: Set(1),
            breastfeeding_duration: Set(6),
            neonatal_illness_type: Set(String::new()),
            infant_age: Set(3),
            place_of_care: Set("Hospital General".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        let ana = new_user(&db, "ana@example.com").await?;
        assert!(!ana.is_active);
        assert!(!ana.is_staff);
        assert!(!ana.is_superuser);
        assert!(ana.date_joined <= Utc::now());
        assert_eq!(ana.full_name(), "Ana Lopez Diaz");
        assert_eq!(ana.short_name(), "Ana");
        assert_eq!(ana.to_string(), "ana@example.com");

        let mut profile = profile_for(ana.id, 27);
        profile.marital_status = Set(Some(MaritalStatus::CommonLawUnion));
        profile.education = Set(Some(Education::Bachelor));
        profile.delivery_type = Set(Some(DeliveryType::Cesarean));
        profile.anesthesia = Set(Some(YesNo::Yes));
        profile.anesthesia_type = Set(Some(AnesthesiaType::Other));
        let profile = profile.insert(&db).await?;

        assert_eq!(profile.age, 27);
        assert_eq!(profile.marital_status, Some(MaritalStatus::CommonLawUnion));
        assert_eq!(profile.anesthesia_type, Some(AnesthesiaType::Other));
        assert_eq!(profile.occupation, None);
        assert_eq!(profile.parity, None);
        assert_eq!(profile.number_of_abortions, 0);
        assert_eq!(profile.describe(&db).await?, "Datos de Ana");

        let first = prediction_result::ActiveModel {
            user_id: Set(ana.id),
            result: Set(1),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        prediction_result::ActiveModel {
            user_id: Set(ana.id),
            result: Set(-2),
            ..Default::default()
        }
        .insert(&db)
        .await?;
        assert_eq!(first.describe(&db).await?, "Predicción para Ana");

        // Read back through the relations
        let stored = SociodemographicProfile::find()
            .filter(sociodemographic_profile::Column::UserId.eq(ana.id))
            .one(&db)
            .await?
            .expect("profile exists");
        assert_eq!(stored, profile);

        let results = ana.find_related(PredictionResult).all(&db).await?;
        assert_eq!(results.len(), 2);
        assert!(results.iter().any(|r| r.result == -2));

        let owner = profile.find_related(User).one(&db).await?;
        assert_eq!(owner.map(|u| u.id), Some(ana.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_email_is_unique() -> Result<(), DbErr> {
        let db = setup_db().await?;
        new_user(&db, "dup@example.com").await?;
        assert!(new_user(&db, "dup@example.com").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_at_most_one_profile_per_user() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = new_user(&db, "one@example.com").await?;

        profile_for(user.id, 30).insert(&db).await?;
        assert!(profile_for(user.id, 31).insert(&db).await.is_err());
        assert_eq!(SociodemographicProfile::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_age_bounds_are_inclusive() -> Result<(), DbErr> {
        let db = setup_db().await?;

        for (i, (age, accepted)) in [(11, false), (12, true), (100, true), (101, false)]
            .into_iter()
            .enumerate()
        {
            let user = new_user(&db, &format!("age{}@example.com", i)).await?;
            let outcome = profile_for(user.id, age).insert(&db).await;
            assert_eq!(outcome.is_ok(), accepted, "age {}", age);
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_negative_counts_are_rejected() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = new_user(&db, "neg@example.com").await?;

        let mut profile = profile_for(user.id, 25);
        profile.number_of_abortions = Set(-1);
        assert!(profile.insert(&db).await.is_err());

        let mut profile = profile_for(user.id, 25);
        profile.monthly_income = Set(-100);
        assert!(profile.insert(&db).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_undeclared_choice_codes_are_rejected() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = new_user(&db, "codes@example.com").await?;
        let profile = profile_for(user.id, 40).insert(&db).await?;

        let update = |column: &str, code: i16| {
            format!(
                "UPDATE sociodemographic_profiles SET {} = {} WHERE id = {}",
                column, code, profile.id
            )
        };

        assert!(db.execute_unprepared(&update("marital_status", 5)).await.is_err());
        assert!(db.execute_unprepared(&update("education", 0)).await.is_err());
        assert!(db.execute_unprepared(&update("breastfeeding", 3)).await.is_err());
        assert!(db.execute_unprepared(&update("anesthesia_type", 3)).await.is_err());
        assert!(db.execute_unprepared(&update("delivery_type", 9)).await.is_err());

        // Declared codes, including the "other" code 0, are accepted
        db.execute_unprepared(&update("anesthesia_type", 0)).await?;
        db.execute_unprepared(&update("parity", 2)).await?;

        let stored = SociodemographicProfile::find_by_id(profile.id)
            .one(&db)
            .await?
            .expect("profile exists");
        assert_eq!(stored.anesthesia_type, Some(AnesthesiaType::Other));
        assert_eq!(stored.parity, Some(Parity::Multigravida));
        Ok(())
    }

    #[tokio::test]
    async fn test_prediction_requires_existing_user() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let outcome = prediction_result::ActiveModel {
            user_id: Set(4242),
            result: Set(1),
            ..Default::default()
        }
        .insert(&db)
        .await;
        assert!(outcome.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_user_cascades() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let gone = new_user(&db, "gone@example.com").await?;
        let kept = new_user(&db, "kept@example.com").await?;

        profile_for(gone.id, 33).insert(&db).await?;
        profile_for(kept.id, 34).insert(&db).await?;
        for (owner, result) in [(gone.id, 0), (gone.id, 1), (kept.id, 1)] {
            prediction_result::ActiveModel {
                user_id: Set(owner),
                result: Set(result),
                ..Default::default()
            }
            .insert(&db)
            .await?;
        }

        User::delete_by_id(gone.id).exec(&db).await?;

        let profiles = SociodemographicProfile::find().all(&db).await?;
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].user_id, kept.id);

        let results = PredictionResult::find().all(&db).await?;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].user_id, kept.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_created_is_not_rewritten_on_update() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user = new_user(&db, "stamp@example.com").await?;
        let profile = profile_for(user.id, 22).insert(&db).await?;

        let mut changed: sociodemographic_profile::ActiveModel = profile.clone().into();
        changed.monthly_income = Set(9000);
        changed.created = Set(Utc::now() + chrono::Duration::days(1));
        let changed = changed.update(&db).await?;

        assert_eq!(changed.monthly_income, 9000);
        assert_eq!(changed.created, profile.created);
        Ok(())
    }
}
