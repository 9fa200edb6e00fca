use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::RepositoryError;

const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::new(row.username)
            .map_err(|e| RepositoryError::Database(format!("Corrupt user row {}: {}", row.id, e)))?;

        Ok(User {
            id: UserId(row.id),
            username,
            password_hash: row.password,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password, created_at, updated_at
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(USERNAME_UNIQUE_CONSTRAINT)
                {
                    return RepositoryError::UsernameTaken(user.username.to_string());
                }
            }
            RepositoryError::Database(e.to_string())
        })?;

        row.try_into()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        row.map(User::try_from).transpose()
    }
}
