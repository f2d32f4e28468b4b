//! PostgreSQL implementation of TemplateRepository.
//!
//! Templates live in `templates`, tags in `tags`, and the ordered association
//! in `template_tags` (`position` keeps insertion order). Writes that touch
//! more than one table run in a transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgConnection, PgExecutor, PgPool, Postgres, Row, Transaction};
use std::collections::HashMap;

use crate::domain::foundation::{DomainError, ErrorCode, TagId, TemplateId, Timestamp};
use crate::domain::template::{
    NewTemplate, Tag, TagName, Template, TemplateChanges, TemplateFilter,
};
use crate::ports::TemplateRepository;

/// PostgreSQL implementation of TemplateRepository.
#[derive(Clone)]
pub struct PostgresTemplateRepository {
    pool: PgPool,
}

impl PostgresTemplateRepository {
    /// Creates a new PostgresTemplateRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> Result<Transaction<'static, Postgres>, DomainError> {
        self.pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))
    }
}

#[async_trait]
impl TemplateRepository for PostgresTemplateRepository {
    async fn list(&self, filter: &TemplateFilter) -> Result<Vec<Template>, DomainError> {
        // An unknown tag name means no tag filter at all.
        let tag_id = match filter.tag.as_deref() {
            Some(name) => find_tag_id(&self.pool, name).await?,
            None => None,
        };
        let pattern = filter.search.as_deref().map(like_pattern);

        let rows = sqlx::query(
            r#"
            SELECT t.id, t.title, t.content, t.created_at, t.updated_at
            FROM templates t
            WHERE ($1::text IS NULL
                   OR t.title ILIKE $1 ESCAPE '\'
                   OR t.content ILIKE $1 ESCAPE '\')
              AND ($2::bigint IS NULL
                   OR EXISTS (SELECT 1 FROM template_tags tt
                              WHERE tt.template_id = t.id AND tt.tag_id = $2))
            ORDER BY t.id
            "#,
        )
        .bind(pattern)
        .bind(tag_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list templates", e))?;

        let ids: Vec<i64> = rows
            .iter()
            .map(|row| row.try_get("id"))
            .collect::<Result<_, _>>()
            .map_err(|e| DomainError::database("Failed to read template id", e))?;
        let mut tags = load_tags(&self.pool, &ids).await?;

        rows.into_iter()
            .map(|row| {
                let id: i64 = row
                    .try_get("id")
                    .map_err(|e| DomainError::database("Failed to read template id", e))?;
                row_to_template(row, tags.remove(&id).unwrap_or_default())
            })
            .collect()
    }

    async fn find_by_id(&self, id: TemplateId) -> Result<Option<Template>, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DomainError::database("Failed to acquire connection", e))?;
        fetch_template(&mut conn, id).await
    }

    async fn create(&self, template: NewTemplate) -> Result<Template, DomainError> {
        let now = Timestamp::now();
        let mut tx = self.begin().await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO templates (title, content, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id
            "#,
        )
        .bind(&template.title)
        .bind(&template.content)
        .bind(now.as_datetime())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert template", e))?;

        let tags = attach_tags(&mut tx, id, &template.tag_names).await?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit template", e))?;

        Ok(Template::reconstitute(
            TemplateId::new(id),
            template.title,
            template.content,
            tags,
            now,
            now,
        ))
    }

    async fn update(
        &self,
        id: TemplateId,
        changes: TemplateChanges,
    ) -> Result<Template, DomainError> {
        let mut tx = self.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE templates SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(changes.title.as_deref())
        .bind(changes.content.as_deref())
        .bind(Timestamp::now().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to update template", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        if let Some(tag_names) = changes.tag_names.as_deref() {
            sqlx::query("DELETE FROM template_tags WHERE template_id = $1")
                .bind(id.as_i64())
                .execute(&mut *tx)
                .await
                .map_err(|e| DomainError::database("Failed to clear template tags", e))?;
            attach_tags(&mut tx, id.as_i64(), tag_names).await?;
        }

        let template = fetch_template(&mut *tx, id).await?.ok_or_else(|| not_found(id))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit template", e))?;

        Ok(template)
    }

    async fn delete(&self, id: TemplateId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete template", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
        let rows = sqlx::query("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to list tags", e))?;

        rows.into_iter().map(row_to_tag).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn not_found(id: TemplateId) -> DomainError {
    DomainError::new(
        ErrorCode::TemplateNotFound,
        format!("Template not found: {}", id),
    )
    .with_detail("template_id", id.to_string())
}

/// Wraps a search term for `ILIKE`, escaping its wildcards.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

async fn find_tag_id<'e, E>(executor: E, name: &str) -> Result<Option<i64>, DomainError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar("SELECT id FROM tags WHERE name = $1")
        .bind(name)
        .fetch_optional(executor)
        .await
        .map_err(|e| DomainError::database("Failed to look up tag", e))
}

async fn fetch_template(
    conn: &mut PgConnection,
    id: TemplateId,
) -> Result<Option<Template>, DomainError> {
    let row = sqlx::query(
        "SELECT id, title, content, created_at, updated_at FROM templates WHERE id = $1",
    )
    .bind(id.as_i64())
    .fetch_optional(&mut *conn)
    .await
    .map_err(|e| DomainError::database("Failed to fetch template", e))?;

    match row {
        Some(row) => {
            let mut tags = load_tags(&mut *conn, &[id.as_i64()]).await?;
            let template = row_to_template(row, tags.remove(&id.as_i64()).unwrap_or_default())?;
            Ok(Some(template))
        }
        None => Ok(None),
    }
}

/// Tags for each template id, in association order.
async fn load_tags<'e, E>(executor: E, ids: &[i64]) -> Result<HashMap<i64, Vec<Tag>>, DomainError>
where
    E: PgExecutor<'e>,
{
    let mut by_template: HashMap<i64, Vec<Tag>> = HashMap::new();
    if ids.is_empty() {
        return Ok(by_template);
    }

    let rows = sqlx::query(
        r#"
        SELECT tt.template_id, g.id, g.name
        FROM template_tags tt
        JOIN tags g ON g.id = tt.tag_id
        WHERE tt.template_id = ANY($1)
        ORDER BY tt.template_id, tt.position
        "#,
    )
    .bind(ids)
    .fetch_all(executor)
    .await
    .map_err(|e| DomainError::database("Failed to load template tags", e))?;

    for row in rows {
        let template_id: i64 = row
            .try_get("template_id")
            .map_err(|e| DomainError::database("Failed to read template_id", e))?;
        by_template
            .entry(template_id)
            .or_default()
            .push(row_to_tag(row)?);
    }

    Ok(by_template)
}

/// Reuses or creates each tag by name and links them in order.
///
/// The upsert's no-op `DO UPDATE` makes `RETURNING` yield the existing row,
/// so concurrent creators of one name converge on a single tag.
async fn attach_tags(
    tx: &mut Transaction<'static, Postgres>,
    template_id: i64,
    names: &[TagName],
) -> Result<Vec<Tag>, DomainError> {
    let mut tags = Vec::with_capacity(names.len());

    for (position, name) in names.iter().enumerate() {
        let tag_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO tags (name) VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(name.as_str())
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to resolve tag", e))?;

        sqlx::query(
            "INSERT INTO template_tags (template_id, tag_id, position) VALUES ($1, $2, $3)",
        )
        .bind(template_id)
        .bind(tag_id)
        .bind(position as i32)
        .execute(&mut **tx)
        .await
        .map_err(|e| DomainError::database("Failed to link tag", e))?;

        tags.push(Tag::new(TagId::new(tag_id), name.clone()));
    }

    Ok(tags)
}

fn row_to_template(row: PgRow, tags: Vec<Tag>) -> Result<Template, DomainError> {
    let read = |e: sqlx::Error| DomainError::database("Failed to read template row", e);

    let id: i64 = row.try_get("id").map_err(read)?;
    let title: String = row.try_get("title").map_err(read)?;
    let content: String = row.try_get("content").map_err(read)?;
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(read)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(read)?;

    Ok(Template::reconstitute(
        TemplateId::new(id),
        title,
        content,
        tags,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

fn row_to_tag(row: PgRow) -> Result<Tag, DomainError> {
    let read = |e: sqlx::Error| DomainError::database("Failed to read tag row", e);

    let id: i64 = row.try_get("id").map_err(read)?;
    let name: String = row.try_get("name").map_err(read)?;
    let name = TagName::new(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid tag stored with id {}: {}", id, e),
        )
    })?;

    Ok(Tag::new(TagId::new(id), name))
}
