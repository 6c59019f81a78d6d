//! Item repository — ownership-scoped CRUD, soft-delete lifecycle, and the
//! listing query engine.
//!
//! Every read and write is scoped by `owner_id`. The scoped getter never
//! distinguishes "not found" from "owned by someone else", and it does not
//! filter on `is_deleted` — soft-deleted items resolve like any other so
//! restore and repeated soft-delete work uniformly.
//!
//! Mutations are read-modify-write: the caller passes the current [`Item`],
//! the repository writes the new row state and returns an updated copy.

use std::fmt::Write as _;

use rusqlite::types::ToSql;
use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use taskforge_core::validation::{DEFAULT_PAGE_LIMIT, validate_page, validate_title};
use taskforge_core::{Item, ItemPatch, ItemStatus};

use crate::errors::Result;

/// Column list shared by every item SELECT, in [`map_row`] order.
const ITEM_COLUMNS: &str =
    "id, owner_id, title, description, status, is_deleted, created_at, updated_at";

/// Options for creating a new item.
pub struct CreateItemOptions<'a> {
    /// Owning user's ID.
    pub owner_id: &'a str,
    /// Title, at least five characters.
    pub title: &'a str,
    /// Optional description.
    pub description: Option<&'a str>,
    /// Initial status; defaults to [`ItemStatus::Pending`].
    pub status: Option<ItemStatus>,
}

/// Options for listing items.
///
/// `include_deleted` is an exclusive toggle: `false` returns only live
/// items, `true` returns only soft-deleted items — never both.
#[derive(Clone, Debug)]
pub struct ListItemsOptions {
    /// Exact status filter.
    pub status: Option<ItemStatus>,
    /// Toggle between live items (false) and soft-deleted items (true).
    pub include_deleted: bool,
    /// Rows to skip, applied after filtering and ordering.
    pub offset: i64,
    /// Page size, capped at [`taskforge_core::MAX_PAGE_LIMIT`].
    pub limit: i64,
}

impl Default for ListItemsOptions {
    fn default() -> Self {
        Self {
            status: None,
            include_deleted: false,
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Item repository — stateless, every method takes `&Connection`.
pub struct ItemRepo;

impl ItemRepo {
    /// Create a new item owned by `opts.owner_id`.
    ///
    /// Validates the title, defaults the status to `Pending`, and sets
    /// `created_at = updated_at = now`.
    pub fn create(conn: &Connection, opts: &CreateItemOptions<'_>) -> Result<Item> {
        validate_title(opts.title)?;
        let id = format!("item_{}", Uuid::now_v7());
        let now = now_rfc3339();
        let status = opts.status.unwrap_or_default();

        let _ = conn.execute(
            "INSERT INTO items (id, owner_id, title, description, status, is_deleted, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?6)",
            params![id, opts.owner_id, opts.title, opts.description, status.as_str(), now],
        )?;

        Ok(Item {
            id,
            owner_id: opts.owner_id.to_string(),
            title: opts.title.to_string(),
            description: opts.description.map(String::from),
            status,
            is_deleted: false,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Ownership-scoped lookup.
    ///
    /// Returns the item only if it exists and is owned by `owner_id`;
    /// absence covers both cases so callers cannot probe other users'
    /// items. Soft-deleted items resolve normally.
    pub fn get_scoped(conn: &Connection, item_id: &str, owner_id: &str) -> Result<Option<Item>> {
        let row = conn
            .query_row(
                &format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1 AND owner_id = ?2"),
                params![item_id, owner_id],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// List items for one owner, newest first.
    ///
    /// Ordering is `created_at DESC` with ties broken by `id DESC` so
    /// repeated calls return the same page absent mutation. Rejects
    /// `limit` above the cap and negative `offset`.
    pub fn list(conn: &Connection, owner_id: &str, opts: &ListItemsOptions) -> Result<Vec<Item>> {
        validate_page(opts.offset, opts.limit)?;

        let mut sql =
            format!("SELECT {ITEM_COLUMNS} FROM items WHERE owner_id = ?1");
        let mut param_values: Vec<Box<dyn ToSql>> = vec![Box::new(owner_id.to_string())];

        if opts.include_deleted {
            sql.push_str(" AND is_deleted = 1");
        } else {
            sql.push_str(" AND is_deleted = 0");
        }
        if let Some(status) = opts.status {
            let _ = write!(sql, " AND status = ?{}", param_values.len() + 1);
            param_values.push(Box::new(status.as_str().to_string()));
        }
        sql.push_str(" ORDER BY created_at DESC, id DESC");
        let _ = write!(sql, " LIMIT {} OFFSET {}", opts.limit, opts.offset);

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn ToSql> = param_values.iter().map(Box::as_ref).collect();
        let rows = stmt
            .query_map(params_refs.as_slice(), Self::map_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Apply a partial update and return the new item state.
    ///
    /// Absent patch fields leave the stored value untouched; an explicit
    /// null description clears it. Always refreshes `updated_at`.
    pub fn update(conn: &Connection, item: &Item, patch: &ItemPatch) -> Result<Item> {
        if let Some(title) = &patch.title {
            validate_title(title)?;
        }

        let mut updated = item.clone();
        if let Some(title) = &patch.title {
            updated.title = title.clone();
        }
        if let Some(description) = &patch.description {
            updated.description = description.clone();
        }
        if let Some(status) = patch.status {
            updated.status = status;
        }
        if let Some(is_deleted) = patch.is_deleted {
            updated.is_deleted = is_deleted;
        }
        updated.updated_at = now_rfc3339();

        let _ = conn.execute(
            "UPDATE items SET title = ?1, description = ?2, status = ?3, is_deleted = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                updated.title,
                updated.description,
                updated.status.as_str(),
                updated.is_deleted,
                updated.updated_at,
                updated.id,
            ],
        )?;

        Ok(updated)
    }

    /// Mark an item soft-deleted. Idempotent; still bumps `updated_at`.
    pub fn soft_delete(conn: &Connection, item: &Item) -> Result<Item> {
        Self::set_deleted(conn, item, true)
    }

    /// Clear the soft-delete marker. Idempotent; still bumps `updated_at`.
    pub fn restore(conn: &Connection, item: &Item) -> Result<Item> {
        Self::set_deleted(conn, item, false)
    }

    /// Remove an item permanently. Irreversible.
    pub fn permanent_delete(conn: &Connection, item: &Item) -> Result<()> {
        let _ = conn.execute("DELETE FROM items WHERE id = ?1", params![item.id])?;
        Ok(())
    }

    /// Soft-delete a batch of items in one transaction.
    ///
    /// IDs that do not exist or belong to another owner are silently
    /// dropped; the returned vec is exactly the affected subset, newest
    /// first.
    pub fn soft_delete_many(
        conn: &Connection,
        item_ids: &[String],
        owner_id: &str,
    ) -> Result<Vec<Item>> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let tx = conn.unchecked_transaction()?;
        let now = now_rfc3339();

        let placeholders = numbered_placeholders(3, item_ids.len());
        let sql = format!(
            "UPDATE items SET is_deleted = 1, updated_at = ?1 WHERE owner_id = ?2 AND id IN ({placeholders})"
        );
        let mut update_params: Vec<&dyn ToSql> = vec![&now, &owner_id];
        for id in item_ids {
            update_params.push(id);
        }
        let _ = tx.execute(&sql, update_params.as_slice())?;

        let affected = {
            let placeholders = numbered_placeholders(2, item_ids.len());
            let sql = format!(
                "SELECT {ITEM_COLUMNS} FROM items WHERE owner_id = ?1 AND id IN ({placeholders})
                 ORDER BY created_at DESC, id DESC"
            );
            let mut stmt = tx.prepare(&sql)?;
            let mut select_params: Vec<&dyn ToSql> = vec![&owner_id];
            for id in item_ids {
                select_params.push(id);
            }
            stmt.query_map(select_params.as_slice(), Self::map_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?
        };

        tx.commit()?;
        Ok(affected)
    }

    /// Permanently delete a batch of items in one transaction.
    ///
    /// Same silent ownership filter as [`Self::soft_delete_many`]; returns
    /// nothing.
    pub fn permanent_delete_many(
        conn: &Connection,
        item_ids: &[String],
        owner_id: &str,
    ) -> Result<()> {
        if item_ids.is_empty() {
            return Ok(());
        }

        let tx = conn.unchecked_transaction()?;
        let placeholders = numbered_placeholders(2, item_ids.len());
        let sql =
            format!("DELETE FROM items WHERE owner_id = ?1 AND id IN ({placeholders})");
        let mut delete_params: Vec<&dyn ToSql> = vec![&owner_id];
        for id in item_ids {
            delete_params.push(id);
        }
        let _ = tx.execute(&sql, delete_params.as_slice())?;
        tx.commit()?;
        Ok(())
    }

    fn set_deleted(conn: &Connection, item: &Item, deleted: bool) -> Result<Item> {
        let mut updated = item.clone();
        updated.is_deleted = deleted;
        updated.updated_at = now_rfc3339();

        let _ = conn.execute(
            "UPDATE items SET is_deleted = ?1, updated_at = ?2 WHERE id = ?3",
            params![deleted, updated.updated_at, updated.id],
        )?;
        Ok(updated)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
        let status_text: String = row.get(4)?;
        let status = ItemStatus::parse(&status_text).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                rusqlite::types::Type::Text,
                format!("unknown item status: {status_text}").into(),
            )
        })?;
        Ok(Item {
            id: row.get(0)?,
            owner_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            status,
            is_deleted: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

/// Build `?start, ?start+1, …` placeholders for `count` parameters.
fn numbered_placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
