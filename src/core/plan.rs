//! The built-in rewrite plan.
//!
//! Two fixed targets, processed in order: the Drizzle schema and the
//! generated DB types. The table itself moves from `app_users` to `users`
//! naming (index and constraint identifiers included) while the exported
//! schema symbol moves the other way, from `users` to `appUsers`, so that
//! TypeScript call sites keep compiling against an unambiguous name.
//!
//! The rule lists run in order against progressively rewritten text and
//! deliberately include redundant entries; see the notes on each list.

use serde::Serialize;

use crate::rewrite::RewriteRule;

/// Schema file, relative to the project root.
pub const SCHEMA_PATH: &str = "src/db/schema.ts";

/// Generated DB types file, relative to the project root.
pub const TYPES_PATH: &str = "src/db/types.ts";

/// One file to rewrite: a relative path plus its ordered rule list.
#[derive(Debug, Clone, Serialize)]
pub struct FileTarget {
    pub path: String,
    pub rules: Vec<RewriteRule>,
}

/// Rules for the schema file. All single-occurrence. Order matters only
/// between rules 6 and 7: rule 7 repeats rule 6 inside a wider literal, so
/// it no-ops once rule 6 has rewritten the relation body.
pub fn schema_rules() -> Vec<RewriteRule> {
    vec![
        RewriteRule::first("pgTable(\n  \"app_users\",", "pgTable(\n  \"users\","),
        RewriteRule::first(
            "uniqueIndex(\"app_users_email_unique\")",
            "uniqueIndex(\"users_email_unique\")",
        ),
        RewriteRule::first(
            "index(\"app_users_tenant_id_idx\")",
            "index(\"users_tenant_id_idx\")",
        ),
        RewriteRule::first("export const users = pgTable", "export const appUsers = pgTable"),
        RewriteRule::first(
            "export const userRelations = relations(users,",
            "export const userRelations = relations(appUsers,",
        ),
        RewriteRule::first(
            "fields: [users.tenantId],\n    references: [tenants.id],",
            "fields: [appUsers.tenantId],\n    references: [tenants.id],",
        ),
        RewriteRule::first(
            "tenant: one(tenants, {\n    fields: [users.tenantId],\n    references: [tenants.id],\n  }),",
            "tenant: one(tenants, {\n    fields: [appUsers.tenantId],\n    references: [tenants.id],\n  }),",
        ),
        RewriteRule::first(
            "user: one(users, {\n    fields: [sessions.userId],\n    references: [users.id],\n  }),",
            "user: one(appUsers, {\n    fields: [sessions.userId],\n    references: [appUsers.id],\n  }),",
        ),
        RewriteRule::first(
            "export type User = typeof users.$inferSelect;",
            "export type User = typeof appUsers.$inferSelect;",
        ),
        RewriteRule::first(
            "export type NewUser = typeof users.$inferInsert;",
            "export type NewUser = typeof appUsers.$inferInsert;",
        ),
    ]
}

/// Rules for the generated types file. The blanket rule rewrites every
/// `app_users` occurrence; the three identifier rules stay behind it as
/// no-ops on already-rewritten text.
pub fn types_rules() -> Vec<RewriteRule> {
    vec![
        RewriteRule::all("app_users", "users"),
        RewriteRule::all(
            "\"app_users_tenant_id_tenants_id_fk\"",
            "\"users_tenant_id_tenants_id_fk\"",
        ),
        RewriteRule::all("\"app_users_email_unique\"", "\"users_email_unique\""),
        RewriteRule::all("\"app_users_tenant_id_idx\"", "\"users_tenant_id_idx\""),
    ]
}

/// The full plan, in execution order.
pub fn targets() -> Vec<FileTarget> {
    vec![
        FileTarget {
            path: SCHEMA_PATH.to_string(),
            rules: schema_rules(),
        },
        FileTarget {
            path: TYPES_PATH.to_string(),
            rules: types_rules(),
        },
    ]
}
