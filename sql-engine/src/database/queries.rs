//! Catalog SQL for schema introspection, one set per database family
//!
//! Placeholder syntax matches the driver each set targets ($n for
//! PostgreSQL, ? for MySQL). Lengths are cast to a signed 64-bit integer in
//! SQL so every backend decodes through the same column type.

pub mod postgres {
    pub const LIST_TABLES: &str = r#"
        SELECT
            t.table_name,
            obj_description((quote_ident(t.table_schema) || '.' || quote_ident(t.table_name))::regclass) AS table_comment
        FROM information_schema.tables t
        WHERE t.table_schema = 'public'
          AND t.table_type = 'BASE TABLE'
        ORDER BY t.table_name
        "#;

    pub const LIST_COLUMNS: &str = r#"
        SELECT
            c.column_name,
            c.udt_name AS column_type,
            CAST(c.character_maximum_length AS BIGINT) AS column_length,
            c.column_default,
            c.is_nullable,
            col_description(
                (quote_ident(c.table_schema) || '.' || quote_ident(c.table_name))::regclass,
                c.ordinal_position::int
            ) AS column_comment
        FROM information_schema.columns c
        WHERE c.table_name = $1
          AND c.table_schema = $2
        ORDER BY c.ordinal_position
        "#;
}

pub mod mysql {
    pub const LIST_TABLES: &str = r#"
        SELECT
            CONVERT(TABLE_NAME USING utf8) AS table_name,
            CONVERT(TABLE_COMMENT USING utf8) AS table_comment
        FROM information_schema.TABLES
        WHERE TABLE_SCHEMA = DATABASE()
          AND TABLE_TYPE = 'BASE TABLE'
        ORDER BY TABLE_NAME
        "#;

    pub const LIST_COLUMNS: &str = r#"
        SELECT
            CONVERT(COLUMN_NAME USING utf8) AS column_name,
            CONVERT(DATA_TYPE USING utf8) AS column_type,
            CAST(CHARACTER_MAXIMUM_LENGTH AS SIGNED) AS column_length,
            CONVERT(COLUMN_DEFAULT USING utf8) AS column_default,
            CONVERT(IS_NULLABLE USING utf8) AS is_nullable,
            CONVERT(COLUMN_COMMENT USING utf8) AS column_comment
        FROM information_schema.COLUMNS
        WHERE TABLE_NAME = ?
          AND TABLE_SCHEMA = DATABASE()
        ORDER BY ORDINAL_POSITION
        "#;
}

pub mod sqlite {
    pub const LIST_TABLES: &str = r#"
        SELECT name FROM sqlite_master
        WHERE type = 'table'
          AND name NOT LIKE 'sqlite_%'
        ORDER BY name
        "#;
}
