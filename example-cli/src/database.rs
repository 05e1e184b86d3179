use sql_engine::{DatabaseBackend, DatabaseEngine};

/// Seed a handful of demo tables so the default in-memory database has
/// something to show.
pub async fn setup(engine: &DatabaseEngine) {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(64) NOT NULL,
            email VARCHAR(128) UNIQUE NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            is_active BOOLEAN DEFAULT true
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(64) NOT NULL,
            price REAL NOT NULL,
            stock INTEGER DEFAULT 0,
            category TEXT
        )
        "#,
        r#"
        INSERT INTO users (name, email) VALUES
            ('Ada', 'ada@example.com'),
            ('Grace', 'grace@example.com')
        "#,
        r#"
        INSERT INTO products (name, price, stock, category) VALUES
            ('widget', 2.5, 10, 'hardware'),
            ('manual', 15.0, 3, 'books')
        "#,
    ];

    for statement in statements {
        let outcome = engine.run(statement).await;
        assert!(!outcome.is_failed(), "failed to seed demo data");
    }
}
