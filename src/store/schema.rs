pub const SCHEMA: &str = r#"
-- categories
CREATE TABLE IF NOT EXISTS categorie (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL UNIQUE,
    description VARCHAR(200) NOT NULL
);

-- articles
CREATE TABLE IF NOT EXISTS article (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name VARCHAR(100) NOT NULL UNIQUE,
    description VARCHAR(200) NOT NULL,
    price REAL NOT NULL,
    quantity INTEGER NOT NULL,
    categorie_id INTEGER NOT NULL REFERENCES categorie(id)
);

CREATE INDEX IF NOT EXISTS idx_article_categorie_id ON article(categorie_id);
"#;
