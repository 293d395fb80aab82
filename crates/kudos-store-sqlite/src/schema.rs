//! SQL schema for the Kudos SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS posts (
    post_id     TEXT PRIMARY KEY,
    author_id   TEXT NOT NULL,
    title       TEXT NOT NULL,
    body        TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS comments (
    comment_id  TEXT PRIMARY KEY,
    post_id     TEXT NOT NULL,
    author_id   TEXT NOT NULL,
    body        TEXT NOT NULL,
    created_at  TEXT NOT NULL
);

-- content_id is deliberately not a foreign key: a like outlives the content
-- it points at, and listings drop such rows through the inner join.
CREATE TABLE IF NOT EXISTS likes (
    like_id       TEXT PRIMARY KEY,
    user_id       TEXT NOT NULL,
    content_type  TEXT NOT NULL,   -- 'post' | 'comment'
    content_id    TEXT NOT NULL,
    created_at    TEXT NOT NULL,
    UNIQUE (user_id, content_type, content_id)
);

CREATE INDEX IF NOT EXISTS likes_content_idx   ON likes(content_type, content_id);
CREATE INDEX IF NOT EXISTS likes_user_idx      ON likes(user_id, content_type);
CREATE INDEX IF NOT EXISTS posts_created_idx    ON posts(created_at);
CREATE INDEX IF NOT EXISTS comments_created_idx ON comments(created_at);

PRAGMA user_version = 1;
";
