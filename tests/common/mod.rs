use dsfdb::db::SqliteRepo;
use tempfile::TempDir;

/// Fresh repository backed by a database file in its own temp directory.
/// The `TempDir` must stay alive for the duration of the test.
pub fn temp_repo() -> (TempDir, SqliteRepo) {
    let dir = TempDir::new().expect("temp dir");
    let repo = SqliteRepo::new(dir.path().join("dsfdb.db"));
    repo.init().expect("schema init");
    (dir, repo)
}
