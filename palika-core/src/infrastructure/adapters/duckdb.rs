// palika-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::{Config, Connection, params};
use std::sync::{Arc, Mutex, MutexGuard};

// Imports Hexagonaux
use crate::domain::profile::DemographicSummary;
use crate::error::PalikaError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::repository::{ChartEntry, RawWardCount, Repository};

pub struct DuckDbRepository {
    conn: Arc<Mutex<Connection>>,
}

impl DuckDbRepository {
    pub fn new(db_path: &str) -> Result<Self, InfrastructureError> {
        let config = Config::default();

        let conn = if db_path == ":memory:" {
            Connection::open_in_memory_with_flags(config)?
        } else {
            Connection::open_with_flags(db_path, config)?
        };

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, PalikaError> {
        self.conn.lock().map_err(|_| {
            PalikaError::Infrastructure(InfrastructureError::Io(std::io::Error::other(
                "DuckDB Mutex Poisoned",
            )))
        })
    }
}

#[async_trait]
impl Repository for DuckDbRepository {
    async fn init_schema(&self) -> Result<(), PalikaError> {
        let conn = self.lock()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS ward_counts (
                section     VARCHAR NOT NULL,
                ward        INTEGER NOT NULL,
                category    VARCHAR NOT NULL,
                "count"     BIGINT  NOT NULL CHECK ("count" >= 0),
                PRIMARY KEY (section, ward, category)
            );
            CREATE TABLE IF NOT EXISTS demographic_summary (
                id                INTEGER PRIMARY KEY,
                total_population  BIGINT NOT NULL,
                male_population   BIGINT NOT NULL,
                female_population BIGINT NOT NULL,
                total_households  BIGINT NOT NULL,
                literacy_rate     DOUBLE NOT NULL
            );
            CREATE TABLE IF NOT EXISTS chart_registry (
                key          VARCHAR PRIMARY KEY,
                path         VARCHAR NOT NULL,
                generated_at VARCHAR NOT NULL
            );
            CREATE TABLE IF NOT EXISTS admin_users (
                username   VARCHAR PRIMARY KEY,
                token      VARCHAR NOT NULL,
                created_at VARCHAR NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    async fn upsert_ward_count(
        &self,
        section: &str,
        ward: u32,
        category: &str,
        count: u64,
    ) -> Result<(), PalikaError> {
        let conn = self.lock()?;
        conn.execute(
            r#"INSERT INTO ward_counts (section, ward, category, "count")
               VALUES (?, ?, ?, ?)
               ON CONFLICT (section, ward, category)
               DO UPDATE SET "count" = excluded."count""#,
            params![section, ward, category, count as i64],
        )?;
        Ok(())
    }

    async fn upsert_ward_counts(
        &self,
        section: &str,
        rows: &[RawWardCount],
    ) -> Result<(), PalikaError> {
        let conn = self.lock()?;

        // All-or-nothing: a malformed row aborts the whole seed batch.
        conn.execute_batch("BEGIN TRANSACTION")?;
        let result = (|| -> Result<(), duckdb::Error> {
            let mut stmt = conn.prepare(
                r#"INSERT INTO ward_counts (section, ward, category, "count")
                   VALUES (?, ?, ?, ?)
                   ON CONFLICT (section, ward, category)
                   DO UPDATE SET "count" = excluded."count""#,
            )?;
            for row in rows {
                stmt.execute(params![section, row.ward, row.category, row.count as i64])?;
            }
            Ok(())
        })();

        match result {
            Ok(()) => {
                conn.execute_batch("COMMIT")?;
                Ok(())
            }
            Err(e) => {
                // Rollback failure is secondary; the original error matters.
                let _ = conn.execute_batch("ROLLBACK");
                Err(e.into())
            }
        }
    }

    async fn fetch_ward_counts(&self, section: &str) -> Result<Vec<RawWardCount>, PalikaError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"SELECT ward, category, "count" FROM ward_counts
               WHERE section = ? ORDER BY ward, category"#,
        )?;

        let rows = stmt.query_map(params![section], |row| {
            Ok(RawWardCount {
                ward: row.get(0)?,
                category: row.get(1)?,
                count: row.get::<_, i64>(2)? as u64,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    async fn upsert_summary(&self, summary: &DemographicSummary) -> Result<(), PalikaError> {
        let conn = self.lock()?;
        conn.execute(
            r#"INSERT INTO demographic_summary
               (id, total_population, male_population, female_population,
                total_households, literacy_rate)
               VALUES (1, ?, ?, ?, ?, ?)
               ON CONFLICT (id) DO UPDATE SET
                   total_population  = excluded.total_population,
                   male_population   = excluded.male_population,
                   female_population = excluded.female_population,
                   total_households  = excluded.total_households,
                   literacy_rate     = excluded.literacy_rate"#,
            params![
                summary.total_population as i64,
                summary.male_population as i64,
                summary.female_population as i64,
                summary.total_households as i64,
                summary.literacy_rate,
            ],
        )?;
        Ok(())
    }

    async fn fetch_summary(&self) -> Result<Option<DemographicSummary>, PalikaError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            r#"SELECT total_population, male_population, female_population,
                      total_households, literacy_rate
               FROM demographic_summary WHERE id = 1"#,
        )?;

        let mut rows = stmt.query([])?;
        let Some(row) = rows.next()? else {
            return Ok(None);
        };

        Ok(Some(DemographicSummary {
            total_population: row.get::<_, i64>(0)? as u64,
            male_population: row.get::<_, i64>(1)? as u64,
            female_population: row.get::<_, i64>(2)? as u64,
            total_households: row.get::<_, i64>(3)? as u64,
            literacy_rate: row.get(4)?,
        }))
    }

    async fn record_chart(&self, entry: &ChartEntry) -> Result<(), PalikaError> {
        let conn = self.lock()?;
        conn.execute(
            r#"INSERT INTO chart_registry (key, path, generated_at)
               VALUES (?, ?, ?)
               ON CONFLICT (key) DO UPDATE SET
                   path = excluded.path,
                   generated_at = excluded.generated_at"#,
            params![entry.key, entry.path, entry.generated_at],
        )?;
        Ok(())
    }

    async fn list_charts(&self) -> Result<Vec<ChartEntry>, PalikaError> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT key, path, generated_at FROM chart_registry ORDER BY key")?;
        let rows = stmt.query_map([], |row| {
            Ok(ChartEntry {
                key: row.get(0)?,
                path: row.get(1)?,
                generated_at: row.get(2)?,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    async fn delete_chart(&self, key: &str) -> Result<(), PalikaError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM chart_registry WHERE key = ?", params![key])?;
        Ok(())
    }

    async fn create_admin(&self, username: &str, token: &str) -> Result<(), PalikaError> {
        let conn = self.lock()?;
        conn.execute(
            r#"INSERT INTO admin_users (username, token, created_at)
               VALUES (?, ?, ?)
               ON CONFLICT (username) DO UPDATE SET token = excluded.token"#,
            params![username, token, chrono::Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use anyhow::Result;

    async fn memory_repo() -> Result<DuckDbRepository> {
        let repo = DuckDbRepository::new(":memory:")?;
        repo.init_schema().await?;
        Ok(repo)
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent_on_key() -> Result<()> {
        let repo = memory_repo().await?;

        // Seed ward 1 CEMENT_JOINED with 388, then re-seed with 400:
        // exactly one row must remain, carrying 400.
        repo.upsert_ward_count("economics/wall-material", 1, "CEMENT_JOINED", 388)
            .await?;
        repo.upsert_ward_count("economics/wall-material", 1, "CEMENT_JOINED", 400)
            .await?;

        let rows = repo.fetch_ward_counts("economics/wall-material").await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 400);
        Ok(())
    }

    #[tokio::test]
    async fn test_bulk_upsert_and_ordering() -> Result<()> {
        let repo = memory_repo().await?;
        let rows = vec![
            RawWardCount { ward: 2, category: "WOOD".into(), count: 10 },
            RawWardCount { ward: 1, category: "BAMBOO".into(), count: 5 },
        ];
        repo.upsert_ward_counts("economics/wall-material", &rows).await?;

        let fetched = repo.fetch_ward_counts("economics/wall-material").await?;
        assert_eq!(fetched.len(), 2);
        // Ordered by ward first
        assert_eq!(fetched[0].ward, 1);
        assert_eq!(fetched[1].ward, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_bulk_upsert_rolls_back_on_failure() -> Result<()> {
        let repo = memory_repo().await?;
        let rows = vec![
            RawWardCount { ward: 1, category: "WOOD".into(), count: 10 },
            // Binds as -1 through the i64 parameter and trips the
            // `"count" >= 0` CHECK constraint mid-batch.
            RawWardCount { ward: 2, category: "BAMBOO".into(), count: u64::MAX },
        ];

        let err = repo.upsert_ward_counts("economics/wall-material", &rows).await;
        assert!(err.is_err());

        // All-or-nothing: the valid first row must not have persisted.
        let fetched = repo.fetch_ward_counts("economics/wall-material").await?;
        assert!(fetched.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_summary_absent_then_present() -> Result<()> {
        let repo = memory_repo().await?;
        assert!(repo.fetch_summary().await?.is_none());

        let summary = DemographicSummary {
            total_population: 41555,
            male_population: 20124,
            female_population: 21431,
            total_households: 9256,
            literacy_rate: 76.3,
        };
        repo.upsert_summary(&summary).await?;
        // Upsert again with the same key: still a single singleton row.
        repo.upsert_summary(&summary).await?;

        let fetched = repo
            .fetch_summary()
            .await?
            .ok_or_else(|| anyhow::anyhow!("summary missing after seed"))?;
        assert_eq!(fetched.total_population, 41555);
        Ok(())
    }

    #[tokio::test]
    async fn test_chart_registry_roundtrip() -> Result<()> {
        let repo = memory_repo().await?;
        let entry = ChartEntry {
            key: "economics_wall-material_pie".into(),
            path: "charts/economics_wall-material_pie.svg".into(),
            generated_at: "2026-08-27T00:00:00Z".into(),
        };
        repo.record_chart(&entry).await?;
        repo.record_chart(&entry).await?; // regeneration overwrites

        let charts = repo.list_charts().await?;
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0], entry);

        repo.delete_chart(&entry.key).await?;
        assert!(repo.list_charts().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_unknown_section_is_empty() -> Result<()> {
        let repo = memory_repo().await?;
        let rows = repo.fetch_ward_counts("social/literacy").await?;
        assert!(rows.is_empty());
        Ok(())
    }
}
