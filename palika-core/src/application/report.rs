// palika-core/src/application/report.rs

// Full-report assembly: walk the registered sections in order, number them
// positionally, accumulate the running table/figure counters and emit the
// table of contents. Sections without data are skipped with a warning; the
// profile chapters that were seeded still come out.

use tracing::{info, warn};

use crate::application::manager::DomainManager;
use crate::domain::locale::format_nepali_date;
use crate::domain::profile::Municipality;
use crate::domain::report::{ReportDocument, TocEntry};
use crate::error::PalikaError;
use crate::infrastructure::charts::ChartService;
use crate::ports::repository::Repository;

pub struct ReportBuilder {
    /// Chapter under which the statistical sections are numbered. The
    /// profile convention reserves chapters 1-2 for the introduction, so
    /// sections start at 3.1.
    pub chapter: u32,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self { chapter: 3 }
    }
}

impl ReportBuilder {
    pub async fn assemble(
        &self,
        manager: &DomainManager,
        repo: &dyn Repository,
        charts: &ChartService,
        municipality: &Municipality,
    ) -> Result<ReportDocument, PalikaError> {
        let mut sections = Vec::new();
        let mut toc = Vec::new();
        let mut section_no = 0usize;
        let mut table_no = 0usize;
        let mut figure_no = 0usize;

        for processor in manager.sections() {
            let mut section = match processor.process_for_pdf(repo, charts).await {
                Ok(section) => section,
                Err(e) if e.is_no_data() => {
                    warn!(key = %processor.key(), "Section has no data, skipped in full report");
                    continue;
                }
                // Processor failures abort the whole report; a half-report
                // with silently missing chapters is worse than a 500.
                Err(e) => return Err(e),
            };

            section_no += 1;
            let number = format!("{}.{}", self.chapter, section_no);
            section.number = Some(number.clone());

            for table in &mut section.tables {
                table_no += 1;
                table.number = Some(format!("{}.{}", self.chapter, table_no));
            }
            for figure in &mut section.figures {
                figure_no += 1;
                figure.number = Some(format!("{}.{}", self.chapter, figure_no));
            }

            toc.push(TocEntry {
                number,
                title_ne: section.title_ne.clone(),
                title_en: section.title_en.clone(),
                table_count: table_no,
                figure_count: figure_no,
            });
            sections.push(section);
        }

        info!(
            sections = section_no,
            tables = table_no,
            figures = figure_no,
            "Report assembled"
        );

        Ok(ReportDocument {
            municipality_ne: municipality.name_ne.clone(),
            municipality_en: municipality.name_en.clone(),
            generated_on: format_nepali_date(chrono::Local::now().date_naive()),
            toc,
            sections,
            total_tables: table_no,
            total_figures: figure_no,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::profile::DemographicSummary;
    use crate::infrastructure::adapters::DuckDbRepository;
    use anyhow::Result;
    use std::sync::Arc;
    use tempfile::tempdir;

    async fn repo_with_two_sections() -> Result<Arc<DuckDbRepository>> {
        let repo = Arc::new(DuckDbRepository::new(":memory:")?);
        repo.init_schema().await?;
        repo.upsert_summary(&DemographicSummary {
            total_population: 41555,
            male_population: 20124,
            female_population: 21431,
            total_households: 9256,
            literacy_rate: 76.3,
        })
        .await?;
        repo.upsert_ward_count("economics/wall-material", 1, "CEMENT_JOINED", 388)
            .await?;
        Ok(repo)
    }

    #[tokio::test]
    async fn test_assembly_numbers_positionally() -> Result<()> {
        let repo = repo_with_two_sections().await?;
        let dir = tempdir()?;
        let charts = ChartService::new(dir.path(), repo.clone());
        let manager = DomainManager::with_all_sections();
        let municipality = Municipality {
            name_en: "Sundar Municipality".into(),
            name_ne: "सुन्दर नगरपालिका".into(),
            ward_count: 12,
        };

        let doc = ReportBuilder::default()
            .assemble(&manager, repo.as_ref(), &charts, &municipality)
            .await?;

        // Only the two seeded sections survive; the rest are skipped.
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].number.as_deref(), Some("3.1"));
        assert_eq!(doc.sections[1].number.as_deref(), Some("3.2"));
        // Table numbering runs through the chapter, not per section.
        assert_eq!(doc.sections[0].tables[0].number.as_deref(), Some("3.1"));
        assert_eq!(doc.sections[1].tables[0].number.as_deref(), Some("3.2"));

        assert_eq!(doc.toc.len(), 2);
        assert_eq!(doc.total_tables, 2);
        assert_eq!(doc.total_figures, 2);
        // Running counters accumulate down the ToC
        assert_eq!(doc.toc[0].table_count, 1);
        assert_eq!(doc.toc[1].table_count, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_database_yields_empty_report() -> Result<()> {
        let repo = Arc::new(DuckDbRepository::new(":memory:")?);
        repo.init_schema().await?;
        let dir = tempdir()?;
        let charts = ChartService::new(dir.path(), repo.clone());
        let manager = DomainManager::with_all_sections();
        let municipality = Municipality {
            name_en: "X".into(),
            name_ne: "एक्स".into(),
            ward_count: 5,
        };

        let doc = ReportBuilder::default()
            .assemble(&manager, repo.as_ref(), &charts, &municipality)
            .await?;
        assert!(doc.sections.is_empty());
        assert_eq!(doc.total_tables, 0);
        Ok(())
    }
}
