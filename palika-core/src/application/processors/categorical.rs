// palika-core/src/application/processors/categorical.rs

// The one processor implementation shared by every ward-indexed section.
// The legacy flows duplicated ward totals and percentage-of-total per
// domain; here the domain enum is the only thing that varies.

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::application::processors::SectionProcessor;
use crate::domain::aggregate::{WardCount, WardDistribution};
use crate::domain::error::DomainError;
use crate::domain::locale::{format_nepali_percent, group_nepali, to_nepali_digits};
use crate::domain::profile::Category;
use crate::domain::report::{PdfSection, TableBlock};
use crate::error::PalikaError;
use crate::infrastructure::charts::{ChartKind, ChartService};
use crate::ports::repository::Repository;

pub struct CategoricalSection<C: Category> {
    title_en: &'static str,
    title_ne: &'static str,
    /// Counting unit for the narrative: "घरधुरी" (households),
    /// "जनसंख्या" (persons), "सेवाग्राही" (service users)...
    unit_ne: &'static str,
    chart_kind: ChartKind,
    _marker: std::marker::PhantomData<C>,
}

impl<C: Category> CategoricalSection<C> {
    pub fn new(title_en: &'static str, title_ne: &'static str, unit_ne: &'static str) -> Self {
        Self {
            title_en,
            title_ne,
            unit_ne,
            chart_kind: ChartKind::Pie,
            _marker: std::marker::PhantomData,
        }
    }

    /// Override the default pie chart; sections comparing absolute counts
    /// read better as bars.
    pub fn with_chart(mut self, kind: ChartKind) -> Self {
        self.chart_kind = kind;
        self
    }

    /// Fetch + parse + aggregate. `NoData` when the section was never
    /// seeded; an unknown category code in storage is a hard error.
    async fn distribution(
        &self,
        repo: &dyn Repository,
    ) -> Result<WardDistribution<C>, PalikaError> {
        let raw = repo.fetch_ward_counts(&self.key()).await?;
        if raw.is_empty() {
            return Err(DomainError::NoData(self.key()).into());
        }

        let mut rows = Vec::with_capacity(raw.len());
        for r in raw {
            rows.push(WardCount {
                ward: r.ward,
                category: C::from_code(&r.category)?,
                count: r.count,
            });
        }
        debug!(section = %self.key(), rows = rows.len(), "Aggregating ward counts");
        Ok(WardDistribution::from_rows(rows))
    }

    fn narrative(&self, dist: &WardDistribution<C>) -> Vec<String> {
        let total = dist.total();
        let mut paragraphs = Vec::new();

        let mut lead = format!(
            "यस नगरपालिकामा {} अन्तर्गत जम्मा {} {} रहेका छन्।",
            self.title_ne,
            group_nepali(total),
            self.unit_ne,
        );

        if let Some((dominant, count)) = dist.dominant() {
            if count > 0 {
                lead.push_str(&format!(
                    " सबैभन्दा धेरै {} ({} अर्थात् {} प्रतिशत) रहेको देखिन्छ।",
                    dominant.label_ne(),
                    group_nepali(count),
                    format_nepali_percent(dist.percentage(dominant)),
                ));
            }
        }
        paragraphs.push(lead);

        let ward_count = dist.ward_data().len();
        paragraphs.push(format!(
            "तथ्याङ्क {} वटा वडाबाट सङ्कलन गरिएको हो।",
            to_nepali_digits(&ward_count.to_string()),
        ));

        paragraphs
    }

    fn ward_table(&self, dist: &WardDistribution<C>) -> TableBlock {
        let mut header = vec!["वडा नं.".to_string()];
        header.extend(C::all().iter().map(|c| c.label_ne().to_string()));
        header.push("जम्मा".to_string());

        let mut rows: Vec<Vec<String>> = dist
            .ward_data()
            .iter()
            .map(|w| {
                let mut row = vec![to_nepali_digits(&w.ward.to_string())];
                row.extend(w.counts.iter().map(|c| group_nepali(*c)));
                row.push(group_nepali(w.total));
                row
            })
            .collect();

        // Municipality totals as the closing row.
        let mut total_row = vec!["जम्मा".to_string()];
        total_row.extend(C::all().iter().map(|c| group_nepali(dist.category_total(*c))));
        total_row.push(group_nepali(dist.total()));
        rows.push(total_row);

        TableBlock {
            caption_ne: format!("वडागत {}", self.title_ne),
            caption_en: format!("{} by ward", self.title_en),
            header,
            rows,
            number: None,
        }
    }
}

#[async_trait]
impl<C: Category> SectionProcessor for CategoricalSection<C> {
    fn key(&self) -> String {
        C::section_key()
    }

    fn title_en(&self) -> &str {
        self.title_en
    }

    fn title_ne(&self) -> &str {
        self.title_ne
    }

    async fn get_data(&self, repo: &dyn Repository) -> Result<serde_json::Value, PalikaError> {
        let dist = self.distribution(repo).await?;
        Ok(json!({
            "section": self.key(),
            "title_en": self.title_en,
            "title_ne": self.title_ne,
            "total": dist.total(),
            "municipality_data": dist.municipality_data(),
            "ward_data": dist.ward_data(),
        }))
    }

    async fn process_for_pdf(
        &self,
        repo: &dyn Repository,
        charts: &ChartService,
    ) -> Result<PdfSection, PalikaError> {
        let dist = self.distribution(repo).await?;
        let municipality = dist.municipality_data();

        let caption = match self.chart_kind {
            ChartKind::Pie => format!("{} (प्रतिशतमा)", self.title_ne),
            ChartKind::Bar => self.title_ne.to_string(),
        };

        let mut section = PdfSection::new(self.key(), self.title_en, self.title_ne);
        section.narrative = self.narrative(&dist);
        section.tables.push(self.ward_table(&dist));
        section.figures.push(
            charts
                .generate(&self.key(), self.chart_kind, &caption, &municipality)
                .await?,
        );

        Ok(section)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::profile::WallMaterial;
    use crate::infrastructure::adapters::DuckDbRepository;
    use anyhow::Result;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn wall_section() -> CategoricalSection<WallMaterial> {
        CategoricalSection::new("House wall material", "घरको गारोको किसिम", "घरधुरी")
    }

    async fn seeded_repo() -> Result<Arc<DuckDbRepository>> {
        let repo = Arc::new(DuckDbRepository::new(":memory:")?);
        repo.init_schema().await?;
        repo.upsert_ward_count("economics/wall-material", 1, "CEMENT_JOINED", 388)
            .await?;
        repo.upsert_ward_count("economics/wall-material", 1, "MUD_JOINED", 112)
            .await?;
        repo.upsert_ward_count("economics/wall-material", 2, "CEMENT_JOINED", 240)
            .await?;
        Ok(repo)
    }

    #[tokio::test]
    async fn test_get_data_shape() -> Result<()> {
        let repo = seeded_repo().await?;
        let data = wall_section().get_data(repo.as_ref()).await?;

        assert_eq!(data["section"], "economics/wall-material");
        assert_eq!(data["total"], 740);
        let municipality = data["municipality_data"]
            .as_array()
            .ok_or_else(|| anyhow::anyhow!("municipality_data missing"))?;
        assert_eq!(municipality.len(), WallMaterial::all().len());
        assert_eq!(data["ward_data"].as_array().map(|w| w.len()), Some(2));
        Ok(())
    }

    #[tokio::test]
    async fn test_no_rows_is_no_data() -> Result<()> {
        let repo = Arc::new(DuckDbRepository::new(":memory:")?);
        repo.init_schema().await?;

        let err = wall_section().get_data(repo.as_ref()).await;
        match err {
            Err(e) if e.is_no_data() => Ok(()),
            other => anyhow::bail!("expected NoData, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unknown_stored_code_is_hard_error() -> Result<()> {
        let repo = Arc::new(DuckDbRepository::new(":memory:")?);
        repo.init_schema().await?;
        repo.upsert_ward_count("economics/wall-material", 1, "CONCRETE", 10)
            .await?;

        let err = wall_section().get_data(repo.as_ref()).await;
        assert!(matches!(
            err,
            Err(PalikaError::Domain(DomainError::UnknownCategory { .. }))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_process_for_pdf_blocks() -> Result<()> {
        let repo = seeded_repo().await?;
        let dir = tempdir()?;
        let charts = ChartService::new(dir.path(), repo.clone());

        let section = wall_section().process_for_pdf(repo.as_ref(), &charts).await?;

        assert!(!section.narrative.is_empty());
        // Narrative quotes the dominant category in Nepali
        assert!(section.narrative[0].contains("सिमेन्टको जोडाइ"));
        assert_eq!(section.tables.len(), 1);
        assert_eq!(section.figures.len(), 1);
        // Table: 2 ward rows + totals row
        assert_eq!(section.tables[0].rows.len(), 3);
        assert!(dir.path().join(&section.figures[0].path).exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_bar_chart_sections_emit_bar_artifacts() -> Result<()> {
        let repo = seeded_repo().await?;
        let dir = tempdir()?;
        let charts = ChartService::new(dir.path(), repo.clone());

        let section = wall_section()
            .with_chart(ChartKind::Bar)
            .process_for_pdf(repo.as_ref(), &charts)
            .await?;

        assert!(section.figures[0].key.ends_with("_bar"));
        assert!(dir.path().join(&section.figures[0].path).exists());
        Ok(())
    }
}
