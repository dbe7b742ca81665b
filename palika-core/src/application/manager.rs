// palika-core/src/application/manager.rs

// Ordered registry mapping section keys to their processors. The order is
// the report order; `register` preserves insertion order so a full report
// always reads demographics first, governance last.

use std::sync::Arc;
use tracing::warn;

use crate::application::processors::{
    CategoricalSection, SectionProcessor, SummarySection,
};
use crate::domain::error::DomainError;
use crate::domain::profile::{
    Gender, Literacy, RoadAccess, ServiceKind, WallMaterial, WaterSource,
};
use crate::domain::report::PdfSection;
use crate::error::PalikaError;
use crate::infrastructure::charts::{ChartKind, ChartService};
use crate::ports::repository::Repository;

pub struct DomainManager {
    sections: Vec<Arc<dyn SectionProcessor>>,
}

impl DomainManager {
    pub fn empty() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    pub fn register(&mut self, processor: Arc<dyn SectionProcessor>) {
        self.sections.push(processor);
    }

    /// The full profile: every configured section, in report order.
    pub fn with_all_sections() -> Self {
        let mut manager = Self::empty();
        manager.register(Arc::new(SummarySection));
        manager.register(Arc::new(CategoricalSection::<Gender>::new(
            "Ward population by gender",
            "वडागत लिङ्ग अनुसार जनसंख्या",
            "जनसंख्या",
        )));
        manager.register(Arc::new(CategoricalSection::<WallMaterial>::new(
            "House wall material",
            "घरको गारोको किसिम",
            "घरधुरी",
        )));
        manager.register(Arc::new(CategoricalSection::<Literacy>::new(
            "Literacy status (5 years and above)",
            "साक्षरताको अवस्था (५ वर्षमाथि)",
            "जनसंख्या",
        )));
        manager.register(Arc::new(CategoricalSection::<WaterSource>::new(
            "Main source of drinking water",
            "खानेपानीको मुख्य स्रोत",
            "घरधुरी",
        )));
        manager.register(Arc::new(CategoricalSection::<RoadAccess>::new(
            "Road access to house",
            "घरसम्म पुग्ने सडकको अवस्था",
            "घरधुरी",
        )));
        // Service uptake compares absolute volumes across kinds; a bar
        // chart reads better than percentage slices here.
        manager.register(Arc::new(
            CategoricalSection::<ServiceKind>::new(
                "Ward office services used",
                "वडा कार्यालयबाट लिइएका सेवाहरू",
                "सेवाग्राही",
            )
            .with_chart(ChartKind::Bar),
        ));
        manager
    }

    /// Registered keys, in report order.
    pub fn get_available_categories(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.key()).collect()
    }

    pub fn get(&self, key: &str) -> Option<&Arc<dyn SectionProcessor>> {
        self.sections.iter().find(|s| s.key() == key)
    }

    pub fn sections(&self) -> &[Arc<dyn SectionProcessor>] {
        &self.sections
    }

    /// Dispatch one section for PDF processing. Unknown keys come back as
    /// the UnregisteredSection sentinel; the caller decides the response.
    pub async fn process_category_for_pdf(
        &self,
        key: &str,
        repo: &dyn Repository,
        charts: &ChartService,
    ) -> Result<PdfSection, PalikaError> {
        let Some(processor) = self.get(key) else {
            warn!(key, "Dispatch on unregistered section");
            return Err(DomainError::UnregisteredSection(key.to_string()).into());
        };
        processor.process_for_pdf(repo, charts).await
    }
}

impl Default for DomainManager {
    fn default() -> Self {
        Self::with_all_sections()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::DuckDbRepository;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn test_registry_order_and_keys() {
        let manager = DomainManager::with_all_sections();
        let keys = manager.get_available_categories();

        assert_eq!(keys.len(), 7);
        assert_eq!(keys[0], "demographics/summary");
        assert_eq!(keys[1], "demographics/population-by-gender");
        assert_eq!(keys.last().map(String::as_str), Some("governance/ward-services"));
    }

    #[test]
    fn test_get_unknown_key() {
        let manager = DomainManager::with_all_sections();
        assert!(manager.get("economics/wall-material").is_some());
        assert!(manager.get("economics/roof-material").is_none());
    }

    #[tokio::test]
    async fn test_dispatch_unregistered_is_sentinel() -> Result<()> {
        let repo = DuckDbRepository::new(":memory:")?;
        repo.init_schema().await?;
        let dir = tempdir()?;
        let charts = ChartService::new(dir.path(), std::sync::Arc::new(DuckDbRepository::new(":memory:")?));

        let manager = DomainManager::with_all_sections();
        let err = manager
            .process_category_for_pdf("nope/unknown", &repo, &charts)
            .await;

        assert!(matches!(
            err,
            Err(PalikaError::Domain(DomainError::UnregisteredSection(_)))
        ));
        Ok(())
    }
}
