// palika-core/src/application/processors/summary.rs

// Processor for the municipality-wide demographic summary singleton. No
// ward dimension here: the narrative leans on the derived ratios instead.

use async_trait::async_trait;
use serde_json::json;

use crate::application::processors::SectionProcessor;
use crate::domain::aggregate::CategoryAggregate;
use crate::domain::error::DomainError;
use crate::domain::locale::{format_nepali_percent, group_nepali, to_nepali_digits};
use crate::domain::profile::DemographicSummary;
use crate::domain::report::{PdfSection, TableBlock};
use crate::error::PalikaError;
use crate::infrastructure::charts::{ChartKind, ChartService};
use crate::ports::repository::Repository;

pub const SUMMARY_KEY: &str = "demographics/summary";

pub struct SummarySection;

impl SummarySection {
    async fn fetch(&self, repo: &dyn Repository) -> Result<DemographicSummary, PalikaError> {
        repo.fetch_summary()
            .await?
            .ok_or_else(|| DomainError::NoData(SUMMARY_KEY.to_string()).into())
    }

    fn narrative(&self, s: &DemographicSummary) -> Vec<String> {
        vec![
            format!(
                "यस नगरपालिकाको कुल जनसंख्या {} रहेको छ, जसमध्ये पुरुष {} र महिला {} छन्। \
                 कुल घरधुरी सङ्ख्या {} रहेको छ।",
                group_nepali(s.total_population),
                group_nepali(s.male_population),
                group_nepali(s.female_population),
                group_nepali(s.total_households),
            ),
            format!(
                "लैङ्गिक अनुपात प्रति १०० महिलामा {} पुरुष रहेको छ भने औसत परिवार आकार {} जना छ। \
                 साक्षरता दर {} प्रतिशत रहेको छ।",
                format_nepali_percent(s.sex_ratio()),
                to_nepali_digits(&format!("{:.1}", s.average_family_size())),
                format_nepali_percent(s.literacy_rate),
            ),
        ]
    }

    fn indicator_table(&self, s: &DemographicSummary) -> TableBlock {
        TableBlock {
            caption_ne: "जनसांख्यिक सारांश".to_string(),
            caption_en: "Demographic summary".to_string(),
            header: vec!["सूचक".to_string(), "मान".to_string()],
            rows: vec![
                vec!["कुल जनसंख्या".to_string(), group_nepali(s.total_population)],
                vec!["पुरुष".to_string(), group_nepali(s.male_population)],
                vec!["महिला".to_string(), group_nepali(s.female_population)],
                vec!["कुल घरधुरी".to_string(), group_nepali(s.total_households)],
                vec![
                    "लैङ्गिक अनुपात".to_string(),
                    format_nepali_percent(s.sex_ratio()),
                ],
                vec![
                    "औसत परिवार आकार".to_string(),
                    to_nepali_digits(&format!("{:.1}", s.average_family_size())),
                ],
                vec![
                    "साक्षरता दर (%)".to_string(),
                    format_nepali_percent(s.literacy_rate),
                ],
            ],
            number: None,
        }
    }
}

#[async_trait]
impl SectionProcessor for SummarySection {
    fn key(&self) -> String {
        SUMMARY_KEY.to_string()
    }

    fn title_en(&self) -> &str {
        "Demographic summary"
    }

    fn title_ne(&self) -> &str {
        "जनसांख्यिक सारांश"
    }

    /// Flat JSON of the stored scalars plus the derived ratios. Ratios are
    /// recomputed here, never read from storage.
    async fn get_data(&self, repo: &dyn Repository) -> Result<serde_json::Value, PalikaError> {
        let s = self.fetch(repo).await?;
        Ok(json!({
            "section": SUMMARY_KEY,
            "total_population": s.total_population,
            "male_population": s.male_population,
            "female_population": s.female_population,
            "total_households": s.total_households,
            "sex_ratio": s.sex_ratio(),
            "average_family_size": s.average_family_size(),
            "literacy_rate": s.literacy_rate,
        }))
    }

    async fn process_for_pdf(
        &self,
        repo: &dyn Repository,
        charts: &ChartService,
    ) -> Result<PdfSection, PalikaError> {
        let s = self.fetch(repo).await?;

        let total = s.male_population + s.female_population;
        let gender_split = vec![
            CategoryAggregate {
                code: "MALE",
                label_en: "Male",
                label_ne: "पुरुष",
                count: s.male_population,
                percentage: crate::domain::aggregate::percentage_of(s.male_population, total),
            },
            CategoryAggregate {
                code: "FEMALE",
                label_en: "Female",
                label_ne: "महिला",
                count: s.female_population,
                percentage: crate::domain::aggregate::percentage_of(s.female_population, total),
            },
        ];

        let mut section = PdfSection::new(SUMMARY_KEY, self.title_en(), self.title_ne());
        section.narrative = self.narrative(&s);
        section.tables.push(self.indicator_table(&s));
        section.figures.push(
            charts
                .generate(SUMMARY_KEY, ChartKind::Pie, "लैङ्गिक संरचना", &gender_split)
                .await?,
        );

        Ok(section)
    }
}
