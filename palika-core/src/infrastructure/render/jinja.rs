// palika-core/src/infrastructure/render/jinja.rs

// Bridge between the structured report tree and the HTML the browser (or the
// PDF engine) receives. The templates are embedded in the crate; the two
// registered filters keep numeral localization out of the aggregation code.

use minijinja::{Environment, value::Value};

use crate::domain::locale::to_nepali_digits;
use crate::domain::report::{PdfSection, ReportDocument};
use crate::infrastructure::error::InfrastructureError;

const REPORT_TEMPLATE: &str = include_str!("../../../templates/report.html");
const SECTION_TEMPLATE: &str = include_str!("../../../templates/section.html");

pub struct ReportRenderer {
    env: Environment<'static>,
}

impl ReportRenderer {
    pub fn new() -> Result<Self, InfrastructureError> {
        let mut env = Environment::new();

        // {{ value | nepali }} — stringify anything, then swap the digits.
        env.add_filter("nepali", |value: Value| -> String {
            to_nepali_digits(&value.to_string())
        });

        // {{ value | pct }} — two-decimal percentage, Nepali digits.
        env.add_filter("pct", |value: f64| -> String {
            to_nepali_digits(&format!("{value:.2}"))
        });

        env.add_template("report", REPORT_TEMPLATE)?;
        env.add_template("section", SECTION_TEMPLATE)?;

        Ok(Self { env })
    }

    pub fn render_report(&self, doc: &ReportDocument) -> Result<String, InfrastructureError> {
        let tmpl = self.env.get_template("report")?;
        Ok(tmpl.render(doc)?)
    }

    pub fn render_section(&self, section: &PdfSection) -> Result<String, InfrastructureError> {
        let tmpl = self.env.get_template("section")?;
        Ok(tmpl.render(section)?)
    }

    /// Render an ad-hoc template string against a JSON context. Only the
    /// filter tests need this; the real flows go through the embedded
    /// templates.
    #[cfg(test)]
    fn render_str(
        &self,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String, InfrastructureError> {
        Ok(self.env.render_str(template, context)?)
    }
}
